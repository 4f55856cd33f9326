pub mod alert;
pub mod field;
pub mod paint;
pub mod palette;
pub mod schedule;

pub use alert::*;
pub use field::*;
pub use paint::*;
pub use palette::Rgba;
pub use schedule::*;
