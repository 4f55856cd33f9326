// Colors for particles and the background gradient.
//
// Particles keep a palette index (`tone`) rather than a color, so the same
// particle maps to a base or an alert color depending on the flag passed to
// the render pass.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 1.0)
    }
}

/// CSS `rgba(...)` notation, usable directly as a canvas fill style.
impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

pub const PALETTE_LEN: usize = 5;

// Near-black dots on a light background
pub const BASE_PALETTE: [Rgba; PALETTE_LEN] = [
    Rgba::new(0, 0, 0, 0.9),
    Rgba::new(20, 20, 20, 0.8),
    Rgba::new(40, 40, 40, 0.7),
    Rgba::new(60, 60, 60, 0.6),
    Rgba::new(80, 80, 80, 0.5),
];

// Same alpha ramp in the lockdown red register
pub const ALERT_PALETTE: [Rgba; PALETTE_LEN] = [
    Rgba::new(200, 0, 0, 0.9),
    Rgba::new(180, 20, 20, 0.8),
    Rgba::new(160, 30, 30, 0.7),
    Rgba::new(140, 40, 40, 0.6),
    Rgba::new(120, 50, 50, 0.5),
];

/// Gradient stops `(offset, color)` painted from the top-left to the
/// bottom-right corner.
pub const BASE_GRADIENT: [(f32, Rgba); 3] = [
    (0.0, Rgba::opaque(0xff, 0xff, 0xff)),
    (0.5, Rgba::opaque(0xf5, 0xf5, 0xf5)),
    (1.0, Rgba::opaque(0xe0, 0xe0, 0xe0)),
];

pub const ALERT_GRADIENT: [(f32, Rgba); 3] = [
    (0.0, Rgba::opaque(0xff, 0xf5, 0xf5)),
    (0.5, Rgba::opaque(0xfd, 0xe4, 0xe4)),
    (1.0, Rgba::opaque(0xf2, 0xc4, 0xc4)),
];

#[inline]
pub fn palette(alert: bool) -> &'static [Rgba; PALETTE_LEN] {
    if alert {
        &ALERT_PALETTE
    } else {
        &BASE_PALETTE
    }
}

/// Color for a particle tone; out-of-range tones wrap.
#[inline]
pub fn particle_color(tone: usize, alert: bool) -> Rgba {
    palette(alert)[tone % PALETTE_LEN]
}

#[inline]
pub fn gradient_stops(alert: bool) -> &'static [(f32, Rgba)] {
    if alert {
        &ALERT_GRADIENT
    } else {
        &BASE_GRADIENT
    }
}
