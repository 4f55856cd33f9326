/// Particle field tuning constants.
///
/// Units: positions are CSS pixels, velocities are pixels per reference
/// frame (1/60 s), times are seconds.
// Population
pub const AREA_PER_PARTICLE: f32 = 8000.0; // viewport px² per particle
pub const MAX_PARTICLES: usize = 400; // hard cap for large displays

// Depth
pub const DEPTH_MIN: f32 = 0.1;
pub const DEPTH_MAX: f32 = 1.0;
pub const FAR_TIER_MAX_DEPTH: f32 = 0.3; // depth < this is the far tier
pub const MID_TIER_MAX_DEPTH: f32 = 0.7; // depth < this is the mid tier
pub const DEPTH_REST_LOW: f32 = 0.3; // resting band particles drift back into
pub const DEPTH_REST_HIGH: f32 = 0.8;
pub const DEPTH_GRAVITY: f32 = 0.0002; // depth-velocity pull per frame outside the band

// Size ranges per tier (radius in px): [min, max)
pub const FAR_SIZE_RANGE: [f32; 2] = [0.5, 2.0];
pub const MID_SIZE_RANGE: [f32; 2] = [1.5, 4.5];
pub const NEAR_SIZE_RANGE: [f32; 2] = [3.0, 9.0];
pub const MIN_DRAW_SIZE: f32 = 0.25; // smaller circles are not painted

// Blur
pub const BLUR_SCALE: f32 = 3.0; // shadow blur at depth 0 (farthest)

// Initial motion
pub const INITIAL_SPEED_SPAN: f32 = 0.3; // vx,vy = (r - 0.5) * span * depth
pub const INITIAL_DEPTH_SPEED_SPAN: f32 = 0.01;

// Size pulse
pub const PULSE_AMPLITUDE: f32 = 0.08; // fraction of the radius
pub const PULSE_HZ: f32 = 0.25;

// Pointer interaction
pub const REPULSION_RADIUS: f32 = 200.0; // px, independent of viewport size
pub const REPULSION_STRENGTH: f32 = 0.5; // impulse at distance 0 for depth 1
pub const DEPTH_JITTER: f32 = 0.001; // random z nudge range near the pointer

// Friction (per reference frame)
pub const FRICTION: f32 = 0.99;
pub const DEPTH_FRICTION: f32 = 0.98;

// Timing
pub const REFERENCE_FPS: f32 = 60.0;
pub const MAX_DT_SEC: f32 = 0.1; // clamp for resumed or throttled tabs

// DOM
pub const DEFAULT_CANVAS_ID: &str = "particle-field";
