use super::palette::PALETTE_LEN;
use crate::constants::*;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::Rng;
use std::f32::consts::TAU;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum FieldError {
    #[error("invalid field dimensions {width}x{height}")]
    InvalidDimensions { width: f32, height: f32 },
}

/// Size class of a particle, picked from its current depth.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DepthTier {
    Far,
    Mid,
    Near,
}

impl DepthTier {
    #[inline]
    pub fn of(depth: f32) -> Self {
        if depth < FAR_TIER_MAX_DEPTH {
            DepthTier::Far
        } else if depth < MID_TIER_MAX_DEPTH {
            DepthTier::Mid
        } else {
            DepthTier::Near
        }
    }

    #[inline]
    pub fn size_range(self) -> [f32; 2] {
        match self {
            DepthTier::Far => FAR_SIZE_RANGE,
            DepthTier::Mid => MID_SIZE_RANGE,
            DepthTier::Near => NEAR_SIZE_RANGE,
        }
    }

    /// Radius at `seed` in [0, 1) across this tier's range.
    #[inline]
    pub fn size_at(self, seed: f32) -> f32 {
        let [lo, hi] = self.size_range();
        lo + (hi - lo) * seed.clamp(0.0, 1.0)
    }
}

/// Runtime-adjustable subset of the field tuning.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldParams {
    pub max_particles: usize,
    pub area_per_particle: f32,
    pub repulsion_radius: f32,
    pub repulsion_strength: f32,
    pub friction: f32,
    pub depth_friction: f32,
    pub pulse_amplitude: f32,
    pub pulse_hz: f32,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            max_particles: MAX_PARTICLES,
            area_per_particle: AREA_PER_PARTICLE,
            repulsion_radius: REPULSION_RADIUS,
            repulsion_strength: REPULSION_STRENGTH,
            friction: FRICTION,
            depth_friction: DEPTH_FRICTION,
            pulse_amplitude: PULSE_AMPLITUDE,
            pulse_hz: PULSE_HZ,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Particle {
    /// Stable across re-sorts; unique within one initialization.
    pub id: usize,
    pub position: Vec2,
    pub velocity: Vec2,
    pub depth: f32,
    pub depth_velocity: f32,
    pub size_seed: f32,
    pub size: f32,
    pub blur: f32,
    pub tone: usize,
    pub phase: f32,
}

impl Particle {
    fn spawn(id: usize, rng: &mut StdRng, width: f32, height: f32) -> Self {
        let depth = DEPTH_MIN + rng.gen::<f32>() * (DEPTH_MAX - DEPTH_MIN);
        let size_seed = rng.gen::<f32>();
        let velocity = Vec2::new(
            (rng.gen::<f32>() - 0.5) * INITIAL_SPEED_SPAN * depth,
            (rng.gen::<f32>() - 0.5) * INITIAL_SPEED_SPAN * depth,
        );
        Self {
            id,
            position: Vec2::new(rng.gen::<f32>() * width, rng.gen::<f32>() * height),
            velocity,
            depth,
            depth_velocity: (rng.gen::<f32>() - 0.5) * INITIAL_DEPTH_SPEED_SPAN,
            size_seed,
            size: DepthTier::of(depth).size_at(size_seed),
            blur: (1.0 - depth) * BLUR_SCALE,
            tone: rng.gen_range(0..PALETTE_LEN),
            phase: rng.gen_range(0.0..TAU),
        }
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }

    #[inline]
    pub fn tier(&self) -> DepthTier {
        DepthTier::of(self.depth)
    }

    /// Advance depth by one step: clamp to [DEPTH_MIN, DEPTH_MAX] with the
    /// velocity pointing back inside, then pull toward the resting band.
    pub fn integrate_depth(&mut self, step: f32) {
        self.depth += self.depth_velocity * step;
        if self.depth < DEPTH_MIN {
            self.depth = DEPTH_MIN;
            self.depth_velocity = self.depth_velocity.abs();
        } else if self.depth > DEPTH_MAX {
            self.depth = DEPTH_MAX;
            self.depth_velocity = -self.depth_velocity.abs();
        }
        if self.depth < DEPTH_REST_LOW {
            self.depth_velocity += DEPTH_GRAVITY * step;
        } else if self.depth > DEPTH_REST_HIGH {
            self.depth_velocity -= DEPTH_GRAVITY * step;
        }
    }

    fn refresh_appearance(&mut self, time_sec: f32, params: &FieldParams) {
        let wave = (TAU * params.pulse_hz * time_sec + self.phase).sin();
        let pulse = 1.0 + params.pulse_amplitude * wave;
        self.size = self.tier().size_at(self.size_seed) * pulse;
        self.blur = (1.0 - self.depth) * BLUR_SCALE;
    }
}

#[inline]
fn valid_dimensions(width: f32, height: f32) -> bool {
    width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0
}

/// Particle count for a viewport: proportional to area, at least one, capped
/// at `params.max_particles`. Invalid dimensions give zero.
pub fn particle_count(width: f32, height: f32, params: &FieldParams) -> usize {
    if !valid_dimensions(width, height) {
        return 0;
    }
    let by_area = (width * height / params.area_per_particle.max(1.0)).floor() as usize;
    by_area.clamp(1, params.max_particles.max(1))
}

/// Toroidal wrap into [0, extent).
#[inline]
pub fn wrap_coord(v: f32, extent: f32) -> f32 {
    let w = v.rem_euclid(extent);
    // rem_euclid rounds tiny negatives up to `extent`
    if w >= extent {
        0.0
    } else {
        w
    }
}

pub struct ParticleField {
    particles: Vec<Particle>,
    width: f32,
    height: f32,
    params: FieldParams,
    rng: StdRng,
    time_sec: f32,
    alert: bool,
}

impl ParticleField {
    pub fn new(
        width: f32,
        height: f32,
        params: FieldParams,
        rng: StdRng,
    ) -> Result<Self, FieldError> {
        let mut field = Self {
            particles: Vec::new(),
            width: 0.0,
            height: 0.0,
            params,
            rng,
            time_sec: 0.0,
            alert: false,
        };
        field.resize(width, height)?;
        Ok(field)
    }

    /// Discard every particle and reseed the set for a new viewport size.
    /// Invalid sizes leave the current set untouched.
    pub fn resize(&mut self, width: f32, height: f32) -> Result<(), FieldError> {
        if !valid_dimensions(width, height) {
            return Err(FieldError::InvalidDimensions { width, height });
        }
        self.width = width;
        self.height = height;
        let count = particle_count(width, height, &self.params);
        self.particles.clear();
        self.particles.reserve(count);
        for id in 0..count {
            let p = Particle::spawn(id, &mut self.rng, width, height);
            self.particles.push(p);
        }
        self.sort_by_depth();
        Ok(())
    }

    /// Advance the simulation by `dt_sec`. `pointer` is in the same pixel
    /// space as the field; `alert` is recorded for the render pass and has no
    /// effect on motion.
    pub fn tick(&mut self, dt_sec: f32, pointer: Option<Vec2>, alert: bool) {
        self.alert = alert;
        let dt = if dt_sec.is_finite() {
            dt_sec.clamp(0.0, MAX_DT_SEC)
        } else {
            0.0
        };
        let step = dt * REFERENCE_FPS;
        self.time_sec += dt;

        let Self {
            particles,
            width,
            height,
            params,
            rng,
            time_sec,
            ..
        } = self;
        let pointer = pointer.filter(|p| p.is_finite());
        let friction = params.friction.powf(step);
        let depth_friction = params.depth_friction.powf(step);
        let radius = params.repulsion_radius;

        for p in particles.iter_mut() {
            p.position += p.velocity * step;

            p.integrate_depth(step);
            p.refresh_appearance(*time_sec, params);

            p.position.x = wrap_coord(p.position.x, *width);
            p.position.y = wrap_coord(p.position.y, *height);

            if let Some(ptr) = pointer {
                let away = p.position - ptr;
                let dist = away.length();
                if dist < radius {
                    let dir = if dist > 1e-3 {
                        away / dist
                    } else {
                        Vec2::from_angle(rng.gen_range(0.0..TAU))
                    };
                    let impulse = params.repulsion_strength * (1.0 - dist / radius) * p.depth;
                    p.velocity += dir * impulse * step;
                    p.depth_velocity += (rng.gen::<f32>() - 0.5) * DEPTH_JITTER * step;
                }
            }

            p.velocity *= friction;
            p.depth_velocity *= depth_friction;
        }

        self.sort_by_depth();
    }

    /// Farthest first. Depth changes slowly, so the stable sort sees nearly
    /// ordered input.
    fn sort_by_depth(&mut self) {
        self.particles.sort_by(|a, b| a.depth.total_cmp(&b.depth));
    }

    /// Particles in paint order (farthest first).
    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Alert state seen by the latest `tick`.
    #[inline]
    pub fn alert(&self) -> bool {
        self.alert
    }

    pub fn find(&self, id: usize) -> Option<&Particle> {
        self.particles.iter().find(|p| p.id == id)
    }
}
