// Render pass for the particle field, independent of the drawing backend.

use super::field::{Particle, ParticleField};
use super::palette::{self, Rgba};
use crate::constants::MIN_DRAW_SIZE;
use glam::Vec2;

/// Minimal 2D drawing target. The web build implements it on top of a
/// `CanvasRenderingContext2d`.
pub trait Surface {
    fn clear(&mut self, size: Vec2);
    /// Linear gradient from the top-left to the bottom-right corner.
    fn fill_diagonal_gradient(&mut self, size: Vec2, stops: &[(f32, Rgba)]);
    /// Filled circle with a soft shadow of `blur` pixels (0 for none).
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba, blur: f32);
}

/// Clear, paint the background, then the particles in slice order. Returns
/// the number of circles drawn.
pub fn paint_particles<S: Surface + ?Sized>(
    surface: &mut S,
    particles: &[Particle],
    size: Vec2,
    alert: bool,
) -> usize {
    surface.clear(size);
    surface.fill_diagonal_gradient(size, palette::gradient_stops(alert));
    let mut drawn = 0;
    for p in particles {
        if p.size < MIN_DRAW_SIZE {
            continue;
        }
        let color = palette::particle_color(p.tone, alert);
        surface.fill_circle(p.position, p.size, color, p.blur.max(0.0));
        drawn += 1;
    }
    drawn
}

/// Paint a field; its particles are kept farthest first so nearer ones
/// occlude.
#[inline]
pub fn paint_field<S: Surface + ?Sized>(
    surface: &mut S,
    field: &ParticleField,
    alert: bool,
) -> usize {
    paint_particles(surface, field.particles(), field.size(), alert)
}

/// Tick and paint one frame. Without a surface the whole frame is skipped
/// and the field does not advance. Returns the number of circles drawn.
pub fn tick_and_paint<S: Surface + ?Sized>(
    field: &mut ParticleField,
    surface: Option<&mut S>,
    dt_sec: f32,
    pointer: Option<Vec2>,
    alert: bool,
) -> Option<usize> {
    let surface = surface?;
    field.tick(dt_sec, pointer, alert);
    Some(paint_field(surface, field, alert))
}
