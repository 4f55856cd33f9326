// Host-side tests for the render pass, using a surface that records calls.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core {
    pub mod palette {
        include!("../src/core/palette.rs");
    }
    pub mod field {
        include!("../src/core/field.rs");
    }
    pub mod paint {
        include!("../src/core/paint.rs");
    }
}

use crate::core::field::*;
use crate::core::paint::*;
use crate::core::palette::*;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Debug, Clone, PartialEq)]
enum Op {
    Clear(Vec2),
    Gradient(Vec<(f32, Rgba)>),
    Circle {
        center: Vec2,
        radius: f32,
        color: Rgba,
        blur: f32,
    },
}

#[derive(Default)]
struct RecordingSurface {
    ops: Vec<Op>,
}

impl RecordingSurface {
    fn circles(&self) -> impl Iterator<Item = (Vec2, f32, Rgba, f32)> + '_ {
        self.ops.iter().filter_map(|op| match op {
            Op::Circle {
                center,
                radius,
                color,
                blur,
            } => Some((*center, *radius, *color, *blur)),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, size: Vec2) {
        self.ops.push(Op::Clear(size));
    }

    fn fill_diagonal_gradient(&mut self, _size: Vec2, stops: &[(f32, Rgba)]) {
        self.ops.push(Op::Gradient(stops.to_vec()));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba, blur: f32) {
        self.ops.push(Op::Circle {
            center,
            radius,
            color,
            blur,
        });
    }
}

fn ticked_field(seed: u64) -> ParticleField {
    let mut field = ParticleField::new(
        1280.0,
        720.0,
        FieldParams::default(),
        StdRng::seed_from_u64(seed),
    )
    .unwrap();
    for _ in 0..20 {
        field.tick(1.0 / 60.0, Some(Vec2::new(640.0, 360.0)), false);
    }
    field
}

fn particle(depth: f32, size: f32, tone: usize) -> Particle {
    Particle {
        id: 0,
        position: Vec2::new(10.0, 20.0),
        velocity: Vec2::ZERO,
        depth,
        depth_velocity: 0.0,
        size_seed: 0.5,
        size,
        blur: (1.0 - depth) * 3.0,
        tone,
        phase: 0.0,
    }
}

#[test]
fn clears_then_paints_background_then_particles() {
    let field = ticked_field(1);
    let mut surface = RecordingSurface::default();
    let drawn = paint_field(&mut surface, &field, false);

    assert_eq!(surface.ops[0], Op::Clear(Vec2::new(1280.0, 720.0)));
    assert_eq!(surface.ops[1], Op::Gradient(BASE_GRADIENT.to_vec()));
    assert_eq!(drawn, surface.circles().count());
    assert_eq!(drawn, field.len());
}

#[test]
fn particles_are_painted_back_to_front() {
    let field = ticked_field(2);
    let mut surface = RecordingSurface::default();
    paint_field(&mut surface, &field, false);

    // blur falls as depth rises, so back-to-front means non-increasing blur
    let blurs: Vec<f32> = surface.circles().map(|(_, _, _, blur)| blur).collect();
    assert!(blurs.len() > 1);
    assert!(blurs.windows(2).all(|w| w[0] >= w[1] - 1e-6));
}

#[test]
fn alert_switches_particle_and_background_palettes() {
    let field = ticked_field(3);

    let mut calm = RecordingSurface::default();
    paint_field(&mut calm, &field, false);
    assert!(calm.circles().all(|(_, _, c, _)| BASE_PALETTE.contains(&c)));

    let mut alarmed = RecordingSurface::default();
    paint_field(&mut alarmed, &field, true);
    assert_eq!(alarmed.ops[1], Op::Gradient(ALERT_GRADIENT.to_vec()));
    assert!(alarmed.circles().all(|(_, _, c, _)| ALERT_PALETTE.contains(&c)));

    // same geometry either way
    let calm_geom: Vec<_> = calm.circles().map(|(p, r, _, b)| (p, r, b)).collect();
    let alarm_geom: Vec<_> = alarmed.circles().map(|(p, r, _, b)| (p, r, b)).collect();
    assert_eq!(calm_geom, alarm_geom);
}

#[test]
fn tiny_particles_are_skipped() {
    let particles = vec![particle(0.1, 0.05, 0), particle(0.9, 4.0, 1)];
    let mut surface = RecordingSurface::default();
    let drawn = paint_particles(&mut surface, &particles, Vec2::new(100.0, 100.0), false);
    assert_eq!(drawn, 1);
    let (center, radius, color, _) = surface.circles().next().unwrap();
    assert_eq!(center, Vec2::new(10.0, 20.0));
    assert_eq!(radius, 4.0);
    assert_eq!(color, BASE_PALETTE[1]);
}

#[test]
fn particle_color_follows_tone_and_flag() {
    for tone in 0..PALETTE_LEN {
        assert_eq!(particle_color(tone, false), BASE_PALETTE[tone]);
        assert_eq!(particle_color(tone, true), ALERT_PALETTE[tone]);
    }
    assert_eq!(particle_color(PALETTE_LEN + 2, false), BASE_PALETTE[2]);
}

#[test]
fn rgba_formats_as_css() {
    assert_eq!(Rgba::new(20, 20, 20, 0.8).to_string(), "rgba(20, 20, 20, 0.8)");
    assert_eq!(Rgba::opaque(255, 255, 255).to_string(), "rgba(255, 255, 255, 1)");
}

fn snapshot(field: &ParticleField) -> Vec<(usize, Vec2, f32)> {
    field
        .particles()
        .iter()
        .map(|p| (p.id, p.position, p.depth))
        .collect()
}

#[test]
fn missing_surface_skips_the_whole_frame() {
    let mut field = ticked_field(7);
    let before = snapshot(&field);
    let pointer = Some(Vec2::new(400.0, 300.0));

    let drawn = tick_and_paint::<RecordingSurface>(&mut field, None, 1.0 / 60.0, pointer, true);
    assert_eq!(drawn, None);
    assert_eq!(snapshot(&field), before);
    assert!(!field.alert());
}

#[test]
fn present_surface_ticks_then_paints() {
    let mut field = ticked_field(8);
    let before = snapshot(&field);
    let mut surface = RecordingSurface::default();

    let drawn = tick_and_paint(&mut field, Some(&mut surface), 1.0 / 60.0, None, true);
    assert_ne!(snapshot(&field), before);
    assert!(field.alert());
    assert_eq!(drawn, Some(surface.circles().count()));
    assert!(surface.circles().all(|(_, _, c, _)| ALERT_PALETTE.contains(&c)));
}
