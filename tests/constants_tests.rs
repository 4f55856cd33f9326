// Host-side tests for constants and their mathematical relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn depth_constants_are_ordered() {
    assert!(DEPTH_MIN > 0.0 && DEPTH_MIN < DEPTH_MAX);
    assert!(DEPTH_MAX <= 1.0);
    assert!(FAR_TIER_MAX_DEPTH > DEPTH_MIN && FAR_TIER_MAX_DEPTH < MID_TIER_MAX_DEPTH);
    assert!(MID_TIER_MAX_DEPTH < DEPTH_MAX);
    // resting band must sit strictly inside the clamp range
    assert!(DEPTH_REST_LOW > DEPTH_MIN && DEPTH_REST_HIGH < DEPTH_MAX);
    assert!(DEPTH_REST_LOW < DEPTH_REST_HIGH);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn size_ranges_grow_with_tier() {
    for [lo, hi] in [FAR_SIZE_RANGE, MID_SIZE_RANGE, NEAR_SIZE_RANGE] {
        assert!(lo > 0.0 && lo < hi);
    }
    assert!(FAR_SIZE_RANGE[0] < MID_SIZE_RANGE[0]);
    assert!(MID_SIZE_RANGE[0] < NEAR_SIZE_RANGE[0]);
    // the pulse must never shrink a far particle below the draw threshold
    assert!(FAR_SIZE_RANGE[0] * (1.0 - PULSE_AMPLITUDE) > MIN_DRAW_SIZE);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn friction_decays_without_reversing() {
    assert!(FRICTION > 0.0 && FRICTION < 1.0);
    assert!(DEPTH_FRICTION > 0.0 && DEPTH_FRICTION < 1.0);
    assert!(DEPTH_FRICTION <= FRICTION);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn population_and_interaction_are_positive() {
    assert!(AREA_PER_PARTICLE > 0.0);
    assert!(MAX_PARTICLES > 0);
    assert!(REPULSION_RADIUS > 0.0);
    assert!(REPULSION_STRENGTH > 0.0);
    assert!(PULSE_AMPLITUDE > 0.0 && PULSE_AMPLITUDE < 0.5);
    assert!(MAX_DT_SEC * REFERENCE_FPS >= 1.0);
}
