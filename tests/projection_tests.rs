// Host-side tests for the perspective helpers and the fixed-step clock.

use boxsplash_core::{depth_progress, perspective_scale, rotate_xz, FixedStep, TICK_INTERVAL};
use std::time::Duration;

#[test]
fn perspective_scale_is_one_at_the_origin() {
    for f in [200.0, 300.0, 500.0] {
        assert_eq!(perspective_scale(f, 0.0), 1.0);
    }
}

#[test]
fn perspective_scale_decreases_with_depth() {
    for f in [200.0_f32, 300.0, 400.0, 500.0] {
        let mut z = -f + 1.0;
        let mut prev = perspective_scale(f, z);
        while z < f * 3.0 {
            z += 1.0;
            let s = perspective_scale(f, z);
            assert!(s < prev, "not decreasing at f={f} z={z}");
            assert!(s > 0.0);
            prev = s;
        }
    }
}

#[test]
fn perspective_scale_is_zero_behind_the_lens() {
    assert_eq!(perspective_scale(200.0, -200.0), 0.0);
    assert_eq!(perspective_scale(200.0, -350.0), 0.0);
}

#[test]
fn depth_progress_is_zero_in_front_and_linear_behind() {
    assert_eq!(depth_progress(-40.0, 200.0), 0.0);
    assert_eq!(depth_progress(0.0, 200.0), 0.0);
    assert_eq!(depth_progress(50.0, 200.0), 0.5);
    assert_eq!(depth_progress(100.0, 200.0), 1.0);
    assert_eq!(depth_progress(150.0, 200.0), 1.5);
}

#[test]
fn rotation_preserves_distance_from_the_axis() {
    let rads = 33.0_f32.to_radians();
    let (x, z) = (120.0_f32, -80.0_f32);
    let (x1, z1) = rotate_xz(x, z, rads.cos(), rads.sin());
    let r0 = (x * x + z * z).sqrt();
    let r1 = (x1 * x1 + z1 * z1).sqrt();
    assert!((r0 - r1).abs() < 1e-3);
}

#[test]
fn quarter_turn_swaps_axes() {
    let (x1, z1) = rotate_xz(10.0, 0.0, 0.0, 1.0);
    assert_eq!((x1, z1), (0.0, 10.0));
    let (x2, z2) = rotate_xz(0.0, 10.0, 0.0, 1.0);
    assert_eq!((x2, z2), (-10.0, 0.0));
}

#[test]
fn fixed_step_counts_whole_steps_and_keeps_remainder() {
    let mut clock = FixedStep::new(TICK_INTERVAL, 25);
    assert_eq!(clock.advance(Duration::from_millis(35)), 3);
    assert_eq!(clock.pending(), Duration::from_millis(5));
    assert_eq!(clock.advance(Duration::from_millis(4)), 0);
    assert_eq!(clock.advance(Duration::from_millis(1)), 1);
    assert_eq!(clock.pending(), Duration::ZERO);
}

#[test]
fn fixed_step_drops_backlog_past_the_cap() {
    let mut clock = FixedStep::new(Duration::from_millis(10), 4);
    assert_eq!(clock.advance(Duration::from_secs(2)), 4);
    assert_eq!(clock.pending(), Duration::ZERO);
}

#[test]
fn fixed_step_reset_clears_the_accumulator() {
    let mut clock = FixedStep::new(Duration::from_millis(10), 4);
    clock.advance(Duration::from_millis(9));
    clock.reset();
    assert_eq!(clock.advance(Duration::from_millis(9)), 0);
}
