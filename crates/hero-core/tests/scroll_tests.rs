// Host-side tests for the scroll coordinator.

use hero_core::constants::{VELOCITY_DECAY_SEC, VELOCITY_IDLE_DELAY_SEC};
use hero_core::scroll::{progress_for, rotation_for_progress, ScrollCoordinator, ScrollMetrics};

const DT: f32 = 1.0 / 120.0;

fn metrics() -> ScrollMetrics {
    ScrollMetrics {
        container_top: 0.0,
        container_height: 4000.0,
        viewport_height: 1000.0,
    }
}

#[test]
fn progress_is_alignment_fraction() {
    let m = metrics();
    assert_eq!(progress_for(0.0, &m), 0.0);
    assert_eq!(progress_for(3000.0, &m), 1.0); // bottom aligned with viewport bottom
    assert!((progress_for(1500.0, &m) - 0.5).abs() < 1e-6);
}

#[test]
fn progress_is_clamped_for_out_of_range_offsets() {
    let m = metrics();
    assert_eq!(progress_for(-200.0, &m), 0.0);
    assert_eq!(progress_for(10_000.0, &m), 1.0);
}

#[test]
fn progress_of_short_container_is_zero() {
    let m = ScrollMetrics {
        container_top: 0.0,
        container_height: 500.0,
        viewport_height: 1000.0,
    };
    assert_eq!(progress_for(100.0, &m), 0.0);
}

#[test]
fn rotation_is_exact_for_all_progress_values() {
    for i in 0..=100 {
        let p = i as f32 / 100.0;
        let (rx, ry) = rotation_for_progress(p);
        assert!((rx - p * std::f32::consts::PI * 3.0).abs() < 1e-6);
        assert!((ry - p * std::f32::consts::PI * 4.5).abs() < 1e-6);
    }
}

#[test]
fn velocity_is_clamped_regardless_of_delta() {
    let m = metrics();
    let mut c = ScrollCoordinator::new();
    c.observe(0.0, &m);
    c.observe(1_000_000.0, &m);
    assert_eq!(c.velocity(), 1.0);
    c.observe(-1_000_000.0, &m);
    assert_eq!(c.velocity(), -1.0);
}

#[test]
fn velocity_holds_until_idle_delay_then_decays_to_zero() {
    let m = metrics();
    let mut c = ScrollCoordinator::new();
    c.observe(0.0, &m);
    c.observe(50.0, &m);
    let v0 = c.velocity();
    assert!(v0 > 0.0);

    // Quiet period shorter than the idle delay: velocity unchanged.
    let mut elapsed = 0.0;
    while elapsed + DT < VELOCITY_IDLE_DELAY_SEC {
        c.advance(DT);
        elapsed += DT;
        assert_eq!(c.velocity(), v0, "velocity must hold during the idle delay");
    }

    // Then it eases to zero, monotonically, without crossing below zero.
    let mut prev = c.velocity();
    for _ in 0..((VELOCITY_DECAY_SEC / DT) as usize + 4) {
        c.advance(DT);
        let v = c.velocity();
        assert!(v <= prev + 1e-6, "decay must be monotonic");
        assert!(v >= 0.0, "decay must not overshoot below zero");
        prev = v;
    }
    assert_eq!(c.velocity(), 0.0);
}

#[test]
fn negative_velocity_decays_up_to_zero_without_sign_flip() {
    let m = metrics();
    let mut c = ScrollCoordinator::new();
    c.observe(500.0, &m);
    c.observe(400.0, &m);
    assert!(c.velocity() < 0.0);
    for _ in 0..200 {
        c.advance(DT);
        assert!(c.velocity() <= 0.0, "decay must not oscillate past zero");
    }
    assert_eq!(c.velocity(), 0.0);
}

#[test]
fn new_scroll_event_cancels_pending_decay() {
    let m = metrics();
    let mut c = ScrollCoordinator::new();
    c.observe(0.0, &m);
    c.observe(50.0, &m);
    for _ in 0..30 {
        c.advance(DT); // well past the idle delay, decay in flight
    }
    c.observe(120.0, &m);
    let v = c.velocity();
    assert!((v - 0.7).abs() < 1e-6, "fresh delta must replace the decayed value");
    c.advance(DT);
    assert_eq!(c.velocity(), v, "idle timer must restart after a scroll");
}

#[test]
fn rotation_eases_toward_derived_target_and_settles() {
    let m = metrics();
    let mut c = ScrollCoordinator::new();
    c.observe(1500.0, &m);
    let (target_x, target_y) = rotation_for_progress(0.5);

    let (rx0, _) = c.rotation();
    assert!(rx0 < target_x, "rotation must not snap");
    for _ in 0..60 {
        c.advance(DT);
    }
    let (rx, ry) = c.rotation();
    assert_eq!(rx, target_x);
    assert_eq!(ry, target_y);
}

#[test]
fn rail_scale_follows_progress() {
    let m = metrics();
    let mut c = ScrollCoordinator::new();
    c.observe(3000.0, &m);
    for _ in 0..30 {
        c.advance(DT);
    }
    assert_eq!(c.rail_scale(), 1.0);
}
