// Host-side tests for section tracking and the scroll-scrubbed reveal.

use hero_core::constants::SECTION_TWEEN_SEC;
use hero_core::sections::{
    reveal_progress, reveal_style, SectionBand, SectionTracker,
};

const DT: f32 = 1.0 / 60.0;
const VIEWPORT_H: f32 = 1000.0;

/// Four stacked sections, each one viewport tall.
fn bands() -> Vec<SectionBand> {
    (0..4)
        .map(|i| SectionBand {
            top: i as f32 * VIEWPORT_H,
            height: VIEWPORT_H,
        })
        .collect()
}

#[test]
fn forward_scroll_crosses_each_section_once_in_order() {
    let mut tracker = SectionTracker::new(bands());
    let mut crossings = Vec::new();
    let mut y = 0.0;
    while y <= 3.0 * VIEWPORT_H {
        if let Some(idx) = tracker.observe(y, VIEWPORT_H) {
            crossings.push(idx);
        }
        y += 25.0;
    }
    assert_eq!(crossings, vec![1, 2, 3]);
    assert_eq!(tracker.active(), 3);
}

#[test]
fn reverse_scroll_retraces_the_crossings() {
    let mut tracker = SectionTracker::new(bands());
    let mut y = 0.0;
    while y <= 3.0 * VIEWPORT_H {
        tracker.observe(y, VIEWPORT_H);
        y += 25.0;
    }
    let mut crossings = Vec::new();
    while y >= 0.0 {
        if let Some(idx) = tracker.observe(y, VIEWPORT_H) {
            crossings.push(idx);
        }
        y -= 25.0;
    }
    assert_eq!(crossings, vec![2, 1, 0]);
    assert_eq!(tracker.active(), 0);
}

#[test]
fn active_index_stays_in_bounds() {
    let mut tracker = SectionTracker::new(bands());
    for y in [-5000.0, 0.0, 1999.0, 3500.0, 100_000.0, -1.0, 2500.0] {
        tracker.observe(y, VIEWPORT_H);
        assert!(tracker.active() < 4);
    }
}

#[test]
fn center_outside_all_bands_keeps_the_current_section() {
    let mut tracker = SectionTracker::new(bands());
    tracker.observe(1500.0, VIEWPORT_H);
    assert_eq!(tracker.active(), 1);
    // Scrolled far past the last band: no crossing, state unchanged.
    assert_eq!(tracker.observe(50_000.0, VIEWPORT_H), None);
    assert_eq!(tracker.active(), 1);
}

#[test]
fn latest_crossing_supersedes_an_in_flight_tween() {
    let mut tracker = SectionTracker::new(bands());
    assert_eq!(tracker.observe(3.0 * VIEWPORT_H, VIEWPORT_H), Some(3));
    for _ in 0..10 {
        tracker.advance(DT); // tween toward 3 still in flight
    }
    let mid = tracker.uniform_index();
    assert!(mid > 0.0 && mid < 3.0);

    // Fast scroll back: the old target is overwritten, not queued.
    assert_eq!(tracker.observe(VIEWPORT_H, VIEWPORT_H), Some(1));
    assert!((tracker.uniform_index() - mid).abs() < 1e-6, "uniform must not jump");
    for _ in 0..((SECTION_TWEEN_SEC / DT) as usize + 2) {
        tracker.advance(DT);
    }
    assert_eq!(tracker.uniform_index(), 1.0, "tween must settle at the latest target");
}

#[test]
fn uniform_always_arrives_at_each_new_target() {
    let mut tracker = SectionTracker::new(bands());
    for (y, expected) in [
        (VIEWPORT_H, 1.0),
        (2.0 * VIEWPORT_H, 2.0),
        (3.0 * VIEWPORT_H, 3.0),
        (0.0, 0.0),
    ] {
        tracker.observe(y, VIEWPORT_H);
        for _ in 0..((SECTION_TWEEN_SEC / DT) as usize + 2) {
            tracker.advance(DT);
        }
        assert_eq!(tracker.uniform_index(), expected);
    }
}

#[test]
fn repeated_observations_of_the_same_section_emit_nothing() {
    let mut tracker = SectionTracker::new(bands());
    assert_eq!(tracker.observe(1200.0, VIEWPORT_H), Some(1));
    assert_eq!(tracker.observe(1300.0, VIEWPORT_H), None);
    assert_eq!(tracker.observe(1400.0, VIEWPORT_H), None);
}

#[test]
fn reveal_progress_scrubs_across_the_window() {
    let band = SectionBand {
        top: 2000.0,
        height: VIEWPORT_H,
    };
    // Window: section top travels from 80% to 20% of viewport height.
    let start = 2000.0 - 0.8 * VIEWPORT_H;
    let end = 2000.0 - 0.2 * VIEWPORT_H;
    assert_eq!(reveal_progress(&band, start, VIEWPORT_H), 0.0);
    assert_eq!(reveal_progress(&band, end, VIEWPORT_H), 1.0);
    assert!((reveal_progress(&band, (start + end) * 0.5, VIEWPORT_H) - 0.5).abs() < 1e-6);
    assert_eq!(reveal_progress(&band, start - 500.0, VIEWPORT_H), 0.0);
    assert_eq!(reveal_progress(&band, end + 500.0, VIEWPORT_H), 1.0);
}

#[test]
fn reveal_style_hides_then_fully_reveals() {
    for idx in 0..3 {
        let hidden = reveal_style(0.0, idx, 3);
        assert_eq!(hidden.opacity, 0.0);
        assert_eq!(hidden.offset_y, 80.0);
        assert_eq!(hidden.tilt_deg, -10.0);

        let shown = reveal_style(1.0, idx, 3);
        assert_eq!(shown.opacity, 1.0);
        assert_eq!(shown.offset_y, 0.0);
        assert_eq!(shown.tilt_deg, 0.0);
    }
}

#[test]
fn reveal_stagger_leads_earlier_elements() {
    let t = 0.4;
    let first = reveal_style(t, 0, 3);
    let last = reveal_style(t, 2, 3);
    assert!(
        first.opacity > last.opacity,
        "earlier elements must reveal ahead of later ones"
    );
    assert!(first.offset_y < last.offset_y);
}
