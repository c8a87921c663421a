// Host-side tests for responsive layout and the camera.

use hero_core::camera::Camera;
use hero_core::viewport::{Layout, Viewport};

fn viewport(width: u32, height: u32) -> Viewport {
    Viewport {
        width,
        height,
        device_pixel_ratio: 1.0,
    }
}

#[test]
fn breakpoint_is_exclusive_at_768() {
    assert_eq!(Layout::classify(768), Layout::Desktop);
    assert_eq!(Layout::classify(767), Layout::Mobile);
    assert_eq!(Layout::classify(1920), Layout::Desktop);
    assert_eq!(Layout::classify(320), Layout::Mobile);
}

#[test]
fn layout_values_match_both_classes() {
    assert_eq!(Layout::Desktop.mesh_scale(), 1.0);
    assert_eq!(Layout::Desktop.camera_z(), 5.0);
    assert_eq!(Layout::Mobile.mesh_scale(), 0.7);
    assert_eq!(Layout::Mobile.camera_z(), 6.5);
}

#[test]
fn shrinking_across_the_breakpoint_changes_layout_exactly_once() {
    // 1024 -> 600 through several intermediate resize events.
    let widths = [1024u32, 900, 800, 700, 650, 600];
    let mut layout = Layout::classify(widths[0]);
    let mut changes = 0;
    for &w in &widths[1..] {
        let next = Layout::classify(w);
        if next != layout {
            changes += 1;
            layout = next;
        }
    }
    assert_eq!(changes, 1, "one breakpoint crossing must yield one change");
    assert_eq!(layout, Layout::Mobile);
    assert_eq!(layout.mesh_scale(), 0.7);
    assert_eq!(layout.camera_z(), 6.5);
}

#[test]
fn reapplying_the_same_viewport_is_idempotent() {
    let v = viewport(1024, 768);
    let first = (v.layout(), v.backing_size(), v.aspect());
    let second = (v.layout(), v.backing_size(), v.aspect());
    assert_eq!(first, second);
}

#[test]
fn backing_size_caps_the_pixel_ratio() {
    let v = Viewport {
        width: 1000,
        height: 500,
        device_pixel_ratio: 3.0,
    };
    assert_eq!(v.backing_size(), (2000, 1000));
    let v1 = Viewport {
        width: 1000,
        height: 500,
        device_pixel_ratio: 1.5,
    };
    assert_eq!(v1.backing_size(), (1500, 750));
}

#[test]
fn backing_size_never_collapses_to_zero() {
    let v = Viewport {
        width: 0,
        height: 0,
        device_pixel_ratio: 2.0,
    };
    assert_eq!(v.backing_size(), (1, 1));
}

#[test]
fn hero_camera_tracks_the_layout_distance() {
    let desktop = Camera::hero(16.0 / 9.0, Layout::Desktop);
    assert_eq!(desktop.eye.z, 5.0);
    let mobile = Camera::hero(9.0 / 16.0, Layout::Mobile);
    assert_eq!(mobile.eye.z, 6.5);
    assert!((desktop.fovy_radians - 50.0_f32.to_radians()).abs() < 1e-6);
}

#[test]
fn camera_matrices_are_finite_and_invertible() {
    let cam = Camera::hero(viewport(1024, 768).aspect(), Layout::Desktop);
    let vp = cam.view_proj();
    assert!(vp.to_cols_array().iter().all(|c| c.is_finite()));
    assert!(vp.determinant().abs() > 1e-6);
}
