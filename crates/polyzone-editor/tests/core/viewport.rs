use polyzone_core::geometry::{Bounds, Point};
use polyzone_editor::viewport::{PanPolicy, Viewport};

#[test]
fn test_viewport_creation() {
    let vp = Viewport::new(900.0, 600.0);
    assert_eq!(vp.scale(), 1.0);
    assert_eq!(vp.offset_x(), 0.0);
    assert_eq!(vp.offset_y(), 0.0);
}

#[test]
fn test_screen_to_world_identity_at_default_state() {
    let vp = Viewport::new(900.0, 600.0);
    let world = vp.screen_to_world(100.0, 50.0);
    assert!((world.x - 100.0).abs() < 0.01);
    assert!((world.y - 50.0).abs() < 0.01);
}

#[test]
fn test_world_to_screen_applies_offset_then_scale() {
    let mut vp = Viewport::new(900.0, 600.0);
    vp.set_zoom(2.0);
    vp.set_offset(-20.0, -10.0);
    // screen = (world + offset) * scale
    let (sx, sy) = vp.world_to_screen(100.0, 100.0);
    assert!((sx - 160.0).abs() < 0.01);
    assert!((sy - 180.0).abs() < 0.01);
}

#[test]
fn test_screen_to_world_with_zoom() {
    let mut vp = Viewport::new(900.0, 600.0);
    vp.set_zoom(2.0);
    // At zoom 2.0, 200 pixels = 100 world units
    let world = vp.screen_to_world(200.0, 400.0);
    assert!((world.x - 100.0).abs() < 0.01);
    assert!((world.y - 200.0).abs() < 0.01);
}

#[test]
fn test_roundtrip_conversion() {
    let mut vp = Viewport::new(900.0, 600.0).with_pan_policy(PanPolicy::Free);
    vp.set_zoom(2.5);
    vp.set_offset(75.0, 125.0);

    let original = Point::new(123.45, 456.78);
    let (sx, sy) = vp.world_to_screen(original.x, original.y);
    let roundtrip = vp.screen_to_world(sx, sy);

    assert!((roundtrip.x - original.x).abs() < 0.01);
    assert!((roundtrip.y - original.y).abs() < 0.01);
}

#[test]
fn test_zoom_constraints() {
    let mut vp = Viewport::new(900.0, 600.0);
    vp.set_zoom(0.05); // Too small
    assert_eq!(vp.scale(), 0.1);

    vp.set_zoom(60.0); // Too large
    assert_eq!(vp.scale(), 10.0);
}

#[test]
fn test_zoom_in_out() {
    let mut vp = Viewport::new(900.0, 600.0);
    let initial = vp.scale();
    vp.zoom_in();
    assert!(vp.scale() > initial);

    vp.zoom_out();
    assert!((vp.scale() - initial).abs() < 0.01);
}

#[test]
fn test_custom_zoom_limits() {
    let mut vp = Viewport::new(900.0, 600.0).with_zoom_limits(0.5, 4.0, 2.0);
    vp.set_zoom(0.1);
    assert_eq!(vp.scale(), 0.5);
    vp.set_zoom(100.0);
    assert_eq!(vp.scale(), 4.0);
}

#[test]
fn test_zoom_at_keeps_cursor_point_fixed() {
    let mut vp = Viewport::new(900.0, 600.0);
    vp.set_offset(-100.0, -50.0);

    let before = vp.screen_to_world(200.0, 150.0);
    vp.zoom_in_at(200.0, 150.0);
    let after = vp.screen_to_world(200.0, 150.0);

    assert!(vp.scale() > 1.0);
    assert!((after.x - before.x).abs() < 1e-9);
    assert!((after.y - before.y).abs() < 1e-9);
}

#[test]
fn test_zoom_at_repeated_stays_anchored() {
    let mut vp = Viewport::new(900.0, 600.0);
    vp.set_offset(-300.0, -200.0);

    let anchor = vp.screen_to_world(640.0, 360.0);
    for _ in 0..10 {
        vp.zoom_in_at(640.0, 360.0);
    }
    let after = vp.screen_to_world(640.0, 360.0);
    assert!((after.x - anchor.x).abs() < 1e-6);
    assert!((after.y - anchor.y).abs() < 1e-6);
}

#[test]
fn test_zoom_at_clamped_leaves_offset_unchanged() {
    let mut vp = Viewport::new(900.0, 600.0);
    vp.set_zoom(10.0);
    vp.set_offset(-40.0, -30.0);

    vp.zoom_in_at(450.0, 300.0);

    assert_eq!(vp.scale(), 10.0);
    assert!((vp.offset_x() - (-40.0)).abs() < 1e-9);
    assert!((vp.offset_y() - (-30.0)).abs() < 1e-9);
}

#[test]
fn test_pan_by_converts_screen_delta_to_world() {
    let mut vp = Viewport::new(900.0, 600.0);
    vp.pan_by(-50.0, -75.0);
    assert!((vp.offset_x() - (-50.0)).abs() < 0.01);
    assert!((vp.offset_y() - (-75.0)).abs() < 0.01);
}

#[test]
fn test_pan_by_at_2x_zoom() {
    let mut vp = Viewport::new(900.0, 600.0);
    vp.set_zoom(2.0);
    vp.pan_by(-50.0, 0.0);
    // At 2x zoom, 50 pixels = 25 world units
    assert!((vp.offset_x() - (-25.0)).abs() < 0.01);
}

#[test]
fn test_pan_clamped_to_non_positive_offsets() {
    let mut vp = Viewport::new(900.0, 600.0);
    vp.pan_by(100.0, 100.0);
    assert_eq!(vp.offset_x(), 0.0);
    assert_eq!(vp.offset_y(), 0.0);

    // A mixed pan clamps each component independently.
    vp.pan_by(-30.0, 40.0);
    assert!((vp.offset_x() - (-30.0)).abs() < 0.01);
    assert_eq!(vp.offset_y(), 0.0);
}

#[test]
fn test_pan_sequence_stays_clamped() {
    let mut vp = Viewport::new(900.0, 600.0);
    vp.pan_by(-50.0, -50.0);
    vp.pan_by(25.0, 25.0);
    vp.pan_by(75.0, 100.0);
    assert!(vp.offset_x() <= 0.0);
    assert!(vp.offset_y() <= 0.0);
}

#[test]
fn test_free_pan_policy_allows_positive_offsets() {
    let mut vp = Viewport::new(900.0, 600.0).with_pan_policy(PanPolicy::Free);
    vp.pan_by(50.0, 25.0);
    assert!((vp.offset_x() - 50.0).abs() < 0.01);
    assert!((vp.offset_y() - 25.0).abs() < 0.01);
}

#[test]
fn test_center_on_point() {
    let mut vp = Viewport::new(800.0, 600.0);
    vp.center_on(100.0, 200.0);

    let world = vp.screen_to_world(400.0, 300.0);
    assert!((world.x - 100.0).abs() < 0.01);
    assert!((world.y - 200.0).abs() < 0.01);
}

#[test]
fn test_fit_to_bounds_square_in_800x600() {
    let mut vp = Viewport::new(800.0, 600.0);
    vp.fit_to_bounds(&Bounds::new(0.0, 0.0, 10.0, 10.0), 0.2);

    // min(800 * 0.8 / 10, 600 * 0.8 / 10) = 48
    assert!((vp.scale() - 48.0).abs() < 1e-9);

    // The bounds center sits at the screen center.
    let (sx, sy) = vp.world_to_screen(5.0, 5.0);
    assert!((sx - 400.0).abs() < 1e-6);
    assert!((sy - 300.0).abs() < 1e-6);
}

#[test]
fn test_fit_to_bounds_is_idempotent() {
    let mut vp = Viewport::new(800.0, 600.0);
    let bounds = Bounds::new(-30.0, 10.0, 170.0, 90.0);
    vp.fit_to_bounds(&bounds, 0.1);
    let (scale, ox, oy) = (vp.scale(), vp.offset_x(), vp.offset_y());

    vp.fit_to_bounds(&bounds, 0.1);
    assert_eq!(vp.scale(), scale);
    assert_eq!(vp.offset_x(), ox);
    assert_eq!(vp.offset_y(), oy);
}

#[test]
fn test_fit_to_bounds_degenerate_is_noop() {
    let mut vp = Viewport::new(800.0, 600.0);
    vp.set_zoom(3.0);
    vp.set_offset(-7.0, -9.0);

    vp.fit_to_bounds(&Bounds::new(5.0, 5.0, 5.0, 25.0), 0.2);
    assert_eq!(vp.scale(), 3.0);
    assert_eq!(vp.offset_x(), -7.0);
    assert_eq!(vp.offset_y(), -9.0);
}

#[test]
fn test_fit_to_bounds_zero_viewport_is_noop() {
    let mut vp = Viewport::new(0.0, 0.0);
    vp.fit_to_bounds(&Bounds::new(0.0, 0.0, 10.0, 10.0), 0.2);
    assert_eq!(vp.scale(), 1.0);
    assert_eq!(vp.offset_x(), 0.0);
}

#[test]
fn test_fit_to_bounds_clamps_to_max_zoom() {
    let mut vp = Viewport::new(800.0, 600.0);
    vp.fit_to_bounds(&Bounds::new(0.0, 0.0, 0.1, 0.1), 0.2);
    assert_eq!(vp.scale(), 10.0);
}

#[test]
fn test_transform_string_matches_world_to_screen() {
    let mut vp = Viewport::new(900.0, 600.0);
    vp.set_zoom(2.0);
    vp.set_offset(-10.0, -5.0);
    // SVG applies scale first, then translate: p -> 2p + offset * scale
    assert_eq!(vp.transform(), "translate(-20, -10) scale(2)");
}

#[test]
fn test_visible_world_range() {
    let mut vp = Viewport::new(800.0, 600.0);
    vp.set_zoom(2.0);
    vp.set_offset(-100.0, -50.0);

    let visible = vp.visible_world();
    assert!((visible.min_x - 100.0).abs() < 1e-9);
    assert!((visible.min_y - 50.0).abs() < 1e-9);
    assert!((visible.max_x - 500.0).abs() < 1e-9);
    assert!((visible.max_y - 350.0).abs() < 1e-9);
}

#[test]
fn test_reset() {
    let mut vp = Viewport::new(900.0, 600.0);
    vp.set_zoom(2.5);
    vp.set_offset(-100.0, -200.0);
    vp.reset();

    assert_eq!(vp.scale(), 1.0);
    assert_eq!(vp.offset_x(), 0.0);
    assert_eq!(vp.offset_y(), 0.0);
}
