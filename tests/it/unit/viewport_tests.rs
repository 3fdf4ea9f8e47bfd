//! Unit tests for viewport module.

use crate::helpers::assert_point_approx;
use inkboard::types::point;
use inkboard::viewport::{Viewport, ViewportState, ZoomDirection, get_limited_scale};

#[test]
fn test_limited_scale() {
    assert_eq!(get_limited_scale(0.05, 0.1, 1.0), 0.1);
    assert_eq!(get_limited_scale(2.0, 0.1, 1.0), 1.0);
    assert_eq!(get_limited_scale(0.5, 0.1, 1.0), 0.5);
}

#[test]
fn test_wheel_sign_picks_direction() {
    assert_eq!(ZoomDirection::from_wheel_delta(-3.0), ZoomDirection::In);
    assert_eq!(ZoomDirection::from_wheel_delta(3.0), ZoomDirection::Out);
    assert_eq!(ZoomDirection::from_wheel_delta(0.0), ZoomDirection::Out);
}

#[test]
fn test_zoom_in_multiplies_by_speed() {
    let mut viewport = Viewport::default().with_state(ViewportState {
        offset_x: 0.0,
        offset_y: 0.0,
        scale: 0.5,
    });
    let state = viewport.zoom_at(Some(point(0.0, 0.0)), ZoomDirection::In);
    assert!((state.scale - 0.55).abs() < 1e-6);
}

#[test]
fn test_zoom_anchor_holds_over_many_steps() {
    let pointer = point(64.0, 36.0);
    let mut viewport = Viewport::default().with_state(ViewportState {
        offset_x: -20.0,
        offset_y: 7.5,
        scale: 0.3,
    });
    let anchor = viewport.screen_to_canvas(pointer);

    for _ in 0..5 {
        viewport.on_wheel(Some(pointer), -120.0);
        assert_point_approx(viewport.canvas_to_screen(anchor), pointer);
    }
    for _ in 0..20 {
        viewport.on_wheel(Some(pointer), 120.0);
        assert_point_approx(viewport.canvas_to_screen(anchor), pointer);
    }
    assert_eq!(viewport.scale(), 0.1);
}

#[test]
fn test_restored_state_is_clamped() {
    let viewport = Viewport::default().with_state(ViewportState {
        offset_x: 1.0,
        offset_y: 2.0,
        scale: 9.0,
    });
    assert_eq!(viewport.scale(), 1.0);
    assert_eq!(viewport.offset(), point(1.0, 2.0));
}

#[test]
fn test_reset() {
    let mut viewport = Viewport::default();
    viewport.pan_to(point(50.0, 50.0));
    viewport.on_wheel(Some(point(0.0, 0.0)), 1.0);
    viewport.reset();
    assert_eq!(viewport.state(), ViewportState::default());
}
