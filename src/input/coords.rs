//! Coordinate conversion for pointer events.
//!
//! Every position the pointer engine stores in shape geometry goes through
//! here first, so raw screen pixels never reach the store.

use crate::types::Point;
use crate::viewport::Viewport;

pub struct CoordinateConverter;

impl CoordinateConverter {
    /// Convert a screen position to canvas space
    #[inline]
    pub fn screen_to_canvas(screen_pos: Point, viewport: &Viewport) -> Point {
        viewport.screen_to_canvas(screen_pos)
    }

    /// Convert a canvas position to screen space
    #[inline]
    pub fn canvas_to_screen(canvas_pos: Point, viewport: &Viewport) -> Point {
        viewport.canvas_to_screen(canvas_pos)
    }

    /// Convert a screen-space delta to canvas units
    #[inline]
    pub fn delta_screen_to_canvas(delta: Point, scale: f32) -> Point {
        Point::new(delta.x / scale, delta.y / scale)
    }

    /// Resolve an optional pointer position to canvas space
    #[inline]
    pub fn resolve(screen_pos: Option<Point>, viewport: &Viewport) -> Option<Point> {
        screen_pos.map(|p| Self::screen_to_canvas(p, viewport))
    }
}
