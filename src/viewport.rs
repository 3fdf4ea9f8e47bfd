//! Viewport controller - zoom factor and pan offset of the canvas.
//!
//! Screen positions map to canvas positions through
//! `canvas = (screen - offset) / scale`. Wheel zoom keeps the canvas point
//! under the pointer fixed on screen.

use crate::constants::{DEFAULT_SCALE, MAX_SCALE, MIN_SCALE, SCALE_SPEED};
use crate::types::Point;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Snapshot of the viewport transform handed to the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewportState {
    pub offset_x: f32,
    pub offset_y: f32,
    pub scale: f32,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
            scale: DEFAULT_SCALE,
        }
    }
}

/// Direction of a wheel gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

impl ZoomDirection {
    /// Wheel deltas scrolling up (negative) zoom in.
    pub fn from_wheel_delta(delta_y: f32) -> Self {
        if delta_y < 0.0 { Self::In } else { Self::Out }
    }
}

/// Clamp a scale into `[min, max]`.
#[inline]
pub fn get_limited_scale(scale: f32, min: f32, max: f32) -> f32 {
    scale.min(max).max(min)
}

#[derive(Clone, Debug, PartialEq)]
pub struct Viewport {
    offset: Point,
    scale: f32,
    min_scale: f32,
    max_scale: f32,
    speed: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(MIN_SCALE, MAX_SCALE, SCALE_SPEED)
    }
}

impl Viewport {
    pub fn new(min_scale: f32, max_scale: f32, speed: f32) -> Self {
        Self {
            offset: Point::ZERO,
            scale: get_limited_scale(DEFAULT_SCALE, min_scale, max_scale),
            min_scale,
            max_scale,
            speed,
        }
    }

    /// Restore a saved transform, clamping the scale into the limits.
    pub fn with_state(mut self, state: ViewportState) -> Self {
        self.offset = Point::new(state.offset_x, state.offset_y);
        self.scale = get_limited_scale(state.scale, self.min_scale, self.max_scale);
        self
    }

    pub fn state(&self) -> ViewportState {
        ViewportState {
            offset_x: self.offset.x,
            offset_y: self.offset.y,
            scale: self.scale,
        }
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn offset(&self) -> Point {
        self.offset
    }

    pub fn scale_limits(&self) -> (f32, f32) {
        (self.min_scale, self.max_scale)
    }

    /// Replace the zoom limits and speed; the current scale is re-clamped.
    pub fn set_limits(&mut self, min_scale: f32, max_scale: f32, speed: f32) {
        self.min_scale = min_scale;
        self.max_scale = max_scale;
        self.speed = speed;
        self.scale = get_limited_scale(self.scale, min_scale, max_scale);
    }

    /// Convert a screen position to canvas space.
    #[inline]
    pub fn screen_to_canvas(&self, screen: Point) -> Point {
        Point::new(
            (screen.x - self.offset.x) / self.scale,
            (screen.y - self.offset.y) / self.scale,
        )
    }

    /// Convert a canvas position to screen space.
    #[inline]
    pub fn canvas_to_screen(&self, canvas: Point) -> Point {
        Point::new(
            canvas.x * self.scale + self.offset.x,
            canvas.y * self.scale + self.offset.y,
        )
    }

    /// Zoom one step around `pointer` (screen space).
    ///
    /// Without a pointer position the event is ignored and the current state
    /// is returned unchanged.
    pub fn zoom_at(&mut self, pointer: Option<Point>, direction: ZoomDirection) -> ViewportState {
        let Some(pointer) = pointer else {
            return self.state();
        };

        let old_scale = self.scale;
        let anchor = self.screen_to_canvas(pointer);

        let new_scale = match direction {
            ZoomDirection::In => old_scale * self.speed,
            ZoomDirection::Out => old_scale / self.speed,
        };
        let new_scale = get_limited_scale(new_scale, self.min_scale, self.max_scale);

        self.scale = new_scale;
        self.offset = Point::new(
            pointer.x - anchor.x * new_scale,
            pointer.y - anchor.y * new_scale,
        );

        trace!(old_scale, new_scale, "Viewport zoomed");
        self.state()
    }

    /// Wheel entry point: the sign of `delta_y` picks the zoom direction.
    pub fn on_wheel(&mut self, pointer: Option<Point>, delta_y: f32) -> ViewportState {
        self.zoom_at(pointer, ZoomDirection::from_wheel_delta(delta_y))
    }

    /// Shift the canvas by a screen-space delta.
    pub fn pan_by(&mut self, dx: f32, dy: f32) {
        self.offset.x += dx;
        self.offset.y += dy;
    }

    /// Place the canvas origin at a screen position.
    pub fn pan_to(&mut self, offset: Point) {
        self.offset = offset;
    }

    pub fn reset(&mut self) {
        self.offset = Point::ZERO;
        self.scale = get_limited_scale(DEFAULT_SCALE, self.min_scale, self.max_scale);
    }
}
