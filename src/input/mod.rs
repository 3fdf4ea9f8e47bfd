//! Pointer, wheel and keyboard input handling for the canvas.
//!
//! ## Architecture
//!
//! The input system uses an explicit state machine (`InputState`) to track
//! the current gesture. Handlers are `impl Editor` blocks split by event:
//!
//! - `state` - Input state machine enum and helper methods
//! - `mouse_down` - Pointer down (selection, marquee/draft/pan start)
//! - `drag` - Pointer move (marquee update, draft sizing, panning)
//! - `mouse_up` - Pointer up (commit draft, finalize gesture)
//! - `wheel` - Wheel zoom
//! - `keyboard` - Tool shortcuts and deletion
//! - `coords` - Screen/canvas conversion

pub mod coords;
mod drag;
mod keyboard;
mod mouse_down;
mod mouse_up;
mod state;
mod wheel;

pub use keyboard::Key;
pub use state::InputState;

use crate::types::{Point, ShapeId};

/// What the pointer was over when a gesture started.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PointerTarget {
    /// Empty canvas
    #[default]
    Stage,
    Shape(ShapeId),
}

/// A pointer event as reported by the rendering surface.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerEvent {
    /// Screen-space position; `None` when the surface cannot resolve it
    pub position: Option<Point>,
    pub target: PointerTarget,
}

impl PointerEvent {
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            position: Some(Point::new(x, y)),
            target: PointerTarget::Stage,
        }
    }

    pub fn on_shape(x: f32, y: f32, shape_id: ShapeId) -> Self {
        Self {
            position: Some(Point::new(x, y)),
            target: PointerTarget::Shape(shape_id),
        }
    }

    /// An event whose position could not be resolved
    pub fn unresolved() -> Self {
        Self::default()
    }
}

/// A wheel gesture. Only the sign of `delta_y` matters.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WheelEvent {
    pub position: Option<Point>,
    pub delta_y: f32,
}

impl WheelEvent {
    pub fn at(x: f32, y: f32, delta_y: f32) -> Self {
        Self {
            position: Some(Point::new(x, y)),
            delta_y,
        }
    }
}
