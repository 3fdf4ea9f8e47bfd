//! Input state machine - one explicit state per pointer gesture.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> MarqueeSelecting     (down on empty canvas with the pointer tool)
//! Idle -> DraggingShape        (down on a shape with the pointer tool)
//! Idle -> Drafting             (down with rectangle/ellipse/pencil)
//! Idle -> Pressed              (down with the text tool; text commits at once)
//! Idle -> Panning              (down with the grab tool)
//!
//! Any -> Idle                  (pointer up - finalizes the gesture)
//! ```
//!
//! Any state other than `Idle` means a gesture is active; moves that arrive
//! while `Idle` belong to no gesture and are dropped.

use crate::geometry::normalize_box;
use crate::types::{Point, SelectionBox, Shape, ShapeId};

#[derive(Debug, Clone, Default, PartialEq)]
pub enum InputState {
    /// No pointer gesture in progress
    #[default]
    Idle,

    /// Button held with nothing left to track
    Pressed,

    /// Marquee selection (canvas space)
    MarqueeSelecting { start: Point, current: Point },

    /// A committed shape is being dragged natively by the renderer
    DraggingShape { shape_id: ShapeId },

    /// A new shape is being drawn; the draft is not in the store
    Drafting {
        /// Canvas-space pointer-down position
        start: Point,
        draft: Shape,
    },

    /// Grab-tool panning (screen space)
    Panning { last_pos: Point },
}

impl InputState {
    /// Returns true between pointer-down and pointer-up
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::Idle)
    }

    pub fn is_marquee_selecting(&self) -> bool {
        matches!(self, Self::MarqueeSelecting { .. })
    }

    pub fn is_dragging_shape(&self) -> bool {
        matches!(self, Self::DraggingShape { .. })
    }

    pub fn is_drafting(&self) -> bool {
        matches!(self, Self::Drafting { .. })
    }

    pub fn is_panning(&self) -> bool {
        matches!(self, Self::Panning { .. })
    }

    /// Normalized marquee box, if a marquee is being dragged
    pub fn selection_box(&self) -> Option<SelectionBox> {
        match self {
            Self::MarqueeSelecting { start, current } => Some(normalize_box(*start, *current)),
            _ => None,
        }
    }

    pub fn draft(&self) -> Option<&Shape> {
        match self {
            Self::Drafting { draft, .. } => Some(draft),
            _ => None,
        }
    }

    pub fn dragged_shape(&self) -> Option<ShapeId> {
        match self {
            Self::DraggingShape { shape_id } => Some(*shape_id),
            _ => None,
        }
    }

    pub fn start_marquee(&mut self, pos: Point) {
        *self = Self::MarqueeSelecting {
            start: pos,
            current: pos,
        };
    }

    pub fn start_shape_drag(&mut self, shape_id: ShapeId) {
        *self = Self::DraggingShape { shape_id };
    }

    pub fn start_draft(&mut self, start: Point, draft: Shape) {
        *self = Self::Drafting { start, draft };
    }

    pub fn start_pan(&mut self, pos: Point) {
        *self = Self::Panning { last_pos: pos };
    }

    pub fn press(&mut self) {
        *self = Self::Pressed;
    }

    /// Take the current state, leaving `Idle` behind
    pub fn finish(&mut self) -> InputState {
        std::mem::take(self)
    }

    pub fn reset(&mut self) {
        *self = Self::Idle;
    }
}
