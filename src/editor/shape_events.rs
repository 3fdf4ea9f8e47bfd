//! Per-shape event sinks the renderer calls after native gestures.

use super::Editor;
use crate::input::PointerTarget;
use crate::input::coords::CoordinateConverter;
use crate::tools::Tool;
use crate::transform::HandleEndState;
use crate::types::{Point, ShapeId};
use tracing::{debug, trace};

impl Editor {
    /// A native shape drag ended with the node at `(x, y)` in canvas space.
    pub fn handle_drag_end(&mut self, shape_id: ShapeId, x: f32, y: f32) {
        if self.store.move_shape(shape_id, x, y) {
            trace!(%shape_id, x, y, "Shape moved");
        }
    }

    /// A shape was clicked: attach the transform handle to it alone, if the
    /// pointer tool is active and the shape is now selected.
    pub fn handle_shape_click(&mut self, shape_id: ShapeId) {
        if self.tools.selected() != Tool::Pointer {
            return;
        }

        match self.store.get(shape_id) {
            Some(shape) if shape.selected => self.transformer.attach([shape_id]),
            Some(_) => self.transformer.detach(),
            None => trace!(%shape_id, "click on unknown shape"),
        }
    }

    /// The handle finished a resize. Attached shapes with an end state are
    /// replaced by their resolved geometry; returns how many changed.
    pub fn handle_transform_end(&mut self, ends: &[HandleEndState]) -> usize {
        let updated = self.transformer.resolve_end(self.store.shapes(), ends);
        let count = self.store.replace(updated);
        debug!(count, "Transform committed");
        count
    }

    /// Hit test a screen position for adapters without their own picking.
    pub fn resolve_target(&self, screen_pos: Option<Point>) -> PointerTarget {
        CoordinateConverter::resolve(screen_pos, &self.viewport)
            .and_then(|canvas| self.store.shape_at(canvas))
            .map_or(PointerTarget::Stage, PointerTarget::Shape)
    }
}
