//! Pointer move handling - marquee update, draft sizing, panning.
//!
//! Moves only matter while a gesture is active. A shape being dragged is
//! owned by the renderer's native drag, so its moves are ignored here.

use super::coords::CoordinateConverter;
use super::{InputState, PointerEvent};
use crate::editor::Editor;
use crate::geometry::{ellipse_from_box, normalize_box, rect_from_box};
use crate::perf::measure;
use crate::profile_scope;
use crate::types::{Point, Shape, ShapeGeometry};
use tracing::trace;

impl Editor {
    pub fn handle_pointer_move(&mut self, event: PointerEvent) {
        let ((), elapsed_ms) = measure(|| self.pointer_move(event));
        self.perf.record_operation("pointer_move", elapsed_ms);
    }

    fn pointer_move(&mut self, event: PointerEvent) {
        profile_scope!("handle_pointer_move");

        if !self.input.is_active() || self.input.is_dragging_shape() {
            return;
        }
        let Some(screen_pos) = event.position else {
            trace!("pointer move without a position, ignored");
            return;
        };
        let canvas_pos = CoordinateConverter::screen_to_canvas(screen_pos, &self.viewport);

        match &mut self.input {
            InputState::MarqueeSelecting { start, current } => {
                *current = canvas_pos;
                let area = normalize_box(*start, canvas_pos);
                let selected = self.store.select_in_area(&area);
                trace!(selected, "Marquee updated");

                let store = &self.store;
                self.transformer
                    .retain(|id| store.get(id).is_some_and(|s| s.selected));
            }
            InputState::Drafting { start, draft } => {
                update_draft(draft, *start, canvas_pos);
            }
            InputState::Panning { last_pos } => {
                let dx = screen_pos.x - last_pos.x;
                let dy = screen_pos.y - last_pos.y;
                *last_pos = screen_pos;
                self.viewport.pan_by(dx, dy);
            }
            InputState::Idle | InputState::Pressed | InputState::DraggingShape { .. } => {}
        }
    }
}

/// Resize a draft to the box spanned by `start` and `current`, or extend a
/// freehand line by one point.
fn update_draft(draft: &mut Shape, start: Point, current: Point) {
    let area = normalize_box(start, current);

    match &mut draft.geometry {
        ShapeGeometry::Rectangle { width, height } => {
            let (x, y, w, h) = rect_from_box(&area);
            draft.x = x;
            draft.y = y;
            *width = w;
            *height = h;
        }
        ShapeGeometry::Ellipse { radius_x, radius_y } => {
            let (cx, cy, rx, ry) = ellipse_from_box(&area);
            draft.x = cx;
            draft.y = cy;
            *radius_x = rx;
            *radius_y = ry;
        }
        ShapeGeometry::FreehandLine { points } => {
            points.extend_from_slice(&[current.x, current.y]);
        }
        ShapeGeometry::Text { .. } => {}
    }
}
