//! Pointer down handling - selection, marquee, draft and pan start.
//!
//! The active tool picks the mode; in select mode the pointer target then
//! decides between shape drag and marquee.

use super::coords::CoordinateConverter;
use super::{PointerEvent, PointerTarget};
use crate::constants::LINE_FILL;
use crate::editor::Editor;
use crate::geometry::{ellipse_from_box, normalize_box, rect_from_box};
use crate::perf::measure;
use crate::profile_scope;
use crate::tools::ToolMode;
use crate::types::{Point, Shape, ShapeId, ShapeKind};
use tracing::{debug, trace};

impl Editor {
    pub fn handle_pointer_down(&mut self, event: PointerEvent) {
        let ((), elapsed_ms) = measure(|| self.pointer_down(event));
        self.perf.record_operation("pointer_down", elapsed_ms);
    }

    fn pointer_down(&mut self, event: PointerEvent) {
        profile_scope!("handle_pointer_down");

        let Some(screen_pos) = event.position else {
            trace!("pointer down without a position, ignored");
            return;
        };
        let canvas_pos = CoordinateConverter::screen_to_canvas(screen_pos, &self.viewport);

        match self.tools.selected().mode() {
            ToolMode::Select => match event.target {
                PointerTarget::Shape(shape_id) => {
                    self.store.toggle_select(shape_id);
                    self.sync_transformer_with_selection();
                    self.input.start_shape_drag(shape_id);
                }
                PointerTarget::Stage => {
                    self.store.clear_selection();
                    self.transformer.detach();
                    self.input.start_marquee(canvas_pos);
                }
            },
            ToolMode::Pan => self.input.start_pan(screen_pos),
            ToolMode::Draft(ShapeKind::Text) => {
                let text = self.new_draft(ShapeKind::Text, canvas_pos);
                debug!(x = canvas_pos.x, y = canvas_pos.y, "Placing text");
                self.store.create(text);
                self.input.press();
            }
            ToolMode::Draft(kind) => {
                let draft = self.new_draft(kind, canvas_pos);
                trace!(kind = kind.label(), "Draft started");
                self.input.start_draft(canvas_pos, draft);
            }
        }
    }

    /// A zero-size draft of `kind` anchored at `start`, styled from the
    /// default style. Text comes out complete with the placeholder.
    pub(crate) fn new_draft(&self, kind: ShapeKind, start: Point) -> Shape {
        let style = self.default_style.shape.clone();
        let area = normalize_box(start, start);

        match kind {
            ShapeKind::Rectangle => {
                let (x, y, width, height) = rect_from_box(&area);
                Shape::rectangle(x, y, width, height, style)
            }
            ShapeKind::Ellipse => {
                let (x, y, radius_x, radius_y) = ellipse_from_box(&area);
                Shape::ellipse(x, y, radius_x, radius_y, style)
            }
            ShapeKind::FreehandLine => {
                let mut style = style;
                style.fill = LINE_FILL.to_string();
                style.fill_pattern = false;
                Shape::line(vec![start.x, start.y], style)
            }
            ShapeKind::Text => Shape::text(
                start.x,
                start.y,
                self.settings.placeholder_text.clone(),
                &self.default_style,
            ),
        }
    }

    /// Keep the handle on the clicked shape only while it is selected.
    pub(crate) fn sync_transformer_with_selection(&mut self) {
        let store = &self.store;
        self.transformer
            .retain(|id: ShapeId| store.get(id).is_some_and(|s| s.selected));
    }
}
