//! Test helpers and builders for reducing boilerplate in tests.
//!
//! This module provides:
//! - `TestEditorBuilder` - Builder pattern for editors with seeded shapes
//! - Gesture helpers like `drag()` and `click()` that drive the pointer engine
//! - Approximate float assertions

#![allow(dead_code)]

use inkboard::Editor;
use inkboard::input::PointerEvent;
use inkboard::style::ShapeStyle;
use inkboard::tools::Tool;
use inkboard::types::{Point, Shape, ShapeId};
use inkboard::viewport::ViewportState;

/// Deterministic id for fixtures.
pub fn sid(n: u128) -> ShapeId {
    ShapeId::from_u128(n)
}

// ============================================================================
// TestEditorBuilder - Builder pattern for creating test editors
// ============================================================================

/// Builder for editors with shapes, a tool and a viewport.
///
/// # Example
/// ```ignore
/// let editor = TestEditorBuilder::new()
///     .with_rect(1, (0.0, 0.0), (50.0, 50.0))
///     .with_ellipse(2, (200.0, 200.0), (20.0, 10.0))
///     .with_tool(Tool::Pointer)
///     .build();
/// ```
pub struct TestEditorBuilder {
    shapes: Vec<Shape>,
    tool: Tool,
    viewport: Option<ViewportState>,
}

impl Default for TestEditorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEditorBuilder {
    pub fn new() -> Self {
        Self {
            shapes: Vec::new(),
            tool: Tool::Pointer,
            viewport: None,
        }
    }

    /// Rectangle with top-left `pos` and `size`.
    pub fn with_rect(mut self, id: u128, pos: (f32, f32), size: (f32, f32)) -> Self {
        self.shapes.push(
            Shape::rectangle(pos.0, pos.1, size.0, size.1, ShapeStyle::default()).with_id(sid(id)),
        );
        self
    }

    /// Ellipse centered at `center` with `radii`.
    pub fn with_ellipse(mut self, id: u128, center: (f32, f32), radii: (f32, f32)) -> Self {
        self.shapes.push(
            Shape::ellipse(center.0, center.1, radii.0, radii.1, ShapeStyle::default())
                .with_id(sid(id)),
        );
        self
    }

    pub fn with_line(mut self, id: u128, points: &[f32]) -> Self {
        self.shapes
            .push(Shape::line(points.to_vec(), ShapeStyle::default()).with_id(sid(id)));
        self
    }

    pub fn with_shape(mut self, shape: Shape) -> Self {
        self.shapes.push(shape);
        self
    }

    /// Mark the most recently added shape as selected.
    pub fn selected(mut self) -> Self {
        if let Some(last) = self.shapes.last_mut() {
            last.selected = true;
        }
        self
    }

    pub fn with_tool(mut self, tool: Tool) -> Self {
        self.tool = tool;
        self
    }

    pub fn with_viewport(mut self, offset_x: f32, offset_y: f32, scale: f32) -> Self {
        self.viewport = Some(ViewportState {
            offset_x,
            offset_y,
            scale,
        });
        self
    }

    pub fn build(self) -> Editor {
        let mut editor = Editor::new();
        editor.set_tool(self.tool);
        if let Some(state) = self.viewport {
            editor.restore_viewport(state);
        }
        editor.with_shapes(self.shapes)
    }
}

// ============================================================================
// Gesture helpers
// ============================================================================

/// Press on empty canvas, move through `path`, release at the last point.
pub fn drag(editor: &mut Editor, from: (f32, f32), path: &[(f32, f32)]) {
    editor.handle_pointer_down(PointerEvent::at(from.0, from.1));
    for &(x, y) in path {
        editor.handle_pointer_move(PointerEvent::at(x, y));
    }
    let end = path.last().copied().unwrap_or(from);
    editor.handle_pointer_up(PointerEvent::at(end.0, end.1));
}

/// Press and release on a shape.
pub fn click_shape(editor: &mut Editor, id: u128, at: (f32, f32)) {
    editor.handle_pointer_down(PointerEvent::on_shape(at.0, at.1, sid(id)));
    editor.handle_shape_click(sid(id));
    editor.handle_pointer_up(PointerEvent::on_shape(at.0, at.1, sid(id)));
}

/// Press and release on empty canvas.
pub fn click_stage(editor: &mut Editor, at: (f32, f32)) {
    editor.handle_pointer_down(PointerEvent::at(at.0, at.1));
    editor.handle_pointer_up(PointerEvent::at(at.0, at.1));
}

/// Ids of the selected shapes, in draw order.
pub fn selected_ids(editor: &Editor) -> Vec<ShapeId> {
    editor.store().selected_ids()
}

// ============================================================================
// Assertions
// ============================================================================

pub fn assert_approx(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 1e-3,
        "expected {expected}, got {actual}"
    );
}

pub fn assert_point_approx(actual: Point, expected: Point) {
    assert!(
        (actual.x - expected.x).abs() < 1e-3 && (actual.y - expected.y).abs() < 1e-3,
        "expected {expected:?}, got {actual:?}"
    );
}

pub fn assert_shape_count(editor: &Editor, expected: usize) {
    assert_eq!(
        editor.shapes().len(),
        expected,
        "Expected {} shapes, found {}",
        expected,
        editor.shapes().len()
    );
}
