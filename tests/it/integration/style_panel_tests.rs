//! Style Panel Integration Tests

use crate::helpers::{TestEditorBuilder, assert_shape_count, click_shape, drag, sid};
use inkboard::style::{DefaultStyle, StylePatch};
use inkboard::tools::Tool;
use inkboard::types::{Shape, ShapeGeometry};

#[test]
fn test_patch_hits_selection_and_defaults() {
    let mut editor = TestEditorBuilder::new()
        .with_rect(1, (0.0, 0.0), (10.0, 10.0))
        .selected()
        .with_rect(2, (50.0, 50.0), (10.0, 10.0))
        .build();

    editor.apply_style(&StylePatch::fill("purple"));

    assert_eq!(editor.shapes()[0].style.fill, "purple");
    assert_eq!(editor.shapes()[1].style.fill, "transparent");
    assert_eq!(editor.default_style().shape.fill, "purple");
}

#[test]
fn test_next_shape_uses_updated_defaults() {
    let mut editor = TestEditorBuilder::new().build();
    editor.apply_style(&StylePatch::stroke("gray"));
    editor.apply_style(&StylePatch::dash([10.0, 10.0]));

    editor.set_tool(Tool::Rectangle);
    drag(&mut editor, (0.0, 0.0), &[(30.0, 30.0)]);

    let style = &editor.shapes()[0].style;
    assert_eq!(style.stroke, "gray");
    assert_eq!(style.dash.map(|d| d.0), Some([10.0, 10.0]));
}

#[test]
fn test_solid_dash_clears_pattern() {
    let mut editor = TestEditorBuilder::new()
        .with_rect(1, (0.0, 0.0), (10.0, 10.0))
        .selected()
        .build();
    editor.apply_style(&StylePatch::dash([2.0, 2.0]));
    assert!(editor.shapes()[0].style.dash.is_some());

    editor.apply_style(&StylePatch::dash([0.0, 0.0]));
    assert!(editor.shapes()[0].style.dash.is_none());
}

#[test]
fn test_text_fields_only_touch_text() {
    let text = Shape::text(0.0, 0.0, "hello", &DefaultStyle::default()).with_id(sid(2));
    let mut editor = TestEditorBuilder::new()
        .with_rect(1, (100.0, 100.0), (10.0, 10.0))
        .selected()
        .with_shape(text)
        .selected()
        .build();
    let rect_geometry = editor.shapes()[0].geometry.clone();

    editor.apply_style(&StylePatch::font_size(80.0));
    editor.apply_style(&StylePatch::text("world"));

    assert_eq!(editor.shapes()[0].geometry, rect_geometry);
    match &editor.shapes()[1].geometry {
        ShapeGeometry::Text {
            text, font_size, ..
        } => {
            assert_eq!(text, "world");
            assert_eq!(*font_size, 80.0);
        }
        other => panic!("expected text, got {other:?}"),
    }
    assert_eq!(editor.default_style().font_size, 80.0);
}

#[test]
fn test_panel_view_flags() {
    let text = Shape::text(0.0, 0.0, "hi", &DefaultStyle::default()).with_id(sid(2));
    let mut editor = TestEditorBuilder::new()
        .with_rect(1, (100.0, 100.0), (10.0, 10.0))
        .with_shape(text)
        .build();

    let panel = editor.style_panel();
    assert!(!panel.can_delete);
    assert!(!panel.show_text_controls);
    assert!(panel.selected.is_empty());

    click_shape(&mut editor, 1, (105.0, 105.0));
    let panel = editor.style_panel();
    assert!(panel.can_delete);
    assert!(!panel.show_text_controls);

    click_shape(&mut editor, 2, (1.0, 1.0));
    let panel = editor.style_panel();
    assert!(panel.show_text_controls);
    assert_eq!(panel.selected.len(), 1);
}

#[test]
fn test_delete_removes_selection_and_detaches() {
    let mut editor = TestEditorBuilder::new()
        .with_rect(1, (0.0, 0.0), (10.0, 10.0))
        .with_rect(2, (50.0, 50.0), (10.0, 10.0))
        .build();
    click_shape(&mut editor, 1, (5.0, 5.0));
    assert!(editor.scene().handle.is_visible());

    assert_eq!(editor.delete_selected(), vec![sid(1)]);
    assert_shape_count(&editor, 1);
    assert_eq!(editor.shapes()[0].id, sid(2));
    assert!(editor.transformer().is_empty());
}

#[test]
fn test_empty_patch_changes_nothing() {
    let mut editor = TestEditorBuilder::new()
        .with_rect(1, (0.0, 0.0), (10.0, 10.0))
        .selected()
        .build();
    let shapes = editor.shapes().to_vec();
    let defaults = editor.default_style().clone();

    editor.apply_style(&StylePatch::default());
    assert_eq!(editor.shapes(), shapes.as_slice());
    assert_eq!(editor.default_style(), &defaults);
}
