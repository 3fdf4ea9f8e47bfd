//! Tool Switch Integration Tests

use crate::helpers::{TestEditorBuilder, assert_shape_count, click_shape, selected_ids, sid};
use inkboard::input::PointerEvent;
use inkboard::render::CursorStyle;
use inkboard::tools::Tool;

#[test]
fn test_switch_clears_selection_and_handle() {
    let mut editor = TestEditorBuilder::new()
        .with_rect(1, (0.0, 0.0), (10.0, 10.0))
        .build();
    click_shape(&mut editor, 1, (5.0, 5.0));
    assert_eq!(selected_ids(&editor), vec![sid(1)]);

    assert!(editor.set_tool(Tool::Ellipse));
    assert!(selected_ids(&editor).is_empty());
    assert!(editor.transformer().is_empty());
    assert_eq!(editor.tool(), Tool::Ellipse);
}

#[test]
fn test_switch_discards_draft() {
    let mut editor = TestEditorBuilder::new().with_tool(Tool::Rectangle).build();
    editor.handle_pointer_down(PointerEvent::at(0.0, 0.0));
    editor.handle_pointer_move(PointerEvent::at(40.0, 40.0));
    assert!(editor.draft().is_some());

    editor.set_tool(Tool::Ellipse);
    assert!(editor.draft().is_none());
    assert!(!editor.input_state().is_active());

    editor.handle_pointer_up(PointerEvent::at(40.0, 40.0));
    assert_shape_count(&editor, 0);
}

#[test]
fn test_same_tool_keeps_selection() {
    let mut editor = TestEditorBuilder::new()
        .with_rect(1, (0.0, 0.0), (10.0, 10.0))
        .build();
    click_shape(&mut editor, 1, (5.0, 5.0));

    assert!(!editor.set_tool(Tool::Pointer));
    assert_eq!(selected_ids(&editor), vec![sid(1)]);
    assert!(editor.transformer().is_attached(sid(1)));
}

#[test]
fn test_scene_follows_tool() {
    let mut editor = TestEditorBuilder::new()
        .with_rect(1, (0.0, 0.0), (10.0, 10.0))
        .build();

    let scene = editor.scene();
    assert!(scene.items.iter().all(|item| item.draggable));
    assert!(!scene.stage_draggable);
    assert_eq!(scene.cursor, CursorStyle::Default);

    editor.set_tool(Tool::Grab);
    let scene = editor.scene();
    assert!(scene.items.iter().all(|item| !item.draggable));
    assert!(scene.stage_draggable);
    assert_eq!(scene.cursor.as_css(), "grab");

    editor.set_tool(Tool::Pencil);
    let scene = editor.scene();
    assert!(!scene.stage_draggable);
    assert!(scene.items.iter().all(|item| !item.draggable));
}

#[test]
fn test_shape_press_in_draft_mode_draws() {
    let mut editor = TestEditorBuilder::new()
        .with_rect(1, (0.0, 0.0), (100.0, 100.0))
        .with_tool(Tool::Rectangle)
        .build();

    editor.handle_pointer_down(PointerEvent::on_shape(10.0, 10.0, sid(1)));
    editor.handle_pointer_move(PointerEvent::at(20.0, 20.0));
    editor.handle_pointer_up(PointerEvent::at(20.0, 20.0));

    assert_shape_count(&editor, 2);
    assert!(selected_ids(&editor).is_empty());
}
