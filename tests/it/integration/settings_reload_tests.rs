//! Settings Reload Integration Tests

use crate::helpers::{TestEditorBuilder, assert_approx};
use inkboard::Editor;
use inkboard::input::{PointerEvent, WheelEvent};
use inkboard::settings::EditorSettings;
use inkboard::settings_watcher::SettingsWatcher;
use inkboard::style::StylePatch;
use inkboard::tools::Tool;
use inkboard::types::ShapeGeometry;
use std::fs;
use std::time::{Duration, Instant};
use tempfile::tempdir;

#[test]
fn test_placeholder_comes_from_settings() {
    let settings = EditorSettings {
        placeholder_text: "Hello".into(),
        ..EditorSettings::default()
    };
    let mut editor = Editor::with_settings(settings);
    editor.set_tool(Tool::Text);
    editor.handle_pointer_down(PointerEvent::at(0.0, 0.0));

    match &editor.shapes()[0].geometry {
        ShapeGeometry::Text { text, .. } => assert_eq!(text, "Hello"),
        other => panic!("expected text, got {other:?}"),
    }
}

#[test]
fn test_settings_style_seeds_defaults() {
    let mut settings = EditorSettings::default();
    settings.default_style.shape.stroke = "black".into();
    let editor = Editor::with_settings(settings);
    assert_eq!(editor.default_style().shape.stroke, "black");
}

#[test]
fn test_reload_updates_zoom_limits() {
    let mut editor = TestEditorBuilder::new().build();
    let state = editor.handle_wheel(WheelEvent::at(0.0, 0.0, -1.0));
    assert_eq!(state.scale, 1.0);

    editor.reload_settings(EditorSettings {
        max_scale: 2.0,
        ..EditorSettings::default()
    });
    let state = editor.handle_wheel(WheelEvent::at(0.0, 0.0, -1.0));
    assert_approx(state.scale, 1.1);
}

#[test]
fn test_reload_updates_transform_policy() {
    let mut editor = TestEditorBuilder::new().build();
    editor.reload_settings(EditorSettings {
        min_transform_size: 12.5,
        keep_ratio: false,
        ..EditorSettings::default()
    });

    assert_eq!(editor.transform_policy().min_size, 12.5);
    assert!(!editor.transform_policy().keep_ratio);
    assert_eq!(editor.scene().handle.policy.min_size, 12.5);
}

#[test]
fn test_reload_keeps_panel_defaults() {
    let mut editor = TestEditorBuilder::new().build();
    editor.apply_style(&StylePatch::fill("purple"));

    let mut settings = EditorSettings::default();
    settings.default_style.shape.fill = "black".into();
    editor.reload_settings(settings);

    assert_eq!(editor.default_style().shape.fill, "purple");
}

#[test]
fn test_saved_settings_reload_into_editor() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("settings.json");

    let settings = EditorSettings {
        min_scale: 0.25,
        max_scale: 4.0,
        ..EditorSettings::default()
    };
    settings.save(&path).unwrap();

    let loaded = EditorSettings::load(&path).unwrap();
    assert_eq!(loaded, settings);

    let mut editor = TestEditorBuilder::new().build();
    editor.reload_settings(loaded);
    assert_eq!(editor.viewport().scale_limits(), (0.25, 4.0));
    assert_eq!(editor.settings().max_scale, 4.0);
}

#[test]
fn test_quiet_watcher_does_not_reload() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    EditorSettings::default().save(&path).unwrap();

    let mut watcher = SettingsWatcher::new(path).unwrap();
    let mut editor = TestEditorBuilder::new().build();
    assert!(!editor.check_settings_reload(&mut watcher));
}

/// Poll the editor against the watcher until `done` holds or time runs out.
fn reload_until(
    editor: &mut Editor,
    watcher: &mut SettingsWatcher,
    done: impl Fn(&Editor) -> bool,
) {
    let deadline = Instant::now() + Duration::from_secs(5);
    while Instant::now() < deadline && !done(editor) {
        editor.check_settings_reload(watcher);
        std::thread::sleep(Duration::from_millis(20));
    }
}

#[test]
fn test_edited_file_reloads_running_editor() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    EditorSettings::default().save(&path).unwrap();

    let mut watcher = SettingsWatcher::new(path.clone()).unwrap();
    let mut editor = TestEditorBuilder::new().build();

    EditorSettings {
        max_scale: 2.0,
        ..EditorSettings::default()
    }
    .save(&path)
    .unwrap();
    reload_until(&mut editor, &mut watcher, |e| e.settings().max_scale == 2.0);
    assert_eq!(editor.viewport().scale_limits(), (0.1, 2.0));

    fs::remove_file(&path).unwrap();
    EditorSettings {
        max_scale: 3.0,
        ..EditorSettings::default()
    }
    .save(&path)
    .unwrap();
    reload_until(&mut editor, &mut watcher, |e| e.settings().max_scale == 3.0);
    assert_eq!(editor.settings().max_scale, 3.0);

    fs::write(&path, "not json").unwrap();
    let deadline = Instant::now() + Duration::from_millis(300);
    while Instant::now() < deadline {
        editor.check_settings_reload(&mut watcher);
        std::thread::sleep(Duration::from_millis(20));
    }
    assert_eq!(editor.settings().max_scale, 3.0);
}
