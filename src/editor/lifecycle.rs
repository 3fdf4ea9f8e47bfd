//! Editor lifecycle - construction and settings reload.

use super::Editor;
use crate::input::InputState;
use crate::perf::PerfMonitor;
use crate::settings::EditorSettings;
use crate::settings_watcher::{SettingsEvent, SettingsWatcher};
use crate::store::ShapeStore;
use crate::tools::ToolState;
use crate::transform::TransformHandle;
use crate::types::Shape;
use crate::viewport::{Viewport, ViewportState};
use std::path::Path;
use tracing::{debug, error, info, warn};

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

impl Editor {
    pub fn new() -> Self {
        Self::with_settings(EditorSettings::default())
    }

    /// Build an editor from settings. The default style is taken from the
    /// settings once, here; afterwards only the style panel changes it.
    pub fn with_settings(settings: EditorSettings) -> Self {
        Self {
            store: ShapeStore::new(),
            viewport: Viewport::new(settings.min_scale, settings.max_scale, settings.scale_speed),
            tools: ToolState::default(),
            default_style: settings.default_style.clone(),
            input: InputState::default(),
            transformer: TransformHandle::new(),
            policy: settings.transform_policy(),
            settings,
            perf: PerfMonitor::new(),
        }
    }

    /// Seed the store with existing shapes.
    pub fn with_shapes(mut self, shapes: Vec<Shape>) -> Self {
        self.store = ShapeStore::from_shapes(shapes);
        self
    }

    /// Restore a saved pan/zoom, clamped into the current zoom limits.
    pub fn restore_viewport(&mut self, state: ViewportState) {
        self.viewport = self.viewport.clone().with_state(state);
    }

    /// Apply new settings to a running editor.
    ///
    /// Zoom limits, zoom speed, placeholder text and the transform policy
    /// take effect immediately. The default style is left alone.
    pub fn reload_settings(&mut self, settings: EditorSettings) {
        self.viewport
            .set_limits(settings.min_scale, settings.max_scale, settings.scale_speed);
        self.policy = settings.transform_policy();

        let keep_style = std::mem::take(&mut self.settings.default_style);
        self.settings = EditorSettings {
            default_style: keep_style,
            ..settings
        };
        debug!(
            min_scale = self.settings.min_scale,
            max_scale = self.settings.max_scale,
            "Settings applied"
        );
    }

    /// Drain one event from a settings watcher and react to it.
    /// Returns true if settings were reloaded.
    pub fn check_settings_reload(&mut self, watcher: &mut SettingsWatcher) -> bool {
        let Some(event) = watcher.poll() else {
            return false;
        };
        self.apply_settings_event(event, watcher.path())
    }

    /// React to one settings event for the file at `path`. A file that fails
    /// to load or validate leaves the running settings untouched.
    pub fn apply_settings_event(&mut self, event: SettingsEvent, path: &Path) -> bool {
        match event {
            SettingsEvent::Changed => match EditorSettings::load(path) {
                Ok(settings) => {
                    info!(path = %path.display(), "Settings file changed, reloading");
                    self.reload_settings(settings);
                    true
                }
                Err(e) => {
                    warn!(path = %path.display(), "Ignoring settings change: {}", e);
                    false
                }
            },
            SettingsEvent::Deleted => {
                warn!("Settings file deleted, keeping current settings");
                false
            }
            SettingsEvent::Error(e) => {
                error!("Settings watch error: {}", e);
                false
            }
        }
    }
}
