//! Editor state - the Editor struct and its read accessors.

use crate::input::InputState;
use crate::perf::PerfMonitor;
use crate::settings::EditorSettings;
use crate::store::ShapeStore;
use crate::style::DefaultStyle;
use crate::tools::{Tool, ToolState};
use crate::transform::{TransformHandle, TransformPolicy};
use crate::types::Shape;
use crate::viewport::Viewport;

/// The interaction core of one canvas.
///
/// Owns the committed shapes, the viewport, the active tool, the default
/// style and the gesture in progress. Collaborators read it through
/// `Editor::scene` and `Editor::style_panel` and write to
/// it only through the event handlers.
pub struct Editor {
    pub(crate) store: ShapeStore,
    pub(crate) viewport: Viewport,
    pub(crate) tools: ToolState,
    pub(crate) default_style: DefaultStyle,
    pub(crate) input: InputState,
    pub(crate) transformer: TransformHandle,
    pub(crate) policy: TransformPolicy,
    pub(crate) settings: EditorSettings,
    pub(crate) perf: PerfMonitor,
}

impl Editor {
    pub fn store(&self) -> &ShapeStore {
        &self.store
    }

    pub fn shapes(&self) -> &[Shape] {
        self.store.shapes()
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn tool(&self) -> Tool {
        self.tools.selected()
    }

    pub fn default_style(&self) -> &DefaultStyle {
        &self.default_style
    }

    pub fn input_state(&self) -> &InputState {
        &self.input
    }

    /// The in-progress draft, never part of [`shapes`](Self::shapes).
    pub fn draft(&self) -> Option<&Shape> {
        self.input.draft()
    }

    pub fn transformer(&self) -> &TransformHandle {
        &self.transformer
    }

    pub fn transform_policy(&self) -> &TransformPolicy {
        &self.policy
    }

    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    pub fn perf(&self) -> &PerfMonitor {
        &self.perf
    }
}
