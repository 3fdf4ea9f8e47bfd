//! Style panel boundary - patches, deletion and the panel's view.

use super::Editor;
use crate::style::{DefaultStyle, StylePatch};
use crate::types::{Shape, ShapeId};
use tracing::debug;

/// What the style panel needs to render itself.
#[derive(Debug)]
pub struct StylePanelView<'a> {
    pub default_style: &'a DefaultStyle,
    pub selected: Vec<&'a Shape>,
    /// Text and font size fields are shown only for selected text
    pub show_text_controls: bool,
    pub can_delete: bool,
}

impl Editor {
    /// Merge a patch into the selection and into the default style.
    pub fn apply_style(&mut self, patch: &StylePatch) {
        if patch.is_empty() {
            return;
        }
        self.store.apply_style(patch, &mut self.default_style);
        debug!(selected = self.store.selected_count(), "Style applied");
    }

    /// Remove the selected shapes and detach the transform handle.
    pub fn delete_selected(&mut self) -> Vec<ShapeId> {
        let removed = self.store.delete_selected();
        self.transformer.detach();
        removed
    }

    pub fn style_panel(&self) -> StylePanelView<'_> {
        let selected: Vec<&Shape> = self.store.selected().collect();
        StylePanelView {
            default_style: &self.default_style,
            show_text_controls: selected.iter().any(|s| s.is_text()),
            can_delete: !selected.is_empty(),
            selected,
        }
    }
}
