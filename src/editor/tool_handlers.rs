//! Tool palette boundary.

use super::Editor;
use crate::tools::Tool;
use tracing::info;

impl Editor {
    /// Switch the active tool. A real change clears the selection, detaches
    /// the transform handle and drops any gesture in progress.
    /// Returns whether the tool changed.
    pub fn set_tool(&mut self, tool: Tool) -> bool {
        if !self.tools.select(tool) {
            return false;
        }

        self.store.clear_selection();
        self.transformer.detach();
        self.input.reset();
        info!(tool = tool.label(), "Tool changed");
        true
    }
}
