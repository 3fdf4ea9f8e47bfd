//! Keyboard shortcuts - tool digits and deletion.

use crate::editor::Editor;
use crate::tools::Tool;
use tracing::trace;

/// Keys the editor reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    /// Number row key, `0..=9`
    Digit(u8),
    Delete,
    Backspace,
}

impl Editor {
    /// Returns true if the key changed anything.
    pub fn handle_key(&mut self, key: Key) -> bool {
        match key {
            Key::Digit(digit) => match Tool::from_shortcut(digit) {
                Some(tool) => self.set_tool(tool),
                None => {
                    trace!(digit, "no tool on this digit");
                    false
                }
            },
            Key::Delete | Key::Backspace => !self.delete_selected().is_empty(),
        }
    }
}
