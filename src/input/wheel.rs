//! Wheel handling - zoom anchored at the pointer.

use super::WheelEvent;
use crate::editor::Editor;
use crate::viewport::ViewportState;

impl Editor {
    /// Zoom one step in the direction of the wheel delta. Events without a
    /// position leave the viewport as it is.
    pub fn handle_wheel(&mut self, event: WheelEvent) -> ViewportState {
        self.viewport.on_wheel(event.position, event.delta_y)
    }
}
