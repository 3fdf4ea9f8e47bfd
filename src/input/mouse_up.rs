//! Pointer up handling - finalize the gesture, committing any draft.
//!
//! Releasing the pointer always ends the gesture; a draft is either
//! committed or dropped, never left behind.

use super::{InputState, PointerEvent};
use crate::editor::Editor;
use crate::perf::measure;
use crate::profile_scope;
use tracing::debug;

impl Editor {
    pub fn handle_pointer_up(&mut self, event: PointerEvent) {
        let ((), elapsed_ms) = measure(|| self.pointer_up(event));
        self.perf.record_operation("pointer_up", elapsed_ms);
    }

    fn pointer_up(&mut self, _event: PointerEvent) {
        profile_scope!("handle_pointer_up");

        match self.input.finish() {
            InputState::Drafting { draft, .. } => {
                debug!(kind = draft.kind().label(), id = %draft.id, "Draft committed");
                self.store.create(draft);
            }
            InputState::MarqueeSelecting { .. } => {
                debug!(selected = self.store.selected_count(), "Marquee finished");
            }
            InputState::Idle
            | InputState::Pressed
            | InputState::DraggingShape { .. }
            | InputState::Panning { .. } => {}
        }
    }
}
