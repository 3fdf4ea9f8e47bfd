//! The editor façade - the single owner of all canvas state.
//!
//! Event handlers live next to the concern they serve:
//!
//! - `state` - the `Editor` struct and read accessors
//! - `lifecycle` - construction and settings reload
//! - `shape_events` - per-shape sinks (drag end, click, transform end)
//! - `style_handlers` - style patches, deletion and the style panel view
//! - `tool_handlers` - tool changes
//!
//! Pointer, wheel and keyboard handlers are in [`crate::input`].

mod lifecycle;
mod shape_events;
mod state;
mod style_handlers;
mod tool_handlers;

pub use state::Editor;
pub use style_handlers::StylePanelView;
