//! Inkboard - the interaction core of a vector-shape whiteboard.
//!
//! The crate turns raw pointer, wheel and keyboard input into edits of a
//! committed shape list: marquee selection, shape drafting with a live
//! preview, drag, and resize through a transform handle, all under a
//! pannable, zoomable viewport.
//!
//! Rendering, the tool palette and the style panel are collaborators that
//! talk to [`editor::Editor`] through plain data: they read a
//! [`render::RenderScene`] and feed events back in.

pub mod constants;
pub mod editor;
pub mod error;
pub mod geometry;
pub mod input;
pub mod logging;
pub mod perf;
pub mod render;
pub mod settings;
pub mod settings_watcher;
pub mod spatial_index;
pub mod store;
pub mod style;
pub mod tools;
pub mod transform;
pub mod types;
pub mod viewport;

pub use editor::Editor;
