//! Rendering boundary - a read-only snapshot of everything the renderer
//! draws.
//!
//! The renderer draws, in order: committed shapes (draw order preserved),
//! the transform handle, the draft on its own layer, then the marquee. It
//! applies the viewport as a global transform first and never mutates the
//! editor; edits come back through the editor's event handlers.

use crate::constants::{
    HANDLE_ANCHOR_FILL, HANDLE_BORDER_STROKE, HANDLE_BORDER_WIDTH, MARQUEE_FILL, MARQUEE_OPACITY,
    MARQUEE_STROKE, MARQUEE_STROKE_WIDTH,
};
use crate::editor::Editor;
use crate::tools::Tool;
use crate::transform::TransformPolicy;
use crate::types::{SelectionBox, Shape, ShapeId};
use crate::viewport::ViewportState;
use serde::Serialize;

/// Glow drawn behind selected shapes
pub const SELECTION_SHADOW_COLOR: &str = "#5b21b6";
pub const SELECTION_SHADOW_BLUR: f32 = 20.0;

/// Text outlines are always drawn hairline
pub const TEXT_STROKE_WIDTH: f32 = 1.0;

/// Side of the diagonal-hatch tile used for pattern fills
pub const FILL_PATTERN_TILE: f32 = 22.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CursorStyle {
    #[default]
    Default,
    Grab,
    Move,
}

impl CursorStyle {
    /// CSS cursor keyword
    pub fn as_css(&self) -> &'static str {
        match self {
            CursorStyle::Default => "default",
            CursorStyle::Grab => "grab",
            CursorStyle::Move => "move",
        }
    }

    /// Cursor over the stage with `tool` active
    pub fn for_tool(tool: Tool) -> Self {
        if tool == Tool::Grab {
            CursorStyle::Grab
        } else {
            CursorStyle::Default
        }
    }
}

/// Cursor while hovering: shapes show `Move`, the stage falls back to the
/// tool cursor.
pub fn hover_cursor(tool: Tool, over_shape: bool) -> CursorStyle {
    if over_shape {
        CursorStyle::Move
    } else {
        CursorStyle::for_tool(tool)
    }
}

/// One committed shape with its per-frame render attributes.
#[derive(Clone, Copy, Debug)]
pub struct RenderItem<'a> {
    pub shape: &'a Shape,
    /// Selected shapes get the selection glow
    pub highlighted: bool,
    pub draggable: bool,
    pub stroke_width: f32,
}

impl<'a> RenderItem<'a> {
    fn new(shape: &'a Shape, draggable: bool) -> Self {
        let stroke_width = if shape.is_text() {
            TEXT_STROKE_WIDTH
        } else {
            shape.style.stroke_width
        };
        Self {
            shape,
            highlighted: shape.selected,
            draggable,
            stroke_width,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarqueeOverlay {
    pub area: SelectionBox,
    pub fill: &'static str,
    pub stroke: &'static str,
    pub stroke_width: f32,
    pub opacity: f32,
}

impl MarqueeOverlay {
    fn new(area: SelectionBox) -> Self {
        Self {
            area,
            fill: MARQUEE_FILL,
            stroke: MARQUEE_STROKE,
            stroke_width: MARQUEE_STROKE_WIDTH,
            opacity: MARQUEE_OPACITY,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct HandleOverlay<'a> {
    pub attached: &'a [ShapeId],
    pub policy: &'a TransformPolicy,
    pub anchor_fill: &'static str,
    pub border_stroke: &'static str,
    pub border_width: f32,
}

impl HandleOverlay<'_> {
    pub fn is_visible(&self) -> bool {
        !self.attached.is_empty()
    }
}

/// Everything the renderer needs for one frame.
#[derive(Clone, Debug)]
pub struct RenderScene<'a> {
    pub items: Vec<RenderItem<'a>>,
    /// In-progress shape, drawn on the preview layer
    pub draft: Option<&'a Shape>,
    pub marquee: Option<MarqueeOverlay>,
    pub viewport: ViewportState,
    pub handle: HandleOverlay<'a>,
    /// The stage itself is draggable with the grab tool
    pub stage_draggable: bool,
    pub cursor: CursorStyle,
}

impl Editor {
    pub fn scene(&self) -> RenderScene<'_> {
        let tool = self.tools.selected();
        let draggable = tool.shapes_draggable();

        RenderScene {
            items: self
                .store
                .shapes()
                .iter()
                .map(|shape| RenderItem::new(shape, draggable))
                .collect(),
            draft: self.input.draft(),
            marquee: self.input.selection_box().map(MarqueeOverlay::new),
            viewport: self.viewport.state(),
            handle: HandleOverlay {
                attached: self.transformer.attached(),
                policy: &self.policy,
                anchor_fill: HANDLE_ANCHOR_FILL,
                border_stroke: HANDLE_BORDER_STROKE,
                border_width: HANDLE_BORDER_WIDTH,
            },
            stage_draggable: tool == Tool::Grab,
            cursor: CursorStyle::for_tool(tool),
        }
    }
}
