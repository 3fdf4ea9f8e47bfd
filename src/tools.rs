//! Tool state - the active tool of the palette.

use crate::types::ShapeKind;
use serde::{Deserialize, Serialize};

/// Tools offered by the palette, in palette order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tool {
    #[default]
    Pointer,
    Grab,
    Rectangle,
    Ellipse,
    Text,
    Pencil,
}

/// Interaction mode a tool puts the pointer engine in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToolMode {
    Select,
    Pan,
    Draft(ShapeKind),
}

impl Tool {
    pub fn all() -> &'static [Tool] {
        &[
            Tool::Pointer,
            Tool::Grab,
            Tool::Rectangle,
            Tool::Ellipse,
            Tool::Text,
            Tool::Pencil,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tool::Pointer => "Pointer",
            Tool::Grab => "Grab",
            Tool::Rectangle => "Rectangle",
            Tool::Ellipse => "Ellipse",
            Tool::Text => "Text",
            Tool::Pencil => "Pencil",
        }
    }

    pub fn mode(&self) -> ToolMode {
        match self {
            Tool::Pointer => ToolMode::Select,
            Tool::Grab => ToolMode::Pan,
            Tool::Rectangle => ToolMode::Draft(ShapeKind::Rectangle),
            Tool::Ellipse => ToolMode::Draft(ShapeKind::Ellipse),
            Tool::Text => ToolMode::Draft(ShapeKind::Text),
            Tool::Pencil => ToolMode::Draft(ShapeKind::FreehandLine),
        }
    }

    /// Palette number shown on the tool button (1-based).
    pub fn shortcut(&self) -> u8 {
        Tool::all()
            .iter()
            .position(|t| t == self)
            .map(|i| i as u8 + 1)
            .unwrap_or(0)
    }

    pub fn from_shortcut(digit: u8) -> Option<Tool> {
        let index = usize::from(digit).checked_sub(1)?;
        Tool::all().get(index).copied()
    }

    /// Committed shapes can be dragged natively only with the pointer tool.
    pub fn shapes_draggable(&self) -> bool {
        matches!(self, Tool::Pointer)
    }
}

/// Owns the active tool.
#[derive(Clone, Debug, Default)]
pub struct ToolState {
    selected: Tool,
}

impl ToolState {
    pub fn new(tool: Tool) -> Self {
        Self { selected: tool }
    }

    pub fn selected(&self) -> Tool {
        self.selected
    }

    /// Switch tools; returns whether the tool actually changed.
    pub fn select(&mut self, tool: Tool) -> bool {
        let changed = self.selected != tool;
        self.selected = tool;
        changed
    }
}
