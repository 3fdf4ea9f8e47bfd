//! Core types for the Inkboard canvas.
//!
//! This module defines the committed shape model shared by the store, the
//! pointer engine, the transform engine and the render boundary.

use crate::constants::TEXT_ADVANCE_RATIO;
use crate::style::{DefaultStyle, ShapeStyle};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

// ============================================================================
// Points & Boxes
// ============================================================================

/// A 2D point. Whether it is in screen or canvas space depends on where it
/// came from; the input layer converts at the boundary.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Shorthand constructor, mirroring `gpui::point`.
#[inline]
pub const fn point(x: f32, y: f32) -> Point {
    Point::new(x, y)
}

/// Marquee rectangle in canvas space.
///
/// Always normalized: `(x, y)` is the top-left corner and both extents are
/// non-negative, whatever direction the pointer was dragged in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectionBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl SelectionBox {
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// Axis-aligned bounds of a shape in canvas space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl Bounds {
    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }
}

// ============================================================================
// Shape Identity
// ============================================================================

/// Opaque shape identifier, unique for the editing session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShapeId(Uuid);

impl ShapeId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Deterministic id, handy for fixtures and replayed sessions.
    pub const fn from_u128(value: u128) -> Self {
        Self(Uuid::from_u128(value))
    }
}

impl Default for ShapeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// ============================================================================
// Shapes
// ============================================================================

/// Discriminant of a shape, without its geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    Rectangle,
    Ellipse,
    FreehandLine,
    Text,
}

impl ShapeKind {
    pub fn label(&self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "Rectangle",
            ShapeKind::Ellipse => "Ellipse",
            ShapeKind::FreehandLine => "Line",
            ShapeKind::Text => "Text",
        }
    }
}

/// Kind-specific geometry and content of a shape.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ShapeGeometry {
    /// Anchored at the top-left corner
    Rectangle { width: f32, height: f32 },
    /// Anchored at the center
    Ellipse { radius_x: f32, radius_y: f32 },
    /// Flattened `x0, y0, x1, y1, ...` relative to the canvas origin
    FreehandLine { points: Vec<f32> },
    /// Anchored at the top-left of the first line of text
    Text {
        text: String,
        font_size: f32,
        font_family: String,
        /// Wrap width set by a resize; `None` lets the text size itself
        #[serde(default, skip_serializing_if = "Option::is_none")]
        width: Option<f32>,
    },
}

impl ShapeGeometry {
    pub fn kind(&self) -> ShapeKind {
        match self {
            ShapeGeometry::Rectangle { .. } => ShapeKind::Rectangle,
            ShapeGeometry::Ellipse { .. } => ShapeKind::Ellipse,
            ShapeGeometry::FreehandLine { .. } => ShapeKind::FreehandLine,
            ShapeGeometry::Text { .. } => ShapeKind::Text,
        }
    }
}

/// A committed (or drafted) shape on the canvas.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub id: ShapeId,
    /// Anchor position in canvas space; always 0 for freehand lines
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub selected: bool,
    pub style: ShapeStyle,
    pub geometry: ShapeGeometry,
}

impl Shape {
    pub fn new(x: f32, y: f32, style: ShapeStyle, geometry: ShapeGeometry) -> Self {
        Self {
            id: ShapeId::new(),
            x,
            y,
            selected: false,
            style,
            geometry,
        }
    }

    pub fn rectangle(x: f32, y: f32, width: f32, height: f32, style: ShapeStyle) -> Self {
        Self::new(x, y, style, ShapeGeometry::Rectangle { width, height })
    }

    pub fn ellipse(x: f32, y: f32, radius_x: f32, radius_y: f32, style: ShapeStyle) -> Self {
        Self::new(x, y, style, ShapeGeometry::Ellipse { radius_x, radius_y })
    }

    /// Freehand line; its anchor is pinned to the origin.
    pub fn line(points: Vec<f32>, style: ShapeStyle) -> Self {
        Self::new(0.0, 0.0, style, ShapeGeometry::FreehandLine { points })
    }

    pub fn text(x: f32, y: f32, text: impl Into<String>, defaults: &DefaultStyle) -> Self {
        Self::new(
            x,
            y,
            defaults.shape.clone(),
            ShapeGeometry::Text {
                text: text.into(),
                font_size: defaults.font_size,
                font_family: defaults.font_family.clone(),
                width: None,
            },
        )
    }

    pub fn with_id(mut self, id: ShapeId) -> Self {
        self.id = id;
        self
    }

    pub fn with_selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn kind(&self) -> ShapeKind {
        self.geometry.kind()
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn is_text(&self) -> bool {
        matches!(self.geometry, ShapeGeometry::Text { .. })
    }

    /// Axis-aligned bounds in canvas space.
    ///
    /// Text is estimated from font size and character count unless a resize
    /// has fixed its width.
    pub fn bounds(&self) -> Bounds {
        match &self.geometry {
            ShapeGeometry::Rectangle { width, height } => Bounds {
                min_x: self.x.min(self.x + width),
                min_y: self.y.min(self.y + height),
                max_x: self.x.max(self.x + width),
                max_y: self.y.max(self.y + height),
            },
            ShapeGeometry::Ellipse { radius_x, radius_y } => Bounds {
                min_x: self.x - radius_x.abs(),
                min_y: self.y - radius_y.abs(),
                max_x: self.x + radius_x.abs(),
                max_y: self.y + radius_y.abs(),
            },
            ShapeGeometry::FreehandLine { points } => line_bounds(points, self.position()),
            ShapeGeometry::Text {
                text,
                font_size,
                width,
                ..
            } => {
                let lines = text.lines().count().max(1) as f32;
                let longest = text.lines().map(|l| l.chars().count()).max().unwrap_or(0) as f32;
                let w = width.unwrap_or(longest * font_size * TEXT_ADVANCE_RATIO);
                Bounds {
                    min_x: self.x,
                    min_y: self.y,
                    max_x: self.x + w.max(0.0),
                    max_y: self.y + lines * font_size.max(0.0),
                }
            }
        }
    }
}

fn line_bounds(points: &[f32], origin: Point) -> Bounds {
    let mut pairs = points.chunks_exact(2);
    let Some(first) = pairs.next() else {
        return Bounds {
            min_x: origin.x,
            min_y: origin.y,
            max_x: origin.x,
            max_y: origin.y,
        };
    };

    let mut bounds = Bounds {
        min_x: first[0],
        min_y: first[1],
        max_x: first[0],
        max_y: first[1],
    };
    for pair in pairs {
        bounds.min_x = bounds.min_x.min(pair[0]);
        bounds.min_y = bounds.min_y.min(pair[1]);
        bounds.max_x = bounds.max_x.max(pair[0]);
        bounds.max_y = bounds.max_y.max(pair[1]);
    }
    Bounds {
        min_x: bounds.min_x + origin.x,
        min_y: bounds.min_y + origin.y,
        max_x: bounds.max_x + origin.x,
        max_y: bounds.max_y + origin.y,
    }
}
