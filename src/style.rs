//! Shape styling: the per-shape style record, the editor's default style and
//! the partial patches the style panel produces.

use crate::constants::{
    DEFAULT_CORNER_RADIUS, DEFAULT_FILL, DEFAULT_FONT_FAMILY, DEFAULT_FONT_SIZE, DEFAULT_STROKE,
    DEFAULT_STROKE_WIDTH,
};
use crate::types::{Shape, ShapeGeometry};
use serde::{Deserialize, Serialize};

/// Stroke dash pattern as `[dash, gap]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dash(pub [f32; 2]);

impl Dash {
    pub const SOLID: Dash = Dash([0.0, 0.0]);

    /// A `[0, 0]` pattern draws a solid stroke.
    pub fn is_solid(&self) -> bool {
        self.0[0] <= 0.0 && self.0[1] <= 0.0
    }
}

/// Visual style carried by every shape.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeStyle {
    pub fill: String,
    pub stroke: String,
    pub stroke_width: f32,
    pub corner_radius: f32,
    pub fill_pattern: bool,
    /// `None` draws a solid stroke
    pub dash: Option<Dash>,
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            fill: DEFAULT_FILL.to_string(),
            stroke: DEFAULT_STROKE.to_string(),
            stroke_width: DEFAULT_STROKE_WIDTH,
            corner_radius: DEFAULT_CORNER_RADIUS,
            fill_pattern: false,
            dash: None,
        }
    }
}

/// Style applied to newly created shapes.
///
/// Initialized once from settings at startup, then only written through the
/// style panel (`Editor::apply_style`) and read by shape creation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultStyle {
    #[serde(flatten)]
    pub shape: ShapeStyle,
    pub font_size: f32,
    pub font_family: String,
}

impl Default for DefaultStyle {
    fn default() -> Self {
        Self {
            shape: ShapeStyle::default(),
            font_size: DEFAULT_FONT_SIZE,
            font_family: DEFAULT_FONT_FAMILY.to_string(),
        }
    }
}

impl DefaultStyle {
    /// Merge a patch into the defaults. Text content is per-shape and is not
    /// remembered.
    pub fn apply(&mut self, patch: &StylePatch) {
        patch.apply_to_style(&mut self.shape);
        if let Some(size) = patch.font_size {
            self.font_size = size.max(0.0);
        }
        if let Some(family) = &patch.font_family {
            self.font_family = family.clone();
        }
    }
}

/// A partial style update; `None` fields are left untouched.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StylePatch {
    pub fill: Option<String>,
    pub stroke: Option<String>,
    pub stroke_width: Option<f32>,
    pub corner_radius: Option<f32>,
    pub fill_pattern: Option<bool>,
    /// A solid dash clears the pattern
    pub dash: Option<Dash>,
    /// Text-only fields
    pub text: Option<String>,
    pub font_size: Option<f32>,
    pub font_family: Option<String>,
}

impl StylePatch {
    pub fn fill(fill: impl Into<String>) -> Self {
        Self {
            fill: Some(fill.into()),
            ..Default::default()
        }
    }

    pub fn stroke(stroke: impl Into<String>) -> Self {
        Self {
            stroke: Some(stroke.into()),
            ..Default::default()
        }
    }

    pub fn stroke_width(width: f32) -> Self {
        Self {
            stroke_width: Some(width),
            ..Default::default()
        }
    }

    pub fn corner_radius(radius: f32) -> Self {
        Self {
            corner_radius: Some(radius),
            ..Default::default()
        }
    }

    pub fn dash(dash: [f32; 2]) -> Self {
        Self {
            dash: Some(Dash(dash)),
            ..Default::default()
        }
    }

    pub fn fill_pattern(enabled: bool) -> Self {
        Self {
            fill_pattern: Some(enabled),
            ..Default::default()
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Default::default()
        }
    }

    pub fn font_size(size: f32) -> Self {
        Self {
            font_size: Some(size),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    fn apply_to_style(&self, style: &mut ShapeStyle) {
        if let Some(fill) = &self.fill {
            style.fill = fill.clone();
        }
        if let Some(stroke) = &self.stroke {
            style.stroke = stroke.clone();
        }
        if let Some(width) = self.stroke_width {
            style.stroke_width = width.max(0.0);
        }
        if let Some(radius) = self.corner_radius {
            style.corner_radius = radius.max(0.0);
        }
        if let Some(pattern) = self.fill_pattern {
            style.fill_pattern = pattern;
        }
        if let Some(dash) = self.dash {
            style.dash = (!dash.is_solid()).then_some(dash);
        }
    }

    /// Merge the patch into a shape. Text fields only touch text shapes.
    pub fn apply_to_shape(&self, shape: &mut Shape) {
        self.apply_to_style(&mut shape.style);

        if let ShapeGeometry::Text {
            text,
            font_size,
            font_family,
            ..
        } = &mut shape.geometry
        {
            if let Some(new_text) = &self.text {
                *text = new_text.clone();
            }
            if let Some(size) = self.font_size {
                *font_size = size.max(0.0);
            }
            if let Some(family) = &self.font_family {
                *font_family = family.clone();
            }
        }
    }
}
