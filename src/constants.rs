//! Editor-wide constants.
//!
//! Centralizes magic numbers and style presets so the interaction code
//! stays free of literals.

// ============================================================================
// Zoom & Pan
// ============================================================================

/// Minimum zoom level
pub const MIN_SCALE: f32 = 0.1;

/// Maximum zoom level
pub const MAX_SCALE: f32 = 1.0;

/// Default zoom level
pub const DEFAULT_SCALE: f32 = 1.0;

/// Multiplier applied per wheel notch
pub const SCALE_SPEED: f32 = 1.1;

// ============================================================================
// Transform Handle
// ============================================================================

/// Smallest box (canvas units, both axes) a resize may produce
pub const MIN_TRANSFORM_SIZE: f32 = 5.0;

/// Size of the handle anchors in screen pixels
pub const HANDLE_ANCHOR_SIZE: f32 = 8.0;

/// Gap between a shape and the handle border in screen pixels
pub const HANDLE_PADDING: f32 = 4.0;

// ============================================================================
// Shape Defaults
// ============================================================================

/// Text placed by a click with the text tool
pub const PLACEHOLDER_TEXT: &str = "Some Text";

pub const DEFAULT_FILL: &str = "transparent";
pub const DEFAULT_STROKE: &str = "white";
pub const DEFAULT_STROKE_WIDTH: f32 = 3.0;
pub const DEFAULT_CORNER_RADIUS: f32 = 10.0;
pub const DEFAULT_FONT_SIZE: f32 = 54.0;
pub const DEFAULT_FONT_FAMILY: &str = "Virgil";

/// Fill used for freehand lines regardless of the default style
pub const LINE_FILL: &str = "transparent";

/// Average glyph advance as a fraction of the font size, used to estimate
/// text bounds when the renderer has not measured them
pub const TEXT_ADVANCE_RATIO: f32 = 0.6;

// ============================================================================
// Style Panel Presets
// ============================================================================

pub const STROKE_COLORS: &[&str] = &["white", "black", "gray", "purple"];

pub const BACKGROUND_COLORS: &[&str] = &["white", "black", "gray", "purple", "transparent"];

pub const CORNER_RADII: &[f32] = &[0.0, 10.0, 20.0];

pub const STROKE_WIDTHS: &[f32] = &[1.0, 3.0, 5.0];

/// Dash patterns as `[dash, gap]`; `[0, 0]` is a solid stroke
pub const DASHES: &[[f32; 2]] = &[[0.0, 0.0], [2.0, 2.0], [10.0, 10.0]];

pub const FILL_PATTERNS: &[bool] = &[false, true];

// ============================================================================
// Overlay Colors
// ============================================================================

pub const HANDLE_ANCHOR_FILL: &str = "#6b21a8";
pub const HANDLE_BORDER_STROKE: &str = "#8b5cf6";
pub const HANDLE_BORDER_WIDTH: f32 = 2.0;

pub const MARQUEE_FILL: &str = "#27272a";
pub const MARQUEE_STROKE: &str = "#9333ea";
pub const MARQUEE_STROKE_WIDTH: f32 = 2.0;
pub const MARQUEE_OPACITY: f32 = 0.4;
