//! Transform engine - resize through the transform handle.
//!
//! The renderer owns the live handle and reports, at the end of a resize,
//! each attached shape's end position and independent X/Y scale factors.
//! [`resolve_transform`] folds those factors into kind-specific geometry so
//! the committed shape never carries a residual scale. The only state kept
//! here is which shapes the handle is attached to.

use crate::constants::{HANDLE_ANCHOR_SIZE, HANDLE_PADDING, MIN_TRANSFORM_SIZE};
use crate::geometry::scale_points;
use crate::types::{Shape, ShapeGeometry, ShapeId};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// End state of one shape under the handle, as reported by the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HandleEndState {
    pub id: ShapeId,
    /// Handle end position (the shape's new anchor)
    pub x: f32,
    pub y: f32,
    pub scale_x: f32,
    pub scale_y: f32,
    /// Unscaled bounding size of the shape's node
    pub width: f32,
    pub height: f32,
}

impl HandleEndState {
    /// The state a handle reports for a shape it has not changed.
    pub fn at_rest(shape: &Shape) -> Self {
        let (width, height) = match &shape.geometry {
            ShapeGeometry::Rectangle { width, height } => (*width, *height),
            ShapeGeometry::Ellipse { radius_x, radius_y } => (radius_x * 2.0, radius_y * 2.0),
            ShapeGeometry::Text { width: Some(w), .. } => (*w, shape.bounds().height()),
            ShapeGeometry::Text { width: None, .. } | ShapeGeometry::FreehandLine { .. } => {
                let b = shape.bounds();
                (b.width(), b.height())
            }
        };

        Self {
            id: shape.id,
            x: shape.x,
            y: shape.y,
            scale_x: 1.0,
            scale_y: 1.0,
            width,
            height,
        }
    }

    pub fn scaled(mut self, scale_x: f32, scale_y: f32) -> Self {
        self.scale_x = scale_x;
        self.scale_y = scale_y;
        self
    }

    pub fn moved_to(mut self, x: f32, y: f32) -> Self {
        self.x = x;
        self.y = y;
        self
    }
}

/// Fold a handle end state into a shape, returning the replacement value.
///
/// Derived sizes are floored at zero. Lines keep their anchor and have each
/// point scaled per axis; rotation never reaches line geometry.
pub fn resolve_transform(shape: &Shape, end: &HandleEndState) -> Shape {
    let mut resolved = shape.clone();
    let (sx, sy) = (end.scale_x, end.scale_y);

    match &mut resolved.geometry {
        ShapeGeometry::Rectangle { width, height } => {
            resolved.x = end.x;
            resolved.y = end.y;
            *width = (end.width * sx).max(0.0);
            *height = (end.height * sy).max(0.0);
        }
        ShapeGeometry::Ellipse { radius_x, radius_y } => {
            resolved.x = end.x;
            resolved.y = end.y;
            *radius_x = (end.width / 2.0 * sx).max(0.0);
            *radius_y = (end.height / 2.0 * sy).max(0.0);
        }
        ShapeGeometry::Text { width, .. } => {
            resolved.x = end.x;
            resolved.y = end.y;
            // Text height follows the font; only a wrap width is persisted
            if width.is_some() || sx != 1.0 {
                *width = Some((end.width * sx).max(0.0));
            }
        }
        ShapeGeometry::FreehandLine { points } => {
            *points = scale_points(points, sx, sy);
        }
    }

    resolved
}

/// Resolve a transform over a whole shape list. Shapes without an end state
/// come back unchanged.
pub fn resolve_all(shapes: &[Shape], ends: &[HandleEndState]) -> Vec<Shape> {
    shapes
        .iter()
        .map(|shape| match ends.iter().find(|e| e.id == shape.id) {
            Some(end) => resolve_transform(shape, end),
            None => shape.clone(),
        })
        .collect()
}

/// Box proposed by the handle while dragging an anchor (canvas units).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HandleBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Resize rules the renderer's handle must follow.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransformPolicy {
    pub min_size: f32,
    pub keep_ratio: bool,
    pub rotate_enabled: bool,
    pub flip_enabled: bool,
    pub anchor_size: f32,
    pub padding: f32,
}

impl Default for TransformPolicy {
    fn default() -> Self {
        Self {
            min_size: MIN_TRANSFORM_SIZE,
            keep_ratio: true,
            rotate_enabled: false,
            flip_enabled: false,
            anchor_size: HANDLE_ANCHOR_SIZE,
            padding: HANDLE_PADDING,
        }
    }
}

impl TransformPolicy {
    /// Accept or reject a proposed box. Boxes under the minimum size, and
    /// flipped boxes when flipping is off, keep the previous box.
    pub fn bound_box(&self, old: HandleBox, proposed: HandleBox) -> HandleBox {
        if proposed.width.abs() < self.min_size || proposed.height.abs() < self.min_size {
            return old;
        }
        if !self.flip_enabled && (proposed.width < 0.0 || proposed.height < 0.0) {
            return old;
        }
        proposed
    }

    /// Apply the aspect-ratio lock, following whichever axis changed most,
    /// then the size rules.
    pub fn constrain(&self, old: HandleBox, proposed: HandleBox) -> HandleBox {
        let mut next = proposed;

        if self.keep_ratio && old.width > 0.0 && old.height > 0.0 {
            let fx = proposed.width / old.width;
            let fy = proposed.height / old.height;
            let factor = if (fx - 1.0).abs() >= (fy - 1.0).abs() { fx } else { fy };
            next.width = old.width * factor;
            next.height = old.height * factor;
        }

        self.bound_box(old, next)
    }
}

/// Which shapes the transform handle is attached to.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TransformHandle {
    attached: Vec<ShapeId>,
}

impl TransformHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attached(&self) -> &[ShapeId] {
        &self.attached
    }

    pub fn is_attached(&self, id: ShapeId) -> bool {
        self.attached.contains(&id)
    }

    pub fn is_empty(&self) -> bool {
        self.attached.is_empty()
    }

    /// Attach the handle to exactly these shapes.
    pub fn attach(&mut self, ids: impl IntoIterator<Item = ShapeId>) {
        self.attached = ids.into_iter().collect();
        trace!(count = self.attached.len(), "Transform handle attached");
    }

    pub fn detach(&mut self) {
        self.attached.clear();
    }

    /// Drop attachments to shapes that no longer exist.
    pub fn retain(&mut self, mut keep: impl FnMut(ShapeId) -> bool) {
        self.attached.retain(|id| keep(*id));
    }

    /// Replacement values for attached shapes that reported an end state.
    pub fn resolve_end(&self, shapes: &[Shape], ends: &[HandleEndState]) -> Vec<Shape> {
        shapes
            .iter()
            .filter(|s| self.is_attached(s.id))
            .filter_map(|s| {
                let end = ends.iter().find(|e| e.id == s.id)?;
                Some(resolve_transform(s, end))
            })
            .collect()
    }
}
