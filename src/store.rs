//! Shape store - the committed, ordered shape list and its selection flags.
//!
//! The store is the single source of truth for committed shapes. Every
//! mutation goes through the operations below; the pointer and transform
//! engines hand in whole replacement values rather than writing fields.
//! Operations are total: an unknown id matches nothing and is a no-op.

use crate::geometry::{is_shape_in_selection, translate_points};
use crate::profile_scope;
use crate::spatial_index::SpatialIndex;
use crate::style::{DefaultStyle, StylePatch};
use crate::types::{Point, SelectionBox, Shape, ShapeGeometry, ShapeId};
use std::collections::HashSet;
use tracing::{debug, trace};

#[derive(Default)]
pub struct ShapeStore {
    /// Draw order: later shapes paint above earlier ones
    shapes: Vec<Shape>,
    index: SpatialIndex,
}

impl ShapeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_shapes(shapes: Vec<Shape>) -> Self {
        let index = SpatialIndex::from_entries(shapes.iter().map(|s| (s.id, s.bounds())));
        Self { shapes, index }
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn get(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id == id)
    }

    pub fn contains(&self, id: ShapeId) -> bool {
        self.get(id).is_some()
    }

    pub fn selected(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.iter().filter(|s| s.selected)
    }

    pub fn selected_ids(&self) -> Vec<ShapeId> {
        self.selected().map(|s| s.id).collect()
    }

    pub fn selected_count(&self) -> usize {
        self.selected().count()
    }

    /// Topmost shape whose bounds contain `canvas_pos`.
    pub fn shape_at(&self, canvas_pos: Point) -> Option<ShapeId> {
        profile_scope!("store_shape_at");

        let candidates: HashSet<ShapeId> = self
            .index
            .query_point(canvas_pos.x, canvas_pos.y)
            .into_iter()
            .collect();

        self.shapes
            .iter()
            .rev()
            .find(|s| candidates.contains(&s.id))
            .map(|s| s.id)
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    /// Append a shape on top of the draw order.
    pub fn create(&mut self, shape: Shape) -> ShapeId {
        let id = shape.id;
        debug!(%id, kind = shape.kind().label(), "Shape created");
        self.index.insert(id, shape.bounds());
        self.shapes.push(shape);
        id
    }

    /// Exclusive-select `id`, or clear everything if `id` already was the
    /// only selected shape.
    pub fn toggle_select(&mut self, id: ShapeId) {
        if !self.contains(id) {
            trace!(%id, "toggle_select on unknown shape");
            return;
        }

        let sole_selection = self.selected_count() == 1 && self.get(id).is_some_and(|s| s.selected);

        for shape in &mut self.shapes {
            shape.selected = !sole_selection && shape.id == id;
        }
    }

    pub fn clear_selection(&mut self) {
        for shape in &mut self.shapes {
            shape.selected = false;
        }
    }

    /// Set every shape's selection to whether its anchor lies in `area`.
    /// Returns the number of selected shapes.
    pub fn select_in_area(&mut self, area: &SelectionBox) -> usize {
        profile_scope!("store_select_in_area");

        let mut count = 0;
        for shape in &mut self.shapes {
            shape.selected = is_shape_in_selection(shape, area);
            count += usize::from(shape.selected);
        }
        count
    }

    /// Move a shape's anchor. Freehand lines keep their anchor at the origin
    /// and have their points translated instead.
    pub fn move_shape(&mut self, id: ShapeId, x: f32, y: f32) -> bool {
        let Some(shape) = self.shapes.iter_mut().find(|s| s.id == id) else {
            trace!(%id, "move on unknown shape");
            return false;
        };

        match &mut shape.geometry {
            ShapeGeometry::FreehandLine { points } => {
                translate_points(points, x - shape.x, y - shape.y);
            }
            _ => {
                shape.x = x;
                shape.y = y;
            }
        }

        self.index.insert(id, shape.bounds());
        true
    }

    /// Merge a style patch into every selected shape and into the defaults.
    pub fn apply_style(&mut self, patch: &StylePatch, defaults: &mut DefaultStyle) {
        defaults.apply(patch);

        for shape in self.shapes.iter_mut().filter(|s| s.selected) {
            patch.apply_to_shape(shape);
            self.index.insert(shape.id, shape.bounds());
        }
    }

    /// Remove all selected shapes, returning their ids.
    pub fn delete_selected(&mut self) -> Vec<ShapeId> {
        let removed: Vec<ShapeId> = self.selected_ids();
        for id in &removed {
            self.index.remove(*id);
        }
        self.shapes.retain(|s| !s.selected);

        if !removed.is_empty() {
            debug!(count = removed.len(), "Deleted selected shapes");
        }
        removed
    }

    /// Replace shapes by id with new values, keeping draw order.
    /// Values whose id is not in the store are dropped.
    pub fn replace(&mut self, updated: impl IntoIterator<Item = Shape>) -> usize {
        let mut replaced = 0;
        for new_shape in updated {
            if let Some(slot) = self.shapes.iter_mut().find(|s| s.id == new_shape.id) {
                self.index.insert(new_shape.id, new_shape.bounds());
                *slot = new_shape;
                replaced += 1;
            }
        }
        replaced
    }
}
