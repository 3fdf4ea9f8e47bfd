//! Spatial Index Module
//!
//! R-tree over shape bounds for hit testing on the canvas. Point queries
//! run in O(log n) instead of scanning every shape.

use crate::types::{Bounds, ShapeId};
use rstar::{AABB, RTree, RTreeObject};
use std::collections::HashMap;

/// A spatial entry representing a shape's bounding box.
#[derive(Debug, Clone, Copy)]
pub struct SpatialEntry {
    pub shape_id: ShapeId,
    pub bounds: Bounds,
}

impl SpatialEntry {
    pub fn new(shape_id: ShapeId, bounds: Bounds) -> Self {
        Self { shape_id, bounds }
    }
}

impl RTreeObject for SpatialEntry {
    type Envelope = AABB<[f32; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(
            [self.bounds.min_x, self.bounds.min_y],
            [self.bounds.max_x, self.bounds.max_y],
        )
    }
}

impl PartialEq for SpatialEntry {
    fn eq(&self, other: &Self) -> bool {
        self.shape_id == other.shape_id
    }
}

pub struct SpatialIndex {
    tree: RTree<SpatialEntry>,
    entries: HashMap<ShapeId, SpatialEntry>,
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self {
            tree: RTree::new(),
            entries: HashMap::new(),
        }
    }

    /// Build a spatial index from `(id, bounds)` pairs.
    pub fn from_entries<I>(items: I) -> Self
    where
        I: Iterator<Item = (ShapeId, Bounds)>,
    {
        let mut index = Self::new();
        index.rebuild(items);
        index
    }

    /// Insert or replace the entry for `shape_id`.
    pub fn insert(&mut self, shape_id: ShapeId, bounds: Bounds) {
        if let Some(old_entry) = self.entries.remove(&shape_id) {
            self.tree.remove(&old_entry);
        }

        let entry = SpatialEntry::new(shape_id, bounds);
        self.tree.insert(entry);
        self.entries.insert(shape_id, entry);
    }

    pub fn remove(&mut self, shape_id: ShapeId) -> bool {
        if let Some(entry) = self.entries.remove(&shape_id) {
            self.tree.remove(&entry);
            true
        } else {
            false
        }
    }

    /// Ids of all shapes whose bounds contain the point (canvas space).
    pub fn query_point(&self, x: f32, y: f32) -> Vec<ShapeId> {
        let point_envelope = AABB::from_point([x, y]);

        self.tree
            .locate_in_envelope_intersecting(&point_envelope)
            .filter(|entry| entry.bounds.contains(crate::types::Point::new(x, y)))
            .map(|entry| entry.shape_id)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn rebuild<I>(&mut self, items: I)
    where
        I: Iterator<Item = (ShapeId, Bounds)>,
    {
        let entries: Vec<SpatialEntry> = items
            .map(|(id, bounds)| SpatialEntry::new(id, bounds))
            .collect();

        self.entries = entries.iter().map(|e| (e.shape_id, *e)).collect();
        self.tree = RTree::bulk_load(entries);
    }
}

impl Default for SpatialIndex {
    fn default() -> Self {
        Self::new()
    }
}
