//! Pure geometry helpers shared by marquee selection and shape drafting.

use crate::types::{Point, SelectionBox, Shape, ShapeGeometry};

/// Normalize two drag points into a top-left anchored box.
///
/// The result is identical whichever of the two points came first.
pub fn normalize_box(start: Point, end: Point) -> SelectionBox {
    SelectionBox {
        x: start.x.min(end.x),
        y: start.y.min(end.y),
        width: (start.x - end.x).abs(),
        height: (start.y - end.y).abs(),
    }
}

/// Rectangle geometry for a dragged box: `(x, y, width, height)` with the
/// anchor at the top-left corner.
#[inline]
pub fn rect_from_box(area: &SelectionBox) -> (f32, f32, f32, f32) {
    (area.x, area.y, area.width, area.height)
}

/// Ellipse geometry for a dragged box: `(center_x, center_y, radius_x, radius_y)`.
#[inline]
pub fn ellipse_from_box(area: &SelectionBox) -> (f32, f32, f32, f32) {
    (
        area.x + area.width / 2.0,
        area.y + area.height / 2.0,
        area.width / 2.0,
        area.height / 2.0,
    )
}

/// Inclusive point-in-box test.
#[inline]
pub fn point_in_box(p: Point, area: &SelectionBox) -> bool {
    p.x >= area.x && p.x <= area.right() && p.y >= area.y && p.y <= area.bottom()
}

/// Point a marquee tests for membership: the anchor, or the first point of
/// a freehand line (whose anchor stays at the origin).
pub fn selection_anchor(shape: &Shape) -> Point {
    match &shape.geometry {
        ShapeGeometry::FreehandLine { points } => match points.as_slice() {
            [x, y, ..] => Point::new(*x, *y),
            _ => Point::ZERO,
        },
        _ => shape.position(),
    }
}

/// Whether a shape's anchor falls inside the marquee.
#[inline]
pub fn is_shape_in_selection(shape: &Shape, area: &SelectionBox) -> bool {
    point_in_box(selection_anchor(shape), area)
}

/// Scale a flattened `x, y, x, y, ...` sequence per axis.
pub fn scale_points(points: &[f32], scale_x: f32, scale_y: f32) -> Vec<f32> {
    points
        .iter()
        .enumerate()
        .map(|(i, v)| if i % 2 == 0 { v * scale_x } else { v * scale_y })
        .collect()
}

/// Translate a flattened `x, y, x, y, ...` sequence.
pub fn translate_points(points: &mut [f32], dx: f32, dy: f32) {
    for (i, v) in points.iter_mut().enumerate() {
        *v += if i % 2 == 0 { dx } else { dy };
    }
}
