/// Point geometry helpers.  Pure, no failure modes.
///
/// Screen coordinates throughout: y grows downward, so a positive angle
/// points down and `-PI/2` points up.

use crate::entities::Point;

/// Euclidean distance between two points.
pub fn point_distance(a: Point, b: Point) -> f32 {
    ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
}

/// Angle in radians of the vector from `a` to `b`, in (-PI, PI];
/// 0 = pointing right.
pub fn line_angle(a: Point, b: Point) -> f32 {
    (b.y - a.y).atan2(b.x - a.x)
}
