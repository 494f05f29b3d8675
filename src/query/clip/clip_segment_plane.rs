use crate::math::{Point, Real};
use crate::shape::Plane;

/// Computes the parameter `t` at which the line `a + (b - a) * t` crosses `plane`.
///
/// Returns `None` if the line is parallel to the plane.
#[inline]
pub fn line_toi_with_plane(plane: &Plane, a: &Point<Real>, b: &Point<Real>) -> Option<Real> {
    let dir = b - a;
    let denom = plane.normal.dot(&dir);

    if denom == 0.0 {
        None
    } else {
        Some(-plane.signed_distance(a) / denom)
    }
}

/// Computes the point where the segment `[a, b]` crosses `plane`.
///
/// The endpoints are expected to lie on opposite sides of the plane; the line through
/// them is intersected regardless. Returns `None`, without fabricating any point, if the
/// segment is parallel to the plane.
#[inline]
pub fn segment_plane_intersection(
    plane: &Plane,
    a: &Point<Real>,
    b: &Point<Real>,
) -> Option<Point<Real>> {
    line_toi_with_plane(plane, a, b).map(|t| a + (b - a) * t)
}
