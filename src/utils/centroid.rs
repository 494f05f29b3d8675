use crate::math::{Point, Real, Vector};

/// Computes the average position of a set of points.
///
/// Every point is weighted equally. Returns `None` if the iterator is empty.
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use bspclip3d::math::Point;
/// use bspclip3d::utils::centroid;
///
/// let points = [
///     Point::new(0.0, 0.0, 0.0),
///     Point::new(4.0, 0.0, 0.0),
///     Point::new(0.0, 4.0, 0.0),
/// ];
///
/// let c = centroid(&points).unwrap();
/// assert!((c.x - 4.0 / 3.0).abs() < 1.0e-6);
/// assert!((c.y - 4.0 / 3.0).abs() < 1.0e-6);
/// assert!(c.z.abs() < 1.0e-6);
/// assert!(centroid(&points[..0]).is_none());
/// # }
/// ```
#[inline]
pub fn centroid<'a>(pts: impl IntoIterator<Item = &'a Point<Real>>) -> Option<Point<Real>> {
    let mut sum = Vector::zeros();
    let mut count = 0usize;

    for pt in pts {
        sum += pt.coords;
        count += 1;
    }

    if count == 0 {
        None
    } else {
        let denom: Real = na::convert::<f64, Real>(1.0 / (count as f64));
        Some(Point::from(sum * denom))
    }
}
