//! Oriented planes.
use crate::math::{Point, Real, Vector};
use approx::{AbsDiffEq, RelativeEq};
use core::ops::Neg;

/// The side of a plane a point lies on.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum Side {
    /// The point has a non-negative signed distance to the plane.
    #[default]
    Front,
    /// The point has a negative signed distance to the plane.
    Back,
}

impl Side {
    /// The other side.
    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Side::Front => Side::Back,
            Side::Back => Side::Front,
        }
    }
}

/// An infinite oriented plane `normal · p = bias`.
///
/// The normal does not need to be normalized, in which case [`Plane::signed_distance`]
/// is scaled by its norm. Points with a non-negative signed distance are in front
/// of the plane.
#[derive(PartialEq, Debug, Clone, Copy)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[repr(C)]
pub struct Plane {
    /// The direction the front of the plane faces.
    pub normal: Vector<Real>,
    /// The plane offset along its normal.
    pub bias: Real,
}

impl Plane {
    /// Builds a plane from its normal and offset.
    #[inline]
    pub fn new(normal: Vector<Real>, bias: Real) -> Plane {
        Plane { normal, bias }
    }

    /// Builds the plane with the given normal passing through `point`.
    #[inline]
    pub fn from_point_normal(point: &Point<Real>, normal: Vector<Real>) -> Plane {
        let bias = normal.dot(&point.coords);
        Plane { normal, bias }
    }

    /// The signed distance from `point` to this plane, in units of `|normal|`.
    #[inline]
    pub fn signed_distance(&self, point: &Point<Real>) -> Real {
        self.normal.dot(&point.coords) - self.bias
    }

    /// Which side of this plane `point` lies on.
    ///
    /// Points exactly on the plane are classified as [`Side::Front`].
    #[inline]
    pub fn side(&self, point: &Point<Real>) -> Side {
        if self.signed_distance(point) >= 0.0 {
            Side::Front
        } else {
            Side::Back
        }
    }

    /// The same plane, facing the other way.
    #[inline]
    pub fn inverted(&self) -> Plane {
        Plane::new(-self.normal, -self.bias)
    }

    /// Flips this plane in-place.
    #[inline]
    pub fn invert(&mut self) {
        *self = self.inverted();
    }

    /// This plane moved by `shift`.
    #[inline]
    pub fn translated(&self, shift: &Vector<Real>) -> Plane {
        Plane::new(self.normal, self.bias + self.normal.dot(shift))
    }

    /// A copy of this plane with a unit normal, or `None` if the normal is too small.
    #[inline]
    pub fn normalized(&self, eps: Real) -> Option<Plane> {
        let norm = self.normal.norm();

        if norm <= eps {
            None
        } else {
            Some(Plane::new(self.normal / norm, self.bias / norm))
        }
    }
}

impl Neg for Plane {
    type Output = Plane;

    #[inline]
    fn neg(self) -> Plane {
        self.inverted()
    }
}

impl AbsDiffEq for Plane {
    type Epsilon = Real;

    #[inline]
    fn default_epsilon() -> Real {
        Real::default_epsilon()
    }

    #[inline]
    fn abs_diff_eq(&self, other: &Self, epsilon: Real) -> bool {
        self.normal.abs_diff_eq(&other.normal, epsilon)
            && self.bias.abs_diff_eq(&other.bias, epsilon)
    }
}

impl RelativeEq for Plane {
    #[inline]
    fn default_max_relative() -> Real {
        Real::default_max_relative()
    }

    #[inline]
    fn relative_eq(&self, other: &Self, epsilon: Real, max_relative: Real) -> bool {
        self.normal.relative_eq(&other.normal, epsilon, max_relative)
            && self.bias.relative_eq(&other.bias, epsilon, max_relative)
    }
}
