use crate::core::traits::Real;
use std::ops::{Add, Neg, Sub};

/// A 3D point. All geometry in this crate is planar (z = 0); the z component
/// is carried so imported drill/outline data can be validated as planar
/// rather than silently flattened.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point<T = f64> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T> Point<T>
where
    T: Real,
{
    #[inline]
    pub fn new(x: T, y: T, z: T) -> Self {
        Point { x, y, z }
    }

    /// Creates a point on the z = 0 plane.
    #[inline]
    pub fn xy(x: T, y: T) -> Self {
        Point {
            x,
            y,
            z: T::zero(),
        }
    }

    #[inline]
    pub fn zero() -> Self {
        Point {
            x: T::zero(),
            y: T::zero(),
            z: T::zero(),
        }
    }

    #[inline]
    pub fn scale(&self, scale_factor: T) -> Self {
        Point {
            x: scale_factor * self.x,
            y: scale_factor * self.y,
            z: scale_factor * self.z,
        }
    }

    #[inline]
    pub fn dot(&self, other: Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// 2D cross product (z component of the 3D cross product). Uses only the
    /// planar components.
    #[inline]
    pub fn perp_dot(&self, other: Self) -> T {
        self.x * other.y - self.y * other.x
    }

    #[inline]
    pub fn length_squared(&self) -> T {
        self.dot(*self)
    }

    #[inline]
    pub fn length(&self) -> T {
        self.length_squared().sqrt()
    }

    /// Unit vector rotated 90 degrees counter clockwise in the plane.
    #[inline]
    pub fn unit_perp(&self) -> Self {
        let len = self.length();
        Point {
            x: -self.y / len,
            y: self.x / len,
            z: T::zero(),
        }
    }

    /// Fuzzy equal per component using `eps` as the epsilon.
    #[inline]
    pub fn fuzzy_eq_eps(&self, other: Self, eps: T) -> bool {
        self.x.fuzzy_eq_eps(other.x, eps)
            && self.y.fuzzy_eq_eps(other.y, eps)
            && self.z.fuzzy_eq_eps(other.z, eps)
    }

    /// Fuzzy equal per component using the coincidence tolerance.
    #[inline]
    pub fn fuzzy_eq(&self, other: Self) -> bool {
        self.fuzzy_eq_eps(other, T::coincident_eps())
    }

    /// Returns true if the point lies on the z = 0 plane within `eps`.
    #[inline]
    pub fn is_planar_eps(&self, eps: T) -> bool {
        self.z.fuzzy_eq_zero_eps(eps)
    }
}

impl<T> Add for Point<T>
where
    T: Real,
{
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self {
        Point {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl<T> Sub for Point<T>
where
    T: Real,
{
    type Output = Self;
    #[inline]
    fn sub(self, other: Self) -> Self {
        Point {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl<T> Neg for Point<T>
where
    T: Real,
{
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Point {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}
