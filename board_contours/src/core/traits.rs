//! Numeric traits: fuzzy floating point comparisons and the [Real] trait all
//! geometry code is generic over.
//!
//! The geometry tolerances used throughout the crate are centralized here as
//! associated functions on [Real] rather than scattered per call site:
//!
//! * [`Real::coincident_eps`] - point coincidence and endpoint matching.
//! * [`Real::circle_match_eps`] - circle identity/tangency comparisons
//!   (manufacturing-scale tolerance).
//! * [`Real::discriminant_eps`] - quadratic discriminant and parallel-line
//!   determinant thresholds.

use static_aabb2d_index::IndexableNum;

/// Trait for fuzzy equality and ordering comparisons of floating point
/// numbers using absolute epsilon values.
pub trait Fuzzy: Sized + Copy {
    /// Default epsilon used by the convenience methods without an `_eps`
    /// suffix.
    fn fuzzy_epsilon() -> Self;

    /// Returns true if `self` is within `eps` of `other`.
    fn fuzzy_eq_eps(self, other: Self, eps: Self) -> bool;

    /// Same as [Fuzzy::fuzzy_eq_eps] using the default epsilon.
    #[inline]
    fn fuzzy_eq(self, other: Self) -> bool {
        self.fuzzy_eq_eps(other, Self::fuzzy_epsilon())
    }

    /// Returns true if `self` is within `eps` of zero.
    fn fuzzy_eq_zero_eps(self, eps: Self) -> bool;

    /// Same as [Fuzzy::fuzzy_eq_zero_eps] using the default epsilon.
    #[inline]
    fn fuzzy_eq_zero(self) -> bool {
        self.fuzzy_eq_zero_eps(Self::fuzzy_epsilon())
    }

    /// Fuzzy greater than (inclusive within `eps`).
    fn fuzzy_gt_eps(self, other: Self, eps: Self) -> bool;

    /// Fuzzy less than (inclusive within `eps`).
    fn fuzzy_lt_eps(self, other: Self, eps: Self) -> bool;

    /// Tests `min <= self <= max` with `eps` of fuzz at both bounds.
    #[inline]
    fn fuzzy_in_range_eps(self, min: Self, max: Self, eps: Self) -> bool {
        self.fuzzy_gt_eps(min, eps) && self.fuzzy_lt_eps(max, eps)
    }

    /// Same as [Fuzzy::fuzzy_in_range_eps] using the default epsilon.
    #[inline]
    fn fuzzy_in_range(self, min: Self, max: Self) -> bool {
        self.fuzzy_in_range_eps(min, max, Self::fuzzy_epsilon())
    }
}

macro_rules! impl_fuzzy {
    ($ty:ty, $eps:expr) => {
        impl Fuzzy for $ty {
            #[inline]
            fn fuzzy_epsilon() -> Self {
                $eps
            }
            #[inline]
            fn fuzzy_eq_eps(self, other: Self, eps: Self) -> bool {
                (self - other).abs() < eps
            }
            #[inline]
            fn fuzzy_eq_zero_eps(self, eps: Self) -> bool {
                self.abs() < eps
            }
            #[inline]
            fn fuzzy_gt_eps(self, other: Self, eps: Self) -> bool {
                self + eps > other
            }
            #[inline]
            fn fuzzy_lt_eps(self, other: Self, eps: Self) -> bool {
                self < other + eps
            }
        }
    };
}

impl_fuzzy!(f32, 1.0e-8);
impl_fuzzy!(f64, 1.0e-8);

/// Trait representing a real number that can be fuzzy compared, used as a
/// bounding box coordinate, and carries the crate's tolerance policy.
pub trait Real:
    num_traits::real::Real
    + num_traits::Bounded
    + Fuzzy
    + std::default::Default
    + std::fmt::Debug
    + IndexableNum
    + 'static
{
    #[inline]
    fn pi() -> Self {
        Self::from(std::f64::consts::PI).unwrap()
    }

    #[inline]
    fn tau() -> Self {
        Self::from(std::f64::consts::TAU).unwrap()
    }

    #[inline]
    fn two() -> Self {
        Self::one() + Self::one()
    }

    #[inline]
    fn four() -> Self {
        Self::two() + Self::two()
    }

    /// Absolute tolerance for point coincidence, endpoint matching, and
    /// split point validation.
    #[inline]
    fn coincident_eps() -> Self {
        Self::from(1e-8).unwrap()
    }

    /// Manufacturing-scale tolerance for circle/circle and circle/arc center
    /// distance and radius comparisons (identity and tangency detection).
    #[inline]
    fn circle_match_eps() -> Self {
        Self::from(1e-3).unwrap()
    }

    /// Threshold for quadratic discriminant tangency classification and for
    /// treating two line directions as parallel.
    #[inline]
    fn discriminant_eps() -> Self {
        Self::from(1e-6).unwrap()
    }

    #[inline]
    fn min_value() -> Self {
        num_traits::real::Real::min_value()
    }

    #[inline]
    fn max_value() -> Self {
        num_traits::real::Real::max_value()
    }
}

impl Real for f32 {
    #[inline]
    fn pi() -> Self {
        std::f32::consts::PI
    }

    #[inline]
    fn tau() -> Self {
        std::f32::consts::TAU
    }

    #[inline]
    fn two() -> Self {
        2.0f32
    }

    #[inline]
    fn four() -> Self {
        4.0f32
    }
}

impl Real for f64 {
    #[inline]
    fn pi() -> Self {
        std::f64::consts::PI
    }

    #[inline]
    fn tau() -> Self {
        std::f64::consts::TAU
    }

    #[inline]
    fn two() -> Self {
        2.0f64
    }

    #[inline]
    fn four() -> Self {
        4.0f64
    }
}
