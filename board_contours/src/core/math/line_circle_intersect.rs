use super::{quadratic_solutions, Point};
use crate::core::traits::Real;

/// Holds the result of finding the intersect between a line segment and a
/// circle. Parametric values are along the line and are NOT bounded to the
/// segment's `[0, 1]` range; the caller filters them.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum LineCircleIntr<T>
where
    T: Real,
{
    NoIntersect,
    /// The line is tangent to the circle, touching at the parametric value
    /// `t0`.
    TangentIntersect { t0: T },
    /// The line crosses the circle at the parametric values `t0` and `t1`
    /// with `t0 <= t1`.
    TwoIntersects { t0: T, t1: T },
}

/// Finds the intersects between the infinite line through `p0` and `p1` and
/// the circle defined by `radius` and `circle_center`.
///
/// Tangency is classified by the quadratic discriminant falling within
/// [`Real::discriminant_eps`] of zero.
pub fn line_circle_intr<T>(
    p0: Point<T>,
    p1: Point<T>,
    radius: T,
    circle_center: Point<T>,
) -> LineCircleIntr<T>
where
    T: Real,
{
    use LineCircleIntr::*;

    let d = p1 - p0;
    let f = p0 - circle_center;
    let a = d.dot(d);
    let b = T::two() * f.dot(d);
    let c = f.dot(f) - radius * radius;

    let discriminant = b * b - T::four() * a * c;

    if discriminant.fuzzy_eq_zero_eps(T::discriminant_eps()) {
        return TangentIntersect {
            t0: -b / (T::two() * a),
        };
    }

    if discriminant < T::zero() {
        return NoIntersect;
    }

    let (t0, t1) = quadratic_solutions(a, b, c, discriminant.sqrt());
    TwoIntersects { t0, t1 }
}
