use super::Point;
use crate::core::traits::Real;

/// Returns the minimum and maximum of `a` and `b` as an ordered pair
/// `(min, max)`.
#[inline]
pub fn min_max<T>(a: T, b: T) -> (T, T)
where
    T: Real,
{
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Normalize radians to be within the range `[0, 2π)`.
///
/// # Examples
///
/// ```
/// # use board_contours::core::math::normalize_radians;
/// # use std::f64::consts::PI;
/// assert!((normalize_radians(-PI / 2.0) - 3.0 * PI / 2.0).abs() < 1e-12);
/// assert!((normalize_radians(5.0 * PI / 2.0) - PI / 2.0).abs() < 1e-12);
/// ```
#[inline]
pub fn normalize_radians<T>(angle: T) -> T
where
    T: Real,
{
    if angle >= T::zero() && angle < T::tau() {
        return angle;
    }

    angle - (angle / T::tau()).floor() * T::tau()
}

/// Returns the planar angle of the direction vector from `start` to `end`
/// (`atan2` result, in `(-π, π]`).
#[inline]
pub fn angle<T>(start: Point<T>, end: Point<T>) -> T
where
    T: Real,
{
    (end.y - start.y).atan2(end.x - start.x)
}

#[inline]
pub fn dist_squared<T>(p0: Point<T>, p1: Point<T>) -> T
where
    T: Real,
{
    (p1 - p0).length_squared()
}

#[inline]
pub fn dist<T>(p0: Point<T>, p1: Point<T>) -> T
where
    T: Real,
{
    dist_squared(p0, p1).sqrt()
}

#[inline]
pub fn midpoint<T>(p0: Point<T>, p1: Point<T>) -> Point<T>
where
    T: Real,
{
    (p0 + p1).scale(T::one() / T::two())
}

/// Returns the point on the circle with the given `radius` and `center` at
/// the given `angle` (measured counter clockwise from the positive x axis).
/// The result lies on the z = 0 plane.
#[inline]
pub fn point_on_circle<T>(radius: T, center: Point<T>, angle: T) -> Point<T>
where
    T: Real,
{
    Point::xy(center.x + radius * angle.cos(), center.y + radius * angle.sin())
}

/// Returns the point at parametric value `t` along the line from `p0` to
/// `p1` (`t = 0` yields `p0`, `t = 1` yields `p1`).
#[inline]
pub fn point_from_parametric<T>(p0: Point<T>, p1: Point<T>, t: T) -> Point<T>
where
    T: Real,
{
    p0 + (p1 - p0).scale(t)
}

/// Returns the parametric value of `point` along the line from `p0` to `p1`,
/// or `None` if the point is not on the line within `eps` (perpendicular
/// distance).
///
/// The parameter is solved on the axis with the larger extent to avoid
/// dividing by a near-zero component for near-axis-aligned lines.
pub fn line_parametric_t<T>(p0: Point<T>, p1: Point<T>, point: Point<T>, eps: T) -> Option<T>
where
    T: Real,
{
    let v = p1 - p0;
    let w = point - p0;
    let len = v.length();
    if len.fuzzy_eq_zero_eps(eps) {
        return None;
    }

    // perpendicular distance from the infinite line
    if !(v.perp_dot(w) / len).fuzzy_eq_zero_eps(eps) {
        return None;
    }

    let t = if v.x.abs() > v.y.abs() {
        w.x / v.x
    } else {
        w.y / v.y
    };

    Some(t)
}

/// Tests if `test_angle` lies within the counter clockwise sweep from
/// `start_angle` to `end_angle` with `eps` of angular slack at both ends.
/// `start_angle` and `end_angle` must satisfy
/// `start_angle <= end_angle <= start_angle + 2π`.
#[inline]
pub fn angle_is_within_span_eps<T>(test_angle: T, start_angle: T, end_angle: T, eps: T) -> bool
where
    T: Real,
{
    let sweep = end_angle - start_angle;
    let offset = normalize_radians(test_angle - start_angle);
    offset.fuzzy_lt_eps(sweep, eps) || offset.fuzzy_eq_eps(T::tau(), eps)
}

/// Returns the solutions to the quadratic equation `a*x^2 + b*x + c = 0` as
/// an ordered pair, given the precomputed `sqrt_discriminant`. Uses the
/// numerically stable form that avoids catastrophic cancellation when `b` is
/// close to `±sqrt_discriminant`.
#[inline]
pub fn quadratic_solutions<T>(a: T, b: T, c: T, sqrt_discriminant: T) -> (T, T)
where
    T: Real,
{
    debug_assert!(
        (b * b - T::four() * a * c).fuzzy_gt_eps(T::zero(), T::discriminant_eps()),
        "discriminant must not be negative"
    );
    let denom = if b > T::zero() {
        -b - sqrt_discriminant
    } else {
        -b + sqrt_discriminant
    };

    let sol1 = denom / (T::two() * a);
    let sol2 = (T::two() * c) / denom;
    min_max(sol1, sol2)
}
