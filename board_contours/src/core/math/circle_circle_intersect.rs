use super::{angle, dist, normalize_radians, Point};
use crate::core::traits::Real;

/// Holds the result of finding the intersect between two circles, the first
/// defined by `radius1` and `center1` and the second by `radius2` and
/// `center2`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum CircleCircleIntr<T>
where
    T: Real,
{
    /// Circles are fully disjoint.
    Outside,
    /// The first circle lies entirely inside the second.
    Inside,
    /// The first circle entirely contains the second.
    Encircles,
    /// Circles touch at a single point (externally or internally).
    Tangent { point: Point<T> },
    /// Centers and radii match within [`Real::circle_match_eps`].
    Identical,
    /// Circles cross at two points, ordered by descending normalized angle
    /// around the first circle's center (clockwise order).
    TwoIntersects { point1: Point<T>, point2: Point<T> },
}

/// Finds the intersects between two circles. All identity, containment, and
/// tangency comparisons use the manufacturing-scale
/// [`Real::circle_match_eps`] tolerance.
pub fn circle_circle_intr<T>(
    radius1: T,
    center1: Point<T>,
    radius2: T,
    center2: Point<T>,
) -> CircleCircleIntr<T>
where
    T: Real,
{
    use CircleCircleIntr::*;

    let eps = T::circle_match_eps();
    let cv = center2 - center1;
    let d = dist(center1, center2);
    let radius_diff = (radius1 - radius2).abs();

    if d.fuzzy_eq_zero_eps(eps) {
        if radius_diff.fuzzy_eq_zero_eps(eps) {
            return Identical;
        }
        return if radius1 < radius2 { Inside } else { Encircles };
    }

    if (d - (radius1 + radius2)).fuzzy_eq_zero_eps(eps) {
        // external tangency on the segment between the centers
        return Tangent {
            point: center1 + cv.scale(radius1 / d),
        };
    }

    if (d - radius_diff).fuzzy_eq_zero_eps(eps) {
        // internal tangency on the line through the centers, on the larger
        // circle's boundary
        let unit = cv.scale(T::one() / d);
        let point = if radius1 >= radius2 {
            center1 + unit.scale(radius1)
        } else {
            center1 - unit.scale(radius1)
        };
        return Tangent { point };
    }

    if d > radius1 + radius2 {
        return Outside;
    }

    if d < radius_diff {
        return if radius1 < radius2 { Inside } else { Encircles };
    }

    // standard two circle intersection via the radical line
    let rd = (d * d - radius2 * radius2 + radius1 * radius1) / (T::two() * d);
    let h = (radius1 * radius1 - rd * rd).abs().sqrt();
    let base = center1 + cv.scale(rd / d);
    let offset = Point::xy(-cv.y, cv.x).scale(h / d);
    let pt_a = base + offset;
    let pt_b = base - offset;

    let angle_a = normalize_radians(angle(center1, pt_a));
    let angle_b = normalize_radians(angle(center1, pt_b));
    if angle_a >= angle_b {
        TwoIntersects {
            point1: pt_a,
            point2: pt_b,
        }
    } else {
        TwoIntersects {
            point1: pt_b,
            point2: pt_a,
        }
    }
}
