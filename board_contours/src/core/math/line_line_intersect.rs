use super::{line_parametric_t, point_from_parametric, Point};
use crate::core::traits::Real;

/// Holds the result of finding the intersect between two line segments.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum LineLineIntr<T>
where
    T: Real,
{
    /// No intersection exists within both segments' ranges.
    NoIntersect,
    /// One true intersect point within both segments. `seg1_t` is the
    /// parametric value along the first segment, `seg2_t` along the second.
    TrueIntersect { seg1_t: T, seg2_t: T },
    /// Segments are collinear and share a single point.
    CoincidentEndpoint { point: Point<T> },
    /// Segments are collinear and overlap along a run. `point1` and `point2`
    /// are the extremes of the shared run ordered by the first segment's
    /// direction of travel.
    Overlapping { point1: Point<T>, point2: Point<T> },
}

/// Finds the intersect between two line segments, the first defined by
/// `u1` to `u2` and the second by `v1` to `v2`.
///
/// Parallel segments whose determinant is below
/// [`Real::discriminant_eps`] are classified as collinear or disjoint by
/// perpendicular distance; collinear segments yield
/// [LineLineIntr::CoincidentEndpoint] when they share exactly one point and
/// [LineLineIntr::Overlapping] when they share a run.
pub fn line_line_intr<T>(u1: Point<T>, u2: Point<T>, v1: Point<T>, v2: Point<T>) -> LineLineIntr<T>
where
    T: Real,
{
    use LineLineIntr::*;
    let u = u2 - u1;
    let v = v2 - v1;
    let w = v1 - u1;
    let denom = u.perp_dot(v);

    if denom.fuzzy_eq_zero_eps(T::discriminant_eps()) {
        return collinear_intr(u1, u2, v1, v2);
    }

    let seg1_t = w.perp_dot(v) / denom;
    let seg2_t = w.perp_dot(u) / denom;
    if seg1_t.fuzzy_in_range(T::zero(), T::one()) && seg2_t.fuzzy_in_range(T::zero(), T::one()) {
        return TrueIntersect { seg1_t, seg2_t };
    }

    NoIntersect
}

fn collinear_intr<T>(
    u1: Point<T>,
    u2: Point<T>,
    v1: Point<T>,
    v2: Point<T>,
) -> LineLineIntr<T>
where
    T: Real,
{
    use LineLineIntr::*;
    let eps = T::coincident_eps();

    // parametric values along seg1 of every endpoint that lies on both
    // segments (line_parametric_t also rejects a parallel but offset seg2)
    let mut candidates: Vec<T> = Vec::with_capacity(4);
    let mut push_candidate = |t: T, candidates: &mut Vec<T>| {
        if t.fuzzy_in_range(T::zero(), T::one())
            && !candidates.iter().any(|&c| {
                point_from_parametric(u1, u2, c).fuzzy_eq(point_from_parametric(u1, u2, t))
            })
        {
            candidates.push(t);
        }
    };

    for endpoint in [v1, v2] {
        if let Some(t) = line_parametric_t(u1, u2, endpoint, eps) {
            push_candidate(t, &mut candidates);
        } else {
            // seg2 endpoint off the seg1 line means parallel but not
            // collinear
            return NoIntersect;
        }
    }

    for endpoint in [u1, u2] {
        if line_parametric_t(v1, v2, endpoint, eps).is_some_and(|t| {
            t.fuzzy_in_range(T::zero(), T::one())
        }) {
            if let Some(t) = line_parametric_t(u1, u2, endpoint, eps) {
                push_candidate(t, &mut candidates);
            }
        }
    }

    match candidates.len() {
        0 => NoIntersect,
        1 => CoincidentEndpoint {
            point: point_from_parametric(u1, u2, candidates[0]),
        },
        _ => {
            candidates.sort_by(|a, b| a.partial_cmp(b).unwrap());
            Overlapping {
                point1: point_from_parametric(u1, u2, candidates[0]),
                point2: point_from_parametric(u1, u2, candidates[candidates.len() - 1]),
            }
        }
    }
}
