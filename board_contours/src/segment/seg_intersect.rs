use super::{ArcSeg, CircleSeg, LineSeg, Segment};
use crate::core::math::{
    angle, circle_circle_intr, dist, line_circle_intr, line_line_intr, normalize_radians,
    point_from_parametric, point_on_circle, CircleCircleIntr, LineCircleIntr, LineLineIntr, Point,
};
use crate::core::traits::Real;

/// Classification of a pairwise segment intersection.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum IntrFlag {
    /// No special classification; crossing points (if any) are reported.
    None,
    /// Segments touch tangentially without crossing. No points reported.
    Tangent,
    /// An intersect point coincides with a segment endpoint.
    Endpoint,
    /// Segments overlap along a shared run; the two points are the run's
    /// extremes.
    Edge,
    /// Segments lie on identical circles covering the same span.
    Ident,
    /// `self` lies entirely inside `other` without touching.
    Inside,
    /// `self` entirely contains `other` without touching.
    Encircles,
    /// Segments lie on disjoint circles, or share a circle without any
    /// span overlap.
    Outside,
}

/// Result of intersecting two segments: a classification flag plus zero, one,
/// or two intersect points.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SegmentIntr<T = f64> {
    pub flag: IntrFlag,
    points: [Point<T>; 2],
    len: u8,
}

impl<T> SegmentIntr<T>
where
    T: Real,
{
    #[inline]
    fn none(flag: IntrFlag) -> Self {
        SegmentIntr {
            flag,
            points: [Point::zero(); 2],
            len: 0,
        }
    }

    #[inline]
    fn one(flag: IntrFlag, point: Point<T>) -> Self {
        SegmentIntr {
            flag,
            points: [point, Point::zero()],
            len: 1,
        }
    }

    #[inline]
    fn two(flag: IntrFlag, point1: Point<T>, point2: Point<T>) -> Self {
        SegmentIntr {
            flag,
            points: [point1, point2],
            len: 2,
        }
    }

    /// Intersect points in traversal order (may be empty).
    #[inline]
    pub fn points(&self) -> &[Point<T>] {
        &self.points[..self.len as usize]
    }

    /// Returns true if the segments share at least one boundary point.
    #[inline]
    pub fn is_crossing(&self) -> bool {
        self.len > 0
    }
}

// angular slack used when testing whether a computed intersect point falls
// within an arc's swept span (intersect points carry more error than the
// arc's own endpoints)
fn arc_accepts_point<T>(arc: &ArcSeg<T>, point: Point<T>) -> bool
where
    T: Real,
{
    if point.fuzzy_eq(arc.start) || point.fuzzy_eq(arc.end) {
        return true;
    }
    let offset = normalize_radians(angle(arc.center, point) - arc.start_angle);
    let sweep = arc.end_angle - arc.start_angle;
    offset.fuzzy_lt_eps(sweep, T::discriminant_eps())
        || offset.fuzzy_eq_eps(T::tau(), T::discriminant_eps())
}

impl<T> Segment<T>
where
    T: Real,
{
    /// Finds the intersects between `self` and `other` and classifies the
    /// configuration.
    ///
    /// Tangencies and containment configurations report a flag without
    /// points. The containment flags [IntrFlag::Inside] and
    /// [IntrFlag::Encircles] are relative to `self` and swap when the
    /// operands swap.
    pub fn intersections(&self, other: &Segment<T>) -> SegmentIntr<T> {
        match (self, other) {
            (Segment::Line(a), Segment::Line(b)) => line_line(a, b),
            (Segment::Line(l), Segment::Arc(a)) => line_arc(l, a),
            (Segment::Arc(a), Segment::Line(l)) => line_arc(l, a),
            (Segment::Line(l), Segment::Circle(c)) => line_circle(l, c),
            (Segment::Circle(c), Segment::Line(l)) => line_circle(l, c),
            (Segment::Circle(a), Segment::Circle(b)) => circle_circle(a, b),
            (Segment::Arc(a), Segment::Arc(b)) => arcs(a, b),
            (Segment::Arc(a), Segment::Circle(c)) => arcs(a, &circle_as_arc(c)),
            (Segment::Circle(c), Segment::Arc(b)) => arcs(&circle_as_arc(c), b),
        }
    }
}

// full circle viewed as a CCW arc spanning [0, 2π] from the canonical point
fn circle_as_arc<T>(circle: &CircleSeg<T>) -> ArcSeg<T>
where
    T: Real,
{
    let canonical = point_on_circle(circle.radius, circle.center, T::zero());
    ArcSeg {
        center: circle.center,
        radius: circle.radius,
        start: canonical,
        end: canonical,
        start_angle: T::zero(),
        end_angle: T::tau(),
        is_cw: false,
    }
}

fn line_line<T>(a: &LineSeg<T>, b: &LineSeg<T>) -> SegmentIntr<T>
where
    T: Real,
{
    match line_line_intr(a.start, a.end, b.start, b.end) {
        LineLineIntr::NoIntersect => SegmentIntr::none(IntrFlag::None),
        LineLineIntr::TrueIntersect { seg1_t, seg2_t } => {
            let point = point_from_parametric(a.start, a.end, seg1_t);
            let at_endpoint = seg1_t.fuzzy_eq_zero()
                || seg1_t.fuzzy_eq(T::one())
                || seg2_t.fuzzy_eq_zero()
                || seg2_t.fuzzy_eq(T::one());
            let flag = if at_endpoint {
                IntrFlag::Endpoint
            } else {
                IntrFlag::None
            };
            SegmentIntr::one(flag, point)
        }
        LineLineIntr::CoincidentEndpoint { point } => SegmentIntr::one(IntrFlag::Endpoint, point),
        LineLineIntr::Overlapping { point1, point2 } => {
            SegmentIntr::two(IntrFlag::Edge, point1, point2)
        }
    }
}

// shared filter for line vs arc/circle: restrict the infinite line solutions
// to the segment's [0, 1] range and (for an arc) to the swept span
fn line_curve<T>(
    line: &LineSeg<T>,
    radius: T,
    center: Point<T>,
    arc: Option<&ArcSeg<T>>,
) -> SegmentIntr<T>
where
    T: Real,
{
    let accepts = |point: Point<T>| arc.map_or(true, |a| arc_accepts_point(a, point));

    match line_circle_intr(line.start, line.end, radius, center) {
        LineCircleIntr::NoIntersect => SegmentIntr::none(IntrFlag::None),
        LineCircleIntr::TangentIntersect { t0 } => {
            if t0.fuzzy_in_range(T::zero(), T::one())
                && accepts(point_from_parametric(line.start, line.end, t0))
            {
                SegmentIntr::none(IntrFlag::Tangent)
            } else {
                SegmentIntr::none(IntrFlag::None)
            }
        }
        LineCircleIntr::TwoIntersects { t0, t1 } => {
            let mut accepted: Vec<(T, Point<T>)> = Vec::with_capacity(2);
            for t in [t0, t1] {
                let point = point_from_parametric(line.start, line.end, t);
                if t.fuzzy_in_range(T::zero(), T::one()) && accepts(point) {
                    accepted.push((t, point));
                }
            }

            let at_endpoint = accepted.iter().any(|&(t, point)| {
                t.fuzzy_eq_zero()
                    || t.fuzzy_eq(T::one())
                    || arc.is_some_and(|a| point.fuzzy_eq(a.start) || point.fuzzy_eq(a.end))
            });
            let flag = if at_endpoint {
                IntrFlag::Endpoint
            } else {
                IntrFlag::None
            };

            match accepted.len() {
                0 => SegmentIntr::none(IntrFlag::None),
                1 => SegmentIntr::one(flag, accepted[0].1),
                _ => SegmentIntr::two(flag, accepted[0].1, accepted[1].1),
            }
        }
    }
}

fn line_arc<T>(line: &LineSeg<T>, arc: &ArcSeg<T>) -> SegmentIntr<T>
where
    T: Real,
{
    line_curve(line, arc.radius, arc.center, Some(arc))
}

fn line_circle<T>(line: &LineSeg<T>, circle: &CircleSeg<T>) -> SegmentIntr<T>
where
    T: Real,
{
    line_curve(line, circle.radius, circle.center, None)
}

fn circle_circle<T>(a: &CircleSeg<T>, b: &CircleSeg<T>) -> SegmentIntr<T>
where
    T: Real,
{
    match circle_circle_intr(a.radius, a.center, b.radius, b.center) {
        CircleCircleIntr::Outside => SegmentIntr::none(IntrFlag::Outside),
        CircleCircleIntr::Inside => SegmentIntr::none(IntrFlag::Inside),
        CircleCircleIntr::Encircles => SegmentIntr::none(IntrFlag::Encircles),
        CircleCircleIntr::Tangent { .. } => SegmentIntr::none(IntrFlag::Tangent),
        CircleCircleIntr::Identical => SegmentIntr::none(IntrFlag::Ident),
        CircleCircleIntr::TwoIntersects { point1, point2 } => {
            SegmentIntr::two(IntrFlag::None, point1, point2)
        }
    }
}

fn arcs<T>(a: &ArcSeg<T>, b: &ArcSeg<T>) -> SegmentIntr<T>
where
    T: Real,
{
    let match_eps = T::circle_match_eps();
    let concentric = dist(a.center, b.center).fuzzy_eq_zero_eps(match_eps);

    if concentric {
        if !a.radius.fuzzy_eq_eps(b.radius, match_eps) {
            return if a.radius < b.radius {
                SegmentIntr::none(IntrFlag::Inside)
            } else {
                SegmentIntr::none(IntrFlag::Encircles)
            };
        }
        return coincident_arcs(a, b);
    }

    match circle_circle_intr(a.radius, a.center, b.radius, b.center) {
        CircleCircleIntr::Outside => SegmentIntr::none(IntrFlag::Outside),
        CircleCircleIntr::Inside => SegmentIntr::none(IntrFlag::Inside),
        CircleCircleIntr::Encircles => SegmentIntr::none(IntrFlag::Encircles),
        CircleCircleIntr::Identical => SegmentIntr::none(IntrFlag::Ident),
        CircleCircleIntr::Tangent { point } => {
            if arc_accepts_point(a, point) && arc_accepts_point(b, point) {
                SegmentIntr::none(IntrFlag::Tangent)
            } else {
                SegmentIntr::none(IntrFlag::None)
            }
        }
        CircleCircleIntr::TwoIntersects { point1, point2 } => {
            let mut accepted: Vec<Point<T>> = Vec::with_capacity(2);
            for point in [point1, point2] {
                if arc_accepts_point(a, point) && arc_accepts_point(b, point) {
                    accepted.push(point);
                }
            }

            // order by traversal position along the first arc's CCW span
            accepted.sort_by(|p, q| {
                let up = normalize_radians(angle(a.center, *p) - a.start_angle);
                let uq = normalize_radians(angle(a.center, *q) - a.start_angle);
                up.partial_cmp(&uq).unwrap()
            });

            let full_a = (a.end_angle - a.start_angle).fuzzy_eq(T::tau());
            let full_b = (b.end_angle - b.start_angle).fuzzy_eq(T::tau());
            let at_endpoint = accepted.iter().any(|&point| {
                (!full_a && (point.fuzzy_eq(a.start) || point.fuzzy_eq(a.end)))
                    || (!full_b && (point.fuzzy_eq(b.start) || point.fuzzy_eq(b.end)))
            });
            let flag = if at_endpoint {
                IntrFlag::Endpoint
            } else {
                IntrFlag::None
            };

            match accepted.len() {
                0 => SegmentIntr::none(IntrFlag::None),
                1 => SegmentIntr::one(flag, accepted[0]),
                _ => SegmentIntr::two(flag, accepted[0], accepted[1]),
            }
        }
    }
}

// arcs on the same circle: classify by overlap of the angular spans,
// shifting the second span by full turns to account for the 2π wrap
fn coincident_arcs<T>(a: &ArcSeg<T>, b: &ArcSeg<T>) -> SegmentIntr<T>
where
    T: Real,
{
    let eps = T::discriminant_eps();
    let sweep_a = a.end_angle - a.start_angle;
    let sweep_b = b.end_angle - b.start_angle;
    if sweep_a.fuzzy_eq(T::tau()) && sweep_b.fuzzy_eq(T::tau()) {
        return SegmentIntr::none(IntrFlag::Ident);
    }

    let point_at = |angle: T| point_on_circle(a.radius, a.center, angle);

    if sweep_a.fuzzy_eq(T::tau()) || sweep_b.fuzzy_eq(T::tau()) {
        // one operand is the full circle: the overlap run is exactly the
        // other operand's span
        let arc = if sweep_a.fuzzy_eq(T::tau()) { b } else { a };
        return SegmentIntr::two(
            IntrFlag::Edge,
            point_at(arc.start_angle),
            point_at(arc.end_angle),
        );
    }

    let mut runs: Vec<(T, T)> = Vec::new();
    let mut touches: Vec<T> = Vec::new();
    for k in [-T::tau(), T::zero(), T::tau()] {
        let lo = num_traits::real::Real::max(a.start_angle, b.start_angle + k);
        let hi = num_traits::real::Real::min(a.end_angle, b.end_angle + k);
        if hi - lo > eps {
            runs.push((lo, hi));
        } else if (hi - lo).abs() <= eps
            && !touches.iter().any(|&t| point_at(t).fuzzy_eq(point_at(lo)))
        {
            touches.push(lo);
        }
    }

    if let Some(&(lo, hi)) = runs.first() {
        return SegmentIntr::two(IntrFlag::Edge, point_at(lo), point_at(hi));
    }

    match touches.len() {
        0 => SegmentIntr::none(IntrFlag::Outside),
        1 => SegmentIntr::one(IntrFlag::Endpoint, point_at(touches[0])),
        _ => SegmentIntr::two(IntrFlag::Outside, point_at(touches[0]), point_at(touches[1])),
    }
}
