//! The [Segment] sum type (line, circular arc, or full circle) together with
//! pairwise intersection classification and splitting.

mod seg_intersect;
mod seg_split;

pub use seg_intersect::{IntrFlag, SegmentIntr};

use crate::core::math::{
    angle, angle_is_within_span_eps, dist, normalize_radians, point_on_circle, Point,
};
use crate::core::traits::Real;
use crate::error::SegmentError;
use static_aabb2d_index::AABB;

/// Discriminant of the [Segment] variants.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SegmentKind {
    Line,
    Arc,
    Circle,
}

/// Straight line segment from `start` to `end`.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineSeg<T = f64> {
    pub start: Point<T>,
    pub end: Point<T>,
}

/// Circular arc segment.
///
/// `start` and `end` are the literal endpoints in the arc's direction of
/// travel. `start_angle` and `end_angle` always describe the swept span in
/// counter clockwise orientation with
/// `start_angle <= end_angle <= start_angle + 2π`; when `is_cw` is true the
/// literal start maps to `end_angle` and the literal end to `start_angle`.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArcSeg<T = f64> {
    pub center: Point<T>,
    pub radius: T,
    pub start: Point<T>,
    pub end: Point<T>,
    pub start_angle: T,
    pub end_angle: T,
    pub is_cw: bool,
}

/// Full circle segment. A circle has no endpoints of its own; where an
/// endpoint is required (e.g. as the start of an outline ring) the canonical
/// point at angle zero (`center + (radius, 0)`) is used.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CircleSeg<T = f64> {
    pub center: Point<T>,
    pub radius: T,
}

/// A planar outline segment: straight line, circular arc, or full circle.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Segment<T = f64> {
    Line(LineSeg<T>),
    Arc(ArcSeg<T>),
    Circle(CircleSeg<T>),
}

impl<T> Segment<T>
where
    T: Real,
{
    /// Creates a line segment from `start` to `end`.
    ///
    /// Returns [SegmentError::NonPlanar] if either point is off the z = 0
    /// plane and [SegmentError::DegenerateLine] if the points are
    /// coincident.
    pub fn line(start: Point<T>, end: Point<T>) -> Result<Self, SegmentError> {
        let eps = T::coincident_eps();
        if !start.is_planar_eps(eps) || !end.is_planar_eps(eps) {
            return Err(SegmentError::NonPlanar);
        }
        if start.fuzzy_eq(end) {
            return Err(SegmentError::DegenerateLine);
        }

        Ok(Segment::Line(LineSeg { start, end }))
    }

    /// Creates a circular arc from `start` to `end` around `center`,
    /// traveling clockwise when `is_cw` is true.
    ///
    /// When `start` and `end` are coincident the arc degenerates to a full
    /// circle and a [Segment::Circle] is returned instead. Returns
    /// [SegmentError::DegenerateArc] if the center coincides with an
    /// endpoint and [SegmentError::RadiiDiffer] if the endpoints are at
    /// different distances from the center.
    pub fn arc(
        center: Point<T>,
        start: Point<T>,
        end: Point<T>,
        is_cw: bool,
    ) -> Result<Self, SegmentError> {
        let eps = T::coincident_eps();
        if !center.is_planar_eps(eps) || !start.is_planar_eps(eps) || !end.is_planar_eps(eps) {
            return Err(SegmentError::NonPlanar);
        }

        let radius = dist(center, start);
        if radius.fuzzy_eq_zero_eps(eps) {
            return Err(SegmentError::DegenerateArc);
        }

        if start.fuzzy_eq(end) {
            return Segment::circle(center, radius);
        }

        if dist(center, end).fuzzy_eq_zero_eps(eps) {
            return Err(SegmentError::DegenerateArc);
        }
        if !dist(center, end).fuzzy_eq_eps(radius, eps) {
            return Err(SegmentError::RadiiDiffer);
        }

        // angles are stored for the CCW traversal of the swept span
        let (ccw_start, ccw_end) = if is_cw { (end, start) } else { (start, end) };
        let start_angle = normalize_radians(angle(center, ccw_start));
        let mut end_angle = normalize_radians(angle(center, ccw_end));
        if end_angle <= start_angle {
            end_angle = end_angle + T::tau();
        }

        Ok(Segment::Arc(ArcSeg {
            center,
            radius,
            start,
            end,
            start_angle,
            end_angle,
            is_cw,
        }))
    }

    /// Creates a full circle with the given `center` and `radius`.
    pub fn circle(center: Point<T>, radius: T) -> Result<Self, SegmentError> {
        let eps = T::coincident_eps();
        if !center.is_planar_eps(eps) {
            return Err(SegmentError::NonPlanar);
        }
        if radius.fuzzy_lt_eps(T::zero(), eps) {
            return Err(SegmentError::DegenerateArc);
        }

        Ok(Segment::Circle(CircleSeg { center, radius }))
    }

    #[inline]
    pub fn kind(&self) -> SegmentKind {
        match self {
            Segment::Line(_) => SegmentKind::Line,
            Segment::Arc(_) => SegmentKind::Arc,
            Segment::Circle(_) => SegmentKind::Circle,
        }
    }

    /// Literal start point in the segment's direction of travel. For a
    /// circle this is the canonical point at angle zero.
    #[inline]
    pub fn start(&self) -> Point<T> {
        match self {
            Segment::Line(l) => l.start,
            Segment::Arc(a) => a.start,
            Segment::Circle(c) => point_on_circle(c.radius, c.center, T::zero()),
        }
    }

    /// Literal end point in the segment's direction of travel. For a circle
    /// this equals [Segment::start].
    #[inline]
    pub fn end(&self) -> Point<T> {
        match self {
            Segment::Line(l) => l.end,
            Segment::Arc(a) => a.end,
            Segment::Circle(c) => point_on_circle(c.radius, c.center, T::zero()),
        }
    }

    /// Start of the counter clockwise traversal (for a clockwise arc this is
    /// the literal end point).
    #[inline]
    pub fn ccw_start(&self) -> Point<T> {
        match self {
            Segment::Arc(a) if a.is_cw => a.end,
            _ => self.start(),
        }
    }

    /// End of the counter clockwise traversal.
    #[inline]
    pub fn ccw_end(&self) -> Point<T> {
        match self {
            Segment::Arc(a) if a.is_cw => a.start,
            _ => self.end(),
        }
    }

    pub fn length(&self) -> T {
        match self {
            Segment::Line(l) => dist(l.start, l.end),
            Segment::Arc(a) => (a.end_angle - a.start_angle) * a.radius,
            Segment::Circle(c) => T::tau() * c.radius,
        }
    }

    /// Point halfway along the segment's traversal. For a circle this is the
    /// point at angle π (opposite the canonical start).
    pub fn midpoint(&self) -> Point<T> {
        match self {
            Segment::Line(l) => crate::core::math::midpoint(l.start, l.end),
            Segment::Arc(a) => {
                let mid_angle = a.start_angle + (a.end_angle - a.start_angle) / T::two();
                point_on_circle(a.radius, a.center, mid_angle)
            }
            Segment::Circle(c) => point_on_circle(c.radius, c.center, T::pi()),
        }
    }

    /// Axis aligned bounding box of the segment.
    pub fn bounding_box(&self) -> AABB<T> {
        match self {
            Segment::Line(l) => {
                let (min_x, max_x) = crate::core::math::min_max(l.start.x, l.end.x);
                let (min_y, max_y) = crate::core::math::min_max(l.start.y, l.end.y);
                AABB::new(min_x, min_y, max_x, max_y)
            }
            Segment::Arc(a) => {
                let mut min_x = num_traits::real::Real::min(a.start.x, a.end.x);
                let mut min_y = num_traits::real::Real::min(a.start.y, a.end.y);
                let mut max_x = num_traits::real::Real::max(a.start.x, a.end.x);
                let mut max_y = num_traits::real::Real::max(a.start.y, a.end.y);

                // quadrant extremes that fall inside the swept span extend
                // the box past the endpoints
                for k in 0..4u8 {
                    let quadrant_angle = T::from(k).unwrap() * T::pi() / T::two();
                    if angle_is_within_span_eps(
                        quadrant_angle,
                        a.start_angle,
                        a.end_angle,
                        T::coincident_eps(),
                    ) {
                        let p = point_on_circle(a.radius, a.center, quadrant_angle);
                        min_x = num_traits::real::Real::min(min_x, p.x);
                        min_y = num_traits::real::Real::min(min_y, p.y);
                        max_x = num_traits::real::Real::max(max_x, p.x);
                        max_y = num_traits::real::Real::max(max_y, p.y);
                    }
                }

                AABB::new(min_x, min_y, max_x, max_y)
            }
            Segment::Circle(c) => AABB::new(
                c.center.x - c.radius,
                c.center.y - c.radius,
                c.center.x + c.radius,
                c.center.y + c.radius,
            ),
        }
    }

    /// Reverses the segment's direction of travel in place. The swept span
    /// of an arc is unchanged; only the literal endpoints and orientation
    /// flip. No-op for a circle.
    pub fn reverse(&mut self) {
        match self {
            Segment::Line(l) => std::mem::swap(&mut l.start, &mut l.end),
            Segment::Arc(a) => {
                std::mem::swap(&mut a.start, &mut a.end);
                a.is_cw = !a.is_cw;
            }
            Segment::Circle(_) => {}
        }
    }

    /// Returns true if `point` lies on the segment within `eps`.
    pub fn contains_point_eps(&self, point: Point<T>, eps: T) -> bool {
        match self {
            Segment::Line(l) => crate::core::math::line_parametric_t(l.start, l.end, point, eps)
                .is_some_and(|t| t.fuzzy_in_range_eps(T::zero(), T::one(), eps)),
            Segment::Arc(a) => {
                dist(a.center, point).fuzzy_eq_eps(a.radius, eps)
                    && angle_is_within_span_eps(
                        angle(a.center, point),
                        a.start_angle,
                        a.end_angle,
                        T::discriminant_eps(),
                    )
            }
            Segment::Circle(c) => dist(c.center, point).fuzzy_eq_eps(c.radius, eps),
        }
    }
}
