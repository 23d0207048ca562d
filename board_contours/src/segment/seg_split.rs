use super::Segment;
use crate::core::math::{angle, dist, normalize_radians, Point};
use crate::core::traits::Real;
use crate::error::SegmentError;

impl<T> Segment<T>
where
    T: Real,
{
    /// Splits the segment at one or two points that lie on it.
    ///
    /// `self` is shortened in place to the first fragment and the remaining
    /// fragments are returned in traversal order. Points coincident with the
    /// segment's literal endpoints are ignored; points are sorted along the
    /// direction of travel, so callers need not order them.
    ///
    /// A full circle requires exactly two distinct points and is replaced by
    /// two complementary counter clockwise arcs, `self` becoming the CCW arc
    /// from the first given point to the second.
    pub fn split(&mut self, points: &[Point<T>]) -> Result<Vec<Segment<T>>, SegmentError> {
        if points.is_empty() || points.len() > 2 {
            return Err(SegmentError::BadSplitPointCount(points.len()));
        }

        match self {
            Segment::Line(_) => self.split_line(points),
            Segment::Arc(_) => self.split_arc(points),
            Segment::Circle(_) => self.split_circle(points),
        }
    }

    fn split_line(&mut self, points: &[Point<T>]) -> Result<Vec<Segment<T>>, SegmentError> {
        let eps = T::coincident_eps();
        let Segment::Line(line) = *self else {
            unreachable!()
        };

        let mut ts: Vec<T> = Vec::with_capacity(2);
        for &p in points {
            if p.fuzzy_eq(line.start) || p.fuzzy_eq(line.end) {
                continue;
            }
            let t = crate::core::math::line_parametric_t(line.start, line.end, p, eps)
                .filter(|t| t.fuzzy_in_range(T::zero(), T::one()))
                .ok_or(SegmentError::PointNotOnSegment)?;
            if !ts.iter().any(|&existing| existing.fuzzy_eq(t)) {
                ts.push(t);
            }
        }

        if ts.is_empty() {
            return Ok(Vec::new());
        }
        ts.sort_by(|a, b| a.partial_cmp(b).unwrap());

        let mut result = Vec::with_capacity(ts.len());
        let mut prev = crate::core::math::point_from_parametric(line.start, line.end, ts[0]);
        *self = Segment::line(line.start, prev)?;
        for &t in &ts[1..] {
            let next = crate::core::math::point_from_parametric(line.start, line.end, t);
            result.push(Segment::line(prev, next)?);
            prev = next;
        }
        result.push(Segment::line(prev, line.end)?);
        Ok(result)
    }

    fn split_arc(&mut self, points: &[Point<T>]) -> Result<Vec<Segment<T>>, SegmentError> {
        let eps = T::coincident_eps();
        let Segment::Arc(arc) = *self else {
            unreachable!()
        };
        let sweep = arc.end_angle - arc.start_angle;

        // traversal parameter: swept angle from the literal start, in the
        // direction of travel
        let mut params: Vec<(T, Point<T>)> = Vec::with_capacity(2);
        for &p in points {
            if p.fuzzy_eq(arc.start) || p.fuzzy_eq(arc.end) {
                continue;
            }
            if !dist(arc.center, p).fuzzy_eq_eps(arc.radius, eps) {
                return Err(SegmentError::PointNotOnSegment);
            }
            let ccw_offset = normalize_radians(angle(arc.center, p) - arc.start_angle);
            if !ccw_offset.fuzzy_lt_eps(sweep, T::discriminant_eps()) {
                return Err(SegmentError::PointNotOnSegment);
            }
            let u = if arc.is_cw { sweep - ccw_offset } else { ccw_offset };
            if !params.iter().any(|&(existing, _)| existing.fuzzy_eq_eps(u, eps)) {
                params.push((u, p));
            }
        }

        if params.is_empty() {
            return Ok(Vec::new());
        }
        params.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap());

        let mut result = Vec::with_capacity(params.len());
        let mut prev = params[0].1;
        *self = Segment::arc(arc.center, arc.start, prev, arc.is_cw)?;
        for &(_, next) in &params[1..] {
            result.push(Segment::arc(arc.center, prev, next, arc.is_cw)?);
            prev = next;
        }
        result.push(Segment::arc(arc.center, prev, arc.end, arc.is_cw)?);
        Ok(result)
    }

    fn split_circle(&mut self, points: &[Point<T>]) -> Result<Vec<Segment<T>>, SegmentError> {
        let eps = T::coincident_eps();
        let Segment::Circle(circle) = *self else {
            unreachable!()
        };

        if points.len() != 2 || points[0].fuzzy_eq(points[1]) {
            return Err(SegmentError::CircleSplitPoints);
        }
        for &p in points {
            if !dist(circle.center, p).fuzzy_eq_eps(circle.radius, eps) {
                return Err(SegmentError::PointNotOnSegment);
            }
        }

        *self = Segment::arc(circle.center, points[0], points[1], false)?;
        Ok(vec![Segment::arc(
            circle.center,
            points[1],
            points[0],
            false,
        )?])
    }
}
