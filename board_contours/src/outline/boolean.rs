//! Boolean add/subtract operations on closed outlines.
//!
//! Both operations follow the same plan: find the (exactly two) boundary
//! intersection points, split both boundaries at those points, classify
//! which side of the operand lies inside, then replace the enclosed run of
//! `self` with the operand's contributing run. Any failure after validation
//! rolls the boundary back to its pre-operation state.

use super::ring::{collect_run, index_of_start, remove_run_until};
use super::Outline;
use crate::core::math::{angle, dist, normalize_radians, point_on_circle, Point};
use crate::core::traits::Real;
use crate::error::OutlineError;
use crate::segment::{IntrFlag, Segment, SegmentKind};

/// Outcome of merging a circle into an outline's boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum CircleOpResult<T = f64> {
    /// The circle crossed the boundary and was merged into it.
    Merged,
    /// The circle does not cross the boundary; ownership is returned to the
    /// caller.
    Untouched(Segment<T>),
}

/// Outcome of merging another outline into an outline's boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum OutlineOpResult<T = f64> {
    /// The outlines crossed and were merged.
    Merged,
    /// The outlines do not cross; ownership is returned to the caller.
    Untouched(Outline<T>),
}

impl<T> Outline<T>
where
    T: Real,
{
    /// Unions a full circle into the boundary ring.
    ///
    /// The circle must cross the boundary at exactly two points; the
    /// boundary run inside the circle is replaced by the circle's outer arc.
    /// A non-crossing circle is handed back as
    /// [CircleOpResult::Untouched].
    pub fn add_circle(&mut self, circle: Segment<T>) -> Result<CircleOpResult<T>, OutlineError> {
        self.op_circle(circle, false).map_err(|e| self.record(e))
    }

    /// Subtracts a full circle from the boundary ring.
    ///
    /// The circle must cross the boundary at exactly two points; the
    /// boundary run inside the circle is replaced by the circle's inner arc
    /// traversed clockwise, cutting a bite out of the outline.
    pub fn sub_circle(&mut self, circle: Segment<T>) -> Result<CircleOpResult<T>, OutlineError> {
        self.op_circle(circle, true).map_err(|e| self.record(e))
    }

    /// Unions another closed outline into the boundary ring.
    pub fn add_outline(&mut self, other: Outline<T>) -> Result<OutlineOpResult<T>, OutlineError> {
        self.op_outline(other, false).map_err(|e| self.record(e))
    }

    /// Subtracts another closed outline from the boundary ring.
    pub fn sub_outline(&mut self, other: Outline<T>) -> Result<OutlineOpResult<T>, OutlineError> {
        self.op_outline(other, true).map_err(|e| self.record(e))
    }

    /// Removes the circle's area from the outline, wherever that area lies.
    ///
    /// A circle crossing the boundary becomes a bite in the ring; a circle
    /// interior to the outline is merged into an overlapping cutout if one
    /// exists, otherwise stored as an isolated drill hole.
    pub fn add_cutout_circle(&mut self, circle: Segment<T>) -> Result<(), OutlineError> {
        match self.sub_circle(circle)? {
            CircleOpResult::Merged => Ok(()),
            CircleOpResult::Untouched(c) => {
                for cutout in self.cutouts.iter_mut() {
                    if let CircleOpResult::Merged = cutout.add_circle(c)? {
                        return Ok(());
                    }
                }
                tracing::debug!("storing non-crossing circle as drill hole");
                self.holes.push(c);
                Ok(())
            }
        }
    }

    /// Removes the closed outline's area from this outline, wherever that
    /// area lies. The boundary-crossing case becomes a bite in the ring;
    /// otherwise the outline is merged into an overlapping cutout or stored
    /// as a new cutout.
    pub fn add_cutout(&mut self, other: Outline<T>) -> Result<(), OutlineError> {
        match self.sub_outline(other)? {
            OutlineOpResult::Merged => Ok(()),
            OutlineOpResult::Untouched(mut o) => {
                for cutout in self.cutouts.iter_mut() {
                    match cutout.add_outline(o)? {
                        OutlineOpResult::Merged => return Ok(()),
                        OutlineOpResult::Untouched(handed_back) => o = handed_back,
                    }
                }
                tracing::debug!("storing non-crossing outline as cutout");
                self.cutouts.push(o);
                Ok(())
            }
        }
    }

    fn op_circle(
        &mut self,
        circle: Segment<T>,
        subtract: bool,
    ) -> Result<CircleOpResult<T>, OutlineError> {
        if !self.is_closed {
            return Err(OutlineError::NotClosed);
        }
        let Segment::Circle(c) = circle else {
            return Err(OutlineError::InvalidGeometry(
                "operand must be a full circle".into(),
            ));
        };

        let mut edge_runs = 0usize;
        let mut edge_points = None;
        let mut points: Vec<Point<T>> = Vec::new();
        for seg in &self.segments {
            let intr = seg.intersections(&circle);
            match intr.flag {
                IntrFlag::Ident => {
                    return Err(OutlineError::InvalidGeometry(
                        "boundary circle is identical to the operand".into(),
                    ));
                }
                IntrFlag::Edge => {
                    edge_runs += 1;
                    let ps = intr.points();
                    edge_points = Some((ps[0], ps[1]));
                }
                _ => {
                    for &p in intr.points() {
                        push_dedup(&mut points, p);
                    }
                }
            }
        }
        if edge_runs > 1 {
            return Err(OutlineError::InvalidGeometry(
                "boundary overlaps the operand along multiple runs".into(),
            ));
        }
        if let Some((a, b)) = edge_points {
            push_dedup(&mut points, a);
            push_dedup(&mut points, b);
        }

        match points.len() {
            0 => return Ok(CircleOpResult::Untouched(circle)),
            1 => return Err(OutlineError::DegenerateTouch),
            2 => {}
            n => return Err(OutlineError::IntersectionCount(n)),
        }
        let (p0, p1) = (points[0], points[1]);

        // classify the circle's two halves by their midpoints; exactly one
        // must lie inside the outline
        let a0 = normalize_radians(angle(c.center, p0));
        let a1 = normalize_radians(angle(c.center, p1));
        let mid_a = point_on_circle(c.radius, c.center, a0 + normalize_radians(a1 - a0) / T::two());
        let mid_b = point_on_circle(c.radius, c.center, a1 + normalize_radians(a0 - a1) / T::two());
        let in_a = half_inside(self, mid_a)?;
        let in_b = half_inside(self, mid_b)?;
        if in_a == in_b {
            return Err(OutlineError::AmbiguousOverlap);
        }

        // `first` is the CCW start of the circle's outside half, which is
        // where the boundary's enclosed run begins
        let (first, second) = if in_a { (p1, p0) } else { (p0, p1) };
        let new_arc = Segment::arc(c.center, first, second, subtract)?;

        let snapshot = self.segments.clone();
        if let Err(e) = self.splice_circle(first, second, new_arc, c.center, c.radius) {
            self.segments = snapshot;
            return Err(e);
        }
        tracing::debug!(subtract, "merged circle into outline boundary");
        Ok(CircleOpResult::Merged)
    }

    fn splice_circle(
        &mut self,
        first: Point<T>,
        second: Point<T>,
        new_arc: Segment<T>,
        center: Point<T>,
        radius: T,
    ) -> Result<(), OutlineError> {
        let eps = T::coincident_eps();

        if self.segments.len() == 1 && self.segments[0].kind() == SegmentKind::Circle {
            // the ring is a lone circle: split it into two arcs and keep the
            // one outside the operand
            let mut host = self.segments[0];
            let mut rest = host.split(&[first, second])?;
            let other_arc = rest.pop().ok_or_else(|| {
                OutlineError::InvalidGeometry("circle split produced no fragments".into())
            })?;
            let outside = |s: &Segment<T>| dist(center, s.midpoint()) > radius;
            let kept = if outside(&host) {
                host
            } else if outside(&other_arc) {
                other_arc
            } else {
                return Err(OutlineError::AmbiguousOverlap);
            };
            if !kept.end().fuzzy_eq(new_arc.start()) || !new_arc.end().fuzzy_eq(kept.start()) {
                return Err(OutlineError::InvalidGeometry(
                    "replacement arc does not bridge the boundary gap".into(),
                ));
            }
            self.segments = vec![kept, new_arc];
            return Ok(());
        }

        split_ring_at(&mut self.segments, [first, second])?;
        let i_first = index_of_start(&self.segments, first, eps).ok_or_else(|| {
            OutlineError::InvalidGeometry("intersection point missing after split".into())
        })?;
        let gap = remove_run_until(&mut self.segments, i_first, second, eps).ok_or_else(|| {
            OutlineError::InvalidGeometry("boundary ring exhausted while removing run".into())
        })?;
        let n = self.segments.len();
        let prev = self.segments[(gap + n - 1) % n];
        if !prev.end().fuzzy_eq(first) {
            return Err(OutlineError::InvalidGeometry(
                "replacement arc does not bridge the boundary gap".into(),
            ));
        }
        self.segments.insert(gap, new_arc);
        Ok(())
    }

    fn op_outline(
        &mut self,
        other: Outline<T>,
        subtract: bool,
    ) -> Result<OutlineOpResult<T>, OutlineError> {
        if !self.is_closed || !other.is_closed {
            return Err(OutlineError::NotClosed);
        }
        let eps = T::coincident_eps();

        let index = self.create_aabb_index();
        let mut edge_runs = 0usize;
        let mut edge_points = None;
        let mut points: Vec<Point<T>> = Vec::new();
        for other_seg in other.segments() {
            let b = other_seg.bounding_box();
            for i in index.query(b.min_x - eps, b.min_y - eps, b.max_x + eps, b.max_y + eps) {
                let intr = self.segments[i].intersections(other_seg);
                match intr.flag {
                    IntrFlag::Ident => {
                        return Err(OutlineError::InvalidGeometry(
                            "boundary circles are identical".into(),
                        ));
                    }
                    IntrFlag::Edge => {
                        edge_runs += 1;
                        let ps = intr.points();
                        edge_points = Some((ps[0], ps[1]));
                    }
                    _ => {
                        for &p in intr.points() {
                            push_dedup(&mut points, p);
                        }
                    }
                }
            }
        }
        if edge_runs > 1 {
            return Err(OutlineError::InvalidGeometry(
                "boundaries overlap along multiple runs".into(),
            ));
        }
        if let Some((a, b)) = edge_points {
            push_dedup(&mut points, a);
            push_dedup(&mut points, b);
        }

        match points.len() {
            0 => return Ok(OutlineOpResult::Untouched(other)),
            1 => return Err(OutlineError::DegenerateTouch),
            2 => {}
            n => return Err(OutlineError::IntersectionCount(n)),
        }
        let (p0, p1) = (points[0], points[1]);

        let snapshot = self.segments.clone();
        match self.splice_outline(&other, p0, p1, subtract) {
            Ok(()) => {
                tracing::debug!(subtract, "merged outline into boundary");
                Ok(OutlineOpResult::Merged)
            }
            Err(e) => {
                self.segments = snapshot;
                Err(e)
            }
        }
    }

    fn splice_outline(
        &mut self,
        other: &Outline<T>,
        p0: Point<T>,
        p1: Point<T>,
        subtract: bool,
    ) -> Result<(), OutlineError> {
        let eps = T::coincident_eps();

        split_ring_at(&mut self.segments, [p0, p1])?;
        let mut other_segs = other.segments.clone();
        split_ring_at(&mut other_segs, [p0, p1])?;

        let missing =
            || OutlineError::InvalidGeometry("intersection point missing after split".into());
        let i0 = index_of_start(&self.segments, p0, eps).ok_or_else(missing)?;
        let i1 = index_of_start(&self.segments, p1, eps).ok_or_else(missing)?;

        // exactly one of the boundary runs between the two points lies
        // inside the operand; that run starts at `first` and gets replaced
        let inside0 = half_inside(other, self.segments[i0].midpoint())?;
        let inside1 = half_inside(other, self.segments[i1].midpoint())?;
        if inside0 == inside1 {
            return Err(OutlineError::AmbiguousOverlap);
        }
        let (first, second, i_first) = if inside0 { (p0, p1, i0) } else { (p1, p0, i1) };

        // union keeps the operand's run outside `self` (first to second in
        // the operand's CCW order); subtraction keeps the run inside `self`,
        // traversed backwards so the ring stays contiguous
        let run = if subtract {
            let j = index_of_start(&other_segs, second, eps).ok_or_else(missing)?;
            let mut run = collect_run(&other_segs, j, first, eps).ok_or_else(|| {
                OutlineError::InvalidGeometry("operand ring exhausted while collecting run".into())
            })?;
            run.reverse();
            for s in run.iter_mut() {
                s.reverse();
            }
            run
        } else {
            let j = index_of_start(&other_segs, first, eps).ok_or_else(missing)?;
            collect_run(&other_segs, j, second, eps).ok_or_else(|| {
                OutlineError::InvalidGeometry("operand ring exhausted while collecting run".into())
            })?
        };
        if !run[0].start().fuzzy_eq(first) || !run[run.len() - 1].end().fuzzy_eq(second) {
            return Err(OutlineError::InvalidGeometry(
                "replacement run does not bridge the boundary gap".into(),
            ));
        }

        let gap = remove_run_until(&mut self.segments, i_first, second, eps).ok_or_else(|| {
            OutlineError::InvalidGeometry("boundary ring exhausted while removing run".into())
        })?;
        let n = self.segments.len();
        let prev = self.segments[(gap + n - 1) % n];
        if !prev.end().fuzzy_eq(first) {
            return Err(OutlineError::InvalidGeometry(
                "replacement run does not bridge the boundary gap".into(),
            ));
        }
        self.segments.splice(gap..gap, run);
        Ok(())
    }
}

fn push_dedup<T>(points: &mut Vec<Point<T>>, p: Point<T>)
where
    T: Real,
{
    if !points.iter().any(|existing| existing.fuzzy_eq(p)) {
        points.push(p);
    }
}

// a midpoint lying on the boundary itself belongs to the kept side and is
// classified as not inside
fn half_inside<T>(outline: &Outline<T>, mid: Point<T>) -> Result<bool, OutlineError>
where
    T: Real,
{
    if outline
        .segments
        .iter()
        .any(|s| s.contains_point_eps(mid, T::discriminant_eps()))
    {
        return Ok(false);
    }
    outline.is_inside(mid)
}

// splits ring segments so both points become segment boundaries; points
// already at a vertex are left alone
fn split_ring_at<T>(segs: &mut Vec<Segment<T>>, points: [Point<T>; 2]) -> Result<(), OutlineError>
where
    T: Real,
{
    if segs.len() == 1 && segs[0].kind() == SegmentKind::Circle {
        let rest = segs[0].split(&points)?;
        segs.extend(rest);
        return Ok(());
    }

    for &p in &points {
        if segs.iter().any(|s| s.start().fuzzy_eq(p)) {
            continue;
        }
        let i = segs
            .iter()
            .position(|s| s.contains_point_eps(p, T::discriminant_eps()))
            .ok_or_else(|| {
                OutlineError::InvalidGeometry("intersection point is not on the boundary".into())
            })?;
        let frags = segs[i].split(&[p])?;
        let mut at = i + 1;
        for f in frags {
            segs.insert(at, f);
            at += 1;
        }
    }
    Ok(())
}
