//! The [Outline] container: an ordered ring of segments forming a closed,
//! counter clockwise boundary, with containment queries and boolean
//! add/subtract operations.

mod boolean;
mod ring;

pub use boolean::{CircleOpResult, OutlineOpResult};

use crate::core::math::Point;
use crate::core::traits::Real;
use crate::error::OutlineError;
use crate::segment::{IntrFlag, Segment, SegmentKind};
use static_aabb2d_index::{StaticAABB2DIndex, StaticAABB2DIndexBuilder, AABB};

/// A planar outline: an ordered ring of segments traversed counter
/// clockwise once closed. Boolean operations may attach interior cutout
/// outlines and isolated circular holes.
///
/// Outlines are built incrementally with [Outline::add_segment]; the ring
/// closes automatically when a segment's end returns to the first segment's
/// start (a full circle closes immediately). A ring built clockwise is
/// reversed to counter clockwise on closure.
///
/// Non-fatal geometry rejections are additionally recorded in an error log
/// readable via [Outline::errors].
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Outline<T = f64> {
    pub(crate) segments: Vec<Segment<T>>,
    pub(crate) is_closed: bool,
    winding: T,
    cutouts: Vec<Outline<T>>,
    holes: Vec<Segment<T>>,
    errors: Vec<String>,
}

impl<T> Outline<T>
where
    T: Real,
{
    pub fn new() -> Self {
        Outline {
            segments: Vec::new(),
            is_closed: false,
            winding: T::zero(),
            cutouts: Vec::new(),
            holes: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Appends `seg` to the open end of the outline.
    ///
    /// The segment must start where the previous segment ends. A full circle
    /// is only accepted as the sole segment of the outline and closes it
    /// immediately. When the added segment's end returns to the ring's start
    /// the outline closes and, if it was built clockwise, is reversed to
    /// counter clockwise.
    pub fn add_segment(&mut self, seg: Segment<T>) -> Result<(), OutlineError> {
        if self.is_closed {
            return Err(self.record(OutlineError::AlreadyClosed));
        }
        if seg.kind() == SegmentKind::Circle && !self.segments.is_empty() {
            return Err(self.record(OutlineError::CircleNotAlone));
        }
        if let Some(last) = self.segments.last() {
            if !seg.start().fuzzy_eq(last.end()) {
                return Err(self.record(OutlineError::EndpointMismatch));
            }
        }

        self.winding = self.winding + winding_term(&seg);
        self.segments.push(seg);

        if self.segments[0].kind() == SegmentKind::Circle {
            self.is_closed = true;
        } else if self.segments.len() >= 2
            && self.segments[self.segments.len() - 1]
                .end()
                .fuzzy_eq(self.segments[0].start())
        {
            self.is_closed = true;
            if self.winding > T::zero() {
                // ring was built clockwise; flip to the CCW convention
                for s in self.segments.iter_mut() {
                    s.reverse();
                }
                self.segments.reverse();
                self.winding = -self.winding;
            }
        }

        Ok(())
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        self.is_closed
    }

    /// Returns true if the outline is closed and every segment starts where
    /// its predecessor ends (wrapping at the ring's end).
    pub fn is_contiguous(&self) -> bool {
        if !self.is_closed {
            return false;
        }
        if self.segments.len() == 1 {
            return self.segments[0].kind() == SegmentKind::Circle;
        }
        self.segments.iter().zip(self.segments.iter().cycle().skip(1)).all(
            |(current, next)| current.end().fuzzy_eq(next.start()),
        )
    }

    #[inline]
    pub fn segments(&self) -> &[Segment<T>] {
        &self.segments
    }

    /// Interior cutout outlines produced by
    /// [add_cutout](Outline::add_cutout).
    #[inline]
    pub fn cutouts(&self) -> &[Outline<T>] {
        &self.cutouts
    }

    /// Isolated circular holes produced by
    /// [add_cutout_circle](Outline::add_cutout_circle).
    #[inline]
    pub fn drill_holes(&self) -> &[Segment<T>] {
        &self.holes
    }

    /// Log of non-fatal geometry rejections, oldest first.
    #[inline]
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn clear_errors(&mut self) {
        self.errors.clear();
    }

    pub fn into_segments(self) -> Vec<Segment<T>> {
        self.segments
    }

    /// Axis aligned bounding box of the boundary ring, `None` for an empty
    /// outline.
    pub fn bounding_box(&self) -> Option<AABB<T>> {
        let mut iter = self.segments.iter().map(|s| s.bounding_box());
        let first = iter.next()?;
        Some(iter.fold(first, |acc, b| {
            AABB::new(
                num_traits::real::Real::min(acc.min_x, b.min_x),
                num_traits::real::Real::min(acc.min_y, b.min_y),
                num_traits::real::Real::max(acc.max_x, b.max_x),
                num_traits::real::Real::max(acc.max_y, b.max_y),
            )
        }))
    }

    /// Square footprint covering the outline on an integer grid: the lower
    /// left corner floored to integers and an even integer side length that
    /// covers the bounding box.
    pub fn footprint(&self) -> Option<(Point<T>, T)> {
        let bounds = self.bounding_box()?;
        let min_x = bounds.min_x.floor();
        let min_y = bounds.min_y.floor();
        let extent = num_traits::real::Real::max(bounds.max_x - min_x, bounds.max_y - min_y);
        let mut side = extent.ceil();
        if !(side / T::two()).fract().fuzzy_eq_zero() {
            side = side + T::one();
        }
        Some((Point::xy(min_x, min_y), side))
    }

    /// Returns true if `point` lies inside the boundary ring (even-odd
    /// rule). Cutouts and holes are not consulted.
    ///
    /// Returns [OutlineError::NotClosed] if the outline is not closed.
    pub fn is_inside(&self, point: Point<T>) -> Result<bool, OutlineError> {
        if !self.is_closed {
            return Err(OutlineError::NotClosed);
        }
        let Some(bounds) = self.bounding_box() else {
            return Ok(false);
        };
        if point.x < bounds.min_x
            || point.x > bounds.max_x
            || point.y < bounds.min_y
            || point.y > bounds.max_y
        {
            return Ok(false);
        }

        // horizontal probe from the point past the nearer x bound
        let probe_x = if point.x - bounds.min_x < bounds.max_x - point.x {
            bounds.min_x - T::one()
        } else {
            bounds.max_x + T::one()
        };
        let probe = match Segment::line(point, Point::xy(probe_x, point.y)) {
            Ok(seg) => seg,
            // probe endpoint coincides with the query point, bounds are
            // degenerate
            Err(_) => return Ok(false),
        };

        let eps = T::coincident_eps();
        let mut crossings = 0usize;
        for seg in &self.segments {
            let intr = probe.intersections(seg);
            match intr.flag {
                // grazing contact does not change parity
                IntrFlag::Tangent | IntrFlag::Edge => continue,
                _ => {}
            }
            for &q in intr.points() {
                // a full circle has no real vertices; its canonical endpoint
                // gets no special treatment
                if seg.kind() != SegmentKind::Circle
                    && (q.fuzzy_eq(seg.start()) || q.fuzzy_eq(seg.end()))
                {
                    // probe through a ring vertex: count the segment only if
                    // it lies entirely below the probe so the two segments
                    // sharing the vertex together preserve parity
                    if seg.bounding_box().max_y.fuzzy_lt_eps(point.y, eps) {
                        crossings += 1;
                    }
                } else {
                    crossings += 1;
                }
            }
        }

        Ok(crossings % 2 == 1)
    }

    /// Builds a spatial index over the ring's segment bounding boxes,
    /// indexed by segment position.
    pub fn create_aabb_index(&self) -> StaticAABB2DIndex<T> {
        let mut builder = StaticAABB2DIndexBuilder::new(self.segments.len());
        for seg in &self.segments {
            let b = seg.bounding_box();
            builder.add(b.min_x, b.min_y, b.max_x, b.max_y);
        }
        // only fails if the added count differs from the declared count
        builder.build().unwrap()
    }

    pub(crate) fn record(&mut self, err: OutlineError) -> OutlineError {
        tracing::debug!(error = %err, "outline operation rejected");
        self.errors.push(err.to_string());
        err
    }
}

// signed shoelace term of a segment: positive sums indicate a clockwise
// ring. Arcs are approximated by two chords through the arc midpoint, which
// preserves the sign for any ring a closed outline can form.
fn winding_term<T>(seg: &Segment<T>) -> T
where
    T: Real,
{
    let chord = |p0: Point<T>, p1: Point<T>| (p1.x - p0.x) * (p1.y + p0.y);
    match seg {
        Segment::Line(l) => chord(l.start, l.end),
        Segment::Arc(_) => {
            let mid = seg.midpoint();
            chord(seg.start(), mid) + chord(mid, seg.end())
        }
        // a lone full circle is CCW by convention
        Segment::Circle(c) => -T::tau() * c.radius * c.radius,
    }
}
