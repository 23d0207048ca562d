//! Error types surfaced by segment construction/splitting and by outline
//! editing and boolean operations.

use thiserror::Error;

/// Errors produced when constructing or splitting a [Segment](crate::Segment).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SegmentError {
    /// Line start and end points are coincident.
    #[error("degenerate line: start and end points are coincident")]
    DegenerateLine,
    /// A point given to a constructor has a non-zero z component.
    #[error("point is not on the z = 0 plane")]
    NonPlanar,
    /// Arc center is coincident with one of its endpoints.
    #[error("degenerate arc: center is coincident with an endpoint")]
    DegenerateArc,
    /// Arc endpoints are at different distances from the center.
    #[error("arc endpoints are at different distances from the center")]
    RadiiDiffer,
    /// A split point does not lie on the segment.
    #[error("split point does not lie on the segment")]
    PointNotOnSegment,
    /// Split called with zero or more than two points.
    #[error("split requires one or two points, got {0}")]
    BadSplitPointCount(usize),
    /// Circle split requires exactly two distinct points.
    #[error("splitting a full circle requires exactly two distinct points")]
    CircleSplitPoints,
}

/// Errors produced by [Outline](crate::Outline) editing, queries, and boolean
/// operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OutlineError {
    /// Segment added after the outline closed.
    #[error("outline is already closed")]
    AlreadyClosed,
    /// Operation requires a closed outline.
    #[error("outline is not closed")]
    NotClosed,
    /// Added segment does not start at the current open end.
    #[error("segment start does not match the outline's open end")]
    EndpointMismatch,
    /// A full circle segment must be the only segment of its outline.
    #[error("a full circle must be the only segment of an outline")]
    CircleNotAlone,
    /// Operand touches the outline at a single point.
    #[error("operand touches the outline at a single point")]
    DegenerateTouch,
    /// Boolean operation found other than two intersection points.
    #[error("boolean operation requires exactly two intersection points, found {0}")]
    IntersectionCount(usize),
    /// Could not decide which side of the operand lies inside.
    #[error("ambiguous overlap: cannot classify operand halves")]
    AmbiguousOverlap,
    /// Geometry violates a structural assumption of the boolean engine.
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),
    #[error(transparent)]
    Segment(#[from] SegmentError),
}
