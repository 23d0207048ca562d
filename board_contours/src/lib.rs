//! 2D planar outline geometry engine for board outline solid modeling.
//!
//! The crate provides three layers:
//!
//! * [`core`] - numeric traits (fuzzy comparisons, tolerance policy) and the
//!   free function intersect primitives (line/line, line/circle,
//!   circle/circle).
//! * [`segment`] - the [`Segment`](segment::Segment) sum type (line, circular
//!   arc, or full circle) with pairwise intersection classification and
//!   splitting at one or two points.
//! * [`outline`] - the [`Outline`](outline::Outline) container: an ordered
//!   ring of segments forming a closed CCW boundary, with winding correction,
//!   point containment testing, and the two-intersection-point boolean
//!   add/subtract operations. [`drill`] builds on the boolean API to merge
//!   overlapping circular drills into compound cutouts.

pub mod core;
pub mod drill;
mod error;
pub mod outline;
pub mod segment;

pub use crate::core::math::Point;
pub use crate::error::*;
pub use crate::outline::{CircleOpResult, Outline, OutlineOpResult};
pub use crate::segment::{IntrFlag, Segment, SegmentIntr, SegmentKind};
