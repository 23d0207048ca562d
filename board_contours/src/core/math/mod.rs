//! Math primitives: the [Point] type, angle/parametric helpers, and the free
//! function intersect tests the segment layer dispatches to.

mod base_math;
mod circle_circle_intersect;
mod line_circle_intersect;
mod line_line_intersect;
mod point;

pub use base_math::*;
pub use circle_circle_intersect::*;
pub use line_circle_intersect::*;
pub use line_line_intersect::*;
pub use point::*;
