//! Shared numeric traits and math primitives used by the segment and outline
//! layers.

pub mod math;
pub mod traits;
