//! Mathematical utilities for semi-analytical panel connections

pub mod bardell;
pub mod shape;
pub mod sparse;

pub use bardell::Bardell;
pub use shape::ShapeFunctions;
pub use sparse::{SparseMatrixBuilder, StiffnessContribution};

/// Degrees of freedom (u, v, w) per basis-term pair
pub const DOF: usize = 3;

/// Map a physical position `x` on `[0, length]` to the natural coordinate on `[-1, 1]`
#[inline]
pub fn natural_coordinate(x: f64, length: f64) -> f64 {
    2.0 * x / length - 1.0
}
