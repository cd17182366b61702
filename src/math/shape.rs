//! Shape function evaluator interface
//!
//! The connection assemblers only need three numerical primitives from the
//! series basis: the value of term `i` at a natural coordinate, its first
//! derivative, and the integral over [-1, 1] of the product of two terms.
//! Each primitive receives the four boundary coefficients of the direction
//! it is evaluated in.

use crate::elements::EdgeRestraints;

/// One-dimensional series basis used along each panel direction
pub trait ShapeFunctions: Sync {
    /// Largest number of terms the evaluator supports, if bounded
    fn max_terms(&self) -> Option<usize> {
        None
    }

    /// Value of term `i` at natural coordinate `xi`
    fn f(&self, i: usize, xi: f64, edges: &EdgeRestraints) -> f64;

    /// Derivative of term `i` with respect to `xi`
    fn fxi(&self, i: usize, xi: f64, edges: &EdgeRestraints) -> f64;

    /// Integral over [-1, 1] of `f_i` (with `edges_i`) times `f_j` (with `edges_j`)
    fn integral_ff(
        &self,
        i: usize,
        j: usize,
        edges_i: &EdgeRestraints,
        edges_j: &EdgeRestraints,
    ) -> f64;
}
