//! Panel Penalty - connection stiffness for semi-analytical panel models
//!
//! Panels (plates/shells) are described by truncated double series per
//! displacement field (u, v, w). This library builds the penalty stiffness
//! terms that tie panel edges together, or to a rigid reference, and places
//! them at the right offsets of a global system matrix:
//! - Single-edge penalty along a constant-x or constant-y line
//! - Cross-coupling penalty between perpendicular panels (flange to base)
//! - Penalty constants sized from laminate stiffness
//! - T-joint assembly combining the three
//!
//! ## Example
//! ```rust
//! use panel_penalty::prelude::*;
//!
//! let shapes = Bardell::new();
//! let flange = Panel::new(0.1, 1.0, 4, 4);
//! let base = Panel::new(1.0, 0.5, 4, 4);
//!
//! let lam = Laminate::isotropic(70e9, 0.33, 0.002);
//! let penalty = penalty_constants(&flange, &lam, &lam, ConnectionKind::XcteYcte).unwrap();
//!
//! let joint = TJoint::new(flange, base, 0.0, 0.25, penalty);
//! let size = joint.dofs();
//! let k = joint.stiffness(&shapes, size, 0, flange.dofs()).unwrap();
//!
//! let mut global = SparseMatrixBuilder::new(size);
//! global.add_contribution(&k).unwrap();
//! let csr = global.finalize_symmetric();
//! assert_eq!(csr.nrows(), size);
//! ```

pub mod connections;
pub mod elements;
pub mod error;
pub mod math;

// Re-export common types
pub mod prelude {
    pub use crate::connections::{
        penalty_constants, xcte_edge_stiffness, xycte_cross_stiffness, ycte_edge_stiffness,
        ConnectionKind, PenaltyStiffness, Placement, TJoint,
    };
    pub use crate::elements::{EdgeRestraints, FieldRestraints, Laminate, Panel};
    pub use crate::error::{ConnectionError, ConnectionResult};
    pub use crate::math::{
        natural_coordinate, Bardell, ShapeFunctions, SparseMatrixBuilder, StiffnessContribution,
    };
}
