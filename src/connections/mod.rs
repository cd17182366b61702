//! Penalty stiffness connections between panels
//!
//! Three assemblers build the coupling stiffness of a connection line:
//! - [`xcte_edge_stiffness`]: one panel along a constant-x line
//! - [`ycte_edge_stiffness`]: one panel along a constant-y line
//! - [`xycte_cross_stiffness`]: a constant-x line of panel 1 against a
//!   constant-y line of panel 2 (flange to base)
//!
//! [`TJoint`] combines the three for a flange/base pair and
//! [`penalty_constants`] sizes `kt` and `kr` from the laminates involved.

mod penalty;
mod tjoint;
mod xcte;
mod xycte;
mod ycte;

pub use penalty::{penalty_constants, ConnectionKind};
pub use tjoint::TJoint;
pub use xcte::xcte_edge_stiffness;
pub use xycte::xycte_cross_stiffness;
pub use ycte::ycte_edge_stiffness;

use crate::error::{ConnectionError, ConnectionResult};
use serde::{Deserialize, Serialize};

/// Translational and rotational penalty stiffness of a connection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PenaltyStiffness {
    /// Translational penalty stiffness
    pub kt: f64,
    /// Rotational penalty stiffness
    pub kr: f64,
}

impl PenaltyStiffness {
    pub fn new(kt: f64, kr: f64) -> Self {
        Self { kt, kr }
    }

    /// Penalty on displacements only
    pub fn translational(kt: f64) -> Self {
        Self { kt, kr: 0.0 }
    }

    /// Both values finite and non-negative; `kr` needs a non-zero `kt`
    pub fn validate(&self) -> ConnectionResult<()> {
        for (name, value) in [("kt", self.kt), ("kr", self.kr)] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConnectionError::InvalidArgument(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }
        if self.kt == 0.0 && self.kr != 0.0 {
            return Err(ConnectionError::InvalidArgument(
                "kr requires a non-zero kt".to_string(),
            ));
        }
        Ok(())
    }

    /// `numerator * kr / (scale * kt)`, zero when there is no penalty at all
    #[inline]
    pub(crate) fn rotational(&self, numerator: f64, scale: f64) -> f64 {
        if self.kt == 0.0 {
            0.0
        } else {
            numerator * self.kr / (scale * self.kt)
        }
    }
}

/// Location of a contribution inside the global `size x size` matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub size: usize,
    pub row0: usize,
    pub col0: usize,
}

impl Placement {
    pub fn new(size: usize, row0: usize, col0: usize) -> Self {
        Self { size, row0, col0 }
    }

    /// Block on the diagonal starting at `offset`
    pub fn diagonal(size: usize, offset: usize) -> Self {
        Self::new(size, offset, offset)
    }

    /// Check that a `rows x cols` block fits inside the matrix
    pub(crate) fn check(&self, rows: usize, cols: usize) -> ConnectionResult<()> {
        for (what, offset, extent) in [("row", self.row0, rows), ("column", self.col0, cols)] {
            if offset.checked_add(extent).map_or(true, |end| end > self.size) {
                return Err(ConnectionError::OutOfBounds {
                    what,
                    offset,
                    extent,
                    size: self.size,
                });
            }
        }
        Ok(())
    }
}
