//! T-joint between a flange and a base panel
//!
//! ```text
//!          ||  --> panel 1 (flange), edge x = xcte1
//!          ||
//!     ============  --> panel 2 (base), line y = ycte2
//! ```
//!
//! The full connection stiffness is the sum of the flange self term, the
//! base self term and the flange/base cross term. Only the upper triangle is
//! stored when the flange block precedes the base block.

use super::{xcte_edge_stiffness, xycte_cross_stiffness, ycte_edge_stiffness};
use super::{PenaltyStiffness, Placement};
use crate::elements::{EdgeRestraints, FieldRestraints, Panel};
use crate::error::{ConnectionError, ConnectionResult};
use crate::math::{ShapeFunctions, StiffnessContribution};
use log::debug;
use serde::{Deserialize, Serialize};

/// Flange/base connection description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TJoint {
    /// Flange panel, joined along its constant-x edge
    pub flange: Panel,
    /// Base panel, joined along a constant-y line
    pub base: Panel,
    /// Connection line on the flange
    pub xcte1: f64,
    /// Connection line on the base
    pub ycte2: f64,
    pub penalty: PenaltyStiffness,
}

impl TJoint {
    pub fn new(
        flange: Panel,
        base: Panel,
        xcte1: f64,
        ycte2: f64,
        penalty: PenaltyStiffness,
    ) -> Self {
        Self {
            flange,
            base,
            xcte1,
            ycte2,
            penalty,
        }
    }

    /// Flange panel of a blade stiffener, `height` across x and `length` along y.
    ///
    /// The ends of the stiffener (`y = 0` and `y = length`) are clamped
    /// in-plane and simply supported out of plane. The x-direction series is
    /// left free so the connection edge at `x = 0` carries every field.
    pub fn blade_flange(height: f64, length: f64, m: usize, n: usize) -> Panel {
        let free = EdgeRestraints::free();
        Panel::new(height, length, m, n)
            .with_u(FieldRestraints::new(free, EdgeRestraints::clamped()))
            .with_v(FieldRestraints::new(free, EdgeRestraints::clamped()))
            .with_w(FieldRestraints::new(free, EdgeRestraints::simply_supported()))
    }

    /// Degrees of freedom of both panels
    pub fn dofs(&self) -> usize {
        self.flange.dofs() + self.base.dofs()
    }

    /// Connection stiffness with the flange at `flange_offset` and the base at
    /// `base_offset` in a `size x size` system matrix.
    ///
    /// The stored entries become the full symmetric matrix once every
    /// off-diagonal entry is mirrored (see [`StiffnessContribution::mirrored`]).
    pub fn stiffness<S: ShapeFunctions + ?Sized>(
        &self,
        shapes: &S,
        size: usize,
        flange_offset: usize,
        base_offset: usize,
    ) -> ConnectionResult<StiffnessContribution> {
        let (f0, f1) = (flange_offset, flange_offset.saturating_add(self.flange.dofs()));
        let (b0, b1) = (base_offset, base_offset.saturating_add(self.base.dofs()));
        if f0 < b1 && b0 < f1 {
            return Err(ConnectionError::OverlappingPanels);
        }

        let flange = xcte_edge_stiffness(
            shapes,
            &self.penalty,
            &self.flange,
            self.xcte1,
            &Placement::diagonal(size, flange_offset),
        )?;
        let cross = xycte_cross_stiffness(
            shapes,
            &self.penalty,
            &self.flange,
            &self.base,
            self.xcte1,
            self.ycte2,
            &Placement::new(size, flange_offset, base_offset),
        )?;
        let base = ycte_edge_stiffness(
            shapes,
            &self.penalty,
            &self.base,
            self.ycte2,
            &Placement::diagonal(size, base_offset),
        )?;

        let mut total = flange;
        total.extend(&cross)?;
        total.extend(&base)?;
        debug!("T-joint connection: {} entries in a {size}x{size} matrix", total.len());
        Ok(total)
    }
}
