//! Laminate stiffness summary used to size penalty constants

use crate::error::{ConnectionError, ConnectionResult};
use serde::{Deserialize, Serialize};

/// Diagonal membrane (A) and bending (D) stiffness terms of a laminate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Laminate {
    /// Membrane stiffness A11 (force/length)
    pub a11: f64,
    /// Membrane stiffness A22 (force/length)
    pub a22: f64,
    /// Bending stiffness D11 (force*length)
    pub d11: f64,
    /// Bending stiffness D22 (force*length)
    pub d22: f64,
    /// Total thickness
    pub thickness: f64,
}

impl Laminate {
    pub fn new(a11: f64, a22: f64, d11: f64, d22: f64, thickness: f64) -> Self {
        Self {
            a11,
            a22,
            d11,
            d22,
            thickness,
        }
    }

    /// Single isotropic layer of modulus `e`, Poisson's ratio `nu` and thickness `t`
    pub fn isotropic(e: f64, nu: f64, t: f64) -> Self {
        let a = e * t / (1.0 - nu * nu);
        let d = e * t.powi(3) / (12.0 * (1.0 - nu * nu));
        Self::new(a, a, d, d, t)
    }

    pub(crate) fn validate(&self) -> ConnectionResult<()> {
        for (name, value) in [
            ("A11", self.a11),
            ("A22", self.a22),
            ("D11", self.d11),
            ("D22", self.d22),
            ("thickness", self.thickness),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConnectionError::InvalidArgument(format!(
                    "laminate {name} must be positive and finite, got {value}"
                )));
            }
        }
        Ok(())
    }
}
