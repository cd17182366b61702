//! Panel descriptor - a rectangular plate/shell region expanded in a
//! truncated double series per displacement field

use crate::error::{ConnectionError, ConnectionResult};
use crate::math::shape::ShapeFunctions;
use crate::math::{natural_coordinate, DOF};
use serde::{Deserialize, Serialize};

/// Boundary coefficients of one displacement field along one panel axis.
///
/// `t1`/`r1` act on the translation/rotation at the start of the axis
/// (natural coordinate -1), `t2`/`r2` at its end (+1). How a value maps to
/// free or restrained behavior is up to the [`ShapeFunctions`] evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeRestraints {
    pub t1: f64,
    pub r1: f64,
    pub t2: f64,
    pub r2: f64,
}

impl EdgeRestraints {
    pub const fn new(t1: f64, r1: f64, t2: f64, r2: f64) -> Self {
        Self { t1, r1, t2, r2 }
    }

    /// Both edge functions kept at both ends
    pub const fn free() -> Self {
        Self::new(1.0, 1.0, 1.0, 1.0)
    }

    /// Both edge functions removed at both ends
    pub const fn clamped() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Translation removed, rotation kept, at both ends
    pub const fn simply_supported() -> Self {
        Self::new(0.0, 1.0, 0.0, 1.0)
    }

    fn validate(&self, label: &str) -> ConnectionResult<()> {
        for (name, value) in [("1t", self.t1), ("1r", self.r1), ("2t", self.t2), ("2r", self.r2)] {
            if !value.is_finite() {
                return Err(ConnectionError::InvalidArgument(format!(
                    "boundary coefficient {label}{name} must be finite, got {value}"
                )));
            }
        }
        Ok(())
    }
}

impl Default for EdgeRestraints {
    fn default() -> Self {
        Self::free()
    }
}

/// Boundary coefficients of one displacement field along both panel axes
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldRestraints {
    /// Coefficients of the x-direction series
    pub x: EdgeRestraints,
    /// Coefficients of the y-direction series
    pub y: EdgeRestraints,
}

impl FieldRestraints {
    pub const fn new(x: EdgeRestraints, y: EdgeRestraints) -> Self {
        Self { x, y }
    }

    /// Same coefficients on both axes
    pub const fn uniform(edges: EdgeRestraints) -> Self {
        Self { x: edges, y: edges }
    }
}

/// A rectangular panel with `m` x-terms and `n` y-terms per field.
///
/// Degrees of freedom are packed as `3*(j*m + i) + field` with
/// `field` = 0 (u), 1 (v), 2 (w).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Panel {
    /// Length along x
    pub a: f64,
    /// Length along y
    pub b: f64,
    /// Number of x-direction terms
    pub m: usize,
    /// Number of y-direction terms
    pub n: usize,
    #[serde(default)]
    pub u: FieldRestraints,
    #[serde(default)]
    pub v: FieldRestraints,
    #[serde(default)]
    pub w: FieldRestraints,
}

impl Panel {
    /// Create a panel with every boundary coefficient set to free
    pub fn new(a: f64, b: f64, m: usize, n: usize) -> Self {
        Self {
            a,
            b,
            m,
            n,
            u: FieldRestraints::default(),
            v: FieldRestraints::default(),
            w: FieldRestraints::default(),
        }
    }

    pub fn with_u(mut self, u: FieldRestraints) -> Self {
        self.u = u;
        self
    }

    pub fn with_v(mut self, v: FieldRestraints) -> Self {
        self.v = v;
        self
    }

    pub fn with_w(mut self, w: FieldRestraints) -> Self {
        self.w = w;
        self
    }

    /// Number of degrees of freedom spanned by this panel
    pub fn dofs(&self) -> usize {
        DOF * self.m * self.n
    }

    /// Natural coordinate of a position along x
    pub fn xi(&self, x: f64) -> f64 {
        natural_coordinate(x, self.a)
    }

    /// Natural coordinate of a position along y
    pub fn eta(&self, y: f64) -> f64 {
        natural_coordinate(y, self.b)
    }

    /// Check geometry, truncation orders and boundary coefficients
    pub fn validate<S: ShapeFunctions + ?Sized>(&self, shapes: &S) -> ConnectionResult<()> {
        for (name, value) in [("a", self.a), ("b", self.b)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConnectionError::InvalidArgument(format!(
                    "panel dimension {name} must be positive and finite, got {value}"
                )));
            }
        }
        for (name, value) in [("m", self.m), ("n", self.n)] {
            if value == 0 {
                return Err(ConnectionError::InvalidArgument(format!(
                    "panel truncation order {name} must be at least 1"
                )));
            }
            if let Some(available) = shapes.max_terms() {
                if value > available {
                    return Err(ConnectionError::TooManyTerms {
                        requested: value,
                        available,
                    });
                }
            }
        }
        for (field, restraints) in [("u", &self.u), ("v", &self.v), ("w", &self.w)] {
            restraints.x.validate(&format!("{field}x"))?;
            restraints.y.validate(&format!("{field}y"))?;
        }
        Ok(())
    }

    /// Check that a fixed coordinate lies on the panel along an axis of `length`
    pub(crate) fn check_coordinate(name: &str, value: f64, length: f64) -> ConnectionResult<()> {
        if !(value.is_finite() && (0.0..=length).contains(&value)) {
            return Err(ConnectionError::InvalidArgument(format!(
                "{name} = {value} lies outside [0, {length}]"
            )));
        }
        Ok(())
    }
}
