//! Penalty constants sized from the laminates being connected
//!
//! Very large penalties enforce a connection better but degrade the
//! conditioning of the assembled system. Here `kt` and `kr` follow the
//! membrane and bending stiffness of the two laminates:
//!
//! `kt = 4*A1*A2 / ((A1 + A2)*(h1 + h2))`, `kr = 4*D1*D2 / ((D1 + D2)*(h1 + h2))`
//!
//! with the stiffness terms taken across the connection line.

use super::PenaltyStiffness;
use crate::elements::{Laminate, Panel};
use crate::error::ConnectionResult;
use serde::{Deserialize, Serialize};

/// Orientation of a connection line with respect to each panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConnectionKind {
    /// Both panels joined along a constant-x line
    Xcte,
    /// Both panels joined along a constant-y line
    Ycte,
    /// Panels stacked through the thickness (skin and pad-up)
    BotTop,
    /// Constant-x line of panel 1 to constant-y line of panel 2, at 90 degrees
    XcteYcte,
    /// Constant-y line of panel 1 to constant-x line of panel 2, at 90 degrees
    YcteXcte,
}

/// Translational and rotational penalty stiffness for a connection between
/// `panel1` and a second panel.
///
/// `BotTop` connections carry no rotational penalty (`kr = 0`) and scale `kt`
/// by the smaller in-plane dimension of `panel1`.
pub fn penalty_constants(
    panel1: &Panel,
    laminate1: &Laminate,
    laminate2: &Laminate,
    kind: ConnectionKind,
) -> ConnectionResult<PenaltyStiffness> {
    laminate1.validate()?;
    laminate2.validate()?;

    let h = laminate1.thickness + laminate2.thickness;
    let blend = |s1: f64, s2: f64| 4.0 * s1 * s2 / ((s1 + s2) * h);

    let (l1, l2) = (laminate1, laminate2);
    let penalty = match kind {
        ConnectionKind::Xcte => PenaltyStiffness::new(blend(l1.a11, l2.a11), blend(l1.d11, l2.d11)),
        ConnectionKind::Ycte => PenaltyStiffness::new(blend(l1.a22, l2.a22), blend(l1.d22, l2.d22)),
        ConnectionKind::BotTop => {
            PenaltyStiffness::translational(blend(l1.a11, l2.a11) / panel1.a.min(panel1.b))
        }
        ConnectionKind::XcteYcte => {
            PenaltyStiffness::new(blend(l1.a11, l2.a22), blend(l1.d11, l2.d22))
        }
        ConnectionKind::YcteXcte => {
            PenaltyStiffness::new(blend(l1.a22, l2.a11), blend(l1.d22, l2.d11))
        }
    };
    penalty.validate()?;
    Ok(penalty)
}
