//! Penalty connection of a panel edge along a constant-y line

use super::{PenaltyStiffness, Placement};
use crate::elements::Panel;
use crate::error::ConnectionResult;
use crate::math::{natural_coordinate, ShapeFunctions, StiffnessContribution, DOF};
use log::debug;
use rayon::prelude::*;

/// Penalty stiffness tying the line `y = ycte` of `panel` to a rigid reference.
///
/// The y-axis dual of [`super::xcte_edge_stiffness`]: the line integral runs
/// along x (factor `0.5*a`) and the rotational penalty acts on `dw/dy`
/// (factor `1/b^2`). Only the upper triangle is emitted.
pub fn ycte_edge_stiffness<S: ShapeFunctions + ?Sized>(
    shapes: &S,
    penalty: &PenaltyStiffness,
    panel: &Panel,
    ycte: f64,
    placement: &Placement,
) -> ConnectionResult<StiffnessContribution> {
    penalty.validate()?;
    panel.validate(shapes)?;
    Panel::check_coordinate("ycte", ycte, panel.b)?;
    placement.check(panel.dofs(), panel.dofs())?;

    let Panel { a, b, m, n, u, v, w } = *panel;
    let PenaltyStiffness { kt, .. } = *penalty;
    let Placement { row0, col0, .. } = *placement;
    let etacte = natural_coordinate(ycte, b);

    let gu: Vec<f64> = (0..n).map(|j| shapes.f(j, etacte, &u.y)).collect();
    let gv: Vec<f64> = (0..n).map(|j| shapes.f(j, etacte, &v.y)).collect();
    let gw: Vec<f64> = (0..n).map(|j| shapes.f(j, etacte, &w.y)).collect();
    let gweta: Vec<f64> = (0..n).map(|j| shapes.fxi(j, etacte, &w.y)).collect();

    let blocks: Vec<Vec<(usize, usize, f64)>> = (0..m * m)
        .into_par_iter()
        .map(|ik| {
            let (i, k) = (ik / m, ik % m);
            let fafbu = shapes.integral_ff(i, k, &u.x, &u.x);
            let fafbv = shapes.integral_ff(i, k, &v.x, &v.x);
            let fafbw = shapes.integral_ff(i, k, &w.x, &w.x);

            let mut block = Vec::new();
            for j in 0..n {
                let row = row0 + DOF * (j * m + i);
                for l in 0..n {
                    let col = col0 + DOF * (l * m + k);
                    if row > col {
                        continue;
                    }
                    block.push((row, col, 0.5 * a * kt * fafbu * gu[j] * gu[l]));
                    block.push((row + 1, col + 1, 0.5 * a * kt * fafbv * gv[j] * gv[l]));
                    block.push((
                        row + 2,
                        col + 2,
                        0.5 * a
                            * kt
                            * (fafbw * gw[j] * gw[l]
                                + penalty.rotational(4.0 * fafbw * gweta[j] * gweta[l], b * b)),
                    ));
                }
            }
            block
        })
        .collect();

    let contribution = StiffnessContribution::from_blocks(placement.size, blocks);
    debug!(
        "ycte connection at y={ycte}: {} entries for {}x{} terms",
        contribution.len(),
        m,
        n
    );
    Ok(contribution)
}
