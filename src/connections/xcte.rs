//! Penalty connection of a panel edge along a constant-x line

use super::{PenaltyStiffness, Placement};
use crate::elements::Panel;
use crate::error::ConnectionResult;
use crate::math::{natural_coordinate, ShapeFunctions, StiffnessContribution, DOF};
use log::debug;
use rayon::prelude::*;

/// Penalty stiffness tying the line `x = xcte` of `panel` to a rigid reference.
///
/// Only the upper triangle (`row <= col`) is emitted. The w-w entry adds the
/// rotational penalty on `dw/dx`, hence the `1/a^2` factor on `kr`.
pub fn xcte_edge_stiffness<S: ShapeFunctions + ?Sized>(
    shapes: &S,
    penalty: &PenaltyStiffness,
    panel: &Panel,
    xcte: f64,
    placement: &Placement,
) -> ConnectionResult<StiffnessContribution> {
    penalty.validate()?;
    panel.validate(shapes)?;
    Panel::check_coordinate("xcte", xcte, panel.a)?;
    placement.check(panel.dofs(), panel.dofs())?;

    let Panel { a, b, m, n, u, v, w } = *panel;
    let PenaltyStiffness { kt, .. } = *penalty;
    let Placement { row0, col0, .. } = *placement;
    let xicte = natural_coordinate(xcte, a);

    let fu: Vec<f64> = (0..m).map(|i| shapes.f(i, xicte, &u.x)).collect();
    let fv: Vec<f64> = (0..m).map(|i| shapes.f(i, xicte, &v.x)).collect();
    let fw: Vec<f64> = (0..m).map(|i| shapes.f(i, xicte, &w.x)).collect();
    let fwxi: Vec<f64> = (0..m).map(|i| shapes.fxi(i, xicte, &w.x)).collect();

    let blocks: Vec<Vec<(usize, usize, f64)>> = (0..n * n)
        .into_par_iter()
        .map(|jl| {
            let (j, l) = (jl / n, jl % n);
            let gagbu = shapes.integral_ff(j, l, &u.y, &u.y);
            let gagbv = shapes.integral_ff(j, l, &v.y, &v.y);
            let gagbw = shapes.integral_ff(j, l, &w.y, &w.y);

            let mut block = Vec::new();
            for i in 0..m {
                let row = row0 + DOF * (j * m + i);
                for k in 0..m {
                    let col = col0 + DOF * (l * m + k);
                    if row > col {
                        continue;
                    }
                    block.push((row, col, 0.5 * b * kt * fu[i] * fu[k] * gagbu));
                    block.push((row + 1, col + 1, 0.5 * b * kt * fv[i] * fv[k] * gagbv));
                    block.push((
                        row + 2,
                        col + 2,
                        0.5 * b
                            * kt
                            * (fw[i] * fw[k] * gagbw
                                + penalty.rotational(4.0 * fwxi[i] * fwxi[k] * gagbw, a * a)),
                    ));
                }
            }
            block
        })
        .collect();

    let contribution = StiffnessContribution::from_blocks(placement.size, blocks);
    debug!(
        "xcte connection at x={xcte}: {} entries for {}x{} terms",
        contribution.len(),
        m,
        n
    );
    Ok(contribution)
}
