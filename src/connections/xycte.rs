//! Cross-coupling penalty between a constant-x line of one panel and a
//! constant-y line of another panel meeting at a right angle

use super::{PenaltyStiffness, Placement};
use crate::elements::Panel;
use crate::error::ConnectionResult;
use crate::math::{natural_coordinate, ShapeFunctions, StiffnessContribution, DOF};
use log::{debug, warn};
use rayon::prelude::*;

/// Entries written per term combination
const ENTRIES: usize = 4;

/// Off-diagonal penalty block coupling `x = xcte1` of `panel1` (flange) to
/// `y = ycte2` of `panel2` (base).
///
/// Rows index panel 1 from `row0`, columns index panel 2 from `col0`. Each
/// `(i1, j1, k2, l2)` combination writes exactly four entries:
/// `(u1, w2)`, `(v1, u2)`, `(w1, v2)` and `(w1, w2)`, the last one being the
/// rotational penalty between `dw1/dx` and `dw2/dy`. No symmetry applies, so
/// the output always holds `4*m1*n1*m2*n2` entries.
pub fn xycte_cross_stiffness<S: ShapeFunctions + ?Sized>(
    shapes: &S,
    penalty: &PenaltyStiffness,
    panel1: &Panel,
    panel2: &Panel,
    xcte1: f64,
    ycte2: f64,
    placement: &Placement,
) -> ConnectionResult<StiffnessContribution> {
    penalty.validate()?;
    panel1.validate(shapes)?;
    panel2.validate(shapes)?;
    Panel::check_coordinate("xcte1", xcte1, panel1.a)?;
    Panel::check_coordinate("ycte2", ycte2, panel2.b)?;
    placement.check(panel1.dofs(), panel2.dofs())?;

    if (panel1.b - panel2.a).abs() > 1e-9 * panel1.b.max(panel2.a) {
        warn!(
            "xycte connection joins edges of different length: b1 = {}, a2 = {}",
            panel1.b, panel2.a
        );
    }

    let Panel { a: a1, b: b1, m: m1, n: n1, u: u1, v: v1, w: w1 } = *panel1;
    let Panel { b: b2, m: m2, n: n2, u: u2, v: v2, w: w2, .. } = *panel2;
    let PenaltyStiffness { kt, .. } = *penalty;
    let Placement { row0, col0, .. } = *placement;
    let xicte1 = natural_coordinate(xcte1, a1);
    let etacte2 = natural_coordinate(ycte2, b2);

    let fau: Vec<f64> = (0..m1).map(|i1| shapes.f(i1, xicte1, &u1.x)).collect();
    let fav: Vec<f64> = (0..m1).map(|i1| shapes.f(i1, xicte1, &v1.x)).collect();
    let faw: Vec<f64> = (0..m1).map(|i1| shapes.f(i1, xicte1, &w1.x)).collect();
    let fawxi: Vec<f64> = (0..m1).map(|i1| shapes.fxi(i1, xicte1, &w1.x)).collect();
    let gbu: Vec<f64> = (0..n2).map(|l2| shapes.f(l2, etacte2, &u2.y)).collect();
    let gbv: Vec<f64> = (0..n2).map(|l2| shapes.f(l2, etacte2, &v2.y)).collect();
    let gbw: Vec<f64> = (0..n2).map(|l2| shapes.f(l2, etacte2, &w2.y)).collect();
    let gbweta: Vec<f64> = (0..n2).map(|l2| shapes.fxi(l2, etacte2, &w2.y)).collect();

    let nnz = ENTRIES * m1 * n1 * m2 * n2;
    let chunk = ENTRIES * m1 * n2;
    let mut rows = vec![0usize; nnz];
    let mut cols = vec![0usize; nnz];
    let mut values = vec![0.0f64; nnz];

    rows.par_chunks_mut(chunk)
        .zip(cols.par_chunks_mut(chunk))
        .zip(values.par_chunks_mut(chunk))
        .enumerate()
        .for_each(|(jk, ((r, c), v))| {
            let (j1, k2) = (jk / m2, jk % m2);
            let gafbuw = shapes.integral_ff(j1, k2, &u1.y, &w2.x);
            let gafbvu = shapes.integral_ff(j1, k2, &v1.y, &u2.x);
            let gafbwv = shapes.integral_ff(j1, k2, &w1.y, &v2.x);
            let gafbww = shapes.integral_ff(j1, k2, &w1.y, &w2.x);

            let mut idx = 0;
            for i1 in 0..m1 {
                let row = row0 + DOF * (j1 * m1 + i1);
                for l2 in 0..n2 {
                    let col = col0 + DOF * (l2 * m2 + k2);
                    let entries = [
                        (row, col + 2, 0.5 * b1 * kt * fau[i1] * gbw[l2] * gafbuw),
                        (row + 1, col, -0.5 * b1 * kt * fav[i1] * gbu[l2] * gafbvu),
                        (row + 2, col + 1, -0.5 * b1 * kt * faw[i1] * gbv[l2] * gafbwv),
                        (
                            row + 2,
                            col + 2,
                            0.5 * b1
                                * kt
                                * -penalty.rotational(
                                    4.0 * fawxi[i1] * gbweta[l2] * gafbww,
                                    a1 * b2,
                                ),
                        ),
                    ];
                    for (rr, cc, vv) in entries {
                        r[idx] = rr;
                        c[idx] = cc;
                        v[idx] = vv;
                        idx += 1;
                    }
                }
            }
        });

    debug!(
        "xycte connection at x1={xcte1}, y2={ycte2}: {nnz} entries for {m1}x{n1} by {m2}x{n2} terms"
    );
    Ok(StiffnessContribution::from_parts(placement.size, rows, cols, values))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connections::testing::Linear;
    use crate::elements::{EdgeRestraints, FieldRestraints};
    use crate::error::ConnectionError;
    use crate::math::Bardell;
    use approx::assert_relative_eq;

    #[test]
    fn test_single_terms_emit_four_entries() {
        let bardell = Bardell::new();
        let panel1 = Panel::new(1.0, 1.0, 1, 1);
        let panel2 = Panel::new(1.0, 1.0, 1, 1);
        let penalty = PenaltyStiffness::new(1e8, 1e6);
        let placement = Placement::new(6, 0, 3);
        let k = xycte_cross_stiffness(&bardell, &penalty, &panel1, &panel2, 0.0, 1.0, &placement)
            .unwrap();
        assert_eq!(k.len(), 4);
        assert_eq!(k.rows(), &[0, 1, 2, 2]);
        assert_eq!(k.cols(), &[5, 3, 4, 5]);

        // f_0(-1) = 1, f_0(+1) = 0 for the y-series of panel 2
        let g = 26.0 / 35.0;
        assert_eq!(k.values()[0], 0.0);
        assert_eq!(k.values()[1], 0.0);
        assert_eq!(k.values()[2], 0.0);
        assert_eq!(k.values()[3], 0.0);

        let k = xycte_cross_stiffness(&bardell, &penalty, &panel1, &panel2, 0.0, 0.0, &placement)
            .unwrap();
        assert_relative_eq!(k.values()[0], 0.5 * 1e8 * g, max_relative = 1e-14);
        assert_relative_eq!(k.values()[1], -0.5 * 1e8 * g, max_relative = 1e-14);
        assert_relative_eq!(k.values()[2], -0.5 * 1e8 * g, max_relative = 1e-14);
        // slope of f_0 is zero at both ends
        assert_eq!(k.values()[3], 0.0);
    }

    #[test]
    fn test_values_follow_closed_form() {
        let e1 = EdgeRestraints::new(1.0, 0.5, 2.0, 3.0);
        let e2 = EdgeRestraints::new(2.0, -1.0, 0.5, 1.5);
        let panel1 = Panel::new(2.0, 1.0, 2, 2).with_w(FieldRestraints::uniform(e1));
        let panel2 = Panel::new(1.0, 4.0, 3, 2).with_w(FieldRestraints::uniform(e2));
        let penalty = PenaltyStiffness::new(10.0, 5.0);
        let placement = Placement::new(30, 0, 12);
        let k = xycte_cross_stiffness(&Linear, &penalty, &panel1, &panel2, 1.0, 3.0, &placement)
            .unwrap();
        assert_eq!(k.len(), 4 * 2 * 2 * 3 * 2);
        let dense = k.to_dense();

        // xi1 = 0, eta2 = 0.5
        let (xi1, eta2) = (0.0, 0.5);
        let (a1, b1, b2, kt, kr) = (2.0, 1.0, 4.0, 10.0, 5.0);
        let free = EdgeRestraints::free();
        let f = |i: usize, x: f64, e: &EdgeRestraints| (i + 1) as f64 * e.t1 + x * e.r1;
        let ff = |j: usize, k: usize, ej: &EdgeRestraints, ek: &EdgeRestraints| {
            ((j + 1) * (k + 1)) as f64 * ej.t2 * ek.r2
        };

        let (i1, j1, k2, l2) = (1, 0, 2, 1);
        let row = 3 * (j1 * 2 + i1);
        let col = 12 + 3 * (l2 * 3 + k2);

        let uw = 0.5 * b1 * kt * f(i1, xi1, &free) * f(l2, eta2, &e2) * ff(j1, k2, &free, &e2);
        let vu = -0.5 * b1 * kt * f(i1, xi1, &free) * f(l2, eta2, &free) * ff(j1, k2, &free, &free);
        let wv = -0.5 * b1 * kt * f(i1, xi1, &e1) * f(l2, eta2, &free) * ff(j1, k2, &e1, &free);
        let ww = 0.5
            * b1
            * kt
            * (-4.0 * e1.r1 * e2.r1 * ff(j1, k2, &e1, &e2) * kr / (a1 * b2 * kt));
        assert_relative_eq!(dense[(row, col + 2)], uw);
        assert_relative_eq!(dense[(row + 1, col)], vu);
        assert_relative_eq!(dense[(row + 2, col + 1)], wv);
        assert_relative_eq!(dense[(row + 2, col + 2)], ww);
        assert!(ww > 0.0);
        assert_eq!(dense[(row, col)], 0.0);
        assert_eq!(dense[(row + 1, col + 1)], 0.0);
    }

    #[test]
    fn test_bounds_use_each_panel() {
        let bardell = Bardell::new();
        let panel1 = Panel::new(1.0, 0.5, 3, 2);
        let panel2 = Panel::new(0.5, 2.0, 2, 4);
        let penalty = PenaltyStiffness::new(1e6, 1e4);
        let placement = Placement::new(60, 0, 18);
        let k = xycte_cross_stiffness(&bardell, &penalty, &panel1, &panel2, 0.0, 1.0, &placement)
            .unwrap();
        assert_eq!(k.len(), 4 * 3 * 2 * 2 * 4);
        assert!(k.triplets().all(|(r, c, _)| r < 18 && (18..42).contains(&c)));
        assert!(k.values().iter().all(|v| v.is_finite()));

        assert!(matches!(
            xycte_cross_stiffness(
                &bardell,
                &penalty,
                &panel1,
                &panel2,
                0.0,
                1.0,
                &Placement::new(40, 0, 18)
            ),
            Err(ConnectionError::OutOfBounds { what: "column", .. })
        ));
    }

    #[test]
    fn test_repeatable() {
        let bardell = Bardell::new();
        let panel1 = Panel::new(1.0, 0.5, 5, 4);
        let panel2 = Panel::new(0.5, 2.0, 4, 6);
        let penalty = PenaltyStiffness::new(1e6, 1e4);
        let placement = Placement::new(132, 0, 60);
        let cross = || {
            xycte_cross_stiffness(&bardell, &penalty, &panel1, &panel2, 0.2, 0.0, &placement)
                .unwrap()
        };
        let first = cross();
        let second = cross();
        assert_eq!(first, second);
    }
}
