use approx::assert_relative_eq;
use nalgebra::{DMatrix, SymmetricEigen};
use panel_penalty::prelude::*;

/// Flange standing on a base panel, shared edge length 1.0
fn blade_joint(kr: f64) -> TJoint {
    let flange = TJoint::blade_flange(0.08, 1.0, 3, 4);
    let base = Panel::new(1.0, 0.6, 4, 3);
    TJoint::new(flange, base, 0.0, 0.2, PenaltyStiffness::new(1e4, kr))
}

fn full_matrix(joint: &TJoint) -> DMatrix<f64> {
    let shapes = Bardell::new();
    let size = joint.dofs();
    let k = joint.stiffness(&shapes, size, 0, joint.flange.dofs()).unwrap();
    let mut global = SparseMatrixBuilder::new(size);
    global.add_contribution(&k).unwrap();
    DMatrix::from(&global.finalize_symmetric())
}

#[test]
fn test_full_matrix_is_symmetric() {
    let dense = full_matrix(&blade_joint(1e2));
    let transposed = dense.transpose();
    for (x, y) in dense.iter().zip(transposed.iter()) {
        assert_relative_eq!(*x, *y, epsilon = 1e-9, max_relative = 1e-12);
    }
}

#[test]
fn test_penalty_energy_is_never_negative() {
    // Each penalty term is a square such as (u1 + w2)^2 or (dw1/dx - dw2/dy)^2,
    // so the assembled connection matrix is positive semi-definite
    for kr in [0.0, 1e2] {
        let dense = full_matrix(&blade_joint(kr));
        let eigen = SymmetricEigen::new(dense);
        let max = eigen.eigenvalues.max();
        let min = eigen.eigenvalues.min();
        assert!(max > 0.0);
        assert!(min > -1e-9 * max, "kr = {kr}: min eigenvalue {min}, max {max}");
    }
}

#[test]
fn test_builder_matches_mirrored_contribution() {
    let shapes = Bardell::new();
    let joint = blade_joint(1e2);
    let size = joint.dofs() + 6;
    let k = joint.stiffness(&shapes, size, 3, 3 + joint.flange.dofs()).unwrap();

    let mut global = SparseMatrixBuilder::new(size);
    global.add_contribution(&k).unwrap();
    let from_builder = DMatrix::from(&global.finalize_symmetric());
    let from_mirror = k.mirrored().to_dense();
    for (x, y) in from_builder.iter().zip(from_mirror.iter()) {
        assert_relative_eq!(*x, *y, epsilon = 1e-9, max_relative = 1e-12);
    }

    // untouched leading and trailing rows
    assert!(from_builder.row(0).iter().all(|&v| v == 0.0));
    assert!(from_builder.row(size - 1).iter().all(|&v| v == 0.0));
}

#[test]
fn test_cross_coupling_single_terms() {
    let shapes = Bardell::new();
    let panel = Panel::new(1.0, 1.0, 1, 1);
    let penalty = PenaltyStiffness::new(1e8, 1e4);
    let placement = Placement::new(6, 0, 3);
    let k = xycte_cross_stiffness(&shapes, &penalty, &panel, &panel, 0.0, 0.0, &placement).unwrap();
    let positions: Vec<(usize, usize)> = k.triplets().map(|(r, c, _)| (r, c)).collect();
    assert_eq!(positions, vec![(0, 5), (1, 3), (2, 4), (2, 5)]);
}

#[test]
fn test_calls_are_independent_across_threads() {
    let shapes = Bardell::new();
    let panel = Panel::new(1.0, 0.8, 6, 5);
    let penalty = PenaltyStiffness::new(1e6, 1e3);
    let placement = Placement::diagonal(90, 0);
    let reference = xcte_edge_stiffness(&shapes, &penalty, &panel, 0.4, &placement).unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                scope.spawn(|| {
                    xcte_edge_stiffness(&shapes, &penalty, &panel, 0.4, &placement).unwrap()
                })
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), reference);
        }
    });
}

#[test]
fn test_penalty_constants_drive_joint() {
    let lam = Laminate::isotropic(70e9, 0.33, 0.002);
    let flange = Panel::new(0.05, 1.0, 3, 3);
    let base = Panel::new(1.0, 0.5, 3, 3);
    let penalty = penalty_constants(&flange, &lam, &lam, ConnectionKind::XcteYcte).unwrap();
    assert!(penalty.kt > penalty.kr);

    let joint = TJoint::new(flange, base, 0.0, 0.25, penalty);
    let k = joint.stiffness(&Bardell::new(), joint.dofs(), 0, flange.dofs()).unwrap();
    assert!(k.values().iter().all(|v| v.is_finite()));
    assert!(k.is_upper_triangular());
}
