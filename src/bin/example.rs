//! Panel Penalty Example - Blade stiffener flange on a skin panel
//!
//! Usage: `penalty-example [tjoint.json]`
//!
//! Without an argument a built-in aluminium flange/base pair is used.

use anyhow::Context;
use log::info;
use panel_penalty::prelude::*;
use serde::Serialize;

#[derive(Serialize)]
struct Summary {
    size: usize,
    flange_dofs: usize,
    base_dofs: usize,
    kt: f64,
    kr: f64,
    stored_entries: usize,
    csr_nnz: usize,
    sparsity: f64,
    max_diagonal: f64,
}

fn default_joint() -> ConnectionResult<TJoint> {
    //          ||  flange, 50 mm high
    //          ||
    //   ================  base, 1 m x 0.5 m
    let base = Panel::new(1.0, 0.5, 8, 8);

    // Flange: 50 mm high along x, stiffener ends at y = 0 and y = 1 m
    let flange = TJoint::blade_flange(0.05, 1.0, 6, 8);

    let laminate = Laminate::isotropic(70e9, 0.33, 0.002);
    let penalty = penalty_constants(&flange, &laminate, &laminate, ConnectionKind::XcteYcte)?;

    Ok(TJoint::new(flange, base, 0.0, 0.25, penalty))
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let joint = match std::env::args().nth(1) {
        Some(path) => {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {path}"))?;
            serde_json::from_str(&text).with_context(|| format!("Failed to parse {path}"))?
        }
        None => default_joint()?,
    };

    let shapes = Bardell::new();
    let size = joint.dofs();
    let flange_dofs = joint.flange.dofs();
    info!("Assembling T-joint connection into a {size}x{size} matrix");

    let k = joint.stiffness(&shapes, size, 0, flange_dofs)?;

    let mut global = SparseMatrixBuilder::new(size);
    global.add_contribution(&k)?;
    let csr = global.finalize_symmetric();

    let max_diagonal = csr
        .triplet_iter()
        .filter(|(r, c, _)| r == c)
        .map(|(_, _, &v)| v)
        .fold(0.0, f64::max);

    let summary = Summary {
        size,
        flange_dofs,
        base_dofs: joint.base.dofs(),
        kt: joint.penalty.kt,
        kr: joint.penalty.kr,
        stored_entries: k.len(),
        csr_nnz: csr.nnz(),
        sparsity: global.sparsity(),
        max_diagonal,
    };
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}
