//! Benchmarks for penalty connection assembly

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use panel_penalty::prelude::*;

fn bench_edge_connections(c: &mut Criterion) {
    let shapes = Bardell::new();
    let penalty = PenaltyStiffness::new(1e8, 1e5);
    let mut group = c.benchmark_group("edge_connections");

    for terms in [8, 12, 16] {
        let panel = Panel::new(1.0, 0.5, terms, terms);
        let placement = Placement::diagonal(panel.dofs(), 0);

        group.bench_with_input(BenchmarkId::new("xcte", terms), &panel, |b, panel| {
            b.iter(|| {
                xcte_edge_stiffness(&shapes, &penalty, black_box(panel), 0.3, &placement).unwrap()
            })
        });
        group.bench_with_input(BenchmarkId::new("ycte", terms), &panel, |b, panel| {
            b.iter(|| {
                ycte_edge_stiffness(&shapes, &penalty, black_box(panel), 0.3, &placement).unwrap()
            })
        });
    }

    group.finish();
}

fn bench_cross_coupling(c: &mut Criterion) {
    let shapes = Bardell::new();
    let penalty = PenaltyStiffness::new(1e8, 1e5);
    let mut group = c.benchmark_group("cross_coupling");

    for terms in [8, 12, 16] {
        let flange = Panel::new(0.05, 1.0, terms, terms);
        let base = Panel::new(1.0, 0.5, terms, terms);
        let placement = Placement::new(flange.dofs() + base.dofs(), 0, flange.dofs());

        group.bench_with_input(BenchmarkId::new("xycte", terms), &terms, |b, _| {
            b.iter(|| {
                let ycte2 = black_box(0.25);
                xycte_cross_stiffness(&shapes, &penalty, &flange, &base, 0.0, ycte2, &placement)
                    .unwrap()
            })
        });
    }

    group.finish();
}

fn bench_tjoint(c: &mut Criterion) {
    let shapes = Bardell::new();
    let joint = TJoint::new(
        Panel::new(0.05, 1.0, 14, 11),
        Panel::new(1.0, 0.5, 12, 12),
        0.0,
        0.25,
        PenaltyStiffness::new(1e8, 1e5),
    );
    let size = joint.dofs();

    c.bench_function("tjoint_finalize_symmetric", |b| {
        b.iter(|| {
            let k = joint.stiffness(&shapes, size, 0, joint.flange.dofs()).unwrap();
            let mut global = SparseMatrixBuilder::new(size);
            global.add_contribution(&k).unwrap();
            black_box(global.finalize_symmetric())
        })
    });
}

criterion_group!(benches, bench_edge_connections, bench_cross_coupling, bench_tjoint);
criterion_main!(benches);
