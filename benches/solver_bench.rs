//! Benchmarks for the section solver

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fiber_section::prelude::*;

fn create_rc_section(layers: usize) -> Section {
    let concrete = Material::concrete_ec2(30e6, 0.002, 0.0035).unwrap();
    let steel = Material::bilinear_steel(200e9, 500e6, None).unwrap();

    let mut section = Section::new("RC column");
    section
        .add_rectangular_patch(Rectangle::new(0.4, 0.4).at(0.2, 0.2), 4, layers, concrete)
        .unwrap();
    for (x, y) in [(0.05, 0.05), (0.35, 0.05), (0.05, 0.35), (0.35, 0.35)] {
        section.add_fiber(4.9e-4, x, y, steel);
    }
    section
}

fn benchmark_neutral_axis(c: &mut Criterion) {
    let section = create_rc_section(40);
    let solver = SectionSolver::new(&section);
    c.bench_function("neutral_axis_rc_160_fibers", |b| {
        b.iter(|| black_box(solver.find_neutral_axis(black_box(-1.0e6), -0.004)))
    });
}

fn benchmark_moment_curvature(c: &mut Criterion) {
    let section = create_rc_section(40);
    let solver = SectionSolver::new(&section);
    c.bench_function("moment_curvature_100_steps", |b| {
        b.iter(|| {
            let curve = solver
                .moment_curvature_analysis((0..100).map(|i| -1e-4 * i as f64), Some(-1.0e6))
                .unwrap();
            black_box(curve);
        })
    });
}

fn benchmark_interaction(c: &mut Criterion) {
    let section = create_rc_section(40);
    let solver = SectionSolver::new(&section);
    c.bench_function("interaction_51_points", |b| {
        b.iter(|| black_box(solver.interaction_curve((-0.4, 0.4)).unwrap()))
    });
}

criterion_group!(
    benches,
    benchmark_neutral_axis,
    benchmark_moment_curvature,
    benchmark_interaction,
);

criterion_main!(benches);
