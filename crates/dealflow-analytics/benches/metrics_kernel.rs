//! Benchmarks for the underwriting calculators.
//!
//! Run with: cargo bench -p dealflow-analytics

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rust_decimal_macros::dec;

use dealflow_analytics::compute_metrics;
use dealflow_analytics::report::display_record;
use dealflow_core::types::{Figures, FlipFigures, IncomeFigures, LandFigures, PropertyKind};

fn bench_income(c: &mut Criterion) {
    let figures = Figures::Income(IncomeFigures::new(dec!(2_500_000), dec!(18_500), dec!(75_000)));
    c.bench_function("income_underwrite", |b| {
        b.iter(|| compute_metrics(PropertyKind::Multifamily, black_box(&figures)))
    });
}

fn bench_flip(c: &mut Criterion) {
    let figures = Figures::Flip(FlipFigures::new(dec!(285_000), dec!(65_000), dec!(450_000)));
    c.bench_function("flip_underwrite", |b| {
        b.iter(|| compute_metrics(PropertyKind::ResidentialFlip, black_box(&figures)))
    });
}

fn bench_land(c: &mut Criterion) {
    let figures = Figures::Land(LandFigures::new(dec!(550_000), dec!(5.5), dec!(950_000)));
    c.bench_function("land_underwrite", |b| {
        b.iter(|| compute_metrics(PropertyKind::VacantLand, black_box(&figures)))
    });
}

fn bench_display_record(c: &mut Criterion) {
    let figures = Figures::Income(IncomeFigures::new(dec!(2_500_000), dec!(18_500), dec!(75_000)));
    let metrics = compute_metrics(PropertyKind::Multifamily, &figures).unwrap();
    c.bench_function("income_display_record", |b| {
        b.iter(|| display_record(black_box(&metrics)))
    });
}

criterion_group!(
    benches,
    bench_income,
    bench_flip,
    bench_land,
    bench_display_record
);
criterion_main!(benches);
