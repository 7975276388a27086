use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, black_box};
use tick_core::{AxisKind, FixedLocator, LinearLocator, LogLocator, SpacedLocator};

fn bench_linear(c: &mut Criterion) {
    let mut group = c.benchmark_group("linear");
    for &count in &[10usize, 100, 1_000] {
        let l = LinearLocator::new(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &l, |b, l| {
            b.iter(|| black_box(l.locations(0.0, 1_000.0, AxisKind::Major)));
        });
    }
    group.finish();
}

fn bench_spaced(c: &mut Criterion) {
    let mut group = c.benchmark_group("spaced");
    for &span in &[100.0f64, 10_000.0] {
        let l = SpacedLocator::new(0.5, Some(span / 3.0));
        group.bench_with_input(BenchmarkId::from_parameter(format!("span{span}")), &l, |b, l| {
            b.iter(|| black_box(l.locations(0.0, span, AxisKind::Major)));
        });
    }
    group.finish();
}

fn bench_log(c: &mut Criterion) {
    let l = LogLocator::new(10.0, vec![1.0, 2.0, 5.0]);
    c.bench_function("log_30_decades", |b| {
        b.iter(|| black_box(l.locations(1e-15, 1e15, AxisKind::Major)));
    });
}

fn bench_fixed_subsample(c: &mut Criterion) {
    let positions: Vec<f64> = (0..100_000).map(f64::from).collect();
    let l = FixedLocator::new(positions, Some(50));
    c.bench_function("fixed_subsample_100k_to_50", |b| {
        b.iter(|| black_box(l.locations(0.0, 0.0, AxisKind::Major)));
    });
}

criterion_group!(benches, bench_linear, bench_spaced, bench_log, bench_fixed_subsample);
criterion_main!(benches);
