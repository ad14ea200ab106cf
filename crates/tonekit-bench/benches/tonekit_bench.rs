//! Benchmarks for tonekit operations.
//!
//! Run with: `cargo bench`

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use tonekit_curve::{CurveEval, CurveKind, CurveModel};
use tonekit_lut::FastLookupTable;
use tonekit_ops::{apply_rgb_buffer, par_apply_rgb_buffer, HuePreservingToneMapper, ToneCurve};

fn curve(kind: CurveKind, knots: usize) -> CurveModel {
    let mut raw = vec![f64::from(kind.code())];
    for i in 0..knots {
        let x = i as f64 / (knots - 1) as f64;
        // gentle S shape
        let y = x + 0.05 * (x * std::f64::consts::TAU).sin();
        raw.push(x);
        raw.push(y);
    }
    CurveModel::new(&raw, 1000).unwrap()
}

/// Benchmark curve evaluation (bisection + interpolation).
fn bench_curve_eval(c: &mut Criterion) {
    let mut group = c.benchmark_group("curve_eval");
    let ts: Vec<f64> = (0..10_000).map(|i| i as f64 / 10_000.0).collect();
    group.throughput(Throughput::Elements(ts.len() as u64));

    for knots in [4, 16, 64] {
        let linear = curve(CurveKind::Linear, knots);
        let spline = curve(CurveKind::Spline, knots);

        group.bench_with_input(BenchmarkId::new("linear", knots), &ts, |b, v| {
            b.iter(|| v.iter().map(|&t| linear.eval(black_box(t))).sum::<f64>())
        });
        group.bench_with_input(BenchmarkId::new("spline", knots), &ts, |b, v| {
            b.iter(|| v.iter().map(|&t| spline.eval(black_box(t))).sum::<f64>())
        });
    }

    group.finish();
}

/// Benchmark LUT reads.
fn bench_lut_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("lut_lookup");
    let data: Vec<f32> = (0..65536).map(|i| i as f32).collect();
    let lut = FastLookupTable::from_slice(&data).unwrap();
    let idx: Vec<f32> = (0..10_000).map(|i| i as f32 * 6.5535).collect();
    group.throughput(Throughput::Elements(idx.len() as u64));

    group.bench_function("fractional", |b| {
        b.iter(|| idx.iter().map(|&f| lut.lookup(black_box(f))).sum::<f32>())
    });
    group.bench_function("integer", |b| {
        b.iter(|| idx.iter().map(|&f| lut.get(black_box(f as i32))).sum::<f32>())
    });

    group.finish();
}

/// Benchmark 65536-entry tone LUT construction.
fn bench_tone_build(c: &mut Criterion) {
    let spline = curve(CurveKind::Spline, 8);
    c.bench_function("tone_curve_build", |b| {
        b.iter(|| ToneCurve::build(black_box(&spline), 0.0).unwrap())
    });
}

/// Benchmark hue-preserving mapping over RGB buffers.
fn bench_hue_preserving(c: &mut Criterion) {
    let mut group = c.benchmark_group("hue_preserving");
    let mapper = HuePreservingToneMapper::from_curve(&curve(CurveKind::Spline, 8), 0.0).unwrap();

    for size in [256usize, 1024] {
        let pixels: Vec<f32> = (0..size * size * 3)
            .map(|i| (i.wrapping_mul(2_654_435_761) % 65536) as f32)
            .collect();
        group.throughput(Throughput::Elements((size * size) as u64));

        group.bench_with_input(BenchmarkId::new("serial", size), &pixels, |b, src| {
            b.iter(|| {
                let mut buf = src.clone();
                apply_rgb_buffer(&mapper, &mut buf, 3).unwrap();
                buf
            })
        });
        group.bench_with_input(BenchmarkId::new("parallel", size), &pixels, |b, src| {
            b.iter(|| {
                let mut buf = src.clone();
                par_apply_rgb_buffer(&mapper, &mut buf, 3).unwrap();
                buf
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_curve_eval,
    bench_lut_lookup,
    bench_tone_build,
    bench_hue_preserving,
);
criterion_main!(benches);
