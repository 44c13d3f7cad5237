//! Benchmarks for LUT generation.
//!
//! Run with: `cargo bench`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

use cvd_color::{Deficiency, GenerateRequest, LutSize, Operation, build_lut};
use cvd_lut::cube;
use cvd_math::Vec3;

/// Per-color cost of each algorithm.
fn bench_transform(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform");

    let colors: Vec<Vec3> = (0..4096)
        .map(|i| {
            let f = |v: usize| (v as f64 + 0.5) / 16.0;
            Vec3::new(f(i / 256), f((i / 16) % 16), f(i % 16))
        })
        .collect();
    group.throughput(Throughput::Elements(colors.len() as u64));

    for op in Operation::ALL {
        group.bench_with_input(BenchmarkId::new(op.name(), 4096), &colors, |b, colors| {
            b.iter(|| {
                colors
                    .iter()
                    .map(|&rgb| op.apply(black_box(rgb), Deficiency::Deutan, 0.8))
                    .collect::<Vec<_>>()
            })
        });
    }

    group.finish();
}

/// Full grid sampling at each supported size.
fn bench_build_lut(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_lut");
    group.sample_size(20);

    for size in LutSize::ALL {
        let req = GenerateRequest::new(Deficiency::Protan, Operation::Correct).with_size(size);
        group.throughput(Throughput::Elements(size.entries() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &req, |b, req| {
            b.iter(|| build_lut(black_box(req)).unwrap())
        });
    }

    group.finish();
}

/// `.cube` text encoding.
fn bench_write_cube(c: &mut Criterion) {
    let mut group = c.benchmark_group("write_cube");
    group.sample_size(20);

    for size in LutSize::ALL {
        let req = GenerateRequest::new(Deficiency::Tritan, Operation::Daltonize).with_size(size);
        let lut = build_lut(&req).unwrap();
        group.throughput(Throughput::Elements(size.entries() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &lut, |b, lut| {
            b.iter(|| {
                let mut out = Vec::<u8>::with_capacity(lut.entry_count() * 27);
                cube::write_3d_to(&mut out, black_box(lut)).unwrap();
                out
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_transform, bench_build_lut, bench_write_cube);
criterion_main!(benches);
