//! Benchmarks for PNG encoding.
//!
//! Run with: cargo bench --package renderer --bench png_benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use renderer::grid_to_luma;
use renderer::png::{create_png_gray, create_png_rgb};
use test_utils::random_grid;

fn bench_png_encoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("png_encoding");

    for side in [64usize, 256, 512] {
        let gray = grid_to_luma(&random_grid(side, side, 3));
        let rgb: Vec<u8> = gray.iter().flat_map(|&v| [v, v / 2, 255 - v]).collect();

        group.throughput(Throughput::Elements((side * side) as u64));
        group.bench_with_input(BenchmarkId::new("gray", side), &gray, |b, pixels| {
            b.iter(|| create_png_gray(black_box(pixels), side, side));
        });
        group.bench_with_input(BenchmarkId::new("rgb", side), &rgb, |b, pixels| {
            b.iter(|| create_png_rgb(black_box(pixels), side, side));
        });
    }

    group.finish();
}

fn bench_grid_to_luma(c: &mut Criterion) {
    let grid = random_grid(512, 512, 1);
    c.bench_function("grid_to_luma_512", |b| b.iter(|| grid_to_luma(black_box(&grid))));
}

criterion_group!(benches, bench_png_encoding, bench_grid_to_luma);
criterion_main!(benches);
