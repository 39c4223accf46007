//! Benchmarks for pixfx operations.
//!
//! Run with: `cargo bench`

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

use pixfx_core::PixelBuffer;
use pixfx_ops::{filter, parallel, point, Kernel};
use pixfx_transfer::{gamma, GammaCodec};

/// Deterministic gradient test image.
fn test_image(size: usize) -> PixelBuffer {
    let data = (0..size * size * 3)
        .map(|i| (i % 251) as f32 / 250.0)
        .collect();
    PixelBuffer::from_decoded(data, size, size, 3).expect("valid test image")
}

fn bench_gamma(c: &mut Criterion) {
    let mut group = c.benchmark_group("gamma");

    for size in [1000, 100000].iter() {
        let values: Vec<f32> = (0..*size).map(|i| i as f32 / *size as f32).collect();
        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("eotf_2.2", size), &values, |b, v| {
            b.iter(|| v.iter().map(|&x| gamma::gamma_eotf(black_box(x), 2.2)).collect::<Vec<_>>())
        });
        group.bench_with_input(BenchmarkId::new("oetf_2.2", size), &values, |b, v| {
            b.iter(|| v.iter().map(|&x| gamma::gamma_oetf(black_box(x), 2.2)).collect::<Vec<_>>())
        });
    }

    let img = test_image(256);
    let codec = GammaCodec::default();
    group.bench_function("decode_buffer_256", |b| b.iter(|| codec.decode_buffer(black_box(&img))));

    group.finish();
}

fn bench_point(c: &mut Criterion) {
    let mut group = c.benchmark_group("point");
    let img = test_image(512);
    group.throughput(Throughput::Elements(img.data().len() as u64));

    group.bench_function("brightness_serial", |b| {
        b.iter(|| point::adjust_brightness(black_box(&img), 1.7))
    });
    group.bench_function("brightness_parallel", |b| {
        b.iter(|| parallel::adjust_brightness(black_box(&img), 1.7))
    });
    group.bench_function("contrast_serial", |b| {
        b.iter(|| point::adjust_contrast(black_box(&img), 2.0, 0.5))
    });

    group.finish();
}

fn bench_blur(c: &mut Criterion) {
    let mut group = c.benchmark_group("box_blur");
    group.sample_size(20);
    let img = test_image(256);

    for k in [3usize, 15, 31].iter() {
        group.bench_with_input(BenchmarkId::new("serial", k), k, |b, &k| {
            b.iter(|| filter::box_blur(black_box(&img), k))
        });
        group.bench_with_input(BenchmarkId::new("parallel", k), k, |b, &k| {
            b.iter(|| parallel::box_blur(black_box(&img), k))
        });
    }

    group.finish();
}

fn bench_kernel(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply_kernel");
    group.sample_size(20);
    let img = test_image(256);

    let sobel = Kernel::sobel_x();
    let box7 = Kernel::box_blur(7).expect("odd size");

    group.bench_function("sobel_x_serial", |b| b.iter(|| filter::apply_kernel(black_box(&img), &sobel)));
    group.bench_function("sobel_x_parallel", |b| {
        b.iter(|| parallel::apply_kernel(black_box(&img), &sobel))
    });
    group.bench_function("box7_serial", |b| b.iter(|| filter::apply_kernel(black_box(&img), &box7)));
    group.bench_function("sobel_edges_parallel", |b| b.iter(|| parallel::sobel_edges(black_box(&img))));

    group.finish();
}

criterion_group!(benches, bench_gamma, bench_point, bench_blur, bench_kernel);
criterion_main!(benches);
