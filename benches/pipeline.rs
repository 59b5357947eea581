//! Benchmarks for the pgen pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use image::{GrayImage, Luma, RgbImage};

use pgen::types::{decode, Colour, Rotation};
use pgen::{colourize, compose, rotate};

/// A 256x256 checker tile, roughly half ink.
fn checker_tile(size: u32) -> GrayImage {
    GrayImage::from_fn(size, size, |x, y| {
        if (x / 8 + y / 8) % 2 == 0 {
            Luma([0])
        } else {
            Luma([255])
        }
    })
}

// -- Decoding benchmarks --

fn bench_decoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("decoding");

    group.bench_function("decode", |b| {
        b.iter(|| decode(black_box("0001112223334")).unwrap())
    });

    group.bench_function("decode_invalid", |b| {
        b.iter(|| decode(black_box("12345678901X3")).unwrap_err())
    });

    group.finish();
}

// -- Rendering benchmarks --

fn bench_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("rendering");

    let tile = checker_tile(256);

    group.bench_function("rotate_90", |b| {
        b.iter(|| rotate(black_box(&tile), Rotation::Deg90).into_owned())
    });

    group.bench_function("colourize", |b| {
        b.iter(|| colourize(black_box(&tile), Colour::rgb(0, 0, 255)))
    });

    let tinted: [RgbImage; 4] = std::array::from_fn(|_| colourize(&tile, Colour::rgb(75, 0, 130)));

    group.bench_function("compose_2x2", |b| {
        b.iter(|| compose(black_box(&tinted)).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_decoding, bench_rendering);
criterion_main!(benches);
