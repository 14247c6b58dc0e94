//! Detection pipeline benchmarks
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use focuspoint::SalientPointDetector;
use image::{Rgb, RgbImage};

/// Dark frame with one bright block, the typical single-subject case
fn synthetic_image(width: u32, height: u32) -> RgbImage {
    let mut image = RgbImage::from_pixel(width, height, Rgb([25, 25, 25]));
    let side = width / 5;
    let x0 = width / 2;
    let y0 = height / 3;
    for y in y0..(y0 + side).min(height) {
        for x in x0..(x0 + side).min(width) {
            image.put_pixel(x, y, Rgb([230, 225, 210]));
        }
    }
    image
}

fn bench_detect(c: &mut Criterion) {
    let detector = SalientPointDetector::new();

    let small = synthetic_image(320, 240);
    c.bench_function("detect_320x240", |b| {
        b.iter(|| detector.detect(black_box(&small)).unwrap())
    });

    let medium = synthetic_image(640, 480);
    c.bench_function("detect_640x480", |b| {
        b.iter(|| detector.detect(black_box(&medium)).unwrap())
    });

    let large = synthetic_image(1280, 960);
    c.bench_function("detect_1280x960", |b| {
        b.iter(|| detector.detect(black_box(&large)).unwrap())
    });
}

criterion_group!(benches, bench_detect);
criterion_main!(benches);
