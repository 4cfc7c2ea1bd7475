// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Au-Zone Technologies. All Rights Reserved.

use criterion::{criterion_group, criterion_main, Criterion};
use edgefirst_assetgen::{
    emit::{render, ColorFormat},
    transcode::Pixmap,
};

pub fn benchmark_pipeline(c: &mut Criterion) {
    let dims = [(32, 32), (128, 128), (320, 240), (640, 480)];

    let mut group = c.benchmark_group("transcode");
    for (w, h) in dims {
        let rgba = vec![0x7fu8; (w * h * 4) as usize];
        group.bench_with_input(format!("{}x{}", w, h), &rgba, |b, rgba| {
            b.iter(|| Pixmap::from_rgba(w, h, rgba))
        });
    }
    group.finish();

    let mut group = c.benchmark_group("render");
    for (w, h) in dims {
        let rgba = vec![0x7fu8; (w * h * 4) as usize];
        let pixmap = Pixmap::from_rgba(w, h, &rgba);
        group.bench_with_input(format!("{}x{}", w, h), &pixmap, |b, pixmap| {
            b.iter(|| render("img_bench", "img_bench", ColorFormat::Argb8888, pixmap))
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark_pipeline);
criterion_main!(benches);
