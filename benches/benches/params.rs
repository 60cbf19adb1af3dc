// Copyright 2025 the Zoomview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use zoomview_geometry::{MirrorFlags, NormalizedPoint, NormalizedRect};
use zoomview_viewport::{ViewParams, encode_marks, parse_marks};

fn marks(len: usize) -> Vec<NormalizedPoint> {
    (0..len)
        .map(|i| {
            let t = i as f64 / len as f64;
            NormalizedPoint::new(t, 1.0 - t * 0.618_033)
        })
        .collect()
}

fn bench_marks(c: &mut Criterion) {
    let mut group = c.benchmark_group("params/marks");

    for len in [8usize, 128, 1_024] {
        let points = marks(len);
        let encoded = encode_marks(&points);
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("encode", len), &points, |b, points| {
            b.iter(|| black_box(encode_marks(points)));
        });
        group.bench_with_input(BenchmarkId::new("parse", len), &encoded, |b, encoded| {
            b.iter(|| black_box(parse_marks(encoded)));
        });
    }

    group.finish();
}

fn bench_view_params(c: &mut Criterion) {
    let params = ViewParams {
        zoom_area: NormalizedRect::new(0.123_45, 0.2, 0.333_33, 0.25),
        rotation: 90.0,
        mirror: MirrorFlags::HORIZONTAL,
        marks: marks(16),
    };
    let query = params.encode();

    c.bench_function("params/encode", |b| b.iter(|| black_box(params.encode())));
    c.bench_function("params/parse", |b| {
        b.iter(|| black_box(ViewParams::parse(black_box(&query))));
    });
}

criterion_group!(benches, bench_marks, bench_view_params);
criterion_main!(benches);
