// Copyright 2025 the Zoomview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use zoomview_geometry::{Axis, NormalizedPoint, NormalizedRect, ScreenRect, ViewGeometry};
use zoomview_overlay::{OverlayCoordinator, Shape, ShapeProperties};
use zoomview_viewport::ViewportState;

fn grid(len: usize) -> Vec<NormalizedPoint> {
    let side = (len as f64).sqrt().ceil() as usize;
    (0..len)
        .map(|i| {
            let (col, row) = (i % side, i / side);
            NormalizedPoint::new(col as f64 / side as f64, row as f64 / side as f64)
        })
        .collect()
}

fn bench_build_transform(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform/build");
    let area = NormalizedRect::new(0.2, 0.3, 0.4, 0.25);
    let screen = ScreenRect::new(10.0, 20.0, 1280.0, 720.0);

    group.bench_function("plain", |b| {
        b.iter(|| black_box(ViewGeometry::new(black_box(area), screen).image_to_screen()));
    });

    group.bench_function("rotated_mirrored", |b| {
        let mut vp = ViewportState::default();
        vp.set_rotation(30.0);
        vp.set_mirror(Axis::X, true);
        b.iter(|| {
            let geometry = ViewGeometry::new(black_box(area), screen)
                .with_rotation(vp.rotation())
                .with_mirror(vp.mirror());
            black_box(geometry.image_to_screen())
        });
    });

    group.finish();
}

fn bench_project_marks(c: &mut Criterion) {
    let mut group = c.benchmark_group("overlay/project_marks");

    for len in [16usize, 256, 4_096] {
        let mut overlay = OverlayCoordinator::default();
        overlay
            .viewport_mut()
            .set_image_rect(ScreenRect::new(0.0, 0.0, 1280.0, 720.0));
        overlay.viewport_mut().zoom_by(2.0);
        overlay.viewport_mut().set_rotation(90.0);
        overlay.marks_mut().replace(grid(len));
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("marks", len), &overlay, |b, overlay| {
            b.iter(|| black_box(overlay.project_marks()));
        });
    }

    group.finish();
}

fn bench_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("overlay/frame");

    for len in [16usize, 256] {
        let mut overlay = OverlayCoordinator::default();
        overlay
            .viewport_mut()
            .set_image_rect(ScreenRect::new(0.0, 0.0, 1280.0, 720.0));
        overlay
            .birds_eye_mut()
            .set_image_rect(ScreenRect::new(1070.0, 10.0, 200.0, 112.5));
        let points = grid(len * 2);
        for pair in points.chunks_exact(2) {
            let shape = Shape::rectangle(pair[0], pair[1]).with_properties(ShapeProperties {
                editable: true,
                ..ShapeProperties::default()
            });
            overlay.shapes_mut().add(shape);
        }
        overlay.marks_mut().replace(grid(len));
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("shapes_and_marks", len), &overlay, |b, overlay| {
            b.iter(|| black_box(overlay.frame()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_build_transform, bench_project_marks, bench_frame);
criterion_main!(benches);
