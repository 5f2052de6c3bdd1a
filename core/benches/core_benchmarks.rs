use criterion::{Criterion, black_box, criterion_group, criterion_main};

use brickwork_core::{CollisionGeometry, TileLayer, merge_rects, scan_unit_rects};

/// Platformer-like layer: solid floor, a few floating ledges and pillars.
fn level_layer(width: u32, height: u32) -> TileLayer {
    let mut layer = TileLayer::empty("collision", width, height, 16.0, 16.0).unwrap();
    for x in 0..width {
        layer.set_tile(x, 0, 1);
        layer.set_tile(x, 1, 1);
    }
    for ledge in 0..(width / 12) {
        let y = 4 + (ledge * 5) % (height - 6);
        for x in (ledge * 12)..(ledge * 12 + 7).min(width) {
            layer.set_tile(x, y, 1);
        }
    }
    for pillar in (5..width).step_by(20) {
        for y in 2..(height / 2) {
            layer.set_tile(pillar, y, 1);
            layer.set_tile(pillar + 1, y, 1);
        }
    }
    layer
}

// ---------------------------------------------------------------------------
// Scan + merge
// ---------------------------------------------------------------------------

fn bench_scan_small(c: &mut Criterion) {
    let layer = level_layer(64, 32);
    c.bench_function("scan_unit_rects_64x32", |b| {
        b.iter(|| scan_unit_rects(black_box(&layer)));
    });
}

fn bench_merge_small(c: &mut Criterion) {
    let units = scan_unit_rects(&level_layer(64, 32));
    c.bench_function("merge_rects_64x32", |b| {
        b.iter(|| merge_rects(black_box(&units)));
    });
}

fn bench_geometry_large(c: &mut Criterion) {
    let layer = level_layer(256, 64);
    c.bench_function("collision_geometry_256x64", |b| {
        b.iter(|| CollisionGeometry::from_grid(black_box(&layer)));
    });
}

criterion_group!(
    benches,
    bench_scan_small,
    bench_merge_small,
    bench_geometry_large
);
criterion_main!(benches);
