use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec2;
use map_drag_measure::app::{EventTarget, MapEvent, Modifiers, PointerEvent};
use map_drag_measure::core::{bearing, distance_meters};
use map_drag_measure::ui::ViewportSurface;
use map_drag_measure::{GeoPoint, MapOptions, MapView};
use std::hint::black_box;

fn build_point_pairs(count: usize) -> Vec<(GeoPoint, GeoPoint)> {
    (0..count)
        .map(|i| {
            let lat = ((i * 37) % 170) as f64 - 85.0;
            let lng = ((i * 53) % 360) as f64 - 180.0;
            (
                GeoPoint::new(lat, lng),
                GeoPoint::new(-lat * 0.5, lng + 12.5),
            )
        })
        .collect()
}

fn bench_geodesy(c: &mut Criterion) {
    let mut group = c.benchmark_group("geodesy");

    for count in [1_000usize, 10_000] {
        let pairs = build_point_pairs(count);

        group.bench_with_input(BenchmarkId::new("bearing", count), &pairs, |b, pairs| {
            b.iter(|| {
                pairs
                    .iter()
                    .map(|(from, to)| bearing(black_box(*from), black_box(*to)))
                    .sum::<f64>()
            })
        });

        group.bench_with_input(BenchmarkId::new("haversine", count), &pairs, |b, pairs| {
            b.iter(|| {
                pairs
                    .iter()
                    .map(|(from, to)| distance_meters(black_box(*from), black_box(*to)))
                    .sum::<f64>()
            })
        });
    }

    group.finish();
}

fn bench_drag_session(c: &mut Criterion) {
    c.bench_function("drag_session_100_moves", |b| {
        b.iter(|| {
            let mut map = MapView::new(
                ViewportSurface::new(Vec2::new(720.0, 720.0)),
                MapOptions::default(),
            );
            map.dispatch(
                MapEvent::MouseDown(PointerEvent::primary(Vec2::new(360.0, 360.0), Modifiers::CTRL)),
                EventTarget::Container,
            );
            for step in 0..100 {
                let pos = Vec2::new(360.0 + step as f32, 360.0 - step as f32 * 0.5);
                map.dispatch(MapEvent::MouseMove(PointerEvent::motion(pos)), EventTarget::Container);
            }
            map.dispatch(
                MapEvent::MouseUp(PointerEvent::primary(Vec2::new(460.0, 310.0), Modifiers::NONE)),
                EventTarget::Container,
            );
            black_box(map.tick())
        })
    });
}

criterion_group!(geo_benches, bench_geodesy, bench_drag_session);
criterion_main!(geo_benches);
