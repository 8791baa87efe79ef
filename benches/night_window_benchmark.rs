use chrono::{TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use nightshift::models::{EquatorialCoordinate, GeoLocation, SamplingStep};
use nightshift::services::{compute_night_bounds, compute_night_window};

fn bench_night_window(c: &mut Criterion) {
    let mut group = c.benchmark_group("night_window");

    let location = GeoLocation::new(48.86, 2.35);
    let orion = EquatorialCoordinate::new(5.59, -5.39);
    let base_date = Utc.with_ymd_and_hms(2026, 1, 15, 0, 0, 0).unwrap();

    group.bench_function("fine_step_sweep", |b| {
        b.iter(|| {
            black_box(compute_night_window(
                black_box(&location),
                black_box(orion),
                black_box(base_date),
                SamplingStep::Fine,
            ));
        });
    });

    group.bench_function("coarse_step_sweep", |b| {
        b.iter(|| {
            black_box(compute_night_window(
                black_box(&location),
                black_box(orion),
                black_box(base_date),
                SamplingStep::Coarse,
            ));
        });
    });

    group.finish();
}

fn bench_night_bounds(c: &mut Criterion) {
    let mut group = c.benchmark_group("night_bounds");

    let location = GeoLocation::new(48.86, 2.35);
    let base_date = Utc.with_ymd_and_hms(2026, 1, 15, 0, 0, 0).unwrap();

    group.bench_function("dusk_dawn_sweep", |b| {
        b.iter(|| {
            black_box(compute_night_bounds(black_box(&location), black_box(base_date)));
        });
    });

    group.finish();
}

criterion_group!(benches, bench_night_window, bench_night_bounds);
criterion_main!(benches);
