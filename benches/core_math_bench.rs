use chart_geom::api::{
    AxisSpec, AxisSpecs, AxisTicksDimensions, AxisTicksDimensionsMap, ChartTheme,
    compute_chart_dimensions,
};
use chart_geom::core::{BandScale, Dimensions, DomainValue, LinearScale, Point, Position, Rotation};
use chart_geom::interaction::{
    get_cursor_band_position, get_cursor_line_position, get_snap_position,
};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_snap_position(c: &mut Criterion) {
    let scale = BandScale::new((0..1_000).map(|i| format!("c{i}")))
        .expect("valid scale")
        .with_range(0.0, 1_920.0)
        .expect("valid range")
        .with_bars_padding(0.2)
        .expect("valid padding");
    let value = DomainValue::from("c731");

    c.bench_function("snap_position_band_scale_1k", |b| {
        b.iter(|| {
            let _ = get_snap_position(black_box(&value), &scale, black_box(3));
        })
    });
}

fn bench_cursor_band_10k(c: &mut Criterion) {
    let chart = Dimensions::new(0.0, 0.0, 1_920.0, 1_080.0);
    let scale = LinearScale::new(0.0, 10_000.0)
        .expect("valid scale")
        .with_range(0.0, 1_920.0)
        .expect("valid range")
        .with_bandwidth(1_920.0 / 10_000.0, 0.1)
        .expect("valid bandwidth")
        .with_min_interval(1.0)
        .expect("valid interval");
    let data: Vec<DomainValue> = (0..10_000).map(|i| DomainValue::from(f64::from(i))).collect();

    c.bench_function("cursor_band_linear_scale_10k", |b| {
        b.iter(|| {
            for rotation in Rotation::ALL {
                let _ = get_cursor_band_position(
                    rotation,
                    chart,
                    black_box(Point::new(734.5, 321.0)),
                    true,
                    &scale,
                    black_box(&data),
                    1,
                );
            }
        })
    });
}

fn bench_cursor_line(c: &mut Criterion) {
    let chart = Dimensions::new(12.0, 40.0, 1_880.0, 1_020.0);

    c.bench_function("cursor_line_position", |b| {
        b.iter(|| {
            let _ = get_cursor_line_position(
                black_box(Rotation::R90),
                chart,
                black_box(Point::new(400.0, 300.0)),
            );
        })
    });
}

fn bench_chart_dimensions(c: &mut Criterion) {
    let theme = ChartTheme::default();
    let mut specs = AxisSpecs::new();
    let mut ticks = AxisTicksDimensionsMap::new();
    for (id, position) in [
        ("left", Position::Left),
        ("right", Position::Right),
        ("top", Position::Top),
        ("bottom", Position::Bottom),
    ] {
        let spec = AxisSpec::new(id, "main", position).with_title(id);
        ticks.insert(spec.id.clone(), AxisTicksDimensions::from_label_size(48.0, 14.0));
        specs.insert(spec.id.clone(), spec);
    }

    c.bench_function("chart_dimensions_four_axes", |b| {
        b.iter(|| {
            let _ = compute_chart_dimensions(
                black_box(Dimensions::from_size(1_920.0, 1_080.0)),
                &theme,
                &ticks,
                &specs,
                true,
                Some(Position::Right),
            );
        })
    });
}

criterion_group!(
    benches,
    bench_snap_position,
    bench_cursor_band_10k,
    bench_cursor_line,
    bench_chart_dimensions
);
criterion_main!(benches);
