// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect};
use understory_color::{Color, ColorChannel, ColorSpace};
use understory_color_area::{ColorAreaOptions, ColorAreaState, normalized_point};

const AREA: Rect = Rect::new(0.0, 0.0, 256.0, 256.0);

/// A diagonal-ish pointer path across the area, `n` samples long.
fn drag_path(n: usize) -> Vec<Point> {
    (0..n)
        .map(|i| {
            let t = i as f64 / n as f64;
            Point::new(t * 300.0 - 20.0, (t * 7.0).sin() * 140.0 + 128.0)
        })
        .collect()
}

fn bench_drag(c: &mut Criterion) {
    let mut group = c.benchmark_group("understory_color_area");
    let path = drag_path(1_024);

    let setups = [
        ("rgb_default", ColorAreaOptions::default()),
        (
            "hsb_sat_brightness",
            ColorAreaOptions::default()
                .with_value(Color::hsb(200.0, 50.0, 50.0))
                .with_color_space(ColorSpace::Hsb),
        ),
        (
            "rgb_value_hue_axes",
            ColorAreaOptions::default().with_channels(
                Some(ColorChannel::Hue),
                Some(ColorChannel::Saturation),
            ),
        ),
    ];

    for (name, options) in setups {
        group.bench_function(format!("drag({name})"), |b| {
            b.iter(|| {
                let mut state = ColorAreaState::new(options.clone());
                state.set_dragging(true);
                for &p in &path {
                    state.set_color_from_point(normalized_point(AREA, p));
                }
                state.set_dragging(false);
                black_box(state.thumb_position())
            });
        });
    }

    group.bench_function("keyboard_sweep", |b| {
        b.iter(|| {
            let mut state = ColorAreaState::default();
            for _ in 0..255 {
                state.increment_x(1.0);
                state.increment_y(1.0);
            }
            black_box(state.display_color())
        });
    });

    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("understory_color");
    let inputs = [
        "#ff8800",
        "rgb(12, 34, 56)",
        "hsl(210, 40%, 60%)",
        "hsba(210, 40%, 60%, 0.5)",
        "rebeccapurple",
    ];
    group.bench_function("parse_mixed", |b| {
        b.iter(|| {
            for input in inputs {
                let _ = black_box(Color::parse(black_box(input)));
            }
        });
    });
    group.bench_function("convert_rgb_hsb_hsl", |b| {
        let color = Color::rgb(12.0, 200.0, 97.0);
        b.iter(|| {
            let hsb = black_box(color).to_space(ColorSpace::Hsb);
            black_box(hsb.to_space(ColorSpace::Hsl).to_space(ColorSpace::Rgb))
        });
    });
    group.finish();
}

criterion_group!(benches, bench_drag, bench_parse);
criterion_main!(benches);
