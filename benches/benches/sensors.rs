// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::{Point, Rect, Vec2};
use loupe_gesture::{Modifiers, PointerInput, Sensors, WheelInput, ZoomView};
use loupe_zoom::ZoomModel;

fn bench_wheel_stream(c: &mut Criterion) {
    let mut group = c.benchmark_group("sensors/wheel_stream");
    let view = ZoomView::unzoomed(8.0);

    // A trackpad delivers an event every frame; the history window keeps up
    // to a few seconds of them.
    for len in [60usize, 180, 600] {
        let events: Vec<WheelInput> = (0..len)
            .map(|i| WheelInput::new(Vec2::new(2.0, 1.0), 16 * i as u64))
            .collect();
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::new("swipe", len), &events, |b, events| {
            b.iter_batched(
                Sensors::default,
                |mut sensors| {
                    for event in events {
                        black_box(sensors.on_wheel(event, view));
                    }
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_pinch(c: &mut Criterion) {
    let mut group = c.benchmark_group("sensors/pinch");
    let steps = 120usize;
    group.throughput(Throughput::Elements(steps as u64));

    group.bench_function("pinch_and_apply", |b| {
        b.iter_batched(
            || {
                let mut model = ZoomModel::default();
                model.set_viewport(Some(Rect::new(0.0, 0.0, 1280.0, 800.0)));
                model.set_content_half_extents(kurbo::Size::new(640.0, 400.0));
                (Sensors::default(), model)
            },
            |(mut sensors, mut model)| {
                sensors.on_pointer_down(&PointerInput::touch(1, Point::new(600.0, 400.0)));
                sensors.on_pointer_down(&PointerInput::touch(2, Point::new(680.0, 400.0)));
                for step in 0..steps {
                    let x = 680.0 + 2.0 * step as f64;
                    let response = sensors.on_pointer_move(
                        &PointerInput::touch(2, Point::new(x, 400.0)),
                        ZoomView::from(model.state()),
                    );
                    for intent in response.intents {
                        if let loupe_gesture::Intent::Zoom { zoom, anchor } = intent {
                            model.change_zoom(zoom, anchor);
                        }
                    }
                }
                black_box(model.state());
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("ctrl_wheel_zoom", |b| {
        let event = WheelInput::new(Vec2::new(0.0, -4.0), 0)
            .with_modifiers(Modifiers::CTRL)
            .with_position(Point::new(300.0, 200.0));
        b.iter_batched(
            Sensors::default,
            |mut sensors| {
                for _ in 0..steps {
                    black_box(sensors.on_wheel(&event, ZoomView::unzoomed(8.0)));
                }
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_wheel_stream, bench_pinch);
criterion_main!(benches);
