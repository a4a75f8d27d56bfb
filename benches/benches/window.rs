// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use loupe_carousel::compute_window;

fn bench_compute_window(c: &mut Criterion) {
    let mut group = c.benchmark_group("carousel/compute_window");

    for preload in [0usize, 2, 10] {
        for looping in [false, true] {
            let id = format!("preload={preload}/looping={looping}");
            group.bench_with_input(BenchmarkId::new(id, 1_000), &preload, |b, &preload| {
                let mut index = 0;
                b.iter(|| {
                    index = (index + 1) % 1_000;
                    black_box(compute_window(Some(index), 1_000, preload, looping))
                });
            });
        }
    }

    group.finish();
}

fn bench_navigation_diff(c: &mut Criterion) {
    c.bench_function("carousel/diff_on_step", |b| {
        let mut index = 0;
        let mut previous = compute_window(Some(index), 500, 2, true);
        b.iter(|| {
            index = (index + 1) % 500;
            let next = compute_window(Some(index), 500, 2, true);
            black_box(next.diff(&previous));
            previous = next;
        });
    });
}

criterion_group!(benches, bench_compute_window, bench_navigation_diff);
criterion_main!(benches);
