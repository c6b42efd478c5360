// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `understory_touch` + `understory_crop`.
//!
//! Pointer streams are synthesized deterministically so runs are comparable.
//! Each stream is a mix of one-finger drags and two-finger pinches, ending
//! every gesture with a release so the snap-back path is measured too.

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};
use understory_crop::{CropConfig, TransformController, compute_viewport};
use understory_touch::{PointerEvent, TouchTracker};

const CONTAINER: Size = Size::new(1080.0, 1920.0);
const IMAGE: Size = Size::new(4032.0, 3024.0);

/// Builds `gestures` alternating drags and pinches, `steps` moves each.
fn gesture_stream(gestures: usize, steps: usize) -> Vec<PointerEvent> {
    let mut events = Vec::with_capacity(gestures * (steps + 4));
    let center = Point::new(CONTAINER.width * 0.5, CONTAINER.height * 0.5);
    for g in 0..gestures {
        let t = g as f64;
        if g % 2 == 0 {
            let start = Point::new(center.x + (t * 37.0) % 200.0, center.y - (t * 53.0) % 300.0);
            events.push(PointerEvent::down(1, start));
            for s in 0..steps {
                let d = s as f64 * 4.0;
                events.push(PointerEvent::moved(1, Point::new(start.x + d, start.y + d * 0.5)));
            }
            events.push(PointerEvent::up(1, start));
        } else {
            let a = Point::new(center.x - 100.0, center.y);
            let b = Point::new(center.x + 100.0, center.y);
            events.push(PointerEvent::down(1, a));
            events.push(PointerEvent::down(2, b));
            for s in 0..steps {
                let d = s as f64 * 3.0;
                events.push(PointerEvent::moved(1, Point::new(a.x - d, a.y - d)));
                events.push(PointerEvent::moved(2, Point::new(b.x + d, b.y + d)));
            }
            events.push(PointerEvent::up(2, b));
            events.push(PointerEvent::up(1, a));
        }
    }
    events
}

fn bench_gestures(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture");
    for &gestures in &[16_usize, 256] {
        let events = gesture_stream(gestures, 32);

        group.bench_with_input(
            BenchmarkId::new("tracker_only", gestures),
            &events,
            |b, events| {
                b.iter_batched(
                    TouchTracker::default,
                    |mut touch| {
                        for event in events {
                            black_box(touch.on_event(event));
                        }
                        touch
                    },
                    BatchSize::SmallInput,
                );
            },
        );

        for snapping in [true, false] {
            let name = if snapping {
                "controller_snapping"
            } else {
                "controller_live_clamp"
            };
            group.bench_with_input(BenchmarkId::new(name, gestures), &events, |b, events| {
                b.iter_batched(
                    || {
                        let mut crop = TransformController::with_config(CropConfig {
                            aspect_ratio: 1.0,
                            overlay_padding: 24.0,
                            snapping_enabled: snapping,
                            ..CropConfig::default()
                        })
                        .unwrap();
                        crop.reset(IMAGE, CONTAINER);
                        crop
                    },
                    |mut crop| {
                        for event in events {
                            black_box(crop.on_pointer_event(event));
                        }
                        black_box(crop.materialize());
                        crop
                    },
                    BatchSize::SmallInput,
                );
            });
        }
    }
    group.finish();
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout");
    let containers: Vec<Size> = (1..=64)
        .map(|i| Size::new(100.0 + f64::from(i) * 17.0, 100.0 + f64::from(i) * 29.0))
        .collect();

    group.bench_function("compute_viewport", |b| {
        b.iter(|| {
            for &container in &containers {
                for ratio in [0.0, 1.0, 4.0 / 3.0, 16.0 / 9.0] {
                    black_box(compute_viewport(black_box(container), ratio, 16.0));
                }
            }
        });
    });

    group.bench_function("reset", |b| {
        let mut crop = TransformController::new();
        b.iter(|| {
            for &container in &containers {
                crop.reset(IMAGE, container);
                black_box(crop.scale());
            }
        });
    });
    group.finish();
}

criterion_group!(benches, bench_gestures, bench_layout);
criterion_main!(benches);
