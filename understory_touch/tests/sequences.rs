// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `understory_touch` crate.
//!
//! These replay realistic (and deliberately messy) event streams through a
//! `TouchTracker` and check the phase transitions and reported updates.

use kurbo::{Point, Vec2};
use understory_touch::{GesturePhase, PinchSample, PointerEvent, PointerId, TouchTracker, TouchUpdate};

#[test]
fn pan_pinch_pan_idle_round_trip() {
    let mut touch = TouchTracker::default();
    let mut phases = [GesturePhase::Idle; 6];

    touch.on_event(&PointerEvent::down(10, Point::new(100.0, 100.0)));
    phases[0] = touch.phase();
    touch.on_event(&PointerEvent::moved(10, Point::new(110.0, 100.0)));
    phases[1] = touch.phase();
    touch.on_event(&PointerEvent::down(11, Point::new(210.0, 100.0)));
    phases[2] = touch.phase();
    touch.on_event(&PointerEvent::moved(11, Point::new(310.0, 100.0)));
    phases[3] = touch.phase();
    touch.on_event(&PointerEvent::up(10, Point::new(110.0, 100.0)));
    phases[4] = touch.phase();
    touch.on_event(&PointerEvent::up(11, Point::new(310.0, 100.0)));
    phases[5] = touch.phase();

    assert_eq!(
        phases,
        [
            GesturePhase::Panning,
            GesturePhase::Panning,
            GesturePhase::Pinching,
            GesturePhase::Pinching,
            GesturePhase::Panning,
            GesturePhase::Idle,
        ]
    );
}

#[test]
fn pinch_samples_track_either_pointer() {
    let mut touch = TouchTracker::default();
    touch.on_event(&PointerEvent::down(1, Point::new(0.0, 0.0)));
    touch.on_event(&PointerEvent::down(2, Point::new(0.0, 100.0)));

    let update = touch.on_event(&PointerEvent::moved(1, Point::new(0.0, -100.0)));
    assert_eq!(
        update,
        TouchUpdate::Pinch {
            sample: PinchSample {
                midpoint: Point::new(0.0, 0.0),
                distance: 200.0,
            }
        }
    );
    assert_eq!(
        touch.pinch_sample(),
        Some(PinchSample::between(
            Point::new(0.0, -100.0),
            Point::new(0.0, 100.0)
        ))
    );
}

#[test]
fn first_finger_lift_hands_pan_to_second() {
    let mut touch = TouchTracker::default();
    touch.on_event(&PointerEvent::down(1, Point::new(0.0, 0.0)));
    touch.on_event(&PointerEvent::down(2, Point::new(50.0, 50.0)));
    touch.on_event(&PointerEvent::up(1, Point::new(0.0, 0.0)));

    assert_eq!(touch.position_of(PointerId(1)), None);
    assert_eq!(touch.position_of(PointerId(2)), Some(Point::new(50.0, 50.0)));

    // A new finger can start another pinch.
    let update = touch.on_event(&PointerEvent::down(3, Point::new(50.0, 150.0)));
    assert!(matches!(update, TouchUpdate::PinchBegan { .. }));

    let update = touch.on_event(&PointerEvent::up(3, Point::new(50.0, 150.0)));
    assert_eq!(
        update,
        TouchUpdate::PinchEnded {
            position: Point::new(50.0, 50.0)
        }
    );
    let update = touch.on_event(&PointerEvent::moved(2, Point::new(40.0, 45.0)));
    assert_eq!(
        update,
        TouchUpdate::Pan {
            delta: Vec2::new(-10.0, -5.0)
        }
    );
}

#[test]
fn noisy_stream_never_panics_and_ends_idle() {
    let mut touch = TouchTracker::default();
    let p = Point::new(1.0, 2.0);
    let stream = [
        PointerEvent::moved(5, p),
        PointerEvent::up(5, p),
        PointerEvent::down(1, p),
        PointerEvent::down(1, p),
        PointerEvent::down(2, p),
        PointerEvent::down(3, p),
        PointerEvent::down(4, p),
        PointerEvent::moved(4, p),
        PointerEvent::up(3, p),
        PointerEvent::up(2, p),
        PointerEvent::up(2, p),
        PointerEvent::cancel(9, p),
        PointerEvent::cancel(9, p),
    ];
    let updates = stream.map(|e| touch.on_event(&e));

    assert_eq!(updates[0], TouchUpdate::Ignored);
    assert_eq!(updates[1], TouchUpdate::Ignored);
    assert_eq!(updates[3], TouchUpdate::Ignored);
    assert!(matches!(updates[4], TouchUpdate::PinchBegan { .. }));
    assert_eq!(updates[5], TouchUpdate::Ignored);
    assert_eq!(updates[9], TouchUpdate::PinchEnded { position: p });
    assert_eq!(updates[10], TouchUpdate::Ignored);
    assert_eq!(updates[11], TouchUpdate::Ended);
    assert_eq!(updates[12], TouchUpdate::Ignored);
    assert_eq!(touch.phase(), GesturePhase::Idle);
}
