// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Touch: headless multi-pointer tracking for pan and pinch gestures.
//!
//! This crate turns a raw stream of touch samples into gesture-level updates.
//! It is the input half of a pan/zoom controller and deliberately knows
//! nothing about scales, images or viewports:
//!
//! - [`PointerEvent`] is the abstract event a host forwards: a pointer id, a
//!   position and a [`PointerPhase`] (`Down`, `Move`, `Up`, `Cancel`).
//! - [`TouchTracker`] follows up to [`MAX_TOUCH_POINTS`] pointers and reports
//!   a [`TouchUpdate`] per event: pan deltas, pinch samples (midpoint and
//!   distance) and gesture boundaries.
//! - [`GesturePhase`] summarizes the tracked state: idle, panning or pinching.
//!
//! Hosts do not guarantee well-paired event streams, so the tracker never
//! fails. Moves for unknown pointers, extra fingers and duplicate downs are
//! reported as [`TouchUpdate::Ignored`].
//!
//! ## Pan and pinch
//!
//! ```rust
//! use kurbo::Point;
//! use understory_touch::{GesturePhase, PointerEvent, TouchTracker, TouchUpdate};
//!
//! let mut touch = TouchTracker::default();
//! touch.on_event(&PointerEvent::down(1, Point::new(0.0, 0.0)));
//! touch.on_event(&PointerEvent::down(2, Point::new(100.0, 0.0)));
//! assert_eq!(touch.phase(), GesturePhase::Pinching);
//!
//! // Spreading the fingers doubles the distance.
//! match touch.on_event(&PointerEvent::moved(2, Point::new(200.0, 0.0))) {
//!     TouchUpdate::Pinch { sample } => assert_eq!(sample.distance, 200.0),
//!     other => panic!("unexpected update: {other:?}"),
//! }
//!
//! // Lifting one finger falls back to panning without a jump.
//! touch.on_event(&PointerEvent::up(1, Point::new(0.0, 0.0)));
//! assert_eq!(touch.phase(), GesturePhase::Panning);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod event;
mod tracker;

pub use event::{PointerEvent, PointerId, PointerPhase};
pub use tracker::{GesturePhase, MAX_TOUCH_POINTS, PinchSample, TouchTracker, TouchUpdate};
