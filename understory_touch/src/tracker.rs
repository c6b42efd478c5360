// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer bookkeeping for one-finger pans and two-finger pinches.
//!
//! ## Usage
//!
//! 1) Forward every [`PointerEvent`] to [`TouchTracker::on_event`].
//! 2) Interpret the returned [`TouchUpdate`]: pan deltas, pinch samples and
//!    gesture boundaries.
//! 3) Query [`TouchTracker::phase`] at any time to know whether a gesture is
//!    in progress.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use understory_touch::{GesturePhase, PointerEvent, TouchTracker, TouchUpdate};
//!
//! let mut touch = TouchTracker::default();
//!
//! touch.on_event(&PointerEvent::down(1, Point::new(10.0, 10.0)));
//! assert_eq!(touch.phase(), GesturePhase::Panning);
//!
//! let update = touch.on_event(&PointerEvent::moved(1, Point::new(15.0, 12.0)));
//! assert_eq!(update, TouchUpdate::Pan { delta: Vec2::new(5.0, 2.0) });
//!
//! let update = touch.on_event(&PointerEvent::up(1, Point::new(15.0, 12.0)));
//! assert_eq!(update, TouchUpdate::Ended);
//! assert_eq!(touch.phase(), GesturePhase::Idle);
//! ```

use kurbo::{Point, Vec2};
use smallvec::SmallVec;

use crate::event::{PointerEvent, PointerId, PointerPhase};

/// Largest number of pointers a [`TouchTracker`] will follow at once.
pub const MAX_TOUCH_POINTS: usize = 2;

/// Which gesture the tracked pointers currently form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum GesturePhase {
    /// No pointer is down.
    #[default]
    Idle,
    /// Exactly one pointer is tracked.
    Panning,
    /// Two pointers are tracked.
    Pinching,
}

/// Midpoint and spread of the two pointers of a pinch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchSample {
    /// Point halfway between the two pointers.
    pub midpoint: Point,
    /// Distance between the two pointers.
    pub distance: f64,
}

impl PinchSample {
    /// Builds a sample from two pointer positions.
    #[must_use]
    pub fn between(a: Point, b: Point) -> Self {
        Self {
            midpoint: a.midpoint(b),
            distance: a.distance(b),
        }
    }
}

/// What a single [`PointerEvent`] meant for the gesture in progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TouchUpdate {
    /// The event did not match the tracked state and was dropped.
    Ignored,
    /// The first pointer touched down; a pan starts at `position`.
    PanBegan {
        /// Where the pointer touched down.
        position: Point,
    },
    /// The sole tracked pointer moved by `delta` since the previous sample.
    Pan {
        /// Movement since the last sample of this pointer.
        delta: Vec2,
    },
    /// A second pointer touched down; `sample` is the pinch baseline.
    PinchBegan {
        /// Midpoint and distance at the moment the pinch started.
        sample: PinchSample,
    },
    /// One of the two pinch pointers moved.
    Pinch {
        /// Midpoint and distance after the move.
        sample: PinchSample,
    },
    /// One pinch pointer lifted; panning continues from `position`, the
    /// remaining pointer's last known coordinate.
    PinchEnded {
        /// Baseline for the pan that follows.
        position: Point,
    },
    /// Every pointer is gone, either lifted or cancelled.
    Ended,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct TrackedPointer {
    id: PointerId,
    position: Point,
}

/// Tracks up to [`MAX_TOUCH_POINTS`] pointers and classifies their movement.
///
/// The tracker never fails: events that do not fit the tracked state (a move
/// for an unknown pointer, a third finger, a duplicate down) are reported as
/// [`TouchUpdate::Ignored`].
#[derive(Clone, Debug)]
pub struct TouchTracker {
    max_pointers: usize,
    pointers: SmallVec<[TrackedPointer; MAX_TOUCH_POINTS]>,
}

impl Default for TouchTracker {
    fn default() -> Self {
        Self::new(MAX_TOUCH_POINTS)
    }
}

impl TouchTracker {
    /// Creates a tracker following at most `max_pointers` pointers.
    ///
    /// The value is clamped to `1..=MAX_TOUCH_POINTS`; with a maximum of one,
    /// pinches are never reported.
    #[must_use]
    pub fn new(max_pointers: usize) -> Self {
        Self {
            max_pointers: max_pointers.clamp(1, MAX_TOUCH_POINTS),
            pointers: SmallVec::new(),
        }
    }

    /// Returns the configured pointer limit.
    #[must_use]
    pub fn max_pointers(&self) -> usize {
        self.max_pointers
    }

    /// Returns the number of pointers currently tracked.
    #[must_use]
    pub fn pointer_count(&self) -> usize {
        self.pointers.len()
    }

    /// Returns the current gesture phase.
    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        match self.pointers.len() {
            0 => GesturePhase::Idle,
            1 => GesturePhase::Panning,
            _ => GesturePhase::Pinching,
        }
    }

    /// Returns `true` while at least one pointer is down.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.pointers.is_empty()
    }

    /// Returns the last known position of a tracked pointer.
    #[must_use]
    pub fn position_of(&self, id: PointerId) -> Option<Point> {
        self.pointers
            .iter()
            .find(|p| p.id == id)
            .map(|p| p.position)
    }

    /// Returns the current pinch sample while two pointers are tracked.
    #[must_use]
    pub fn pinch_sample(&self) -> Option<PinchSample> {
        match self.pointers.as_slice() {
            [a, b, ..] => Some(PinchSample::between(a.position, b.position)),
            _ => None,
        }
    }

    /// Drops every tracked pointer without reporting an update.
    pub fn reset(&mut self) {
        self.pointers.clear();
    }

    /// Feeds one pointer event and returns what it meant.
    ///
    /// Downs and moves with a non-finite position are ignored.
    pub fn on_event(&mut self, event: &PointerEvent) -> TouchUpdate {
        match event.phase {
            PointerPhase::Down | PointerPhase::Move if !event.position.is_finite() => {
                TouchUpdate::Ignored
            }
            PointerPhase::Down => self.on_down(event.id, event.position),
            PointerPhase::Move => self.on_move(event.id, event.position),
            PointerPhase::Up => self.on_up(event.id),
            PointerPhase::Cancel => self.on_cancel(),
        }
    }

    fn index_of(&self, id: PointerId) -> Option<usize> {
        self.pointers.iter().position(|p| p.id == id)
    }

    fn on_down(&mut self, id: PointerId, position: Point) -> TouchUpdate {
        if self.index_of(id).is_some() || self.pointers.len() >= self.max_pointers {
            return TouchUpdate::Ignored;
        }
        self.pointers.push(TrackedPointer { id, position });
        match self.pinch_sample() {
            Some(sample) => TouchUpdate::PinchBegan { sample },
            None => TouchUpdate::PanBegan { position },
        }
    }

    fn on_move(&mut self, id: PointerId, position: Point) -> TouchUpdate {
        let Some(index) = self.index_of(id) else {
            return TouchUpdate::Ignored;
        };
        let last = core::mem::replace(&mut self.pointers[index].position, position);
        match self.pinch_sample() {
            Some(sample) => TouchUpdate::Pinch { sample },
            None => TouchUpdate::Pan {
                delta: position - last,
            },
        }
    }

    fn on_up(&mut self, id: PointerId) -> TouchUpdate {
        let Some(index) = self.index_of(id) else {
            return TouchUpdate::Ignored;
        };
        self.pointers.remove(index);
        match self.pointers.first() {
            Some(remaining) => TouchUpdate::PinchEnded {
                position: remaining.position,
            },
            None => TouchUpdate::Ended,
        }
    }

    fn on_cancel(&mut self) -> TouchUpdate {
        if self.pointers.is_empty() {
            return TouchUpdate::Ignored;
        }
        self.pointers.clear();
        TouchUpdate::Ended
    }
}
