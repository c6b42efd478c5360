// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Abstract pointer events fed into a [`TouchTracker`](crate::TouchTracker).

use kurbo::Point;

/// Host-assigned identifier of a single touch pointer.
///
/// Identifiers only need to be stable for the lifetime of one contact; hosts
/// commonly reuse them once a pointer has been lifted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointerId(pub u64);

/// Lifecycle phase carried by a [`PointerEvent`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerPhase {
    /// The pointer touched down.
    Down,
    /// The pointer moved while down.
    Move,
    /// The pointer lifted.
    Up,
    /// The host aborted the gesture (for example, a parent took over the
    /// touch stream). Cancels every tracked pointer, not only this one.
    Cancel,
}

/// A single touch sample in container pixel space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    /// Which pointer this sample belongs to.
    pub id: PointerId,
    /// Pointer position in container coordinates.
    pub position: Point,
    /// What happened to the pointer.
    pub phase: PointerPhase,
}

impl PointerEvent {
    /// Creates an event from raw parts.
    #[must_use]
    pub fn new(id: u64, position: Point, phase: PointerPhase) -> Self {
        Self {
            id: PointerId(id),
            position,
            phase,
        }
    }

    /// Shorthand for a [`PointerPhase::Down`] event.
    #[must_use]
    pub fn down(id: u64, position: Point) -> Self {
        Self::new(id, position, PointerPhase::Down)
    }

    /// Shorthand for a [`PointerPhase::Move`] event.
    #[must_use]
    pub fn moved(id: u64, position: Point) -> Self {
        Self::new(id, position, PointerPhase::Move)
    }

    /// Shorthand for a [`PointerPhase::Up`] event.
    #[must_use]
    pub fn up(id: u64, position: Point) -> Self {
        Self::new(id, position, PointerPhase::Up)
    }

    /// Shorthand for a [`PointerPhase::Cancel`] event.
    #[must_use]
    pub fn cancel(id: u64, position: Point) -> Self {
        Self::new(id, position, PointerPhase::Cancel)
    }
}
