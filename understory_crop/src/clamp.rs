// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bounds math shared by every positioning path of the controller.

use kurbo::{Rect, Size, Vec2};

/// How strictly the image position is held against the viewport.
///
/// Both modes work per axis, independently.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ClampMode {
    /// Keep the image overlapping the viewport on each axis.
    ///
    /// The image may leave gaps inside the viewport, but it can never be
    /// dragged completely outside of it. Applied while a gesture runs with
    /// snapping disabled.
    #[default]
    KeepSomeVisible,
    /// Make the image cover the viewport on each axis.
    ///
    /// Where the scaled image is smaller than the viewport, it is centered
    /// on that axis instead. Applied when a gesture ends with snapping
    /// enabled.
    Cover,
}

/// Returns the smallest scale at which `image` covers `viewport`.
///
/// Returns `None` when either size has no area.
#[must_use]
pub fn cover_fit_scale(image: Size, viewport: Size) -> Option<f64> {
    if image.width <= 0.0 || image.height <= 0.0 {
        return None;
    }
    if viewport.width <= 0.0 || viewport.height <= 0.0 {
        return None;
    }
    Some((viewport.width / image.width).max(viewport.height / image.height))
}

/// Returns the position that centers `image`, scaled by `scale`, over `viewport`.
#[must_use]
pub fn centered_position(image: Size, scale: f64, viewport: Rect) -> Vec2 {
    let scaled = image * scale;
    viewport.center().to_vec2() - scaled.to_vec2() / 2.0
}

/// Returns the container-space rectangle of an image placed at `position`.
#[must_use]
pub fn image_rect(image: Size, scale: f64, position: Vec2) -> Rect {
    Rect::from_origin_size(position.to_point(), image * scale)
}

/// Clamps the top-left `position` of an image of `scaled_image` size
/// against `viewport`.
#[must_use]
pub fn clamp_position(position: Vec2, scaled_image: Size, viewport: Rect, mode: ClampMode) -> Vec2 {
    Vec2::new(
        clamp_axis(position.x, scaled_image.width, viewport.x0, viewport.width(), mode),
        clamp_axis(position.y, scaled_image.height, viewport.y0, viewport.height(), mode),
    )
}

fn clamp_axis(offset: f64, extent: f64, view_start: f64, view_len: f64, mode: ClampMode) -> f64 {
    let extent = extent.max(0.0);
    let view_len = view_len.max(0.0);
    match mode {
        ClampMode::KeepSomeVisible => offset.clamp(view_start - extent, view_start + view_len),
        ClampMode::Cover if extent >= view_len => {
            offset.clamp(view_start + view_len - extent, view_start)
        }
        ClampMode::Cover => view_start + (view_len - extent) / 2.0,
    }
}
