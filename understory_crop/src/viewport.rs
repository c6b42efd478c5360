// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `floor`
use kurbo::{Point, Rect, Size};

use crate::error::ConfigError;

/// Aspect ratio sentinel: let the viewport fill the padded container.
pub const NATIVE_ASPECT_RATIO: f64 = 0.0;

/// Shape and behavior of the crop viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportSpec {
    /// Width / height of the viewport, or [`NATIVE_ASPECT_RATIO`].
    pub aspect_ratio: f64,
    /// Minimum gap between the viewport and each container edge, in pixels.
    pub overlay_padding: f64,
    /// Whether the image snaps back to cover the viewport when a gesture ends.
    pub snapping_enabled: bool,
}

impl Default for ViewportSpec {
    fn default() -> Self {
        Self {
            aspect_ratio: NATIVE_ASPECT_RATIO,
            overlay_padding: 0.0,
            snapping_enabled: true,
        }
    }
}

impl ViewportSpec {
    /// Checks that the ratio and padding are usable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidAspectRatio`] or
    /// [`ConfigError::InvalidPadding`] for negative or non-finite values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_aspect_ratio(self.aspect_ratio)?;
        validate_padding(self.overlay_padding)
    }
}

pub(crate) fn validate_aspect_ratio(ratio: f64) -> Result<(), ConfigError> {
    if ratio.is_finite() && ratio >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidAspectRatio(ratio))
    }
}

pub(crate) fn validate_padding(padding: f64) -> Result<(), ConfigError> {
    if padding.is_finite() && padding >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidPadding(padding))
    }
}

/// Derived placement of the viewport inside its container.
///
/// Produced by [`compute_viewport`]. Width, height and origin are whole
/// pixels so that exporters receive an exact integral frame.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ViewportGeometry {
    /// Viewport size in container pixels.
    pub size: Size,
    /// Top-left corner of the viewport in container coordinates.
    pub origin: Point,
}

impl ViewportGeometry {
    /// Returns the viewport rectangle in container coordinates.
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(self.origin, self.size)
    }

    /// Returns `true` when layout has not produced a usable viewport yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size.width <= 0.0 || self.size.height <= 0.0
    }

    /// Viewport width in whole pixels.
    #[must_use]
    pub fn pixel_width(&self) -> u32 {
        to_pixels(self.size.width)
    }

    /// Viewport height in whole pixels.
    #[must_use]
    pub fn pixel_height(&self) -> u32 {
        to_pixels(self.size.height)
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "viewport extents are floored, non-negative and far below u32::MAX"
)]
fn to_pixels(extent: f64) -> u32 {
    extent.max(0.0) as u32
}

/// Derives the viewport for a container, aspect ratio and padding.
///
/// - With [`NATIVE_ASPECT_RATIO`] the viewport is the container minus
///   `padding` on every side.
/// - Otherwise it is the largest `aspect_ratio` (width / height) rectangle
///   that fits the padded container.
///
/// The viewport is centered in the container. A container with no area
/// left after padding yields an empty geometry.
///
/// ```rust
/// use kurbo::{Point, Size};
/// use understory_crop::compute_viewport;
///
/// let vp = compute_viewport(Size::new(1000.0, 500.0), 1.0, 0.0);
/// assert_eq!(vp.size, Size::new(500.0, 500.0));
/// assert_eq!(vp.origin, Point::new(250.0, 0.0));
/// ```
#[must_use]
pub fn compute_viewport(container: Size, aspect_ratio: f64, padding: f64) -> ViewportGeometry {
    let padding = if padding.is_finite() { padding.max(0.0) } else { 0.0 };
    let available = Size::new(
        (container.width - 2.0 * padding).max(0.0),
        (container.height - 2.0 * padding).max(0.0),
    );
    if available.width <= 0.0 || available.height <= 0.0 {
        return ViewportGeometry::default();
    }

    let size = if aspect_ratio > 0.0 && aspect_ratio.is_finite() {
        let candidate_width = available.height * aspect_ratio;
        if candidate_width <= available.width {
            Size::new(candidate_width, available.height)
        } else {
            Size::new(available.width, available.width / aspect_ratio)
        }
    } else {
        available
    };
    let size = Size::new(size.width.floor(), size.height.floor());
    if size.width <= 0.0 || size.height <= 0.0 {
        return ViewportGeometry::default();
    }

    let origin = Point::new(
        ((container.width - size.width) / 2.0).floor(),
        ((container.height - size.height) / 2.0).floor(),
    );
    ViewportGeometry { size, origin }
}
