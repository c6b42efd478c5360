// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size, Vec2};
use tracing::{debug, trace, warn};
use understory_touch::{GesturePhase, PinchSample, PointerEvent, TouchTracker, TouchUpdate};

use crate::bounds::ScaleBounds;
use crate::clamp::{ClampMode, centered_position, clamp_position, cover_fit_scale, image_rect};
use crate::config::CropConfig;
use crate::crop::CropRequest;
use crate::error::ConfigError;
use crate::overlay::OverlayStyle;
use crate::viewport::{
    ViewportGeometry, ViewportSpec, compute_viewport, validate_aspect_ratio, validate_padding,
};

/// Pinch baseline captured when the second pointer touches down.
#[derive(Clone, Copy, Debug, PartialEq)]
struct PinchAnchor {
    scale: f64,
    distance: f64,
    /// Image-space point that sat under the initial pointer midpoint.
    image_point: Point,
}

/// Gesture engine mapping an image into a fixed crop viewport.
///
/// `TransformController` owns the uniform scale and the position of the
/// image's top-left corner in container space. It consumes pointer events
/// and layout changes, and materializes the resulting transform on demand:
///
/// ```text
/// container = image * scale + position
/// ```
///
/// It holds these invariants for callers:
/// - The scale always lies within the configured [`ScaleBounds`].
/// - With snapping enabled, the image covers the viewport whenever no
///   gesture is in progress (unless even the maximum scale cannot cover it,
///   in which case the image is centered).
/// - With snapping disabled, the image is never dragged completely out of
///   the viewport.
///
/// The controller is single-threaded. To export from another thread, take a
/// [`CropRequest`] snapshot with [`TransformController::crop_request`].
#[derive(Clone, Debug)]
pub struct TransformController {
    spec: ViewportSpec,
    bounds: ScaleBounds,
    overlay: OverlayStyle,
    image_size: Size,
    container_size: Size,
    viewport: ViewportGeometry,
    scale: f64,
    position: Vec2,
    touch: TouchTracker,
    pinch: Option<PinchAnchor>,
}

impl Default for TransformController {
    fn default() -> Self {
        Self::new()
    }
}

impl TransformController {
    /// Creates a controller with the default [`CropConfig`].
    ///
    /// No image and no container are set; call [`TransformController::reset`]
    /// (or the individual setters) once layout and image are known.
    #[must_use]
    pub fn new() -> Self {
        let config = CropConfig::default();
        Self::from_parts(
            config.viewport_spec(),
            ScaleBounds::default(),
            config.overlay,
            config.max_pointers,
        )
    }

    /// Creates a controller from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns the first invalid field of `config`.
    pub fn with_config(config: CropConfig) -> Result<Self, ConfigError> {
        let (spec, bounds) = config.validate()?;
        Ok(Self::from_parts(spec, bounds, config.overlay, config.max_pointers))
    }

    fn from_parts(
        spec: ViewportSpec,
        bounds: ScaleBounds,
        overlay: OverlayStyle,
        max_pointers: usize,
    ) -> Self {
        Self {
            spec,
            bounds,
            overlay,
            image_size: Size::ZERO,
            container_size: Size::ZERO,
            viewport: ViewportGeometry::default(),
            scale: bounds.clamp(1.0),
            position: Vec2::ZERO,
            touch: TouchTracker::new(max_pointers),
            pinch: None,
        }
    }

    // --- Queries ---

    /// Returns the current uniform scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Returns the position of the scaled image's top-left corner.
    #[must_use]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Returns the zoom limits.
    #[must_use]
    pub fn scale_bounds(&self) -> ScaleBounds {
        self.bounds
    }

    /// Returns the lower zoom limit.
    #[must_use]
    pub fn minimum_scale(&self) -> f64 {
        self.bounds.minimum()
    }

    /// Returns the upper zoom limit.
    #[must_use]
    pub fn maximum_scale(&self) -> f64 {
        self.bounds.maximum()
    }

    /// Returns the configured aspect ratio (`0` for native).
    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        self.spec.aspect_ratio
    }

    /// Returns the aspect ratio the viewport actually has.
    ///
    /// This is the configured ratio, or the viewport's own width / height
    /// when the native ratio is selected. Returns `0` before layout.
    #[must_use]
    pub fn effective_aspect_ratio(&self) -> f64 {
        if self.spec.aspect_ratio > 0.0 {
            return self.spec.aspect_ratio;
        }
        if self.viewport.is_empty() {
            return 0.0;
        }
        self.viewport.size.width / self.viewport.size.height
    }

    /// Returns the overlay padding in pixels.
    #[must_use]
    pub fn overlay_padding(&self) -> f64 {
        self.spec.overlay_padding
    }

    /// Returns `true` if the image snaps back to cover the viewport.
    #[must_use]
    pub fn is_snapping_enabled(&self) -> bool {
        self.spec.snapping_enabled
    }

    /// Returns the viewport configuration.
    #[must_use]
    pub fn viewport_spec(&self) -> ViewportSpec {
        self.spec
    }

    /// Returns the renderer options.
    #[must_use]
    pub fn overlay_style(&self) -> OverlayStyle {
        self.overlay
    }

    /// Returns the derived viewport placement.
    #[must_use]
    pub fn viewport(&self) -> ViewportGeometry {
        self.viewport
    }

    /// Returns the viewport width in whole pixels (`0` before layout).
    #[must_use]
    pub fn viewport_width(&self) -> u32 {
        self.viewport.pixel_width()
    }

    /// Returns the viewport height in whole pixels (`0` before layout).
    #[must_use]
    pub fn viewport_height(&self) -> u32 {
        self.viewport.pixel_height()
    }

    /// Returns the size of the current image (`0 × 0` when none is set).
    #[must_use]
    pub fn image_size(&self) -> Size {
        self.image_size
    }

    /// Returns the container size.
    #[must_use]
    pub fn container_size(&self) -> Size {
        self.container_size
    }

    /// Returns the gesture in progress.
    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        self.touch.phase()
    }

    /// Returns the smallest scale at which the image covers the viewport.
    ///
    /// Returns `None` without an image or before layout.
    #[must_use]
    pub fn cover_fit_scale(&self) -> Option<f64> {
        cover_fit_scale(self.image_size, self.viewport.size)
    }

    /// Returns the image rectangle in container coordinates.
    #[must_use]
    pub fn image_rect(&self) -> Rect {
        image_rect(self.image_size, self.scale, self.position)
    }

    /// Returns the transform from image pixels to container pixels.
    ///
    /// Computed fresh on every call.
    #[must_use]
    pub fn materialize(&self) -> Affine {
        Affine::translate(self.position) * Affine::scale(self.scale)
    }

    /// Snapshots what an exporter needs to cut out the framed pixels.
    ///
    /// The request's transform maps image pixels into viewport-local pixels.
    /// Returns `None` without an image or before layout.
    #[must_use]
    pub fn crop_request(&self) -> Option<CropRequest> {
        if !self.has_content() {
            return None;
        }
        let to_viewport = Affine::translate(-self.viewport.origin.to_vec2());
        Some(CropRequest::new(
            self.viewport.pixel_width(),
            self.viewport.pixel_height(),
            self.image_size,
            to_viewport * self.materialize(),
        ))
    }

    /// Snapshot of the controller state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ControllerDebugInfo {
        ControllerDebugInfo {
            spec: self.spec,
            bounds: self.bounds,
            scale: self.scale,
            position: self.position,
            viewport: self.viewport,
            image_size: self.image_size,
            container_size: self.container_size,
            image_rect: self.image_rect(),
            phase: self.touch.phase(),
            pointer_count: self.touch.pointer_count(),
        }
    }

    // --- Layout and image ---

    /// Replaces image and container size and restarts from a cover fit.
    ///
    /// Any gesture in progress is dropped. The scale becomes the cover-fit
    /// scale clamped to the bounds, and the image is centered over the
    /// viewport.
    pub fn reset(&mut self, image_size: Size, container_size: Size) {
        self.image_size = sanitize(image_size);
        self.container_size = sanitize(container_size);
        self.relayout();
    }

    /// Sets the container size, re-deriving the viewport.
    pub fn set_container_size(&mut self, size: Size) {
        let size = sanitize(size);
        if self.container_size == size {
            return;
        }
        self.container_size = size;
        self.relayout();
    }

    /// Sets the size of a newly loaded image.
    pub fn set_image_size(&mut self, size: Size) {
        self.image_size = sanitize(size);
        self.relayout();
    }

    /// Forgets the current image.
    pub fn clear_image(&mut self) {
        self.set_image_size(Size::ZERO);
    }

    // --- Configuration ---

    /// Sets the viewport aspect ratio (`0` for native) and relayouts.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidAspectRatio`] and keeps the previous
    /// ratio for negative or non-finite values.
    pub fn set_aspect_ratio(&mut self, ratio: f64) -> Result<(), ConfigError> {
        validate_aspect_ratio(ratio).inspect_err(|err| warn!(%err, "aspect ratio refused"))?;
        self.spec.aspect_ratio = ratio;
        self.relayout();
        Ok(())
    }

    /// Sets the overlay padding and relayouts.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPadding`] and keeps the previous padding
    /// for negative or non-finite values.
    pub fn set_overlay_padding(&mut self, padding: f64) -> Result<(), ConfigError> {
        validate_padding(padding).inspect_err(|err| warn!(%err, "overlay padding refused"))?;
        self.spec.overlay_padding = padding;
        self.relayout();
        Ok(())
    }

    /// Sets the lower zoom limit and restarts from a cover fit.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidScaleBounds`] and keeps the previous
    /// limits if the new minimum is not positive or exceeds the maximum.
    pub fn set_minimum_scale(&mut self, minimum: f64) -> Result<(), ConfigError> {
        let bounds = self
            .bounds
            .with_minimum(minimum)
            .inspect_err(|err| warn!(%err, "minimum scale refused"))?;
        self.set_scale_bounds(bounds);
        Ok(())
    }

    /// Sets the upper zoom limit, re-clamping the current scale.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidScaleBounds`] and keeps the previous
    /// limits if the new maximum is below the minimum.
    pub fn set_maximum_scale(&mut self, maximum: f64) -> Result<(), ConfigError> {
        let bounds = self
            .bounds
            .with_maximum(maximum)
            .inspect_err(|err| warn!(%err, "maximum scale refused"))?;
        self.set_scale_bounds(bounds);
        Ok(())
    }

    /// Replaces both zoom limits.
    ///
    /// A new minimum restarts from a cover fit, exactly like
    /// [`TransformController::set_minimum_scale`]. If only the maximum
    /// changes, the current scale is re-clamped about the viewport center.
    pub fn set_scale_bounds(&mut self, bounds: ScaleBounds) {
        let minimum_changed = bounds.minimum() != self.bounds.minimum();
        self.bounds = bounds;
        if minimum_changed {
            self.relayout();
        } else {
            self.set_scale(self.scale);
        }
    }

    /// Enables or disables snapping.
    ///
    /// Enabling while no gesture runs snaps the image into place at once.
    pub fn set_snapping_enabled(&mut self, enabled: bool) {
        self.spec.snapping_enabled = enabled;
        if enabled && !self.touch.is_active() {
            self.snap();
        }
    }

    /// Replaces the renderer options.
    pub fn set_overlay_style(&mut self, style: OverlayStyle) {
        self.overlay = style;
    }

    // --- Programmatic control ---

    /// Sets the scale, zooming about the viewport center.
    ///
    /// The value is clamped to the bounds, then the position is clamped with
    /// the same policy a gesture would use at this point.
    pub fn set_scale(&mut self, scale: f64) {
        let scale = self.bounds.clamp(scale);
        if !self.has_content() {
            self.scale = scale;
            return;
        }
        self.zoom_about(self.viewport.rect().center(), scale);
        self.settle();
    }

    /// Sets the position of the scaled image's top-left corner.
    ///
    /// Ignored without an image or before layout, and for non-finite input.
    pub fn set_position(&mut self, position: Vec2) {
        if !self.has_content() || !position.is_finite() {
            return;
        }
        self.position = position;
        self.settle();
    }

    // --- Gestures ---

    /// Feeds one pointer event into the gesture engine.
    ///
    /// Returns how the touch tracker classified the event. Events that do not
    /// fit the tracked pointers come back as [`TouchUpdate::Ignored`] and
    /// change nothing.
    pub fn on_pointer_event(&mut self, event: &PointerEvent) -> TouchUpdate {
        let update = self.touch.on_event(event);
        match update {
            TouchUpdate::Ignored => {}
            TouchUpdate::PanBegan { position } => {
                debug!(x = position.x, y = position.y, "pan began");
                self.pinch = None;
            }
            TouchUpdate::Pan { delta } => self.pan_by(delta),
            TouchUpdate::PinchBegan { sample } => self.begin_pinch(sample),
            TouchUpdate::Pinch { sample } => self.update_pinch(sample),
            TouchUpdate::PinchEnded { position } => {
                debug!(x = position.x, y = position.y, "pinch ended, panning");
                self.pinch = None;
            }
            TouchUpdate::Ended => {
                debug!("gesture ended");
                self.pinch = None;
                if self.spec.snapping_enabled {
                    self.snap();
                }
            }
        }
        update
    }

    fn pan_by(&mut self, delta: Vec2) {
        if !self.has_content() || !delta.is_finite() {
            return;
        }
        self.position += delta;
        if !self.spec.snapping_enabled {
            self.clamp(ClampMode::KeepSomeVisible);
        }
        trace!(x = self.position.x, y = self.position.y, "pan");
    }

    fn begin_pinch(&mut self, sample: PinchSample) {
        let image_point = ((sample.midpoint.to_vec2() - self.position) / self.scale).to_point();
        self.pinch = Some(PinchAnchor {
            scale: self.scale,
            distance: sample.distance,
            image_point,
        });
        debug!(scale = self.scale, distance = sample.distance, "pinch began");
    }

    fn update_pinch(&mut self, sample: PinchSample) {
        let Some(anchor) = self.pinch else {
            return;
        };
        if !self.has_content() || !sample.midpoint.is_finite() || !sample.distance.is_finite() {
            return;
        }
        // Coincident pointers give no usable ratio; keep the scale, still
        // follow the midpoint.
        let scale = if anchor.distance > f64::EPSILON {
            self.bounds.clamp(anchor.scale * sample.distance / anchor.distance)
        } else {
            self.scale
        };
        self.scale = scale;
        self.position = sample.midpoint.to_vec2() - anchor.image_point.to_vec2() * scale;
        if !self.spec.snapping_enabled {
            self.clamp(ClampMode::KeepSomeVisible);
        }
        trace!(scale, x = self.position.x, y = self.position.y, "pinch");
    }

    // --- Internals ---

    fn has_content(&self) -> bool {
        self.image_size.width > 0.0 && self.image_size.height > 0.0 && !self.viewport.is_empty()
    }

    fn relayout(&mut self) {
        self.touch.reset();
        self.pinch = None;
        self.viewport = compute_viewport(
            self.container_size,
            self.spec.aspect_ratio,
            self.spec.overlay_padding,
        );
        match self.cover_fit_scale() {
            Some(cover) => {
                self.scale = self.bounds.clamp(cover);
                self.position =
                    centered_position(self.image_size, self.scale, self.viewport.rect());
                if self.spec.snapping_enabled {
                    self.snap();
                }
            }
            None => {
                self.scale = self.bounds.clamp(1.0);
                self.position = Vec2::ZERO;
            }
        }
        debug!(
            scale = self.scale,
            x = self.position.x,
            y = self.position.y,
            viewport_width = self.viewport.size.width,
            viewport_height = self.viewport.size.height,
            "reset"
        );
    }

    /// Applies the rest-state policy, or the live policy mid-gesture.
    fn settle(&mut self) {
        if !self.spec.snapping_enabled {
            self.clamp(ClampMode::KeepSomeVisible);
        } else if !self.touch.is_active() {
            self.snap();
        }
    }

    /// Raises the scale to a cover fit if possible, then removes gaps.
    fn snap(&mut self) {
        let Some(cover) = self.cover_fit_scale() else {
            return;
        };
        if self.scale < cover {
            let target = cover.min(self.bounds.maximum());
            if target > self.scale {
                debug!(from = self.scale, to = target, "snapping scale up to cover");
                self.zoom_about(self.viewport.rect().center(), target);
            }
        }
        let before = self.position;
        self.clamp(ClampMode::Cover);
        if before != self.position {
            debug!(x = self.position.x, y = self.position.y, "snapped position");
        }
    }

    fn clamp(&mut self, mode: ClampMode) {
        self.position = clamp_position(
            self.position,
            self.image_size * self.scale,
            self.viewport.rect(),
            mode,
        );
    }

    /// Changes the scale while keeping the image point under `anchor` fixed.
    fn zoom_about(&mut self, anchor: Point, scale: f64) {
        let anchor = anchor.to_vec2();
        let image_point = (anchor - self.position) / self.scale;
        self.scale = scale;
        self.position = anchor - image_point * scale;
    }
}

fn sanitize(size: Size) -> Size {
    if size.is_finite() {
        Size::new(size.width.max(0.0), size.height.max(0.0))
    } else {
        Size::ZERO
    }
}

/// Debug snapshot of a [`TransformController`] state.
#[derive(Clone, Copy, Debug)]
pub struct ControllerDebugInfo {
    /// Viewport configuration.
    pub spec: ViewportSpec,
    /// Zoom limits.
    pub bounds: ScaleBounds,
    /// Current uniform scale.
    pub scale: f64,
    /// Current position of the image's top-left corner.
    pub position: Vec2,
    /// Derived viewport placement.
    pub viewport: ViewportGeometry,
    /// Size of the current image.
    pub image_size: Size,
    /// Size of the container.
    pub container_size: Size,
    /// Image rectangle in container coordinates.
    pub image_rect: Rect,
    /// Gesture in progress.
    pub phase: GesturePhase,
    /// Number of tracked pointers.
    pub pointer_count: usize,
}
