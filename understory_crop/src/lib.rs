// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Crop: pan/pinch crop viewport primitives.
//!
//! This crate models the headless core of an image cropper: a fixed-shape
//! viewport inside a container, and an image the user pans and pinch-zooms
//! underneath it. It focuses on:
//! - Viewport geometry from container size, aspect ratio and padding
//!   ([`compute_viewport`]).
//! - A gesture-driven scale + translation controller with zoom limits and
//!   snap-back ([`TransformController`]).
//! - Clamp policies shared by every positioning path ([`ClampMode`]).
//! - Snapshots for exporting exactly the framed pixels ([`CropRequest`]).
//!
//! It does **not** draw, decode or encode anything. Callers are expected to:
//! - Forward pointer events (see `understory_touch`) and layout changes.
//! - Paint the image with [`TransformController::materialize`] and dim the
//!   area outside the viewport using [`overlay_rects`].
//! - Hand a [`CropRequest`] to whatever image pipeline performs the export.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size, Vec2};
//! use understory_crop::{CropConfig, TransformController};
//! use understory_touch::PointerEvent;
//!
//! let mut crop = TransformController::with_config(CropConfig {
//!     aspect_ratio: 1.0,
//!     ..CropConfig::default()
//! })
//! .unwrap();
//!
//! // A 200x100 image in a 400x400 container: cover fit is 4x, centered.
//! crop.reset(Size::new(200.0, 100.0), Size::new(400.0, 400.0));
//! assert_eq!(crop.scale(), 4.0);
//! assert_eq!(crop.position(), Vec2::new(-200.0, 0.0));
//!
//! // Drag right; on release the image snaps back to cover the viewport.
//! crop.on_pointer_event(&PointerEvent::down(1, Point::new(100.0, 100.0)));
//! crop.on_pointer_event(&PointerEvent::moved(1, Point::new(400.0, 100.0)));
//! crop.on_pointer_event(&PointerEvent::up(1, Point::new(400.0, 100.0)));
//! assert_eq!(crop.position(), Vec2::new(0.0, 0.0));
//!
//! let request = crop.crop_request().unwrap();
//! assert_eq!((request.width(), request.height()), (400, 400));
//! ```
//!
//! ## Design notes
//!
//! - Zoom is **uniform**; rotation is out of scope.
//! - Position is the container-space offset of the scaled image's top-left
//!   corner, so `container = image * scale + position`.
//! - Pinches anchor the image point under the initial pointer midpoint and
//!   keep it under the current midpoint.
//! - Invalid configuration values are refused with a [`ConfigError`] and the
//!   previous value stays in effect.
//! - Diagnostics go through `tracing`; no subscriber is installed here.
//!
//! This crate is `no_std`.

#![no_std]

mod bounds;
mod clamp;
mod config;
mod controller;
mod crop;
mod error;
mod overlay;
mod viewport;

pub use bounds::{DEFAULT_MAXIMUM_SCALE, DEFAULT_MINIMUM_SCALE, ScaleBounds};
pub use clamp::{ClampMode, centered_position, clamp_position, cover_fit_scale, image_rect};
pub use config::CropConfig;
pub use controller::{ControllerDebugInfo, TransformController};
pub use crop::{CropRequest, MAX_QUALITY, OutputFormat};
pub use error::ConfigError;
pub use overlay::{OverlayStyle, overlay_rects};
pub use viewport::{NATIVE_ASPECT_RATIO, ViewportGeometry, ViewportSpec, compute_viewport};
