// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frozen inputs for pixel export.

use kurbo::{Affine, Rect, Size};

use crate::error::ConfigError;

/// Highest accepted export quality.
pub const MAX_QUALITY: u8 = 100;

/// Encoding requested for the cropped image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    /// Lossy JPEG.
    #[default]
    Jpeg,
    /// Lossless PNG; quality is ignored by most encoders.
    Png,
    /// WebP.
    Webp,
}

/// Everything an exporter needs to cut the framed pixels out of a source
/// image.
///
/// A request is a value snapshot taken at one instant, so it can be moved to
/// another thread while the controller keeps handling gestures.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CropRequest {
    width: u32,
    height: u32,
    image_size: Size,
    transform: Affine,
    format: OutputFormat,
    quality: u8,
}

impl CropRequest {
    /// Builds a request for a `width × height` output.
    ///
    /// `transform` maps source image pixels to output pixels.
    #[must_use]
    pub fn new(width: u32, height: u32, image_size: Size, transform: Affine) -> Self {
        Self {
            width,
            height,
            image_size,
            transform,
            format: OutputFormat::default(),
            quality: MAX_QUALITY,
        }
    }

    /// Returns the output width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the output height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the size of the source image the request was taken against.
    #[must_use]
    pub fn image_size(&self) -> Size {
        self.image_size
    }

    /// Returns the transform from source image pixels to output pixels.
    #[must_use]
    pub fn transform(&self) -> Affine {
        self.transform
    }

    /// Returns the region of the source image, in source pixels, that lands
    /// in the output.
    ///
    /// The region may extend past the image where the viewport is not fully
    /// covered.
    #[must_use]
    pub fn source_rect(&self) -> Rect {
        let output = Rect::new(0.0, 0.0, f64::from(self.width), f64::from(self.height));
        self.transform.inverse().transform_rect_bbox(output)
    }

    /// Returns the requested encoding.
    #[must_use]
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Returns the requested quality in `0..=100`.
    #[must_use]
    pub fn quality(&self) -> u8 {
        self.quality
    }

    /// Sets the requested encoding.
    #[must_use]
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Sets the requested quality.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidQuality`] for values above
    /// [`MAX_QUALITY`].
    pub fn with_quality(mut self, quality: u8) -> Result<Self, ConfigError> {
        if quality > MAX_QUALITY {
            return Err(ConfigError::InvalidQuality(quality));
        }
        self.quality = quality;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Affine, Rect, Size, Vec2};

    use super::*;

    fn request() -> CropRequest {
        // Image scaled 2x, shifted so that source (50, 25) lands on output origin.
        let transform = Affine::translate(Vec2::new(-100.0, -50.0)) * Affine::scale(2.0);
        CropRequest::new(200, 100, Size::new(400.0, 300.0), transform)
    }

    #[test]
    fn defaults_to_full_quality_jpeg() {
        let req = request();
        assert_eq!(req.format(), OutputFormat::Jpeg);
        assert_eq!(req.quality(), 100);
        assert_eq!(req.width(), 200);
        assert_eq!(req.height(), 100);
        assert_eq!(req.image_size(), Size::new(400.0, 300.0));
    }

    #[test]
    fn source_rect_inverts_the_transform() {
        let src = request().source_rect();
        let expected = Rect::new(50.0, 25.0, 150.0, 75.0);
        assert!((src.x0 - expected.x0).abs() < 1e-9);
        assert!((src.y0 - expected.y0).abs() < 1e-9);
        assert!((src.x1 - expected.x1).abs() < 1e-9);
        assert!((src.y1 - expected.y1).abs() < 1e-9);
    }

    #[test]
    fn quality_above_100_is_refused() {
        assert_eq!(
            request().with_quality(101),
            Err(ConfigError::InvalidQuality(101))
        );
        let req = request().with_quality(80).unwrap().with_format(OutputFormat::Webp);
        assert_eq!(req.quality(), 80);
        assert_eq!(req.format(), OutputFormat::Webp);
    }
}
