// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use understory_touch::MAX_TOUCH_POINTS;

use crate::bounds::{DEFAULT_MAXIMUM_SCALE, DEFAULT_MINIMUM_SCALE, ScaleBounds};
use crate::error::ConfigError;
use crate::overlay::OverlayStyle;
use crate::viewport::{NATIVE_ASPECT_RATIO, ViewportSpec};

/// Initial configuration for a [`TransformController`](crate::TransformController).
///
/// Every field can also be changed later through the controller's setters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CropConfig {
    /// Viewport width / height, or `0` to fill the padded container.
    pub aspect_ratio: f64,
    /// Lower zoom limit; must be positive.
    pub minimum_scale: f64,
    /// Upper zoom limit; must not be below `minimum_scale`.
    pub maximum_scale: f64,
    /// Gap between the viewport and the container edges, in pixels.
    pub overlay_padding: f64,
    /// Snap the image back to cover the viewport when a gesture ends.
    pub snapping_enabled: bool,
    /// Number of simultaneously tracked pointers (`1` disables pinching).
    pub max_pointers: usize,
    /// Renderer options stored alongside the controller.
    pub overlay: OverlayStyle,
}

impl Default for CropConfig {
    fn default() -> Self {
        Self {
            aspect_ratio: NATIVE_ASPECT_RATIO,
            minimum_scale: DEFAULT_MINIMUM_SCALE,
            maximum_scale: DEFAULT_MAXIMUM_SCALE,
            overlay_padding: 0.0,
            snapping_enabled: true,
            max_pointers: MAX_TOUCH_POINTS,
            overlay: OverlayStyle::default(),
        }
    }
}

impl CropConfig {
    /// Returns the viewport part of the configuration.
    #[must_use]
    pub fn viewport_spec(&self) -> ViewportSpec {
        ViewportSpec {
            aspect_ratio: self.aspect_ratio,
            overlay_padding: self.overlay_padding,
            snapping_enabled: self.snapping_enabled,
        }
    }

    /// Validates the configuration, returning the checked parts.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(ViewportSpec, ScaleBounds), ConfigError> {
        let spec = self.viewport_spec();
        spec.validate()?;
        let bounds = ScaleBounds::new(self.minimum_scale, self.maximum_scale)?;
        Ok((spec, bounds))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        let (spec, bounds) = CropConfig::default().validate().unwrap();
        assert_eq!(spec, ViewportSpec::default());
        assert_eq!(bounds, ScaleBounds::default());
    }

    #[test]
    fn invalid_fields_are_reported() {
        let config = CropConfig {
            minimum_scale: 0.0,
            ..CropConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidScaleBounds { .. })
        ));

        let config = CropConfig {
            overlay_padding: -4.0,
            ..CropConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidPadding(-4.0)));
    }
}
