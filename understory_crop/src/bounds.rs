// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::error::ConfigError;

/// Default lower zoom limit.
pub const DEFAULT_MINIMUM_SCALE: f64 = 1e-3;
/// Default upper zoom limit.
pub const DEFAULT_MAXIMUM_SCALE: f64 = 10.0;

/// Validated zoom limits: `0 < minimum <= maximum`, both finite.
///
/// Equal limits lock the zoom to a single value.
///
/// Values of this type can only be built through [`ScaleBounds::new`], so a
/// `ScaleBounds` in hand is always usable for clamping.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleBounds {
    minimum: f64,
    maximum: f64,
}

impl Default for ScaleBounds {
    fn default() -> Self {
        Self {
            minimum: DEFAULT_MINIMUM_SCALE,
            maximum: DEFAULT_MAXIMUM_SCALE,
        }
    }
}

impl ScaleBounds {
    /// Validates and builds a pair of zoom limits.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidScaleBounds`] when either value is not
    /// finite, when `minimum <= 0`, or when `maximum < minimum`.
    pub fn new(minimum: f64, maximum: f64) -> Result<Self, ConfigError> {
        let valid = minimum.is_finite()
            && maximum.is_finite()
            && minimum > 0.0
            && maximum >= minimum;
        if valid {
            Ok(Self { minimum, maximum })
        } else {
            Err(ConfigError::InvalidScaleBounds { minimum, maximum })
        }
    }

    /// Returns the lower limit.
    #[must_use]
    pub fn minimum(&self) -> f64 {
        self.minimum
    }

    /// Returns the upper limit.
    #[must_use]
    pub fn maximum(&self) -> f64 {
        self.maximum
    }

    /// Returns these bounds with a new lower limit.
    ///
    /// # Errors
    ///
    /// See [`ScaleBounds::new`].
    pub fn with_minimum(self, minimum: f64) -> Result<Self, ConfigError> {
        Self::new(minimum, self.maximum)
    }

    /// Returns these bounds with a new upper limit.
    ///
    /// # Errors
    ///
    /// See [`ScaleBounds::new`].
    pub fn with_maximum(self, maximum: f64) -> Result<Self, ConfigError> {
        Self::new(self.minimum, maximum)
    }

    /// Clamps `scale` into `[minimum, maximum]`.
    ///
    /// `NaN` maps to the minimum.
    #[must_use]
    pub fn clamp(&self, scale: f64) -> f64 {
        if scale.is_nan() {
            return self.minimum;
        }
        scale.clamp(self.minimum, self.maximum)
    }

    /// Returns `true` if `scale` lies within the bounds.
    #[must_use]
    pub fn contains(&self, scale: f64) -> bool {
        (self.minimum..=self.maximum).contains(&scale)
    }
}
