// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Error returned when a configuration value is refused.
///
/// Setters that return this error leave the previous, valid value in place.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    /// Scale bounds must satisfy `0 < minimum <= maximum` with finite values.
    InvalidScaleBounds {
        /// The refused minimum.
        minimum: f64,
        /// The refused maximum.
        maximum: f64,
    },
    /// Aspect ratios must be finite and non-negative (`0` selects the native
    /// ratio).
    InvalidAspectRatio(f64),
    /// Overlay padding must be finite and non-negative.
    InvalidPadding(f64),
    /// Export quality must lie in `0..=100`.
    InvalidQuality(u8),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidScaleBounds { minimum, maximum } => write!(
                f,
                "invalid scale bounds [{minimum}, {maximum}]: expected 0 < minimum <= maximum"
            ),
            Self::InvalidAspectRatio(ratio) => {
                write!(f, "invalid aspect ratio {ratio}: expected a finite value >= 0")
            }
            Self::InvalidPadding(padding) => {
                write!(f, "invalid overlay padding {padding}: expected a finite value >= 0")
            }
            Self::InvalidQuality(quality) => {
                write!(f, "invalid quality {quality}: expected a value in 0..=100")
            }
        }
    }
}

impl core::error::Error for ConfigError {}
