// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

/// Errors from loading or validating [`LightboxSettings`](crate::LightboxSettings).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The TOML document could not be parsed into settings.
    #[error("invalid lightbox settings: {0}")]
    Toml(#[from] toml::de::Error),
    /// `carousel.preload` exceeds [`MAX_PRELOAD`](crate::MAX_PRELOAD).
    #[error("carousel preload {preload} exceeds the maximum of {max}")]
    InvalidPreload {
        /// Requested preload.
        preload: usize,
        /// Largest accepted preload.
        max: usize,
    },
    /// A gesture threshold is non-positive or not finite.
    #[error("gesture threshold `{field}` must be a positive number")]
    InvalidThreshold {
        /// Name of the offending field.
        field: &'static str,
    },
    /// `zoom.max_zoom` is below `1.0` or not finite.
    #[error("maximum zoom {0} must be a finite number of at least 1")]
    InvalidMaxZoom(f64),
}

/// Errors from decoding a [`Slide`](crate::Slide) from JSON.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SlideError {
    /// The value is not a JSON object.
    #[error("slide must be a JSON object")]
    NotAnObject,
    /// An image slide has no `src`.
    #[error("image slide is missing `src`")]
    MissingSrc,
    /// A field has the wrong JSON type.
    #[error("slide field `{field}` must be {expected}")]
    InvalidField {
        /// Field name, dotted for nested fields (`srcSet[1].width`).
        field: String,
        /// Expected JSON type.
        expected: &'static str,
    },
}
