// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Intents recognized by the sensors, and the zoom snapshot they read.

use kurbo::{Point, Vec2};
use loupe_zoom::ZoomState;
use smallvec::SmallVec;

/// A semantic action recognized from raw input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Intent {
    /// Navigate to the previous slide.
    Prev,
    /// Navigate to the next slide.
    Next,
    /// Close the lightbox.
    Close,
    /// Change the zoom level, optionally around an anchor in client coordinates.
    Zoom {
        /// Requested zoom level; the zoom model clamps it.
        zoom: f64,
        /// Point to keep visually fixed.
        anchor: Option<Point>,
    },
    /// Pan by a delta in pixels.
    Pan(Vec2),
}

/// What the sensors need to know about the zoom model.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomView {
    /// Current zoom level.
    pub zoom: f64,
    /// Maximum zoom level for the current slide.
    pub max_zoom: f64,
}

impl ZoomView {
    /// An unzoomed view with the given maximum.
    #[must_use]
    pub fn unzoomed(max_zoom: f64) -> Self {
        Self { zoom: 1.0, max_zoom }
    }

    /// Returns `true` when zoomed past `1.0`.
    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        self.zoom > 1.0
    }
}

impl From<ZoomState> for ZoomView {
    fn from(state: ZoomState) -> Self {
        Self {
            zoom: state.zoom,
            max_zoom: state.max_zoom,
        }
    }
}

/// Outcome of feeding one event to the sensors.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SensorResponse {
    /// Recognized intents, in the order they should be applied.
    pub intents: SmallVec<[Intent; 2]>,
    /// Whether the host should suppress the platform's default action.
    pub prevent_default: bool,
}

impl SensorResponse {
    /// A response with no intents that leaves the default action alone.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// A response with one intent that leaves the default action alone.
    #[must_use]
    pub fn intent(intent: Intent) -> Self {
        let mut response = Self::default();
        response.intents.push(intent);
        response
    }

    /// A response with one intent that suppresses the default action.
    #[must_use]
    pub fn consumed(intent: Intent) -> Self {
        let mut response = Self::intent(intent);
        response.prevent_default = true;
        response
    }

    /// Returns `true` if nothing was recognized.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.intents.is_empty()
    }
}
