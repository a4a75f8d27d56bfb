// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lightbox configuration.
//!
//! Every table and field is optional; missing values take their defaults.
//!
//! ```toml
//! class_name = "gallery"
//!
//! [labels]
//! Close = "Fermer"
//!
//! [carousel]
//! preload = 1
//! looping = false
//!
//! [controller]
//! navigation = "clamp"
//! close_on_backdrop_click = false
//!
//! [zoom]
//! supports = ["video"]
//!
//! [styles.portal]
//! "--loupe__backdrop-color" = "rgba(0, 0, 0, 0.9)"
//! ```

use std::collections::BTreeMap;

use loupe_controller::NavigationPolicy;
use loupe_gesture::SensorSettings;
use loupe_zoom::MAX_ZOOM;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::labels::Labels;
use crate::slide::Slide;

/// Largest accepted [`CarouselSettings::preload`].
pub const MAX_PRELOAD: usize = 10;

/// Inline CSS declarations, property name to value.
pub type Style = BTreeMap<String, String>;

/// Customization slots that accept inline styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    /// The overlay root.
    Portal,
    /// The carousel box.
    Carousel,
    /// Each slide container.
    Slide,
    /// Each slide image.
    Image,
    /// The toolbar.
    Toolbar,
    /// Every button.
    Button,
    /// Every built-in icon.
    Icon,
}

/// Toolbar settings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ToolbarSettings {
    /// Lay the toolbar out statically above the carousel instead of over it.
    pub fixed: bool,
}

/// Carousel settings.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CarouselSettings {
    /// Slides mounted on each side of the current one.
    pub preload: usize,
    /// Whether the preload window wraps around the ends of the slide list.
    pub looping: bool,
    /// Extra attributes for every slide image, applied last.
    pub image_props: BTreeMap<String, String>,
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self {
            preload: loupe_carousel::DEFAULT_PRELOAD,
            looping: true,
            image_props: BTreeMap::new(),
        }
    }
}

/// Navigation and gesture settings.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ControllerSettings {
    /// Behaviour past either end of the slide list.
    pub navigation: NavigationPolicy,
    /// Close policies and gesture thresholds.
    #[serde(flatten)]
    pub sensors: SensorSettings,
}

/// Zoom settings.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ZoomSettings {
    /// Disable zoom for image slides.
    pub disabled: bool,
    /// Custom slide types that support zoom.
    pub supports: Vec<String>,
    /// Maximum zoom level of zoomable slides.
    pub max_zoom: f64,
}

impl Default for ZoomSettings {
    fn default() -> Self {
        Self {
            disabled: false,
            supports: Vec::new(),
            max_zoom: MAX_ZOOM,
        }
    }
}

impl ZoomSettings {
    /// Maximum zoom level for `slide`: [`ZoomSettings::max_zoom`] for images
    /// (unless disabled) and supported custom types, `1.0` otherwise.
    #[must_use]
    pub fn max_zoom_for(&self, slide: &Slide) -> f64 {
        let zoomable = match slide {
            Slide::Image(_) => !self.disabled,
            Slide::Custom(custom) => self.supports.iter().any(|kind| *kind == custom.kind),
        };
        if zoomable { self.max_zoom } else { 1.0 }
    }
}

/// All lightbox settings.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LightboxSettings {
    /// UI strings.
    pub labels: Labels,
    /// Toolbar settings.
    pub toolbar: ToolbarSettings,
    /// Carousel settings.
    pub carousel: CarouselSettings,
    /// Navigation and gesture settings.
    pub controller: ControllerSettings,
    /// Zoom settings.
    pub zoom: ZoomSettings,
    /// Inline styles per slot.
    pub styles: BTreeMap<Slot, Style>,
    /// Extra class on the overlay root.
    pub class_name: Option<String>,
}

impl LightboxSettings {
    /// Parses and validates settings from TOML.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let settings: Self = toml::from_str(source)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Checks ranges that the types alone cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.carousel.preload > MAX_PRELOAD {
            return Err(ConfigError::InvalidPreload {
                preload: self.carousel.preload,
                max: MAX_PRELOAD,
            });
        }
        if let Some(&field) = self.controller.sensors.invalid_fields().first() {
            return Err(ConfigError::InvalidThreshold { field });
        }
        if !(self.zoom.max_zoom.is_finite() && self.zoom.max_zoom >= 1.0) {
            return Err(ConfigError::InvalidMaxZoom(self.zoom.max_zoom));
        }
        Ok(())
    }

    /// The inline style of `slot`, empty if none is configured.
    #[must_use]
    pub fn style(&self, slot: Slot) -> Style {
        self.styles.get(&slot).cloned().unwrap_or_default()
    }
}
