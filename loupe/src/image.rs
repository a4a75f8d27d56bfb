// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Image slide presentation: fitted size, responsive source set, and the
//! zoom-driven `sizes` hint.

use std::collections::BTreeMap;

use kurbo::Size;

use crate::settings::Style;
use crate::slide::ImageSlide;

/// Delay before a higher zoom level is reflected in an image's `sizes` hint.
pub const IMAGE_SCALE_DELAY_MS: u64 = 300;

/// Rounds `value` to `digits` decimal places.
#[must_use]
pub fn round(value: f64, digits: i32) -> f64 {
    let factor = 10_f64.powi(digits);
    (value * factor).round() / factor
}

/// Size at which `slide` fits inside `rect` while keeping its aspect ratio.
///
/// The aspect ratio comes from the first source-set entry, or from the
/// slide's own dimensions. Returns `None` when neither is known.
#[must_use]
pub fn fitted_dimensions(slide: &ImageSlide, rect: Size) -> Option<Size> {
    let (width, height) = match slide.src_set.first() {
        Some(source) => (Some(source.width), Some(source.height)),
        None => (slide.width, slide.height),
    };
    let image_ratio = match (width, height) {
        (Some(width), Some(height)) if width > 0.0 && height > 0.0 => width / height,
        _ => return None,
    };
    let rect_ratio = rect.width / rect.height;

    let fitted_width = if image_ratio < rect_ratio {
        image_ratio * rect.height
    } else {
        rect.width
    };
    let fitted_height = if image_ratio > rect_ratio {
        rect.width / image_ratio
    } else {
        rect.height
    };
    Some(Size::new(round(fitted_width, 2), round(fitted_height, 2)))
}

/// The `srcset` attribute: candidates sorted by width, `"src 800w, ..."`.
#[must_use]
pub fn src_set_attr(slide: &ImageSlide) -> Option<String> {
    if slide.src_set.is_empty() {
        return None;
    }
    let mut sources: Vec<_> = slide.src_set.iter().collect();
    sources.sort_by(|a, b| a.width.total_cmp(&b.width));
    let candidates: Vec<String> = sources
        .iter()
        .map(|source| format!("{} {}w", source.src, source.width))
        .collect();
    Some(candidates.join(", "))
}

/// The `sizes` attribute for an image rendered `width` pixels wide at `scale`.
#[must_use]
pub fn sizes_attr(width: f64, scale: f64) -> String {
    format!("{}px", round(width * scale, 2))
}

/// The scale an image's `sizes` hint is computed at.
///
/// Zooming in schedules the scale to catch up with the zoom level after
/// [`IMAGE_SCALE_DELAY_MS`]; further zoom changes reschedule the pending
/// update instead of stacking another. The scale never goes back down, so
/// the browser keeps the sharper candidate it already fetched.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImageScale {
    scale: f64,
    pending: Option<PendingScale>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct PendingScale {
    due_ms: u64,
    scale: f64,
}

impl Default for ImageScale {
    fn default() -> Self {
        Self {
            scale: 1.0,
            pending: None,
        }
    }
}

impl ImageScale {
    /// The current scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Returns `true` while an update is scheduled.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Reports the slide's zoom level at `now_ms`.
    pub fn request(&mut self, zoom: f64, now_ms: u64) {
        self.pending = (zoom > self.scale).then_some(PendingScale {
            due_ms: now_ms.saturating_add(IMAGE_SCALE_DELAY_MS),
            scale: zoom,
        });
    }

    /// Applies a due update. Returns `true` if the scale changed.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        match self.pending {
            Some(pending) if pending.due_ms <= now_ms => {
                self.pending = None;
                self.scale = pending.scale;
                true
            }
            _ => false,
        }
    }
}

/// Attributes of a slide's `<img>` element.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageView {
    /// Image URL.
    pub src: String,
    /// Alternative text, empty when the slide has none.
    pub alt: String,
    /// Responsive candidates.
    pub src_set: Option<String>,
    /// Rendered width hint for candidate selection.
    pub sizes: Option<String>,
    /// Fitted width.
    pub width: Option<f64>,
    /// Fitted height.
    pub height: Option<f64>,
    /// Always `loupe__slide_image`.
    pub class_name: String,
    /// Inline style from the image slot.
    pub style: Style,
    /// Always `false`.
    pub draggable: bool,
    /// Consumer attributes, applied after (and overriding) the ones above.
    pub extra: BTreeMap<String, String>,
}

impl ImageView {
    /// Builds the image attributes for `slide` inside a carousel of `rect`.
    #[must_use]
    pub fn new(
        slide: &ImageSlide,
        rect: Size,
        scale: f64,
        style: Style,
        extra: BTreeMap<String, String>,
    ) -> Self {
        let fitted = fitted_dimensions(slide, rect);
        Self {
            src: slide.src.clone(),
            alt: slide.alt.clone().unwrap_or_default(),
            src_set: src_set_attr(slide),
            sizes: fitted.map(|size| sizes_attr(size.width, scale)),
            width: fitted.map(|size| size.width),
            height: fitted.map(|size| size.height),
            class_name: loupe_overlay::css::css_class("slide_image"),
            style,
            draggable: false,
            extra,
        }
    }
}
