// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size, Vec2};

use crate::clamp::{clamp_offsets, content_half_extents, max_offsets};

/// Maximum zoom level for zoomable slides.
pub const MAX_ZOOM: f64 = 8.0;

/// Snapshot of a [`ZoomModel`], handed to renderers and gesture sensors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomState {
    /// Current zoom level, `1.0 <= zoom <= max_zoom`.
    pub zoom: f64,
    /// Horizontal pan offset in pixels.
    pub offset_x: f64,
    /// Vertical pan offset in pixels.
    pub offset_y: f64,
    /// Maximum zoom level for the current slide (`1.0` disables zoom).
    pub max_zoom: f64,
}

/// Zoom and pan state of the current slide.
///
/// `ZoomModel` tracks:
/// - the carousel box in client coordinates (the viewport),
/// - the half extents of the current slide's rendered content,
/// - the zoom level and the pan offset.
///
/// Every mutation ends by clamping the offset into the legal range derived from
/// the other three, so a resize with no gesture still invalidates stale pans.
/// Renderers are expected to draw the slide at
/// `center + offset + (p - center) * zoom` for a content point `p`.
#[derive(Clone, Debug)]
pub struct ZoomModel {
    viewport: Option<Rect>,
    content_half: Size,
    zoom: f64,
    offset: Vec2,
    max_zoom: f64,
}

impl Default for ZoomModel {
    fn default() -> Self {
        Self::new(MAX_ZOOM)
    }
}

impl ZoomModel {
    /// Creates an unzoomed model with no measured viewport.
    ///
    /// `max_zoom` below `1.0` is treated as `1.0`.
    #[must_use]
    pub fn new(max_zoom: f64) -> Self {
        Self {
            viewport: None,
            content_half: Size::ZERO,
            zoom: 1.0,
            offset: Vec2::ZERO,
            max_zoom: max_zoom.max(1.0),
        }
    }

    /// Returns the carousel box in client coordinates, if measured.
    #[must_use]
    pub fn viewport(&self) -> Option<Rect> {
        self.viewport
    }

    /// Returns the size of the carousel box, if measured.
    #[must_use]
    pub fn viewport_size(&self) -> Option<Size> {
        self.viewport.map(|rect| rect.size())
    }

    /// Sets the carousel box in client coordinates.
    ///
    /// Pass `None` when the carousel element goes away.
    pub fn set_viewport(&mut self, viewport: Option<Rect>) {
        if self.viewport == viewport {
            return;
        }
        self.viewport = viewport;
        self.clamp();
    }

    /// Sets the content half extents from the boxes of the current slide's
    /// rendered children, in carousel-local coordinates.
    ///
    /// See [`content_half_extents`]. Without a measured viewport the children
    /// are measured against a zero-sized box.
    pub fn set_content_bounds(&mut self, children: impl IntoIterator<Item = Rect>) {
        let viewport = self.viewport_size().unwrap_or(Size::ZERO);
        self.set_content_half_extents(content_half_extents(viewport, children));
    }

    /// Sets the content half extents directly.
    pub fn set_content_half_extents(&mut self, half: Size) {
        if self.content_half == half {
            return;
        }
        self.content_half = half;
        self.clamp();
    }

    /// Returns the content half extents.
    #[must_use]
    pub fn content_half_extents(&self) -> Size {
        self.content_half
    }

    /// Returns the current zoom level.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Returns `true` when zoomed past `1.0`.
    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        self.zoom > 1.0
    }

    /// Returns the maximum zoom level.
    #[must_use]
    pub fn max_zoom(&self) -> f64 {
        self.max_zoom
    }

    /// Sets the maximum zoom level, clamping the current zoom into range.
    pub fn set_max_zoom(&mut self, max_zoom: f64) {
        let max_zoom = max_zoom.max(1.0);
        if self.max_zoom == max_zoom {
            return;
        }
        self.max_zoom = max_zoom;
        self.zoom = self.zoom.min(max_zoom);
        self.clamp();
    }

    /// Returns the current pan offset.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Returns the largest legal absolute offset per axis at the current zoom.
    #[must_use]
    pub fn max_offsets(&self) -> Vec2 {
        max_offsets(
            self.zoom,
            self.viewport_size().unwrap_or(Size::ZERO),
            self.content_half,
        )
    }

    /// Returns a snapshot of the zoom state.
    #[must_use]
    pub fn state(&self) -> ZoomState {
        ZoomState {
            zoom: self.zoom,
            offset_x: self.offset.x,
            offset_y: self.offset.y,
            max_zoom: self.max_zoom,
        }
    }

    /// Changes the zoom level, optionally keeping `anchor` visually fixed.
    ///
    /// `target` is clamped into `[1, max_zoom]`. The anchor is in client
    /// coordinates and is only honored once a viewport has been measured.
    /// Returns `true` if the zoom level changed.
    pub fn change_zoom(&mut self, target: f64, anchor: Option<Point>) -> bool {
        let old_zoom = self.zoom;
        let new_zoom = target.clamp(1.0, self.max_zoom);
        if (new_zoom - old_zoom).abs() < f64::EPSILON {
            return false;
        }
        self.zoom = new_zoom;

        if let (Some(anchor), Some(viewport)) = (anchor, self.viewport) {
            let zoom_delta = new_zoom / old_zoom - 1.0;
            let center = viewport.center();
            self.offset += (center.to_vec2() + self.offset - anchor.to_vec2()) * zoom_delta;
        }

        self.clamp();
        true
    }

    /// Pans by a delta, clamped into the legal range.
    pub fn change_offsets(&mut self, delta: Vec2) {
        if delta == Vec2::ZERO {
            return;
        }
        self.offset += delta;
        self.clamp();
    }

    /// Resets zoom and offsets to identity, keeping viewport and max zoom.
    pub fn reset(&mut self) {
        self.zoom = 1.0;
        self.offset = Vec2::ZERO;
    }

    fn clamp(&mut self) {
        self.offset = clamp_offsets(
            self.zoom,
            self.viewport_size().unwrap_or(Size::ZERO),
            self.content_half,
            self.offset,
        );
    }
}
