// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loupe Zoom: zoom and pan state for a single lightbox slide.
//!
//! This crate provides a small, headless model of a zoomable slide shown inside
//! a carousel box. It focuses on:
//! - Zoom level state bounded to `[1, max_zoom]`.
//! - Anchored zoom: the content under a cursor or pinch midpoint stays put.
//! - Pan offsets clamped so panning never reveals empty space beyond the
//!   slide's edges.
//! - Re-clamping whenever zoom, viewport, content bounds, or offsets change.
//!
//! It does **not** measure anything or render anything. Callers are expected to:
//! - Report the carousel box in client coordinates via [`ZoomModel::set_viewport`]
//!   whenever a resize observer fires.
//! - Report the rendered children of the current slide via
//!   [`ZoomModel::set_content_bounds`] after layout.
//! - Apply `translate(offset) scale(zoom)` around the carousel center when
//!   rendering the current slide.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use loupe_zoom::{MAX_ZOOM, ZoomModel};
//!
//! let mut zoom = ZoomModel::new(MAX_ZOOM);
//! zoom.set_viewport(Some(Rect::new(0.0, 0.0, 800.0, 600.0)));
//! zoom.set_content_bounds([Rect::new(100.0, 0.0, 700.0, 600.0)]);
//!
//! // Zoom in around a point right of the center.
//! zoom.change_zoom(2.0, Some(Point::new(500.0, 300.0)));
//! assert_eq!(zoom.zoom(), 2.0);
//! assert_eq!(zoom.offset().x, -100.0);
//!
//! // Panning is clamped to the legal range.
//! zoom.change_offsets((-1_000.0, 0.0).into());
//! assert_eq!(zoom.offset().x, -zoom.max_offsets().x);
//! ```
//!
//! ## Multiplicative zoom steps
//!
//! Gesture layers turn raw deltas (wheel ticks, pinch distances) into zoom
//! levels with [`scale_zoom`]: a fixed delta produces a proportionally larger
//! step at higher zoom levels, and each step is capped by a clamp factor.
//!
//! ```rust
//! use loupe_zoom::scale_zoom_default;
//!
//! assert_eq!(scale_zoom_default(3.0, 50.0), 4.5);
//! assert_eq!(scale_zoom_default(3.0, 200.0), 6.0);
//! assert_eq!(scale_zoom_default(3.0, -200.0), 1.5);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod clamp;
mod model;
mod scale;

pub use clamp::{clamp_offsets, content_half_extents, max_offsets};
pub use model::{MAX_ZOOM, ZoomModel, ZoomState};
pub use scale::{DEFAULT_ZOOM_CLAMP, DEFAULT_ZOOM_FACTOR, scale_zoom, scale_zoom_default};
