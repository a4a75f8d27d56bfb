// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pure pan-range helpers.
//!
//! Everything here is a function of its inputs only, so [`crate::ZoomModel`]
//! can re-run the clamp after every mutation instead of clamping at call sites.

use kurbo::{Rect, Size, Vec2};

/// Computes the half extents of a slide from the boxes of its rendered children.
///
/// `children` are in carousel-local coordinates (the carousel box has its
/// origin at `(0, 0)` and the given `viewport` size). For each child the half
/// extent is its farthest edge from the carousel center, so off-center content
/// still yields a symmetric pan range. The result is the maximum over all
/// children, or zero when there are none.
#[must_use]
pub fn content_half_extents(viewport: Size, children: impl IntoIterator<Item = Rect>) -> Size {
    let center_x = viewport.width / 2.0;
    let center_y = viewport.height / 2.0;
    children
        .into_iter()
        .fold(Size::ZERO, |acc, child| {
            let half_w = (center_x - child.x0).max(child.x1 - center_x);
            let half_h = (center_y - child.y0).max(child.y1 - center_y);
            Size::new(acc.width.max(half_w), acc.height.max(half_h))
        })
}

/// Returns the largest legal absolute pan offset along each axis.
///
/// Per axis this is `max(content_half * zoom - viewport_half, 0)`: the zoomed
/// content may overflow the viewport by that much on either side.
#[must_use]
pub fn max_offsets(zoom: f64, viewport: Size, content_half: Size) -> Vec2 {
    Vec2::new(
        (content_half.width * zoom - viewport.width / 2.0).max(0.0),
        (content_half.height * zoom - viewport.height / 2.0).max(0.0),
    )
}

/// Clamps `offset` into `[-max, max]` per axis, see [`max_offsets`].
#[must_use]
pub fn clamp_offsets(zoom: f64, viewport: Size, content_half: Size, offset: Vec2) -> Vec2 {
    let max = max_offsets(zoom, viewport, content_half);
    Vec2::new(
        offset.x.clamp(-max.x, max.x),
        offset.y.clamp(-max.y, max.y),
    )
}
