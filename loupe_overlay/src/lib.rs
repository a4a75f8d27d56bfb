// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loupe Overlay: the modal layer a lightbox lives in.
//!
//! [`Overlay`] drives the document through an [`OverlayHost`]:
//!
//! - On mount it remembers the focused element, focuses the overlay, marks
//!   every sibling (except `template`, `script`, and `style` elements) with
//!   `inert` and `aria-hidden="true"`, and publishes the page scrollbar width
//!   as the `--loupe__scrollbar-width` custom property.
//! - Its exit hook restores the page immediately, fades the overlay out, and
//!   resolves when the host reports the end of the fade, or after the
//!   transition duration plus a short grace period.
//! - On unmount it releases anything left over.
//!
//! Attribute restoration is exact: attributes a sibling carried before the
//! overlay opened get their old values back, and attributes it did not carry
//! are removed.
//!
//! The [`css`] module holds the class and custom property naming shared by
//! all Loupe crates.

pub mod css;

mod host;
mod overlay;

pub use host::{ElementId, OverlayHost, Sibling, Timer};
pub use overlay::{EXIT_FALLBACK_GRACE, Overlay, OverlayView};
