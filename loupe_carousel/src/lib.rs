// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loupe Carousel: preload windowing for lightbox carousels.
//!
//! A lightbox keeps a few slides mounted on each side of the current one so
//! that navigating is instant. This crate computes which logical slides belong
//! in that window, and where, without knowing anything about rendering.
//!
//! The core concepts are:
//!
//! - [`compute_window`]: given the current index, the slide count, a preload
//!   count, and whether the carousel loops, returns a [`SlideWindow`] of up to
//!   `2 * preload + 1` [`WindowSlot`]s sorted by their position relative to the
//!   current slide.
//! - [`SlideWindow::diff`]: compares two windows so hosts can mount entering
//!   slides and recycle the ones that left.
//!
//! Host frameworks are responsible for:
//!
//! - Owning the slides and the mounted slide instances.
//! - Recomputing the window when the index, slide count, or preload changes.
//! - Rendering every slot, hiding all but [`SlideWindow::current`].
//!
//! ## Minimal example
//!
//! ```rust
//! use loupe_carousel::compute_window;
//!
//! // Three slides, preload of two, looping: each slide is mounted once.
//! let window = compute_window(Some(0), 3, 2, true);
//! assert_eq!(window.len(), 3);
//! assert_eq!(window.current().map(|slot| slot.slide_index), Some(0));
//!
//! // Without looping the window is cut at the edges.
//! let window = compute_window(Some(0), 10, 2, false);
//! let indices: Vec<usize> = window.slide_indices().collect();
//! assert_eq!(indices, vec![0, 1, 2]);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod window;

pub use window::{DEFAULT_PRELOAD, SlideWindow, WindowDiff, WindowSlot, compute_window};
