// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use smallvec::SmallVec;

/// Default number of slides kept mounted on each side of the current slide.
pub const DEFAULT_PRELOAD: usize = 2;

/// One mounted position in a [`SlideWindow`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WindowSlot {
    /// Logical index into the slide sequence.
    pub slide_index: usize,
    /// Position relative to the current slide (`0` is current, negative is before).
    pub offset: isize,
    /// `true` only for the slot at the current index.
    pub current: bool,
}

/// The set of slides to keep mounted, sorted by [`WindowSlot::offset`].
///
/// A window never contains the same logical slide twice.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SlideWindow {
    slots: SmallVec<[WindowSlot; 5]>,
}

/// Result of [`SlideWindow::diff`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WindowDiff {
    /// Logical slides present in the new window but not the old one.
    pub entered: SmallVec<[usize; 5]>,
    /// Logical slides present in the old window but not the new one.
    pub left: SmallVec<[usize; 5]>,
}

impl SlideWindow {
    /// Returns the slots, sorted by offset.
    #[must_use]
    pub fn slots(&self) -> &[WindowSlot] {
        &self.slots
    }

    /// Iterates the logical slide indices in slot order.
    pub fn slide_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.slots.iter().map(|slot| slot.slide_index)
    }

    /// Number of mounted slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if nothing is mounted (closed lightbox or no slides).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns the current slot, if any.
    #[must_use]
    pub fn current(&self) -> Option<WindowSlot> {
        self.slots.iter().copied().find(|slot| slot.current)
    }

    /// Returns `true` if `slide_index` is mounted.
    #[must_use]
    pub fn contains(&self, slide_index: usize) -> bool {
        self.slots.iter().any(|slot| slot.slide_index == slide_index)
    }

    /// Compares against a `previous` window.
    #[must_use]
    pub fn diff(&self, previous: &Self) -> WindowDiff {
        WindowDiff {
            entered: self
                .slide_indices()
                .filter(|&index| !previous.contains(index))
                .collect(),
            left: previous
                .slide_indices()
                .filter(|&index| !self.contains(index))
                .collect(),
        }
    }

    fn place(&mut self, slide_index: usize, offset: isize) {
        self.slots.push(WindowSlot {
            slide_index,
            offset,
            current: offset == 0,
        });
    }
}

/// Computes the preload window around `index`.
///
/// - `index` of `None`, or outside `0..len`, yields an empty window (the
///   lightbox is closed).
/// - Without looping, slots whose slide index falls outside `0..len` are
///   skipped, so the window shrinks near the edges.
/// - With looping, slide indices wrap modulo `len`. Slots are placed
///   center-out (`0, +1, -1, +2, -2, ...`) and a logical slide that is already
///   placed is skipped, so short slide lists are mounted once each at their
///   nearest position.
#[must_use]
pub fn compute_window(index: Option<usize>, len: usize, preload: usize, looping: bool) -> SlideWindow {
    let mut window = SlideWindow::default();
    let Some(index) = index.filter(|&index| index < len) else {
        return window;
    };

    window.place(index, 0);
    for distance in 1..=preload.min(len) {
        let offset = distance as isize;
        if looping {
            let after = (index + distance) % len;
            if !window.contains(after) {
                window.place(after, offset);
            }
            let before = (index + len - distance % len) % len;
            if !window.contains(before) {
                window.place(before, -offset);
            }
            if window.len() == len {
                break;
            }
        } else {
            if index + distance < len {
                window.place(index + distance, offset);
            }
            if distance <= index {
                window.place(index - distance, -offset);
            }
        }
    }

    window.slots.sort_unstable_by_key(|slot| slot.offset);
    window
}
