// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// What happens when navigating past either end of the slide list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum NavigationPolicy {
    /// Past the last slide comes the first one, and vice versa.
    #[default]
    Wrap,
    /// Navigation stops at the first and last slides.
    Clamp,
}

/// Navigation direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards lower indices.
    Prev,
    /// Towards higher indices.
    Next,
}

/// Returns the index one step from `index` in `direction`.
///
/// Returns `None` when the lightbox is closed (`index` is `None` or out of
/// range) or when the step would not move, such as at an edge under
/// [`NavigationPolicy::Clamp`] or with a single slide.
///
/// ```
/// use loupe_controller::{Direction, NavigationPolicy, step};
///
/// assert_eq!(step(Some(0), 3, NavigationPolicy::Wrap, Direction::Prev), Some(2));
/// assert_eq!(step(Some(0), 3, NavigationPolicy::Clamp, Direction::Prev), None);
/// assert_eq!(step(None, 3, NavigationPolicy::Wrap, Direction::Next), None);
/// ```
#[must_use]
pub fn step(
    index: Option<usize>,
    len: usize,
    policy: NavigationPolicy,
    direction: Direction,
) -> Option<usize> {
    let index = index.filter(|&index| index < len)?;
    let target = match (policy, direction) {
        (NavigationPolicy::Wrap, Direction::Prev) => (index + len - 1) % len,
        (NavigationPolicy::Wrap, Direction::Next) => (index + 1) % len,
        (NavigationPolicy::Clamp, Direction::Prev) => index.checked_sub(1)?,
        (NavigationPolicy::Clamp, Direction::Next) => (index + 1 < len).then_some(index + 1)?,
    };
    (target != index).then_some(target)
}
