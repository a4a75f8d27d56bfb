// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture thresholds.

/// Minimum horizontal pointer travel (px) for a swipe, and vertical travel for a pull.
pub const POINTER_SWIPE_DISTANCE: f64 = 100.0;
/// One axis must exceed the other by this factor to count as the gesture direction.
pub const PREVAILING_DIRECTION_FACTOR: f64 = 1.2;
/// Accumulated horizontal wheel travel (px) that triggers navigation.
pub const WHEEL_SWIPE_DISTANCE: f64 = 100.0;
/// Momentum absorption window after a wheel swipe (ms).
pub const WHEEL_SWIPE_COOLDOWN_MS: u64 = 1_000;
/// How far back wheel events are accumulated (ms).
pub const WHEEL_EVENT_HISTORY_WINDOW_MS: u64 = 3_000;
/// Wheel delta (px) per zoom step with Control held.
pub const WHEEL_ZOOM_FACTOR: f64 = 100.0;
/// Pinch distance change (px) per zoom step.
pub const PINCH_ZOOM_DISTANCE_FACTOR: f64 = 100.0;
/// Pan step (px) of the arrow keys while zoomed in.
pub const KEYBOARD_MOVE_DISTANCE: f64 = 50.0;

/// Multiplicative zoom step of the `+`/`-` keys: four presses span `1..=8`.
#[must_use]
pub fn keyboard_zoom_factor() -> f64 {
    8.0_f64.powf(0.25)
}

/// Tunable thresholds and close policies for [`crate::Sensors`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "snake_case")
)]
pub struct SensorSettings {
    /// Close on a vertical pull upwards.
    pub close_on_pull_up: bool,
    /// Close on a vertical pull downwards.
    pub close_on_pull_down: bool,
    /// Close on a click on the backdrop or the slide area around the content.
    pub close_on_backdrop_click: bool,
    /// See [`POINTER_SWIPE_DISTANCE`].
    pub pointer_swipe_distance: f64,
    /// See [`PREVAILING_DIRECTION_FACTOR`].
    pub prevailing_direction_factor: f64,
    /// See [`WHEEL_SWIPE_DISTANCE`].
    pub wheel_swipe_distance: f64,
    /// See [`WHEEL_SWIPE_COOLDOWN_MS`].
    pub wheel_swipe_cooldown_ms: u64,
    /// See [`WHEEL_EVENT_HISTORY_WINDOW_MS`].
    pub wheel_history_window_ms: u64,
    /// See [`WHEEL_ZOOM_FACTOR`].
    pub wheel_zoom_factor: f64,
    /// See [`PINCH_ZOOM_DISTANCE_FACTOR`].
    pub pinch_zoom_distance_factor: f64,
    /// See [`keyboard_zoom_factor`].
    pub keyboard_zoom_factor: f64,
    /// See [`KEYBOARD_MOVE_DISTANCE`].
    pub keyboard_move_distance: f64,
}

impl Default for SensorSettings {
    fn default() -> Self {
        Self {
            close_on_pull_up: true,
            close_on_pull_down: true,
            close_on_backdrop_click: true,
            pointer_swipe_distance: POINTER_SWIPE_DISTANCE,
            prevailing_direction_factor: PREVAILING_DIRECTION_FACTOR,
            wheel_swipe_distance: WHEEL_SWIPE_DISTANCE,
            wheel_swipe_cooldown_ms: WHEEL_SWIPE_COOLDOWN_MS,
            wheel_history_window_ms: WHEEL_EVENT_HISTORY_WINDOW_MS,
            wheel_zoom_factor: WHEEL_ZOOM_FACTOR,
            pinch_zoom_distance_factor: PINCH_ZOOM_DISTANCE_FACTOR,
            keyboard_zoom_factor: keyboard_zoom_factor(),
            keyboard_move_distance: KEYBOARD_MOVE_DISTANCE,
        }
    }
}

impl SensorSettings {
    /// Returns the names of fields holding non-positive or non-finite values.
    ///
    /// Distances and factors must be strictly positive for the gesture math to
    /// make sense; the millisecond windows may be zero.
    #[must_use]
    pub fn invalid_fields(&self) -> Vec<&'static str> {
        [
            ("pointer_swipe_distance", self.pointer_swipe_distance),
            ("prevailing_direction_factor", self.prevailing_direction_factor),
            ("wheel_swipe_distance", self.wheel_swipe_distance),
            ("wheel_zoom_factor", self.wheel_zoom_factor),
            ("pinch_zoom_distance_factor", self.pinch_zoom_distance_factor),
            ("keyboard_zoom_factor", self.keyboard_zoom_factor),
            ("keyboard_move_distance", self.keyboard_move_distance),
        ]
        .into_iter()
        .filter(|(_, value)| !(value.is_finite() && *value > 0.0))
        .map(|(name, _)| name)
        .collect()
    }
}
