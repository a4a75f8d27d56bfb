// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wheel sensor: trackpad swipes, Control+wheel zoom, and wheel panning.
//!
//! Horizontal wheel deltas are accumulated over a sliding history window. Once
//! the accumulated travel crosses the swipe distance the sensor navigates and
//! enters a cooldown, during which the trailing inertial events of the same
//! swipe are absorbed instead of triggering a second navigation.

use std::collections::VecDeque;

use kurbo::Vec2;
use loupe_zoom::{DEFAULT_ZOOM_CLAMP, scale_zoom};
use tracing::{debug, trace};

use crate::input::{Modifiers, WheelInput};
use crate::intent::{Intent, SensorResponse, ZoomView};
use crate::settings::SensorSettings;

#[derive(Clone, Copy, Debug, PartialEq)]
struct Sample {
    time_ms: u64,
    delta: Vec2,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Cooldown {
    started_ms: u64,
    momentum: f64,
}

/// Recognizes wheel gestures.
#[derive(Clone, Debug, Default)]
pub struct WheelSensor {
    history: VecDeque<Sample>,
    cooldown: Option<Cooldown>,
}

impl WheelSensor {
    /// Creates a sensor with an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` while a post-swipe cooldown is active.
    #[must_use]
    pub fn in_cooldown(&self) -> bool {
        self.cooldown.is_some()
    }

    /// Forgets accumulated history and any cooldown.
    pub fn reset(&mut self) {
        self.history.clear();
        self.cooldown = None;
    }

    /// Handles a wheel event.
    pub fn on_wheel(
        &mut self,
        input: &WheelInput,
        view: ZoomView,
        settings: &SensorSettings,
    ) -> SensorResponse {
        let delta = input.delta;

        if input.modifiers.contains(Modifiers::CTRL) {
            if delta.y.abs() > delta.x.abs() {
                let zoom = scale_zoom(view.zoom, -delta.y, settings.wheel_zoom_factor, DEFAULT_ZOOM_CLAMP);
                trace!(delta = delta.y, zoom, "wheel zoom");
                return SensorResponse::consumed(Intent::Zoom {
                    zoom,
                    anchor: Some(input.position),
                });
            }
            return SensorResponse::none();
        }

        if view.is_zoomed() {
            return SensorResponse::consumed(Intent::Pan(-delta));
        }

        if self.absorb(input, settings) {
            trace!(delta = delta.x, "wheel momentum absorbed");
            return SensorResponse::none();
        }

        let window = settings.wheel_history_window_ms;
        while self
            .history
            .front()
            .is_some_and(|sample| sample.time_ms.saturating_add(window) <= input.time_ms)
        {
            self.history.pop_front();
        }
        self.history.push_back(Sample {
            time_ms: input.time_ms,
            delta,
        });

        let total = self
            .history
            .iter()
            .fold(Vec2::ZERO, |total, sample| total + sample.delta);
        let travel_x = total.x.abs();
        if travel_x > settings.wheel_swipe_distance
            && travel_x > settings.prevailing_direction_factor * total.y.abs()
        {
            let intent = if total.x < 0.0 {
                Intent::Prev
            } else {
                Intent::Next
            };
            debug!(?intent, travel = total.x, "wheel swipe");
            self.history.clear();
            self.cooldown = Some(Cooldown {
                started_ms: input.time_ms,
                momentum: delta.x,
            });
            return SensorResponse::intent(intent);
        }

        SensorResponse::none()
    }

    /// Swallows inertial events trailing a swipe.
    ///
    /// An event is absorbed when it keeps the swipe direction and arrives in
    /// the first half of the cooldown, or anywhere in the cooldown without
    /// accelerating past the prevailing-direction factor. Anything else ends
    /// the cooldown.
    fn absorb(&mut self, input: &WheelInput, settings: &SensorSettings) -> bool {
        let Some(cooldown) = self.cooldown.as_mut() else {
            return false;
        };
        let dx = input.delta.x;
        let elapsed = input.time_ms.saturating_sub(cooldown.started_ms);
        let same_direction = dx * cooldown.momentum > 0.0;
        let early = elapsed <= settings.wheel_swipe_cooldown_ms / 2;
        let gentle = elapsed <= settings.wheel_swipe_cooldown_ms
            && dx.abs() < settings.prevailing_direction_factor * cooldown.momentum.abs();

        if same_direction && (early || gentle) {
            cooldown.momentum = dx;
            true
        } else {
            self.cooldown = None;
            false
        }
    }
}
