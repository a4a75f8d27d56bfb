// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::input::{ClickInput, KeyInput, PointerInput, WheelInput};
use crate::intent::{SensorResponse, ZoomView};
use crate::keyboard;
use crate::pointer::{ActivePointer, PointerSensor};
use crate::settings::SensorSettings;
use crate::wheel::WheelSensor;

/// All gesture sensors behind one set of entry points.
///
/// `Sensors` owns the pointer and wheel state and the [`SensorSettings`]. Each
/// entry point takes the current [`ZoomView`] and returns a [`SensorResponse`]
/// for the host to apply.
#[derive(Clone, Debug, Default)]
pub struct Sensors {
    settings: SensorSettings,
    pointer: PointerSensor,
    wheel: WheelSensor,
}

impl Sensors {
    /// Creates sensors with the given settings.
    #[must_use]
    pub fn new(settings: SensorSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    /// Returns the settings.
    #[must_use]
    pub fn settings(&self) -> &SensorSettings {
        &self.settings
    }

    /// Replaces the settings. In-flight gesture state is kept.
    pub fn set_settings(&mut self, settings: SensorSettings) {
        self.settings = settings;
    }

    /// Iterates the pointers currently held down.
    pub fn active_pointers(&self) -> impl Iterator<Item = &ActivePointer> + '_ {
        self.pointer.active_pointers()
    }

    /// Drops all in-flight pointer and wheel state.
    pub fn reset(&mut self) {
        self.pointer.reset();
        self.wheel.reset();
    }

    /// Handles a key down.
    #[must_use]
    pub fn on_key_down(&self, input: &KeyInput, view: ZoomView) -> SensorResponse {
        keyboard::key_down(input, view, &self.settings)
    }

    /// Handles a pointer down.
    pub fn on_pointer_down(&mut self, input: &PointerInput) -> SensorResponse {
        self.pointer.on_down(input)
    }

    /// Handles a pointer move.
    pub fn on_pointer_move(&mut self, input: &PointerInput, view: ZoomView) -> SensorResponse {
        self.pointer.on_move(input, view, &self.settings)
    }

    /// Handles a pointer up.
    pub fn on_pointer_up(&mut self, input: &PointerInput, view: ZoomView) -> SensorResponse {
        self.pointer.on_up(input, view, &self.settings)
    }

    /// Handles a pointer cancel. Treated like a pointer up.
    pub fn on_pointer_cancel(&mut self, input: &PointerInput, view: ZoomView) -> SensorResponse {
        self.on_pointer_up(input, view)
    }

    /// Handles a pointer leaving the lightbox. Treated like a pointer up.
    pub fn on_pointer_leave(&mut self, input: &PointerInput, view: ZoomView) -> SensorResponse {
        self.on_pointer_up(input, view)
    }

    /// Handles a wheel event.
    pub fn on_wheel(&mut self, input: &WheelInput, view: ZoomView) -> SensorResponse {
        self.wheel.on_wheel(input, view, &self.settings)
    }

    /// Handles a double-click.
    #[must_use]
    pub fn on_double_click(&self, input: &ClickInput, view: ZoomView) -> SensorResponse {
        keyboard::double_click(input, view)
    }
}
