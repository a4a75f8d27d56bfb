// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard and double-click recognition. Both are stateless.

use kurbo::Vec2;
use loupe_zoom::{DEFAULT_ZOOM_CLAMP, scale_zoom};

use crate::input::{ClickInput, Key, KeyInput, NamedKey};
use crate::intent::{Intent, SensorResponse, ZoomView};
use crate::settings::SensorSettings;

/// Maps a key press to intents.
///
/// - `+` (or Command+`=`) zooms in and `-` (or Command+`_`) zooms out by
///   [`SensorSettings::keyboard_zoom_factor`]; Command+`0` resets the zoom.
/// - Escape closes.
/// - While zoomed, the arrow keys pan; otherwise Left and Right navigate.
///
/// Zoom and pan suppress the default action so the page does not scroll or
/// zoom along with the slide.
#[must_use]
pub fn key_down(input: &KeyInput, view: ZoomView, settings: &SensorSettings) -> SensorResponse {
    let command = input.modifiers.command();
    let factor = settings.keyboard_zoom_factor;
    let mut response = SensorResponse::none();

    let zoom = match input.key {
        Key::Character('+') => Some(view.zoom * factor),
        Key::Character('=') if command => Some(view.zoom * factor),
        Key::Character('-') => Some(view.zoom / factor),
        Key::Character('_') if command => Some(view.zoom / factor),
        Key::Character('0') if command => Some(1.0),
        _ => None,
    };
    if let Some(zoom) = zoom {
        response.prevent_default = true;
        response.intents.push(Intent::Zoom { zoom, anchor: None });
    }

    if input.key == Key::Named(NamedKey::Escape) {
        response.intents.push(Intent::Close);
    }

    let Key::Named(named) = input.key else {
        return response;
    };
    let step = settings.keyboard_move_distance;
    if view.is_zoomed() {
        let pan = match named {
            NamedKey::ArrowUp => Some(Vec2::new(0.0, step)),
            NamedKey::ArrowDown => Some(Vec2::new(0.0, -step)),
            NamedKey::ArrowLeft => Some(Vec2::new(step, 0.0)),
            NamedKey::ArrowRight => Some(Vec2::new(-step, 0.0)),
            _ => None,
        };
        if let Some(pan) = pan {
            response.prevent_default = true;
            response.intents.push(Intent::Pan(pan));
        }
    } else {
        match named {
            NamedKey::ArrowLeft => response.intents.push(Intent::Prev),
            NamedKey::ArrowRight => response.intents.push(Intent::Next),
            _ => {}
        }
    }

    response
}

/// Toggles zoom on double-click: doubles it until the maximum, then resets.
#[must_use]
pub fn double_click(input: &ClickInput, view: ZoomView) -> SensorResponse {
    if input.target.is_interactive() {
        return SensorResponse::none();
    }
    let zoom = if view.zoom < view.max_zoom {
        scale_zoom(view.zoom, 2.0, 1.0, DEFAULT_ZOOM_CLAMP)
    } else {
        1.0
    };
    SensorResponse::consumed(Intent::Zoom {
        zoom,
        anchor: Some(input.position),
    })
}
