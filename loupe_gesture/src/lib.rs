// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loupe Gesture: turn raw pointer, wheel, and keyboard input into lightbox intents.
//!
//! Each sensor is a small state machine that consumes owned input records and
//! produces [`Intent`]s: navigate, close, zoom, or pan. Sensors never touch
//! the zoom model or the navigation state directly; they read a [`ZoomView`]
//! snapshot and leave applying the intents to the caller.
//!
//! - [`pointer`]: swipe to navigate, pull to close, backdrop click, single
//!   pointer pan while zoomed, and two-pointer pinch zoom.
//! - [`wheel`]: trackpad swipe navigation with momentum cooldown,
//!   Control+wheel zoom, and wheel panning while zoomed.
//! - [`keyboard`]: arrow keys, Escape, zoom shortcuts, and double-click zoom.
//! - [`Sensors`]: all of the above behind one set of entry points.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Point;
//! use loupe_gesture::{Intent, PointerInput, Sensors, ZoomView};
//!
//! let mut sensors = Sensors::default();
//! let view = ZoomView::unzoomed(8.0);
//!
//! // A 150px swipe to the left navigates forward.
//! sensors.on_pointer_down(&PointerInput::touch(1, Point::new(400.0, 300.0)));
//! let response = sensors.on_pointer_up(&PointerInput::touch(1, Point::new(250.0, 300.0)), view);
//! assert_eq!(response.intents.as_slice(), [Intent::Next]);
//! ```
//!
//! ## Targets
//!
//! Hosts classify what each event landed on as a [`TargetKind`]. Gestures that
//! start on controls or selectable text are ignored, and clicks on the
//! backdrop or the slide container may close the lightbox.

pub mod input;
pub mod intent;
pub mod keyboard;
pub mod pointer;
pub mod settings;
pub mod wheel;

mod sensors;

pub use input::{
    ClickInput, Key, KeyInput, Modifiers, NamedKey, PointerButtons, PointerId, PointerInput,
    PointerKind, TargetKind, WheelInput,
};
pub use intent::{Intent, SensorResponse, ZoomView};
pub use pointer::{ActivePointer, PointerSensor};
pub use sensors::Sensors;
pub use settings::SensorSettings;
pub use wheel::WheelSensor;
