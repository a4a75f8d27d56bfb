// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Owned input records.
//!
//! Hosts copy the fields they need out of platform events into these records
//! at event time. Nothing here borrows from, or outlives, a platform event.

use bitflags::bitflags;
use kurbo::{Point, Vec2};

/// Identity of an in-flight pointer, as reported by the platform.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointerId(pub u64);

/// Kind of device behind a pointer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PointerKind {
    /// Mouse or trackpad cursor.
    #[default]
    Mouse,
    /// Finger on a touch screen.
    Touch,
    /// Stylus.
    Pen,
}

bitflags! {
    /// Pointer buttons held during an event.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
    pub struct PointerButtons: u16 {
        /// Primary button (usually left).
        const PRIMARY = 1;
        /// Secondary button (usually right).
        const SECONDARY = 1 << 1;
        /// Auxiliary button (usually the wheel).
        const AUXILIARY = 1 << 2;
        /// Back button.
        const BACK = 1 << 3;
        /// Forward button.
        const FORWARD = 1 << 4;
    }
}

bitflags! {
    /// Keyboard modifiers held during an event.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
    pub struct Modifiers: u8 {
        /// Control.
        const CTRL = 1;
        /// Shift.
        const SHIFT = 1 << 1;
        /// Alt / Option.
        const ALT = 1 << 2;
        /// Meta / Command / Windows.
        const META = 1 << 3;
    }
}

impl Modifiers {
    /// Returns `true` if Control or Meta is held.
    #[must_use]
    pub fn command(self) -> bool {
        self.intersects(Self::CTRL | Self::META)
    }
}

/// What an event landed on, classified by the host.
///
/// Gestures starting on [`TargetKind::Control`] or [`TargetKind::Selectable`]
/// are left alone so buttons keep working and text can be selected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TargetKind {
    /// The overlay backdrop itself.
    Backdrop,
    /// The slide container around the slide content.
    Slide,
    /// Slide content (the image or a custom slide body).
    #[default]
    Content,
    /// Navigation buttons, icons, or the toolbar.
    Control,
    /// An element marked user-selectable.
    Selectable,
}

impl TargetKind {
    /// Returns `true` for targets that sensors must not intercept.
    #[must_use]
    pub fn is_interactive(self) -> bool {
        matches!(self, Self::Control | Self::Selectable)
    }

    /// Returns `true` for targets that count as the backdrop for click-to-close.
    #[must_use]
    pub fn is_backdrop(self) -> bool {
        matches!(self, Self::Backdrop | Self::Slide)
    }
}

/// A pointer down, move, up, cancel, or leave event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerInput {
    /// Pointer identity.
    pub id: PointerId,
    /// Device kind.
    pub kind: PointerKind,
    /// Buttons held.
    pub buttons: PointerButtons,
    /// Position in client coordinates.
    pub position: Point,
    /// Event target.
    pub target: TargetKind,
    /// Event timestamp in milliseconds.
    pub time_ms: u64,
}

impl PointerInput {
    /// A primary-button mouse event at `position` on slide content.
    #[must_use]
    pub fn mouse(position: Point) -> Self {
        Self {
            id: PointerId(1),
            kind: PointerKind::Mouse,
            buttons: PointerButtons::PRIMARY,
            position,
            target: TargetKind::Content,
            time_ms: 0,
        }
    }

    /// A touch event for finger `id` at `position` on slide content.
    #[must_use]
    pub fn touch(id: u64, position: Point) -> Self {
        Self {
            id: PointerId(id),
            kind: PointerKind::Touch,
            buttons: PointerButtons::PRIMARY,
            position,
            target: TargetKind::Content,
            time_ms: 0,
        }
    }

    /// Returns this event with a different target.
    #[must_use]
    pub fn with_target(mut self, target: TargetKind) -> Self {
        self.target = target;
        self
    }

    /// Returns this event with a different timestamp.
    #[must_use]
    pub fn at(mut self, time_ms: u64) -> Self {
        self.time_ms = time_ms;
        self
    }
}

/// A wheel or trackpad scroll event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelInput {
    /// Scroll delta in pixels.
    pub delta: Vec2,
    /// Cursor position in client coordinates.
    pub position: Point,
    /// Modifiers held. Trackpad pinches arrive with Control set.
    pub modifiers: Modifiers,
    /// Event timestamp in milliseconds.
    pub time_ms: u64,
}

impl WheelInput {
    /// A plain scroll of `delta` at `time_ms`.
    #[must_use]
    pub fn new(delta: Vec2, time_ms: u64) -> Self {
        Self {
            delta,
            position: Point::ZERO,
            modifiers: Modifiers::empty(),
            time_ms,
        }
    }

    /// Returns this event with modifiers.
    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Returns this event at a different cursor position.
    #[must_use]
    pub fn with_position(mut self, position: Point) -> Self {
        self.position = position;
        self
    }
}

/// Named, non-character keys the sensors care about.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NamedKey {
    /// Escape.
    Escape,
    /// Left arrow.
    ArrowLeft,
    /// Right arrow.
    ArrowRight,
    /// Up arrow.
    ArrowUp,
    /// Down arrow.
    ArrowDown,
    /// Enter.
    Enter,
    /// Tab.
    Tab,
    /// Any other named key.
    Other,
}

/// A logical key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    /// A key producing a single character.
    Character(char),
    /// A named key.
    Named(NamedKey),
}

impl Key {
    /// Parses a DOM `KeyboardEvent.key` value.
    ///
    /// ```
    /// use loupe_gesture::{Key, NamedKey};
    ///
    /// assert_eq!(Key::from_dom("ArrowLeft"), Key::Named(NamedKey::ArrowLeft));
    /// assert_eq!(Key::from_dom("Esc"), Key::Named(NamedKey::Escape));
    /// assert_eq!(Key::from_dom("+"), Key::Character('+'));
    /// assert_eq!(Key::from_dom("F5"), Key::Named(NamedKey::Other));
    /// ```
    #[must_use]
    pub fn from_dom(key: &str) -> Self {
        let mut chars = key.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Self::Character(c);
        }
        Self::Named(match key {
            "Escape" | "Esc" => NamedKey::Escape,
            "ArrowLeft" | "Left" => NamedKey::ArrowLeft,
            "ArrowRight" | "Right" => NamedKey::ArrowRight,
            "ArrowUp" | "Up" => NamedKey::ArrowUp,
            "ArrowDown" | "Down" => NamedKey::ArrowDown,
            "Enter" => NamedKey::Enter,
            "Tab" => NamedKey::Tab,
            _ => NamedKey::Other,
        })
    }
}

/// A key-down event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyInput {
    /// Logical key.
    pub key: Key,
    /// Modifiers held.
    pub modifiers: Modifiers,
}

impl KeyInput {
    /// A key press without modifiers.
    #[must_use]
    pub fn new(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::empty(),
        }
    }

    /// A key press with modifiers.
    #[must_use]
    pub fn with_modifiers(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }
}

/// A double-click or double-tap.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClickInput {
    /// Position in client coordinates.
    pub position: Point,
    /// Event target.
    pub target: TargetKind,
}
