// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer sensor: swipe, pull-to-close, backdrop click, pan, and pinch.
//!
//! ## Usage
//!
//! 1) Feed every pointer down, move, and up/cancel/leave event to
//!    [`PointerSensor`] along with the current [`ZoomView`].
//! 2) Apply the returned intents.
//! 3) Call [`PointerSensor::reset`] when the lightbox closes or unmounts.
//!
//! A gesture session lasts from the first pointer down until every pointer is
//! released. A session that ever had two pointers is a pinch and never
//! navigates or closes; a session that ever had three or more pointers is
//! cancelled outright.

use hashbrown::HashMap;
use kurbo::Point;
use loupe_zoom::{DEFAULT_ZOOM_CLAMP, scale_zoom};
use tracing::{debug, trace};

use crate::input::{PointerButtons, PointerId, PointerInput, PointerKind, TargetKind};
use crate::intent::{Intent, SensorResponse, ZoomView};
use crate::settings::SensorSettings;

/// An in-flight pointer, captured at pointer down.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ActivePointer {
    /// Pointer identity.
    pub id: PointerId,
    /// Device kind.
    pub kind: PointerKind,
    /// Where the pointer went down.
    pub origin: Point,
    /// Last known position.
    pub position: Point,
    /// What the pointer went down on.
    pub target: TargetKind,
    /// When the pointer went down.
    pub down_time_ms: u64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Session {
    multi_touch: bool,
    cancelled: bool,
}

/// Tracks active pointers and recognizes pointer gestures.
#[derive(Clone, Debug, Default)]
pub struct PointerSensor {
    active: HashMap<PointerId, ActivePointer>,
    pinch_distance: Option<f64>,
    session: Session,
}

impl PointerSensor {
    /// Creates a sensor with no active pointers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Iterates the active pointers in no particular order.
    pub fn active_pointers(&self) -> impl Iterator<Item = &ActivePointer> + '_ {
        self.active.values()
    }

    /// Returns `true` while a pinch is being tracked.
    #[must_use]
    pub fn is_pinching(&self) -> bool {
        self.pinch_distance.is_some()
    }

    /// Returns `true` if the current session was cancelled by a third pointer.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.session.cancelled
    }

    /// Drops all pointer state.
    pub fn reset(&mut self) {
        self.active.clear();
        self.pinch_distance = None;
        self.session = Session::default();
    }

    /// Handles a pointer down.
    pub fn on_down(&mut self, input: &PointerInput) -> SensorResponse {
        if should_ignore(input) {
            return SensorResponse::none();
        }

        self.active.insert(
            input.id,
            ActivePointer {
                id: input.id,
                kind: input.kind,
                origin: input.position,
                position: input.position,
                target: input.target,
                down_time_ms: input.time_ms,
            },
        );

        match self.active.len() {
            2 => {
                self.session.multi_touch = true;
                if !self.session.cancelled {
                    self.pinch_distance = self.two_pointer_distance();
                }
            }
            n if n > 2 => {
                if !self.session.cancelled {
                    debug!(pointers = n, "multi-touch gesture cancelled");
                }
                self.session.cancelled = true;
                self.pinch_distance = None;
            }
            _ => {}
        }

        SensorResponse::none()
    }

    /// Handles a pointer move.
    pub fn on_move(
        &mut self,
        input: &PointerInput,
        view: ZoomView,
        settings: &SensorSettings,
    ) -> SensorResponse {
        let Some(pointer) = self.active.get_mut(&input.id) else {
            return SensorResponse::none();
        };
        let last = pointer.position;
        pointer.position = input.position;

        if self.session.cancelled {
            return SensorResponse::none();
        }

        if let Some(previous_distance) = self.pinch_distance {
            let Some(distance) = self.two_pointer_distance() else {
                return SensorResponse::none();
            };
            let delta = distance - previous_distance;
            if delta == 0.0 {
                return SensorResponse::none();
            }
            self.pinch_distance = Some(distance);
            let zoom = scale_zoom(
                view.zoom,
                delta,
                settings.pinch_zoom_distance_factor,
                DEFAULT_ZOOM_CLAMP,
            );
            trace!(delta, zoom, "pinch");
            return SensorResponse::consumed(Intent::Zoom {
                zoom,
                anchor: self.two_pointer_midpoint(),
            });
        }

        if view.is_zoomed() && self.active.len() == 1 {
            return SensorResponse::consumed(Intent::Pan(input.position - last));
        }

        SensorResponse::none()
    }

    /// Handles a pointer up, cancel, or leave.
    pub fn on_up(
        &mut self,
        input: &PointerInput,
        view: ZoomView,
        settings: &SensorSettings,
    ) -> SensorResponse {
        let count = self.active.len();
        let Some(pointer) = self.active.remove(&input.id) else {
            return SensorResponse::none();
        };

        let session = self.session;
        if self.active.is_empty() {
            self.session = Session::default();
        }
        if self.active.len() < 2 {
            self.pinch_distance = None;
        }

        if count != 1 || session.multi_touch || session.cancelled || view.is_zoomed() {
            return SensorResponse::none();
        }

        let intent = classify_release(&pointer, input.position, settings);
        if let Some(intent) = intent {
            debug!(?intent, "pointer gesture");
            SensorResponse::intent(intent)
        } else {
            SensorResponse::none()
        }
    }

    fn two_pointer_distance(&self) -> Option<f64> {
        let mut pointers = self.active.values();
        match (pointers.next(), pointers.next(), pointers.next()) {
            (Some(a), Some(b), None) => Some(a.position.distance(b.position)),
            _ => None,
        }
    }

    fn two_pointer_midpoint(&self) -> Option<Point> {
        let mut pointers = self.active.values();
        match (pointers.next(), pointers.next(), pointers.next()) {
            (Some(a), Some(b), None) => Some(a.position.midpoint(b.position)),
            _ => None,
        }
    }
}

/// Returns `true` for pointer downs that must not start a gesture: secondary
/// mouse buttons (context menus) and interactive targets.
fn should_ignore(input: &PointerInput) -> bool {
    (input.kind == PointerKind::Mouse && !input.buttons.difference(PointerButtons::PRIMARY).is_empty())
        || input.target.is_interactive()
}

fn classify_release(
    pointer: &ActivePointer,
    position: Point,
    settings: &SensorSettings,
) -> Option<Intent> {
    let displacement = position - pointer.origin;
    let delta_x = displacement.x.abs();
    let delta_y = displacement.y.abs();
    let threshold = settings.pointer_swipe_distance;
    let factor = settings.prevailing_direction_factor;

    if delta_x > threshold && delta_x > factor * delta_y {
        return Some(if displacement.x > 0.0 {
            Intent::Prev
        } else {
            Intent::Next
        });
    }

    let pulled = delta_y > threshold
        && delta_y > factor * delta_x
        && ((settings.close_on_pull_up && displacement.y < 0.0)
            || (settings.close_on_pull_down && displacement.y > 0.0));
    let backdrop_click = settings.close_on_backdrop_click && pointer.target.is_backdrop();

    (pulled || backdrop_click).then_some(Intent::Close)
}
