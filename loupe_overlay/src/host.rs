// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;
use std::rc::Rc;

use futures_util::future::LocalBoxFuture;

/// Opaque identity of a document element, assigned by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u64);

/// An element sharing the overlay's parent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sibling {
    /// Element identity.
    pub id: ElementId,
    /// Tag name, in any case.
    pub tag: String,
}

/// The document operations the overlay needs.
///
/// Every method takes `&self`; hosts wrapping a DOM or a test double use
/// interior mutability as needed.
pub trait OverlayHost {
    /// Moves focus into the overlay container.
    fn focus_overlay(&self);
    /// Returns the element holding focus, if any.
    fn focused_element(&self) -> Option<ElementId>;
    /// Moves focus to `id`.
    fn focus_element(&self, id: ElementId);
    /// Returns the overlay's siblings in document order, excluding the overlay.
    fn siblings(&self) -> Vec<Sibling>;
    /// Reads an attribute.
    fn get_attribute(&self, id: ElementId, name: &str) -> Option<String>;
    /// Writes an attribute.
    fn set_attribute(&self, id: ElementId, name: &str, value: &str);
    /// Removes an attribute.
    fn remove_attribute(&self, id: ElementId, name: &str);
    /// Width of the page scrollbar in pixels, `0.0` if there is none.
    fn scrollbar_width(&self) -> f64;
    /// Sets a custom property on the document root.
    fn set_root_style_property(&self, name: &str, value: &str);
    /// Removes a custom property from the document root.
    fn remove_root_style_property(&self, name: &str);
    /// Duration of the overlay's fade transition.
    fn transition_duration(&self) -> Duration;
}

impl<T: OverlayHost + ?Sized> OverlayHost for Rc<T> {
    fn focus_overlay(&self) {
        (**self).focus_overlay();
    }

    fn focused_element(&self) -> Option<ElementId> {
        (**self).focused_element()
    }

    fn focus_element(&self, id: ElementId) {
        (**self).focus_element(id);
    }

    fn siblings(&self) -> Vec<Sibling> {
        (**self).siblings()
    }

    fn get_attribute(&self, id: ElementId, name: &str) -> Option<String> {
        (**self).get_attribute(id, name)
    }

    fn set_attribute(&self, id: ElementId, name: &str, value: &str) {
        (**self).set_attribute(id, name, value);
    }

    fn remove_attribute(&self, id: ElementId, name: &str) {
        (**self).remove_attribute(id, name);
    }

    fn scrollbar_width(&self) -> f64 {
        (**self).scrollbar_width()
    }

    fn set_root_style_property(&self, name: &str, value: &str) {
        (**self).set_root_style_property(name, value);
    }

    fn remove_root_style_property(&self, name: &str) {
        (**self).remove_root_style_property(name);
    }

    fn transition_duration(&self) -> Duration {
        (**self).transition_duration()
    }
}

/// Produces sleep futures on the host's clock.
///
/// Closures returning a [`LocalBoxFuture`] implement this trait.
pub trait Timer {
    /// Resolves after `duration`.
    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()>;
}

impl<F> Timer for F
where
    F: Fn(Duration) -> LocalBoxFuture<'static, ()>,
{
    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()> {
        self(duration)
    }
}
