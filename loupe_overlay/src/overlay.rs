// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::cell::RefCell;
use core::fmt;
use core::time::Duration;
use std::rc::Rc;

use futures_util::FutureExt;
use futures_util::future::{Either, LocalBoxFuture, select};
use loupe_controller::{Controller, ExitHookError, ExitHookHandle};
use tokio::sync::oneshot;
use tracing::{debug, warn};

use crate::css::{clsx, css_class, css_var};
use crate::host::{ElementId, OverlayHost, Timer};

/// Extra time granted past the transition duration before the exit hook
/// resolves without a transition-end notification.
pub const EXIT_FALLBACK_GRACE: Duration = Duration::from_millis(100);

/// Tags that are never marked inert.
const SKIPPED_TAGS: [&str; 3] = ["TEMPLATE", "SCRIPT", "STYLE"];

const INERT: &str = "inert";
const ARIA_HIDDEN: &str = "aria-hidden";

#[derive(Debug)]
enum Cleanup {
    RestoreAttribute {
        id: ElementId,
        name: &'static str,
        previous: Option<String>,
    },
    RestoreFocus(Option<ElementId>),
}

#[derive(Debug, Default)]
struct State {
    mounted: bool,
    visible: bool,
    cleanup: Vec<Cleanup>,
    scrollbar_property: Option<String>,
    transition_end: Option<oneshot::Sender<()>>,
}

struct Inner {
    state: RefCell<State>,
    host: Box<dyn OverlayHost>,
    timer: Box<dyn Timer>,
}

/// Modal overlay lifecycle.
///
/// While mounted, every sibling of the overlay is inert and hidden from
/// assistive technology, focus sits inside the overlay, and the page
/// scrollbar width is published as `--loupe__scrollbar-width` so the host
/// can compensate for hiding the scrollbar.
///
/// Closing is two-phase: the exit hook restores the page and starts the fade
/// out, then resolves once the fade ends. `Overlay` is a cheap handle: clones
/// share the same state.
#[derive(Clone)]
pub struct Overlay {
    inner: Rc<Inner>,
}

impl fmt::Debug for Overlay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.inner.state.borrow();
        f.debug_struct("Overlay")
            .field("mounted", &state.mounted)
            .field("visible", &state.visible)
            .field("pending_restores", &state.cleanup.len())
            .finish_non_exhaustive()
    }
}

impl Overlay {
    /// Creates an unmounted overlay.
    pub fn new(host: impl OverlayHost + 'static, timer: impl Timer + 'static) -> Self {
        Self {
            inner: Rc::new(Inner {
                state: RefCell::new(State::default()),
                host: Box::new(host),
                timer: Box::new(timer),
            }),
        }
    }

    /// Returns `true` between [`Overlay::mount`] and [`Overlay::unmount`].
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.inner.state.borrow().mounted
    }

    /// Returns `true` while the overlay is shown (not fading out).
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.inner.state.borrow().visible
    }

    /// Takes over the page: focus, inert siblings, scrollbar width.
    ///
    /// Does nothing if already mounted.
    pub fn mount(&self) {
        if self.is_mounted() {
            return;
        }
        let host = &self.inner.host;
        let mut cleanup = Vec::new();

        let restore_focus = host.focused_element();
        host.focus_overlay();

        for sibling in host.siblings() {
            if SKIPPED_TAGS
                .iter()
                .any(|tag| tag.eq_ignore_ascii_case(&sibling.tag))
            {
                continue;
            }
            for (name, value) in [(INERT, ""), (ARIA_HIDDEN, "true")] {
                let previous = host.get_attribute(sibling.id, name);
                host.set_attribute(sibling.id, name, value);
                cleanup.push(Cleanup::RestoreAttribute {
                    id: sibling.id,
                    name,
                    previous,
                });
            }
        }
        cleanup.push(Cleanup::RestoreFocus(restore_focus));

        let scrollbar_width = host.scrollbar_width();
        let scrollbar_property = (scrollbar_width > 0.0).then(|| {
            let property = css_var("scrollbar-width");
            host.set_root_style_property(&property, &format!("{scrollbar_width}px"));
            property
        });

        debug!(
            inert_siblings = cleanup.len().saturating_sub(1) / 2,
            scrollbar_width, "overlay mounted"
        );
        let mut state = self.inner.state.borrow_mut();
        state.mounted = true;
        state.visible = true;
        state.cleanup = cleanup;
        state.scrollbar_property = scrollbar_property;
    }

    /// Restores sibling attributes and focus. Safe to call repeatedly.
    pub fn cleanup(&self) {
        let cleanup = core::mem::take(&mut self.inner.state.borrow_mut().cleanup);
        let host = &self.inner.host;
        for step in cleanup {
            match step {
                Cleanup::RestoreAttribute { id, name, previous } => match previous {
                    Some(value) => host.set_attribute(id, name, &value),
                    None => host.remove_attribute(id, name),
                },
                Cleanup::RestoreFocus(Some(id)) => host.focus_element(id),
                Cleanup::RestoreFocus(None) => {}
            }
        }
    }

    /// Starts the exit: restores the page, fades out, and resolves when the
    /// fade ends.
    ///
    /// The returned future resolves on [`Overlay::on_transition_end`], on
    /// [`Overlay::unmount`], or after the host's transition duration plus
    /// [`EXIT_FALLBACK_GRACE`], whichever comes first.
    pub fn exit(&self) -> LocalBoxFuture<'static, Result<(), ExitHookError>> {
        self.cleanup();
        let (sender, receiver) = oneshot::channel();
        {
            let mut state = self.inner.state.borrow_mut();
            state.visible = false;
            state.transition_end = Some(sender);
        }

        let duration = self.inner.host.transition_duration();
        if duration.is_zero() {
            self.inner.state.borrow_mut().transition_end = None;
            return async { Ok(()) }.boxed_local();
        }

        let fallback = duration + EXIT_FALLBACK_GRACE;
        let inner = Rc::clone(&self.inner);
        async move {
            // The fallback timer starts on first poll.
            let timeout = inner.timer.sleep(fallback);
            match select(receiver, timeout).await {
                Either::Left((Ok(()), _)) => debug!("overlay exit transition ended"),
                Either::Left((Err(_), _)) => debug!("overlay unmounted during exit"),
                Either::Right(((), _)) => {
                    warn!(?fallback, "no transition end reported, finishing exit");
                }
            }
            Ok(())
        }
        .boxed_local()
    }

    /// Registers [`Overlay::exit`] as an exit hook on `controller`.
    pub fn register_exit_hook(&self, controller: &Controller) -> ExitHookHandle {
        let overlay = self.clone();
        controller.add_exit_hook(move || overlay.exit())
    }

    /// Reports that the overlay's fade transition finished.
    pub fn on_transition_end(&self) {
        let sender = self.inner.state.borrow_mut().transition_end.take();
        if let Some(sender) = sender {
            // The exit future may already have resolved through the fallback.
            let _ = sender.send(());
        }
    }

    /// Releases the page and drops all overlay state.
    pub fn unmount(&self) {
        if !self.is_mounted() {
            return;
        }
        self.cleanup();
        let property = {
            let mut state = self.inner.state.borrow_mut();
            state.mounted = false;
            state.visible = false;
            state.transition_end = None;
            state.scrollbar_property.take()
        };
        if let Some(property) = property {
            self.inner.host.remove_root_style_property(&property);
        }
        debug!("overlay unmounted");
    }

    /// Returns the attributes to render on the overlay container, or `None`
    /// while unmounted.
    #[must_use]
    pub fn view(&self, class_name: Option<&str>) -> Option<OverlayView> {
        let state = self.inner.state.borrow();
        if !state.mounted {
            return None;
        }
        let portal = css_class("portal");
        let closed = css_class("portal_closed");
        Some(OverlayView {
            role: "dialog",
            aria_modal: true,
            aria_roledescription: "carousel",
            tab_index: -1,
            class_name: clsx([
                Some(portal.as_str()),
                (!state.visible).then_some(closed.as_str()),
                class_name,
            ]),
            visible: state.visible,
            prevent_wheel_default: true,
        })
    }
}

/// Attributes of the overlay container.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OverlayView {
    /// Always `"dialog"`.
    pub role: &'static str,
    /// Always `true`.
    pub aria_modal: bool,
    /// Always `"carousel"`.
    pub aria_roledescription: &'static str,
    /// Always `-1`: focusable from script only.
    pub tab_index: i32,
    /// `loupe__portal`, plus `loupe__portal_closed` while fading out, plus the
    /// consumer's class name.
    pub class_name: String,
    /// `false` while fading out.
    pub visible: bool,
    /// Wheel events on the container should not scroll or overscroll the page.
    pub prevent_wheel_default: bool,
}
