// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::cell::RefCell;
use core::fmt;
use core::future::Future;
use std::rc::{Rc, Weak};

use futures_util::FutureExt;
use futures_util::future::{LocalBoxFuture, join_all};
use tracing::{debug, warn};

use crate::error::ExitHookError;
use crate::host::{ImmediateTransition, Spawner, ViewTransition};
use crate::navigation::{Direction, NavigationPolicy, step};

/// An asynchronous callback awaited before the lightbox finishes closing.
pub type ExitHook = Rc<dyn Fn() -> LocalBoxFuture<'static, Result<(), ExitHookError>>>;

/// Setter through which the controller requests index changes from the owner.
pub type IndexSetter = Box<dyn Fn(Option<usize>)>;

struct State {
    len: usize,
    index: Option<usize>,
    policy: NavigationPolicy,
    hooks: Vec<(u64, ExitHook)>,
    next_hook_id: u64,
    closing: bool,
}

struct Inner {
    state: RefCell<State>,
    transition: RefCell<Rc<dyn ViewTransition>>,
    set_index: IndexSetter,
    spawner: Box<dyn Spawner>,
}

/// Navigation and close controller for one lightbox instance.
///
/// The owner keeps the authoritative index. The controller requests changes
/// through the owner's setter and learns about the outcome from
/// [`Controller::sync`].
///
/// `Controller` is a cheap handle: clones share the same state.
#[derive(Clone)]
pub struct Controller {
    inner: Rc<Inner>,
}

impl fmt::Debug for Controller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.inner.state.borrow();
        f.debug_struct("Controller")
            .field("len", &state.len)
            .field("index", &state.index)
            .field("policy", &state.policy)
            .field("exit_hooks", &state.hooks.len())
            .field("closing", &state.closing)
            .finish_non_exhaustive()
    }
}

impl Controller {
    /// Creates a controller for `len` slides currently at `index`.
    pub fn new(
        len: usize,
        index: Option<usize>,
        set_index: impl Fn(Option<usize>) + 'static,
        spawner: impl Spawner + 'static,
    ) -> Self {
        Self {
            inner: Rc::new(Inner {
                state: RefCell::new(State {
                    len,
                    index,
                    policy: NavigationPolicy::default(),
                    hooks: Vec::new(),
                    next_hook_id: 0,
                    closing: false,
                }),
                transition: RefCell::new(Rc::new(ImmediateTransition)),
                set_index: Box::new(set_index),
                spawner: Box::new(spawner),
            }),
        }
    }

    /// Sets the boundary policy.
    pub fn set_policy(&self, policy: NavigationPolicy) {
        self.inner.state.borrow_mut().policy = policy;
    }

    /// Returns the boundary policy.
    #[must_use]
    pub fn policy(&self) -> NavigationPolicy {
        self.inner.state.borrow().policy
    }

    /// Replaces the transition that wraps navigation updates.
    pub fn set_transition(&self, transition: impl ViewTransition + 'static) {
        *self.inner.transition.borrow_mut() = Rc::new(transition);
    }

    /// Updates the slide count and index after the owner changed them.
    pub fn sync(&self, len: usize, index: Option<usize>) {
        let mut state = self.inner.state.borrow_mut();
        state.len = len;
        state.index = index;
    }

    /// Returns the slide count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.state.borrow().len
    }

    /// Returns `true` if there are no slides.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the index last reported through [`Controller::sync`].
    #[must_use]
    pub fn index(&self) -> Option<usize> {
        self.inner.state.borrow().index
    }

    /// Returns `true` if the index points at a slide.
    #[must_use]
    pub fn is_open(&self) -> bool {
        let state = self.inner.state.borrow();
        state.index.is_some_and(|index| index < state.len)
    }

    /// Returns `true` while a close is awaiting its exit hooks.
    #[must_use]
    pub fn is_closing(&self) -> bool {
        self.inner.state.borrow().closing
    }

    /// Returns `true` if [`Controller::prev`] would change the index.
    #[must_use]
    pub fn can_prev(&self) -> bool {
        self.target(Direction::Prev).is_some()
    }

    /// Returns `true` if [`Controller::next`] would change the index.
    #[must_use]
    pub fn can_next(&self) -> bool {
        self.target(Direction::Next).is_some()
    }

    /// Requests the previous slide.
    pub fn prev(&self) {
        self.navigate(Direction::Prev);
    }

    /// Requests the next slide.
    pub fn next(&self) {
        self.navigate(Direction::Next);
    }

    /// Registers a hook to await on close.
    ///
    /// Hooks run on every close until removed. All hooks are dropped once a
    /// close completes.
    pub fn add_exit_hook<F, Fut>(&self, hook: F) -> ExitHookHandle
    where
        F: Fn() -> Fut + 'static,
        Fut: Future<Output = Result<(), ExitHookError>> + 'static,
    {
        let hook: ExitHook = Rc::new(move || hook().boxed_local());
        let mut state = self.inner.state.borrow_mut();
        let id = state.next_hook_id;
        state.next_hook_id += 1;
        state.hooks.push((id, hook));
        ExitHookHandle {
            inner: Rc::downgrade(&self.inner),
            id,
        }
    }

    /// Returns the number of registered exit hooks.
    #[must_use]
    pub fn exit_hook_count(&self) -> usize {
        self.inner.state.borrow().hooks.len()
    }

    /// Starts closing on the host's spawner and returns immediately.
    ///
    /// Ignored while a close is already in flight.
    pub fn close(&self) {
        if !self.begin_close() {
            return;
        }
        let this = self.clone();
        self.inner
            .spawner
            .spawn_local(async move { this.finish_close().await }.boxed_local());
    }

    /// Closes and resolves once the owner has been told the lightbox is closed.
    ///
    /// Resolves immediately, without effect, while a close is already in flight.
    pub async fn close_async(&self) {
        if self.begin_close() {
            self.finish_close().await;
        }
    }

    fn begin_close(&self) -> bool {
        let mut state = self.inner.state.borrow_mut();
        if state.closing {
            debug!("close already in progress");
            return false;
        }
        state.closing = true;
        true
    }

    async fn finish_close(&self) {
        let hooks: Vec<ExitHook> = self
            .inner
            .state
            .borrow()
            .hooks
            .iter()
            .map(|(_, hook)| Rc::clone(hook))
            .collect();
        debug!(exit_hooks = hooks.len(), "closing lightbox");

        let results = join_all(hooks.iter().map(|hook| hook())).await;
        for error in results.into_iter().filter_map(Result::err) {
            warn!(%error, "exit hook failed, closing anyway");
        }

        {
            let mut state = self.inner.state.borrow_mut();
            state.hooks.clear();
            state.closing = false;
        }
        (self.inner.set_index)(None);
    }

    fn target(&self, direction: Direction) -> Option<usize> {
        let state = self.inner.state.borrow();
        step(state.index, state.len, state.policy, direction)
    }

    fn navigate(&self, direction: Direction) {
        let Some(target) = self.target(direction) else {
            return;
        };
        debug!(?direction, target, "navigate");
        let transition = Rc::clone(&self.inner.transition.borrow());
        let set_index = &self.inner.set_index;
        transition.run(&mut || set_index(Some(target)));
    }
}

/// Registration of an exit hook; see [`Controller::add_exit_hook`].
///
/// Dropping the handle keeps the hook registered.
#[derive(Debug)]
pub struct ExitHookHandle {
    inner: Weak<Inner>,
    id: u64,
}

impl ExitHookHandle {
    /// Deregisters the hook. Does nothing if the controller is gone or the
    /// hook was already cleared by a close.
    pub fn remove(self) {
        if let Some(inner) = self.inner.upgrade() {
            inner.state.borrow_mut().hooks.retain(|(id, _)| *id != self.id);
        }
    }
}

impl fmt::Debug for Inner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Inner").finish_non_exhaustive()
    }
}
