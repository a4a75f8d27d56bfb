// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loupe Controller: navigation and close orchestration for a lightbox.
//!
//! The lightbox index is owned outside the widget. [`Controller`] computes
//! navigation targets under a [`NavigationPolicy`], requests them through the
//! owner's setter, and runs the close protocol:
//!
//! 1. Every registered exit hook is started.
//! 2. All hooks are awaited; failures are logged and otherwise ignored.
//! 3. The hook registry is cleared.
//! 4. The owner's setter is called with `None`.
//!
//! ## Example
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! use futures_util::future::LocalBoxFuture;
//! use loupe_controller::Controller;
//!
//! let index = Rc::new(Cell::new(Some(2)));
//! let setter = Rc::clone(&index);
//! let controller = Controller::new(
//!     3,
//!     index.get(),
//!     move |next| setter.set(next),
//!     |_task: LocalBoxFuture<'static, ()>| {},
//! );
//!
//! // Navigation wraps by default.
//! controller.next();
//! assert_eq!(index.get(), Some(0));
//! controller.sync(3, index.get());
//! controller.prev();
//! assert_eq!(index.get(), Some(2));
//! ```
//!
//! `Controller` is single-threaded: clones share state through `Rc`, and exit
//! hooks are `!Send` futures run on the host's [`Spawner`].

mod controller;
mod error;
mod host;
mod navigation;

pub use controller::{Controller, ExitHook, ExitHookHandle, IndexSetter};
pub use error::ExitHookError;
pub use host::{ImmediateTransition, Spawner, ViewTransition};
pub use navigation::{Direction, NavigationPolicy, step};
