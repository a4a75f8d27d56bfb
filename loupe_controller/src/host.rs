// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use futures_util::future::LocalBoxFuture;

/// Runs `!Send` tasks on the host's executor.
///
/// Closures taking a [`LocalBoxFuture`] implement this trait, so with tokio a
/// spawner is just `|task| { tokio::task::spawn_local(task); }`.
pub trait Spawner {
    /// Spawns `task` to run to completion in the background.
    fn spawn_local(&self, task: LocalBoxFuture<'static, ()>);
}

impl<F> Spawner for F
where
    F: Fn(LocalBoxFuture<'static, ()>),
{
    fn spawn_local(&self, task: LocalBoxFuture<'static, ()>) {
        self(task);
    }
}

/// Wraps index updates caused by navigation, for example in a browser view
/// transition.
pub trait ViewTransition {
    /// Runs `update`, exactly once.
    fn run(&self, update: &mut dyn FnMut());
}

/// A [`ViewTransition`] that applies updates immediately.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ImmediateTransition;

impl ViewTransition for ImmediateTransition {
    fn run(&self, update: &mut dyn FnMut()) {
        update();
    }
}
