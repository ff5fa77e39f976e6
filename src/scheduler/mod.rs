// SPDX-License-Identifier: MPL-2.0
//! Deferred-callback capability injected into every timed behavior.
//!
//! All work runs on the host's single event loop, so tasks are plain
//! `FnOnce()` closures without a `Send` bound. Two implementations ship:
//!
//! - [`VirtualClock`] - deterministic, advanced by hand (tests, simulation)
//! - [`LocalScheduler`] - real time, backed by a tokio `LocalSet`

mod local;
mod virtual_clock;

pub use local::LocalScheduler;
pub use virtual_clock::VirtualClock;

use std::time::Duration;

/// A unit of deferred work.
pub type Task = Box<dyn FnOnce()>;

/// Identifies one scheduled task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

impl TimerHandle {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw handle value.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Schedules one-shot tasks and cancels them before they fire.
pub trait Scheduler {
    /// Runs `task` once after `delay` has elapsed.
    fn schedule(&self, delay: Duration, task: Task) -> TimerHandle;

    /// Drops a pending task.
    ///
    /// Returns `true` if the task was still pending. Cancelling a task that
    /// already fired, or was already cancelled, returns `false`.
    fn cancel(&self, handle: TimerHandle) -> bool;
}
