// SPDX-License-Identifier: MPL-2.0
//! Trailing-edge debounce over an injected [`Scheduler`].
//!
//! Every call cancels the pending invocation and schedules a new one `wait`
//! later, so the callback runs once per burst, with the arguments of the last
//! call, after the burst has been quiet for `wait`.

use crate::scheduler::{Scheduler, TimerHandle};
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

/// Wraps `callback` so that bursts of calls collapse into one.
///
/// ```
/// use folio_ui::debounce::debounce;
/// use folio_ui::scheduler::VirtualClock;
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use std::time::Duration;
///
/// let clock = Rc::new(VirtualClock::new());
/// let runs = Rc::new(Cell::new(0));
/// let counter = Rc::clone(&runs);
/// let handler = debounce(clock.clone(), Duration::from_millis(10), move |_: ()| {
///     counter.set(counter.get() + 1);
/// });
///
/// handler.call(());
/// handler.call(());
/// clock.advance(Duration::from_millis(10));
/// assert_eq!(runs.get(), 1);
/// ```
pub fn debounce<A: 'static>(
    scheduler: Rc<dyn Scheduler>,
    wait: Duration,
    callback: impl Fn(A) + 'static,
) -> Debounced<A> {
    Debounced {
        inner: Rc::new(Inner {
            scheduler,
            wait,
            callback: Box::new(callback),
            pending: Cell::new(None),
        }),
    }
}

/// A debounced callable. Clones share the same pending slot.
pub struct Debounced<A> {
    inner: Rc<Inner<A>>,
}

struct Inner<A> {
    scheduler: Rc<dyn Scheduler>,
    wait: Duration,
    callback: Box<dyn Fn(A)>,
    pending: Cell<Option<TimerHandle>>,
}

impl<A: 'static> Debounced<A> {
    /// Restarts the quiet period; `args` replaces those of any pending call.
    pub fn call(&self, args: A) {
        let scheduler = &self.inner.scheduler;
        if let Some(handle) = self.inner.pending.take() {
            scheduler.cancel(handle);
        }

        let weak = Rc::downgrade(&self.inner);
        let handle = scheduler.schedule(
            self.inner.wait,
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.pending.set(None);
                    (inner.callback)(args);
                }
            }),
        );
        self.inner.pending.set(Some(handle));
    }

    /// Drops the pending call, if any. Returns whether one was pending.
    pub fn cancel(&self) -> bool {
        match self.inner.pending.take() {
            Some(handle) => self.inner.scheduler.cancel(handle),
            None => false,
        }
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.inner.pending.get().is_some()
    }

    #[must_use]
    pub fn wait(&self) -> Duration {
        self.inner.wait
    }
}

impl<A> Clone for Debounced<A> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<A> std::fmt::Debug for Debounced<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Debounced")
            .field("wait", &self.inner.wait)
            .field("pending", &self.inner.pending.get())
            .finish()
    }
}
