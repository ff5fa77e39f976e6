// SPDX-License-Identifier: MPL-2.0
//! Real-time scheduler running tasks on a tokio `LocalSet`.

use super::{Scheduler, Task, TimerHandle};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Schedules tasks as local tokio tasks that sleep, then run.
///
/// Must be used from inside a [`tokio::task::LocalSet`]; `schedule` panics
/// otherwise, like `tokio::task::spawn_local`.
#[derive(Debug, Default)]
pub struct LocalScheduler {
    next_id: Cell<u64>,
    pending: Rc<RefCell<HashMap<u64, JoinHandle<()>>>>,
}

impl LocalScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tasks that have neither fired nor been cancelled.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending.borrow().len()
    }
}

impl Scheduler for LocalScheduler {
    fn schedule(&self, delay: Duration, task: Task) -> TimerHandle {
        let id = self.next_id.get();
        self.next_id.set(id + 1);

        let pending = Rc::clone(&self.pending);
        let join = tokio::task::spawn_local(async move {
            tokio::time::sleep(delay).await;
            pending.borrow_mut().remove(&id);
            task();
        });
        // The spawned task cannot run before this insert: it only starts once
        // the caller yields back to the LocalSet.
        self.pending.borrow_mut().insert(id, join);
        TimerHandle::new(id)
    }

    fn cancel(&self, handle: TimerHandle) -> bool {
        match self.pending.borrow_mut().remove(&handle.value()) {
            Some(join) => {
                join.abort();
                true
            }
            None => false,
        }
    }
}

impl Drop for LocalScheduler {
    fn drop(&mut self) {
        for (_, join) in self.pending.borrow_mut().drain() {
            join.abort();
        }
    }
}
