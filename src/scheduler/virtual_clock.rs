// SPDX-License-Identifier: MPL-2.0
//! Deterministic scheduler driven by explicit time advancement.

use super::{Scheduler, Task, TimerHandle};
use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

/// A virtual clock that only moves when told to.
///
/// Time starts at zero. Tasks due at the same instant fire in the order they
/// were scheduled. The internal state is never borrowed while a task runs, so
/// tasks may schedule or cancel other tasks.
///
/// # Example
///
/// ```
/// use folio_ui::scheduler::{Scheduler, VirtualClock};
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use std::time::Duration;
///
/// let clock = VirtualClock::new();
/// let fired = Rc::new(Cell::new(false));
/// let flag = Rc::clone(&fired);
/// clock.schedule(Duration::from_millis(10), Box::new(move || flag.set(true)));
///
/// clock.advance(Duration::from_millis(9));
/// assert!(!fired.get());
/// clock.advance(Duration::from_millis(1));
/// assert!(fired.get());
/// ```
#[derive(Default)]
pub struct VirtualClock {
    state: RefCell<ClockState>,
}

#[derive(Default)]
struct ClockState {
    now: Duration,
    next_id: u64,
    /// Pending tasks keyed by (due time, scheduling sequence).
    queue: BTreeMap<(Duration, u64), Task>,
    /// Due time of each pending handle, for cancellation.
    due: HashMap<u64, Duration>,
}

impl VirtualClock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time since creation.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.state.borrow().now
    }

    /// Number of tasks still waiting to fire.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.state.borrow().queue.len()
    }

    /// Moves time forward by `by`, firing every task that falls due.
    pub fn advance(&self, by: Duration) {
        let target = self.now() + by;
        self.advance_to(target);
    }

    /// Moves time forward to `target`, firing every task due at or before it.
    ///
    /// A target in the past leaves the clock where it is.
    pub fn advance_to(&self, target: Duration) {
        self.fire_until(target);
    }

    /// Fires tasks until none remain, moving time to each due instant.
    ///
    /// Returns the number of tasks run.
    pub fn run_until_idle(&self) -> usize {
        let mut ran = 0;
        loop {
            let next = self.state.borrow().queue.keys().next().map(|(due, _)| *due);
            match next {
                Some(due) => ran += self.fire_until(due),
                None => return ran,
            }
        }
    }

    fn fire_until(&self, target: Duration) -> usize {
        let mut ran = 0;
        while let Some((due, task)) = self.pop_due(target) {
            self.state.borrow_mut().now = due;
            task();
            ran += 1;
        }
        let mut state = self.state.borrow_mut();
        if target > state.now {
            state.now = target;
        }
        ran
    }

    fn pop_due(&self, target: Duration) -> Option<(Duration, Task)> {
        let mut state = self.state.borrow_mut();
        let key = *state.queue.keys().next()?;
        if key.0 > target {
            return None;
        }
        let task = state.queue.remove(&key)?;
        state.due.remove(&key.1);
        Some((key.0, task))
    }
}

impl Scheduler for VirtualClock {
    fn schedule(&self, delay: Duration, task: Task) -> TimerHandle {
        let mut state = self.state.borrow_mut();
        let id = state.next_id;
        state.next_id += 1;
        let due = state.now + delay;
        state.queue.insert((due, id), task);
        state.due.insert(id, due);
        TimerHandle::new(id)
    }

    fn cancel(&self, handle: TimerHandle) -> bool {
        let mut state = self.state.borrow_mut();
        match state.due.remove(&handle.value()) {
            Some(due) => state.queue.remove(&(due, handle.value())).is_some(),
            None => false,
        }
    }
}

impl std::fmt::Debug for VirtualClock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("VirtualClock")
            .field("now", &state.now)
            .field("pending", &state.queue.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn recorder() -> (Rc<RefCell<Vec<&'static str>>>, impl Fn(&'static str) -> Task) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        let make = move |label: &'static str| -> Task {
            let sink = Rc::clone(&sink);
            Box::new(move || sink.borrow_mut().push(label))
        };
        (log, make)
    }

    #[test]
    fn tasks_fire_in_due_order() {
        let clock = VirtualClock::new();
        let (log, task) = recorder();
        clock.schedule(ms(30), task("late"));
        clock.schedule(ms(10), task("early"));
        clock.schedule(ms(20), task("middle"));

        clock.advance(ms(100));
        assert_eq!(*log.borrow(), vec!["early", "middle", "late"]);
        assert_eq!(clock.now(), ms(100));
    }

    #[test]
    fn equal_due_times_fire_in_scheduling_order() {
        let clock = VirtualClock::new();
        let (log, task) = recorder();
        clock.schedule(ms(5), task("first"));
        clock.schedule(ms(5), task("second"));

        clock.advance(ms(5));
        assert_eq!(*log.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn task_does_not_fire_before_due() {
        let clock = VirtualClock::new();
        let (log, task) = recorder();
        clock.schedule(ms(10), task("tick"));

        clock.advance(ms(9));
        assert!(log.borrow().is_empty());
        assert_eq!(clock.pending(), 1);
    }

    #[test]
    fn cancelled_task_never_fires() {
        let clock = VirtualClock::new();
        let (log, task) = recorder();
        let handle = clock.schedule(ms(10), task("cancelled"));

        assert!(clock.cancel(handle));
        assert!(!clock.cancel(handle));
        clock.advance(ms(50));
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn cancel_after_fire_returns_false() {
        let clock = VirtualClock::new();
        let (_log, task) = recorder();
        let handle = clock.schedule(ms(1), task("done"));
        clock.advance(ms(1));
        assert!(!clock.cancel(handle));
    }

    #[test]
    fn nested_schedule_fires_within_same_advance() {
        let clock = Rc::new(VirtualClock::new());
        let (log, task) = recorder();
        let inner = task("inner");
        let weak = Rc::downgrade(&clock);
        let outer_log = Rc::clone(&log);
        clock.schedule(
            ms(10),
            Box::new(move || {
                outer_log.borrow_mut().push("outer");
                if let Some(clock) = weak.upgrade() {
                    clock.schedule(ms(10), inner);
                }
            }),
        );

        clock.advance(ms(25));
        assert_eq!(*log.borrow(), vec!["outer", "inner"]);
    }

    #[test]
    fn time_observed_by_task_is_its_due_time() {
        let clock = Rc::new(VirtualClock::new());
        let seen = Rc::new(RefCell::new(None));
        let weak = Rc::downgrade(&clock);
        let slot = Rc::clone(&seen);
        clock.schedule(
            ms(7),
            Box::new(move || {
                *slot.borrow_mut() = weak.upgrade().map(|c| c.now());
            }),
        );

        clock.advance(ms(20));
        assert_eq!(*seen.borrow(), Some(ms(7)));
    }

    #[test]
    fn run_until_idle_drains_queue() {
        let clock = VirtualClock::new();
        let (log, task) = recorder();
        clock.schedule(ms(100), task("a"));
        clock.schedule(ms(3000), task("b"));

        assert_eq!(clock.run_until_idle(), 2);
        assert_eq!(*log.borrow(), vec!["a", "b"]);
        assert_eq!(clock.now(), ms(3000));
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn advance_to_past_is_noop() {
        let clock = VirtualClock::new();
        clock.advance(ms(50));
        clock.advance_to(ms(10));
        assert_eq!(clock.now(), ms(50));
    }
}
