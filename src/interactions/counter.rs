// SPDX-License-Identifier: MPL-2.0
//! Animated statistic counters.
//!
//! Each `.stat-number` carries its final value in `data-count`. When it
//! becomes half visible, its text counts up from zero in fixed frames and
//! lands exactly on the target.

use super::observer::{IntersectionEntry, OneShotObserver};
use crate::config::CounterConfig;
use crate::dom::{Document, NodeId, Selector};
use crate::scheduler::Scheduler;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

pub const COUNTER_CLASS: &str = "stat-number";
pub const COUNT_ATTR: &str = "data-count";

/// What one frame displays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CounterFrame {
    /// Intermediate value; another frame follows.
    Running(f64),
    /// Final value; the animation is over.
    Done(f64),
}

impl CounterFrame {
    /// The text shown for this frame.
    #[must_use]
    pub fn display(&self) -> String {
        match self {
            CounterFrame::Running(value) => format!("{}", value.floor()),
            CounterFrame::Done(target) => format!("{target}"),
        }
    }
}

/// Linear count-up from zero to a target.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterAnimation {
    target: f64,
    increment: f64,
    current: f64,
}

impl CounterAnimation {
    /// Spreads the count over `duration` in frames of `frame`.
    #[must_use]
    pub fn new(target: f64, duration: Duration, frame: Duration) -> Self {
        let frames = duration.as_secs_f64() / frame.as_secs_f64().max(f64::EPSILON);
        let increment = if frames > 0.0 { target / frames } else { target };
        Self {
            target,
            increment,
            current: 0.0,
        }
    }

    /// Advances by one frame.
    pub fn step(&mut self) -> CounterFrame {
        self.current += self.increment;
        // A non-positive increment can never reach the target; finish at once.
        if self.current < self.target && self.increment > 0.0 {
            CounterFrame::Running(self.current)
        } else {
            CounterFrame::Done(self.target)
        }
    }
}

/// Parses a `data-count` value the way a lenient integer parse would:
/// leading whitespace, optional sign, then the leading digits.
#[must_use]
pub fn parse_count(raw: &str) -> Option<f64> {
    let trimmed = raw.trim_start();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1.0, rest),
        None => (1.0, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let value: f64 = digits[..end].parse().ok()?;
    Some(sign * value)
}

/// Watches every counter and animates it on first sight.
pub struct CounterObserver<D> {
    document: Rc<RefCell<D>>,
    scheduler: Rc<dyn Scheduler>,
    observer: OneShotObserver,
    duration: Duration,
    frame: Duration,
}

impl<D: Document + 'static> CounterObserver<D> {
    pub fn new(
        document: Rc<RefCell<D>>,
        scheduler: Rc<dyn Scheduler>,
        config: &CounterConfig,
    ) -> Self {
        let mut observer = OneShotObserver::new(config.threshold());
        for node in document.borrow().query_all(&Selector::class(COUNTER_CLASS)) {
            observer.observe(node);
        }
        Self {
            document,
            scheduler,
            observer,
            duration: config.duration(),
            frame: config.frame_interval(),
        }
    }

    /// Starts the animation of every counter that just became visible.
    pub fn on_intersection(&mut self, entries: &[IntersectionEntry]) -> Vec<NodeId> {
        let triggered = self.observer.take_triggered(entries);
        for node in &triggered {
            self.start(*node);
        }
        triggered
    }

    #[must_use]
    pub fn observed_count(&self) -> usize {
        self.observer.observed_count()
    }

    fn start(&self, node: NodeId) {
        let raw = self
            .document
            .borrow()
            .element(node)
            .and_then(|element| element.attr(COUNT_ATTR).map(str::to_string));
        let Some(target) = raw.as_deref().and_then(parse_count) else {
            log::warn!("counter {node} has no numeric {COUNT_ATTR}: {raw:?}");
            return;
        };
        let animation = CounterAnimation::new(target, self.duration, self.frame);
        run_frame(
            Rc::clone(&self.document),
            Rc::clone(&self.scheduler),
            node,
            animation,
            self.frame,
        );
    }
}

/// Renders one frame now and schedules the next while the count is running.
fn run_frame<D: Document + 'static>(
    document: Rc<RefCell<D>>,
    scheduler: Rc<dyn Scheduler>,
    node: NodeId,
    mut animation: CounterAnimation,
    frame: Duration,
) {
    let shown = animation.step();
    if let Some(element) = document.borrow_mut().element_mut(node) {
        element.set_text(shown.display());
    }
    if let CounterFrame::Running(_) = shown {
        let next = Rc::clone(&scheduler);
        scheduler.schedule(
            frame,
            Box::new(move || run_frame(document, next, node, animation, frame)),
        );
    }
}
