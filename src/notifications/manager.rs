// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `NotificationManager` owns a single toast slot and the two timers of
//! whatever occupies it: the dismissal timer (display time) and the removal
//! timer (exit animation). A new notification supersedes the current one
//! immediately: both timers are cancelled and the old element is removed
//! before the new one is inserted. Timer callbacks also re-check that the slot
//! still tracks their node, so a late firing can never touch a replacement.

use super::notification::{Notification, Phase};
use super::toast::{exit_animation, toast_element, NOTIFICATION_CLASS};
use crate::config::NotificationConfig;
use crate::dom::{Document, NodeId, Selector};
use crate::error::{Error, Result};
use crate::scheduler::{Scheduler, TimerHandle};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

/// Shows one toast at a time on an injected document.
pub struct NotificationManager<D: Document + 'static> {
    core: Rc<Core<D>>,
}

struct Core<D> {
    document: Rc<RefCell<D>>,
    scheduler: Rc<dyn Scheduler>,
    default_duration: Duration,
    exit_duration: Duration,
    exit_animation: String,
    slot: RefCell<Option<Active>>,
}

/// The occupant of the slot.
#[derive(Debug)]
struct Active {
    node: NodeId,
    message: String,
    phase: Phase,
    dismiss_timer: Option<TimerHandle>,
    removal_timer: Option<TimerHandle>,
}

impl<D: Document + 'static> NotificationManager<D> {
    pub fn new(
        document: Rc<RefCell<D>>,
        scheduler: Rc<dyn Scheduler>,
        config: &NotificationConfig,
    ) -> Self {
        Self {
            core: Rc::new(Core {
                document,
                scheduler,
                default_duration: config.default_duration(),
                exit_duration: config.exit_duration(),
                exit_animation: exit_animation(config.exit_duration()),
                slot: RefCell::new(None),
            }),
        }
    }

    /// Shows `message` for the default duration.
    pub fn notify(&self, message: impl Into<String>) {
        self.show(Notification::new(message));
    }

    /// Shows `message` for `duration` before the exit animation starts.
    pub fn notify_for(&self, message: impl Into<String>, duration: Duration) {
        self.show(Notification::new(message).with_duration(duration));
    }

    /// Shows `notification`; failures are logged, never returned.
    pub fn show(&self, notification: Notification) {
        if let Err(err) = self.try_notify(notification) {
            log::warn!("notification not shown: {err}");
        }
    }

    /// Shows `notification` and returns the inserted element.
    ///
    /// Fails with [`Error::EnvironmentUnavailable`] when the document has no
    /// body; the current toast, if any, is left untouched in that case.
    pub fn try_notify(&self, notification: Notification) -> Result<NodeId> {
        let core = &self.core;
        let body = core
            .document
            .borrow()
            .body()
            .ok_or_else(|| Error::missing("document body"))?;

        core.clear();

        let node = {
            let mut document = core.document.borrow_mut();
            let node = document.create_element(toast_element(notification.message()));
            document.append_child(body, node)?;
            node
        };
        *core.slot.borrow_mut() = Some(Active {
            node,
            message: notification.message().to_string(),
            phase: Phase::Entering,
            dismiss_timer: None,
            removal_timer: None,
        });

        let duration = notification.duration_or(core.default_duration);
        let weak = Rc::downgrade(core);
        let handle = core.scheduler.schedule(
            duration,
            Box::new(move || {
                if let Some(core) = weak.upgrade() {
                    Core::begin_exit(&core, node);
                }
            }),
        );
        core.with_active(node, |active| active.dismiss_timer = Some(handle));

        log::debug!(
            "notification {node} shown for {}ms: {:?}",
            duration.as_millis(),
            notification.message()
        );
        Ok(node)
    }

    /// Removes the current toast immediately and cancels its timers.
    ///
    /// Returns whether anything was removed.
    pub fn dismiss_now(&self) -> bool {
        self.core.clear()
    }

    /// The element currently occupying the slot.
    #[must_use]
    pub fn current(&self) -> Option<NodeId> {
        self.core.slot.borrow().as_ref().map(|active| active.node)
    }

    #[must_use]
    pub fn current_message(&self) -> Option<String> {
        self.core
            .slot
            .borrow()
            .as_ref()
            .map(|active| active.message.clone())
    }

    #[must_use]
    pub fn phase(&self) -> Option<Phase> {
        self.core.slot.borrow().as_ref().map(|active| active.phase)
    }

    #[must_use]
    pub fn default_duration(&self) -> Duration {
        self.core.default_duration
    }
}

impl<D: Document + 'static> Clone for NotificationManager<D> {
    fn clone(&self) -> Self {
        Self {
            core: Rc::clone(&self.core),
        }
    }
}

impl<D: Document + 'static> Core<D> {
    /// Runs `update` if the slot still tracks `node`. Returns whether it ran.
    fn with_active(&self, node: NodeId, update: impl FnOnce(&mut Active)) -> bool {
        match self.slot.borrow_mut().as_mut() {
            Some(active) if active.node == node => {
                update(active);
                true
            }
            _ => false,
        }
    }

    /// Dismissal timer: switch to the exit animation and schedule removal.
    fn begin_exit(core: &Rc<Self>, node: NodeId) {
        let tracked = core.with_active(node, |active| {
            active.dismiss_timer = None;
            active.phase = Phase::Exiting;
        });
        if !tracked {
            return;
        }

        if let Some(element) = core.document.borrow_mut().element_mut(node) {
            element.set_style("animation", &core.exit_animation);
        }

        let weak = Rc::downgrade(core);
        let handle = core.scheduler.schedule(
            core.exit_duration,
            Box::new(move || {
                if let Some(core) = weak.upgrade() {
                    core.finish(node);
                }
            }),
        );
        core.with_active(node, |active| active.removal_timer = Some(handle));
    }

    /// Removal timer: drop the element if it still owns the slot.
    fn finish(&self, node: NodeId) {
        let owned = {
            let mut slot = self.slot.borrow_mut();
            if slot.as_ref().is_some_and(|active| active.node == node) {
                slot.take()
            } else {
                None
            }
        };
        if owned.is_some() {
            self.document.borrow_mut().remove(node);
            log::debug!("notification {node} removed");
        }
    }

    /// Empties the slot and removes every toast element in the document.
    fn clear(&self) -> bool {
        let previous = self.slot.borrow_mut().take();
        let mut removed = false;
        let mut document = self.document.borrow_mut();

        if let Some(active) = previous {
            for handle in [active.dismiss_timer, active.removal_timer]
                .into_iter()
                .flatten()
            {
                self.scheduler.cancel(handle);
            }
            removed |= document.remove(active.node);
            log::debug!("notification {} superseded", active.node);
        }

        // Toasts inserted by anything other than this manager.
        for stray in document.query_all(&Selector::class(NOTIFICATION_CLASS)) {
            removed |= document.remove(stray);
        }
        removed
    }
}
