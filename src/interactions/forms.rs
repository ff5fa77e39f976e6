// SPDX-License-Identifier: MPL-2.0
//! Placeholder handling for form submissions.

use super::closest;
use crate::dom::{Document, NodeId, Selector};
use crate::notifications::NotificationManager;
use std::cell::RefCell;
use std::rc::Rc;

pub const FORM_PLACEHOLDER_MESSAGE: &str = "Form submission functionality would go here!";

/// Keeps forms from navigating away and tells the visitor why.
pub struct FormGuard<D: Document + 'static> {
    document: Rc<RefCell<D>>,
    notifications: NotificationManager<D>,
    forms: Vec<NodeId>,
}

impl<D: Document + 'static> FormGuard<D> {
    pub fn new(document: Rc<RefCell<D>>, notifications: NotificationManager<D>) -> Self {
        let forms = document.borrow().query_all(&Selector::tag("form"));
        Self {
            document,
            notifications,
            forms,
        }
    }

    /// Handles a submit event. Returns `true` when it came from a guarded
    /// form, in which case the default submission must be prevented.
    pub fn on_submit(&self, target: NodeId) -> bool {
        let guarded = closest(&*self.document.borrow(), target, &self.forms).is_some();
        if guarded {
            self.notifications.notify(FORM_PLACEHOLDER_MESSAGE);
        }
        guarded
    }

    #[must_use]
    pub fn forms(&self) -> &[NodeId] {
        &self.forms
    }
}
