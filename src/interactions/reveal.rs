// SPDX-License-Identifier: MPL-2.0
//! Fade-in of content blocks as they scroll into view.

use super::observer::{IntersectionEntry, OneShotObserver};
use crate::config::RevealConfig;
use crate::dom::{with_classes, Document, NodeId, Selector};
use std::cell::RefCell;
use std::rc::Rc;

pub const FADE_IN_CLASS: &str = "fade-in-up";

const REVEALED_CLASSES: [&str; 3] = ["timeline-item", "skill-category", "project-card"];

pub struct RevealObserver<D> {
    document: Rc<RefCell<D>>,
    observer: OneShotObserver,
}

impl<D: Document> RevealObserver<D> {
    pub fn new(document: Rc<RefCell<D>>, config: &RevealConfig) -> Self {
        let mut observer = OneShotObserver::new(config.threshold());
        let selector = Selector::any(REVEALED_CLASSES.map(Selector::class));
        for node in document.borrow().query_all(&selector) {
            observer.observe(node);
        }
        Self { document, observer }
    }

    /// Adds the fade-in class to every block that just became visible.
    pub fn on_intersection(&mut self, entries: &[IntersectionEntry]) -> Vec<NodeId> {
        let triggered = self.observer.take_triggered(entries);
        let mut doc = self.document.borrow_mut();
        for node in &triggered {
            with_classes(&mut *doc, *node, |classes| classes.add_class(FADE_IN_CLASS));
        }
        triggered
    }

    #[must_use]
    pub fn observed_count(&self) -> usize {
        self.observer.observed_count()
    }
}
