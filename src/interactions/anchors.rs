// SPDX-License-Identifier: MPL-2.0
//! Smooth scrolling for in-page anchor links.

use super::closest;
use crate::dom::{Document, NodeId, ScrollBehavior, Selector};
use std::cell::RefCell;
use std::rc::Rc;

/// Intercepts clicks on `a[href^="#"]` and scrolls the target section just
/// below the fixed navbar.
pub struct SmoothScroll<D> {
    document: Rc<RefCell<D>>,
    links: Vec<NodeId>,
    navbar: Option<NodeId>,
}

impl<D: Document> SmoothScroll<D> {
    pub fn new(document: Rc<RefCell<D>>) -> Self {
        let (links, navbar) = {
            let doc = document.borrow();
            (
                doc.query_all(&Selector::tag("a").and(Selector::attr_prefix("href", "#"))),
                doc.query(&Selector::class("navbar")),
            )
        };
        Self {
            document,
            links,
            navbar,
        }
    }

    /// Handles a click. Returns `true` when the click hit an anchor link, in
    /// which case the default navigation must be prevented.
    pub fn on_click(&self, target: NodeId) -> bool {
        let mut doc = self.document.borrow_mut();
        let Some(link) = closest(&*doc, target, &self.links) else {
            return false;
        };
        let Some(id) = doc
            .element(link)
            .and_then(|link| link.attr("href"))
            .and_then(|href| href.strip_prefix('#'))
            .filter(|id| !id.is_empty())
            .map(str::to_string)
        else {
            return true;
        };

        let Some(section) = doc.query(&Selector::id(&id)) else {
            log::debug!("anchor target #{id} not found");
            return true;
        };
        let top = doc.element(section).map_or(0.0, |s| s.layout().top);
        let navbar_height = self
            .navbar
            .and_then(|navbar| doc.element(navbar))
            .map_or(0.0, |navbar| navbar.layout().height);
        doc.scroll_to(top - navbar_height, ScrollBehavior::Smooth);
        true
    }

    #[must_use]
    pub fn links(&self) -> &[NodeId] {
        &self.links
    }
}
