// SPDX-License-Identifier: MPL-2.0
//! Scroll-driven navbar state.

use super::highlight::NavHighlighter;
use crate::config::ScrollConfig;
use crate::debounce::{debounce, Debounced};
use crate::dom::{with_classes, Document, NodeId, Selector};
use crate::scheduler::Scheduler;
use std::cell::RefCell;
use std::rc::Rc;

/// Marker class of a navbar scrolled past the threshold.
pub const SCROLLED_CLASS: &str = "scrolled";

/// Reacts to scroll events: navbar shadow right away, active nav link on a
/// debounced cadence.
pub struct ScrollReactor<D> {
    document: Rc<RefCell<D>>,
    highlighter: Rc<NavHighlighter<D>>,
    debounced: Debounced<()>,
    navbar: Option<NodeId>,
    scrolled_threshold: f64,
}

impl<D: Document + 'static> ScrollReactor<D> {
    pub fn new(
        document: Rc<RefCell<D>>,
        scheduler: Rc<dyn Scheduler>,
        config: &ScrollConfig,
    ) -> Self {
        let highlighter = Rc::new(NavHighlighter::new(
            Rc::clone(&document),
            config.header_offset(),
        ));
        let navbar = document.borrow().query(&Selector::class("navbar"));
        if navbar.is_none() {
            log::debug!("no .navbar element; scroll shadow disabled");
        }

        let target = Rc::clone(&highlighter);
        let debounced = debounce(scheduler, config.debounce_wait(), move |()| {
            target.recompute();
        });

        Self {
            document,
            highlighter,
            debounced,
            navbar,
            scrolled_threshold: config.scrolled_threshold(),
        }
    }

    /// Establishes the initial state without waiting for the debounce.
    pub fn on_ready(&self) -> Option<String> {
        self.update_navbar_shadow();
        self.highlighter.recompute()
    }

    /// Handles one scroll event.
    pub fn on_scroll(&self) {
        self.update_navbar_shadow();
        self.debounced.call(());
    }

    /// Toggles the navbar shadow. Returns the new state, or `None` without a
    /// navbar.
    pub fn update_navbar_shadow(&self) -> Option<bool> {
        let navbar = self.navbar?;
        let mut document = self.document.borrow_mut();
        let scrolled = document.scroll_y() > self.scrolled_threshold;
        with_classes(&mut *document, navbar, |classes| {
            classes.set_class(SCROLLED_CLASS, scrolled)
        })
        .then_some(scrolled)
    }

    #[must_use]
    pub fn highlighter(&self) -> &NavHighlighter<D> {
        &self.highlighter
    }

    /// Whether a debounced recomputation is waiting to run.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.debounced.is_pending()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{Element, MemoryDocument, Togglable};
    use crate::scheduler::VirtualClock;
    use crate::scroll::ACTIVE_CLASS;
    use std::time::Duration;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    struct Fixture {
        doc: Rc<RefCell<MemoryDocument>>,
        clock: Rc<VirtualClock>,
        navbar: NodeId,
        links: Vec<NodeId>,
    }

    fn fixture() -> Fixture {
        let mut doc = MemoryDocument::new();
        let body = doc.body().unwrap();
        let navbar = doc
            .append_new(body, Element::new("nav").with_class("navbar").with_layout(0.0, 70.0))
            .unwrap();
        let menu = doc
            .append_new(navbar, Element::new("ul").with_class("nav-menu"))
            .unwrap();
        let links = ["home", "about"]
            .iter()
            .map(|id| {
                doc.append_new(menu, Element::new("a").with_attr("href", format!("#{id}")))
                    .unwrap()
            })
            .collect();
        doc.append_new(
            body,
            Element::new("section").with_attr("id", "home").with_layout(0.0, 800.0),
        )
        .unwrap();
        doc.append_new(
            body,
            Element::new("section").with_attr("id", "about").with_layout(800.0, 800.0),
        )
        .unwrap();
        Fixture {
            doc: Rc::new(RefCell::new(doc)),
            clock: Rc::new(VirtualClock::new()),
            navbar,
            links,
        }
    }

    fn reactor(f: &Fixture) -> ScrollReactor<MemoryDocument> {
        ScrollReactor::new(Rc::clone(&f.doc), f.clock.clone(), &ScrollConfig::default())
    }

    fn has_class(doc: &Rc<RefCell<MemoryDocument>>, node: NodeId, class: &str) -> bool {
        doc.borrow().element(node).unwrap().has_class(class)
    }

    #[test]
    fn on_ready_sets_initial_state_without_waiting() {
        let f = fixture();
        let reactor = reactor(&f);
        assert_eq!(reactor.on_ready().as_deref(), Some("home"));
        assert!(has_class(&f.doc, f.links[0], ACTIVE_CLASS));
        assert!(!has_class(&f.doc, f.navbar, SCROLLED_CLASS));
    }

    #[test]
    fn scroll_burst_recomputes_once_after_quiet_period() {
        let f = fixture();
        let reactor = reactor(&f);
        reactor.on_ready();

        for offset in [200.0, 400.0, 650.0, 750.0] {
            f.doc.borrow_mut().set_scroll_y(offset);
            reactor.on_scroll();
            f.clock.advance(ms(5));
        }
        // Navbar shadow follows every event immediately.
        assert!(has_class(&f.doc, f.navbar, SCROLLED_CLASS));
        // Highlight has not moved yet.
        assert!(has_class(&f.doc, f.links[0], ACTIVE_CLASS));
        assert!(reactor.is_pending());

        f.clock.advance(ms(5));
        assert!(!reactor.is_pending());
        assert!(has_class(&f.doc, f.links[1], ACTIVE_CLASS));
        assert!(!has_class(&f.doc, f.links[0], ACTIVE_CLASS));
    }

    #[test]
    fn threshold_is_strict() {
        let f = fixture();
        let reactor = reactor(&f);

        f.doc.borrow_mut().set_scroll_y(50.0);
        assert_eq!(reactor.update_navbar_shadow(), Some(false));
        f.doc.borrow_mut().set_scroll_y(51.0);
        assert_eq!(reactor.update_navbar_shadow(), Some(true));
        f.doc.borrow_mut().set_scroll_y(0.0);
        assert_eq!(reactor.update_navbar_shadow(), Some(false));
    }

    #[test]
    fn missing_navbar_disables_only_the_shadow() {
        let doc = Rc::new(RefCell::new(MemoryDocument::new()));
        let clock = Rc::new(VirtualClock::new());
        let reactor = ScrollReactor::new(Rc::clone(&doc), clock.clone(), &ScrollConfig::default());
        assert_eq!(reactor.update_navbar_shadow(), None);
        reactor.on_scroll();
        clock.advance(ms(10));
        assert_eq!(reactor.on_ready(), None);
    }
}
