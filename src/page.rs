// SPDX-License-Identifier: MPL-2.0
//! Page composition: wires every behavior to one document and routes host
//! events to them.
//!
//! [`Page::mount`] does the document-ready work once. Afterwards the host
//! forwards each event through [`Page::dispatch`] and honors the returned
//! [`EventOutcome`].

use crate::config::Config;
use crate::dom::{Document, NodeId};
use crate::interactions::{
    current_year, update_footer_year, CopyBackends, CopyService, CounterObserver, Feedback,
    FormGuard, IntersectionEntry, Key, MobileMenu, RevealObserver, SkipLink, SmoothScroll,
};
use crate::notifications::{install_styles, NotificationManager};
use crate::scheduler::Scheduler;
use crate::scroll::ScrollReactor;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

/// Events the host forwards to the page.
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    Click { target: NodeId },
    KeyDown { key: Key, shift: bool },
    Scroll,
    Load,
    Intersection(Vec<IntersectionEntry>),
    Focus { target: NodeId },
    Blur { target: NodeId },
    Submit { target: NodeId },
}

/// What the host must do after an event was handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventOutcome {
    pub default_prevented: bool,
}

impl EventOutcome {
    fn prevented(default_prevented: bool) -> Self {
        Self { default_prevented }
    }
}

pub struct Page<D: Document + 'static> {
    document: Rc<RefCell<D>>,
    notifications: NotificationManager<D>,
    scroll: ScrollReactor<D>,
    menu: Option<MobileMenu<D>>,
    anchors: SmoothScroll<D>,
    counters: CounterObserver<D>,
    reveal: RevealObserver<D>,
    feedback: Feedback<D>,
    forms: FormGuard<D>,
    skip_link: Option<SkipLink>,
    copier: CopyService<D>,
}

impl<D: Document + 'static> Page<D> {
    /// Sets up every behavior on `document`.
    ///
    /// A behavior whose elements are missing is left inert and logged; mounting
    /// itself never fails.
    pub fn mount(
        document: Rc<RefCell<D>>,
        scheduler: Rc<dyn Scheduler>,
        config: &Config,
        backends: CopyBackends,
    ) -> Self {
        let notifications = NotificationManager::new(
            Rc::clone(&document),
            Rc::clone(&scheduler),
            &config.notifications,
        );
        let menu = MobileMenu::new(Rc::clone(&document));
        // Collected before the skip link exists, so it keeps its native jump.
        let anchors = SmoothScroll::new(Rc::clone(&document));
        let counters =
            CounterObserver::new(Rc::clone(&document), Rc::clone(&scheduler), &config.counters);
        let reveal = RevealObserver::new(Rc::clone(&document), &config.reveal);
        let scroll =
            ScrollReactor::new(Rc::clone(&document), Rc::clone(&scheduler), &config.scroll);
        let feedback = Feedback::new(Rc::clone(&document), Rc::clone(&scheduler));
        let forms = FormGuard::new(Rc::clone(&document), notifications.clone());
        let copier = CopyService::new(Rc::clone(&document), notifications.clone(), backends);

        let skip_link = {
            let mut doc = document.borrow_mut();
            update_footer_year(&mut *doc, current_year());
            if let Err(err) = install_styles(&mut *doc) {
                log::warn!("page styles not installed: {err}");
            }
            match SkipLink::install(&mut *doc, &config.accessibility.skip_link_target) {
                Ok(link) => Some(link),
                Err(err) => {
                    log::warn!("skip link not installed: {err}");
                    None
                }
            }
        };

        let active = scroll.on_ready();
        log::debug!(
            "mounted: {} counter(s), {} reveal target(s), {} form(s), active section {active:?}",
            counters.observed_count(),
            reveal.observed_count(),
            forms.forms().len(),
        );
        greet();

        Self {
            document,
            notifications,
            scroll,
            menu,
            anchors,
            counters,
            reveal,
            feedback,
            forms,
            skip_link,
            copier,
        }
    }

    /// Routes one host event to the behaviors interested in it.
    pub fn dispatch(&mut self, event: PageEvent) -> EventOutcome {
        match event {
            PageEvent::Click { target } => {
                // Element handlers run before the document-level menu handler.
                let prevented = self.anchors.on_click(target);
                self.feedback.on_click(target);
                if let Some(menu) = &self.menu {
                    menu.on_click(target);
                }
                EventOutcome::prevented(prevented)
            }
            PageEvent::KeyDown { key, shift } => EventOutcome::prevented(
                self.menu
                    .as_ref()
                    .is_some_and(|menu| menu.on_key_down(&key, shift)),
            ),
            PageEvent::Scroll => {
                self.scroll.on_scroll();
                EventOutcome::default()
            }
            PageEvent::Load => {
                self.feedback.on_load();
                self.scroll.on_ready();
                EventOutcome::default()
            }
            PageEvent::Intersection(entries) => {
                self.counters.on_intersection(&entries);
                self.reveal.on_intersection(&entries);
                EventOutcome::default()
            }
            PageEvent::Focus { target } => {
                if let Some(link) = self.skip_link.filter(|link| link.node() == target) {
                    link.on_focus(&mut *self.document.borrow_mut());
                }
                EventOutcome::default()
            }
            PageEvent::Blur { target } => {
                if let Some(link) = self.skip_link.filter(|link| link.node() == target) {
                    link.on_blur(&mut *self.document.borrow_mut());
                }
                EventOutcome::default()
            }
            PageEvent::Submit { target } => EventOutcome::prevented(self.forms.on_submit(target)),
        }
    }

    /// Shows a toast for the default duration.
    pub fn notify(&self, message: impl Into<String>) {
        self.notifications.notify(message);
    }

    /// Shows a toast for `duration`.
    pub fn notify_for(&self, message: impl Into<String>, duration: Duration) {
        self.notifications.notify_for(message, duration);
    }

    /// Copies `text` and confirms with a toast. Returns whether it was copied.
    pub fn copy_to_clipboard(&self, text: &str) -> bool {
        self.copier.copy(text)
    }

    #[must_use]
    pub fn document(&self) -> &Rc<RefCell<D>> {
        &self.document
    }

    #[must_use]
    pub fn notifications(&self) -> &NotificationManager<D> {
        &self.notifications
    }

    #[must_use]
    pub fn scroll(&self) -> &ScrollReactor<D> {
        &self.scroll
    }

    #[must_use]
    pub fn menu(&self) -> Option<&MobileMenu<D>> {
        self.menu.as_ref()
    }

    #[must_use]
    pub fn skip_link(&self) -> Option<SkipLink> {
        self.skip_link
    }

    #[must_use]
    pub fn counters(&self) -> &CounterObserver<D> {
        &self.counters
    }

    #[must_use]
    pub fn reveal(&self) -> &RevealObserver<D> {
        &self.reveal
    }
}

fn greet() {
    log::info!("👋 Hello, Developer!");
    log::info!("This portfolio was built with HTML, CSS, and JavaScript.");
    log::info!("Feel free to explore the code on GitHub!");
    log::info!("Portfolio website initialized successfully!");
}
