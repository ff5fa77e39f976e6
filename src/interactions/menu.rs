// SPDX-License-Identifier: MPL-2.0
//! Mobile navigation menu.
//!
//! The toggle button and the `.nav-menu` list share an `active` class while
//! the menu is open. While open, keyboard focus is kept inside the menu and
//! Escape closes it.

use super::closest;
use crate::dom::{with_classes, Document, NodeId, Selector, Togglable};
use std::cell::RefCell;
use std::rc::Rc;

const OPEN_CLASS: &str = "active";

/// Keys the menu reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Tab,
    Escape,
    Other(String),
}

impl Key {
    /// Maps a key name as reported by the host (`"Tab"`, `"Escape"`, ...).
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "Tab" => Key::Tab,
            "Escape" | "Esc" => Key::Escape,
            other => Key::Other(other.to_string()),
        }
    }
}

/// State changes of the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Toggle,
    Close,
}

pub struct MobileMenu<D> {
    document: Rc<RefCell<D>>,
    toggle: NodeId,
    menu: NodeId,
    links: Vec<NodeId>,
}

impl<D: Document> MobileMenu<D> {
    /// Finds the toggle and the menu. Returns `None` when either is missing.
    pub fn new(document: Rc<RefCell<D>>) -> Option<Self> {
        let (toggle, menu, links) = {
            let doc = document.borrow();
            let toggle = doc.query(&Selector::class("mobile-menu-toggle"));
            let menu = doc.query(&Selector::class("nav-menu"));
            let (Some(toggle), Some(menu)) = (toggle, menu) else {
                log::debug!("mobile menu disabled: toggle or menu missing");
                return None;
            };
            let links = doc.query_all_within(menu, &Selector::tag("a"));
            (toggle, menu, links)
        };
        Some(Self {
            document,
            toggle,
            menu,
            links,
        })
    }

    /// Applies a state change.
    pub fn update(&self, message: Message) {
        let mut doc = self.document.borrow_mut();
        let open = match message {
            Message::Toggle => {
                with_classes(&mut *doc, self.toggle, |classes| {
                    classes.toggle_class(OPEN_CLASS);
                });
                let mut open = false;
                with_classes(&mut *doc, self.menu, |classes| {
                    open = classes.toggle_class(OPEN_CLASS);
                });
                open
            }
            Message::Close => {
                for node in [self.toggle, self.menu] {
                    with_classes(&mut *doc, node, |classes| classes.remove_class(OPEN_CLASS));
                }
                false
            }
        };
        if let Some(toggle) = doc.element_mut(self.toggle) {
            toggle.set_attr("aria-expanded", open.to_string());
        }
    }

    /// Handles a click anywhere on the page.
    pub fn on_click(&self, target: NodeId) {
        let message = {
            let doc = self.document.borrow();
            if doc.contains(self.toggle, target) {
                Some(Message::Toggle)
            } else if closest(&*doc, target, &self.links).is_some()
                || !doc.contains(self.menu, target)
            {
                Some(Message::Close)
            } else {
                None
            }
        };
        if let Some(message) = message {
            self.update(message);
        }
    }

    /// Handles a key press. Returns `true` when the default action must be
    /// prevented.
    pub fn on_key_down(&self, key: &Key, shift: bool) -> bool {
        if !self.is_open() {
            return false;
        }
        match key {
            Key::Tab => self.wrap_focus(shift),
            Key::Escape => {
                self.update(Message::Close);
                self.document.borrow_mut().focus(self.toggle);
                false
            }
            Key::Other(_) => false,
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.document
            .borrow()
            .element(self.menu)
            .is_some_and(|menu| menu.has_class(OPEN_CLASS))
    }

    #[must_use]
    pub fn toggle(&self) -> NodeId {
        self.toggle
    }

    #[must_use]
    pub fn menu(&self) -> NodeId {
        self.menu
    }

    fn wrap_focus(&self, backwards: bool) -> bool {
        let mut doc = self.document.borrow_mut();
        let focusables = doc.query_all_within(
            self.menu,
            &Selector::any([Selector::tag("a"), Selector::tag("button")]),
        );
        let (Some(&first), Some(&last)) = (focusables.first(), focusables.last()) else {
            return false;
        };
        let (edge, wrap_to) = if backwards {
            (first, last)
        } else {
            (last, first)
        };
        if doc.active_element() == Some(edge) {
            doc.focus(wrap_to);
            true
        } else {
            false
        }
    }
}
