// SPDX-License-Identifier: MPL-2.0
//! "Skip to main content" link for keyboard users.
//!
//! The link sits above the viewport until it receives focus.

use crate::dom::{Document, Element, NodeId};
use crate::error::{Error, Result};

pub const SKIP_LINK_CLASS: &str = "skip-link";
pub const SKIP_LINK_TEXT: &str = "Skip to main content";

const HIDDEN_TOP: &str = "-40px";
const SHOWN_TOP: &str = "0";

const SKIP_LINK_STYLE: &[(&str, &str)] = &[
    ("position", "absolute"),
    ("top", HIDDEN_TOP),
    ("left", "0"),
    ("background", "var(--primary-color)"),
    ("color", "white"),
    ("padding", "8px"),
    ("text-decoration", "none"),
    ("z-index", "10001"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkipLink {
    node: NodeId,
}

impl SkipLink {
    /// Inserts the link as the first child of the body.
    pub fn install<D: Document + ?Sized>(document: &mut D, target: &str) -> Result<Self> {
        let body = document.body().ok_or_else(|| Error::missing("document body"))?;
        let mut element = Element::new("a")
            .with_class(SKIP_LINK_CLASS)
            .with_attr("href", target)
            .with_text(SKIP_LINK_TEXT);
        element.set_styles(SKIP_LINK_STYLE);
        let node = document.create_element(element);
        document.prepend_child(body, node)?;
        Ok(Self { node })
    }

    #[must_use]
    pub fn node(&self) -> NodeId {
        self.node
    }

    /// Reveals the link.
    pub fn on_focus<D: Document + ?Sized>(&self, document: &mut D) {
        self.set_top(document, SHOWN_TOP);
    }

    /// Hides the link again.
    pub fn on_blur<D: Document + ?Sized>(&self, document: &mut D) {
        self.set_top(document, HIDDEN_TOP);
    }

    fn set_top<D: Document + ?Sized>(&self, document: &mut D, top: &str) {
        if let Some(element) = document.element_mut(self.node) {
            element.set_style("top", top);
        }
    }
}
