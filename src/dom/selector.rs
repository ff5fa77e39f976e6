// SPDX-License-Identifier: MPL-2.0
//! Structured element selectors.
//!
//! Only the handful of shapes the page behaviors need are supported:
//! tag, class, id, attribute presence/equality/prefix, conjunction,
//! descendant and alternatives.
//!
//! ```
//! use folio_ui::dom::Selector;
//!
//! // `.nav-menu a[href^="#"]`
//! let links = Selector::tag("a")
//!     .and(Selector::attr_prefix("href", "#"))
//!     .within(Selector::class("nav-menu"));
//! # let _ = links;
//! ```

use super::class_list::Togglable;
use super::document::{Document, NodeId};
use super::element::Element;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    Tag(String),
    Class(String),
    Id(String),
    HasAttr(String),
    AttrEquals(String, String),
    AttrPrefix(String, String),
    /// All selectors match the same element.
    All(Vec<Selector>),
    /// Any selector matches (a `,` list).
    Any(Vec<Selector>),
    /// The second selector matches an element with an ancestor matching the first.
    Descendant(Box<Selector>, Box<Selector>),
}

impl Selector {
    pub fn tag(tag: &str) -> Self {
        Selector::Tag(tag.to_ascii_lowercase())
    }

    pub fn class(class: &str) -> Self {
        Selector::Class(class.to_string())
    }

    pub fn id(id: &str) -> Self {
        Selector::Id(id.to_string())
    }

    pub fn has_attr(name: &str) -> Self {
        Selector::HasAttr(name.to_string())
    }

    pub fn attr_eq(name: &str, value: &str) -> Self {
        Selector::AttrEquals(name.to_string(), value.to_string())
    }

    pub fn attr_prefix(name: &str, prefix: &str) -> Self {
        Selector::AttrPrefix(name.to_string(), prefix.to_string())
    }

    pub fn any(selectors: impl IntoIterator<Item = Selector>) -> Self {
        Selector::Any(selectors.into_iter().collect())
    }

    /// Conjunction with another selector on the same element.
    #[must_use]
    pub fn and(self, other: Selector) -> Self {
        match self {
            Selector::All(mut parts) => {
                parts.push(other);
                Selector::All(parts)
            }
            first => Selector::All(vec![first, other]),
        }
    }

    /// Restricts matches to descendants of elements matching `ancestor`.
    #[must_use]
    pub fn within(self, ancestor: Selector) -> Self {
        Selector::Descendant(Box::new(ancestor), Box::new(self))
    }

    /// Tests the element alone, ignoring ancestry.
    #[must_use]
    pub fn matches_element(&self, element: &Element) -> Option<bool> {
        let matched = match self {
            Selector::Tag(tag) => element.tag() == tag,
            Selector::Class(class) => element.has_class(class),
            Selector::Id(id) => element.id() == Some(id.as_str()),
            Selector::HasAttr(name) => element.has_attr(name),
            Selector::AttrEquals(name, value) => element.attr(name) == Some(value.as_str()),
            Selector::AttrPrefix(name, prefix) => element
                .attr(name)
                .is_some_and(|value| value.starts_with(prefix.as_str())),
            Selector::All(parts) => {
                let mut all = true;
                for part in parts {
                    match part.matches_element(element) {
                        Some(true) => {}
                        Some(false) => return Some(false),
                        None => all = false,
                    }
                }
                if !all {
                    return None;
                }
                true
            }
            Selector::Any(_) | Selector::Descendant(..) => return None,
        };
        Some(matched)
    }

    /// Tests `node` in the context of `document`.
    pub fn matches(&self, document: &(impl Document + ?Sized), node: NodeId) -> bool {
        let Some(element) = document.element(node) else {
            return false;
        };
        match self {
            Selector::All(parts) => parts.iter().all(|part| part.matches(document, node)),
            Selector::Any(parts) => parts.iter().any(|part| part.matches(document, node)),
            Selector::Descendant(ancestor, inner) => {
                if !inner.matches(document, node) {
                    return false;
                }
                let mut current = document.parent(node);
                while let Some(parent) = current {
                    if ancestor.matches(document, parent) {
                        return true;
                    }
                    current = document.parent(parent);
                }
                false
            }
            simple => simple.matches_element(element).unwrap_or(false),
        }
    }
}
