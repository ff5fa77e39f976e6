// SPDX-License-Identifier: MPL-2.0
//! Document capabilities used by the page behaviors.
//!
//! # Components
//!
//! - [`Togglable`] / [`ClassList`] - class-list capability
//! - [`Element`] - tag, classes, attributes, inline style, text, layout
//! - [`Selector`] - structured selectors for one-shot setup queries
//! - [`Document`] / [`MemoryDocument`] - the tree surface and its in-memory form

mod class_list;
mod document;
mod element;
mod selector;

pub use class_list::{ClassList, Togglable};
pub use document::{Document, MemoryDocument, NodeId, ScrollBehavior};
pub use element::{Element, Layout};
pub use selector::Selector;

/// Runs `update` against the element's class list if the node exists.
///
/// Returns `false` when the node is unknown.
pub fn with_classes<D: Document + ?Sized>(
    document: &mut D,
    node: NodeId,
    update: impl FnOnce(&mut dyn Togglable),
) -> bool {
    match document.element_mut(node) {
        Some(element) => {
            update(element);
            true
        }
        None => false,
    }
}
