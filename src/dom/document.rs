// SPDX-License-Identifier: MPL-2.0
//! Document surface the page behaviors read and mutate.
//!
//! [`Document`] is the seam between behavior logic and whatever actually owns
//! the tree. [`MemoryDocument`] is the in-memory implementation used by the
//! simulator and the tests.

use super::element::Element;
use super::selector::Selector;
use crate::error::{Error, Result};
use std::collections::HashMap;
use std::fmt;

/// Identifies one element in a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// How a programmatic scroll should be animated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollBehavior {
    #[default]
    Auto,
    Smooth,
}

pub trait Document {
    /// The `<html>` element.
    fn root(&self) -> NodeId;

    /// The `<head>` element, if present.
    fn head(&self) -> Option<NodeId>;

    /// The `<body>` element, if present.
    fn body(&self) -> Option<NodeId>;

    /// Creates a detached element.
    fn create_element(&mut self, element: Element) -> NodeId;

    /// Moves `child` to the end of `parent`'s children.
    fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<()>;

    /// Moves `child` to the start of `parent`'s children.
    fn prepend_child(&mut self, parent: NodeId, child: NodeId) -> Result<()>;

    /// Removes `node` and its subtree from the document. Returns `false` if
    /// it was not attached.
    fn remove(&mut self, node: NodeId) -> bool;

    fn parent(&self, node: NodeId) -> Option<NodeId>;

    fn children(&self, node: NodeId) -> Vec<NodeId>;

    fn element(&self, node: NodeId) -> Option<&Element>;

    fn element_mut(&mut self, node: NodeId) -> Option<&mut Element>;

    /// Current vertical scroll offset in CSS px.
    fn scroll_y(&self) -> f64;

    fn scroll_to(&mut self, top: f64, behavior: ScrollBehavior);

    fn active_element(&self) -> Option<NodeId>;

    /// Moves focus to `node`. Returns `false` if it is not in the document.
    fn focus(&mut self, node: NodeId) -> bool;

    /// Whether `node` is reachable from the root.
    fn is_connected(&self, node: NodeId) -> bool {
        let root = self.root();
        let mut current = Some(node);
        while let Some(id) = current {
            if id == root {
                return true;
            }
            current = self.parent(id);
        }
        false
    }

    /// Whether `node` is `ancestor` or one of its descendants.
    fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.parent(id);
        }
        false
    }

    /// Connected elements matching `selector`, in document order.
    fn query_all(&self, selector: &Selector) -> Vec<NodeId> {
        self.query_all_within(self.root(), selector)
    }

    /// Descendants of `scope` matching `selector`, in document order.
    fn query_all_within(&self, scope: NodeId, selector: &Selector) -> Vec<NodeId> {
        let mut found = Vec::new();
        let mut stack: Vec<NodeId> = self.children(scope).into_iter().rev().collect();
        while let Some(node) = stack.pop() {
            if selector.matches(self, node) {
                found.push(node);
            }
            stack.extend(self.children(node).into_iter().rev());
        }
        found
    }

    fn query(&self, selector: &Selector) -> Option<NodeId> {
        self.query_all(selector).into_iter().next()
    }
}

#[derive(Debug, Clone)]
struct Node {
    element: Element,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// A document tree held entirely in memory.
///
/// Elements created but not yet inserted stay addressable. Removing a node
/// frees it and its whole subtree, so its id no longer resolves.
#[derive(Debug, Clone)]
pub struct MemoryDocument {
    nodes: HashMap<NodeId, Node>,
    next_id: u64,
    root: NodeId,
    head: Option<NodeId>,
    body: Option<NodeId>,
    scroll_y: f64,
    last_scroll: Option<(f64, ScrollBehavior)>,
    focused: Option<NodeId>,
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDocument {
    /// A document with `<html>`, `<head>` and `<body>`.
    #[must_use]
    pub fn new() -> Self {
        let mut document = Self::bare();
        let head = document.create_element(Element::new("head"));
        let body = document.create_element(Element::new("body"));
        document.attach(document.root, head, false);
        document.attach(document.root, body, false);
        document.head = Some(head);
        document.body = Some(body);
        document
    }

    /// A document with a `<head>` but no `<body>`.
    #[must_use]
    pub fn without_body() -> Self {
        let mut document = Self::bare();
        let head = document.create_element(Element::new("head"));
        document.attach(document.root, head, false);
        document.head = Some(head);
        document
    }

    /// A document with only the `<html>` root.
    #[must_use]
    pub fn bare() -> Self {
        let root = NodeId(0);
        let mut nodes = HashMap::new();
        nodes.insert(
            root,
            Node {
                element: Element::new("html"),
                parent: None,
                children: Vec::new(),
            },
        );
        Self {
            nodes,
            next_id: 1,
            root,
            head: None,
            body: None,
            scroll_y: 0.0,
            last_scroll: None,
            focused: None,
        }
    }

    /// Creates `element` and appends it to `parent`.
    pub fn append_new(&mut self, parent: NodeId, element: Element) -> Result<NodeId> {
        let node = self.create_element(element);
        self.append_child(parent, node)?;
        Ok(node)
    }

    /// Sets the scroll offset as the host would before a scroll event.
    pub fn set_scroll_y(&mut self, offset: f64) {
        self.scroll_y = offset.max(0.0);
    }

    /// Number of elements held, attached or not, including the root.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// The last programmatic scroll request, if any.
    #[must_use]
    pub fn last_scroll_request(&self) -> Option<(f64, ScrollBehavior)> {
        self.last_scroll
    }

    fn attach(&mut self, parent: NodeId, child: NodeId, front: bool) {
        if let Some(node) = self.nodes.get_mut(&child) {
            node.parent = Some(parent);
        }
        if let Some(node) = self.nodes.get_mut(&parent) {
            if front {
                node.children.insert(0, child);
            } else {
                node.children.push(child);
            }
        }
    }

    fn detach(&mut self, child: NodeId) -> bool {
        let Some(parent) = self.nodes.get(&child).and_then(|node| node.parent) else {
            return false;
        };
        if let Some(node) = self.nodes.get_mut(&parent) {
            node.children.retain(|id| *id != child);
        }
        if let Some(node) = self.nodes.get_mut(&child) {
            node.parent = None;
        }
        true
    }

    /// Drops `node` and every descendant from the node map.
    fn purge(&mut self, node: NodeId) {
        let mut stack = vec![node];
        while let Some(id) = stack.pop() {
            if let Some(freed) = self.nodes.remove(&id) {
                stack.extend(freed.children);
            }
        }
    }

    fn insert(&mut self, parent: NodeId, child: NodeId, front: bool) -> Result<()> {
        if !self.nodes.contains_key(&parent) {
            return Err(Error::missing(format!("parent node {parent}")));
        }
        if !self.nodes.contains_key(&child) {
            return Err(Error::missing(format!("child node {child}")));
        }
        if self.contains(child, parent) {
            return Err(Error::missing(format!(
                "cannot insert {child} inside its own subtree"
            )));
        }
        self.detach(child);
        self.attach(parent, child, front);
        Ok(())
    }
}

impl Document for MemoryDocument {
    fn root(&self) -> NodeId {
        self.root
    }

    fn head(&self) -> Option<NodeId> {
        self.head
    }

    fn body(&self) -> Option<NodeId> {
        self.body
    }

    fn create_element(&mut self, element: Element) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        self.nodes.insert(
            id,
            Node {
                element,
                parent: None,
                children: Vec::new(),
            },
        );
        id
    }

    fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        self.insert(parent, child, false)
    }

    fn prepend_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        self.insert(parent, child, true)
    }

    fn remove(&mut self, node: NodeId) -> bool {
        if node == self.root {
            return false;
        }
        if self
            .focused
            .is_some_and(|focused| self.contains(node, focused))
        {
            self.focused = None;
        }
        let attached = self.detach(node);
        if attached {
            self.purge(node);
        }
        attached
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.get(&node).and_then(|node| node.parent)
    }

    fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.nodes
            .get(&node)
            .map(|node| node.children.clone())
            .unwrap_or_default()
    }

    fn element(&self, node: NodeId) -> Option<&Element> {
        self.nodes.get(&node).map(|node| &node.element)
    }

    fn element_mut(&mut self, node: NodeId) -> Option<&mut Element> {
        self.nodes.get_mut(&node).map(|node| &mut node.element)
    }

    fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    fn scroll_to(&mut self, top: f64, behavior: ScrollBehavior) {
        let top = top.max(0.0);
        self.scroll_y = top;
        self.last_scroll = Some((top, behavior));
    }

    fn active_element(&self) -> Option<NodeId> {
        self.focused
    }

    fn focus(&mut self, node: NodeId) -> bool {
        if !self.is_connected(node) {
            return false;
        }
        self.focused = Some(node);
        true
    }
}
