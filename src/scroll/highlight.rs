// SPDX-License-Identifier: MPL-2.0
//! Active navigation link computation.

use crate::dom::{with_classes, Document, Layout, NodeId, Selector, Togglable};
use std::cell::RefCell;
use std::rc::Rc;

/// Marker class of the highlighted nav link.
pub const ACTIVE_CLASS: &str = "active";

/// A page section as seen by the highlighter.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub layout: Layout,
}

/// Returns the id of the section whose `[top, top + height)` range contains
/// `position`.
///
/// Sections are scanned in document order and a later match overrides an
/// earlier one, so overlapping sections resolve to the last.
#[must_use]
pub fn active_section(sections: &[SectionBounds], position: f64) -> Option<&str> {
    sections
        .iter()
        .filter(|section| section.layout.contains(position))
        .last()
        .map(|section| section.id.as_str())
}

/// Sets or clears the active marker on one link.
pub fn mark_link(link: &mut dyn Togglable, active: bool) {
    link.set_class(ACTIVE_CLASS, active);
}

/// Highlights the nav link of the section under the fixed header.
///
/// Sections (`section[id]`) and nav links (`.nav-menu a[href^="#"]`) are
/// collected once, at construction; their layout and the scroll offset are
/// read live on every pass.
pub struct NavHighlighter<D> {
    document: Rc<RefCell<D>>,
    sections: Vec<NodeId>,
    links: Vec<(NodeId, String)>,
    header_offset: f64,
}

impl<D: Document> NavHighlighter<D> {
    pub fn new(document: Rc<RefCell<D>>, header_offset: f64) -> Self {
        let (sections, links) = {
            let doc = document.borrow();
            let sections = doc.query_all(&Selector::tag("section").and(Selector::has_attr("id")));
            let links: Vec<(NodeId, String)> = doc
                .query_all(&nav_link_selector())
                .into_iter()
                .filter_map(|node| {
                    let href = doc.element(node)?.attr("href")?.to_string();
                    Some((node, href))
                })
                .collect();
            (sections, links)
        };
        log::debug!(
            "nav highlighter tracking {} sections and {} links",
            sections.len(),
            links.len()
        );
        Self {
            document,
            sections,
            links,
            header_offset,
        }
    }

    /// Current bounds of the tracked sections, in document order.
    #[must_use]
    pub fn section_bounds(&self) -> Vec<SectionBounds> {
        let doc = self.document.borrow();
        self.sections
            .iter()
            .filter_map(|node| {
                let element = doc.element(*node)?;
                Some(SectionBounds {
                    id: element.id()?.to_string(),
                    layout: element.layout(),
                })
            })
            .collect()
    }

    /// One recomputation pass. Returns the id of the active section.
    pub fn recompute(&self) -> Option<String> {
        let bounds = self.section_bounds();
        let position = self.document.borrow().scroll_y() + self.header_offset;
        let active = active_section(&bounds, position).map(str::to_string);
        let target = active.as_ref().map(|id| format!("#{id}"));

        let mut doc = self.document.borrow_mut();
        for (link, href) in &self.links {
            let is_active = target.as_deref() == Some(href.as_str());
            with_classes(&mut *doc, *link, |classes| mark_link(classes, is_active));
        }
        active
    }

    #[must_use]
    pub fn links(&self) -> &[(NodeId, String)] {
        &self.links
    }
}

fn nav_link_selector() -> Selector {
    Selector::tag("a")
        .and(Selector::attr_prefix("href", "#"))
        .within(Selector::class("nav-menu"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{ClassList, Element, MemoryDocument};

    fn section(id: &str, top: f64, height: f64) -> SectionBounds {
        SectionBounds {
            id: id.to_string(),
            layout: Layout::new(top, height),
        }
    }

    #[test]
    fn containment_uses_half_open_ranges() {
        let sections = vec![section("about", 0.0, 500.0), section("work", 500.0, 500.0)];
        assert_eq!(active_section(&sections, 499.0), Some("about"));
        assert_eq!(active_section(&sections, 500.0), Some("work"));
        assert_eq!(active_section(&sections, 1000.0), None);
    }

    #[test]
    fn overlapping_sections_resolve_to_last_in_document_order() {
        let sections = vec![section("outer", 0.0, 1000.0), section("inner", 200.0, 100.0)];
        assert_eq!(active_section(&sections, 250.0), Some("inner"));
        assert_eq!(active_section(&sections, 350.0), Some("outer"));
    }

    #[test]
    fn no_sections_means_no_active_link() {
        assert_eq!(active_section(&[], 100.0), None);
    }

    #[test]
    fn mark_link_works_on_any_togglable() {
        let mut classes = ClassList::parse("nav-link");
        mark_link(&mut classes, true);
        assert!(classes.has_class(ACTIVE_CLASS));
        mark_link(&mut classes, false);
        assert!(!classes.has_class(ACTIVE_CLASS));
    }

    fn page() -> (Rc<RefCell<MemoryDocument>>, Vec<NodeId>) {
        let mut doc = MemoryDocument::new();
        let body = doc.body().unwrap();
        let menu = doc
            .append_new(body, Element::new("ul").with_class("nav-menu"))
            .unwrap();
        let mut links = Vec::new();
        for id in ["about", "work", "contact"] {
            links.push(
                doc.append_new(menu, Element::new("a").with_attr("href", format!("#{id}")))
                    .unwrap(),
            );
        }
        for (index, id) in ["about", "work", "contact"].iter().enumerate() {
            doc.append_new(
                body,
                Element::new("section")
                    .with_attr("id", *id)
                    .with_layout(index as f64 * 600.0, 600.0),
            )
            .unwrap();
        }
        (Rc::new(RefCell::new(doc)), links)
    }

    fn active_links(doc: &Rc<RefCell<MemoryDocument>>, links: &[NodeId]) -> Vec<NodeId> {
        let doc = doc.borrow();
        links
            .iter()
            .copied()
            .filter(|link| doc.element(*link).unwrap().has_class(ACTIVE_CLASS))
            .collect()
    }

    #[test]
    fn recompute_marks_exactly_one_link() {
        let (doc, links) = page();
        let highlighter = NavHighlighter::new(Rc::clone(&doc), 100.0);

        doc.borrow_mut().set_scroll_y(0.0);
        assert_eq!(highlighter.recompute().as_deref(), Some("about"));
        assert_eq!(active_links(&doc, &links), vec![links[0]]);

        doc.borrow_mut().set_scroll_y(550.0);
        assert_eq!(highlighter.recompute().as_deref(), Some("work"));
        assert_eq!(active_links(&doc, &links), vec![links[1]]);
    }

    #[test]
    fn recompute_clears_all_links_when_nothing_matches() {
        let (doc, links) = page();
        let highlighter = NavHighlighter::new(Rc::clone(&doc), 100.0);
        highlighter.recompute();
        assert_eq!(active_links(&doc, &links).len(), 1);

        doc.borrow_mut().set_scroll_y(5000.0);
        assert_eq!(highlighter.recompute(), None);
        assert!(active_links(&doc, &links).is_empty());
    }

    #[test]
    fn links_outside_nav_menu_are_ignored() {
        let (doc, _links) = page();
        {
            let mut d = doc.borrow_mut();
            let body = d.body().unwrap();
            d.append_new(body, Element::new("a").with_attr("href", "#about"))
                .unwrap();
        }
        let highlighter = NavHighlighter::new(Rc::clone(&doc), 100.0);
        assert_eq!(highlighter.links().len(), 3);
    }

    #[test]
    fn layout_changes_are_read_live() {
        let (doc, links) = page();
        let highlighter = NavHighlighter::new(Rc::clone(&doc), 0.0);
        {
            let mut d = doc.borrow_mut();
            let contact = d.query(&Selector::id("contact")).unwrap();
            d.element_mut(contact)
                .unwrap()
                .set_layout(Layout::new(0.0, 50.0));
        }
        doc.borrow_mut().set_scroll_y(10.0);
        assert_eq!(highlighter.recompute().as_deref(), Some("contact"));
        assert_eq!(active_links(&doc, &links), vec![links[2]]);
    }
}
