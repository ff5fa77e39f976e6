// SPDX-License-Identifier: MPL-2.0
//! A representative portfolio page, laid out top to bottom.
//!
//! Used by the binary and the tests as a stand-in for a real rendered page.

use crate::dom::{Document, Element, MemoryDocument, NodeId};
use crate::error::{Error, Result};

pub const NAVBAR_HEIGHT: f64 = 70.0;

/// Section ids and their `(top, height)` in px.
pub const SECTIONS: [(&str, f64, f64); 6] = [
    ("home", 0.0, 700.0),
    ("about", 700.0, 600.0),
    ("experience", 1300.0, 900.0),
    ("skills", 2200.0, 700.0),
    ("projects", 2900.0, 800.0),
    ("contact", 3700.0, 500.0),
];

pub const FOOTER_TEXT: &str = "© 2024 Alex Morgan. All rights reserved.";

/// Builds the page.
pub fn portfolio_document() -> Result<MemoryDocument> {
    let mut doc = MemoryDocument::new();
    let body = doc
        .body()
        .ok_or_else(|| Error::missing("document body"))?;

    navbar(&mut doc, body)?;
    for (id, top, height) in SECTIONS {
        let mut element = Element::new("section")
            .with_attr("id", id)
            .with_layout(top, height);
        if id == "home" {
            element = element.with_class("hero");
        }
        let section = doc.append_new(body, element)?;
        match id {
            "home" => hero(&mut doc, section)?,
            "about" => stats(&mut doc, section)?,
            "experience" => timeline(&mut doc, section)?,
            "skills" => skills(&mut doc, section)?,
            "projects" => projects(&mut doc, section)?,
            "contact" => contact(&mut doc, section)?,
            _ => {}
        }
    }
    footer(&mut doc, body)?;
    Ok(doc)
}

fn navbar(doc: &mut MemoryDocument, body: NodeId) -> Result<()> {
    let nav = doc.append_new(
        body,
        Element::new("nav")
            .with_class("navbar")
            .with_layout(0.0, NAVBAR_HEIGHT),
    )?;
    doc.append_new(
        nav,
        Element::new("a")
            .with_class("nav-logo")
            .with_attr("href", "#home")
            .with_text("AM"),
    )?;
    doc.append_new(
        nav,
        Element::new("button")
            .with_class("mobile-menu-toggle")
            .with_attr("aria-label", "Toggle navigation menu")
            .with_attr("aria-expanded", "false"),
    )?;
    let menu = doc.append_new(nav, Element::new("ul").with_class("nav-menu"))?;
    for (id, _, _) in &SECTIONS[1..] {
        let item = doc.append_new(menu, Element::new("li"))?;
        doc.append_new(
            item,
            Element::new("a")
                .with_class("nav-link")
                .with_attr("href", format!("#{id}"))
                .with_text(capitalize(id)),
        )?;
    }
    Ok(())
}

fn hero(doc: &mut MemoryDocument, section: NodeId) -> Result<()> {
    doc.append_new(section, Element::new("h1").with_text("Alex Morgan"))?;
    doc.append_new(
        section,
        Element::new("a")
            .with_class("btn")
            .with_attr("href", "#contact")
            .with_text("Get in touch"),
    )?;
    Ok(())
}

fn stats(doc: &mut MemoryDocument, section: NodeId) -> Result<()> {
    let grid = doc.append_new(section, Element::new("div").with_class("stats"))?;
    for count in ["8", "40", "15"] {
        doc.append_new(
            grid,
            Element::new("span")
                .with_class("stat-number")
                .with_attr("data-count", count)
                .with_text("0"),
        )?;
    }
    Ok(())
}

fn timeline(doc: &mut MemoryDocument, section: NodeId) -> Result<()> {
    for role in ["Staff Engineer", "Senior Engineer", "Engineer"] {
        let item = doc.append_new(section, Element::new("div").with_class("timeline-item"))?;
        doc.append_new(item, Element::new("h3").with_text(role))?;
    }
    Ok(())
}

fn skills(doc: &mut MemoryDocument, section: NodeId) -> Result<()> {
    let groups: [(&str, &[&str]); 2] = [
        ("Languages", &["Rust", "TypeScript", "Python"]),
        ("Infrastructure", &["Linux", "Kubernetes", "PostgreSQL"]),
    ];
    for (title, tags) in groups {
        let category = doc.append_new(section, Element::new("div").with_class("skill-category"))?;
        doc.append_new(category, Element::new("h3").with_text(title))?;
        for tag in tags {
            doc.append_new(
                category,
                Element::new("span").with_class("skill-tag").with_text(*tag),
            )?;
        }
    }
    Ok(())
}

fn projects(doc: &mut MemoryDocument, section: NodeId) -> Result<()> {
    for name in ["tidewatch", "lattice", "quill"] {
        let card = doc.append_new(section, Element::new("article").with_class("project-card"))?;
        doc.append_new(card, Element::new("h3").with_text(name))?;
        doc.append_new(
            card,
            Element::new("a")
                .with_attr("href", format!("https://github.com/alexmorgan/{name}"))
                .with_attr("target", "_blank")
                .with_attr("rel", "noopener noreferrer")
                .with_text("Source"),
        )?;
    }
    Ok(())
}

fn contact(doc: &mut MemoryDocument, section: NodeId) -> Result<()> {
    let form = doc.append_new(section, Element::new("form").with_class("contact-form"))?;
    doc.append_new(
        form,
        Element::new("input")
            .with_attr("type", "email")
            .with_attr("name", "email"),
    )?;
    doc.append_new(
        form,
        Element::new("button")
            .with_attr("type", "submit")
            .with_text("Send"),
    )?;
    Ok(())
}

fn footer(doc: &mut MemoryDocument, body: NodeId) -> Result<()> {
    let footer = doc.append_new(
        body,
        Element::new("footer")
            .with_class("footer")
            .with_layout(4200.0, 120.0),
    )?;
    doc.append_new(footer, Element::new("p").with_text(FOOTER_TEXT))?;
    doc.append_new(footer, Element::new("p").with_text("Made with care in 2024."))?;
    Ok(())
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{Selector, Togglable};

    #[test]
    fn builds_every_part() {
        let doc = portfolio_document().unwrap();
        assert_eq!(doc.query_all(&Selector::tag("section")).len(), SECTIONS.len());
        assert_eq!(doc.query_all(&Selector::class("stat-number")).len(), 3);
        assert_eq!(doc.query_all(&Selector::class("skill-tag")).len(), 6);
        assert_eq!(doc.query_all(&Selector::class("project-card")).len(), 3);
        assert_eq!(
            doc.query_all(&Selector::tag("a").within(Selector::class("nav-menu")))
                .len(),
            SECTIONS.len() - 1
        );
        assert!(doc.query(&Selector::tag("form")).is_some());

        let home = doc.query(&Selector::id("home")).unwrap();
        assert!(doc.element(home).unwrap().has_class("hero"));
    }

    #[test]
    fn capitalize_first_letter() {
        assert_eq!(capitalize("projects"), "Projects");
        assert_eq!(capitalize(""), "");
    }
}
