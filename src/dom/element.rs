// SPDX-License-Identifier: MPL-2.0
//! Element data: tag, classes, attributes, inline style, text and layout box.

use super::class_list::{ClassList, Togglable};
use std::collections::BTreeMap;

/// Position and height of an element's border box, in CSS px from the
/// top of the document.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Layout {
    pub top: f64,
    pub height: f64,
}

impl Layout {
    #[must_use]
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    /// Whether `position` lies in `[top, top + height)`.
    #[must_use]
    pub fn contains(&self, position: f64) -> bool {
        position >= self.top && position < self.top + self.height
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    tag: String,
    classes: ClassList,
    attributes: BTreeMap<String, String>,
    style: BTreeMap<String, String>,
    text: String,
    layout: Layout,
}

impl Element {
    /// Creates an element; tag names are stored lowercase.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into().to_ascii_lowercase(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    #[must_use]
    pub fn with_attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    #[must_use]
    pub fn with_layout(mut self, top: f64, height: f64) -> Self {
        self.layout = Layout::new(top, height);
        self
    }

    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    #[must_use]
    pub fn classes(&self) -> &ClassList {
        &self.classes
    }

    /// The `id` attribute, if any.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.attr("id")
    }

    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn has_attr(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    pub fn set_attr(&mut self, name: &str, value: impl Into<String>) {
        self.attributes.insert(name.to_string(), value.into());
    }

    pub fn remove_attr(&mut self, name: &str) {
        self.attributes.remove(name);
    }

    /// Inline style property value.
    #[must_use]
    pub fn style(&self, property: &str) -> Option<&str> {
        self.style.get(property).map(String::as_str)
    }

    /// Sets an inline style property; an empty value clears it.
    pub fn set_style(&mut self, property: &str, value: impl Into<String>) {
        let value = value.into();
        if value.is_empty() {
            self.style.remove(property);
        } else {
            self.style.insert(property.to_string(), value);
        }
    }

    pub fn set_styles(&mut self, declarations: &[(&str, &str)]) {
        for (property, value) in declarations {
            self.set_style(property, *value);
        }
    }

    /// Inline style serialized as a `style` attribute value.
    #[must_use]
    pub fn style_text(&self) -> String {
        self.style
            .iter()
            .map(|(property, value)| format!("{property}: {value};"))
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    #[must_use]
    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn set_layout(&mut self, layout: Layout) {
        self.layout = layout;
    }
}

impl Togglable for Element {
    fn add_class(&mut self, class: &str) {
        self.classes.add_class(class);
    }

    fn remove_class(&mut self, class: &str) {
        self.classes.remove_class(class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes.has_class(class)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_range_is_half_open() {
        let layout = Layout::new(100.0, 50.0);
        assert!(layout.contains(100.0));
        assert!(layout.contains(149.9));
        assert!(!layout.contains(150.0));
        assert!(!layout.contains(99.9));
    }

    #[test]
    fn empty_style_value_clears_property() {
        let mut element = Element::new("span");
        element.set_style("transform", "scale(0.95)");
        assert_eq!(element.style("transform"), Some("scale(0.95)"));
        element.set_style("transform", "");
        assert!(element.style("transform").is_none());
    }

    #[test]
    fn builder_sets_tag_lowercase_and_attributes() {
        let element = Element::new("SECTION")
            .with_attr("id", "about")
            .with_class("section")
            .with_layout(0.0, 400.0);
        assert_eq!(element.tag(), "section");
        assert_eq!(element.id(), Some("about"));
        assert!(element.has_class("section"));
        assert_eq!(element.layout().height, 400.0);
    }

    #[test]
    fn style_text_lists_declarations() {
        let mut element = Element::new("div");
        element.set_styles(&[("opacity", "0"), ("position", "fixed")]);
        assert_eq!(element.style_text(), "opacity: 0; position: fixed;");
    }
}
