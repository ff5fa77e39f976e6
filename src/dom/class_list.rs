// SPDX-License-Identifier: MPL-2.0
//! Class-list capability shared by anything that carries presentation markers.

/// Something whose presentation state is expressed as a set of class names.
pub trait Togglable {
    fn add_class(&mut self, class: &str);

    fn remove_class(&mut self, class: &str);

    fn has_class(&self, class: &str) -> bool;

    /// Flips `class` and returns whether it is now present.
    fn toggle_class(&mut self, class: &str) -> bool {
        if self.has_class(class) {
            self.remove_class(class);
            false
        } else {
            self.add_class(class);
            true
        }
    }

    /// Adds `class` when `on`, removes it otherwise.
    fn set_class(&mut self, class: &str, on: bool) {
        if on {
            self.add_class(class);
        } else {
            self.remove_class(class);
        }
    }
}

/// Ordered, duplicate-free list of class names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList(Vec<String>);

impl ClassList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a space-separated `class` attribute value.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        let mut list = Self::new();
        for class in value.split_whitespace() {
            list.add_class(class);
        }
        list
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Togglable for ClassList {
    fn add_class(&mut self, class: &str) {
        if !class.is_empty() && !self.has_class(class) {
            self.0.push(class.to_string());
        }
    }

    fn remove_class(&mut self, class: &str) {
        self.0.retain(|existing| existing != class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.iter().any(|existing| existing == class)
    }
}

impl std::fmt::Display for ClassList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0.join(" "))
    }
}
