// SPDX-License-Identifier: MPL-2.0
//! Toast element construction and the stylesheet fragment it relies on.
//!
//! The toast is a fixed `div.notification` anchored bottom-right. Entrance
//! and exit are CSS keyframe animations, so switching phase is a single
//! inline `animation` change; the rendering engine interpolates.

use crate::dom::{Document, Element, Selector};
use crate::error::{Error, Result};
use std::time::Duration;

/// Class carried by every toast element.
pub const NOTIFICATION_CLASS: &str = "notification";

/// Attribute marking the injected stylesheet so it is only added once.
pub const STYLESHEET_MARKER: &str = "data-folio-styles";

pub const ENTER_ANIMATION: &str = "slideInRight 0.3s ease";
/// Exit animation at the default 300 ms exit duration.
pub const EXIT_ANIMATION: &str = "slideOutRight 0.3s ease";

/// Exit animation lasting exactly `duration`, so the element is removed the
/// moment it finishes sliding out.
#[must_use]
pub fn exit_animation(duration: Duration) -> String {
    let millis = duration.as_millis();
    if millis % 100 == 0 {
        format!("slideOutRight {}s ease", duration.as_secs_f64())
    } else {
        format!("slideOutRight {millis}ms ease")
    }
}

const TOAST_STYLE: &[(&str, &str)] = &[
    ("position", "fixed"),
    ("bottom", "20px"),
    ("right", "20px"),
    ("background-color", "#333"),
    ("color", "white"),
    ("padding", "1rem 1.5rem"),
    ("border-radius", "8px"),
    ("box-shadow", "0 4px 12px rgba(0, 0, 0, 0.3)"),
    ("z-index", "10000"),
];

/// Keyframes for the toast plus the active nav link rule.
pub const STYLESHEET: &str = r"
@keyframes slideInRight {
    from {
        transform: translateX(400px);
        opacity: 0;
    }
    to {
        transform: translateX(0);
        opacity: 1;
    }
}

@keyframes slideOutRight {
    from {
        transform: translateX(0);
        opacity: 1;
    }
    to {
        transform: translateX(400px);
        opacity: 0;
    }
}

.nav-menu a.active {
    background-color: var(--bg-secondary);
    color: var(--primary-color);
}
";

/// Builds a detached toast element showing `message`.
#[must_use]
pub fn toast_element(message: &str) -> Element {
    let mut element = Element::new("div")
        .with_class(NOTIFICATION_CLASS)
        .with_attr("role", "status")
        .with_attr("aria-live", "polite")
        .with_text(message);
    element.set_styles(TOAST_STYLE);
    element.set_style("animation", ENTER_ANIMATION);
    element
}

/// Appends the toast stylesheet to the document head, once.
///
/// Returns `Ok(false)` if it was already installed.
pub fn install_styles<D: Document + ?Sized>(document: &mut D) -> Result<bool> {
    let head = document
        .head()
        .ok_or_else(|| Error::missing("document head"))?;
    if document
        .query(&Selector::tag("style").and(Selector::has_attr(STYLESHEET_MARKER)))
        .is_some()
    {
        return Ok(false);
    }
    let style = document.create_element(
        Element::new("style")
            .with_attr(STYLESHEET_MARKER, "")
            .with_text(STYLESHEET),
    );
    document.append_child(head, style)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{MemoryDocument, Togglable};

    #[test]
    fn toast_element_is_anchored_bottom_right() {
        let element = toast_element("Saved");
        assert!(element.has_class(NOTIFICATION_CLASS));
        assert_eq!(element.text(), "Saved");
        assert_eq!(element.style("position"), Some("fixed"));
        assert_eq!(element.style("bottom"), Some("20px"));
        assert_eq!(element.style("right"), Some("20px"));
        assert_eq!(element.style("animation"), Some(ENTER_ANIMATION));
    }

    #[test]
    fn exit_animation_follows_the_exit_duration() {
        assert_eq!(exit_animation(Duration::from_millis(300)), EXIT_ANIMATION);
        assert_eq!(exit_animation(Duration::from_secs(1)), "slideOutRight 1s ease");
        assert_eq!(
            exit_animation(Duration::from_millis(250)),
            "slideOutRight 250ms ease"
        );
        assert_eq!(exit_animation(Duration::ZERO), "slideOutRight 0s ease");
    }

    #[test]
    fn install_styles_is_idempotent() {
        let mut document = MemoryDocument::new();
        assert_eq!(install_styles(&mut document), Ok(true));
        assert_eq!(install_styles(&mut document), Ok(false));
        assert_eq!(document.query_all(&Selector::tag("style")).len(), 1);
    }

    #[test]
    fn stylesheet_defines_both_animations() {
        assert!(STYLESHEET.contains("@keyframes slideInRight"));
        assert!(STYLESHEET.contains("@keyframes slideOutRight"));
        assert!(STYLESHEET.contains(".nav-menu a.active"));
    }

    #[test]
    fn install_styles_without_head_is_environment_error() {
        let mut document = MemoryDocument::bare();
        assert!(matches!(
            install_styles(&mut document),
            Err(Error::EnvironmentUnavailable(_))
        ));
    }
}
