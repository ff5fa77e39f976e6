// SPDX-License-Identifier: MPL-2.0
//! Scroll-derived navigation state.
//!
//! - [`highlight`] - which nav link is active for the current scroll offset
//! - [`reactor`] - scroll event handling: immediate navbar shadow, debounced
//!   highlight

pub mod highlight;
pub mod reactor;

pub use highlight::{active_section, mark_link, NavHighlighter, SectionBounds, ACTIVE_CLASS};
pub use reactor::{ScrollReactor, SCROLLED_CLASS};
