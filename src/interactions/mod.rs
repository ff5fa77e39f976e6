// SPDX-License-Identifier: MPL-2.0
//! Page behaviors outside the notification and scroll core.
//!
//! Each behavior collects its elements once, when it is set up, and then
//! reacts to the events the page forwards to it. A behavior whose elements are
//! missing stays inert instead of failing.

pub mod anchors;
pub mod clipboard;
pub mod counter;
pub mod feedback;
pub mod footer;
pub mod forms;
pub mod menu;
pub mod observer;
pub mod reveal;
pub mod skip_link;

pub use anchors::SmoothScroll;
pub use clipboard::{Clipboard, CopyBackends, CopyService, LegacyCopy, COPIED_MESSAGE};
pub use counter::{CounterAnimation, CounterFrame, CounterObserver};
pub use feedback::Feedback;
pub use footer::{current_year, stamp_year, update_footer_year};
pub use forms::{FormGuard, FORM_PLACEHOLDER_MESSAGE};
pub use menu::{Key, MobileMenu};
pub use observer::{IntersectionEntry, OneShotObserver};
pub use reveal::{RevealObserver, FADE_IN_CLASS};
pub use skip_link::SkipLink;

use crate::dom::{Document, NodeId};

/// Returns the first of `candidates` that is `node` or one of its ancestors.
pub(crate) fn closest<D: Document + ?Sized>(
    document: &D,
    node: NodeId,
    candidates: &[NodeId],
) -> Option<NodeId> {
    let mut current = Some(node);
    while let Some(id) = current {
        if candidates.contains(&id) {
            return Some(id);
        }
        current = document.parent(id);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{Element, MemoryDocument};

    #[test]
    fn closest_walks_up_to_a_candidate() {
        let mut doc = MemoryDocument::new();
        let body = doc.body().unwrap();
        let link = doc.append_new(body, Element::new("a")).unwrap();
        let icon = doc.append_new(link, Element::new("span")).unwrap();

        assert_eq!(closest(&doc, icon, &[link]), Some(link));
        assert_eq!(closest(&doc, link, &[link]), Some(link));
        assert_eq!(closest(&doc, body, &[link]), None);
    }
}
