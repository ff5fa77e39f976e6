// SPDX-License-Identifier: MPL-2.0
//! Copy-to-clipboard with a legacy fallback.
//!
//! The modern path writes straight to the system clipboard. Without it, the
//! text is placed in an off-screen `textarea` and copied from there, which is
//! all an older host can do.

use crate::dom::{Document, Element};
use crate::error::{Error, Result};
use crate::notifications::NotificationManager;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

pub const COPIED_MESSAGE: &str = "Copied to clipboard!";

/// A system clipboard that accepts text directly.
pub trait Clipboard {
    fn write_text(&self, text: &str) -> Result<()>;
}

/// The host's copy-the-selection command.
pub trait LegacyCopy {
    /// Copies `selected`, the content of the selected textarea.
    fn copy_selection(&self, selected: &str) -> Result<()>;
}

/// Copy capabilities offered by the host. Either may be absent.
#[derive(Clone, Default)]
pub struct CopyBackends {
    pub modern: Option<Rc<dyn Clipboard>>,
    pub legacy: Option<Rc<dyn LegacyCopy>>,
}

impl fmt::Debug for CopyBackends {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CopyBackends")
            .field("modern", &self.modern.is_some())
            .field("legacy", &self.legacy.is_some())
            .finish()
    }
}

pub struct CopyService<D: Document + 'static> {
    document: Rc<RefCell<D>>,
    notifications: NotificationManager<D>,
    backends: CopyBackends,
}

impl<D: Document + 'static> CopyService<D> {
    pub fn new(
        document: Rc<RefCell<D>>,
        notifications: NotificationManager<D>,
        backends: CopyBackends,
    ) -> Self {
        Self {
            document,
            notifications,
            backends,
        }
    }

    /// Copies `text` and confirms with a toast. Failures are logged only.
    ///
    /// Returns whether the text was copied.
    pub fn copy(&self, text: &str) -> bool {
        match self.try_copy(text) {
            Ok(()) => {
                self.notifications.notify(COPIED_MESSAGE);
                true
            }
            Err(err) => {
                log::error!("Failed to copy: {err}");
                false
            }
        }
    }

    fn try_copy(&self, text: &str) -> Result<()> {
        if let Some(clipboard) = &self.backends.modern {
            return clipboard.write_text(text);
        }
        match &self.backends.legacy {
            Some(legacy) => self.copy_through_textarea(legacy.as_ref(), text),
            None => Err(Error::ClipboardUnavailable(
                "no clipboard capability".to_string(),
            )),
        }
    }

    fn copy_through_textarea(&self, legacy: &dyn LegacyCopy, text: &str) -> Result<()> {
        let textarea = {
            let mut doc = self.document.borrow_mut();
            let body = doc.body().ok_or_else(|| Error::missing("document body"))?;
            let mut element = Element::new("textarea").with_text(text);
            element.set_styles(&[("position", "fixed"), ("opacity", "0")]);
            let node = doc.create_element(element);
            doc.append_child(body, node)?;
            node
        };
        let selected = self
            .document
            .borrow()
            .element(textarea)
            .map(|element| element.text().to_string())
            .unwrap_or_default();
        let result = legacy.copy_selection(&selected);
        self.document.borrow_mut().remove(textarea);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NotificationConfig;
    use crate::dom::{MemoryDocument, Selector};
    use crate::scheduler::VirtualClock;

    #[derive(Default)]
    struct FakeClipboard {
        written: RefCell<Vec<String>>,
        fail: bool,
    }

    impl Clipboard for FakeClipboard {
        fn write_text(&self, text: &str) -> Result<()> {
            if self.fail {
                return Err(Error::ClipboardUnavailable("permission denied".to_string()));
            }
            self.written.borrow_mut().push(text.to_string());
            Ok(())
        }
    }

    /// Records the selection and how many textareas were attached at the
    /// moment of copying.
    struct FakeLegacy {
        document: Rc<RefCell<MemoryDocument>>,
        copied: RefCell<Vec<(String, usize)>>,
        fail: bool,
    }

    impl LegacyCopy for FakeLegacy {
        fn copy_selection(&self, selected: &str) -> Result<()> {
            let attached = self
                .document
                .borrow()
                .query_all(&Selector::tag("textarea"))
                .len();
            self.copied.borrow_mut().push((selected.to_string(), attached));
            if self.fail {
                Err(Error::ClipboardUnavailable("copy command rejected".to_string()))
            } else {
                Ok(())
            }
        }
    }

    fn service(
        doc: &Rc<RefCell<MemoryDocument>>,
        backends: CopyBackends,
    ) -> (CopyService<MemoryDocument>, NotificationManager<MemoryDocument>) {
        let clock = Rc::new(VirtualClock::new());
        let notifications =
            NotificationManager::new(Rc::clone(doc), clock, &NotificationConfig::default());
        (
            CopyService::new(Rc::clone(doc), notifications.clone(), backends),
            notifications,
        )
    }

    #[test]
    fn modern_clipboard_success_notifies() {
        let doc = Rc::new(RefCell::new(MemoryDocument::new()));
        let clipboard = Rc::new(FakeClipboard::default());
        let (copier, notifications) = service(
            &doc,
            CopyBackends {
                modern: Some(clipboard.clone()),
                legacy: None,
            },
        );

        assert!(copier.copy("jane@example.com"));
        assert_eq!(clipboard.written.borrow().as_slice(), ["jane@example.com"]);
        assert_eq!(notifications.current_message().as_deref(), Some(COPIED_MESSAGE));
    }

    #[test]
    fn modern_clipboard_failure_is_silent() {
        let doc = Rc::new(RefCell::new(MemoryDocument::new()));
        let clipboard = Rc::new(FakeClipboard {
            fail: true,
            ..FakeClipboard::default()
        });
        let (copier, notifications) = service(
            &doc,
            CopyBackends {
                modern: Some(clipboard),
                legacy: None,
            },
        );

        assert!(!copier.copy("jane@example.com"));
        assert_eq!(notifications.current(), None);
    }

    #[test]
    fn legacy_path_uses_and_removes_a_textarea() {
        let doc = Rc::new(RefCell::new(MemoryDocument::new()));
        let legacy = Rc::new(FakeLegacy {
            document: Rc::clone(&doc),
            copied: RefCell::new(Vec::new()),
            fail: false,
        });
        let (copier, notifications) = service(
            &doc,
            CopyBackends {
                modern: None,
                legacy: Some(legacy.clone()),
            },
        );

        assert!(copier.copy("hello"));
        assert_eq!(legacy.copied.borrow().as_slice(), [("hello".to_string(), 1)]);
        assert!(doc.borrow().query_all(&Selector::tag("textarea")).is_empty());
        assert_eq!(notifications.current_message().as_deref(), Some(COPIED_MESSAGE));
    }

    #[test]
    fn legacy_failure_still_removes_the_textarea() {
        let doc = Rc::new(RefCell::new(MemoryDocument::new()));
        let legacy = Rc::new(FakeLegacy {
            document: Rc::clone(&doc),
            copied: RefCell::new(Vec::new()),
            fail: true,
        });
        let (copier, notifications) = service(
            &doc,
            CopyBackends {
                modern: None,
                legacy: Some(legacy),
            },
        );
        let before = doc.borrow().node_count();

        for _ in 0..100 {
            assert!(!copier.copy("hello"));
        }
        assert!(doc.borrow().query_all(&Selector::tag("textarea")).is_empty());
        assert_eq!(doc.borrow().node_count(), before);
        assert_eq!(notifications.current(), None);
    }

    #[test]
    fn no_backend_is_reported_as_unavailable() {
        let doc = Rc::new(RefCell::new(MemoryDocument::new()));
        let (copier, _) = service(&doc, CopyBackends::default());
        assert_eq!(
            copier.try_copy("hello"),
            Err(Error::ClipboardUnavailable("no clipboard capability".to_string()))
        );
        assert!(!copier.copy("hello"));
    }
}
