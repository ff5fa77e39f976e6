// SPDX-License-Identifier: MPL-2.0
//! `folio_ui` is the headless interaction engine of a single-page portfolio.
//!
//! It drives toast notifications, scroll-derived navigation state and the
//! page's accessibility helpers against an injected document and timer
//! source, so every behavior runs the same in a browser host, a terminal demo
//! or a deterministic test.

#![doc(html_root_url = "https://docs.rs/folio_ui/0.1.0")]

pub mod config;
pub mod debounce;
pub mod dom;
pub mod error;
pub mod interactions;
pub mod notifications;
pub mod page;
pub mod sample;
pub mod scheduler;
pub mod scroll;

pub use page::{EventOutcome, Page, PageEvent};
