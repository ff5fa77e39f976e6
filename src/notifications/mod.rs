// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Notifications are short messages shown in the bottom-right corner, one at
//! a time. A new request replaces the current toast at once, with no
//! crossfade.
//!
//! # Components
//!
//! - [`notification`] - `Notification` request and display `Phase`
//! - [`manager`] - `NotificationManager`, single-slot lifecycle and timers
//! - [`toast`] - toast element and the stylesheet fragment it animates with
//!
//! # Timeline
//!
//! ```text
//! t = 0                 inserted, slideInRight
//! t = duration          slideOutRight
//! t = duration + exit   removed (exit defaults to 300ms)
//! ```

mod manager;
mod notification;
mod toast;

pub use manager::NotificationManager;
pub use notification::{Notification, Phase};
pub use toast::{
    exit_animation, install_styles, toast_element, ENTER_ANIMATION, EXIT_ANIMATION,
    NOTIFICATION_CLASS, STYLESHEET,
};
