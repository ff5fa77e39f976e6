// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.

use std::time::Duration;

/// A short-lived message waiting to be shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    message: String,
    /// Overrides the manager's default display time.
    duration: Option<Duration>,
}

impl Notification {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            duration: None,
        }
    }

    /// Sets how long the notification stays visible before it starts leaving.
    ///
    /// Zero is valid: the exit animation starts right after insertion.
    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The explicit display duration, if one was set.
    #[must_use]
    pub fn duration(&self) -> Option<Duration> {
        self.duration
    }

    /// The display duration, falling back to `default`.
    #[must_use]
    pub fn duration_or(&self, default: Duration) -> Duration {
        self.duration.unwrap_or(default)
    }
}

/// Animation phase of the displayed notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Inserted with the entrance animation; waiting for its dismissal timer.
    Entering,
    /// Exit animation running; removal is scheduled.
    Exiting,
}
