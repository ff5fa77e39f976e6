// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the page behaviors. Constants are organized by category.
//!
//! # Categories
//!
//! - **Notifications**: Toast display and exit-animation timing
//! - **Scroll**: Debounce wait, header offset, navbar shadow threshold
//! - **Counters**: Statistic counter animation
//! - **Reveal**: Fade-in visibility threshold
//! - **Feedback**: Fixed press/ripple timings

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// How long a notification stays visible before its exit animation starts.
pub const DEFAULT_NOTIFICATION_DURATION_MS: u64 = 3000;

/// Maximum display duration accepted from configuration (one minute).
pub const MAX_NOTIFICATION_DURATION_MS: u64 = 60_000;

/// Length of the exit animation; the element is removed when it ends.
pub const DEFAULT_NOTIFICATION_EXIT_MS: u64 = 300;

/// Maximum exit animation length accepted from configuration.
pub const MAX_NOTIFICATION_EXIT_MS: u64 = 2000;

// ==========================================================================
// Scroll Defaults
// ==========================================================================

/// Quiet period before the active nav link is recomputed.
pub const DEFAULT_SCROLL_DEBOUNCE_MS: u64 = 10;

/// Minimum debounce wait.
pub const MIN_SCROLL_DEBOUNCE_MS: u64 = 1;

/// Maximum debounce wait.
pub const MAX_SCROLL_DEBOUNCE_MS: u64 = 1000;

/// Height of the fixed header added to the scroll offset (CSS px).
pub const DEFAULT_HEADER_OFFSET_PX: f64 = 100.0;

/// Scroll offset above which the navbar shows its shadow (CSS px).
pub const DEFAULT_SCROLLED_THRESHOLD_PX: f64 = 50.0;

// ==========================================================================
// Counter Defaults
// ==========================================================================

/// Total counter animation time.
pub const DEFAULT_COUNTER_DURATION_MS: u64 = 2000;

/// Interval between counter frames (~60 FPS).
pub const DEFAULT_COUNTER_FRAME_MS: u64 = 16;

/// Minimum frame interval.
pub const MIN_COUNTER_FRAME_MS: u64 = 1;

/// Visible fraction required before a counter starts.
pub const DEFAULT_COUNTER_THRESHOLD: f64 = 0.5;

// ==========================================================================
// Reveal Defaults
// ==========================================================================

/// Visible fraction required before an element fades in.
pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.1;

// ==========================================================================
// Feedback Timings (not configurable)
// ==========================================================================

/// Each half of the skill tag ripple.
pub const SKILL_TAG_RIPPLE_STEP_MS: u64 = 150;

/// How long an external link stays pressed.
pub const EXTERNAL_LINK_PRESS_MS: u64 = 100;

/// Delay before the hero section fades in after load.
pub const HERO_FADE_DELAY_MS: u64 = 100;

// ==========================================================================
// Accessibility Defaults
// ==========================================================================

/// Anchor the skip link jumps to.
pub const DEFAULT_SKIP_LINK_TARGET: &str = "#about";
