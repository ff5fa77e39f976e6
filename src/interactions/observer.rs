// SPDX-License-Identifier: MPL-2.0
//! One-shot visibility triggers.
//!
//! The host reports intersection changes as [`IntersectionEntry`] batches.
//! A [`OneShotObserver`] hands back each observed node the first time it is
//! visible enough, then stops watching it.

use crate::dom::NodeId;

/// One visibility change reported by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionEntry {
    pub target: NodeId,
    pub is_intersecting: bool,
    /// Visible fraction of the target, 0.0 to 1.0.
    pub ratio: f64,
}

impl IntersectionEntry {
    #[must_use]
    pub fn visible(target: NodeId, ratio: f64) -> Self {
        Self {
            target,
            is_intersecting: ratio > 0.0,
            ratio,
        }
    }

    #[must_use]
    pub fn hidden(target: NodeId) -> Self {
        Self {
            target,
            is_intersecting: false,
            ratio: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OneShotObserver {
    threshold: f64,
    observed: Vec<NodeId>,
}

impl OneShotObserver {
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            observed: Vec::new(),
        }
    }

    pub fn observe(&mut self, node: NodeId) {
        if !self.observed.contains(&node) {
            self.observed.push(node);
        }
    }

    pub fn unobserve(&mut self, node: NodeId) {
        self.observed.retain(|observed| *observed != node);
    }

    #[must_use]
    pub fn is_observing(&self, node: NodeId) -> bool {
        self.observed.contains(&node)
    }

    #[must_use]
    pub fn observed_count(&self) -> usize {
        self.observed.len()
    }

    /// Returns the observed targets that crossed the threshold, in entry
    /// order, and stops observing them.
    pub fn take_triggered(&mut self, entries: &[IntersectionEntry]) -> Vec<NodeId> {
        let mut triggered = Vec::new();
        for entry in entries {
            if entry.is_intersecting
                && entry.ratio >= self.threshold
                && self.is_observing(entry.target)
            {
                self.unobserve(entry.target);
                triggered.push(entry.target);
            }
        }
        triggered
    }
}
