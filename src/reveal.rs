//! Reveal Scheduler - one-shot visibility detection.
//!
//! Content blocks are registered with a visibility threshold; when a
//! delivered sample shows the block's visible fraction at or above that
//! threshold, the block fires exactly once and is unregistered. Revealed
//! blocks are permanently inert: scrolling them out and back in never
//! re-fires, and re-observing them is a no-op.
//!
//! Samples arrive in batches, mirroring how an intersection observer
//! coalesces and throttles callbacks: a batch may carry several samples for
//! one block, or none for a block that moved, and the scheduler must not
//! assume one sample per scroll step.

use std::collections::{HashMap, HashSet};

use crate::types::TargetId;

/// Visibility threshold for section headers. Headers wait for more of the
/// section to be in view before revealing.
pub const HEADER_THRESHOLD: f32 = 0.35;

/// Visibility threshold for grid/timeline items.
pub const ITEM_THRESHOLD: f32 = 0.15;

/// One visible-fraction sample for a target.
pub type Sample = (TargetId, f32);

/// Registry of watched blocks and the monotonic revealed set.
#[derive(Debug, Clone, Default)]
pub struct RevealScheduler {
    watched: HashMap<TargetId, f32>,
    revealed: HashSet<TargetId>,
}

impl RevealScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a block for one-shot visibility detection.
    ///
    /// Observing an already revealed block is a silent no-op. Observing a
    /// block twice updates its threshold.
    pub fn observe(&mut self, id: TargetId, threshold: f32) {
        if self.revealed.contains(&id) {
            return;
        }
        self.watched.insert(id, threshold.clamp(0.0, 1.0));
    }

    /// Cancel a pending observation. The block will not fire afterwards.
    pub fn unobserve(&mut self, id: TargetId) {
        self.watched.remove(&id);
    }

    /// Feed a batch of visible-fraction samples.
    ///
    /// Returns the targets that fired, in sample order. Each fired target
    /// is unregistered before the rest of the batch is processed, so
    /// duplicate samples within one batch fire at most once. Samples for
    /// unknown or already revealed targets are ignored.
    pub fn deliver(&mut self, samples: &[Sample]) -> Vec<TargetId> {
        let mut fired = Vec::new();

        for &(id, fraction) in samples {
            let Some(&threshold) = self.watched.get(&id) else {
                continue;
            };
            if fraction >= threshold {
                self.watched.remove(&id);
                self.revealed.insert(id);
                fired.push(id);
            }
        }

        fired
    }

    pub fn is_revealed(&self, id: TargetId) -> bool {
        self.revealed.contains(&id)
    }

    pub fn is_watched(&self, id: TargetId) -> bool {
        self.watched.contains_key(&id)
    }

    pub fn watched_count(&self) -> usize {
        self.watched.len()
    }

    /// Drop every pending observation (section teardown). The revealed set
    /// is kept: reveals are monotonic for the page lifetime.
    pub fn clear(&mut self) {
        self.watched.clear();
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn id(n: u64) -> TargetId {
        TargetId(n)
    }

    #[test]
    fn test_fires_once_across_enter_leave_reenter() {
        let mut sched = RevealScheduler::new();
        sched.observe(id(1), 0.1);

        // Enter.
        let fired = sched.deliver(&[(id(1), 0.5)]);
        assert_eq!(fired, vec![id(1)]);
        assert!(sched.is_revealed(id(1)));

        // Leave, then re-enter: nothing fires again.
        assert!(sched.deliver(&[(id(1), 0.0)]).is_empty());
        assert!(sched.deliver(&[(id(1), 1.0)]).is_empty());
        assert!(sched.deliver(&[(id(1), 0.5)]).is_empty());
    }

    #[test]
    fn test_threshold_is_exact() {
        let mut sched = RevealScheduler::new();
        sched.observe(id(1), 0.8);

        // 0.79 must not trigger.
        assert!(sched.deliver(&[(id(1), 0.79)]).is_empty());
        assert!(sched.is_watched(id(1)));

        // 0.80 must trigger.
        assert_eq!(sched.deliver(&[(id(1), 0.80)]), vec![id(1)]);
    }

    #[test]
    fn test_distinct_thresholds_per_target() {
        let mut sched = RevealScheduler::new();
        sched.observe(id(1), HEADER_THRESHOLD);
        sched.observe(id(2), ITEM_THRESHOLD);

        let fired = sched.deliver(&[(id(1), 0.2), (id(2), 0.2)]);
        assert_eq!(fired, vec![id(2)]); // only the item crosses 0.15

        let fired = sched.deliver(&[(id(1), 0.4)]);
        assert_eq!(fired, vec![id(1)]);
    }

    #[test]
    fn test_coalesced_batch_fires_once() {
        let mut sched = RevealScheduler::new();
        sched.observe(id(1), 0.1);

        // Observer delivered several samples for one scroll burst.
        let fired = sched.deliver(&[(id(1), 0.2), (id(1), 0.6), (id(1), 0.9)]);
        assert_eq!(fired, vec![id(1)]);
    }

    #[test]
    fn test_unknown_target_is_noop() {
        let mut sched = RevealScheduler::new();
        assert!(sched.deliver(&[(id(42), 1.0)]).is_empty());
        assert!(!sched.is_revealed(id(42)));
    }

    #[test]
    fn test_unobserve_cancels_pending() {
        let mut sched = RevealScheduler::new();
        sched.observe(id(1), 0.1);
        sched.unobserve(id(1));

        assert!(sched.deliver(&[(id(1), 1.0)]).is_empty());
        assert!(!sched.is_revealed(id(1)));
    }

    #[test]
    fn test_reobserve_after_reveal_is_inert() {
        let mut sched = RevealScheduler::new();
        sched.observe(id(1), 0.1);
        sched.deliver(&[(id(1), 1.0)]);

        sched.observe(id(1), 0.1);
        assert!(!sched.is_watched(id(1)));
        assert!(sched.deliver(&[(id(1), 1.0)]).is_empty());
    }

    #[test]
    fn test_reobserve_updates_threshold() {
        let mut sched = RevealScheduler::new();
        sched.observe(id(1), 0.9);
        sched.observe(id(1), 0.2);

        assert_eq!(sched.deliver(&[(id(1), 0.3)]), vec![id(1)]);
    }

    #[test]
    fn test_clear_drops_pending_keeps_revealed() {
        let mut sched = RevealScheduler::new();
        sched.observe(id(1), 0.1);
        sched.deliver(&[(id(1), 1.0)]);
        sched.observe(id(2), 0.1);

        sched.clear();
        assert_eq!(sched.watched_count(), 0);
        assert!(sched.deliver(&[(id(2), 1.0)]).is_empty()); // cancelled, never fires
        assert!(sched.is_revealed(id(1))); // monotonic
    }

    #[test]
    fn test_threshold_clamped() {
        let mut sched = RevealScheduler::new();
        sched.observe(id(1), 1.7);
        // Clamped to 1.0, so a fully visible block still fires.
        assert_eq!(sched.deliver(&[(id(1), 1.0)]), vec![id(1)]);
    }
}
