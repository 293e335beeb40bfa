//! Once-only entrance triggers.
//!
//! Section entrance animations run exactly once, the first time enough of
//! the section scrolls into view. The embedder reports visible fractions
//! from whatever intersection machinery it has; the trigger latches.

/// Fires once when the observed visible fraction first reaches the
/// threshold.
#[derive(Debug, Clone)]
pub struct EntranceTrigger {
    threshold: f32,
    fired: bool,
}

impl EntranceTrigger {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            fired: false,
        }
    }

    /// Report the currently visible fraction of the observed section.
    /// Returns `true` exactly once.
    pub fn observe(&mut self, visible_fraction: f32) -> bool {
        if self.fired || visible_fraction < self.threshold {
            return false;
        }
        self.fired = true;
        true
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }
}
