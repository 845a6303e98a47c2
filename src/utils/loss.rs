//! Loss accounting for conversions that could not be rendered exactly.
//!
//! A [`Loss`] is threaded through every resolution made for one field. It only
//! ever grows: there is no way to clear it, so a field that lost information
//! anywhere stays marked for the rest of the pass.

/// Sticky counter of lossy conversions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Loss {
    events: usize,
}

impl Loss {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one lossy conversion
    pub fn mark(&mut self) {
        self.events += 1;
    }

    /// Whether anything was lost
    pub fn is_lossy(&self) -> bool {
        self.events > 0
    }

    /// Number of lossy conversions recorded
    pub fn count(&self) -> usize {
        self.events
    }

    /// Fold the losses of a sub-conversion into this one
    pub fn merge(&mut self, other: &Loss) {
        self.events += other.events;
    }
}
