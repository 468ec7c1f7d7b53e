//! Monotonic hidden -> shown flags for scroll-reveal targets.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

/// Class added to reveal targets once observation is live (hidden styling).
pub const ARMED_CLASS: &str = "reveal--armed";
/// Class added the first time a target becomes visible.
pub const SHOWN_CLASS: &str = "reveal--shown";
/// Attribute marking an element as a reveal target.
pub const REVEAL_ATTRIBUTE: &str = "data-reveal";

/// Shown flags indexed by target position. Flags only ever go false -> true.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RevealSet {
    shown: Vec<bool>,
}

impl RevealSet {
    /// Seed from already-known flags (targets shown by an earlier attachment).
    pub fn from_flags(shown: Vec<bool>) -> Self {
        Self { shown }
    }

    /// Record a visibility observation for `index`.
    ///
    /// Returns `true` only on the hidden -> shown transition. Ratios of zero,
    /// repeat sightings and out-of-range indices return `false`.
    pub fn observe(&mut self, index: usize, ratio: f64) -> bool {
        if ratio.is_nan() || ratio <= 0.0 {
            return false;
        }
        match self.shown.get_mut(index) {
            Some(flag) if !*flag => {
                *flag = true;
                true
            }
            _ => false,
        }
    }
}
