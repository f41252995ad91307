//! Vote Tally and Majority Selection

use serde::{Deserialize, Serialize};

use crate::fault::FaultClass;
use crate::NUM_CLASSES;

/// Per-class vote counts for one prediction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VoteTally([u8; NUM_CLASSES]);

impl VoteTally {
    /// Empty tally
    pub const fn new() -> Self {
        Self([0; NUM_CLASSES])
    }

    /// Tally with explicit counts, indexed by class
    pub const fn from_counts(counts: [u8; NUM_CLASSES]) -> Self {
        Self(counts)
    }

    /// Add one vote, saturating at `u8::MAX`
    #[inline]
    pub fn record(&mut self, class: FaultClass) {
        let count = &mut self.0[class.index()];
        *count = count.saturating_add(1);
    }

    /// Votes for one class
    pub fn count(&self, class: FaultClass) -> u8 {
        self.0[class.index()]
    }

    /// Raw counts indexed by class
    pub fn votes(&self) -> &[u8; NUM_CLASSES] {
        &self.0
    }

    /// Total votes cast
    pub fn total(&self) -> u32 {
        self.0.iter().map(|&v| u32::from(v)).sum()
    }

    /// Class with the most votes
    ///
    /// Classes are scanned in ascending index order and the leader only
    /// changes on a strictly greater count, so ties go to the lowest index.
    /// An empty tally yields `Normal`.
    pub fn winner(&self) -> FaultClass {
        let mut max_votes = 0;
        let mut winner = FaultClass::Normal;
        for class in FaultClass::ALL {
            let votes = self.count(class);
            if votes > max_votes {
                max_votes = votes;
                winner = class;
            }
        }
        winner
    }

    /// Share of the votes cast for one class, 0 for an empty tally
    pub fn share(&self, class: FaultClass) -> f32 {
        match self.total() {
            0 => 0.0,
            total => f32::from(self.count(class)) / total as f32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_clear_majority() {
        let tally = VoteTally::from_counts([1, 2, 6, 1]);
        assert_eq!(tally.winner(), FaultClass::PartialShading);
        assert_eq!(tally.total(), 10);
    }

    #[test]
    fn test_tie_goes_to_lower_index() {
        assert_eq!(VoteTally::from_counts([5, 0, 5, 0]).winner(), FaultClass::Normal);
        assert_eq!(VoteTally::from_counts([0, 4, 2, 4]).winner(), FaultClass::OpenCircuit);
        assert_eq!(VoteTally::from_counts([2, 0, 4, 4]).winner(), FaultClass::PartialShading);
        assert_eq!(VoteTally::from_counts([0, 3, 3, 3]).winner(), FaultClass::OpenCircuit);
    }

    #[test]
    fn test_empty_tally_is_normal() {
        let tally = VoteTally::new();
        assert_eq!(tally.winner(), FaultClass::Normal);
        assert_eq!(tally.share(FaultClass::Normal), 0.0);
    }

    #[test]
    fn test_record_and_share() {
        let mut tally = VoteTally::new();
        for _ in 0..3 {
            tally.record(FaultClass::ShortCircuit);
        }
        tally.record(FaultClass::Normal);
        assert_eq!(tally.count(FaultClass::ShortCircuit), 3);
        assert_eq!(tally.votes(), &[1, 0, 0, 3]);
        assert!((tally.share(FaultClass::ShortCircuit) - 0.75).abs() < 1e-6);
    }

    #[test]
    fn test_record_saturates() {
        let mut tally = VoteTally::new();
        for _ in 0..300 {
            tally.record(FaultClass::OpenCircuit);
        }
        assert_eq!(tally.count(FaultClass::OpenCircuit), u8::MAX);
        assert_eq!(tally.winner(), FaultClass::OpenCircuit);
        assert_eq!(tally.share(FaultClass::OpenCircuit), 1.0);
    }

    proptest! {
        #[test]
        fn prop_winner_has_max_and_lowest_index(counts in proptest::array::uniform4(0u8..=10)) {
            let tally = VoteTally::from_counts(counts);
            let winner = tally.winner().index();
            let max = *counts.iter().max().unwrap_or(&0);
            if max > 0 {
                prop_assert_eq!(counts[winner], max);
                prop_assert!(counts[..winner].iter().all(|&c| c < max));
            } else {
                prop_assert_eq!(winner, 0);
            }
        }
    }
}
