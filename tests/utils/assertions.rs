//! Test assertion helpers - fluent API for verifying grouping results
#![allow(dead_code)] // Test utilities may not all be used in every test

use std::collections::HashSet;

use tongits::game::{AcePolicy, Card, GroupedHand, MeldKind};

// ============================================================================
// Assertion Helpers
// ============================================================================

pub struct GroupingAssertion<'a> {
    hand: &'a [Card],
    grouped: &'a GroupedHand,
}

impl<'a> GroupingAssertion<'a> {
    pub fn new(hand: &'a [Card], grouped: &'a GroupedHand) -> Self {
        Self { hand, grouped }
    }

    /// Every hand card appears exactly once across melds and remainder
    pub fn partitions_hand(self) -> Self {
        let mut expected = self.hand.to_vec();
        let mut actual = self.grouped.display_order();
        expected.sort();
        actual.sort();
        assert_eq!(
            actual, expected,
            "grouped cards are not a partition of the hand"
        );
        self
    }

    /// No card is shared between two melds
    pub fn melds_are_disjoint(self) -> Self {
        let mut seen = HashSet::new();
        for (kind, cards) in self.grouped.melds() {
            for card in cards {
                assert!(seen.insert(*card), "{} appears twice ({:?})", card, kind);
            }
        }
        self
    }

    /// Every meld satisfies its kind's predicate and size
    pub fn melds_are_valid(self, ace: AcePolicy) -> Self {
        for (kind, cards) in self.grouped.melds() {
            assert!(
                kind.is_valid(cards, ace),
                "invalid {:?}: {:?}",
                kind,
                cards
            );
            match kind {
                MeldKind::StraightFlush => assert!(cards.len() >= 3),
                MeldKind::FourOfAKind => assert_eq!(cards.len(), 4),
                MeldKind::ThreeOfAKind => assert_eq!(cards.len(), 3),
            }
        }
        self
    }

    pub fn has_meld_count(self, expected: usize) -> Self {
        assert_eq!(self.grouped.meld_count(), expected);
        self
    }

    pub fn has_remaining(self, expected: &[Card]) -> Self {
        assert_eq!(self.grouped.remaining_cards, expected);
        self
    }

    /// Hand positions of the display order cover the hand exactly once
    pub fn positions_cover_hand(self) -> Self {
        let mut positions: Vec<usize> = self
            .grouped
            .hand_positions(self.hand)
            .into_iter()
            .map(|pos| pos.expect("every grouped card maps to a hand position"))
            .collect();
        positions.sort_unstable();
        assert_eq!(positions, (0..self.hand.len()).collect::<Vec<_>>());
        self
    }
}
