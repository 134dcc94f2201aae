use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

use super::basic::{Card, Rank};
use super::grouping::AcePolicy;

/// A meld is an ordered run of cards satisfying one `MeldKind` predicate.
pub type Meld = Vec<Card>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "camelCase")]
pub enum MeldKind {
    StraightFlush,
    FourOfAKind,
    ThreeOfAKind,
}

impl MeldKind {
    /// Check `cards` against this kind's predicate. Order of `cards` does not
    /// matter.
    pub fn is_valid(&self, cards: &[Card], ace: AcePolicy) -> bool {
        match self {
            MeldKind::StraightFlush => is_straight_flush(cards, ace),
            MeldKind::FourOfAKind => cards.len() == 4 && same_rank(cards),
            MeldKind::ThreeOfAKind => cards.len() == 3 && same_rank(cards),
        }
    }
}

fn same_rank(cards: &[Card]) -> bool {
    cards.iter().all(|card| card.rank == cards[0].rank)
}

/// Three or more cards of one suit whose rank indices are consecutive once
/// sorted. With `AcePolicy::LowOrHigh` an ace may also close a run above the
/// king, never both ends at once.
pub fn is_straight_flush(cards: &[Card], ace: AcePolicy) -> bool {
    if cards.len() < 3 || !cards.iter().all(|card| card.suit == cards[0].suit) {
        return false;
    }

    if is_consecutive(cards, Rank::index) {
        return true;
    }

    ace == AcePolicy::LowOrHigh && is_consecutive(cards, Rank::high_index)
}

fn is_consecutive(cards: &[Card], index: fn(Rank) -> u8) -> bool {
    let mut indices: Vec<u8> = cards.iter().map(|card| index(card.rank)).collect();
    indices.sort_unstable();
    indices.windows(2).all(|pair| pair[1] == pair[0] + 1)
}

/// Result of a grouping pass.
///
/// The four fields together hold every card of the grouped hand exactly
/// once. Groups are listed in the order they were found, after any seeded
/// groups.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupedHand {
    pub straight_flushes: Vec<Meld>,
    pub four_of_a_kinds: Vec<Meld>,
    pub three_of_a_kinds: Vec<Meld>,
    pub remaining_cards: Vec<Card>,
}

impl GroupedHand {
    /// Melds of one kind.
    pub fn melds_of(&self, kind: MeldKind) -> &[Meld] {
        match kind {
            MeldKind::StraightFlush => &self.straight_flushes,
            MeldKind::FourOfAKind => &self.four_of_a_kinds,
            MeldKind::ThreeOfAKind => &self.three_of_a_kinds,
        }
    }

    pub(crate) fn melds_of_mut(&mut self, kind: MeldKind) -> &mut Vec<Meld> {
        match kind {
            MeldKind::StraightFlush => &mut self.straight_flushes,
            MeldKind::FourOfAKind => &mut self.four_of_a_kinds,
            MeldKind::ThreeOfAKind => &mut self.three_of_a_kinds,
        }
    }

    /// All melds tagged with their kind: straight flushes, then fours, then
    /// threes.
    pub fn melds(&self) -> impl Iterator<Item = (MeldKind, &[Card])> + '_ {
        MeldKind::iter().flat_map(move |kind| {
            self.melds_of(kind)
                .iter()
                .map(move |meld| (kind, meld.as_slice()))
        })
    }

    pub fn meld_count(&self) -> usize {
        self.straight_flushes.len() + self.four_of_a_kinds.len() + self.three_of_a_kinds.len()
    }

    pub fn melded_card_count(&self) -> usize {
        self.melds().map(|(_, cards)| cards.len()).sum()
    }

    pub fn card_count(&self) -> usize {
        self.melded_card_count() + self.remaining_cards.len()
    }

    /// True when no card was left over.
    pub fn is_fully_melded(&self) -> bool {
        self.remaining_cards.is_empty()
    }

    /// Keep the found melds, drop the remainder. Used when seeding a new pass.
    pub(crate) fn into_seed(self) -> Self {
        Self {
            remaining_cards: Vec::new(),
            ..self
        }
    }
}
