// Auto-grouping of a hand into melds.
//
// A pass runs in two phases over an owned working copy of the hand:
// 1. per suit, a greedy anchor scan carves straight flushes out of the
//    rank-sorted suit cards
// 2. the cards left over are bucketed by rank and buckets of exactly three or
//    four become sets
// Whatever neither phase claimed is the remainder.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::basic::{Card, Rank, Suit};
use super::melds::{GroupedHand, Meld, MeldKind};

/// Where an ace may sit in a straight flush.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AcePolicy {
    /// Ace only below the two (A-2-3). Q-K-A is not a run.
    #[default]
    LowOnly,
    /// Ace below the two or above the king, but never wrapping (K-A-2).
    /// A suit holding the 2 and 3 keeps its ace low.
    LowOrHigh,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupingOptions {
    pub ace: AcePolicy,
    /// Once a three-card run is found, keep absorbing the cards that continue
    /// it. When false a 4-card stretch yields a 3-card run and a stray card.
    pub extend_runs: bool,
}

impl Default for GroupingOptions {
    fn default() -> Self {
        Self {
            ace: AcePolicy::LowOnly,
            extend_runs: true,
        }
    }
}

impl GroupingOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ace(mut self, ace: AcePolicy) -> Self {
        self.ace = ace;
        self
    }

    pub fn with_extend_runs(mut self, extend_runs: bool) -> Self {
        self.extend_runs = extend_runs;
        self
    }
}

/// Groups hands into straight flushes, four-of-a-kinds and three-of-a-kinds.
///
/// Run detection is a greedy heuristic, not an optimal partition: it commits
/// to the first run found at each anchor and never revisits that choice, so
/// a straight flush can consume a card that would otherwise have completed a
/// set (5S 6S 7S 7H 7D leaves 7H 7D ungrouped).
///
/// Rank buckets are matched only at their exact size of 3 or 4, which
/// assumes a single 52-card deck with no duplicate cards. Use
/// [`validate_hand`](super::basic::validate_hand) at the input boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MeldEngine {
    options: GroupingOptions,
}

impl MeldEngine {
    pub fn new(options: GroupingOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> GroupingOptions {
        self.options
    }

    /// Partition `hand` into melds and a remainder.
    ///
    /// When `previous` is given its melds are kept and the melds found in
    /// `hand` are appended after them; its remainder is discarded. Overlap
    /// between `previous` and `hand` is not checked.
    pub fn group(&self, hand: &[Card], previous: Option<GroupedHand>) -> GroupedHand {
        let mut grouped = previous.map(GroupedHand::into_seed).unwrap_or_default();
        let mut remaining = hand.to_vec();

        for (suit, mut suit_cards) in group_by_suit(&remaining) {
            let index = self.run_order(&suit_cards);
            suit_cards.sort_by_key(|card| index(card.rank));
            trace!(%suit, cards = suit_cards.len(), "scanning suit for runs");

            self.scan_runs(&mut suit_cards, index, &mut remaining, &mut grouped);
        }

        for (rank, rank_cards) in group_by_rank(&remaining) {
            let kind = match rank_cards.len() {
                4 => MeldKind::FourOfAKind,
                3 => MeldKind::ThreeOfAKind,
                _ => continue,
            };
            debug!(%rank, ?kind, "found set");
            remove_used_cards(&mut remaining, &rank_cards);
            grouped.melds_of_mut(kind).push(rank_cards);
        }

        grouped.remaining_cards = remaining;
        debug!(
            melds = grouped.meld_count(),
            remaining = grouped.remaining_cards.len(),
            "grouped hand"
        );
        grouped
    }

    /// Rank order for one suit's scan. The ace goes above the king only when
    /// the policy allows it and the suit cannot open a low run (no 2 and 3).
    fn run_order(&self, suit_cards: &[Card]) -> fn(Rank) -> u8 {
        let has = |rank: Rank| suit_cards.iter().any(|card| card.rank == rank);
        match self.options.ace {
            AcePolicy::LowOrHigh if !(has(Rank::Two) && has(Rank::Three)) => Rank::high_index,
            _ => Rank::index,
        }
    }

    /// Anchor scan over one suit's cards, which must be sorted by `index`.
    /// Every run found is drained from `suit_cards` and `remaining`, and the
    /// scan resumes at the same anchor over the shortened list.
    fn scan_runs(
        &self,
        suit_cards: &mut Vec<Card>,
        index: fn(Rank) -> u8,
        remaining: &mut Vec<Card>,
        grouped: &mut GroupedHand,
    ) {
        let mut anchor = 0;
        while anchor + 2 < suit_cards.len() {
            match self.run_at(suit_cards, anchor, index) {
                Some(end) => {
                    let run: Meld = suit_cards.drain(anchor..=end).collect();
                    debug!(
                        start = %run[0],
                        len = run.len(),
                        "found straight flush"
                    );
                    remove_used_cards(remaining, &run);
                    grouped.straight_flushes.push(run);
                }
                None => anchor += 1,
            }
        }
    }

    /// Inclusive end of the run starting at `anchor`, if any. The shortest
    /// candidate slice wins; with `extend_runs` it is then grown over every
    /// card that continues it.
    fn run_at(&self, cards: &[Card], anchor: usize, index: fn(Rank) -> u8) -> Option<usize> {
        let end = (anchor + 2..cards.len()).find(|&end| is_run(&cards[anchor..=end], index))?;
        if !self.options.extend_runs {
            return Some(end);
        }

        let mut end = end;
        while end + 1 < cards.len() && follows(cards[end], cards[end + 1], index) {
            end += 1;
        }
        Some(end)
    }
}

/// Group `hand` with the default options.
pub fn group(hand: &[Card], previous: Option<GroupedHand>) -> GroupedHand {
    MeldEngine::default().group(hand, previous)
}

fn follows(prev: Card, next: Card, index: fn(Rank) -> u8) -> bool {
    index(next.rank) == index(prev.rank) + 1
}

fn is_run(cards: &[Card], index: fn(Rank) -> u8) -> bool {
    cards.windows(2).all(|pair| follows(pair[0], pair[1], index))
}

/// Bucket cards by suit, buckets ordered by first appearance.
fn group_by_suit(cards: &[Card]) -> Vec<(Suit, Vec<Card>)> {
    let mut buckets: Vec<(Suit, Vec<Card>)> = Vec::new();
    for card in cards {
        match buckets.iter_mut().find(|(suit, _)| *suit == card.suit) {
            Some((_, bucket)) => bucket.push(*card),
            None => buckets.push((card.suit, vec![*card])),
        }
    }
    buckets
}

/// Bucket cards by rank, buckets ordered by first appearance.
fn group_by_rank(cards: &[Card]) -> Vec<(Rank, Vec<Card>)> {
    let mut buckets: Vec<(Rank, Vec<Card>)> = Vec::new();
    for card in cards {
        match buckets.iter_mut().find(|(rank, _)| *rank == card.rank) {
            Some((_, bucket)) => bucket.push(*card),
            None => buckets.push((card.rank, vec![*card])),
        }
    }
    buckets
}

/// Remove the first card matching each of `used` from `remaining`.
fn remove_used_cards(remaining: &mut Vec<Card>, used: &[Card]) {
    for card in used {
        if let Some(pos) = remaining
            .iter()
            .position(|c| c.rank == card.rank && c.suit == card.suit)
        {
            remaining.remove(pos);
        }
    }
}
