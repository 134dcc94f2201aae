//! Hand construction helpers
#![allow(dead_code)] // Test utilities may not all be used in every test

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use tongits::game::{Card, Rank, Suit};

// ============================================================================
// Card Creation Macro
// ============================================================================

#[macro_export]
macro_rules! cards {
    ($($rank:ident $suit:ident),* $(,)?) => {
        vec![$(::tongits::Card::new(::tongits::Rank::$rank, ::tongits::Suit::$suit)),*]
    };
}

// ============================================================================
// Hand Builders
// ============================================================================

pub struct HandBuilder {
    cards: Vec<Card>,
}

impl HandBuilder {
    pub fn new() -> Self {
        Self { cards: vec![] }
    }

    /// Add consecutive ranks of one suit, `from` and `to` inclusive
    pub fn with_run(mut self, suit: Suit, from: Rank, to: Rank) -> Self {
        self.cards.extend(
            Card::all_cards()
                .into_iter()
                .filter(|card| card.suit == suit && card.rank >= from && card.rank <= to),
        );
        self
    }

    /// Add one card of `rank` in each of `suits`
    pub fn with_set(mut self, rank: Rank, suits: &[Suit]) -> Self {
        self.cards
            .extend(suits.iter().map(|suit| Card::new(rank, *suit)));
        self
    }

    pub fn with_cards(mut self, cards: Vec<Card>) -> Self {
        self.cards.extend(cards);
        self
    }

    /// Shuffle with a fixed seed so failures reproduce
    pub fn shuffled(mut self, seed: u64) -> Self {
        self.cards.shuffle(&mut StdRng::seed_from_u64(seed));
        self
    }

    pub fn build(self) -> Vec<Card> {
        self.cards
    }
}

/// Deal `size` distinct cards from a deck shuffled with `rng`
pub fn random_hand(rng: &mut StdRng, size: usize) -> Vec<Card> {
    let mut deck = Card::all_cards();
    deck.shuffle(rng);
    deck.truncate(size);
    deck
}
