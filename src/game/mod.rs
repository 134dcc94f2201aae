// Public API
pub use cards::{
    group, is_straight_flush, parse_hand, validate_hand, AcePolicy, Card, CardError, GroupedHand,
    GroupingOptions, Meld, MeldEngine, MeldKind, Rank, Section, Suit,
};

// Internal modules
mod cards;
