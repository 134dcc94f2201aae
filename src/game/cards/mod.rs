pub mod basic;
pub mod grouping;
pub mod layout;
pub mod melds;


pub use basic::{parse_hand, validate_hand, Card, CardError, Rank, Suit};
pub use grouping::{group, AcePolicy, GroupingOptions, MeldEngine};
pub use layout::Section;
pub use melds::{is_straight_flush, GroupedHand, Meld, MeldKind};
