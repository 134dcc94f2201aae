// Library crate for the Tongits meld grouping engine
// This file exposes the public API for the binary and integration tests

pub mod game;

// Re-export commonly used types for easier access in tests
pub use game::{group, Card, CardError, GroupedHand, GroupingOptions, MeldEngine, Rank, Suit};
