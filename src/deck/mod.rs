//! Decks: the deck model, decklist text format and statistics.
//!
//! Decks reference cards by reference string; anything that needs card
//! data resolves it through a `CardPool`.

pub mod decklist;
pub mod model;
pub mod stats;

pub use model::Deck;
pub use stats::{DeckStats, ManaDistribution, RarityDistribution, TypeDistribution};
