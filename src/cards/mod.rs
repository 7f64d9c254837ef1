//! Card system: card data and the card pool.
//!
//! ## Key Types
//!
//! - `Faction`, `CardKind`, `Rarity`: the classification legality reads
//! - `Card`: a card record keyed by its reference string
//! - `CardPool`: reference lookup used by deck import and metrics

pub mod card;
pub mod pool;

pub use card::{family_code, Card, CardKind, Faction, Rarity};
pub use pool::CardPool;
