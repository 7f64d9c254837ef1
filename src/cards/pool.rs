//! Card pool for reference lookup.
//!
//! The `CardPool` holds every card a deck may reference, keyed by card
//! reference. Deck import, metrics extraction and statistics all
//! resolve references through it.

use rustc_hash::FxHashMap;

use super::card::Card;
use crate::error::{DeckError, Result};

/// Pool of known cards.
///
/// ## Example
///
/// ```
/// use ccg_legality::cards::{Card, CardPool, Faction};
///
/// let mut pool = CardPool::new();
/// pool.register(Card::hero("ALT_CORE_B_AX_01_C", "Sierra & Oddball", Faction::Axiom));
///
/// let found = pool.get("ALT_CORE_B_AX_01_C").unwrap();
/// assert!(found.is_hero());
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardPool {
    cards: FxHashMap<String, Card>,
}

impl CardPool {
    /// Create a new empty pool.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a card.
    ///
    /// Panics if a card with the same reference already exists.
    pub fn register(&mut self, card: Card) {
        if self.cards.contains_key(&card.reference) {
            panic!("Card {} already registered", card.reference);
        }
        self.cards.insert(card.reference.clone(), card);
    }

    /// Get a card by reference.
    #[must_use]
    pub fn get(&self, reference: &str) -> Option<&Card> {
        self.cards.get(reference)
    }

    /// Get a card by reference, failing with `DeckError::UnknownCard`.
    pub fn lookup(&self, reference: &str) -> Result<&Card> {
        self.get(reference)
            .ok_or_else(|| DeckError::unknown_card(reference))
    }

    #[must_use]
    pub fn contains(&self, reference: &str) -> bool {
        self.cards.contains_key(reference)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all cards (unordered).
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.values()
    }

    /// Iterate over hero cards.
    pub fn heroes(&self) -> impl Iterator<Item = &Card> {
        self.cards.values().filter(|c| c.is_hero())
    }

    /// Find cards matching a predicate.
    pub fn find<F>(&self, predicate: F) -> impl Iterator<Item = &Card>
    where
        F: Fn(&Card) -> bool,
    {
        self.cards.values().filter(move |c| predicate(c))
    }
}

impl FromIterator<Card> for CardPool {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        let mut pool = CardPool::new();
        for card in iter {
            pool.register(card);
        }
        pool
    }
}
