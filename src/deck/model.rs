//! Deck model and edit operations.
//!
//! A `Deck` stores an optional hero plus non-hero card references with
//! their quantities. Entries are kept in reference order so every
//! consumer (metrics, statistics, decklist export) walks them the same
//! way.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::cards::CardPool;
use crate::error::{DeckError, Result};

/// A named deck: one optional hero and a list of card quantities.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDeck")]
pub struct Deck {
    /// Deck name (for display).
    pub name: String,

    hero: Option<String>,

    /// Non-hero card reference -> quantity (always >= 1).
    cards: BTreeMap<String, u32>,
}

/// Unchecked serde form of a `Deck`.
#[derive(Deserialize)]
struct RawDeck {
    name: String,
    hero: Option<String>,
    cards: BTreeMap<String, u32>,
}

impl TryFrom<RawDeck> for Deck {
    type Error = DeckError;

    fn try_from(raw: RawDeck) -> Result<Self> {
        if let Some((reference, _)) = raw.cards.iter().find(|(_, qty)| **qty == 0) {
            return Err(DeckError::ZeroQuantity {
                reference: reference.clone(),
            });
        }
        Ok(Self {
            name: raw.name,
            hero: raw.hero,
            cards: raw.cards,
        })
    }
}

impl Deck {
    /// Create an empty deck.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the hero (builder pattern).
    #[must_use]
    pub fn with_hero(mut self, reference: impl Into<String>) -> Self {
        self.hero = Some(reference.into());
        self
    }

    /// Add copies of a card (builder pattern).
    #[must_use]
    pub fn with_card(mut self, reference: impl Into<String>, quantity: u32) -> Self {
        self.add_card(reference, quantity);
        self
    }

    /// Reference of the deck's hero, if any.
    #[must_use]
    pub fn hero(&self) -> Option<&str> {
        self.hero.as_deref()
    }

    pub fn set_hero(&mut self, reference: Option<String>) {
        self.hero = reference;
    }

    /// Add copies of a card, accumulating onto any existing entry.
    ///
    /// Adding zero copies is a no-op. The quantity saturates at `u32::MAX`.
    pub fn add_card(&mut self, reference: impl Into<String>, quantity: u32) {
        if quantity == 0 {
            return;
        }
        let entry = self.cards.entry(reference.into()).or_insert(0);
        *entry = entry.saturating_add(quantity);
    }

    /// Set the quantity of a card. Zero removes the entry.
    pub fn set_quantity(&mut self, reference: impl Into<String>, quantity: u32) {
        let reference = reference.into();
        if quantity == 0 {
            self.cards.remove(&reference);
        } else {
            self.cards.insert(reference, quantity);
        }
    }

    /// Quantity of a card (0 if absent).
    #[must_use]
    pub fn quantity(&self, reference: &str) -> u32 {
        self.cards.get(reference).copied().unwrap_or(0)
    }

    /// Iterate over `(reference, quantity)` in reference order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, u32)> {
        self.cards.iter().map(|(r, q)| (r.as_str(), *q))
    }

    /// Sum of quantities of non-hero cards.
    #[must_use]
    pub fn card_count(&self) -> u32 {
        self.cards.values().fold(0, |total, &qty| total.saturating_add(qty))
    }

    /// Number of distinct non-hero cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// True when the deck has no hero and no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hero.is_none() && self.cards.is_empty()
    }

    /// Rename the deck and apply a batch of quantity changes.
    ///
    /// A `name` of `None` keeps the current name. For hero cards a
    /// positive quantity makes the card the deck hero, and zero clears
    /// the hero if it is that card. For other cards a positive quantity
    /// replaces the current one and zero removes the entry. References
    /// missing from the pool and unplayable cards are skipped.
    pub fn patch<I, S>(&mut self, name: Option<&str>, changes: I, pool: &CardPool)
    where
        I: IntoIterator<Item = (S, u32)>,
        S: AsRef<str>,
    {
        if let Some(name) = name {
            self.name = name.to_string();
        }

        for (reference, quantity) in changes {
            let reference = reference.as_ref();
            let Some(card) = pool.get(reference) else {
                log::warn!("skipping unknown card {reference} in deck patch");
                continue;
            };
            if !card.is_hero() && !card.kind.is_playable() {
                log::warn!("skipping unplayable card {reference} in deck patch");
                continue;
            }

            if card.is_hero() {
                if quantity > 0 {
                    self.hero = Some(card.reference.clone());
                } else if self.hero() == Some(reference) {
                    self.hero = None;
                }
            } else {
                self.set_quantity(reference, quantity);
            }
        }
    }

    /// Remove a card from the deck entirely.
    ///
    /// Removing the current hero clears it. Returns whether anything was
    /// removed; fails if the reference is not in the pool.
    pub fn remove_card(&mut self, reference: &str, pool: &CardPool) -> Result<bool> {
        let card = pool.lookup(reference)?;
        if card.is_hero() && self.hero() == Some(reference) {
            self.hero = None;
            return Ok(true);
        }
        Ok(self.cards.remove(reference).is_some())
    }
}
