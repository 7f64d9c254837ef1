//! Deck metrics: the evaluator's only input besides the rule set.
//!
//! Metrics are derived from a deck's contents for a single evaluation
//! and never stored on their own.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{CardPool, Faction, Rarity};
use crate::deck::Deck;
use crate::error::Result;

/// Composition metrics of one deck.
///
/// The hero never contributes to `total_count` or the rarity counts;
/// it only contributes its faction and `has_hero`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckMetrics {
    /// Distinct factions among the hero and all cards.
    pub faction_count: u32,

    /// Summed quantity of non-hero cards.
    pub total_count: u32,

    /// Summed quantity of rare cards.
    pub rare_count: u32,

    /// Summed quantity of unique cards.
    pub unique_count: u32,

    /// True if any single unique card has more than one copy.
    pub repeats_same_unique: bool,

    /// Family key -> summed quantity.
    pub family_count: FxHashMap<String, u32>,

    pub has_hero: bool,
}

impl DeckMetrics {
    /// Extract metrics from a deck, resolving cards through `pool`.
    ///
    /// Fails if the hero or any card reference is unknown.
    pub fn extract(deck: &Deck, pool: &CardPool) -> Result<Self> {
        let mut metrics = DeckMetrics::default();
        let mut factions: SmallVec<[Faction; 6]> = SmallVec::new();

        if let Some(reference) = deck.hero() {
            let hero = pool.lookup(reference)?;
            factions.push(hero.faction);
            metrics.has_hero = true;
        }

        for (reference, quantity) in deck.entries() {
            let card = pool.lookup(reference)?;

            metrics.total_count = metrics.total_count.saturating_add(quantity);
            match card.rarity {
                Rarity::Rare => metrics.rare_count = metrics.rare_count.saturating_add(quantity),
                Rarity::Unique => {
                    metrics.unique_count = metrics.unique_count.saturating_add(quantity);
                    if quantity > 1 {
                        metrics.repeats_same_unique = true;
                    }
                }
                Rarity::Common => {}
            }

            if !factions.contains(&card.faction) {
                factions.push(card.faction);
            }

            let family = metrics.family_count.entry(card.family_code()).or_insert(0);
            *family = family.saturating_add(quantity);
        }

        metrics.faction_count = factions.len() as u32;
        Ok(metrics)
    }

    /// Add to a family's count (builder pattern).
    #[must_use]
    pub fn with_family(mut self, family: impl Into<String>, quantity: u32) -> Self {
        *self.family_count.entry(family.into()).or_insert(0) += quantity;
        self
    }

    /// Largest family count, 0 when there are no cards.
    #[must_use]
    pub fn max_family_count(&self) -> u32 {
        self.family_count.values().copied().max().unwrap_or(0)
    }
}
