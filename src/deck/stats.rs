//! Deck statistics for display: type, mana and rarity distributions.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::cards::{CardKind, CardPool, Rarity};
use crate::error::Result;

use super::model::Deck;

/// Card count per playable kind. Landmarks count as permanents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDistribution {
    pub characters: u32,
    pub spells: u32,
    pub permanents: u32,
}

/// Card count per cost, for hand and reserve costs.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManaDistribution {
    pub hand: BTreeMap<u8, u32>,
    pub recall: BTreeMap<u8, u32>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RarityDistribution {
    pub common: u32,
    pub rare: u32,
    pub unique: u32,
}

/// Aggregated statistics over a deck's non-hero cards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckStats {
    pub type_distribution: TypeDistribution,
    /// Sum of the type distribution.
    pub total_count: u32,
    pub mana_distribution: ManaDistribution,
    pub rarity_distribution: RarityDistribution,
}

fn add_to(count: &mut u32, quantity: u32) {
    *count = count.saturating_add(quantity);
}

impl DeckStats {
    /// Compute statistics for `deck`, resolving cards through `pool`.
    pub fn compute(deck: &Deck, pool: &CardPool) -> Result<Self> {
        let mut stats = DeckStats::default();

        for (reference, quantity) in deck.entries() {
            let card = pool.lookup(reference)?;

            if !card.kind.is_playable() {
                continue;
            }

            let types = &mut stats.type_distribution;
            let kind_count = match card.kind {
                CardKind::Character => &mut types.characters,
                CardKind::Spell => &mut types.spells,
                _ => &mut types.permanents,
            };
            add_to(kind_count, quantity);

            if let Some(cost) = card.main_cost {
                add_to(stats.mana_distribution.hand.entry(cost).or_insert(0), quantity);
            }
            if let Some(cost) = card.recall_cost {
                add_to(stats.mana_distribution.recall.entry(cost).or_insert(0), quantity);
            }

            let rarities = &mut stats.rarity_distribution;
            let rarity_count = match card.rarity {
                Rarity::Common => &mut rarities.common,
                Rarity::Rare => &mut rarities.rare,
                Rarity::Unique => &mut rarities.unique,
            };
            add_to(rarity_count, quantity);
        }

        let types = stats.type_distribution;
        stats.total_count = types
            .characters
            .saturating_add(types.spells)
            .saturating_add(types.permanents);
        Ok(stats)
    }
}
