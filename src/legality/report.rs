//! Legality reports: what a deck stores about its own legality.
//!
//! `DeckLegality` holds one `LegalityReport` per built-in format. It is
//! recomputed whenever a deck changes and persisted alongside it, either
//! through serde or as compact bincode bytes.

use serde::{Deserialize, Serialize};

use super::evaluator::{LegalityEvaluator, Violations};
use super::message::format_all;
use super::metrics::DeckMetrics;
use super::rules::{GameMode, RuleSet};
use crate::cards::CardPool;
use crate::deck::Deck;
use crate::error::Result;

/// Outcome of evaluating one deck under one rule set.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalityReport {
    pub is_legal: bool,
    pub violations: Violations,
}

impl LegalityReport {
    #[must_use]
    pub fn from_violations(violations: Violations) -> Self {
        Self {
            is_legal: violations.is_empty(),
            violations,
        }
    }

    /// Evaluate `metrics` under `rule_set`.
    #[must_use]
    pub fn evaluate(metrics: &DeckMetrics, rule_set: &RuleSet) -> Self {
        Self::from_violations(LegalityEvaluator::evaluate(metrics, rule_set))
    }

    /// English messages for this report's violations.
    ///
    /// `rule_set` must be the one the report was produced with.
    #[must_use]
    pub fn messages(&self, rule_set: &RuleSet) -> Vec<String> {
        format_all(&self.violations, rule_set)
    }
}

/// Legality of a deck under every built-in format.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckLegality {
    pub standard: LegalityReport,
    pub draft: LegalityReport,
}

impl DeckLegality {
    /// Evaluate metrics under Standard and Draft.
    #[must_use]
    pub fn evaluate(metrics: &DeckMetrics) -> Self {
        Self {
            standard: LegalityReport::evaluate(metrics, &RuleSet::standard()),
            draft: LegalityReport::evaluate(metrics, &RuleSet::draft()),
        }
    }

    /// The report for one mode.
    #[must_use]
    pub fn get(&self, mode: GameMode) -> &LegalityReport {
        match mode {
            GameMode::Standard => &self.standard,
            GameMode::Draft => &self.draft,
        }
    }

    /// Modes under which the deck is legal.
    pub fn legal_modes(&self) -> impl Iterator<Item = GameMode> + '_ {
        GameMode::ALL
            .into_iter()
            .filter(move |&mode| self.get(mode).is_legal)
    }

    /// Encode for storage.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode bytes produced by `to_bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}

/// Extract a deck's metrics and evaluate it under every built-in format.
pub fn update_deck_legality(deck: &Deck, pool: &CardPool) -> Result<DeckLegality> {
    let metrics = DeckMetrics::extract(deck, pool)?;
    let legality = DeckLegality::evaluate(&metrics);
    log::debug!(
        "deck '{}': standard legal = {}, draft legal = {}",
        deck.name,
        legality.standard.is_legal,
        legality.draft.is_legal
    );
    Ok(legality)
}

/// Evaluate many decks' metrics under one rule set.
///
/// Each evaluation is independent; output order follows input order.
pub fn evaluate_many<'a, I>(metrics: I, rule_set: &'a RuleSet) -> impl Iterator<Item = LegalityReport> + 'a
where
    I: IntoIterator<Item = &'a DeckMetrics>,
    I::IntoIter: 'a,
{
    metrics
        .into_iter()
        .map(move |m| LegalityReport::evaluate(m, rule_set))
}
