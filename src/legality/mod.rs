//! Deck legality: metrics, rule sets, evaluation and messages.
//!
//! ## Flow
//!
//! 1. `DeckMetrics::extract` summarises a deck (counts, factions,
//!    rarities, families, hero presence).
//! 2. `LegalityEvaluator::evaluate` runs a `RuleSet`'s check table over
//!    the metrics and returns the broken rules as `ViolationCode`s, in a
//!    fixed order.
//! 3. `format_violation` turns a code back into a message using the
//!    rule set's limits.
//!
//! `update_deck_legality` does steps 1 and 2 for both built-in formats.

pub mod evaluator;
pub mod message;
pub mod metrics;
pub mod report;
pub mod rules;
pub mod violation;

pub use evaluator::{LegalityEvaluator, Violations};
pub use message::{
    format_all, format_violation, format_violation_with, parse_and_format, render, English,
    MessageCatalog,
};
pub use metrics::DeckMetrics;
pub use report::{evaluate_many, update_deck_legality, DeckLegality, LegalityReport};
pub use rules::{checks, ActiveFn, CheckFn, GameMode, RuleCheck, RuleLimits, RuleSet};
pub use violation::ViolationCode;
