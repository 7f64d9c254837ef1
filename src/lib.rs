//! # ccg-legality
//!
//! Deck legality engine for a collectible card game deckbuilder.
//!
//! Given a deck, decide whether it is legal in each competitive format
//! and, if not, exactly which construction rules it breaks.
//!
//! ## Design Principles
//!
//! 1. **Pure Evaluation**: Legality is a function of a deck's metrics and
//!    a rule set. No I/O, no hidden state; safe to call from any thread.
//!
//! 2. **Formats Are Data**: A format is a `RuleLimits` configuration plus
//!    a table of checks. New formats reuse the shared checks and replace
//!    only what differs, as Draft does for its card minimum.
//!
//! 3. **Stable Codes**: Violations are reported as `ViolationCode`s with
//!    fixed `ERR_*` identities, in a fixed order. Messages are rendered
//!    separately from a catalogue.
//!
//! ## Modules
//!
//! - `cards`: Card data (faction, kind, rarity, family) and the card pool
//! - `deck`: Deck model, decklist text format, deck statistics
//! - `legality`: Metrics, rule sets, evaluator, messages, reports
//! - `error`: Errors raised at the parsing and lookup edges

pub mod cards;
pub mod deck;
pub mod error;
pub mod legality;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::cards::{family_code, Card, CardKind, CardPool, Faction, Rarity};

pub use crate::deck::{Deck, DeckStats};

pub use crate::error::{DeckError, Result};

pub use crate::legality::{
    evaluate_many, format_all, format_violation, format_violation_with, parse_and_format,
    update_deck_legality, DeckLegality, DeckMetrics, English, GameMode, LegalityEvaluator,
    LegalityReport, MessageCatalog, RuleCheck, RuleLimits, RuleSet, ViolationCode, Violations,
};
