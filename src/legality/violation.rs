//! Violation codes.
//!
//! Each code names exactly one failed deck-construction rule. The
//! string form (`ERR_...`) is stable: it is what gets persisted with a
//! deck and what message catalogues are keyed on.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::DeckError;

/// A single failed rule.
///
/// Variants are declared in evaluation order, which is also the order
/// violations are reported and displayed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ViolationCode {
    /// Too many distinct factions.
    #[serde(rename = "ERR_EXCEED_FACTION_COUNT")]
    ExceedFactionCount,
    /// Fewer cards than the format minimum.
    #[serde(rename = "ERR_NOT_ENOUGH_CARD_COUNT")]
    NotEnoughCardCount,
    /// Too many rare cards.
    #[serde(rename = "ERR_EXCEED_RARE_COUNT")]
    ExceedRareCount,
    /// Too many unique cards.
    #[serde(rename = "ERR_EXCEED_UNIQUE_COUNT")]
    ExceedUniqueCount,
    /// Some unique card has more than one copy.
    #[serde(rename = "ERR_UNIQUE_IS_REPEATED")]
    UniqueIsRepeated,
    /// Too many cards from a single family.
    #[serde(rename = "ERR_EXCEED_SAME_FAMILY_COUNT")]
    ExceedSameFamilyCount,
    /// No hero in the deck.
    #[serde(rename = "ERR_MISSING_HERO")]
    MissingHero,
}

impl ViolationCode {
    /// Number of distinct codes.
    pub const COUNT: usize = 7;

    /// Every code, in evaluation order.
    pub const ALL: [ViolationCode; Self::COUNT] = [
        ViolationCode::ExceedFactionCount,
        ViolationCode::NotEnoughCardCount,
        ViolationCode::ExceedRareCount,
        ViolationCode::ExceedUniqueCount,
        ViolationCode::UniqueIsRepeated,
        ViolationCode::ExceedSameFamilyCount,
        ViolationCode::MissingHero,
    ];

    /// Position in evaluation order.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Stable machine-readable identity.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ViolationCode::ExceedFactionCount => "ERR_EXCEED_FACTION_COUNT",
            ViolationCode::NotEnoughCardCount => "ERR_NOT_ENOUGH_CARD_COUNT",
            ViolationCode::ExceedRareCount => "ERR_EXCEED_RARE_COUNT",
            ViolationCode::ExceedUniqueCount => "ERR_EXCEED_UNIQUE_COUNT",
            ViolationCode::UniqueIsRepeated => "ERR_UNIQUE_IS_REPEATED",
            ViolationCode::ExceedSameFamilyCount => "ERR_EXCEED_SAME_FAMILY_COUNT",
            ViolationCode::MissingHero => "ERR_MISSING_HERO",
        }
    }
}

impl std::fmt::Display for ViolationCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViolationCode {
    type Err = DeckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ViolationCode::ALL
            .into_iter()
            .find(|code| code.as_str() == s)
            .ok_or_else(|| DeckError::UnknownViolation(s.to_string()))
    }
}
