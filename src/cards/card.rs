//! Card data: factions, kinds, rarities and the card record itself.
//!
//! Cards are identified by their reference string, e.g.
//! `ALT_CORE_B_YZ_08_R2`. The underscore-separated segments encode the
//! set, the print kind, the faction, the collector number and the
//! rarity variant. Legality only ever reads a card's faction, kind,
//! rarity and family code.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::DeckError;

/// Card faction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Faction {
    #[serde(rename = "AX")]
    Axiom,
    #[serde(rename = "BR")]
    Bravos,
    #[serde(rename = "LY")]
    Lyra,
    #[serde(rename = "MU")]
    Muna,
    #[serde(rename = "OR")]
    Ordis,
    #[serde(rename = "YZ")]
    Yzmir,
}

impl Faction {
    /// Every faction, in code order.
    pub const ALL: [Faction; 6] = [
        Faction::Axiom,
        Faction::Bravos,
        Faction::Lyra,
        Faction::Muna,
        Faction::Ordis,
        Faction::Yzmir,
    ];

    /// Two-letter code used in card references.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Faction::Axiom => "AX",
            Faction::Bravos => "BR",
            Faction::Lyra => "LY",
            Faction::Muna => "MU",
            Faction::Ordis => "OR",
            Faction::Yzmir => "YZ",
        }
    }

    /// Lowercase display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Faction::Axiom => "axiom",
            Faction::Bravos => "bravos",
            Faction::Lyra => "lyra",
            Faction::Muna => "muna",
            Faction::Ordis => "ordis",
            Faction::Yzmir => "yzmir",
        }
    }
}

impl std::fmt::Display for Faction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Faction {
    type Err = DeckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Faction::ALL
            .into_iter()
            .find(|f| f.code() == s || f.name() == s)
            .ok_or_else(|| DeckError::UnknownCode {
                kind: "faction",
                code: s.to_string(),
            })
    }
}

/// Card kind.
///
/// Only heroes are treated specially by deck construction. Landmarks
/// count as permanents in deck statistics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardKind {
    Hero,
    Character,
    Spell,
    Permanent,
    Landmark,
    Token,
    Mana,
}

impl CardKind {
    pub const ALL: [CardKind; 7] = [
        CardKind::Hero,
        CardKind::Character,
        CardKind::Spell,
        CardKind::Permanent,
        CardKind::Landmark,
        CardKind::Token,
        CardKind::Mana,
    ];

    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            CardKind::Hero => "hero",
            CardKind::Character => "character",
            CardKind::Spell => "spell",
            CardKind::Permanent => "permanent",
            CardKind::Landmark => "landmark",
            CardKind::Token => "token",
            CardKind::Mana => "mana",
        }
    }

    /// Can this kind of card be put in the main deck?
    #[must_use]
    pub const fn is_playable(self) -> bool {
        matches!(
            self,
            CardKind::Character | CardKind::Spell | CardKind::Permanent | CardKind::Landmark
        )
    }
}

impl FromStr for CardKind {
    type Err = DeckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CardKind::ALL
            .into_iter()
            .find(|k| k.code() == s)
            .ok_or_else(|| DeckError::UnknownCode {
                kind: "card kind",
                code: s.to_string(),
            })
    }
}

/// Card rarity tier, from most to least common.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rarity {
    #[serde(rename = "C")]
    Common,
    #[serde(rename = "R")]
    Rare,
    #[serde(rename = "U")]
    Unique,
}

impl Rarity {
    pub const ALL: [Rarity; 3] = [Rarity::Common, Rarity::Rare, Rarity::Unique];

    /// Single-letter code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Rarity::Common => "C",
            Rarity::Rare => "R",
            Rarity::Unique => "U",
        }
    }
}

impl std::fmt::Display for Rarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Rarity {
    type Err = DeckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rarity::ALL
            .into_iter()
            .find(|r| r.code() == s)
            .ok_or_else(|| DeckError::UnknownCode {
                kind: "rarity",
                code: s.to_string(),
            })
    }
}

/// Family key of a card reference.
///
/// Joins segments 3 and 4 (zero-indexed) of the underscore-separated
/// reference, i.e. faction and collector number: `ALT_CORE_B_YZ_08_R2`
/// belongs to family `YZ_08`, as does its common print
/// `ALT_CORE_B_YZ_08_C`. Short references keep whatever part of that
/// range exists.
#[must_use]
pub fn family_code(reference: &str) -> String {
    reference.split('_').skip(3).take(2).collect::<Vec<_>>().join("_")
}

/// A card as seen by deck construction.
///
/// ## Example
///
/// ```
/// use ccg_legality::cards::{Card, CardKind, Faction, Rarity};
///
/// let card = Card::new(
///     "ALT_CORE_B_YZ_08_R2",
///     "Yzmir Stargazer",
///     Faction::Axiom,
///     CardKind::Character,
///     Rarity::Rare,
/// )
/// .with_costs(1, 1);
///
/// assert_eq!(card.family_code(), "YZ_08");
/// assert!(card.is_out_of_faction());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Unique reference, also the lookup key in a `CardPool`.
    pub reference: String,

    /// Card name (for display).
    pub name: String,

    pub faction: Faction,

    pub kind: CardKind,

    pub rarity: Rarity,

    /// Cost to play from hand. `None` for heroes and tokens.
    pub main_cost: Option<u8>,

    /// Cost to play from reserve. `None` for heroes and tokens.
    pub recall_cost: Option<u8>,
}

impl Card {
    /// Create a new card without costs.
    #[must_use]
    pub fn new(
        reference: impl Into<String>,
        name: impl Into<String>,
        faction: Faction,
        kind: CardKind,
        rarity: Rarity,
    ) -> Self {
        Self {
            reference: reference.into(),
            name: name.into(),
            faction,
            kind,
            rarity,
            main_cost: None,
            recall_cost: None,
        }
    }

    /// Create a hero card. Heroes are always common.
    #[must_use]
    pub fn hero(reference: impl Into<String>, name: impl Into<String>, faction: Faction) -> Self {
        Self::new(reference, name, faction, CardKind::Hero, Rarity::Common)
    }

    /// Set hand and reserve costs (builder pattern).
    #[must_use]
    pub fn with_costs(mut self, main_cost: u8, recall_cost: u8) -> Self {
        self.main_cost = Some(main_cost);
        self.recall_cost = Some(recall_cost);
        self
    }

    #[must_use]
    pub fn is_hero(&self) -> bool {
        self.kind == CardKind::Hero
    }

    /// Family key used by the same-family cap.
    #[must_use]
    pub fn family_code(&self) -> String {
        family_code(&self.reference)
    }

    /// Promotional prints carry a `_P_` segment.
    #[must_use]
    pub fn is_promo(&self) -> bool {
        self.reference.contains("_P_")
    }

    /// True when the card's faction differs from the one in its reference.
    #[must_use]
    pub fn is_out_of_faction(&self) -> bool {
        !self.reference.contains(&format!("_{}_", self.faction.code()))
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] - {} ({})", self.faction, self.name, self.rarity)
    }
}
