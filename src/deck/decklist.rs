//! Decklist text format.
//!
//! A decklist is one `<count> <reference>` pair per line:
//!
//! ```text
//! 1 ALT_CORE_B_AX_01_C
//! 3 ALT_CORE_B_AX_04_C
//! 2 ALT_CORE_B_AX_12_R1
//! ```
//!
//! The hero is written first with a count of one. Blank lines are
//! ignored on import.

use crate::cards::CardPool;
use crate::error::{DeckError, Result};

use super::model::Deck;

/// Split a decklist line into its count and reference.
fn parse_line(line: &str) -> Result<(u32, &str)> {
    let mut tokens = line.split_whitespace();
    let (Some(count), Some(reference), None) = (tokens.next(), tokens.next(), tokens.next())
    else {
        return Err(DeckError::malformed_line(line));
    };

    match count.parse::<u32>() {
        Ok(count) if count > 0 => Ok((count, reference)),
        _ => Err(DeckError::malformed_line(line)),
    }
}

impl Deck {
    /// Build a deck from decklist text.
    ///
    /// Every reference must exist in `pool`. The first hero line sets the
    /// deck hero (its count is ignored); a second hero is an error.
    /// Repeated references accumulate. Token and mana cards are rejected.
    ///
    /// ## Example
    ///
    /// ```
    /// use ccg_legality::cards::{Card, CardKind, CardPool, Faction, Rarity};
    /// use ccg_legality::deck::Deck;
    ///
    /// let pool: CardPool = vec![
    ///     Card::hero("ALT_CORE_B_AX_01_C", "Sierra & Oddball", Faction::Axiom),
    ///     Card::new("ALT_CORE_B_AX_04_C", "Vaike", Faction::Axiom, CardKind::Character, Rarity::Common),
    /// ]
    /// .into_iter()
    /// .collect();
    ///
    /// let deck = Deck::from_decklist("axiom", "1 ALT_CORE_B_AX_01_C\n3 ALT_CORE_B_AX_04_C", &pool).unwrap();
    /// assert_eq!(deck.hero(), Some("ALT_CORE_B_AX_01_C"));
    /// assert_eq!(deck.card_count(), 3);
    /// ```
    pub fn from_decklist(name: impl Into<String>, decklist: &str, pool: &CardPool) -> Result<Self> {
        let mut deck = Deck::new(name);

        for line in decklist.lines() {
            if line.trim().is_empty() {
                continue;
            }
            let (count, reference) = parse_line(line)?;
            let card = pool.lookup(reference)?;
            log::trace!("decklist line: {count} x {reference}");

            if card.is_hero() {
                if deck.hero().is_some() {
                    return Err(DeckError::MultipleHeroes);
                }
                deck.set_hero(Some(card.reference.clone()));
            } else if !card.kind.is_playable() {
                return Err(DeckError::UnplayableCard {
                    reference: reference.to_string(),
                });
            } else {
                let total = deck
                    .quantity(reference)
                    .checked_add(count)
                    .ok_or_else(|| DeckError::malformed_line(line))?;
                deck.set_quantity(reference, total);
            }
        }

        Ok(deck)
    }

    /// Render the deck as decklist text, hero first.
    #[must_use]
    pub fn to_decklist(&self) -> String {
        self.hero()
            .map(|hero| format!("1 {hero}"))
            .into_iter()
            .chain(self.entries().map(|(reference, qty)| format!("{qty} {reference}")))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, CardKind, Faction, Rarity};

    const HERO: &str = "ALT_CORE_B_AX_01_C";
    const PROMO_HERO: &str = "ALT_CORE_P_AX_01_C";
    const CHARACTER: &str = "ALT_CORE_B_YZ_08_C";
    const SPELL: &str = "ALT_CORE_B_YZ_26_R2";
    const MANA: &str = "ALT_CORE_B_YZ_M1_C";

    fn pool() -> CardPool {
        vec![
            Card::hero(HERO, "Sierra & Oddball", Faction::Axiom),
            Card::hero(PROMO_HERO, "Sierra & Oddball", Faction::Axiom),
            Card::new(CHARACTER, "Yzmir Stargazer", Faction::Yzmir, CardKind::Character, Rarity::Common),
            Card::new(SPELL, "Kraken's Wrath", Faction::Axiom, CardKind::Spell, Rarity::Rare),
            Card::new(MANA, "Mana Orb", Faction::Yzmir, CardKind::Mana, Rarity::Common),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_parse_line() {
        assert_eq!(parse_line("3 ALT_CORE_B_YZ_08_C").unwrap(), (3, CHARACTER));
        assert_eq!(parse_line("  2\tALT_CORE_B_YZ_08_C  ").unwrap(), (2, CHARACTER));
        assert!(parse_line("ALT_CORE_B_YZ_08_C").is_err());
        assert!(parse_line("3 ALT_CORE_B_YZ_08_C extra").is_err());
        assert!(parse_line("x ALT_CORE_B_YZ_08_C").is_err());
        assert!(parse_line("-1 ALT_CORE_B_YZ_08_C").is_err());
        assert!(parse_line("0 ALT_CORE_B_YZ_08_C").is_err());
    }

    #[test]
    fn test_import() {
        let text = format!("1 {HERO}\n3 {CHARACTER}\n\n2 {SPELL}\n1 {CHARACTER}");
        let deck = Deck::from_decklist("test", &text, &pool()).unwrap();

        assert_eq!(deck.name, "test");
        assert_eq!(deck.hero(), Some(HERO));
        assert_eq!(deck.quantity(CHARACTER), 4);
        assert_eq!(deck.quantity(SPELL), 2);
    }

    #[test]
    fn test_import_malformed() {
        let err = Deck::from_decklist("test", &format!("1 {HERO}\n3{CHARACTER}"), &pool()).unwrap_err();
        assert!(matches!(err, DeckError::MalformedLine { .. }));
        assert_eq!(err.to_string(), format!("Failed to unpack '3{CHARACTER}'"));
    }

    #[test]
    fn test_import_unknown_card() {
        let err = Deck::from_decklist("test", "1 ALT_CORE_B_MU_99_C", &pool()).unwrap_err();
        assert!(matches!(err, DeckError::UnknownCard { .. }));
    }

    #[test]
    fn test_import_multiple_heroes() {
        let text = format!("1 {HERO}\n1 {PROMO_HERO}");
        let err = Deck::from_decklist("test", &text, &pool()).unwrap_err();
        assert!(matches!(err, DeckError::MultipleHeroes));
    }

    #[test]
    fn test_import_quantity_overflow() {
        let text = format!("{max} {CHARACTER}\n1 {CHARACTER}", max = u32::MAX);
        let err = Deck::from_decklist("test", &text, &pool()).unwrap_err();
        assert_eq!(err.to_string(), format!("Failed to unpack '1 {CHARACTER}'"));

        let text = format!("{max} {CHARACTER}", max = u32::MAX);
        let deck = Deck::from_decklist("test", &text, &pool()).unwrap();
        assert_eq!(deck.quantity(CHARACTER), u32::MAX);
    }

    #[test]
    fn test_import_unplayable() {
        let err = Deck::from_decklist("test", &format!("2 {MANA}"), &pool()).unwrap_err();
        assert!(matches!(err, DeckError::UnplayableCard { .. }));
    }

    #[test]
    fn test_export() {
        let deck = Deck::new("test")
            .with_hero(HERO)
            .with_card(SPELL, 2)
            .with_card(CHARACTER, 3);

        assert_eq!(deck.to_decklist(), format!("1 {HERO}\n3 {CHARACTER}\n2 {SPELL}"));
        assert_eq!(Deck::new("empty").to_decklist(), "");
    }

    #[test]
    fn test_export_reimports() {
        let pool = pool();
        let deck = Deck::new("test").with_hero(HERO).with_card(CHARACTER, 3);
        let reimported = Deck::from_decklist("test", &deck.to_decklist(), &pool).unwrap();
        assert_eq!(deck, reimported);
    }
}
