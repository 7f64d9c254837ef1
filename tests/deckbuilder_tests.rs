//! Deckbuilder tests.
//!
//! These tests run the whole path a deck takes:
//! - Decklist import against a card pool
//! - Metric extraction (factions, rarities, families)
//! - Legality under Standard and Draft, stored and rendered

use ccg_legality::cards::{Card, CardKind, CardPool, Faction, Rarity};
use ccg_legality::deck::{Deck, DeckStats};
use ccg_legality::legality::{
    parse_and_format, update_deck_legality, DeckLegality, DeckMetrics, GameMode, RuleSet,
    ViolationCode,
};
use ccg_legality::DeckError;

const HERO: &str = "ALT_CORE_B_AX_01_C";
const YZMIR_HERO: &str = "ALT_CORE_B_YZ_01_C";

fn axiom_character(number: u32, rarity: Rarity) -> Card {
    let suffix = match rarity {
        Rarity::Common => "C".to_string(),
        Rarity::Rare => "R1".to_string(),
        Rarity::Unique => format!("U_{number}"),
    };
    Card::new(
        format!("ALT_CORE_B_AX_{number:02}_{suffix}"),
        format!("Axiom {number}"),
        Faction::Axiom,
        CardKind::Character,
        rarity,
    )
    .with_costs((number % 6) as u8, (number % 4) as u8)
}

/// Twenty Axiom families, each printed as common, rare and unique,
/// plus a Yzmir spell and two heroes.
fn pool() -> CardPool {
    let mut pool = CardPool::new();
    pool.register(Card::hero(HERO, "Sierra & Oddball", Faction::Axiom));
    pool.register(Card::hero(YZMIR_HERO, "Akesha & Taru", Faction::Yzmir));
    for number in 2..22 {
        for rarity in Rarity::ALL {
            pool.register(axiom_character(number, rarity));
        }
    }
    pool.register(Card::new(
        "ALT_CORE_B_YZ_26_C",
        "Kraken's Wrath",
        Faction::Yzmir,
        CardKind::Spell,
        Rarity::Common,
    ));
    pool
}

/// 13 families x 3 commons = 39 cards, one faction, with hero.
fn legal_standard_decklist() -> String {
    let mut lines = vec![format!("1 {HERO}")];
    for number in 2..15 {
        lines.push(format!("3 ALT_CORE_B_AX_{number:02}_C"));
    }
    lines.join("\n")
}

// =============================================================================
// Import -> legality
// =============================================================================

/// A well-built mono-faction deck is legal everywhere.
#[test]
fn test_legal_everywhere() {
    let pool = pool();
    let deck = Deck::from_decklist("axiom", &legal_standard_decklist(), &pool).unwrap();
    let legality = update_deck_legality(&deck, &pool).unwrap();

    assert!(legality.standard.is_legal);
    assert!(legality.draft.is_legal);
    assert_eq!(
        legality.legal_modes().collect::<Vec<_>>(),
        vec![GameMode::Standard, GameMode::Draft]
    );
}

/// Splashing a second faction breaks Standard but not Draft.
#[test]
fn test_splash_breaks_standard_only() {
    let pool = pool();
    let decklist = format!("{}\n1 ALT_CORE_B_YZ_26_C", legal_standard_decklist());
    let deck = Deck::from_decklist("splash", &decklist, &pool).unwrap();
    let legality = update_deck_legality(&deck, &pool).unwrap();

    assert_eq!(
        legality.standard.violations.as_slice(),
        &[ViolationCode::ExceedFactionCount]
    );
    assert!(legality.draft.is_legal);
}

/// Rare and common prints of a number share a family.
#[test]
fn test_family_cap_spans_rarities() {
    let pool = pool();
    let decklist = format!("{}\n1 ALT_CORE_B_AX_02_R1", legal_standard_decklist());
    let deck = Deck::from_decklist("family", &decklist, &pool).unwrap();

    let metrics = DeckMetrics::extract(&deck, &pool).unwrap();
    assert_eq!(metrics.family_count.get("AX_02"), Some(&4));

    let legality = DeckLegality::evaluate(&metrics);
    assert_eq!(
        legality.standard.violations.as_slice(),
        &[ViolationCode::ExceedSameFamilyCount]
    );
}

/// Two copies of one unique break Standard; Draft does not care.
#[test]
fn test_repeated_unique() {
    let pool = pool();
    let decklist = format!("{}\n2 ALT_CORE_B_AX_20_U_20", legal_standard_decklist());
    let deck = Deck::from_decklist("uniques", &decklist, &pool).unwrap();
    let legality = update_deck_legality(&deck, &pool).unwrap();

    assert_eq!(
        legality.standard.violations.as_slice(),
        &[ViolationCode::UniqueIsRepeated]
    );
    assert!(legality.draft.is_legal);
}

/// Draft counts the hero toward its 30-card minimum.
#[test]
fn test_draft_minimum_with_hero() {
    let pool = pool();
    let mut lines = vec![format!("1 {HERO}")];
    for number in 2..11 {
        lines.push(format!("3 ALT_CORE_B_AX_{number:02}_C"));
    }
    lines.push("2 ALT_CORE_B_AX_11_C".to_string());

    let mut deck = Deck::from_decklist("draft", &lines.join("\n"), &pool).unwrap();
    assert_eq!(deck.card_count(), 29);

    let legality = update_deck_legality(&deck, &pool).unwrap();
    assert!(legality.draft.is_legal);
    assert!(!legality.standard.is_legal);

    deck.remove_card(HERO, &pool).unwrap();
    let legality = update_deck_legality(&deck, &pool).unwrap();
    assert_eq!(
        legality.draft.violations.as_slice(),
        &[ViolationCode::NotEnoughCardCount]
    );
    assert_eq!(
        legality.standard.violations.as_slice(),
        &[ViolationCode::NotEnoughCardCount, ViolationCode::MissingHero]
    );
}

/// Editing a deck and re-evaluating reflects the change.
#[test]
fn test_patch_then_reevaluate() {
    let pool = pool();
    let mut deck = Deck::from_decklist("axiom", &legal_standard_decklist(), &pool).unwrap();

    deck.patch(None, [(HERO, 0), ("ALT_CORE_B_AX_02_C", 2)], &pool);
    let legality = update_deck_legality(&deck, &pool).unwrap();
    assert_eq!(
        legality.standard.violations.as_slice(),
        &[ViolationCode::NotEnoughCardCount, ViolationCode::MissingHero]
    );

    deck.patch(None, [(YZMIR_HERO, 1), ("ALT_CORE_B_AX_02_C", 3)], &pool);
    let legality = update_deck_legality(&deck, &pool).unwrap();
    assert_eq!(
        legality.standard.violations.as_slice(),
        &[ViolationCode::ExceedFactionCount]
    );
}

// =============================================================================
// Persistence and display
// =============================================================================

/// Stored legality survives bytes and renders from stored codes.
#[test]
fn test_stored_legality() {
    let pool = pool();
    let deck = Deck::new("empty").with_hero(HERO);
    let legality = update_deck_legality(&deck, &pool).unwrap();

    let restored = DeckLegality::from_bytes(&legality.to_bytes().unwrap()).unwrap();
    assert_eq!(restored, legality);

    let stored: Vec<String> = restored
        .get(GameMode::Draft)
        .violations
        .iter()
        .map(|code| code.to_string())
        .collect();
    assert_eq!(stored, vec!["ERR_NOT_ENOUGH_CARD_COUNT"]);
    assert_eq!(
        parse_and_format(&stored, &RuleSet::draft()).unwrap(),
        vec!["Does not have enough cards (30)"]
    );
}

/// Decklist export re-imports to the same deck and stats.
#[test]
fn test_export_and_stats() {
    let pool = pool();
    let deck = Deck::from_decklist("axiom", &legal_standard_decklist(), &pool).unwrap();
    let reimported = Deck::from_decklist("axiom", &deck.to_decklist(), &pool).unwrap();
    assert_eq!(deck, reimported);

    let stats = DeckStats::compute(&deck, &pool).unwrap();
    assert_eq!(stats.total_count, 39);
    assert_eq!(stats.type_distribution.characters, 39);
    assert_eq!(stats.rarity_distribution.common, 39);
    assert_eq!(stats.mana_distribution.hand.values().sum::<u32>(), 39);
}

// =============================================================================
// Import errors
// =============================================================================

/// Bad input is rejected before any metrics are computed.
#[test]
fn test_import_errors() {
    let pool = pool();

    let err = Deck::from_decklist("bad", &format!("1 {HERO}\n1 {YZMIR_HERO}"), &pool).unwrap_err();
    assert!(matches!(err, DeckError::MultipleHeroes));

    let err = Deck::from_decklist("bad", "3 ALT_CORE_B_OR_02_C", &pool).unwrap_err();
    assert_eq!(err.to_string(), "Card 'ALT_CORE_B_OR_02_C' does not exist");

    let err = Deck::from_decklist("bad", "three ALT_CORE_B_AX_02_C", &pool).unwrap_err();
    assert!(matches!(err, DeckError::MalformedLine { .. }));
}
