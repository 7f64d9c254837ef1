//! Rule sets: named deck-construction formats.
//!
//! A `RuleSet` pairs a `RuleLimits` configuration with a table of
//! checks, one per `ViolationCode`. Every format starts from the
//! default table and may substitute individual checks: Draft swaps
//! only the minimum-count predicate so the hero counts as a card.
//!
//! A check runs only when its limit is set in the configuration.

use serde::{Deserialize, Serialize};

use super::metrics::DeckMetrics;
use super::violation::ViolationCode;

/// Limits of one format. `None` / `false` means "not enforced".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleLimits {
    pub max_faction_count: Option<u32>,
    pub min_total_count: Option<u32>,
    pub max_rare_count: Option<u32>,
    pub max_unique_count: Option<u32>,
    pub enforce_individual_uniques: bool,
    pub max_same_family_count: Option<u32>,
    pub is_hero_mandatory: bool,
}

impl RuleLimits {
    /// Limits with nothing enforced.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_faction_count: None,
            min_total_count: None,
            max_rare_count: None,
            max_unique_count: None,
            enforce_individual_uniques: false,
            max_same_family_count: None,
            is_hero_mandatory: false,
        }
    }

    #[must_use]
    pub const fn with_max_faction_count(mut self, max: u32) -> Self {
        self.max_faction_count = Some(max);
        self
    }

    #[must_use]
    pub const fn with_min_total_count(mut self, min: u32) -> Self {
        self.min_total_count = Some(min);
        self
    }

    #[must_use]
    pub const fn with_max_rare_count(mut self, max: u32) -> Self {
        self.max_rare_count = Some(max);
        self
    }

    #[must_use]
    pub const fn with_max_unique_count(mut self, max: u32) -> Self {
        self.max_unique_count = Some(max);
        self
    }

    /// Forbid more than one copy of any unique card.
    #[must_use]
    pub const fn individual_uniques(mut self) -> Self {
        self.enforce_individual_uniques = true;
        self
    }

    #[must_use]
    pub const fn with_max_same_family_count(mut self, max: u32) -> Self {
        self.max_same_family_count = Some(max);
        self
    }

    #[must_use]
    pub const fn hero_mandatory(mut self) -> Self {
        self.is_hero_mandatory = true;
        self
    }

    /// The numeric limit a violation message refers to, if any.
    #[must_use]
    pub const fn limit_for(&self, code: ViolationCode) -> Option<u32> {
        match code {
            ViolationCode::ExceedFactionCount => self.max_faction_count,
            ViolationCode::NotEnoughCardCount => self.min_total_count,
            ViolationCode::ExceedRareCount => self.max_rare_count,
            ViolationCode::ExceedUniqueCount => self.max_unique_count,
            ViolationCode::ExceedSameFamilyCount => self.max_same_family_count,
            ViolationCode::UniqueIsRepeated | ViolationCode::MissingHero => None,
        }
    }
}

/// Predicate over metrics and limits. Returns true when the rule is broken.
pub type CheckFn = fn(&DeckMetrics, &RuleLimits) -> bool;

/// Whether a check applies under the given limits.
pub type ActiveFn = fn(&RuleLimits) -> bool;

/// One entry of a rule set's check table.
#[derive(Clone, Copy)]
pub struct RuleCheck {
    pub code: ViolationCode,
    pub is_active: ActiveFn,
    pub is_violated: CheckFn,
}

impl std::fmt::Debug for RuleCheck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleCheck").field("code", &self.code).finish_non_exhaustive()
    }
}

impl RuleCheck {
    /// Run this check. Inactive checks never report a violation.
    #[must_use]
    pub fn fails(&self, metrics: &DeckMetrics, limits: &RuleLimits) -> bool {
        (self.is_active)(limits) && (self.is_violated)(metrics, limits)
    }

    /// The shared check for `code`.
    #[must_use]
    pub fn default_for(code: ViolationCode) -> Self {
        let (is_active, is_violated): (ActiveFn, CheckFn) = match code {
            ViolationCode::ExceedFactionCount => {
                (checks::limits_factions, checks::too_many_factions)
            }
            ViolationCode::NotEnoughCardCount => {
                (checks::limits_total_count, checks::not_enough_cards)
            }
            ViolationCode::ExceedRareCount => (checks::limits_rares, checks::too_many_rares),
            ViolationCode::ExceedUniqueCount => {
                (checks::limits_uniques, checks::too_many_uniques)
            }
            ViolationCode::UniqueIsRepeated => {
                (checks::limits_unique_copies, checks::unique_repeated)
            }
            ViolationCode::ExceedSameFamilyCount => {
                (checks::limits_families, checks::too_many_of_a_family)
            }
            ViolationCode::MissingHero => (checks::requires_hero, checks::missing_hero),
        };

        Self {
            code,
            is_active,
            is_violated,
        }
    }
}

/// Predicates and activity flags shared by the built-in formats.
pub mod checks {
    use super::{DeckMetrics, RuleLimits};

    pub fn limits_factions(limits: &RuleLimits) -> bool {
        limits.max_faction_count.is_some()
    }

    pub fn limits_total_count(limits: &RuleLimits) -> bool {
        limits.min_total_count.is_some()
    }

    pub fn limits_rares(limits: &RuleLimits) -> bool {
        limits.max_rare_count.is_some()
    }

    pub fn limits_uniques(limits: &RuleLimits) -> bool {
        limits.max_unique_count.is_some()
    }

    pub fn limits_unique_copies(limits: &RuleLimits) -> bool {
        limits.enforce_individual_uniques
    }

    pub fn limits_families(limits: &RuleLimits) -> bool {
        limits.max_same_family_count.is_some()
    }

    pub fn requires_hero(limits: &RuleLimits) -> bool {
        limits.is_hero_mandatory
    }

    pub fn too_many_factions(metrics: &DeckMetrics, limits: &RuleLimits) -> bool {
        limits
            .max_faction_count
            .is_some_and(|max| metrics.faction_count > max)
    }

    /// Fewer non-hero cards than the minimum.
    pub fn not_enough_cards(metrics: &DeckMetrics, limits: &RuleLimits) -> bool {
        limits
            .min_total_count
            .is_some_and(|min| metrics.total_count < min)
    }

    /// Fewer cards than the minimum, with the hero counting as one card.
    pub fn not_enough_cards_counting_hero(metrics: &DeckMetrics, limits: &RuleLimits) -> bool {
        limits
            .min_total_count
            .is_some_and(|min| metrics.total_count.saturating_add(u32::from(metrics.has_hero)) < min)
    }

    pub fn too_many_rares(metrics: &DeckMetrics, limits: &RuleLimits) -> bool {
        limits
            .max_rare_count
            .is_some_and(|max| metrics.rare_count > max)
    }

    pub fn too_many_uniques(metrics: &DeckMetrics, limits: &RuleLimits) -> bool {
        limits
            .max_unique_count
            .is_some_and(|max| metrics.unique_count > max)
    }

    pub fn unique_repeated(metrics: &DeckMetrics, _limits: &RuleLimits) -> bool {
        metrics.repeats_same_unique
    }

    /// Empty decks have a largest family of 0 and never fail.
    pub fn too_many_of_a_family(metrics: &DeckMetrics, limits: &RuleLimits) -> bool {
        limits
            .max_same_family_count
            .is_some_and(|max| metrics.max_family_count() > max)
    }

    pub fn missing_hero(metrics: &DeckMetrics, _limits: &RuleLimits) -> bool {
        !metrics.has_hero
    }
}

/// A named format: limits plus the check table.
///
/// ## Example
///
/// ```
/// use ccg_legality::legality::{DeckMetrics, RuleLimits, RuleSet, ViolationCode};
///
/// let casual = RuleSet::new("casual", RuleLimits::new().with_min_total_count(20));
/// let metrics = DeckMetrics { total_count: 12, ..DeckMetrics::default() };
///
/// assert_eq!(casual.validate(&metrics).as_slice(), &[ViolationCode::NotEnoughCardCount]);
/// ```
#[derive(Clone, Debug)]
pub struct RuleSet {
    name: String,
    limits: RuleLimits,
    /// Indexed by `ViolationCode::index`, so iteration is evaluation order.
    checks: [RuleCheck; ViolationCode::COUNT],
}

impl RuleSet {
    /// Create a rule set using the shared check for every rule.
    #[must_use]
    pub fn new(name: impl Into<String>, limits: RuleLimits) -> Self {
        Self {
            name: name.into(),
            limits,
            checks: ViolationCode::ALL.map(RuleCheck::default_for),
        }
    }

    /// Standard: one faction, hero mandatory, at least 39 cards, at most
    /// 15 rares, 3 uniques and 3 cards per family, no repeated uniques.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(
            "standard",
            RuleLimits::new()
                .with_max_faction_count(1)
                .with_min_total_count(39)
                .with_max_rare_count(15)
                .with_max_unique_count(3)
                .individual_uniques()
                .with_max_same_family_count(3)
                .hero_mandatory(),
        )
    }

    /// Draft: up to three factions and at least 30 cards, the hero
    /// counting as one. Nothing else is enforced.
    #[must_use]
    pub fn draft() -> Self {
        Self::new(
            "draft",
            RuleLimits::new()
                .with_max_faction_count(3)
                .with_min_total_count(30),
        )
        .with_check(
            ViolationCode::NotEnoughCardCount,
            checks::not_enough_cards_counting_hero,
        )
    }

    /// Substitute the predicate for one rule (builder pattern).
    ///
    /// The rule still only runs when its limit is set.
    #[must_use]
    pub fn with_check(mut self, code: ViolationCode, is_violated: CheckFn) -> Self {
        self.checks[code.index()].is_violated = is_violated;
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn limits(&self) -> &RuleLimits {
        &self.limits
    }

    /// The check table, in evaluation order.
    #[must_use]
    pub fn checks(&self) -> &[RuleCheck] {
        &self.checks
    }

    /// The check registered for `code`.
    #[must_use]
    pub fn check(&self, code: ViolationCode) -> &RuleCheck {
        &self.checks[code.index()]
    }

    /// Is the rule for `code` enforced by this format?
    #[must_use]
    pub fn is_active(&self, code: ViolationCode) -> bool {
        (self.check(code).is_active)(&self.limits)
    }
}

/// The built-in formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    Standard,
    Draft,
}

impl GameMode {
    pub const ALL: [GameMode; 2] = [GameMode::Standard, GameMode::Draft];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            GameMode::Standard => "standard",
            GameMode::Draft => "draft",
        }
    }

    /// Build this mode's rule set.
    #[must_use]
    pub fn rule_set(self) -> RuleSet {
        match self {
            GameMode::Standard => RuleSet::standard(),
            GameMode::Draft => RuleSet::draft(),
        }
    }
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
