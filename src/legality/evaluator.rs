//! Legality evaluation.
//!
//! Runs every check of a rule set against one deck's metrics and
//! collects the failures in table order. Evaluation is pure: the same
//! inputs always give the same, identically ordered output.

use smallvec::SmallVec;

use super::metrics::DeckMetrics;
use super::rules::RuleSet;
use super::violation::ViolationCode;

/// Violations of one rule set. Never longer than `ViolationCode::COUNT`.
pub type Violations = SmallVec<[ViolationCode; ViolationCode::COUNT]>;

/// Evaluator for rule sets.
pub struct LegalityEvaluator;

impl LegalityEvaluator {
    /// Every rule of `rule_set` that `metrics` breaks, in evaluation order.
    ///
    /// Checks are independent; one failure never hides another.
    #[must_use]
    pub fn evaluate(metrics: &DeckMetrics, rule_set: &RuleSet) -> Violations {
        let limits = rule_set.limits();
        let violations: Violations = rule_set
            .checks()
            .iter()
            .filter(|check| check.fails(metrics, limits))
            .map(|check| check.code)
            .collect();

        if !violations.is_empty() {
            log::debug!(
                "{} rules broken: {:?}",
                rule_set.name(),
                violations.as_slice()
            );
        }
        violations
    }

    /// Is the deck legal under `rule_set`?
    #[must_use]
    pub fn is_legal(metrics: &DeckMetrics, rule_set: &RuleSet) -> bool {
        let limits = rule_set.limits();
        !rule_set
            .checks()
            .iter()
            .any(|check| check.fails(metrics, limits))
    }
}

impl RuleSet {
    /// Shorthand for `LegalityEvaluator::evaluate(metrics, self)`.
    #[must_use]
    pub fn validate(&self, metrics: &DeckMetrics) -> Violations {
        LegalityEvaluator::evaluate(metrics, self)
    }
}
