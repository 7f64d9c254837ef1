//! User-facing violation messages.
//!
//! Messages are templates with an optional `{count}` placeholder that is
//! filled with the limit of the rule set that produced the violation.
//! Templates come from a `MessageCatalog`; `English` is the built-in
//! catalogue and other languages plug in through the same trait.

use std::borrow::Cow;

use super::rules::RuleSet;
use super::violation::ViolationCode;
use crate::error::Result;

/// Placeholder replaced by the rule's numeric limit.
pub const COUNT_PLACEHOLDER: &str = "{count}";

/// Source of message templates, one per violation code.
pub trait MessageCatalog {
    fn template(&self, code: ViolationCode) -> Cow<'_, str>;
}

/// Built-in English messages.
#[derive(Clone, Copy, Debug, Default)]
pub struct English;

impl MessageCatalog for English {
    fn template(&self, code: ViolationCode) -> Cow<'_, str> {
        Cow::Borrowed(match code {
            ViolationCode::ExceedFactionCount => "Exceeds maximum faction count ({count})",
            ViolationCode::NotEnoughCardCount => "Does not have enough cards ({count})",
            ViolationCode::ExceedRareCount => "Exceeds the maximum RARE card count ({count})",
            ViolationCode::ExceedUniqueCount => "Exceeds the maximum UNIQUE card count ({count})",
            ViolationCode::UniqueIsRepeated => "There's more than a single copy of a UNIQUE card",
            ViolationCode::ExceedSameFamilyCount => {
                "Exceeds the maximum card count for any given family ({count})"
            }
            ViolationCode::MissingHero => "Missing hero",
        })
    }
}

/// Fill a template's placeholder with `limit`.
///
/// An unset limit renders as `-`.
#[must_use]
pub fn render(template: &str, limit: Option<u32>) -> String {
    match limit {
        Some(count) => template.replace(COUNT_PLACEHOLDER, &count.to_string()),
        None => template.replace(COUNT_PLACEHOLDER, "-"),
    }
}

/// Message for `code` from `catalog`, using the limits of `rule_set`.
#[must_use]
pub fn format_violation_with(
    catalog: &dyn MessageCatalog,
    code: ViolationCode,
    rule_set: &RuleSet,
) -> String {
    render(&catalog.template(code), rule_set.limits().limit_for(code))
}

/// English message for `code` under `rule_set`.
///
/// ```
/// use ccg_legality::legality::{format_violation, RuleSet, ViolationCode};
///
/// assert_eq!(
///     format_violation(ViolationCode::ExceedFactionCount, &RuleSet::standard()),
///     "Exceeds maximum faction count (1)"
/// );
/// ```
#[must_use]
pub fn format_violation(code: ViolationCode, rule_set: &RuleSet) -> String {
    format_violation_with(&English, code, rule_set)
}

/// English messages for a list of violations, order preserved.
#[must_use]
pub fn format_all(codes: &[ViolationCode], rule_set: &RuleSet) -> Vec<String> {
    codes
        .iter()
        .map(|&code| format_violation(code, rule_set))
        .collect()
}

/// English messages for stored violation codes (their `ERR_*` strings).
///
/// Fails on the first string that is not a known code.
pub fn parse_and_format<S: AsRef<str>>(stored: &[S], rule_set: &RuleSet) -> Result<Vec<String>> {
    stored
        .iter()
        .map(|s| -> Result<String> {
            let code: ViolationCode = s.as_ref().parse()?;
            Ok(format_violation(code, rule_set))
        })
        .collect()
}
