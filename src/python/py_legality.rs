//! Legality bindings for Python.

use std::collections::HashMap;

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::legality::{format_all, DeckMetrics, GameMode, LegalityEvaluator, RuleSet};

/// Python wrapper for DeckMetrics.
#[pyclass(name = "DeckMetrics")]
#[derive(Clone, Debug)]
pub struct PyDeckMetrics(pub DeckMetrics);

#[pymethods]
impl PyDeckMetrics {
    #[new]
    #[pyo3(signature = (
        faction_count,
        total_count,
        rare_count = 0,
        unique_count = 0,
        repeats_same_unique = false,
        family_count = None,
        has_hero = false
    ))]
    fn new(
        faction_count: u32,
        total_count: u32,
        rare_count: u32,
        unique_count: u32,
        repeats_same_unique: bool,
        family_count: Option<HashMap<String, u32>>,
        has_hero: bool,
    ) -> Self {
        Self(DeckMetrics {
            faction_count,
            total_count,
            rare_count,
            unique_count,
            repeats_same_unique,
            family_count: family_count.unwrap_or_default().into_iter().collect(),
            has_hero,
        })
    }

    #[getter]
    fn faction_count(&self) -> u32 {
        self.0.faction_count
    }

    #[getter]
    fn total_count(&self) -> u32 {
        self.0.total_count
    }

    #[getter]
    fn has_hero(&self) -> bool {
        self.0.has_hero
    }

    fn __repr__(&self) -> String {
        format!(
            "DeckMetrics(factions={}, total={}, hero={})",
            self.0.faction_count, self.0.total_count, self.0.has_hero
        )
    }
}

/// Python wrapper for RuleSet.
#[pyclass(name = "RuleSet")]
#[derive(Clone, Debug)]
pub struct PyRuleSet(pub RuleSet);

#[pymethods]
impl PyRuleSet {
    /// Look up a built-in format by name ("standard" or "draft").
    #[new]
    fn new(name: &str) -> PyResult<Self> {
        GameMode::ALL
            .into_iter()
            .find(|mode| mode.name() == name)
            .map(|mode| Self(mode.rule_set()))
            .ok_or_else(|| PyValueError::new_err(format!("unknown game mode '{name}'")))
    }

    #[staticmethod]
    fn standard() -> Self {
        Self(RuleSet::standard())
    }

    #[staticmethod]
    fn draft() -> Self {
        Self(RuleSet::draft())
    }

    #[getter]
    fn name(&self) -> String {
        self.0.name().to_string()
    }

    /// Violation codes (`ERR_*` strings) in evaluation order.
    fn validate(&self, metrics: &PyDeckMetrics) -> Vec<String> {
        LegalityEvaluator::evaluate(&metrics.0, &self.0)
            .iter()
            .map(|code| code.as_str().to_string())
            .collect()
    }

    fn is_legal(&self, metrics: &PyDeckMetrics) -> bool {
        LegalityEvaluator::is_legal(&metrics.0, &self.0)
    }

    /// English messages for the violations of `metrics`.
    fn messages(&self, metrics: &PyDeckMetrics) -> Vec<String> {
        let violations = LegalityEvaluator::evaluate(&metrics.0, &self.0);
        format_all(&violations, &self.0)
    }

    fn __repr__(&self) -> String {
        format!("RuleSet({})", self.0.name())
    }
}
