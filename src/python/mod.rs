//! Python bindings for the deck legality engine.
//!
//! # Quick Start
//!
//! ```python
//! import ccg_legality as legality
//!
//! metrics = legality.DeckMetrics(faction_count=1, total_count=38, has_hero=True)
//! standard = legality.RuleSet.standard()
//!
//! standard.validate(metrics)   # ["ERR_NOT_ENOUGH_CARD_COUNT"]
//! standard.messages(metrics)   # ["Does not have enough cards (39)"]
//! ```

use pyo3::prelude::*;

mod py_legality;

pub use py_legality::*;

/// ccg_legality: deck legality checks for Python callers.
#[pymodule]
fn ccg_legality(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyDeckMetrics>()?;
    m.add_class::<PyRuleSet>()?;
    Ok(())
}
