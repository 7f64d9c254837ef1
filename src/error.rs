//! Error types for deck construction and legality persistence.
//!
//! The legality evaluator itself never fails. Errors only arise at the
//! edges: parsing decklists, resolving references against a card pool,
//! reading stored violation codes and decoding persisted legality state.

/// Result alias for fallible deck operations.
pub type Result<T> = std::result::Result<T, DeckError>;

/// Errors raised while building or reading decks.
#[derive(Debug, thiserror::Error)]
pub enum DeckError {
    /// A decklist line is not of the form `<count> <reference>`.
    #[error("Failed to unpack '{line}'")]
    MalformedLine { line: String },

    /// A card reference is not present in the card pool.
    #[error("Card '{reference}' does not exist")]
    UnknownCard { reference: String },

    /// A token or mana card was put in the main deck.
    #[error("Card '{reference}' cannot be put in a deck")]
    UnplayableCard { reference: String },

    /// A stored deck lists a card with a quantity of zero.
    #[error("Card '{reference}' has a quantity of zero")]
    ZeroQuantity { reference: String },

    /// The decklist names more than one hero.
    #[error("Multiple heroes present in the decklist")]
    MultipleHeroes,

    /// A stored violation code does not name any known rule.
    #[error("Unknown violation code '{0}'")]
    UnknownViolation(String),

    /// A short code (faction, rarity, card kind) is not recognised.
    #[error("Unknown {kind} code '{code}'")]
    UnknownCode { kind: &'static str, code: String },

    /// Persisted legality bytes could not be encoded or decoded.
    #[error("Codec error: {0}")]
    Codec(#[from] bincode::Error),
}

impl DeckError {
    /// Create an unknown-card error.
    pub fn unknown_card(reference: impl Into<String>) -> Self {
        Self::UnknownCard {
            reference: reference.into(),
        }
    }

    /// Create a malformed-line error.
    pub fn malformed_line(line: impl Into<String>) -> Self {
        Self::MalformedLine { line: line.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            DeckError::malformed_line("3").to_string(),
            "Failed to unpack '3'"
        );
        assert_eq!(
            DeckError::unknown_card("ALT_CORE_B_AX_99_C").to_string(),
            "Card 'ALT_CORE_B_AX_99_C' does not exist"
        );
        assert_eq!(
            DeckError::MultipleHeroes.to_string(),
            "Multiple heroes present in the decklist"
        );
    }
}
