//! Error types for proof search.

use lambek_core::GrammarError;
use thiserror::Error;

/// Errors that can abort a search or a derivability run.
///
/// Note what is *not* here: an unprovable sequent. Failing to find a
/// derivation is an ordinary result (`ProofNode::is_valid() == false`), not
/// an error.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SearchError {
    /// A word has no lexicon entry. Surfaced as its own condition rather
    /// than folded into ordinary non-derivability.
    #[error("Unknown word: '{word}'")]
    UnknownWord { word: String },

    /// The search exceeded its step budget before finishing.
    #[error("Search budget exhausted after {budget} proof nodes")]
    BudgetExhausted { budget: u64 },

    /// A category or lexicon failed to parse.
    #[error(transparent)]
    Grammar(#[from] GrammarError),
}
