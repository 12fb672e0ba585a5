//! Error types for chart parsing.

use lambek_core::GrammarError;
use thiserror::Error;

/// Errors that can occur while building a chart.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ChartError {
    /// A word has no lexicon entry.
    #[error("Unknown word: '{word}'")]
    UnknownWord { word: String },

    /// An atomic category has no semantic type assignment.
    #[error("No semantic type for atom: '{name}'")]
    UntypedAtom { name: String },

    /// Function application over incompatible semantic types.
    #[error("Type mismatch applying {function} to {argument}")]
    TypeMismatch { function: String, argument: String },

    /// A denotation was applied although it binds no variable.
    #[error("Denotation has no binder to apply: '{denotation}'")]
    MissingBinder { denotation: String },

    /// A category or lexicon failed to parse.
    #[error(transparent)]
    Grammar(#[from] GrammarError),
}
