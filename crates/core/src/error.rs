//! Error types for grammar construction.

use thiserror::Error;

/// Errors raised while building categories, terms, or lexica.
///
/// Construction errors are fail-fast: a malformed category or lexicon line
/// aborts the parse and is propagated to the caller unchanged.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GrammarError {
    /// Parentheses do not balance in a category string.
    #[error("Unbalanced parentheses in category: '{input}'")]
    UnbalancedParentheses { input: String },

    /// A category string contains a slash, but none at the top level.
    #[error("No top-level slash in category: '{input}'")]
    MissingTopLevelSlash { input: String },

    /// A category (or one of its sub-spans) is empty.
    #[error("Empty category")]
    EmptyCategory,

    /// A lexicon line is not of the form `word : category - term`.
    #[error("Malformed lexicon entry (line {line}): '{entry}'")]
    MalformedEntry { line: usize, entry: String },
}
