//! # Core - Type-Logical Grammar Foundations
//!
//! This crate provides the shared vocabulary for the lambek workspace:
//!
//! - **Categories**: atomic tokens and directional function types, parsed
//!   from fully parenthesized strings
//! - **Terms**: immutable lambda terms with capture-avoiding substitution,
//!   beta/eta reduction, and alpha-equivalence
//! - **Ids**: the explicit variable/gap counter threaded through a run
//! - **Lexicon**: flat-text `word : category - term` entries with
//!   per-word alternatives
//! - **Errors**: fail-fast construction failures
//!
//! ## Design Philosophy
//!
//! Everything here is a plain immutable value. Reduction state is never
//! hidden inside a term (no "already simplified" self-references): smart
//! constructors return reduced terms and `reduce()` is a pure function.
//! Likewise the id counters are never ambient process state; whoever runs
//! a search owns the allocator.

pub mod category;
pub mod error;
pub mod ids;
pub mod lexicon;
pub mod term;

// Re-export key types at crate root for convenience
pub use category::{Category, Gap, GapKind, Slash};
pub use error::GrammarError;
pub use ids::{GapId, IdAlloc, VarId};
pub use lexicon::{LexEntry, Lexicon};
pub use term::Term;
