//! # Sequent - Proof Search for Type-Logical Grammar
//!
//! This crate decides whether an ordered sequence of lexical items derives a
//! goal category under a sequent calculus, and builds every distinct
//! semantic reading (a lambda term) the derivations support.
//!
//! ## Core Concepts
//!
//! - **Sequents**: a constituent sequence `Γ` against a goal category `G`
//! - **Exhaustive search**: every applicable rule contributes an
//!   alternative, so a node is a derivation forest
//! - **Displacement**: a bounded structural rule pair (out/in) that emulates
//!   scope shifting, with a usage limit and a cooldown window as the
//!   termination safeguards
//! - **Readings**: terms are built by application and substitution during
//!   search and deduplicated up to alpha-equivalence
//!
//! ## Example: "j snores"
//!
//! ```rust
//! use lambek_core::{Category, Lexicon};
//! use lambek_sequent::{derive, SearchConfig};
//!
//! let lexicon = Lexicon::parse(
//!     "j : dp - j\n\
//!      snores : dp\\s - L1.snore(1)\n",
//! )
//! .unwrap();
//!
//! let goal = Category::atomic("s");
//! let outcome = derive(&lexicon, &["j", "snores"], &goal, &SearchConfig::default()).unwrap();
//! assert!(outcome.valid);
//! assert_eq!(outcome.readings(), vec!["snore(j)"]);
//! ```

pub mod corpus;
pub mod derive;
mod error;
pub mod render;
pub mod search;

pub use corpus::{run_corpus, CorpusReport, SentenceOutcome, SentenceRecord};
pub use derive::{derive, DeriveOutcome};
pub use error::SearchError;
pub use render::render_tree;
pub use search::{search, Alternative, Constituent, ProofNode, Rule, SearchConfig, Searcher};
