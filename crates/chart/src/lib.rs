//! # Chart - Bottom-Up Parsing Baseline
//!
//! This crate implements the simple half of the workspace: an incremental
//! chart parser that combines adjacent constituents by direct function
//! application only. It exists as a sanity check for the sequent engine
//! (anything the chart derives, the sequent calculus must derive too) and
//! as a readable first model of the grammar.
//!
//! ## Core Concepts
//!
//! - **Eliminations only**: `X, X\Y ⇒ Y` and `X/Y, Y ⇒ X`; no hypothetical
//!   reasoning, no displacement, no alternative lexical assignments
//! - **Semantic typing**: atoms map to e/t types and applications are
//!   checked against them
//! - **Constituency chart**: complete parses render as dashed span rows
//!   over the word line
//!
//! ## Example: "kevin snores"
//!
//! ```rust
//! use lambek_chart::{Chart, SemTypeMap};
//! use lambek_core::{Category, Lexicon};
//!
//! let lexicon = Lexicon::parse(
//!     "kevin : dp - k\n\
//!      snores : dp\\s - L1.snore(1)\n",
//! )
//! .unwrap();
//!
//! let chart = Chart::parse(&lexicon, "kevin snores", &SemTypeMap::default()).unwrap();
//! let goal = Category::atomic("s");
//! assert!(chart.is_derivable(&goal));
//! assert_eq!(chart.spanning(&goal)[0].denotation.text, "snore(k)");
//! ```

pub mod chart;
mod error;
pub mod semtype;

pub use chart::{render_chart, Chart, ChartDenotation, ChartEntry};
pub use error::ChartError;
pub use semtype::{SemType, SemTypeMap};
