//! Derivability driver: from a word sequence to a derivation forest.
//!
//! A word may have several lexicon entries, so one sentence induces a whole
//! family of constituent sequences: the Cartesian product of the per-word
//! alternatives. The driver instantiates each alternative once (fresh term
//! ids through the shared allocator), searches every combination with one
//! [`Searcher`], and unions the results: the sentence is derivable iff at
//! least one combination is, and the term set collects every reading.

use lambek_core::{Category, Lexicon, Term};

use crate::error::SearchError;
use crate::search::{push_unique, Constituent, ProofNode, SearchConfig, Searcher};

/// Result of deriving one sentence against a goal category.
#[derive(Debug, Clone)]
pub struct DeriveOutcome {
    /// Whether any combination of lexical alternatives derived the goal.
    pub valid: bool,
    /// The valid root nodes, one per successful combination.
    pub forests: Vec<ProofNode>,
    /// Every contributed term, across all combinations.
    pub terms: Vec<Term>,
}

impl DeriveOutcome {
    /// The collected terms, displayed.
    pub fn readings(&self) -> Vec<String> {
        self.terms.iter().map(Term::to_string).collect()
    }
}

/// Derive `words ⊦ goal` under `config`.
///
/// A word absent from the lexicon is a distinguishable error, not ordinary
/// non-derivability: any sentence containing it could never derive anything,
/// and silence would mask the typo.
pub fn derive(
    lexicon: &Lexicon,
    words: &[&str],
    goal: &Category,
    config: &SearchConfig,
) -> Result<DeriveOutcome, SearchError> {
    let mut searcher = Searcher::new(config);

    // Instantiate every lexical alternative once; combinations below reuse
    // these constituents so ids stay stable across the whole run.
    let mut cells: Vec<Vec<Constituent>> = Vec::with_capacity(words.len());
    for word in words {
        let entries = lexicon
            .entries(word)
            .ok_or_else(|| SearchError::UnknownWord {
                word: (*word).to_string(),
            })?;
        let mut cell = Vec::with_capacity(entries.len());
        for entry in entries {
            let term = Term::parse(&entry.term_src, searcher.ids_mut());
            cell.push(Constituent::new(entry.category.clone(), term));
        }
        cells.push(cell);
    }

    let mut outcome = DeriveOutcome {
        valid: false,
        forests: Vec::new(),
        terms: Vec::new(),
    };
    for combination in combinations(&cells) {
        let root = searcher.prove(combination, goal.clone())?;
        if root.is_valid() {
            for term in &root.terms {
                push_unique(&mut outcome.terms, term.clone(), config.dedupe_terms);
            }
            outcome.valid = true;
            outcome.forests.push(root);
        }
    }
    Ok(outcome)
}

/// Cartesian product over the per-word alternatives, in lexicon order.
///
/// An empty word list yields the single empty combination (which searches
/// as an unprovable base case); an empty cell yields nothing.
fn combinations(cells: &[Vec<Constituent>]) -> Combinations<'_> {
    Combinations {
        cells,
        indices: vec![0; cells.len()],
        done: cells.iter().any(Vec::is_empty),
    }
}

struct Combinations<'a> {
    cells: &'a [Vec<Constituent>],
    indices: Vec<usize>,
    done: bool,
}

impl Iterator for Combinations<'_> {
    type Item = Vec<Constituent>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let picked = self
            .indices
            .iter()
            .zip(self.cells)
            .map(|(&index, cell)| cell[index].clone())
            .collect();

        // Odometer increment, rightmost position fastest.
        self.done = true;
        for position in (0..self.indices.len()).rev() {
            self.indices[position] += 1;
            if self.indices[position] < self.cells[position].len() {
                self.done = false;
                break;
            }
            self.indices[position] = 0;
        }
        Some(picked)
    }
}
