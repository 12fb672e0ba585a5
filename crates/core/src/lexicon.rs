//! Flat-text lexicon: per-word (category, denotation) alternatives.
//!
//! One entry per line, `word : category - term`. Blank lines and lines
//! starting with `#` are ignored; all spaces are stripped. A word may have
//! several entries, kept in source order; lexical ambiguity is what the
//! derivability driver enumerates.
//!
//! Entries keep the raw denotation source rather than a parsed [`Term`]:
//! every use of an abstraction must allocate fresh variable ids, so terms
//! are instantiated per run by whoever owns the [`IdAlloc`].
//!
//! [`Term`]: crate::term::Term
//! [`IdAlloc`]: crate::ids::IdAlloc

use std::collections::HashMap;
use std::fmt;

use crate::category::Category;
use crate::error::GrammarError;

/// One lexical alternative for a word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexEntry {
    /// The syntactic category.
    pub category: Category,
    /// The denotation source, instantiated per run.
    pub term_src: String,
}

/// Word → ordered alternatives.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    entries: HashMap<String, Vec<LexEntry>>,
}

impl Lexicon {
    /// Create an empty lexicon.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a lexicon from its flat-text form.
    ///
    /// Fails fast on the first malformed line (missing `:` or `-`, bad
    /// category), reporting the 1-based line number.
    pub fn parse(source: &str) -> Result<Lexicon, GrammarError> {
        let mut lexicon = Lexicon::new();
        for (index, raw) in source.lines().enumerate() {
            let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
            if compact.is_empty() || compact.starts_with('#') {
                continue;
            }
            let malformed = || GrammarError::MalformedEntry {
                line: index + 1,
                entry: raw.trim().to_string(),
            };
            let colon = compact.find(':').ok_or_else(malformed)?;
            let after_colon = &compact[colon + 1..];
            let dash = after_colon.find('-').ok_or_else(malformed)?;
            let word = &compact[..colon];
            let category_src = &after_colon[..dash];
            let term_src = &after_colon[dash + 1..];
            if word.is_empty() || term_src.is_empty() {
                return Err(malformed());
            }
            let category = Category::parse(category_src)?;
            lexicon.add(word, category, term_src);
        }
        Ok(lexicon)
    }

    /// Add an alternative for a word.
    pub fn add(&mut self, word: &str, category: Category, term_src: &str) {
        self.entries
            .entry(word.to_string())
            .or_default()
            .push(LexEntry {
                category,
                term_src: term_src.to_string(),
            });
    }

    /// The ordered alternatives for a word, if it is known.
    pub fn entries(&self, word: &str) -> Option<&[LexEntry]> {
        self.entries.get(word).map(Vec::as_slice)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the lexicon has no words.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for Lexicon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut words: Vec<&String> = self.entries.keys().collect();
        words.sort();
        for word in words {
            for entry in &self.entries[word] {
                writeln!(f, "{} : {} - {}", word, entry.category, entry.term_src)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEXICON: &str = "\
# toy English fragment
john : dp - j
snores : dp\\s - L1.snore(1)

knows : (dp\\s)/dp - L1.L2.know(2,1)
knows : (dp\\s)/s - L1.L2.know(2,1)
";

    #[test]
    fn test_parse_skips_comments_and_blanks() {
        let lexicon = Lexicon::parse(LEXICON).unwrap();
        assert_eq!(lexicon.len(), 3);
    }

    #[test]
    fn test_ambiguous_word_keeps_both_entries_in_order() {
        let lexicon = Lexicon::parse(LEXICON).unwrap();
        let knows = lexicon.entries("knows").unwrap();
        assert_eq!(knows.len(), 2);
        assert_eq!(knows[0].category, Category::parse("(dp\\s)/dp").unwrap());
        assert_eq!(knows[1].category, Category::parse("(dp\\s)/s").unwrap());
    }

    #[test]
    fn test_unknown_word_is_none() {
        let lexicon = Lexicon::parse(LEXICON).unwrap();
        assert!(lexicon.entries("walter").is_none());
    }

    #[test]
    fn test_malformed_line_reports_position() {
        let err = Lexicon::parse("john : dp - j\nbroken entry\n").unwrap_err();
        assert_eq!(
            err,
            GrammarError::MalformedEntry {
                line: 2,
                entry: "broken entry".to_string()
            }
        );
    }

    #[test]
    fn test_bad_category_fails_fast() {
        assert!(matches!(
            Lexicon::parse("john : (dp - j"),
            Err(GrammarError::UnbalancedParentheses { .. })
        ));
    }

    #[test]
    fn test_display_lists_entries() {
        let lexicon = Lexicon::parse("john : dp - j").unwrap();
        assert_eq!(lexicon.to_string(), "john : dp - j\n");
    }
}
