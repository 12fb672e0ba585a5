//! Batch derivation over a sentence list.
//!
//! One sentence per line, blank lines skipped. A trailing question mark
//! (ASCII `?` or fullwidth `？`) selects the question goal category `q`;
//! everything else targets `s`. Each sentence yields a serializable record
//! distinguishing three outcomes: derivable (with its readings),
//! underivable, and unknown word.

use serde::Serialize;

use lambek_core::{Category, Lexicon};

use crate::derive::derive;
use crate::error::SearchError;
use crate::search::SearchConfig;

/// What happened to one sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SentenceOutcome {
    /// At least one derivation reached the goal.
    Derivable { readings: Vec<String> },
    /// Every combination of lexical alternatives failed.
    Underivable,
    /// A word had no lexicon entry; the sentence was never searched.
    UnknownWord { word: String },
}

/// One corpus line and its result.
#[derive(Debug, Clone, Serialize)]
pub struct SentenceRecord {
    pub sentence: String,
    pub goal: String,
    pub outcome: SentenceOutcome,
}

impl SentenceRecord {
    /// Whether this sentence derived its goal.
    pub fn is_derivable(&self) -> bool {
        matches!(self.outcome, SentenceOutcome::Derivable { .. })
    }
}

/// All records of a corpus run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CorpusReport {
    pub records: Vec<SentenceRecord>,
}

impl CorpusReport {
    /// Count of derivable sentences.
    pub fn derivable_count(&self) -> usize {
        self.records.iter().filter(|r| r.is_derivable()).count()
    }

    /// Pretty-printed JSON form of the whole report.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Run every sentence in `sentences` against the lexicon.
///
/// Unknown words are recorded per sentence; a blown step budget aborts the
/// whole run rather than misreporting the sentence as underivable.
pub fn run_corpus(
    lexicon: &Lexicon,
    sentences: &str,
    config: &SearchConfig,
) -> Result<CorpusReport, SearchError> {
    let mut report = CorpusReport::default();
    for raw in sentences.lines() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let (text, goal_name) = match line
            .strip_suffix('?')
            .or_else(|| line.strip_suffix('\u{ff1f}'))
        {
            Some(stripped) => (stripped.trim(), "q"),
            None => (line, "s"),
        };
        let goal = Category::atomic(goal_name);
        let words: Vec<&str> = text.split_whitespace().collect();
        let outcome = match derive(lexicon, &words, &goal, config) {
            Ok(result) if result.valid => SentenceOutcome::Derivable {
                readings: result.readings(),
            },
            Ok(_) => SentenceOutcome::Underivable,
            Err(SearchError::UnknownWord { word }) => SentenceOutcome::UnknownWord { word },
            Err(other) => return Err(other),
        };
        report.records.push(SentenceRecord {
            sentence: text.to_string(),
            goal: goal_name.to_string(),
            outcome,
        });
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEXICON: &str = "\
j : dp - j
snores : dp\\s - L1.snore(1)
";

    #[test]
    fn test_corpus_distinguishes_outcomes() {
        let lexicon = Lexicon::parse(LEXICON).unwrap();
        let report = run_corpus(
            &lexicon,
            "j snores\n\nsnores j\nj mumbles\n",
            &SearchConfig::default(),
        )
        .unwrap();

        assert_eq!(report.records.len(), 3);
        assert_eq!(report.derivable_count(), 1);
        assert_eq!(
            report.records[0].outcome,
            SentenceOutcome::Derivable {
                readings: vec!["snore(j)".to_string()]
            }
        );
        assert_eq!(report.records[1].outcome, SentenceOutcome::Underivable);
        assert_eq!(
            report.records[2].outcome,
            SentenceOutcome::UnknownWord {
                word: "mumbles".to_string()
            }
        );
    }

    #[test]
    fn test_question_mark_selects_question_goal() {
        let lexicon = Lexicon::parse(LEXICON).unwrap();
        let report = run_corpus(
            &lexicon,
            "j snores ?\nj snores\u{ff1f}\n",
            &SearchConfig::default(),
        )
        .unwrap();
        assert_eq!(report.records[0].goal, "q");
        assert_eq!(report.records[0].sentence, "j snores");
        assert_eq!(report.records[1].goal, "q");
        // No q-typed entries in this lexicon, so questions stay underivable.
        assert_eq!(report.records[0].outcome, SentenceOutcome::Underivable);
    }

    #[test]
    fn test_report_serializes_to_json() {
        let lexicon = Lexicon::parse(LEXICON).unwrap();
        let report = run_corpus(&lexicon, "j snores\n", &SearchConfig::default()).unwrap();
        let json = report.to_json().unwrap();
        assert!(json.contains("\"status\": \"derivable\""));
        assert!(json.contains("snore(j)"));
    }
}
