//! Bottom-up chart parsing by direct function application.
//!
//! The chart is the sanity-check baseline for the sequent engine: it only
//! combines adjacent constituents by elimination (`X, X\Y ⇒ Y` and
//! `X/Y, Y ⇒ X`), with no hypothetical reasoning, no displacement, and one
//! lexical assignment per word. Denotations are deliberately naive (raw
//! variable names, textual replacement), which is fine for a baseline that
//! never nests two binders of the same name; the sequent engine is the one
//! that threads globally unique ids.

use std::collections::VecDeque;
use std::fmt;

use lambek_core::{Category, Lexicon, Slash};

use crate::error::ChartError;
use crate::semtype::{SemType, SemTypeMap};

/// A denotation string with its leading binder split off, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartDenotation {
    /// The full text form.
    pub text: String,
    /// `(variable, body)` when the text has a leading `L<var>.<body>`.
    binder: Option<(String, String)>,
}

impl ChartDenotation {
    /// Split a denotation string into binder and body.
    pub fn new(text: &str) -> Self {
        let binder = match (text.find('L'), text.find('.')) {
            (Some(lambda), Some(dot)) if dot > lambda + 1 => Some((
                text[lambda + 1..dot].to_string(),
                text[dot + 1..].to_string(),
            )),
            _ => None,
        };
        Self {
            text: text.to_string(),
            binder,
        }
    }

    /// Whether this denotation awaits no argument.
    pub fn is_satiated(&self) -> bool {
        self.binder.is_none()
    }

    /// Apply to an argument by textual replacement of the bound name.
    pub fn apply(&self, argument: &ChartDenotation) -> Result<ChartDenotation, ChartError> {
        let (variable, body) = self
            .binder
            .as_ref()
            .ok_or_else(|| ChartError::MissingBinder {
                denotation: self.text.clone(),
            })?;
        Ok(ChartDenotation::new(
            &body.replace(variable.as_str(), &argument.text),
        ))
    }
}

impl fmt::Display for ChartDenotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A chart constituent: category, types, denotation, and span.
#[derive(Debug, Clone)]
pub struct ChartEntry {
    pub category: Category,
    pub semtype: SemType,
    pub denotation: ChartDenotation,
    /// First word position covered.
    pub start: usize,
    /// One past the last word position covered.
    pub end: usize,
    /// The two constituents this one was combined from, leaves excepted.
    pub children: Vec<ChartEntry>,
}

impl fmt::Display for ChartEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}:{}",
            self.category, self.semtype, self.denotation, self.start, self.end
        )
    }
}

/// `X, X\Y ⇒ Y`: the right constituent consumes the left.
fn left_eliminate(left: &Category, right: &Category) -> Option<Category> {
    if let Category::Function {
        left: argument,
        right: result,
        slash: Slash::Left,
    } = right
    {
        if **argument == *left {
            return Some((**result).clone());
        }
    }
    None
}

/// `X/Y, Y ⇒ X`: the left constituent consumes the right.
fn right_eliminate(left: &Category, right: &Category) -> Option<Category> {
    if let Category::Function {
        left: result,
        right: argument,
        slash: Slash::Right,
    } = left
    {
        if **argument == *right {
            return Some((**result).clone());
        }
    }
    None
}

/// Apply `function`'s denotation to `argument`'s, checking semantic types.
fn apply_checked(
    function: &ChartEntry,
    argument: &ChartEntry,
) -> Result<(SemType, ChartDenotation), ChartError> {
    match &function.semtype {
        SemType::Fun(expected, result) if **expected == argument.semtype => {
            let denotation = function.denotation.apply(&argument.denotation)?;
            Ok(((**result).clone(), denotation))
        }
        _ => Err(ChartError::TypeMismatch {
            function: function.semtype.to_string(),
            argument: argument.semtype.to_string(),
        }),
    }
}

/// Combine two adjacent constituents by elimination, if possible.
fn combine(left: &ChartEntry, right: &ChartEntry) -> Result<Option<ChartEntry>, ChartError> {
    let (category, function, argument) = if let Some(category) =
        left_eliminate(&left.category, &right.category)
    {
        (category, right, left)
    } else if let Some(category) = right_eliminate(&left.category, &right.category) {
        (category, left, right)
    } else {
        return Ok(None);
    };
    let (semtype, denotation) = apply_checked(function, argument)?;
    Ok(Some(ChartEntry {
        category,
        semtype,
        denotation,
        start: left.start,
        end: right.end,
        children: vec![left.clone(), right.clone()],
    }))
}

/// The populated chart for one sentence.
#[derive(Debug, Clone)]
pub struct Chart {
    pub words: Vec<String>,
    pub constituents: Vec<ChartEntry>,
}

impl Chart {
    /// Parse a sentence, interpreting words left to right and combining
    /// each new constituent with every constituent ending where it starts.
    ///
    /// The baseline is single-assignment: only the first lexicon entry per
    /// word is used.
    pub fn parse(
        lexicon: &Lexicon,
        sentence: &str,
        semtypes: &SemTypeMap,
    ) -> Result<Chart, ChartError> {
        let words: Vec<String> = sentence.split_whitespace().map(str::to_string).collect();
        let mut constituents: Vec<ChartEntry> = Vec::new();
        let mut agenda: VecDeque<ChartEntry> = VecDeque::new();

        for (position, word) in words.iter().enumerate() {
            let entry = lexicon
                .entries(word)
                .and_then(|entries| entries.first())
                .ok_or_else(|| ChartError::UnknownWord { word: word.clone() })?;
            agenda.push_back(ChartEntry {
                category: entry.category.clone(),
                semtype: semtypes.of(&entry.category)?,
                denotation: ChartDenotation::new(&entry.term_src),
                start: position,
                end: position + 1,
                children: Vec::new(),
            });

            while let Some(item) = agenda.pop_front() {
                let mut built = Vec::new();
                for arc in &constituents {
                    if arc.end == item.start {
                        if let Some(combined) = combine(arc, &item)? {
                            built.push(combined);
                        }
                    }
                }
                constituents.push(item);
                agenda.extend(built);
            }
        }
        Ok(Chart {
            words,
            constituents,
        })
    }

    /// Every constituent covering the whole sentence with the goal category.
    pub fn spanning(&self, goal: &Category) -> Vec<&ChartEntry> {
        self.constituents
            .iter()
            .filter(|entry| {
                entry.start == 0 && entry.end == self.words.len() && entry.category == *goal
            })
            .collect()
    }

    /// Whether the sentence parses as the goal category.
    pub fn is_derivable(&self, goal: &Category) -> bool {
        !self.spanning(goal).is_empty()
    }
}

/// Draw a constituency chart: one row per tree layer, category labels
/// extended with dashes over the words they span.
pub fn render_chart(entry: &ChartEntry, words: &[String], column_width: usize) -> String {
    let mut lines: Vec<String> = Vec::new();
    fill(entry, 0, &mut lines, column_width);

    let mut out = String::new();
    for line in lines {
        out.push_str(line.trim_end());
        out.push('\n');
    }
    for word in words {
        out.push_str(word);
        for _ in word.len()..column_width {
            out.push(' ');
        }
        out.push(' ');
    }
    out.push('\n');
    out
}

fn fill(entry: &ChartEntry, layer: usize, lines: &mut Vec<String>, column_width: usize) {
    if lines.len() < layer + 1 {
        lines.push(String::new());
    }
    let offset = entry.start * (column_width + 1);
    while lines[layer].len() < offset {
        lines[layer].push(' ');
    }
    let label = entry.category.to_string();
    let span_width = (column_width + 1) * (entry.end - entry.start) - 1;
    lines[layer].push_str(&label);
    for _ in label.len()..span_width {
        lines[layer].push('-');
    }
    lines[layer].push(' ');
    for child in &entry.children {
        fill(child, layer + 1, lines, column_width);
    }
}
