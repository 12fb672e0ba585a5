//! Lambda terms: the symbolic semantic denotations carried through a proof.
//!
//! Terms are immutable tagged values. Smart constructors do the reduction
//! work up front: [`Term::apply`] beta-reduces when the function is an
//! abstraction, [`Term::lambda`] eta-collapses trivial wrappers, and
//! [`Term::substitute`] resolves a substitution as soon as the replacee is
//! visible, deferring it otherwise. [`Term::reduce`] re-runs the same
//! normalization bottom-up and is idempotent.
//!
//! # Key Concepts
//!
//! - **Globally unique binders**: every abstraction binds an id drawn from
//!   an [`IdAlloc`]. No two live abstractions share an id, so substitution
//!   never captures.
//! - **Markers in literal text**: lexicon bodies stay textual. The body of
//!   `L1.snore(1)` is the literal `snore(⟨5⟩)` after renaming; substitution
//!   rewrites both `Var` nodes and `⟨id⟩` markers embedded in literals.
//! - **Alpha-equivalence**: two terms are equal when their displays match,
//!   or when renumbering ids in order of first appearance makes them match.
//!
//! # Example
//!
//! ```rust
//! use lambek_core::ids::IdAlloc;
//! use lambek_core::term::Term;
//!
//! let mut ids = IdAlloc::new();
//! let snores = Term::parse("L1.snore(1)", &mut ids);
//! let said = Term::apply(snores, Term::literal("j"));
//! assert_eq!(said.to_string(), "snore(j)");
//! ```

use std::fmt;

use crate::ids::{IdAlloc, VarId};

/// The `⟨id⟩` marker form of a variable, as embedded in literal text.
fn marker(var: VarId) -> String {
    format!("\u{27e8}{}\u{27e9}", var)
}

fn parse_marker(name: &str) -> Option<VarId> {
    name.strip_prefix('\u{27e8}')?
        .strip_suffix('\u{27e9}')?
        .parse()
        .ok()
}

/// An immutable symbolic denotation.
#[derive(Debug, Clone)]
pub enum Term {
    /// Opaque text; may embed `⟨id⟩` variable markers.
    Literal(String),
    /// A bound variable, displayed `⟨id⟩`.
    Var(VarId),
    /// An abstraction binding a globally unique id.
    Lambda { var: VarId, body: Box<Term> },
    /// An application that could not (yet) be beta-reduced.
    Apply { func: Box<Term>, arg: Box<Term> },
    /// A substitution whose replacee has not yet been exposed,
    /// displayed `base[replacer/replacee]`.
    Subst {
        base: Box<Term>,
        replacer: Box<Term>,
        replacee: Box<Term>,
    },
}

impl Term {
    /// Create a literal term.
    pub fn literal(text: impl Into<String>) -> Term {
        Term::Literal(text.into())
    }

    /// Create an abstraction, eta-collapsing `L⟨x⟩.f(⟨x⟩)` to `f` when `x`
    /// occurs nowhere else.
    pub fn lambda(var: VarId, body: Term) -> Term {
        match &body {
            Term::Apply { func, arg }
                if matches!(**arg, Term::Var(v) if v == var) && !func.mentions(var) =>
            {
                return (**func).clone();
            }
            Term::Literal(text) => {
                let mark = marker(var);
                let tail = format!("({})", mark);
                if text.ends_with(&tail) && text.matches(&mark).count() == 1 {
                    return Term::Literal(text[..text.len() - tail.len()].to_string());
                }
            }
            _ => {}
        }
        Term::Lambda {
            var,
            body: Box::new(body),
        }
    }

    /// Apply `func` to `arg`, beta-reducing when `func` is an abstraction.
    pub fn apply(func: Term, arg: Term) -> Term {
        match func {
            Term::Lambda { var, body } => body.subst_var(var, &arg),
            other => Term::Apply {
                func: Box::new(other),
                arg: Box::new(arg),
            },
        }
    }

    /// Replace `replacee` by `replacer` inside `base`.
    ///
    /// When the replacee is a variable that occurs in `base` the
    /// substitution happens immediately; otherwise the term keeps a deferred
    /// `base[replacer/replacee]` node for a later [`Term::reduce`] to retry
    /// once reduction upstream has exposed the occurrence.
    pub fn substitute(base: Term, replacer: Term, replacee: Term) -> Term {
        if let Term::Var(var) = replacee {
            if base.mentions(var) {
                return base.subst_var(var, &replacer);
            }
        } else if base == replacee {
            return replacer;
        }
        Term::Subst {
            base: Box::new(base),
            replacer: Box::new(replacer),
            replacee: Box::new(replacee),
        }
    }

    /// Parse a lexicon denotation string.
    ///
    /// - the reserved token `var` allocates a fresh variable;
    /// - `L<name>.<body>` builds an abstraction: a raw name is renamed
    ///   throughout the body to a fresh `⟨id⟩` marker before the body is
    ///   parsed, so the binder is globally unique for its lifetime; a
    ///   marker-named binder (`L⟨id⟩.…`) is taken as already unique;
    /// - anything else is literal text (application syntax `f(a)` included).
    pub fn parse(src: &str, ids: &mut IdAlloc) -> Term {
        let src = src.trim();
        if src == "var" {
            return Term::Var(ids.fresh_var());
        }
        if let Some(rest) = src.strip_prefix('L') {
            if let Some(dot) = rest.find('.') {
                let name = &rest[..dot];
                let body_src = &rest[dot + 1..];
                if !name.is_empty() {
                    if let Some(var) = parse_marker(name) {
                        return Term::lambda(var, Term::parse(body_src, ids));
                    }
                    let var = ids.fresh_var();
                    let renamed = body_src.replace(name, &marker(var));
                    return Term::lambda(var, Term::parse(&renamed, ids));
                }
            }
        }
        Term::Literal(src.to_string())
    }

    /// Whether `var` occurs in this term, as a node or as marker text.
    pub fn mentions(&self, var: VarId) -> bool {
        match self {
            Term::Literal(text) => text.contains(&marker(var)),
            Term::Var(v) => *v == var,
            Term::Lambda { var: v, body } => *v == var || body.mentions(var),
            Term::Apply { func, arg } => func.mentions(var) || arg.mentions(var),
            Term::Subst {
                base,
                replacer,
                replacee,
            } => base.mentions(var) || replacer.mentions(var) || replacee.mentions(var),
        }
    }

    /// Substitute `replacement` for `var`, renormalizing on the way up.
    fn subst_var(&self, var: VarId, replacement: &Term) -> Term {
        match self {
            Term::Var(v) if *v == var => replacement.clone(),
            Term::Var(v) => Term::Var(*v),
            Term::Literal(text) => {
                let mark = marker(var);
                if text.contains(&mark) {
                    Term::Literal(text.replace(&mark, &replacement.to_string()))
                } else {
                    Term::Literal(text.clone())
                }
            }
            Term::Lambda { var: v, body } => Term::lambda(*v, body.subst_var(var, replacement)),
            Term::Apply { func, arg } => Term::apply(
                func.subst_var(var, replacement),
                arg.subst_var(var, replacement),
            ),
            Term::Subst {
                base,
                replacer,
                replacee,
            } => Term::substitute(
                base.subst_var(var, replacement),
                replacer.subst_var(var, replacement),
                replacee.subst_var(var, replacement),
            ),
        }
    }

    /// Pure bottom-up renormalization through the smart constructors.
    ///
    /// Idempotent; retries deferred substitutions whose replacee has since
    /// been exposed.
    pub fn reduce(&self) -> Term {
        match self {
            Term::Literal(_) | Term::Var(_) => self.clone(),
            Term::Lambda { var, body } => Term::lambda(*var, body.reduce()),
            Term::Apply { func, arg } => Term::apply(func.reduce(), arg.reduce()),
            Term::Subst {
                base,
                replacer,
                replacee,
            } => Term::substitute(base.reduce(), replacer.reduce(), replacee.reduce()),
        }
    }

    /// Canonical display with ids renumbered `⟨0⟩, ⟨1⟩, …` in order of
    /// first appearance. Alpha-equivalent terms share a canonical form.
    pub fn canonical(&self) -> String {
        canonicalize(&self.to_string())
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Literal(text) => write!(f, "{}", text),
            Term::Var(v) => write!(f, "\u{27e8}{}\u{27e9}", v),
            Term::Lambda { var, body } => {
                write!(f, "L\u{27e8}{}\u{27e9}.{}", var, body)
            }
            Term::Apply { func, arg } => write!(f, "{}({})", func, arg),
            Term::Subst {
                base,
                replacer,
                replacee,
            } => write!(f, "{}[{}/{}]", base, replacer, replacee),
        }
    }
}

impl PartialEq for Term {
    fn eq(&self, other: &Self) -> bool {
        let a = self.to_string();
        let b = other.to_string();
        if a == b {
            return true;
        }
        if a.contains('\u{27e8}') || b.contains('\u{27e8}') {
            canonicalize(&a) == canonicalize(&b)
        } else {
            false
        }
    }
}

impl Eq for Term {}

/// Renumber every `⟨id⟩` marker in `text` in order of first appearance.
fn canonicalize(text: &str) -> String {
    const OPEN: char = '\u{27e8}';
    const CLOSE: char = '\u{27e9}';
    let mut out = String::with_capacity(text.len());
    let mut seen: Vec<String> = Vec::new();
    let mut rest = text;
    while let Some(open) = rest.find(OPEN) {
        out.push_str(&rest[..open]);
        let after = &rest[open + OPEN.len_utf8()..];
        match after.find(CLOSE) {
            Some(close) => {
                let id = &after[..close];
                let index = match seen.iter().position(|s| s == id) {
                    Some(index) => index,
                    None => {
                        seen.push(id.to_string());
                        seen.len() - 1
                    }
                };
                out.push(OPEN);
                out.push_str(&index.to_string());
                out.push(CLOSE);
                rest = &after[close + CLOSE.len_utf8()..];
            }
            None => {
                // Unterminated marker; keep the tail verbatim.
                out.push_str(&rest[open..]);
                return out;
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_literal() {
        let mut ids = IdAlloc::new();
        let term = Term::parse("j", &mut ids);
        assert_eq!(term.to_string(), "j");
    }

    #[test]
    fn test_parse_var_request_allocates() {
        let mut ids = IdAlloc::new();
        let a = Term::parse("var", &mut ids);
        let b = Term::parse("var", &mut ids);
        assert_eq!(a.to_string(), "\u{27e8}1\u{27e9}");
        assert_eq!(b.to_string(), "\u{27e8}2\u{27e9}");
        // Two bare variables are alpha-equivalent: both canonicalize to ⟨0⟩.
        assert_eq!(a, b);
        assert_eq!(a.canonical(), "\u{27e8}0\u{27e9}");
    }

    #[test]
    fn test_parse_abstraction_renames_to_unique_id() {
        let mut ids = IdAlloc::new();
        let term = Term::parse("L1.know(2,1)", &mut ids);
        // The raw name 1 becomes a fresh marker; 2 is untouched text.
        assert_eq!(term.to_string(), "L\u{27e8}1\u{27e9}.know(2,\u{27e8}1\u{27e9})");
    }

    #[test]
    fn test_parse_nested_abstractions() {
        let mut ids = IdAlloc::new();
        let term = Term::parse("L1.L2.know(2,1)", &mut ids);
        assert_eq!(
            term.to_string(),
            "L\u{27e8}1\u{27e9}.L\u{27e8}2\u{27e9}.know(\u{27e8}2\u{27e9},\u{27e8}1\u{27e9})"
        );
    }

    #[test]
    fn test_eta_collapse_on_textual_body() {
        let mut ids = IdAlloc::new();
        // L1.snore(1) is snore applied to its own argument: just snore.
        let term = Term::parse("L1.snore(1)", &mut ids);
        assert_eq!(term.to_string(), "snore");
    }

    #[test]
    fn test_eta_does_not_fire_on_inner_occurrence() {
        let mut ids = IdAlloc::new();
        let term = Term::parse("L1.know(j,1)", &mut ids);
        assert!(matches!(term, Term::Lambda { .. }));
    }

    #[test]
    fn test_eta_collapse_on_apply_node() {
        let mut ids = IdAlloc::new();
        let v = ids.fresh_var();
        let body = Term::Apply {
            func: Box::new(Term::literal("f")),
            arg: Box::new(Term::Var(v)),
        };
        assert_eq!(Term::lambda(v, body).to_string(), "f");
    }

    #[test]
    fn test_beta_reduction_through_literal_text() {
        let mut ids = IdAlloc::new();
        let knows = Term::parse("L1.L2.know(2,1)", &mut ids);
        let step1 = Term::apply(knows, Term::literal("k"));
        let step2 = Term::apply(step1, Term::literal("j"));
        assert_eq!(step2.to_string(), "know(j,k)");
    }

    #[test]
    fn test_apply_without_abstraction_builds_node() {
        let term = Term::apply(Term::literal("snore"), Term::literal("j"));
        assert_eq!(term.to_string(), "snore(j)");
    }

    #[test]
    fn test_alpha_equivalence_of_identity() {
        let mut ids = IdAlloc::new();
        let x = ids.fresh_var();
        let y = ids.fresh_var();
        let first = Term::Lambda {
            var: x,
            body: Box::new(Term::Var(x)),
        };
        let second = Term::Lambda {
            var: y,
            body: Box::new(Term::Var(y)),
        };
        assert_eq!(first, second);
        assert_eq!(first.canonical(), second.canonical());
    }

    #[test]
    fn test_distinct_literals_are_unequal() {
        assert_ne!(Term::literal("walk"), Term::literal("talk"));
    }

    #[test]
    fn test_substitute_immediate() {
        let mut ids = IdAlloc::new();
        let v = ids.fresh_var();
        let base = Term::apply(Term::literal("see"), Term::Var(v));
        let out = Term::substitute(base, Term::literal("k"), Term::Var(v));
        assert_eq!(out.to_string(), "see(k)");
    }

    #[test]
    fn test_substitute_defers_when_hidden() {
        let mut ids = IdAlloc::new();
        let v = ids.fresh_var();
        let base = Term::literal("sleep(j)");
        let out = Term::substitute(base, Term::literal("k"), Term::Var(v));
        assert_eq!(out.to_string(), "sleep(j)[k/\u{27e8}1\u{27e9}]");
    }

    #[test]
    fn test_reduce_is_idempotent() {
        let mut ids = IdAlloc::new();
        let knows = Term::parse("L1.L2.know(2,1)", &mut ids);
        let applied = Term::apply(Term::apply(knows, Term::literal("k")), Term::literal("j"));
        let once = applied.reduce();
        assert_eq!(once, applied);
        assert_eq!(once.reduce(), once);
    }

    #[test]
    fn test_canonical_renumbers_in_first_appearance_order() {
        assert_eq!(
            canonicalize("know(\u{27e8}9\u{27e9},\u{27e8}4\u{27e9},\u{27e8}9\u{27e9})"),
            "know(\u{27e8}0\u{27e9},\u{27e8}1\u{27e9},\u{27e8}0\u{27e9})"
        );
    }
}
