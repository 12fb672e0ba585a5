//! Sequent-calculus proof search over constituent sequences.
//!
//! A [`Searcher`] proves sequents `Γ ⊦ G`: an ordered sequence of typed
//! constituents against a goal category. Search is exhaustive: every rule
//! that applies contributes its own [`Alternative`], so a node holds a
//! derivation *forest*, not a single proof. It is also deterministic, since
//! rules, positions, and split points are always tried in the same order.
//!
//! # Rules
//!
//! 1. **Axiom**: a single constituent whose category equals the atomic goal.
//! 2. **Right introduction**: a function goal is proved by hypothesizing its
//!    argument on the matching side and proving the result; each sub-term is
//!    wrapped in an abstraction over the hypothesis variable.
//! 3. **Left elimination** (both directions): a function constituent
//!    consumes a contiguous span on its argument side; the function and span
//!    are replaced by one synthesized constituent carrying a fresh variable,
//!    resolved afterwards by substituting the actual application.
//! 4. **Displacement out / in**: the bounded structural pair. *Out* moves a
//!    function constituent to the front, leaving a binder next to it and a
//!    site where it stood (one shared gap id); *in* later removes a binder
//!    together with its left neighbor and lowers that neighbor into the
//!    paired site. A usage limit bounds *out* per branch; a cooldown window
//!    keeps *in* from undoing an *out* without intervening steps.
//!
//! # Termination
//!
//! The displacement limit and cooldown are the only structural safeguards,
//! exactly strong enough for the rule set; the step budget in
//! [`SearchConfig`] is the blunt backstop for combinatorial blowups from
//! long sequences or heavy lexical ambiguity.

use std::fmt;

use lambek_core::{Category, IdAlloc, Slash, Term};

use crate::error::SearchError;

/// Tunable bounds and switches for a search run.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Maximum displacement-out applications on one root-to-leaf path.
    pub displacement_limit: u32,
    /// Proof steps that must separate a displacement-out from the next
    /// displacement-in on the same path.
    pub cooldown_window: u32,
    /// Drop terms that are alpha-equivalent to one already collected.
    pub dedupe_terms: bool,
    /// Hard cap on constructed proof nodes per searcher.
    pub step_budget: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            displacement_limit: 1,
            cooldown_window: 2,
            dedupe_terms: true,
            step_budget: 100_000,
        }
    }
}

/// A (category, term) pair occupying one slot in a sequent.
#[derive(Debug, Clone)]
pub struct Constituent {
    pub category: Category,
    pub term: Term,
}

impl Constituent {
    /// Create a constituent.
    pub fn new(category: Category, term: Term) -> Self {
        Self { category, term }
    }

    /// The binder placeholder inserted by displacement-out.
    fn binder(gap: u64) -> Self {
        Self::new(Category::binder(gap), Term::literal(format!("^{}", gap)))
    }

    /// The site placeholder inserted by displacement-out.
    fn site(gap: u64) -> Self {
        Self::new(Category::site(gap), Term::literal(format!("_{}", gap)))
    }
}

impl fmt::Display for Constituent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.category)
    }
}

/// The rule behind one alternative derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Axiom,
    RightIntro(Slash),
    LeftElim(Slash),
    DisplaceOut,
    DisplaceIn,
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::Axiom => write!(f, "Ax"),
            Rule::RightIntro(Slash::Left) => write!(f, "\\R"),
            Rule::RightIntro(Slash::Right) => write!(f, "/R"),
            Rule::LeftElim(Slash::Left) => write!(f, "\\L"),
            Rule::LeftElim(Slash::Right) => write!(f, "/L"),
            Rule::DisplaceOut => write!(f, "\u{2191}"),
            Rule::DisplaceIn => write!(f, "\u{2193}"),
        }
    }
}

/// One successful way of proving a node: the rule plus its sub-proofs
/// (two for eliminations, one otherwise, none for the axiom).
#[derive(Debug, Clone)]
pub struct Alternative {
    pub rule: Rule,
    pub premises: Vec<ProofNode>,
}

/// A fully explored sequent: the inputs, every alternative derivation, and
/// the deduplicated terms they contribute.
#[derive(Debug, Clone)]
pub struct ProofNode {
    pub constituents: Vec<Constituent>,
    pub goal: Category,
    pub alternatives: Vec<Alternative>,
    pub terms: Vec<Term>,
}

impl ProofNode {
    /// Whether at least one derivation succeeded.
    pub fn is_valid(&self) -> bool {
        !self.alternatives.is_empty()
    }

    /// The contributed terms, displayed.
    pub fn readings(&self) -> Vec<String> {
        self.terms.iter().map(Term::to_string).collect()
    }
}

impl fmt::Display for ProofNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for constituent in &self.constituents {
            write!(f, "{} ", constituent)?;
        }
        write!(f, "\u{22a6} {}", self.goal)
    }
}

/// Append a term, skipping alpha-equivalent duplicates when `dedupe` is set.
pub(crate) fn push_unique(terms: &mut Vec<Term>, term: Term, dedupe: bool) {
    if dedupe && terms.iter().any(|t| *t == term) {
        return;
    }
    terms.push(term);
}

/// Prove `constituents ⊦ goal` under `config` with a fresh searcher.
///
/// This is the core entry point; [`crate::derive::derive`] layers lexical
/// ambiguity on top of it.
pub fn search(
    constituents: Vec<Constituent>,
    goal: Category,
    config: &SearchConfig,
) -> Result<ProofNode, SearchError> {
    Searcher::new(config).prove(constituents, goal)
}

/// The search context: configuration, the id allocator shared by every
/// hypothesis and gap on this run, and the step counter.
#[derive(Debug)]
pub struct Searcher<'a> {
    config: &'a SearchConfig,
    ids: IdAlloc,
    steps: u64,
}

impl<'a> Searcher<'a> {
    /// Create a searcher with a fresh id allocator.
    pub fn new(config: &'a SearchConfig) -> Self {
        Self::with_ids(config, IdAlloc::new())
    }

    /// Create a searcher over an existing allocator, so lexical terms
    /// instantiated beforehand share the id space.
    pub fn with_ids(config: &'a SearchConfig, ids: IdAlloc) -> Self {
        Self {
            config,
            ids,
            steps: 0,
        }
    }

    /// The allocator, for instantiating constituents before a run.
    pub fn ids_mut(&mut self) -> &mut IdAlloc {
        &mut self.ids
    }

    /// Proof nodes constructed so far.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Prove a sequent from a quiet start (no displacement used, no
    /// cooldown pending).
    pub fn prove(
        &mut self,
        constituents: Vec<Constituent>,
        goal: Category,
    ) -> Result<ProofNode, SearchError> {
        self.prove_at(constituents, goal, 0, 0)
    }

    fn prove_at(
        &mut self,
        constituents: Vec<Constituent>,
        goal: Category,
        displaced: u32,
        cooldown: u32,
    ) -> Result<ProofNode, SearchError> {
        self.steps += 1;
        if self.steps > self.config.step_budget {
            return Err(SearchError::BudgetExhausted {
                budget: self.config.step_budget,
            });
        }

        let mut alternatives = Vec::new();
        let mut terms = Vec::new();

        if constituents.len() == 1 && !goal.is_function() && constituents[0].category == goal {
            // Axiom; nothing else applies to a closed sequent.
            self.keep(&mut terms, constituents[0].term.clone());
            alternatives.push(Alternative {
                rule: Rule::Axiom,
                premises: Vec::new(),
            });
        } else if !constituents.is_empty() {
            // An empty sequence is simply unprovable; otherwise every rule
            // gets its chance and all successes stand side by side.
            self.right_intro(&constituents, &goal, displaced, cooldown, &mut alternatives, &mut terms)?;
            self.left_elim(&constituents, &goal, displaced, cooldown, &mut alternatives, &mut terms)?;
            self.displace_out(&constituents, &goal, displaced, cooldown, &mut alternatives, &mut terms)?;
            self.displace_in(&constituents, &goal, displaced, cooldown, &mut alternatives, &mut terms)?;
        }

        Ok(ProofNode {
            constituents,
            goal,
            alternatives,
            terms,
        })
    }

    /// Prove a function goal by hypothesizing its argument.
    fn right_intro(
        &mut self,
        seq: &[Constituent],
        goal: &Category,
        displaced: u32,
        cooldown: u32,
        alternatives: &mut Vec<Alternative>,
        terms: &mut Vec<Term>,
    ) -> Result<(), SearchError> {
        let Category::Function { left, right, slash } = goal else {
            return Ok(());
        };
        let var = self.ids.fresh_var();
        let (sub_seq, sub_goal) = match slash {
            Slash::Left => {
                // A\B: hypothesize A on the left, prove B.
                let mut s = Vec::with_capacity(seq.len() + 1);
                s.push(Constituent::new((**left).clone(), Term::Var(var)));
                s.extend(seq.iter().cloned());
                (s, (**right).clone())
            }
            Slash::Right => {
                // A/B: hypothesize B on the right, prove A.
                let mut s = seq.to_vec();
                s.push(Constituent::new((**right).clone(), Term::Var(var)));
                (s, (**left).clone())
            }
        };
        let premise = self.prove_at(sub_seq, sub_goal, displaced, cooldown.saturating_sub(1))?;
        if premise.is_valid() {
            for term in &premise.terms {
                self.keep(terms, Term::lambda(var, term.clone()));
            }
            alternatives.push(Alternative {
                rule: Rule::RightIntro(*slash),
                premises: vec![premise],
            });
        }
        Ok(())
    }

    /// Let a function constituent consume a span on its argument side.
    fn left_elim(
        &mut self,
        seq: &[Constituent],
        goal: &Category,
        displaced: u32,
        cooldown: u32,
        alternatives: &mut Vec<Alternative>,
        terms: &mut Vec<Term>,
    ) -> Result<(), SearchError> {
        for pos in 0..seq.len() {
            let Category::Function { left, right, slash } = &seq[pos].category else {
                continue;
            };
            match slash {
                Slash::Left => {
                    // Argument spans end at the function, narrowest first.
                    for start in (0..pos).rev() {
                        self.try_split(
                            seq,
                            goal,
                            displaced,
                            cooldown,
                            pos,
                            start..pos,
                            left,
                            right,
                            Slash::Left,
                            alternatives,
                            terms,
                        )?;
                    }
                }
                Slash::Right => {
                    // Argument spans start after the function, narrowest first.
                    for end in pos + 1..seq.len() {
                        self.try_split(
                            seq,
                            goal,
                            displaced,
                            cooldown,
                            pos,
                            pos + 1..end + 1,
                            right,
                            left,
                            Slash::Right,
                            alternatives,
                            terms,
                        )?;
                    }
                }
            }
        }
        Ok(())
    }

    /// One elimination split point: prove the argument span, then the
    /// continuation with the synthesized result constituent.
    #[allow(clippy::too_many_arguments)]
    fn try_split(
        &mut self,
        seq: &[Constituent],
        goal: &Category,
        displaced: u32,
        cooldown: u32,
        pos: usize,
        span: std::ops::Range<usize>,
        argument_cat: &Category,
        result_cat: &Category,
        slash: Slash,
        alternatives: &mut Vec<Alternative>,
        terms: &mut Vec<Term>,
    ) -> Result<(), SearchError> {
        let argument = self.prove_at(
            seq[span.clone()].to_vec(),
            argument_cat.clone(),
            displaced,
            cooldown.saturating_sub(1),
        )?;
        if !argument.is_valid() {
            return Ok(());
        }

        let var = self.ids.fresh_var();
        let consumed = span.start.min(pos)..span.end.max(pos + 1);
        let mut rest: Vec<Constituent> = seq[..consumed.start].to_vec();
        rest.push(Constituent::new(result_cat.clone(), Term::Var(var)));
        rest.extend_from_slice(&seq[consumed.end..]);
        let continuation =
            self.prove_at(rest, goal.clone(), displaced, cooldown.saturating_sub(1))?;
        if !continuation.is_valid() {
            return Ok(());
        }

        for cont_term in &continuation.terms {
            for arg_term in &argument.terms {
                let applied = Term::apply(seq[pos].term.clone(), arg_term.clone());
                self.keep(
                    terms,
                    Term::substitute(cont_term.clone(), applied, Term::Var(var)),
                );
            }
        }
        alternatives.push(Alternative {
            rule: Rule::LeftElim(slash),
            premises: vec![argument, continuation],
        });
        Ok(())
    }

    /// Displace a function constituent to the front, leaving a binder/site
    /// pair behind.
    fn displace_out(
        &mut self,
        seq: &[Constituent],
        goal: &Category,
        displaced: u32,
        _cooldown: u32,
        alternatives: &mut Vec<Alternative>,
        terms: &mut Vec<Term>,
    ) -> Result<(), SearchError> {
        if displaced >= self.config.displacement_limit {
            return Ok(());
        }
        for pos in 0..seq.len() {
            if !seq[pos].category.is_function() {
                continue;
            }
            // A constituent already followed by a binder was displaced on
            // this path; the last constituent is its own neighbor and thus
            // always eligible.
            let neighbor = seq.get(pos + 1).unwrap_or(&seq[pos]);
            if neighbor.category.binder_id().is_some() {
                continue;
            }
            let gap = self.ids.fresh_gap();
            let mut moved = Vec::with_capacity(seq.len() + 2);
            moved.push(seq[pos].clone());
            moved.push(Constituent::binder(gap));
            moved.extend_from_slice(&seq[..pos]);
            moved.push(Constituent::site(gap));
            moved.extend_from_slice(&seq[pos + 1..]);

            let premise =
                self.prove_at(moved, goal.clone(), displaced + 1, self.config.cooldown_window)?;
            if premise.is_valid() {
                for term in &premise.terms {
                    self.keep(terms, term.clone());
                }
                alternatives.push(Alternative {
                    rule: Rule::DisplaceOut,
                    premises: vec![premise],
                });
            }
        }
        Ok(())
    }

    /// Lower the constituent left of a binder back into its paired site.
    fn displace_in(
        &mut self,
        seq: &[Constituent],
        goal: &Category,
        displaced: u32,
        cooldown: u32,
        alternatives: &mut Vec<Alternative>,
        terms: &mut Vec<Term>,
    ) -> Result<(), SearchError> {
        if cooldown != 0 || seq.len() <= 2 {
            return Ok(());
        }
        for pos in 1..seq.len() {
            let Some(gap) = seq[pos].category.binder_id() else {
                continue;
            };
            let returned = &seq[pos - 1];
            let mut lowered: Vec<Constituent> = Vec::with_capacity(seq.len() - 2);
            for (index, constituent) in seq.iter().enumerate() {
                if index == pos - 1 || index == pos {
                    continue;
                }
                if constituent.category.site_id() == Some(gap) {
                    lowered.push(returned.clone());
                } else {
                    lowered.push(constituent.clone());
                }
            }
            let premise = self.prove_at(lowered, goal.clone(), displaced, 0)?;
            if premise.is_valid() {
                for term in &premise.terms {
                    self.keep(terms, term.clone());
                }
                alternatives.push(Alternative {
                    rule: Rule::DisplaceIn,
                    premises: vec![premise],
                });
            }
        }
        Ok(())
    }

    fn keep(&self, terms: &mut Vec<Term>, term: Term) {
        push_unique(terms, term, self.config.dedupe_terms);
    }
}
