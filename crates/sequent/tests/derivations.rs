//! # Derivation Properties
//!
//! End-to-end properties of the proof search:
//! - Axiom and application round trips
//! - Displacement bound and cooldown enforcement
//! - Quantifier scope from object position (binder away from the front)
//! - Determinism of forests and readings
//! - Lexical ambiguity handling in the driver

use lambek_core::{Category, IdAlloc, Lexicon, Term};
use lambek_sequent::{
    derive, render_tree, search, Constituent, ProofNode, Rule, SearchConfig,
};

const LEXICON: &str = "\
j : dp - j
kevin : dp - k
snores : dp\\s - L1.snore(1)
knows : (dp\\s)/dp - L1.L2.know(2,1)
everyone : s/(dp\\s) - L1.Ax:1(x)&person(x)
fish : dp - fish
fish : dp\\s - L1.fish(1)
";

fn lexicon() -> Lexicon {
    Lexicon::parse(LEXICON).unwrap()
}

// ============================================================================
// Walkers
// ============================================================================

/// Most displacement-out applications on any root-to-leaf path.
fn max_displacements(node: &ProofNode) -> u32 {
    node.alternatives
        .iter()
        .map(|alt| {
            let here = u32::from(alt.rule == Rule::DisplaceOut);
            here + alt
                .premises
                .iter()
                .map(max_displacements)
                .max()
                .unwrap_or(0)
        })
        .max()
        .unwrap_or(0)
}

/// No displacement-in directly below a displacement-out, anywhere.
fn no_immediate_lowering(node: &ProofNode) -> bool {
    node.alternatives.iter().all(|alt| {
        let here_ok = alt.rule != Rule::DisplaceOut
            || alt.premises.iter().all(|premise| {
                premise
                    .alternatives
                    .iter()
                    .all(|inner| inner.rule != Rule::DisplaceIn)
            });
        here_ok && alt.premises.iter().all(no_immediate_lowering)
    })
}

fn contains_rule(node: &ProofNode, rule: Rule) -> bool {
    node.alternatives.iter().any(|alt| {
        alt.rule == rule || alt.premises.iter().any(|premise| contains_rule(premise, rule))
    })
}

// ============================================================================
// Axiom and Application
// ============================================================================

#[test]
fn test_axiom_yields_the_constituent_term() {
    let mut ids = IdAlloc::new();
    let c = Constituent::new(Category::atomic("a"), Term::parse("thing", &mut ids));
    let node = search(vec![c], Category::atomic("a"), &SearchConfig::default()).unwrap();
    assert!(node.is_valid());
    assert_eq!(node.readings(), vec!["thing"]);
}

#[test]
fn test_backward_application_round_trip() {
    // f : a\b with its argument on the left proves b, reading f(x).
    let mut ids = IdAlloc::new();
    let arg = Constituent::new(Category::atomic("a"), Term::parse("x", &mut ids));
    let f = Constituent::new(Category::parse("a\\b").unwrap(), Term::parse("f", &mut ids));
    let node = search(vec![arg, f], Category::atomic("b"), &SearchConfig::default()).unwrap();
    assert!(node.is_valid());
    assert_eq!(node.readings(), vec!["f(x)"]);
}

// ============================================================================
// End to End
// ============================================================================

#[test]
fn test_john_snores_derives_s() {
    let goal = Category::atomic("s");
    let outcome = derive(&lexicon(), &["j", "snores"], &goal, &SearchConfig::default()).unwrap();
    assert!(outcome.valid);
    assert_eq!(outcome.readings(), vec!["snore(j)"]);
}

#[test]
fn test_wrong_word_order_is_underivable() {
    let goal = Category::atomic("s");
    let outcome = derive(&lexicon(), &["snores", "j"], &goal, &SearchConfig::default()).unwrap();
    assert!(!outcome.valid);
    assert!(outcome.terms.is_empty());
}

#[test]
fn test_transitive_clause_reading() {
    let goal = Category::atomic("s");
    let outcome = derive(
        &lexicon(),
        &["j", "knows", "kevin"],
        &goal,
        &SearchConfig::default(),
    )
    .unwrap();
    assert!(outcome.valid);
    assert_eq!(outcome.readings(), vec!["know(j,k)"]);
}

#[test]
fn test_lexical_ambiguity_unions_combinations() {
    // "fish fish": only the dp + dp\s assignment derives s.
    let goal = Category::atomic("s");
    let outcome = derive(
        &lexicon(),
        &["fish", "fish"],
        &goal,
        &SearchConfig::default(),
    )
    .unwrap();
    assert!(outcome.valid);
    assert_eq!(outcome.forests.len(), 1);
    assert_eq!(outcome.readings(), vec!["fish(fish)"]);
}

// ============================================================================
// Displacement
// ============================================================================

#[test]
fn test_object_quantifier_scopes_via_displacement() {
    let goal = Category::atomic("s");
    let outcome = derive(
        &lexicon(),
        &["j", "knows", "everyone"],
        &goal,
        &SearchConfig::default(),
    )
    .unwrap();
    assert!(outcome.valid);
    assert_eq!(outcome.terms.len(), 1);
    assert_eq!(
        outcome.terms[0].canonical(),
        "Ax:L\u{27e8}0\u{27e9}.know(j,\u{27e8}0\u{27e9})(x)&person(x)"
    );

    // The derivation really goes through the structural pair, with the
    // binder sitting mid-sequence (not at the front) when it is consumed.
    let root = &outcome.forests[0];
    assert!(contains_rule(root, Rule::DisplaceOut));
    assert!(contains_rule(root, Rule::DisplaceIn));
}

#[test]
fn test_displacement_bound_is_respected() {
    let config = SearchConfig::default();
    let goal = Category::atomic("s");
    let outcome = derive(&lexicon(), &["j", "knows", "everyone"], &goal, &config).unwrap();
    for forest in &outcome.forests {
        assert!(max_displacements(forest) <= config.displacement_limit);
    }
    // And the bound is actually reached on this sentence.
    assert!(outcome.forests.iter().any(|f| max_displacements(f) == 1));
}

#[test]
fn test_cooldown_blocks_immediate_lowering() {
    let goal = Category::atomic("s");
    let outcome = derive(
        &lexicon(),
        &["j", "knows", "everyone"],
        &goal,
        &SearchConfig::default(),
    )
    .unwrap();
    for forest in &outcome.forests {
        assert!(no_immediate_lowering(forest));
    }
}

#[test]
fn test_zero_cooldown_still_terminates() {
    let config = SearchConfig {
        cooldown_window: 0,
        ..SearchConfig::default()
    };
    let goal = Category::atomic("s");
    let outcome = derive(&lexicon(), &["j", "knows", "everyone"], &goal, &config).unwrap();
    assert!(outcome.valid);
}

// ============================================================================
// Determinism
// ============================================================================

#[test]
fn test_reruns_are_identical() {
    let goal = Category::atomic("s");
    let config = SearchConfig::default();
    let first = derive(&lexicon(), &["j", "knows", "everyone"], &goal, &config).unwrap();
    let second = derive(&lexicon(), &["j", "knows", "everyone"], &goal, &config).unwrap();
    assert_eq!(first.readings(), second.readings());
    assert_eq!(first.forests.len(), second.forests.len());
    let first_trees: Vec<String> = first.forests.iter().map(render_tree).collect();
    let second_trees: Vec<String> = second.forests.iter().map(render_tree).collect();
    assert_eq!(first_trees, second_trees);
}
