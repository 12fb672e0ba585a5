//! Sequent proof search over a toy English fragment.
//!
//! Run with: cargo run -p lambek-sequent --example derive_sentences
//!
//! This example demonstrates:
//! - Derivability and readings for simple clauses
//! - A quantifier taking scope from object position via displacement
//! - The rendered derivation forest
//! - A batch corpus run emitting a JSON report

use lambek_core::{Category, Lexicon};
use lambek_sequent::{derive, render_tree, run_corpus, SearchConfig};

const LEXICON: &str = "\
# determiner phrases
j : dp - j
kevin : dp - k

# verbs
snores : dp\\s - L1.snore(1)
knows : (dp\\s)/dp - L1.L2.know(2,1)

# quantifiers
everyone : s/(dp\\s) - L1.Ax:1(x)&person(x)
";

fn main() {
    println!("=== Sequent Proof Search ===\n");

    let lexicon = Lexicon::parse(LEXICON).expect("lexicon parses");
    let config = SearchConfig::default();
    let goal = Category::atomic("s");

    // -------------------------------------------------------------------------
    // 1. A simple clause
    // -------------------------------------------------------------------------
    println!("1. A simple clause");
    println!("------------------\n");

    let outcome = derive(&lexicon, &["j", "snores"], &goal, &config).expect("search runs");
    println!("  j snores: valid = {}", outcome.valid);
    for reading in outcome.readings() {
        println!("    reading: {}", reading);
    }
    println!();

    // -------------------------------------------------------------------------
    // 2. Quantifier scope from object position
    // -------------------------------------------------------------------------
    println!("2. Quantifier scope from object position");
    println!("----------------------------------------\n");

    let outcome = derive(&lexicon, &["j", "knows", "everyone"], &goal, &config)
        .expect("search runs");
    println!("  j knows everyone: valid = {}", outcome.valid);
    for reading in outcome.readings() {
        println!("    reading: {}", reading);
    }
    println!();

    println!("  Derivation forest:");
    for forest in &outcome.forests {
        for line in render_tree(forest).lines() {
            println!("    {}", line);
        }
    }
    println!();

    // -------------------------------------------------------------------------
    // 3. Batch corpus run
    // -------------------------------------------------------------------------
    println!("3. Batch corpus run");
    println!("-------------------\n");

    let report = run_corpus(
        &lexicon,
        "j snores\nkevin knows j\nsnores j\nj sneezes\n",
        &config,
    )
    .expect("corpus runs");
    println!(
        "  {} of {} sentences derivable\n",
        report.derivable_count(),
        report.records.len()
    );
    println!("{}", report.to_json().expect("report serializes"));
}
