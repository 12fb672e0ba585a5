//! Categories, terms, and a toy lexicon.
//!
//! Run with: cargo run -p lambek-core --example lexicon_tour
//!
//! This example demonstrates:
//! - Parsing fully parenthesized directional categories
//! - Argument/result decomposition
//! - Term construction, beta reduction, and alpha-equivalence
//! - Loading a flat-text lexicon

use lambek_core::{Category, IdAlloc, Lexicon, Term};

fn main() {
    println!("=== Categories, Terms, and Lexica ===\n");

    // -------------------------------------------------------------------------
    // 1. Categories
    // -------------------------------------------------------------------------
    println!("1. Categories");
    println!("-------------\n");

    for src in ["dp", "dp\\s", "(dp\\s)/dp", "s/(dp\\s)"] {
        let cat = Category::parse(src).expect("category parses");
        match (cat.argument(), cat.result()) {
            (Some(arg), Some(res)) => {
                println!("  {:<14} argument {:<10} result {}", cat, arg, res)
            }
            _ => println!("  {:<14} atomic", cat),
        }
    }
    println!();

    // -------------------------------------------------------------------------
    // 2. Terms
    // -------------------------------------------------------------------------
    println!("2. Terms");
    println!("--------\n");

    let mut ids = IdAlloc::new();
    let knows = Term::parse("L1.L2.know(2,1)", &mut ids);
    println!("  knows        = {}", knows);

    let knows_kevin = Term::apply(knows, Term::literal("k"));
    println!("  knows kevin  = {}", knows_kevin);

    let sentence = Term::apply(knows_kevin, Term::literal("j"));
    println!("  full clause  = {}", sentence);

    let first = Term::parse("L1.walk(1)", &mut ids);
    let second = Term::parse("L9.walk(9)", &mut ids);
    println!(
        "  L1.walk(1) == L9.walk(9) ? {} (both reduce to {})",
        first == second,
        first
    );
    println!();

    // -------------------------------------------------------------------------
    // 3. Lexicon
    // -------------------------------------------------------------------------
    println!("3. Lexicon");
    println!("----------\n");

    let lexicon = Lexicon::parse(
        "john : dp - j\n\
         kevin : dp - k\n\
         snores : dp\\s - L1.snore(1)\n\
         knows : (dp\\s)/dp - L1.L2.know(2,1)\n",
    )
    .expect("lexicon parses");
    print!("{}", lexicon);
}
