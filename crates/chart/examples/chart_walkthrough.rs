//! Chart parsing over a toy English fragment.
//!
//! Run with: cargo run -p lambek-chart --example chart_walkthrough
//!
//! This example demonstrates:
//! - Incremental chart construction by function application
//! - Semantic types derived from syntactic categories
//! - The rendered constituency chart

use lambek_chart::{render_chart, Chart, SemTypeMap};
use lambek_core::{Category, Lexicon};

const LEXICON: &str = "\
john : dp - j
kevin : dp - k
snores : dp\\s - L1.snore(1)
knows : (dp\\s)/dp - L1.L2.know(2,1)
knowsthat : (dp\\s)/s - L1.L2.know(2,1)
faintly : (dp\\s)\\(dp\\s) - L1.faintly(1)
everyone : s/(dp\\s) - L1.Ax:1(x)&person(x)
";

fn main() {
    println!("=== Chart Parsing Baseline ===\n");

    let lexicon = Lexicon::parse(LEXICON).expect("lexicon parses");
    let semtypes = SemTypeMap::default();
    let goal = Category::atomic("s");

    for sentence in [
        "kevin snores",
        "kevin snores faintly",
        "everyone knowsthat kevin snores",
        "snores kevin",
    ] {
        let chart = Chart::parse(&lexicon, sentence, &semtypes).expect("chart builds");
        let spans = chart.spanning(&goal);
        println!("{} -> derivable: {}", sentence, !spans.is_empty());
        for span in spans {
            println!("  denotation: {}\n", span.denotation);
            print!("{}", render_chart(span, &chart.words, 15));
        }
        println!();
    }

    println!("All constituents of 'kevin snores faintly':");
    let chart = Chart::parse(&lexicon, "kevin snores faintly", &semtypes).expect("chart builds");
    for constituent in &chart.constituents {
        println!("  {}", constituent);
    }
}
