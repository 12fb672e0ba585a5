//! Text rendering of derivation forests.
//!
//! One line per sequent with its readings, premises indented beneath the
//! rule that produced them. Nodes holding several alternative derivations
//! fence each one with a `--------` separator so the forest structure stays
//! visible in plain text.

use std::fmt::Write;

use crate::search::ProofNode;

/// Render a derivation forest as an indented tree.
pub fn render_tree(node: &ProofNode) -> String {
    let mut out = String::new();
    render_into(node, 0, &mut out);
    out
}

fn render_into(node: &ProofNode, depth: usize, out: &mut String) {
    let pad = "    ".repeat(depth);
    let readings = node.readings().join(", ");
    let _ = writeln!(
        out,
        "{}{}   [{} reading{}] {}",
        pad,
        node,
        node.terms.len(),
        if node.terms.len() == 1 { "" } else { "s" },
        readings
    );

    let fenced = node.alternatives.len() > 1;
    for alternative in &node.alternatives {
        if fenced {
            let _ = writeln!(out, "{}    --------", pad);
        }
        let _ = writeln!(out, "{}    by {}", pad, alternative.rule);
        for premise in &alternative.premises {
            render_into(premise, depth + 2, out);
        }
    }
    if fenced {
        let _ = writeln!(out, "{}    --------", pad);
    }
}
