//! Treeviz formatter for formulas
//!
//! One line per node, the nesting encoded as indentation with 2 white spaces per level:
//!
//! <indentation>(per level) <icon><space><label>
//!
//! Example, for `(\rightarrow (\neg p0) (\vee p1 true))`:
//!
//!     → rightarrow
//!       ¬ neg
//!         ◦ p0
//!       ∨ vee
//!         ◦ p1
//!         ⊤ true
//!
//! Icons
//!     Connectives: their mathematical symbol (¬ ∧ ∨ → ↔)
//!     Proposition: ◦
//!     Constants: ⊤ for true, ⊥ for false

use crate::wff::ast::Formula;

fn line(formula: &Formula) -> String {
    match formula {
        Formula::Constant { value: true } => "⊤ true".to_string(),
        Formula::Constant { value: false } => "⊥ false".to_string(),
        Formula::Proposition { name } => format!("◦ {}", name),
        Formula::Unary { operator, .. } | Formula::Binary { operator, .. } => {
            format!("{} {}", operator.symbol(), operator.name())
        }
    }
}

fn write_node(formula: &Formula, depth: usize, out: &mut String) {
    out.push_str(&"  ".repeat(depth));
    out.push_str(&line(formula));
    out.push('\n');
    for child in formula.children() {
        write_node(child, depth + 1, out);
    }
}

/// Renders `formula` as a tree, one node per line.
pub fn to_treeviz_str(formula: &Formula) -> String {
    let mut out = String::new();
    write_node(formula, 0, &mut out);
    out
}
