//! Formula nodes
//!
//!     Each successful grammar rule returns the node it recognized, so a successful parse
//!     yields the whole formula tree. The tree is a by-product of recognition: it does not
//!     take part in deciding whether an expression is accepted, and nothing evaluates it.
//!
//!     `Display` renders the canonical spelling of a formula: single spaces between
//!     operator and operands, no space inside the parentheses. Rendering a parsed formula
//!     and parsing the result again yields the same tree.

use crate::wff::token::Operator;
use serde::Serialize;
use std::fmt;
use std::mem;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Formula {
    Constant {
        value: bool,
    },
    Proposition {
        name: String,
    },
    Unary {
        operator: Operator,
        operand: Box<Formula>,
    },
    Binary {
        operator: Operator,
        left: Box<Formula>,
        right: Box<Formula>,
    },
}

impl Formula {
    pub fn constant(value: bool) -> Self {
        Formula::Constant { value }
    }

    pub fn proposition(name: impl Into<String>) -> Self {
        Formula::Proposition { name: name.into() }
    }

    pub fn unary(operator: Operator, operand: Formula) -> Self {
        Formula::Unary {
            operator,
            operand: Box::new(operand),
        }
    }

    pub fn binary(operator: Operator, left: Formula, right: Formula) -> Self {
        Formula::Binary {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Direct subformulas, left to right.
    pub fn children(&self) -> Vec<&Formula> {
        match self {
            Formula::Constant { .. } | Formula::Proposition { .. } => Vec::new(),
            Formula::Unary { operand, .. } => vec![&**operand],
            Formula::Binary { left, right, .. } => vec![&**left, &**right],
        }
    }
}

/// Frees nested operands from a worklist, so dropping a deep tree does not recurse.
impl Drop for Formula {
    fn drop(&mut self) {
        let mut detached = Vec::new();
        detach_operands(self, &mut detached);
        while let Some(mut formula) = detached.pop() {
            detach_operands(&mut formula, &mut detached);
        }
    }
}

fn detach_operands(formula: &mut Formula, out: &mut Vec<Formula>) {
    let placeholder = || Formula::Constant { value: false };
    match formula {
        Formula::Unary { operand, .. } => out.push(mem::replace(&mut **operand, placeholder())),
        Formula::Binary { left, right, .. } => {
            out.push(mem::replace(&mut **left, placeholder()));
            out.push(mem::replace(&mut **right, placeholder()));
        }
        Formula::Constant { .. } | Formula::Proposition { .. } => {}
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Formula::Constant { value } => write!(f, "{}", value),
            Formula::Proposition { name } => write!(f, "{}", name),
            Formula::Unary { operator, operand } => write!(f, "({} {})", operator, operand),
            Formula::Binary {
                operator,
                left,
                right,
            } => write!(f, "({} {} {})", operator, left, right),
        }
    }
}
