//! Operator vocabulary
//!
//!     UNARY_OP  = "\neg"
//!     BINARY_OP = "\wedge" | "\vee" | "\rightarrow" | "\leftrightarrow"

use serde::Serialize;
use std::fmt;

/// The escape marker that introduces every operator name.
pub const ESCAPE_MARKER: char = '\\';

/// A logical connective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    Neg,
    Wedge,
    Vee,
    Rightarrow,
    Leftrightarrow,
}

impl Operator {
    /// Every operator, in the order the scanner compares them against the input.
    pub const ALL: [Operator; 5] = [
        Operator::Neg,
        Operator::Wedge,
        Operator::Vee,
        Operator::Rightarrow,
        Operator::Leftrightarrow,
    ];

    /// The operator name without the escape marker.
    pub fn name(self) -> &'static str {
        match self {
            Operator::Neg => "neg",
            Operator::Wedge => "wedge",
            Operator::Vee => "vee",
            Operator::Rightarrow => "rightarrow",
            Operator::Leftrightarrow => "leftrightarrow",
        }
    }

    /// Number of operands the connective takes.
    pub fn arity(self) -> usize {
        match self {
            Operator::Neg => 1,
            _ => 2,
        }
    }

    pub fn is_unary(self) -> bool {
        self.arity() == 1
    }

    /// Finds the operator whose name is a prefix of `text` (text after the escape marker).
    pub fn match_prefix(text: &str) -> Option<Operator> {
        Operator::ALL
            .into_iter()
            .find(|op| text.starts_with(op.name()))
    }

    /// Resolves a full lexeme such as `\wedge`.
    pub fn from_lexeme(lexeme: &str) -> Option<Operator> {
        let name = lexeme.strip_prefix(ESCAPE_MARKER)?;
        Operator::ALL.into_iter().find(|op| op.name() == name)
    }

    /// Mathematical symbol, used by the treeviz formatter.
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Neg => "¬",
            Operator::Wedge => "∧",
            Operator::Vee => "∨",
            Operator::Rightarrow => "→",
            Operator::Leftrightarrow => "↔",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", ESCAPE_MARKER, self.name())
    }
}
