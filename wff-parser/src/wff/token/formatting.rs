//! Token formatting
//!
//! Renders tokens as the `KIND('lexeme')` trace used by the debug output of the CLI.

use super::core::Token;
use std::fmt;

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.lexeme() {
            Some(lexeme) => write!(f, "{}('{}')", self.kind().label(), lexeme),
            None => write!(f, "{}", self.kind().label()),
        }
    }
}

/// Space separated trace of every token, e.g. `OPEN_PAREN('(') UNARY_OPERATOR('\neg') ...`.
pub fn format_trace(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|token| token.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
