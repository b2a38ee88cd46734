//! Validation entry points
//!
//!     [validate] is the yes/no contract consumed by the loader and the CLI. [check] is the
//!     same decision but hands back the recognized formula. [tokenize_all] and [tokens] are
//!     diagnostics: they classify lexemes and never decide validity.

use crate::wff::ast::Formula;
use crate::wff::lexing::{is_blank, Tokenizer};
use crate::wff::parsing::Parser;
use crate::wff::token::{Token, TokenKind};
use tracing::debug;

/// True iff `expression` is a well-formed formula.
///
/// Empty and whitespace-only expressions are rejected before scanning. An expression whose
/// first token is a lexical error is rejected before parsing.
pub fn validate(expression: &str) -> bool {
    check(expression).is_some()
}

/// Recognizes `expression` and returns its formula tree when it is well formed.
pub fn check(expression: &str) -> Option<Formula> {
    if expression.chars().all(is_blank) {
        debug!(expression, "empty expression");
        return None;
    }

    let tokenizer = Tokenizer::new(expression);
    if tokenizer.current().is_error() {
        debug!(expression, token = %tokenizer.current(), "lexical error on first token");
        return None;
    }

    let formula = Parser::new(tokenizer).parse();
    debug!(expression, valid = formula.is_some(), "validated");
    formula
}

/// Every token before end of input, with spans.
pub fn tokens(expression: &str) -> Vec<Token> {
    Tokenizer::new(expression).collect()
}

/// Every token before end of input as `(kind, lexeme)` pairs.
pub fn tokenize_all(expression: &str) -> Vec<(TokenKind, String)> {
    Tokenizer::new(expression)
        .map(|token| {
            let lexeme = token.lexeme().unwrap_or_default().to_string();
            (token.kind(), lexeme)
        })
        .collect()
}
