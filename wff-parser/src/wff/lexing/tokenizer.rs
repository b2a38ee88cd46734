//! Pull-based tokenizer
//!
//!     The Tokenizer owns the normalized source, the scan cursor and exactly one current token.
//!     It is primed on construction: the first token is available before any `advance()`.
//!     Each `advance()` replaces the current token with the next one and drops the old one.
//!
//!     The cursor never moves backward. Once end of input is reached, further advances are
//!     no-ops that keep returning end of input.

use super::base_tokenization::scan;
use super::normalization::normalize_escapes;
use crate::wff::token::{Token, TokenKind};
use tracing::trace;

#[derive(Debug, Clone)]
pub struct Tokenizer {
    source: String,
    cursor: usize,
    current: Token,
}

impl Tokenizer {
    /// Normalizes `input` and scans its first token.
    pub fn new(input: &str) -> Self {
        let source = normalize_escapes(input).into_owned();
        let (current, cursor) = scan(&source, 0);
        trace!(token = %current, cursor, "scanned");
        Tokenizer {
            source,
            cursor,
            current,
        }
    }

    /// Moves to the next token.
    pub fn advance(&mut self) {
        if !self.current.is_end() {
            self.step();
        }
    }

    /// Replaces the current token with the next one and returns the old one.
    fn step(&mut self) -> Token {
        let (next, cursor) = scan(&self.source, self.cursor);
        trace!(token = %next, cursor, "scanned");
        self.cursor = cursor;
        std::mem::replace(&mut self.current, next)
    }

    pub fn current(&self) -> &Token {
        &self.current
    }

    pub fn current_kind(&self) -> TokenKind {
        self.current.kind()
    }

    /// Byte offset just past the current token.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The source after escape normalization.
    pub fn source(&self) -> &str {
        &self.source
    }
}

/// Yields every token before end of input, advancing the tokenizer as it goes.
impl Iterator for Tokenizer {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.current.is_end() {
            return None;
        }
        Some(self.step())
    }
}
