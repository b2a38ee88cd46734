//! Token and TokenKind definitions

use serde::Serialize;
use std::ops::Range;

/// Classification of a lexical unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    OpenParen,
    CloseParen,
    UnaryOperator,
    BinaryOperator,
    Proposition,
    Constant,
    Error,
    EndOfInput,
}

impl TokenKind {
    /// Upper-case label used in token traces, e.g. `OPEN_PAREN`.
    pub fn label(self) -> &'static str {
        match self {
            TokenKind::OpenParen => "OPEN_PAREN",
            TokenKind::CloseParen => "CLOSE_PAREN",
            TokenKind::UnaryOperator => "UNARY_OPERATOR",
            TokenKind::BinaryOperator => "BINARY_OPERATOR",
            TokenKind::Proposition => "PROPOSITION",
            TokenKind::Constant => "CONSTANT",
            TokenKind::Error => "ERROR",
            TokenKind::EndOfInput => "END_OF_INPUT",
        }
    }

    /// Kinds that may start a FORMULA.
    pub fn starts_formula(self) -> bool {
        matches!(
            self,
            TokenKind::Constant | TokenKind::Proposition | TokenKind::OpenParen
        )
    }
}

/// A classified lexeme with its byte range in the normalized source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    kind: TokenKind,
    lexeme: Option<String>,
    span: Range<usize>,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, span: Range<usize>) -> Self {
        Token {
            kind,
            lexeme: Some(lexeme.into()),
            span,
        }
    }

    /// The end-of-input token, positioned at `offset`.
    pub fn end_of_input(offset: usize) -> Self {
        Token {
            kind: TokenKind::EndOfInput,
            lexeme: None,
            span: offset..offset,
        }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The matched text. `None` only for end of input.
    pub fn lexeme(&self) -> Option<&str> {
        self.lexeme.as_deref()
    }

    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    pub fn is_end(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }

    pub fn is_error(&self) -> bool {
        self.kind == TokenKind::Error
    }
}
