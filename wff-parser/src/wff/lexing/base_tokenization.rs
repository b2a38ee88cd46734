//! Base tokenization implementation for the wff lexer
//!
//! This module provides the scan step: a pure function from a source and a cursor to the
//! next token and the cursor just past it. The logos lexer recognizes lexeme shapes and
//! skips whitespace; the classification the grammar cares about (constants, the two
//! proposition shapes, operators vs. unknown escapes) is done here on top of it.
//!
//! Every call builds a fresh logos lexer over the unread remainder, so no scanning state
//! survives between calls besides the cursor the caller passes back in.

use crate::wff::token::{Operator, Token, TokenKind};
use logos::Logos;

/// Outcome of reading the name after an escape marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EscapeMatch {
    Known(Operator),
    Unknown,
}

/// Lexeme shapes, before grammar classification.
///
/// Skipped blanks are Unicode white space plus the information separators U+001C..U+001F.
/// `digit` is every decimal digit plus the other digit characters (superscripts,
/// subscripts, circled and parenthesized forms, and a few script-specific ones).
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(
    subpattern digit = r"[\p{Nd}\x{B2}\x{B3}\x{B9}\x{1369}-\x{1371}\x{19DA}\x{2070}\x{2074}-\x{2079}\x{2080}-\x{2089}\x{2460}-\x{2468}\x{2474}-\x{247C}\x{2488}-\x{2490}\x{24EA}\x{24F5}-\x{24FD}\x{24FF}\x{2776}-\x{277E}\x{2780}-\x{2788}\x{278A}-\x{2792}\x{10A40}-\x{10A43}\x{10E60}-\x{10E68}\x{11052}-\x{1105A}\x{1F100}-\x{1F10A}]"
)]
#[logos(skip r"[\s\x{1C}-\x{1F}]+")]
pub(crate) enum RawToken {
    #[token("(")]
    OpenParen,

    #[token(")")]
    CloseParen,

    /// Escape marker plus whatever name follows it, see [escaped_operator].
    #[token("\\", escaped_operator)]
    Escape(EscapeMatch),

    /// Digit followed by digits or lowercase ASCII letters.
    #[regex(r"(?&digit)((?&digit)|[a-z])*", priority = 3)]
    Numeral,

    /// Alphabetic character followed by alphanumerics.
    #[regex(r"[\p{Alphabetic}][\p{Alphabetic}\p{N}]*", priority = 3)]
    Word,

    /// Any other single character.
    #[regex(r"[^\s\x{1C}-\x{1F}]", priority = 1)]
    Stray,
}

/// Characters skipped between tokens and trimmed from batch lines.
pub fn is_blank(c: char) -> bool {
    c.is_whitespace() || ('\u{1C}'..='\u{1F}').contains(&c)
}

/// Reads the operator name after the marker the lexer just matched.
///
/// Known names are matched by literal prefix. Anything else consumes the run of characters
/// up to the next whitespace or parenthesis, which may be empty at end of input.
fn escaped_operator(lex: &mut logos::Lexer<RawToken>) -> EscapeMatch {
    let rest = lex.remainder();
    if let Some(op) = Operator::match_prefix(rest) {
        lex.bump(op.name().len());
        return EscapeMatch::Known(op);
    }
    let run = rest
        .find(|c: char| is_blank(c) || c == '(' || c == ')')
        .unwrap_or(rest.len());
    lex.bump(run);
    EscapeMatch::Unknown
}

/// Classifies an alphabetic word.
///
/// `true`/`false` are constants. A word starting with `p` followed by at least one more
/// character is a proposition; this widens the digit-led proposition rule. Everything else,
/// bare `p` included, is an error.
pub(crate) fn classify_word(word: &str) -> TokenKind {
    match word {
        "true" | "false" => TokenKind::Constant,
        _ if word.starts_with('p') && word.chars().nth(1).is_some() => TokenKind::Proposition,
        _ => TokenKind::Error,
    }
}

fn classify(raw: RawToken, lexeme: &str) -> TokenKind {
    match raw {
        RawToken::OpenParen => TokenKind::OpenParen,
        RawToken::CloseParen => TokenKind::CloseParen,
        RawToken::Escape(EscapeMatch::Known(op)) if op.is_unary() => TokenKind::UnaryOperator,
        RawToken::Escape(EscapeMatch::Known(_)) => TokenKind::BinaryOperator,
        RawToken::Escape(EscapeMatch::Unknown) => TokenKind::Error,
        RawToken::Numeral => TokenKind::Proposition,
        RawToken::Word => classify_word(lexeme),
        RawToken::Stray => TokenKind::Error,
    }
}

/// Scans the token that starts at or after `cursor`.
///
/// Returns the token and the offset just past its lexeme. Leading whitespace is skipped.
/// At end of input the token is end-of-input and the returned cursor is `source.len()`,
/// so scanning again from there yields end-of-input again.
pub fn scan(source: &str, cursor: usize) -> (Token, usize) {
    let rest = source.get(cursor..).unwrap_or_default();
    let mut lexer = RawToken::lexer(rest);

    let Some(result) = lexer.next() else {
        return (Token::end_of_input(source.len()), source.len());
    };

    let local = lexer.span();
    let span = cursor + local.start..cursor + local.end;
    let lexeme = lexer.slice();
    let kind = match result {
        Ok(raw) => classify(raw, lexeme),
        Err(()) => TokenKind::Error,
    };
    let end = span.end;
    (Token::new(kind, lexeme, span), end)
}
