//! Lexer
//!
//!     This module turns raw expression text into tokens, one at a time, on demand.
//!
//! The Lexing Steps
//!
//!     1. Escape normalization. See [normalization](normalization).
//!        Every doubled escape marker is collapsed to a single one, once, over the whole
//!        input, before scanning starts. Expressions often travel as escaped text, so
//!        `\\neg` and `\neg` must read the same.
//!
//!     2. The scan step. See [base_tokenization](base_tokenization).
//!        A pure function from (source, cursor) to (token, new cursor). Whitespace skipping
//!        and lexeme shapes are delegated to a logos lexer; classification of words and
//!        escape sequences happens in plain code on top of it.
//!
//!     3. The [Tokenizer](tokenizer::Tokenizer).
//!        Owns the normalized source, the cursor and the single current token, and exposes
//!        `advance()`. This is what the parser pulls from.
//!
//! Greedy Decisions
//!
//!     The scanner never backtracks. An escape marker followed by a known name is an
//!     operator even when more letters follow (`\negx` is `\neg` then `x`). An escape marker
//!     followed by anything else swallows the run up to the next whitespace or parenthesis
//!     as one error token. A digit-led run stops at the first character that is neither a
//!     digit nor a lowercase ASCII letter.

pub mod base_tokenization;
pub mod normalization;
pub mod tokenizer;

pub use base_tokenization::{is_blank, scan};
pub use normalization::normalize_escapes;
pub use tokenizer::Tokenizer;
