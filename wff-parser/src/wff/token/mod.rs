//! Core token types shared across the lexer, parser, and tooling.
//!
//!     A token is a classified lexical unit: a [TokenKind] plus the exact text it matched
//!     (its lexeme). End of input is a token too, and it is the only one without a lexeme.
//!
//!     Operators are spelled with an escape marker followed by a LaTeX name. The fixed
//!     vocabulary lives in [operator](operator): one unary name and four binary names, none of
//!     which is a prefix of another, so a plain prefix comparison is enough to recognize them.
//!
//!     Tokens also carry their byte range in the normalized source. The range is not used for
//!     recognition, only for tracing and tooling.

pub mod core;
pub mod formatting;
pub mod operator;

pub use core::{Token, TokenKind};
pub use formatting::format_trace;
pub use operator::{Operator, ESCAPE_MARKER};
