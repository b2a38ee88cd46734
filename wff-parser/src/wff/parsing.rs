//! Parser
//!
//!     An LL(1) predictive parser for the formula grammar:
//!
//!         FORMULA        = CONSTANT | PROPOSITION | UNARY_FORMULA | BINARY_FORMULA
//!         UNARY_FORMULA  = "(" UNARY_OP FORMULA ")"
//!         BINARY_FORMULA = "(" BINARY_OP FORMULA FORMULA ")"
//!
//!     The current token alone picks the production: constant, proposition, or an open
//!     parenthesis, and after the parenthesis the operator kind picks unary vs. binary. There
//!     is never an alternative to try, so any failing step fails the whole parse at once.
//!     Open compound formulas are kept on an explicit stack, so deep nesting costs heap, not
//!     call stack.
//!
//! Token Sources
//!
//!     The parser does not own a tokenizer. It reads lookahead and consumes through the
//!     [TokenSource](source::TokenSource) seam, which the [Tokenizer](crate::wff::lexing::Tokenizer)
//!     implements for real input and [TokenStream](source::TokenStream) implements for
//!     pre-built token lists. Grammar rules can therefore be exercised on hand-made streams,
//!     including streams no scanner would ever produce.

pub mod parser;
pub mod source;

pub use parser::Parser;
pub use source::{TokenSource, TokenStream};
