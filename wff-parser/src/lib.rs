//! # wff
//!
//! A recognizer for well-formed formulas of propositional logic written in fully
//! parenthesized prefix notation with LaTeX-style operator names:
//!
//!     (\rightarrow (\neg p0) (\vee p1 p2))
//!
//! File Layout
//!
//! The recognizer is split in two strictly layered stages, and the module tree follows them:
//! src/wff
//!   ├── token        Token kinds, operator vocabulary, trace formatting
//!   ├── lexing       Escape normalization, the pure scan step, the pull-based Tokenizer
//!   ├── parsing      The LL(1) predictive Parser over a TokenSource
//!   ├── ast          Formula nodes built as a side product of a successful parse
//!   ├── formats      Human readable renderings (treeviz)
//!   ├── loader       Batch files: count header + one expression per line
//!   └── validation   The public contract: validate / tokenize_all
//!
//! Invalid input is an expected outcome, never an error: every entry point answers with a
//! boolean or an `Option`.

pub mod wff;

pub use wff::ast::Formula;
pub use wff::token::{Operator, Token, TokenKind};
pub use wff::validation::{check, tokenize_all, tokens, validate};
