//! Output formats for recognized formulas
//!
//! Canonical prefix text is `Formula`'s `Display`; token traces live in
//! [token::formatting](crate::wff::token::formatting). This module holds the tree view.

pub mod treeviz;

pub use treeviz::to_treeviz_str;
