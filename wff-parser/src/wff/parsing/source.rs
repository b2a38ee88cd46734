//! Token sources the parser can pull from

use crate::wff::lexing::Tokenizer;
use crate::wff::token::Token;

/// One-token lookahead over a token sequence.
///
/// `current` must keep returning end of input once the sequence is exhausted, and
/// `advance` past the end must be a no-op.
pub trait TokenSource {
    fn current(&self) -> &Token;
    fn advance(&mut self);
}

impl TokenSource for Tokenizer {
    fn current(&self) -> &Token {
        Tokenizer::current(self)
    }

    fn advance(&mut self) {
        Tokenizer::advance(self)
    }
}

impl<S: TokenSource + ?Sized> TokenSource for &mut S {
    fn current(&self) -> &Token {
        (**self).current()
    }

    fn advance(&mut self) {
        (**self).advance()
    }
}

/// A pre-built token list.
///
/// An explicit end-of-input token in the list is honored; a list without one behaves as if
/// it ended with one.
#[derive(Debug, Clone)]
pub struct TokenStream {
    tokens: Vec<Token>,
    position: usize,
    end: Token,
}

impl TokenStream {
    pub fn new(tokens: Vec<Token>) -> Self {
        let offset = tokens.last().map(|token| token.span().end).unwrap_or(0);
        TokenStream {
            tokens,
            position: 0,
            end: Token::end_of_input(offset),
        }
    }

    /// Number of tokens consumed so far.
    pub fn position(&self) -> usize {
        self.position
    }
}

impl TokenSource for TokenStream {
    fn current(&self) -> &Token {
        self.tokens.get(self.position).unwrap_or(&self.end)
    }

    fn advance(&mut self) {
        if !self.current().is_end() {
            self.position += 1;
        }
    }
}
