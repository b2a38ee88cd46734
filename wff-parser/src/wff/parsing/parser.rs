//! Predictive parser
//!
//!     One method per grammar rule. Each rule looks at the current token of its
//!     [TokenSource], consumes what it recognizes, and returns the recognized node or `None`.
//!     `None` is propagated with `?` straight up to `parse`: the lookahead already fixed the
//!     production, so there is nothing to retry.
//!
//!     Compound formulas do not recurse. Every "(" and operator pushes a `Pending` frame,
//!     every finished operand is handed to the innermost frame, and a frame that has all its
//!     operands is closed by its ")". Nesting depth is bounded only by the input.
//!
//!     A parser is built for one expression and used for one parse.

use super::source::TokenSource;
use crate::wff::ast::Formula;
use crate::wff::token::{Operator, Token, TokenKind};
use tracing::debug;

/// An opened compound formula still waiting for operands.
#[derive(Debug)]
enum Pending {
    Unary(Operator),
    Binary(Operator, Option<Formula>),
}

#[derive(Debug)]
pub struct Parser<S> {
    source: S,
}

impl<S: TokenSource> Parser<S> {
    pub fn new(source: S) -> Self {
        Parser { source }
    }

    /// FORMULA followed by end of input.
    ///
    /// Tokens left over after a complete formula (a stray `)`, a second formula, an error
    /// token) reject the whole expression.
    pub fn parse(&mut self) -> Option<Formula> {
        let formula = self.formula()?;
        if self.source.current().is_end() {
            Some(formula)
        } else {
            debug!(trailing = %self.source.current(), "formula followed by extra tokens");
            None
        }
    }

    /// Consumes the current token if it has the `expected` kind.
    ///
    /// On a mismatch nothing is consumed.
    pub fn consume(&mut self, expected: TokenKind) -> Option<Token> {
        if !self.source.current().is(expected) {
            return None;
        }
        let token = self.source.current().clone();
        self.source.advance();
        Some(token)
    }

    /// FORMULA = CONSTANT | PROPOSITION | UNARY_FORMULA | BINARY_FORMULA
    ///
    /// UNARY_FORMULA  = "(" UNARY_OP FORMULA ")"
    /// BINARY_FORMULA = "(" BINARY_OP FORMULA FORMULA ")"
    pub fn formula(&mut self) -> Option<Formula> {
        let mut pending: Vec<Pending> = Vec::new();
        loop {
            let mut node = self.operand(&mut pending)?;
            loop {
                match pending.pop() {
                    None => return Some(node),
                    Some(Pending::Unary(operator)) => {
                        self.consume(TokenKind::CloseParen)?;
                        node = Formula::unary(operator, node);
                    }
                    Some(Pending::Binary(operator, None)) => {
                        pending.push(Pending::Binary(operator, Some(node)));
                        break;
                    }
                    Some(Pending::Binary(operator, Some(left))) => {
                        self.consume(TokenKind::CloseParen)?;
                        node = Formula::binary(operator, left, node);
                    }
                }
            }
        }
    }

    pub fn current_kind(&self) -> TokenKind {
        self.source.current().kind()
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn into_source(self) -> S {
        self.source
    }

    /// Opens compound formulas until an atom is read, and returns that atom.
    fn operand(&mut self, pending: &mut Vec<Pending>) -> Option<Formula> {
        loop {
            let kind = self.current_kind();
            if !kind.starts_formula() {
                return None;
            }
            match kind {
                TokenKind::Constant => return self.constant(),
                TokenKind::Proposition => return self.proposition(),
                _ => pending.push(self.compound()?),
            }
        }
    }

    fn constant(&mut self) -> Option<Formula> {
        let token = self.consume(TokenKind::Constant)?;
        match token.lexeme()? {
            "true" => Some(Formula::constant(true)),
            "false" => Some(Formula::constant(false)),
            _ => None,
        }
    }

    fn proposition(&mut self) -> Option<Formula> {
        let token = self.consume(TokenKind::Proposition)?;
        token.lexeme().map(Formula::proposition)
    }

    /// "(" then UNARY_OP or BINARY_OP decides which frame is opened.
    fn compound(&mut self) -> Option<Pending> {
        self.consume(TokenKind::OpenParen)?;
        match self.current_kind() {
            TokenKind::UnaryOperator => self.operator(TokenKind::UnaryOperator).map(Pending::Unary),
            TokenKind::BinaryOperator => self
                .operator(TokenKind::BinaryOperator)
                .map(|operator| Pending::Binary(operator, None)),
            _ => None,
        }
    }

    /// Consumes an operator token and resolves its lexeme.
    ///
    /// Scanned tokens always name an operator of their kind; hand-built tokens that don't
    /// are rejected.
    fn operator(&mut self, kind: TokenKind) -> Option<Operator> {
        let token = self.consume(kind)?;
        let operator = token.lexeme().and_then(Operator::from_lexeme)?;
        let expected_unary = kind == TokenKind::UnaryOperator;
        (operator.is_unary() == expected_unary).then_some(operator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wff::lexing::Tokenizer;
    use crate::wff::parsing::TokenStream;
    use crate::wff::testing::factories::{mk_stream, mk_token};

    fn parse(source: &str) -> Option<Formula> {
        Parser::new(Tokenizer::new(source)).parse()
    }

    #[test]
    fn test_atoms() {
        assert_eq!(parse("true"), Some(Formula::constant(true)));
        assert_eq!(parse("false"), Some(Formula::constant(false)));
        assert_eq!(parse("0a1"), Some(Formula::proposition("0a1")));
        assert_eq!(parse("p123abc"), Some(Formula::proposition("p123abc")));
    }

    #[test]
    fn test_nested_formula() {
        assert_eq!(
            parse(r"(\rightarrow (\neg p0) (\vee p1 p2))"),
            Some(Formula::binary(
                Operator::Rightarrow,
                Formula::unary(Operator::Neg, Formula::proposition("p0")),
                Formula::binary(
                    Operator::Vee,
                    Formula::proposition("p1"),
                    Formula::proposition("p2")
                ),
            ))
        );
    }

    #[test]
    fn test_arity_violations() {
        assert_eq!(parse(r"(\wedge p0)"), None);
        assert_eq!(parse(r"(\neg)"), None);
        assert_eq!(parse(r"(\neg p0 p1)"), None);
        assert_eq!(parse(r"(\vee p0 p1 p2)"), None);
    }

    #[test]
    fn test_parens_without_operator() {
        assert_eq!(parse("()"), None);
        assert_eq!(parse("(p0)"), None);
        assert_eq!(parse("("), None);
        assert_eq!(parse(")"), None);
    }

    #[test]
    fn test_trailing_tokens_are_rejected() {
        assert_eq!(parse("p0 p1"), None);
        assert_eq!(parse(r"(\neg p0))"), None);
        assert_eq!(parse("true invalido"), None);
    }

    #[test]
    fn test_consume_leaves_state_on_mismatch() {
        let mut parser = Parser::new(Tokenizer::new(r"(\neg p0)"));
        assert!(parser.consume(TokenKind::CloseParen).is_none());
        assert_eq!(parser.current_kind(), TokenKind::OpenParen);
        let token = parser.consume(TokenKind::OpenParen).expect("open paren");
        assert_eq!(token.lexeme(), Some("("));
        assert_eq!(parser.current_kind(), TokenKind::UnaryOperator);
    }

    #[test]
    fn test_formula_stops_after_one_formula() {
        let mut parser = Parser::new(Tokenizer::new("p0 )"));
        assert_eq!(parser.formula(), Some(Formula::proposition("p0")));
        assert_eq!(parser.current_kind(), TokenKind::CloseParen);
    }

    #[test]
    fn test_rules_on_prebuilt_stream() {
        let mut parser = Parser::new(mk_stream(&[
            (TokenKind::OpenParen, "("),
            (TokenKind::BinaryOperator, r"\wedge"),
            (TokenKind::Constant, "true"),
            (TokenKind::Proposition, "9"),
            (TokenKind::CloseParen, ")"),
        ]));
        assert_eq!(
            parser.parse(),
            Some(Formula::binary(
                Operator::Wedge,
                Formula::constant(true),
                Formula::proposition("9")
            ))
        );
        assert_eq!(parser.into_source().position(), 5);
    }

    #[test]
    fn test_error_token_fails_formula() {
        let mut parser = Parser::new(TokenStream::new(vec![mk_token(TokenKind::Error, "?")]));
        assert_eq!(parser.formula(), None);
    }

    #[test]
    fn test_operator_kind_must_match_lexeme() {
        let mut parser = Parser::new(mk_stream(&[
            (TokenKind::OpenParen, "("),
            (TokenKind::UnaryOperator, r"\wedge"),
            (TokenKind::Proposition, "1"),
            (TokenKind::CloseParen, ")"),
        ]));
        assert_eq!(parser.parse(), None);
    }

    fn nested_negations(depth: usize) -> String {
        format!("{}p0{}", r"(\neg ".repeat(depth), ")".repeat(depth))
    }

    #[test]
    fn test_deep_nesting_is_accepted() {
        for depth in [512, 513, 900, 2000] {
            assert!(parse(&nested_negations(depth)).is_some(), "depth {depth}");
        }
    }

    #[test]
    fn test_deep_nesting_unbalanced() {
        let mut unclosed = nested_negations(2000);
        unclosed.pop();
        assert_eq!(parse(&unclosed), None);
        assert_eq!(parse(&format!("{})", nested_negations(2000))), None);
    }

    #[test]
    fn test_deep_binary_spine() {
        let depth = 5000;
        let source = format!("{}true{}", r"(\wedge p0 ".repeat(depth), ")".repeat(depth));
        assert!(parse(&source).is_some());
        let left_spine = format!("{}true{}", r"(\vee ".repeat(depth), " 0)".repeat(depth));
        assert!(parse(&left_spine).is_some());
    }
}
