//! Testing utilities
//!
//!     Shared by unit tests, integration tests and the CLI self-test.
//!
//!     [factories] builds tokens and token streams by hand, so grammar rules can be exercised
//!     without a tokenizer. [samples] holds the reference expressions: the self-test list and
//!     the accepted/rejected corpora the test suites iterate over.

pub mod factories {
    use crate::wff::parsing::TokenStream;
    use crate::wff::token::{Token, TokenKind};

    /// A token whose span starts at 0.
    pub fn mk_token(kind: TokenKind, lexeme: &str) -> Token {
        Token::new(kind, lexeme, 0..lexeme.len())
    }

    /// Tokens laid out as if separated by single spaces.
    pub fn mk_tokens(items: &[(TokenKind, &str)]) -> Vec<Token> {
        let mut offset = 0;
        items
            .iter()
            .map(|(kind, lexeme)| {
                let token = Token::new(*kind, *lexeme, offset..offset + lexeme.len());
                offset += lexeme.len() + 1;
                token
            })
            .collect()
    }

    pub fn mk_stream(items: &[(TokenKind, &str)]) -> TokenStream {
        TokenStream::new(mk_tokens(items))
    }
}

pub mod samples {
    /// Expressions run by `wff --teste`, in order.
    pub const SELF_TEST_EXPRESSIONS: &[&str] = &[
        "true",
        "false",
        "p0",
        "p1",
        "p123abc",
        "0",
        "1",
        "123abc",
        r"(\neg p0)",
        r"(\wedge p1 p2)",
        r"(\vee p0 p1)",
        r"(\rightarrow p0 p1)",
        r"(\leftrightarrow p0 p1)",
        r"(\neg (\wedge p0 p1))",
        r"(\rightarrow (\neg p0) (\vee p1 p2))",
        r"(\leftrightarrow (\wedge p0 p1) (\rightarrow p2 p3))",
        "invalido",
        "(erro)",
        "p",
        r"(\neg)",
        r"(\wedge p0)",
    ];

    /// Well-formed formulas.
    pub const ACCEPTED: &[&str] = &[
        "true",
        "false",
        "0",
        "0a1",
        "123abc",
        "p0",
        "p123abc",
        "pX",
        r"(\neg p0)",
        r"(\wedge p1 p2)",
        r"(\vee 0 1)",
        r"(\rightarrow true false)",
        r"(\leftrightarrow p0 (\neg p0))",
        r"(\rightarrow (\neg p0) (\vee p1 p2))",
        r"(\neg (\neg (\neg true)))",
        "  (\\wedge   p0\tp1)  ",
        r"(\\neg p0)",
        r"(\negp0)",
    ];

    /// Lexically or syntactically ill-formed expressions.
    pub const REJECTED: &[&str] = &[
        "",
        "   ",
        "invalido",
        "(erro)",
        "p",
        "P0",
        "q1",
        "True",
        r"(\neg)",
        r"(\wedge p0)",
        r"(\neg p0 p1)",
        r"(\and p0 p1)",
        r"(\neg p0))",
        r"(\neg p0",
        "p0 p1",
        "()",
        "(p0)",
        r"\neg p0",
        "p0 \\",
        "0A",
        "p0 & p1",
    ];
}
