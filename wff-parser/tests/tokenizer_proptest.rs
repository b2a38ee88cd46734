//! Property-based tests for the tokenizer and parser
//!
//! Generated well-formed formulas must be accepted, any trailing text must make them fail,
//! and arbitrary input must never panic, never move the cursor backward and always reach
//! end of input.

use proptest::prelude::*;
use wff_parser::wff::lexing::Tokenizer;
use wff_parser::{check, validate};

/// Atomic formulas: constants and both proposition shapes
fn atom_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("true".to_string()),
        Just("false".to_string()),
        // Digit-led propositions
        "[0-9][0-9a-z]{0,5}",
        // p-prefixed propositions
        "p[a-zA-Z0-9]{1,5}",
    ]
}

fn binary_operator_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![r"\wedge", r"\vee", r"\rightarrow", r"\leftrightarrow"])
}

/// Well-formed formulas up to a few levels deep
fn formula_strategy() -> impl Strategy<Value = String> {
    atom_strategy().prop_recursive(5, 48, 2, |inner| {
        prop_oneof![
            inner.clone().prop_map(|operand| format!(r"(\neg {})", operand)),
            (binary_operator_strategy(), inner.clone(), inner)
                .prop_map(|(op, left, right)| format!("({} {} {})", op, left, right)),
        ]
    })
}

/// Non-empty text that can never complete or extend a formula
fn garbage_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(")".to_string()),
        Just("(".to_string()),
        Just(r"\neg".to_string()),
        Just("invalido".to_string()),
        atom_strategy(),
        formula_strategy(),
    ]
}

proptest! {
    #[test]
    fn test_generated_formulas_are_valid(formula in formula_strategy()) {
        prop_assert!(validate(&formula), "rejected {:?}", formula);
    }

    #[test]
    fn test_trailing_garbage_is_rejected(formula in formula_strategy(), garbage in garbage_strategy()) {
        let input = format!("{} {}", formula, garbage);
        prop_assert!(!validate(&input), "accepted {:?}", input);
    }

    #[test]
    fn test_extra_whitespace_is_insignificant(formula in formula_strategy()) {
        let spaced = format!("\t{}\n", formula.replace(' ', " \t\n "));
        prop_assert!(validate(&spaced));
        prop_assert_eq!(check(&spaced), check(&formula));
    }

    #[test]
    fn test_canonical_display_round_trips(formula in formula_strategy()) {
        let parsed = check(&formula).expect("generated formula is valid");
        prop_assert_eq!(parsed.to_string(), formula.clone());
        prop_assert_eq!(check(&parsed.to_string()), Some(parsed));
    }

    #[test]
    fn test_arbitrary_input_never_panics_and_is_idempotent(input in "\\PC{0,40}") {
        let first = validate(&input);
        prop_assert_eq!(validate(&input), first);
    }

    #[test]
    fn test_cursor_is_monotonic_and_terminates(input in "[()\\\\a-zA-Z0-9 \t_&]{0,40}") {
        let mut tokenizer = Tokenizer::new(&input);
        let limit = tokenizer.source().len() + 1;
        let mut previous = 0;
        let mut steps = 0;
        while !tokenizer.current().is_end() {
            prop_assert!(tokenizer.cursor() >= previous);
            prop_assert!(tokenizer.current().span().end <= tokenizer.cursor());
            previous = tokenizer.cursor();
            tokenizer.advance();
            steps += 1;
            prop_assert!(steps <= limit, "no end of input after {} steps", steps);
        }
        prop_assert_eq!(tokenizer.cursor(), tokenizer.source().len());
    }
}
