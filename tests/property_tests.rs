//! Property-based tests - pragmatic approach testing core scanning guarantees
//!
//! These tests complement the example-based tests by verifying properties
//! across a wide range of generated inputs. Focus is on lexeme fidelity and
//! termination.

use jsonlex::{Scanner, Token, TokenKind};
use proptest::prelude::*;

/// Scans the input and returns every token up to end-of-input.
fn scan_all(input: &str) -> Vec<Token> {
    Scanner::new(input).into_iter().collect()
}

proptest! {
    // Any string matching the JSON number grammar scans to exactly one
    // Number token whose text is the input, unchanged.
    #[test]
    fn prop_valid_number_text_is_preserved(
        input in r"-?(0|[1-9][0-9]{0,8})(\.[0-9]{1,6})?([eE][+-]?[0-9]{1,3})?",
    ) {
        let tokens = scan_all(&input);
        prop_assert_eq!(tokens, vec![Token::new(TokenKind::Number, input)]);
    }

    // Integers as printed by Rust are valid JSON numbers.
    #[test]
    fn prop_i64_display_scans_as_number(n in any::<i64>()) {
        let input = n.to_string();
        let tokens = scan_all(&input);
        prop_assert_eq!(tokens, vec![Token::new(TokenKind::Number, input)]);
    }

    // Quoted content free of quotes and backslashes comes back verbatim.
    #[test]
    fn prop_plain_string_content_is_preserved(content in r#"[^"\\]{0,40}"#) {
        let input = format!("\"{content}\"");
        let tokens = scan_all(&input);
        prop_assert_eq!(tokens, vec![Token::new(TokenKind::String, content)]);
    }

    // A run of whitespace characters always coalesces into a single token.
    #[test]
    fn prop_whitespace_run_coalesces(
        run in proptest::collection::vec(prop::sample::select(vec![' ', '\t', '\n', '\r']), 1..40),
    ) {
        let input: String = run.into_iter().collect();
        let tokens = scan_all(&input);
        prop_assert_eq!(tokens, vec![Token::new(TokenKind::Whitespace, input)]);
    }

    // Numbers separated by single spaces come back in order with their
    // texts intact, alternating with whitespace tokens.
    #[test]
    fn prop_spaced_numbers_round_trip(
        numbers in proptest::collection::vec(r"-?(0|[1-9][0-9]{0,6})(\.[0-9]{1,4})?", 1..10),
    ) {
        let input = numbers.join(" ");
        let texts: Vec<String> = scan_all(&input)
            .into_iter()
            .filter(|t| !t.is_whitespace())
            .map(|t| t.text)
            .collect();
        prop_assert_eq!(texts, numbers);
    }

    // The scanner never panics on arbitrary input, makes progress on every
    // call, and reaches end-of-input within len + 1 calls.
    #[test]
    fn prop_arbitrary_input_terminates(input in any::<String>()) {
        let len = input.chars().count();
        let mut scanner = Scanner::new(&input);
        let mut reached_end = false;
        for _ in 0..=len {
            if scanner.next_token().is_end() {
                reached_end = true;
                break;
            }
        }
        prop_assert!(reached_end, "scanner did not terminate within {} calls", len + 1);
    }
}
