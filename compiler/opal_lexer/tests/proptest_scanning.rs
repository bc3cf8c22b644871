//! Property tests for the scanner: spans stay ordered and in bounds, and a
//! successful scan covers every non-whitespace character exactly once.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use opal_ir::{Op, OpKind};
use opal_lexer::{DashedIds, Scanner, SymbolTable};
use proptest::prelude::*;

fn table() -> SymbolTable {
    let ops = [
        Op::new("and", OpKind::And),
        Op::new("==", OpKind::Equal),
        Op::new("<", OpKind::Compare),
        Op::new("<=", OpKind::Compare),
        Op::new("-", OpKind::Add),
        Op::new("-", OpKind::Unary),
        Op::new("*", OpKind::Mult),
        Op::new("!", OpKind::Not),
    ];
    SymbolTable::new(&ops, Box::new(DashedIds)).expect("operator table is consistent")
}

fn arb_text() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        prop_oneof![
            Just("a"), Just("b"), Just("and"), Just("1"), Just("."), Just("-"),
            Just("="), Just("<"), Just("*"), Just("!"), Just("("), Just(")"),
            Just(","), Just(":"), Just(" "),
        ],
        0..24,
    )
    .prop_map(|parts| parts.concat())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn spans_ordered_and_covering(text in arb_text()) {
        let table = table();
        let mut scanner = Scanner::new(&table, &text);
        let mut covered = String::new();
        let mut last_end = 0;
        loop {
            match scanner.advance() {
                Ok(token) => {
                    let span = token.span();
                    prop_assert!(span.start >= last_end);
                    prop_assert!(span.end as usize <= text.len());
                    if token.is_end() {
                        break;
                    }
                    prop_assert!(span.end > span.start);
                    covered.push_str(scanner.lexeme(token));
                    last_end = span.end;
                }
                Err(err) => {
                    for span in err.errors().iter().flat_map(|error| error.spans()) {
                        prop_assert!(span.end as usize <= text.len());
                    }
                    return Ok(());
                }
            }
        }
        let expected: String = text.chars().filter(|c| !c.is_whitespace()).collect();
        prop_assert_eq!(covered, expected);
    }

    #[test]
    fn rollback_restores_the_token(text in arb_text()) {
        let table = table();
        let mut scanner = Scanner::new(&table, &text);
        if let Ok(first) = scanner.advance() {
            prop_assert!(scanner.rollback());
            let again = scanner.advance().unwrap();
            prop_assert_eq!(first.span(), again.span());
        }
    }
}
