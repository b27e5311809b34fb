//! Property-based tests for integer semantics.
//!
//! Operands are bound with `let` from source literals, so every `i64`
//! (including `i64::MIN`, which has no literal) reaches the evaluator, and the
//! result is compared against Rust's wrapping arithmetic.

use proptest::prelude::*;
use turtls::{evaluate, interpreter::value::core::Value};

/// Source text that evaluates to `n`.
fn literal(n: i64) -> String {
    if n >= 0 {
        n.to_string()
    } else {
        // The magnitude of i64::MIN is out of range, so subtract in two steps.
        format!("(0 - {} - 1)", (n + 1).unsigned_abs())
    }
}

fn eval_binary(a: i64, op: &str, b: i64) -> Value {
    let source = format!("let a = {}; let b = {}; a {op} b", literal(a), literal(b));
    evaluate(&source).unwrap_or_else(|e| panic!("{source} failed to parse: {e}"))
                     .unwrap_or_else(|| panic!("{source} produced no value"))
}

fn nonzero() -> impl Strategy<Value = i64> {
    any::<i64>().prop_filter("non-zero divisor", |b| *b != 0)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn literals_evaluate_to_themselves(n in any::<i64>()) {
        prop_assert_eq!(evaluate(&literal(n)).unwrap(), Some(Value::Integer(n)));
    }

    #[test]
    fn addition_wraps(a in any::<i64>(), b in any::<i64>()) {
        prop_assert_eq!(eval_binary(a, "+", b), Value::Integer(a.wrapping_add(b)));
    }

    #[test]
    fn subtraction_wraps(a in any::<i64>(), b in any::<i64>()) {
        prop_assert_eq!(eval_binary(a, "-", b), Value::Integer(a.wrapping_sub(b)));
    }

    #[test]
    fn multiplication_wraps(a in any::<i64>(), b in any::<i64>()) {
        prop_assert_eq!(eval_binary(a, "*", b), Value::Integer(a.wrapping_mul(b)));
    }

    #[test]
    fn division_truncates_and_wraps(a in any::<i64>(), b in nonzero()) {
        prop_assert_eq!(eval_binary(a, "/", b), Value::Integer(a.wrapping_div(b)));
    }

    #[test]
    fn remainder_follows_the_dividend(a in any::<i64>(), b in nonzero()) {
        prop_assert_eq!(eval_binary(a, "%", b), Value::Integer(a.wrapping_rem(b)));
    }

    #[test]
    fn dividing_by_zero_is_always_an_error(a in any::<i64>()) {
        prop_assert_eq!(eval_binary(a, "/", 0).to_string(), "ERROR: division by zero");
        prop_assert_eq!(eval_binary(a, "%", 0).to_string(), "ERROR: division by zero");
    }

    #[test]
    fn comparisons_match_integer_order(a in any::<i64>(), b in any::<i64>()) {
        prop_assert_eq!(eval_binary(a, "<", b), Value::from(a < b));
        prop_assert_eq!(eval_binary(a, ">=", b), Value::from(a >= b));
        prop_assert_eq!(eval_binary(a, "==", b), Value::from(a == b));
    }

    #[test]
    fn integer_rendering_parses_back(n in (i64::MIN + 1)..=i64::MAX) {
        let rendered = Value::Integer(n).to_string();
        prop_assert_eq!(evaluate(&rendered).unwrap(), Some(Value::Integer(n)));
    }

    #[test]
    fn boolean_rendering_parses_back(b in any::<bool>()) {
        let rendered = Value::from(b).to_string();
        prop_assert_eq!(evaluate(&rendered).unwrap(), Some(Value::from(b)));
    }
}
