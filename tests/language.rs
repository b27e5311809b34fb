use std::fs;

use pretty_assertions::assert_eq;
use turtls::{
    error::ParseError,
    evaluate,
    interpreter::{parser::core::MAX_NESTING_DEPTH, value::core::Value},
};
use walkdir::WalkDir;

const EXPECT_PREFIX: &str = "// expect: ";

#[test]
fn demo_scripts_produce_their_expected_result() {
    let mut count = 0;

    for entry in WalkDir::new("demos").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| {
                                          e.path()
                                           .extension()
                                           .is_some_and(|ext| ext == turtls::SCRIPT_EXTENSION)
                                      })
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected = content.lines()
                              .next()
                              .and_then(|line| line.strip_prefix(EXPECT_PREFIX))
                              .unwrap_or_else(|| panic!("{path:?} has no `{EXPECT_PREFIX}` header"));

        count += 1;
        let actual = match evaluate(&content) {
            Ok(Some(value)) => value.to_string(),
            Ok(None) => "none".to_string(),
            Err(e) => e.to_string(),
        };
        assert_eq!(actual, expected, "script {path:?}");
    }

    assert!(count > 0, "No scripts found in demos");
}

fn eval(src: &str) -> Value {
    evaluate(src).unwrap_or_else(|e| panic!("Script failed to parse: {e}"))
                 .unwrap_or_else(|| panic!("Script produced no value: {src}"))
}

fn render(src: &str) -> String {
    eval(src).to_string()
}

#[test]
fn integer_arithmetic() {
    assert_eq!(eval("1 + 2 * 3"), Value::Integer(7));
    assert_eq!(eval("(1 + 2) * 3"), Value::Integer(9));
    assert_eq!(eval("10 - 4 - 3"), Value::Integer(3));
    assert_eq!(eval("-7 / 2"), Value::Integer(-3));
    assert_eq!(eval("-7 % 3"), Value::Integer(-1));
    assert_eq!(eval("7 % -3"), Value::Integer(1));
}

#[test]
fn arithmetic_wraps_on_overflow() {
    assert_eq!(eval("9223372036854775807 + 1"), Value::Integer(i64::MIN));
    assert_eq!(eval("-9223372036854775807 - 2"), Value::Integer(i64::MAX));
    assert_eq!(eval("4611686018427387904 * 2"), Value::Integer(i64::MIN));
    assert_eq!(eval("(-9223372036854775807 - 1) / -1"), Value::Integer(i64::MIN));
    assert_eq!(eval("(-9223372036854775807 - 1) % -1"), Value::Integer(0));
    assert_eq!(eval("-(-9223372036854775807 - 1)"), Value::Integer(i64::MIN));
}

#[test]
fn division_by_zero_is_an_error() {
    assert_eq!(render("5 / 0"), "ERROR: division by zero");
    assert_eq!(render("5 % 0"), "ERROR: division by zero");
    assert_eq!(render("let z = 0; 1 / z; 3"), "ERROR: division by zero");
}

#[test]
fn bitwise_and_shift_operators() {
    assert_eq!(eval("6 & 3"), Value::Integer(2));
    assert_eq!(eval("6 | 3"), Value::Integer(7));
    assert_eq!(eval("6 ^ 3"), Value::Integer(5));
    assert_eq!(eval("^0"), Value::Integer(-1));
    assert_eq!(eval("1 << 62"), Value::Integer(1 << 62));
    assert_eq!(eval("-16 >> 2"), Value::Integer(-4));
    assert_eq!(eval("1 << 64"), Value::Integer(0));
    assert_eq!(eval("-1 >> 70"), Value::Integer(-1));
    assert_eq!(eval("5 >> 64"), Value::Integer(0));
    assert_eq!(render("1 << -1"), "ERROR: negative shift amount: -1");
}

#[test]
fn bit_clear_on_integers_is_null() {
    assert_eq!(eval("6 &^ 3"), Value::Null);
}

#[test]
fn power_goes_through_floating_point() {
    assert_eq!(eval("2 ** 10"), Value::Integer(1024));
    assert_eq!(eval("2 ** 3 ** 2"), Value::Integer(512));
    assert_eq!(eval("-2 ** 2"), Value::Integer(-4));
    assert_eq!(eval("2 ** -1"), Value::Integer(0));
    assert_eq!(eval("10 ** 30"), Value::Integer(i64::MAX));
}

#[test]
fn comparisons() {
    assert_eq!(eval("1 < 2"), Value::Boolean(true));
    assert_eq!(eval("1 > 2"), Value::Boolean(false));
    assert_eq!(eval("2 <= 2"), Value::Boolean(true));
    assert_eq!(eval("1 >= 2"), Value::Boolean(false));
    assert_eq!(eval("5 == 5"), Value::Boolean(true));
    assert_eq!(eval("5 != 5"), Value::Boolean(false));
    assert_eq!(eval("1 + 1 == 2"), Value::Boolean(true));
}

#[test]
fn equality_is_instance_identity() {
    assert_eq!(eval("true == true"), Value::Boolean(true));
    assert_eq!(eval("true != false"), Value::Boolean(true));
    assert_eq!(eval("(1 < 2) == true"), Value::Boolean(true));
    assert_eq!(eval("(if (false) { 1 }) == (if (false) { 2 })"), Value::Boolean(true));
    assert_eq!(eval("1 == true"), Value::Boolean(false));
    assert_eq!(eval("1 != true"), Value::Boolean(true));
}

#[test]
fn logical_not() {
    assert_eq!(eval("!true"), Value::Boolean(false));
    assert_eq!(eval("!false"), Value::Boolean(true));
    assert_eq!(eval("!(if (false) { 1 })"), Value::Boolean(true));
    assert_eq!(eval("!5"), Value::Boolean(false));
    assert_eq!(eval("!0"), Value::Boolean(false));
    assert_eq!(eval("!!5"), Value::Boolean(true));
}

#[test]
fn operator_errors_name_the_kinds() {
    assert_eq!(render("5 + true"), "ERROR: type mismatch: INTEGER + BOOLEAN");
    assert_eq!(render("true - 1"), "ERROR: type mismatch: BOOLEAN - INTEGER");
    assert_eq!(render("true + false"), "ERROR: unknown operator: BOOLEAN + BOOLEAN");
    assert_eq!(render("true < false"), "ERROR: unknown operator: BOOLEAN < BOOLEAN");
    assert_eq!(render("-true"), "ERROR: unknown operator: -BOOLEAN");
    assert_eq!(render("^(if (false) { 1 })"), "ERROR: unknown operator: ^NULL");
}

#[test]
fn conditionals() {
    assert_eq!(eval("if (true) { 10 }"), Value::Integer(10));
    assert_eq!(eval("if (false) { 10 }"), Value::Null);
    assert_eq!(eval("if (0) { 1 } else { 2 }"), Value::Integer(1));
    assert_eq!(eval("if (1 > 2) { 10 } else { 20 }"), Value::Integer(20));
    assert_eq!(eval("if (false) { 1 } else if (false) { 2 }"), Value::Null);
    assert_eq!(render("if (false) { 1 }"), "null");
}

#[test]
fn bindings() {
    assert_eq!(eval("let x = 5; x + 1;"), Value::Integer(6));
    assert_eq!(eval("let x = 5; let x = x * 2; x"), Value::Integer(10));
    assert_eq!(eval("let a = 5; let b = a; let c = a + b + 5; c"), Value::Integer(15));
    assert_eq!(evaluate("let x = 5;").unwrap(), None);
    assert_eq!(evaluate("").unwrap(), None);
}

#[test]
fn unbound_identifier_is_an_error() {
    assert_eq!(render("y"), "ERROR: identifier not found: y");
    assert_eq!(render("let x = y; 5"), "ERROR: identifier not found: y");
}

#[test]
fn return_ends_the_program() {
    assert_eq!(eval("return 10; 9;"), Value::Integer(10));
    assert_eq!(eval("9; return 2 * 5; 9;"), Value::Integer(10));
    assert_eq!(eval("if (true) { return 10; } 20;"), Value::Integer(10));
    assert_eq!(eval("if (10 > 1) { if (10 > 1) { return 10; } return 1; }"),
               Value::Integer(10));
}

#[test]
fn errors_stop_evaluation() {
    assert_eq!(render("if (10 > 1) { true + false; 5 }"),
               "ERROR: unknown operator: BOOLEAN + BOOLEAN");
    assert_eq!(render("-true + 5"), "ERROR: unknown operator: -BOOLEAN");
    assert_eq!(render("if (y) { 1 } else { 2 }"), "ERROR: identifier not found: y");
}

#[test]
fn returned_value_used_as_an_operand_stays_wrapped() {
    assert_eq!(render("1 + if (true) { return 5; }"),
               "ERROR: type mismatch: INTEGER + RETURN_VALUE");
}

#[test]
fn operand_without_a_value_is_an_error() {
    assert_eq!(render("1 + if (true) { let y = 2; }"),
               "ERROR: expression produced no value");

    let Value::Error(error) = eval("1 +\n  if (true) { let y = 2; }") else {
        panic!("expected an error value")
    };
    assert_eq!(error.line(), 2);
}

#[test]
fn renderings_parse_back_to_equal_values() {
    for n in [0, 1, -1, 42, -42, i64::MAX, i64::MIN + 1] {
        assert_eq!(eval(&Value::Integer(n).to_string()), Value::Integer(n));
    }
    for b in [true, false] {
        assert_eq!(eval(&Value::from(b).to_string()), Value::from(b));
    }
}

#[test]
fn syntax_errors_are_reported_with_lines() {
    assert_eq!(evaluate("let = 5").unwrap_err().line(), 1);
    assert_eq!(evaluate("1 +\n\n(2").unwrap_err().to_string(),
               "Error on line 3: Expected closing parenthesis ')' but none found.");
    assert_eq!(evaluate("x +").unwrap_err().to_string(),
               "Error on line 1: Unexpected end of input.");
    assert_eq!(evaluate("99999999999999999999").unwrap_err().to_string(),
               "Error on line 1: Literal is too large.");
    assert_eq!(evaluate("fn(x) { x }").unwrap_err().to_string(),
               "Error on line 1: Function literals are not supported.");
    assert_eq!(evaluate("let x = 1 2 )").unwrap_err().to_string(),
               "Error on line 1: Unexpected token: ).");
    assert_eq!(evaluate("if (true) 1").unwrap_err().to_string(),
               "Error on line 1: Expected '{', found '1'.");
}

fn is_too_deep(result: Result<Option<Value>, ParseError>) -> bool {
    matches!(result, Err(ParseError::NestingTooDeep { limit: MAX_NESTING_DEPTH, .. }))
}

#[test]
fn nesting_up_to_the_limit_is_accepted() {
    let negations = format!("{}1", "-".repeat(MAX_NESTING_DEPTH));
    assert_eq!(eval(&negations), Value::Integer(1));

    let parens = format!("{}7{}", "(".repeat(MAX_NESTING_DEPTH), ")".repeat(MAX_NESTING_DEPTH));
    assert_eq!(eval(&parens), Value::Integer(7));

    let sum = vec!["1"; MAX_NESTING_DEPTH].join(" + ");
    assert_eq!(eval(&sum), Value::Integer(256));
}

#[test]
fn nesting_past_the_limit_is_a_parse_error() {
    let over = MAX_NESTING_DEPTH + 1;

    assert!(is_too_deep(evaluate(&format!("{}1", "-".repeat(over)))));
    assert!(is_too_deep(evaluate(&format!("{}1{}", "(".repeat(over), ")".repeat(over)))));
    assert!(is_too_deep(evaluate(&vec!["1"; over + 1].join(" + "))));
    assert!(is_too_deep(evaluate(&format!("2{}", " ** 2".repeat(over)))));
    assert!(is_too_deep(evaluate(&format!("{}1{}", "if (true) { ".repeat(over), " }".repeat(over)))));
}

#[test]
fn nested_chains_count_towards_the_limit() {
    let mut source = "1".to_string();
    for _ in 0..20 {
        source = format!("({source}{})", " + 1".repeat(20));
    }
    assert!(is_too_deep(evaluate(&source)));
}

#[test]
fn huge_nesting_fails_without_overflowing_the_stack() {
    assert!(is_too_deep(evaluate(&format!("{}1", "-".repeat(100_000)))));
    assert!(is_too_deep(evaluate(&"(".repeat(100_000))));
    assert!(is_too_deep(evaluate(&vec!["1"; 100_000].join("+"))));
}
