use bigcalc::{
    error::{CalcError, ParseError, RuntimeError},
    eval_line, evaluate_expression,
    interpreter::evaluator::Context,
};
use num_bigint::BigInt;

fn eval(src: &str) -> Result<BigInt, CalcError> {
    evaluate_expression(src, &Context::new())
}

fn assert_value(src: &str, expected: &str) {
    match eval(src) {
        Ok(value) => assert_eq!(value.to_string(), expected, "wrong value for '{src}'"),
        Err(e) => panic!("'{src}' failed: {e}"),
    }
}

fn assert_parse_error(src: &str, expected: &ParseError) {
    match eval(src) {
        Err(CalcError::Parse(e)) => assert_eq!(&e, expected, "wrong error for '{src}'"),
        other => panic!("'{src}' should fail parsing, got {other:?}"),
    }
}

fn assert_runtime_error(src: &str, expected: &RuntimeError) {
    match eval(src) {
        Err(CalcError::Eval(e)) => assert_eq!(&e, expected, "wrong error for '{src}'"),
        other => panic!("'{src}' should fail evaluating, got {other:?}"),
    }
}

#[test]
fn integer_literals_evaluate_to_themselves() {
    assert_value("0", "0");
    assert_value("5", "5");
    assert_value("  42  ", "42");
    assert_value("112234567890123456789012345678901234567890",
                 "112234567890123456789012345678901234567890");
}

#[test]
fn equal_precedence_chains_left_to_right() {
    assert_value("8 - 3 - 2", "3");
    assert_value("10 - 4 - 3 - 2", "1");
    assert_value("100 / 10 / 5", "2");
    assert_value("2 ^ 3 ^ 2", "64");
}

#[test]
fn precedence_orders_mixed_operators() {
    assert_value("2 + 3 * 4", "14");
    assert_value("(2 + 3) * 4", "20");
    assert_value("2 + 10 / 2", "7");
    assert_value("1 + 2 * 3 ^ 2", "19");
    assert_value("3 + 8 * ((4 + 3) * 2 + 1) - 6 / (2 + 1)", "121");
}

#[test]
fn unary_operators_bind_to_the_next_operand() {
    assert_value("-5", "-5");
    assert_value("+5", "5");
    assert_value("--5", "5");
    assert_value("---5", "-5");
    assert_value("+-5", "-5");
    assert_value("5 - -2", "7");
    assert_value("2 * -3", "-6");
    assert_value("2 * +3", "6");
    // Unary minus outranks `^`, so the base is negated first.
    assert_value("-5 ^ 2", "25");
}

#[test]
fn power_handles_edge_exponents() {
    assert_value("2 ^ 10", "1024");
    assert_value("2 ^ 0", "1");
    assert_value("0 ^ 0", "1");
    assert_value("(-2) ^ 3", "-8");
    assert_value("2 ^ 200",
                 "1606938044258990275541962092341162602522202993782792835301376");
}

#[test]
fn division_truncates_toward_zero() {
    assert_value("7 / 2", "3");
    assert_value("-7 / 2", "-3");
    assert_value("7 / -2", "-3");
    assert_value("-7 / -2", "3");
}

#[test]
fn arithmetic_survives_beyond_machine_width() {
    assert_value("112234567890123456789012345678901234567890 + 1",
                 "112234567890123456789012345678901234567891");
    assert_value("10 ^ 40 / 10 ^ 39", "10");
}

#[test]
fn unbalanced_parentheses_are_rejected() {
    assert_parse_error("(1 + 2", &ParseError::UnbalancedParentheses);
    assert_parse_error("1 + 2)", &ParseError::UnbalancedParentheses);
    assert_parse_error(")(", &ParseError::UnbalancedParentheses);
    assert_parse_error("((3 + 4) * 2", &ParseError::UnbalancedParentheses);
}

#[test]
fn operators_without_a_unary_form_are_rejected() {
    assert_parse_error("* 4", &ParseError::UnsupportedUnary { symbol: '*' });
    assert_parse_error("/ 4", &ParseError::UnsupportedUnary { symbol: '/' });
    assert_parse_error("2 + * 3", &ParseError::UnsupportedUnary { symbol: '*' });
    assert_parse_error("(^ 2)", &ParseError::UnsupportedUnary { symbol: '^' });
}

#[test]
fn unsupported_symbols_are_rejected() {
    assert_parse_error("8 ? 2", &ParseError::UnexpectedSymbol { symbol: '?' });
    assert_parse_error("3 & 4", &ParseError::UnexpectedSymbol { symbol: '&' });
    assert_parse_error("", &ParseError::EmptyExpression);
    assert_parse_error("   ", &ParseError::EmptyExpression);
}

#[test]
fn evaluation_detects_malformed_stacks() {
    assert_runtime_error("8 +", &RuntimeError::MissingOperand);
    assert_runtime_error("2 3", &RuntimeError::TrailingOperands { count: 2 });
    assert_runtime_error("()", &RuntimeError::MissingOperand);
}

#[test]
fn arithmetic_failures_are_reported() {
    assert_runtime_error("1 / 0", &RuntimeError::DivisionByZero);
    assert_runtime_error("5 / (3 - 3)", &RuntimeError::DivisionByZero);
    assert_runtime_error("2 ^ -1", &RuntimeError::ExponentOutOfRange);
}

#[test]
fn unknown_variables_fail_at_evaluation_time() {
    assert_runtime_error("x + 1",
                         &RuntimeError::UnknownVariable { name: "x".to_string() });

    // The store is consulted lazily, so assigning afterwards fixes it.
    let mut context = Context::new();
    assert!(evaluate_expression("x + 1", &context).is_err());
    context.set("x", BigInt::from(4));
    assert_eq!(evaluate_expression("x + 1", &context).unwrap(), BigInt::from(5));
}

#[test]
fn assignments_store_and_overwrite() {
    let mut context = Context::new();

    assert_eq!(eval_line("x = 5", &mut context).unwrap(), None);
    assert_eq!(eval_line("x", &mut context).unwrap(), Some(BigInt::from(5)));

    assert_eq!(eval_line("x = 7", &mut context).unwrap(), None);
    assert_eq!(eval_line("x", &mut context).unwrap(), Some(BigInt::from(7)));

    assert_eq!(eval_line("y = x + 3", &mut context).unwrap(), None);
    assert_eq!(eval_line("y * 2", &mut context).unwrap(), Some(BigInt::from(20)));
}

#[test]
fn variable_names_are_case_sensitive() {
    let mut context = Context::new();

    eval_line("n = 1", &mut context).unwrap();
    let err = eval_line("N", &mut context).unwrap_err();
    assert_eq!(err,
               CalcError::Eval(RuntimeError::UnknownVariable { name: "N".to_string() }));
}

#[test]
fn malformed_assignment_targets_are_invalid_identifiers() {
    let mut context = Context::new();

    for line in ["a2a = 5", "a1 = 8", "= 5", "x y = 3"] {
        let err = eval_line(line, &mut context).unwrap_err();
        assert!(matches!(err, CalcError::Parse(ParseError::InvalidIdentifier { .. })),
                "wrong error for '{line}': {err:?}");
    }
}

#[test]
fn malformed_right_hand_sides_are_invalid_assignments() {
    let mut context = Context::new();

    for line in ["a = 7 = 8", "a = 2 * (1", "a ="] {
        let err = eval_line(line, &mut context).unwrap_err();
        assert_eq!(err,
                   CalcError::Parse(ParseError::InvalidAssignment),
                   "wrong error for '{line}'");
    }

    // Runtime failures on the right-hand side keep their own kind.
    let err = eval_line("a = b", &mut context).unwrap_err();
    assert_eq!(err,
               CalcError::Eval(RuntimeError::UnknownVariable { name: "b".to_string() }));
}

#[test]
fn expression_statements_return_their_value() {
    let mut context = Context::new();

    let result = eval_line("4 + 6 / 3", &mut context).unwrap();
    assert_eq!(result, Some(BigInt::from(6)));
}
