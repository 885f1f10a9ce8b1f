//! # bigcalc
//!
//! bigcalc is an interactive arbitrary-precision integer calculator written
//! in Rust. It reads a line of text, interprets it as either a variable
//! assignment or an arithmetic expression, and either stores a value or
//! returns a result. Expressions flow through a four-stage pipeline:
//! tokenizer → element parser → shunting-yard postfix conversion → postfix
//! evaluation over [`num_bigint::BigInt`] values.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use num_bigint::BigInt;

use crate::{
    error::{CalcError, ParseError},
    interpreter::{
        evaluator::{Context, evaluate},
        lexer::tokenize,
        parser::parse,
        postfix::to_postfix,
        statement::{Statement, parse_statement},
    },
};

/// Defines the structure of classified expressions.
///
/// This module declares the `Element` enum and the operator kinds that
/// represent an expression as an ordered sequence, in both infix and postfix
/// form, together with the fixed precedence table.
///
/// # Responsibilities
/// - Defines operand, operator, and parenthesis element variants.
/// - Fixes each operator's precedence and arity.
pub mod element;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing, parsing,
/// or evaluating a statement. Every failure is local to one statement and
/// recoverable; the interactive loop reports the message and continues.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (parser, evaluator).
/// - Wraps both families in a single [`error::CalcError`] for callers.
pub mod error;
/// Orchestrates the expression pipeline.
///
/// This module ties together lexing, element classification, postfix
/// conversion, and evaluation, and defines the session context that holds
/// variable state between statements.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, converter, evaluator.
/// - Manages the flow of data and errors between stages.
pub mod interpreter;

/// Evaluates a single arithmetic expression against a session context.
///
/// Runs the full pipeline: the text is tokenized, classified into infix
/// elements, converted to postfix order, and evaluated with an operand
/// stack. The context is only read; assignments are handled by
/// [`eval_line`].
///
/// # Parameters
/// - `text`: The expression to evaluate.
/// - `context`: The session's variable store.
///
/// # Returns
/// The value of the expression.
///
/// # Errors
/// A [`CalcError`] describing the first stage that failed.
///
/// # Examples
/// ```
/// use bigcalc::{evaluate_expression, interpreter::evaluator::Context};
///
/// let context = Context::new();
/// let value = evaluate_expression("2 + 3 * 4", &context).unwrap();
/// assert_eq!(value.to_string(), "14");
/// ```
pub fn evaluate_expression(text: &str, context: &Context) -> Result<BigInt, CalcError> {
    let tokens = tokenize(text)?;
    let elements = parse(&tokens)?;
    let postfix = to_postfix(elements)?;
    let value = evaluate(&postfix, context)?;
    Ok(value)
}

/// Evaluates one line of input as a statement.
///
/// A line containing `=` is an assignment: the right-hand side is evaluated
/// through the same pipeline and stored under the target name, overwriting
/// any previous value, and `None` is returned. Any other line is an
/// expression whose value is returned as `Some`.
///
/// # Parameters
/// - `line`: One trimmed line of input (commands like `/exit` are handled by
///   the caller).
/// - `context`: The session's variable store, written to by assignments.
///
/// # Returns
/// `Some(value)` for expression statements, `None` for assignments.
///
/// # Errors
/// A [`CalcError`] if the statement is malformed or fails to evaluate. A
/// right-hand side that does not parse is reported as an invalid
/// assignment; runtime failures such as an unknown variable keep their own
/// kind.
///
/// # Examples
/// ```
/// use bigcalc::{eval_line, interpreter::evaluator::Context};
///
/// let mut context = Context::new();
/// assert!(eval_line("n = 5", &mut context).unwrap().is_none());
///
/// let result = eval_line("n + 2", &mut context).unwrap();
/// assert_eq!(result.unwrap().to_string(), "7");
/// ```
pub fn eval_line(line: &str, context: &mut Context) -> Result<Option<BigInt>, CalcError> {
    match parse_statement(line)? {
        Statement::Assignment { name, expression } => {
            let value = evaluate_expression(expression, context).map_err(|e| match e {
                            CalcError::Parse(_) => ParseError::InvalidAssignment.into(),
                            runtime => runtime,
                        })?;
            context.set(name, value);
            Ok(None)
        },
        Statement::Expression(text) => evaluate_expression(text, context).map(Some),
    }
}
