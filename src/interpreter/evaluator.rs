use std::collections::HashMap;

use num_bigint::BigInt;
use num_traits::{Pow, ToPrimitive, Zero};

use crate::{
    element::{BinaryOperator, Element, UnaryOperator},
    error::RuntimeError,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the variables of one interactive session.
///
/// The context is created once by the driver and passed by mutable borrow
/// into each statement evaluation — there is no ambient global state.
/// Variable names are case-sensitive; entries are created or overwritten by
/// assignment and never deleted for the lifetime of the session.
#[derive(Debug, Default)]
pub struct Context {
    variables: HashMap<String, BigInt>,
}

impl Context {
    /// Creates a new context with no variables assigned.
    #[must_use]
    pub fn new() -> Self {
        Self { variables: HashMap::new() }
    }

    /// Looks up the value of a variable, if it has one.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&BigInt> {
        self.variables.get(name)
    }

    /// Assigns a value to a variable, overwriting any previous value.
    pub fn set(&mut self, name: &str, value: BigInt) {
        self.variables.insert(name.to_string(), value);
    }
}

/// Evaluates a postfix element sequence to a single integer.
///
/// Left-to-right scan with an operand stack:
///
/// - A number pushes its value. A variable resolves against the context *at
///   this moment* — not at parse time — and pushes the stored value.
/// - A binary operator pops the right operand, then the left, applies
///   itself, and pushes the result.
/// - A unary operator pops one value and pushes the identity or negation.
///
/// A well-formed sequence consumes exactly the operands each operator needs
/// and leaves exactly one value, which is returned.
///
/// # Parameters
/// - `postfix`: The sequence produced by the shunting-yard conversion.
/// - `context`: The session's variable store, read-only here.
///
/// # Returns
/// The value of the expression.
///
/// # Errors
/// - [`RuntimeError::UnknownVariable`] if a variable was never assigned.
/// - [`RuntimeError::MissingOperand`] if the operand stack underflows.
/// - [`RuntimeError::TrailingOperands`] if more than one value remains.
/// - Arithmetic failures from [`apply_binary`].
pub fn evaluate(postfix: &[Element], context: &Context) -> EvalResult<BigInt> {
    let mut stack: Vec<BigInt> = Vec::new();

    for element in postfix {
        match element {
            Element::Number(value) => stack.push(value.clone()),
            Element::Variable(name) => {
                let value =
                    context.get(name)
                           .ok_or_else(|| RuntimeError::UnknownVariable { name: name.clone() })?;
                stack.push(value.clone());
            },
            Element::Binary(op) => {
                let rhs = stack.pop().ok_or(RuntimeError::MissingOperand)?;
                let lhs = stack.pop().ok_or(RuntimeError::MissingOperand)?;
                stack.push(apply_binary(*op, lhs, rhs)?);
            },
            Element::Unary(op) => {
                let value = stack.pop().ok_or(RuntimeError::MissingOperand)?;
                let result = match op {
                    UnaryOperator::Identity => value,
                    UnaryOperator::Negate => -value,
                };
                stack.push(result);
            },
            // The converter consumes every parenthesis.
            Element::LeftParen | Element::RightParen => {
                return Err(RuntimeError::MalformedSequence);
            },
        }
    }

    let result = stack.pop().ok_or(RuntimeError::MissingOperand)?;
    if !stack.is_empty() {
        return Err(RuntimeError::TrailingOperands { count: stack.len() + 1 });
    }

    Ok(result)
}

/// Applies a binary operator to its two operands.
///
/// Division is `BigInt` division and truncates toward zero, so `7 / 2 == 3`
/// and `-7 / 2 == -3`. Exponentiation requires the exponent to be
/// non-negative and representable as a `u32`; the base is unrestricted.
///
/// # Errors
/// - [`RuntimeError::DivisionByZero`] for `a / 0`.
/// - [`RuntimeError::ExponentOutOfRange`] for a negative or oversized
///   exponent.
fn apply_binary(op: BinaryOperator, lhs: BigInt, rhs: BigInt) -> EvalResult<BigInt> {
    match op {
        BinaryOperator::Add => Ok(lhs + rhs),
        BinaryOperator::Subtract => Ok(lhs - rhs),
        BinaryOperator::Multiply => Ok(lhs * rhs),
        BinaryOperator::Divide => {
            if rhs.is_zero() {
                return Err(RuntimeError::DivisionByZero);
            }
            Ok(lhs / rhs)
        },
        BinaryOperator::Power => {
            let exponent = rhs.to_u32().ok_or(RuntimeError::ExponentOutOfRange)?;
            Ok(Pow::pow(lhs, exponent))
        },
    }
}
