#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating a postfix sequence.
pub enum RuntimeError {
    /// Tried to read a variable that was never assigned.
    UnknownVariable {
        /// The name of the variable.
        name: String,
    },
    /// An operator found too few operands on the stack.
    MissingOperand,
    /// More than one value remained on the stack after evaluation.
    TrailingOperands {
        /// How many values were left over.
        count: usize,
    },
    /// Attempted division by zero.
    DivisionByZero,
    /// The exponent of `^` was negative or too large to apply.
    ExponentOutOfRange,
    /// A parenthesis survived into the postfix sequence.
    MalformedSequence,
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name } => write!(f, "Unknown variable '{name}'."),
            Self::MissingOperand => {
                write!(f, "Invalid expression: an operator is missing an operand.")
            },
            Self::TrailingOperands { count } => {
                write!(f, "Invalid expression: {count} values left without an operator.")
            },
            Self::DivisionByZero => write!(f, "Division by zero."),
            Self::ExponentOutOfRange => {
                write!(f, "Exponent must be a non-negative integer that fits 32 bits.")
            },
            Self::MalformedSequence => write!(f, "Invalid expression: malformed sequence."),
        }
    }
}

impl std::error::Error for RuntimeError {}
