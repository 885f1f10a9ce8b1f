#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while turning a line of input into a
/// postfix element sequence.
pub enum ParseError {
    /// Parenthesis nesting did not return to zero, or a `)` closed nothing.
    UnbalancedParentheses,
    /// An operator with no unary form (`*`, `/` or `^`) appeared where only
    /// a unary operator could stand.
    UnsupportedUnary {
        /// The operator character.
        symbol: char,
    },
    /// A symbol with no meaning in an expression was encountered.
    UnexpectedSymbol {
        /// The offending character.
        symbol: char,
    },
    /// The input contained no tokens at all.
    EmptyExpression,
    /// The target of an assignment is not a purely alphabetic identifier.
    InvalidIdentifier {
        /// The malformed assignment target as written.
        name: String,
    },
    /// The right-hand side of an assignment is not a valid expression.
    InvalidAssignment,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnbalancedParentheses => {
                write!(f, "Invalid expression: unbalanced parentheses.")
            },
            Self::UnsupportedUnary { symbol } => {
                write!(f, "Invalid expression: '{symbol}' needs a left-hand operand.")
            },
            Self::UnexpectedSymbol { symbol } => {
                write!(f, "Invalid expression: unexpected symbol '{symbol}'.")
            },
            Self::EmptyExpression => write!(f, "Invalid expression: nothing to evaluate."),
            Self::InvalidIdentifier { name } => write!(f, "Invalid identifier: '{name}'."),
            Self::InvalidAssignment => write!(f, "Invalid assignment."),
        }
    }
}

impl std::error::Error for ParseError {}
