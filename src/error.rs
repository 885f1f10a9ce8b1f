/// Parsing errors.
///
/// Defines all error types that can occur before evaluation: unbalanced
/// parentheses, operators in impossible positions, unsupported symbols, and
/// malformed assignment statements.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while evaluating a postfix
/// sequence: unknown variables, operand stack underflow or leftovers,
/// division by zero, and out-of-range exponents.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Any error a full statement evaluation can produce.
///
/// The pipeline stages each report their own error family; this wraps both
/// so a single statement entry point can return one type. All variants are
/// per-statement and recoverable — the interactive loop prints the message
/// and keeps reading.
pub enum CalcError {
    /// The statement could not be turned into a postfix sequence.
    Parse(ParseError),
    /// The postfix sequence could not be evaluated.
    Eval(RuntimeError),
}

impl std::fmt::Display for CalcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Eval(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for CalcError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Eval(e) => Some(e),
        }
    }
}

impl From<ParseError> for CalcError {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

impl From<RuntimeError> for CalcError {
    fn from(value: RuntimeError) -> Self {
        Self::Eval(value)
    }
}
