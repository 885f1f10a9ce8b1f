/// The evaluator module executes postfix sequences and computes results.
///
/// The evaluator scans a postfix element sequence with an operand stack,
/// resolves variables against the session context, applies operators, and
/// produces a single arbitrary-precision result. It also defines the
/// [`evaluator::Context`] type that stores the session's variables.
///
/// # Responsibilities
/// - Evaluates postfix sequences, performing all supported operations.
/// - Resolves variable references lazily against the store.
/// - Reports runtime errors such as unknown variables, division by zero, or
///   operand stack underflow.
pub mod evaluator;
/// The lexer module tokenizes a line of input for further parsing.
///
/// The lexer (tokenizer) reads the raw text and produces a stream of tokens,
/// each corresponding to a meaningful unit: integer literals, identifiers,
/// or single-character symbols. This is the first stage of evaluation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens.
/// - Handles arbitrary-precision integer literals and identifiers.
/// - Passes unsupported characters through for the parser to reject.
pub mod lexer;
/// The parser module classifies tokens into expression elements.
///
/// The parser processes the token stream produced by the lexer and builds
/// the infix element sequence, resolving each operator symbol's unary or
/// binary meaning from its context and validating parenthesis balance.
///
/// # Responsibilities
/// - Maps integer and identifier tokens 1:1 to operand elements.
/// - Disambiguates unary versus binary operators by the preceding token.
/// - Rejects unsupported symbols and unbalanced parentheses.
pub mod parser;
/// The postfix module reorders infix elements into Reverse Polish order.
///
/// An implementation of the shunting-yard algorithm over an explicit
/// operator stack. The resulting order lets the evaluator run without any
/// precedence lookups of its own.
///
/// # Responsibilities
/// - Applies operator precedence and associativity.
/// - Eliminates parentheses, detecting unbalanced ones.
pub mod postfix;
/// The statement module splits a line into assignment or expression form.
///
/// # Responsibilities
/// - Detects `name = expression` lines and validates the target identifier.
/// - Leaves everything else to be evaluated as a plain expression.
pub mod statement;
