use crate::{error::ParseError, interpreter::parser::ParseResult};

/// A single line of input, split into its statement form.
///
/// The split happens on raw text, before tokenization, so a malformed
/// assignment target can be reported exactly as the user wrote it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement<'a> {
    /// `name = expression` — evaluate the right side and store it.
    Assignment {
        /// The variable being assigned.
        name: &'a str,
        /// The raw text of the right-hand side.
        expression: &'a str,
    },
    /// A bare expression — evaluate it and report the value.
    Expression(&'a str),
}

/// Splits a line into an assignment or an expression statement.
///
/// A line containing `=` is an assignment: everything before the *first*
/// `=` is the target and must be a non-empty, purely alphabetic identifier.
/// Any further `=` stays in the right-hand side, where the expression parser
/// rejects it. A line without `=` is an expression statement.
///
/// # Parameters
/// - `line`: One trimmed, non-command line of input.
///
/// # Returns
/// The classified [`Statement`], borrowing from the line.
///
/// # Errors
/// [`ParseError::InvalidIdentifier`] if the assignment target is empty or
/// contains anything but ASCII letters.
pub fn parse_statement(line: &str) -> ParseResult<Statement<'_>> {
    match line.split_once('=') {
        Some((target, expression)) => {
            let name = target.trim();
            if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphabetic()) {
                return Err(ParseError::InvalidIdentifier { name: name.to_string() });
            }
            Ok(Statement::Assignment { name, expression })
        },
        None => Ok(Statement::Expression(line)),
    }
}
