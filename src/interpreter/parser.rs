use crate::{
    element::{BinaryOperator, Element, UnaryOperator},
    error::ParseError,
    interpreter::lexer::Token,
};

/// Result type used by the parsing stages.
pub type ParseResult<T> = Result<T, ParseError>;

/// Classifies a token sequence into an infix element sequence.
///
/// Each token maps to exactly one element. Integer and identifier tokens
/// become [`Element::Number`] and [`Element::Variable`] as-is — variables are
/// not checked against the store here; unresolved lookups are deferred to
/// evaluation. Operator symbols are disambiguated by context (see
/// [`classify_operator`]), and parenthesis nesting is validated: every `)`
/// must close an earlier `(` and the nesting count must return to zero by
/// the end of the line.
///
/// # Parameters
/// - `tokens`: The token sequence of one statement.
///
/// # Returns
/// The ordered infix element sequence.
///
/// # Errors
/// - [`ParseError::EmptyExpression`] if there are no tokens.
/// - [`ParseError::UnbalancedParentheses`] if nesting ends non-zero or goes
///   negative.
/// - [`ParseError::UnsupportedUnary`] if `*`, `/` or `^` stands in unary
///   position.
/// - [`ParseError::UnexpectedSymbol`] for `=` or any unsupported character.
pub fn parse(tokens: &[Token]) -> ParseResult<Vec<Element>> {
    if tokens.is_empty() {
        return Err(ParseError::EmptyExpression);
    }

    let mut elements = Vec::with_capacity(tokens.len());
    let mut nesting = 0usize;
    let mut previous: Option<&Token> = None;

    for token in tokens {
        let element = match token {
            Token::Integer(value) => Element::Number(value.clone()),
            Token::Identifier(name) => Element::Variable(name.clone()),
            Token::LParen => {
                nesting += 1;
                Element::LeftParen
            },
            Token::RParen => {
                nesting = nesting.checked_sub(1)
                                 .ok_or(ParseError::UnbalancedParentheses)?;
                Element::RightParen
            },
            Token::Plus | Token::Minus | Token::Star | Token::Slash | Token::Caret => {
                classify_operator(token, previous)?
            },
            Token::Equals => return Err(ParseError::UnexpectedSymbol { symbol: '=' }),
            Token::Unknown(symbol) => {
                return Err(ParseError::UnexpectedSymbol { symbol: *symbol });
            },
            // The lexer skips this variant; it never reaches a token stream.
            Token::Ignored => continue,
        };
        elements.push(element);
        previous = Some(token);
    }

    if nesting != 0 {
        return Err(ParseError::UnbalancedParentheses);
    }

    Ok(elements)
}

/// Resolves whether an operator symbol is binary or unary.
///
/// The rule: a symbol is **binary** if and only if the immediately preceding
/// token was an integer, an identifier, or a `)` — i.e. something a left
/// operand can end with. In every other position (start of input, after
/// another operator, after `(`) the symbol is **unary**; only `+` and `-`
/// have a unary form.
///
/// # Parameters
/// - `token`: The operator symbol to classify.
/// - `previous`: The token immediately before it, if any.
///
/// # Returns
/// The classified [`Element::Binary`] or [`Element::Unary`].
///
/// # Errors
/// [`ParseError::UnsupportedUnary`] if `*`, `/` or `^` ends up in unary
/// position.
fn classify_operator(token: &Token, previous: Option<&Token>) -> ParseResult<Element> {
    let binary = matches!(previous,
                          Some(Token::Integer(_) | Token::Identifier(_) | Token::RParen));

    if binary {
        let op = match token {
            Token::Plus => BinaryOperator::Add,
            Token::Minus => BinaryOperator::Subtract,
            Token::Star => BinaryOperator::Multiply,
            Token::Slash => BinaryOperator::Divide,
            _ => BinaryOperator::Power,
        };
        Ok(Element::Binary(op))
    } else {
        match token {
            Token::Plus => Ok(Element::Unary(UnaryOperator::Identity)),
            Token::Minus => Ok(Element::Unary(UnaryOperator::Negate)),
            Token::Star => Err(ParseError::UnsupportedUnary { symbol: '*' }),
            Token::Slash => Err(ParseError::UnsupportedUnary { symbol: '/' }),
            _ => Err(ParseError::UnsupportedUnary { symbol: '^' }),
        }
    }
}
