use logos::Logos;
use num_bigint::BigInt;

use crate::error::ParseError;

/// Represents a lexical token in a line of input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the calculator.
#[derive(Logos, Debug, Clone, PartialEq)]
pub enum Token {
    /// Integer literal tokens of arbitrary magnitude, such as `42`.
    /// Literals are unsigned; a leading sign is a separate unary operator.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(BigInt),
    /// Identifier tokens; variable names such as `x` or `count`.
    /// Digits are not permitted inside identifiers.
    #[regex(r"[a-zA-Z]+", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `=`
    #[token("=")]
    Equals,
    /// Any other non-whitespace character. The lexer passes these through
    /// unchanged; the parser rejects them.
    #[regex(r".", parse_unknown, priority = 1)]
    Unknown(char),
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}

/// Scans a full line of input into its token sequence.
///
/// One pass, left to right. Whitespace is skipped entirely, digit runs form
/// a single [`Token::Integer`], alphabetic runs form a single
/// [`Token::Identifier`], and every other non-whitespace character becomes
/// its own symbol token. Malformed input is never rejected here — anything
/// unsupported survives as [`Token::Unknown`] for the parser to refuse.
///
/// # Parameters
/// - `text`: The raw line to scan.
///
/// # Returns
/// The ordered token sequence.
///
/// # Errors
/// Only if the lexer itself cannot produce a token, which the catch-all rule
/// prevents for any valid UTF-8 input.
pub fn tokenize(text: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(text);

    while let Some(token) = lexer.next() {
        match token {
            Ok(tok) => tokens.push(tok),
            Err(()) => {
                let symbol = lexer.slice().chars().next().unwrap_or(' ');
                return Err(ParseError::UnexpectedSymbol { symbol });
            },
        }
    }

    Ok(tokens)
}

/// Parses an integer literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(BigInt)`: The parsed value; a digit run always parses.
/// - `None`: Never, given the matched pattern.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<BigInt> {
    lex.slice().parse().ok()
}

/// Extracts the single character of an unrecognized token slice.
fn parse_unknown(lex: &logos::Lexer<Token>) -> Option<char> {
    lex.slice().chars().next()
}
