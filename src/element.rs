use num_bigint::BigInt;

/// A binary (two-operand) arithmetic operator.
///
/// Binary operators carry a fixed precedence used by the shunting-yard
/// conversion: `+` and `-` bind weakest, `*` and `/` bind tighter, and `^`
/// binds tightest of the binary operators. All binary operators chain
/// left-associatively at equal precedence, so `8 - 3 - 2` means
/// `(8 - 3) - 2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition, `a + b`.
    Add,
    /// Subtraction, `a - b`.
    Subtract,
    /// Multiplication, `a * b`.
    Multiply,
    /// Integer division truncating toward zero, `a / b`.
    Divide,
    /// Exponentiation, `a ^ b`.
    Power,
}

impl BinaryOperator {
    /// Returns the binding strength of the operator.
    ///
    /// Higher values bind tighter. The ranks are total and fixed for the
    /// lifetime of the process; operators that share a rank are intentionally
    /// equal and chain left-associatively.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Subtract => 1,
            Self::Multiply | Self::Divide => 2,
            Self::Power => 3,
        }
    }

    /// Returns the source character the operator was written as.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
            Self::Power => '^',
        }
    }
}

/// A unary (single-operand) prefix operator.
///
/// Only `+` and `-` have a unary form. Unary operators outrank every binary
/// operator, so each one binds to the single operand that follows it:
/// `2 * -3` multiplies by the negation of `3`, and `5 - -2` subtracts a
/// negated `2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Prefix `+`; returns its operand unchanged.
    Identity,
    /// Prefix `-`; negates its operand.
    Negate,
}

impl UnaryOperator {
    /// Returns the binding strength of the operator.
    ///
    /// Strictly higher than every [`BinaryOperator`] rank, so a pending unary
    /// operator is popped by any later binary operator and a chain of unary
    /// operators nests right-to-left (`--5` negates twice).
    #[must_use]
    pub const fn precedence(self) -> u8 {
        4
    }
}

/// A semantically classified unit of an expression.
///
/// Elements are derived from tokens by the parser, which resolves the
/// context-sensitive cases (is this `-` a subtraction or a negation?) and
/// validates parenthesis balance. The same type is used for both the infix
/// and the postfix ordering of an expression; parentheses only ever appear
/// in the infix form.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    /// An integer literal of arbitrary magnitude.
    Number(BigInt),
    /// A variable reference, resolved lazily at evaluation time.
    Variable(String),
    /// A two-operand operator.
    Binary(BinaryOperator),
    /// A single-operand prefix operator.
    Unary(UnaryOperator),
    /// An opening `(`.
    LeftParen,
    /// A closing `)`.
    RightParen,
}

impl Element {
    /// Returns the precedence of an operator element, or `None` for operands
    /// and parentheses.
    ///
    /// The shunting-yard loop uses this to decide how far to unwind its
    /// operator stack; a `None` (in practice a `LeftParen`) stops the unwind.
    #[must_use]
    pub const fn precedence(&self) -> Option<u8> {
        match self {
            Self::Binary(op) => Some(op.precedence()),
            Self::Unary(op) => Some(op.precedence()),
            _ => None,
        }
    }
}
