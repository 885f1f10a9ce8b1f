use crate::{element::Element, error::ParseError, interpreter::parser::ParseResult};

/// Converts an infix element sequence to postfix (Reverse Polish) order.
///
/// Classic shunting-yard over an explicit operator stack, scanning the
/// elements left to right:
///
/// - Operands go straight to the output.
/// - A binary operator first pops every stacked operator of
///   greater-or-equal precedence to the output, then pushes itself. Popping
///   on *equal* precedence is what makes same-rank operators chain
///   left-associatively: `8 - 3 - 2` comes out as `8 3 - 2 -`.
/// - A unary operator pops only operators of *strictly* greater precedence.
///   Since unary operators hold the highest rank, a run of them stays
///   stacked and unwinds right-to-left, so `--5` comes out as `5 neg neg`
///   rather than underflowing.
/// - `(` is pushed unconditionally; `)` pops operators to the output until
///   the matching `(` turns up, and both parentheses are discarded.
///
/// At the end of input the stack is drained to the output; a parenthesis
/// still on the stack means the line never closed it.
///
/// # Parameters
/// - `elements`: The infix sequence produced by the parser.
///
/// # Returns
/// The same elements in postfix order, parentheses removed.
///
/// # Errors
/// [`ParseError::UnbalancedParentheses`] if a `)` finds no matching `(` or
/// a `(` is never closed.
pub fn to_postfix(elements: Vec<Element>) -> ParseResult<Vec<Element>> {
    let mut output = Vec::with_capacity(elements.len());
    let mut stack: Vec<Element> = Vec::new();

    for element in elements {
        match &element {
            Element::Number(_) | Element::Variable(_) => output.push(element),
            Element::Binary(op) => {
                let precedence = op.precedence();
                pop_while(&mut stack, &mut output, |p| p >= precedence);
                stack.push(element);
            },
            Element::Unary(op) => {
                let precedence = op.precedence();
                pop_while(&mut stack, &mut output, |p| p > precedence);
                stack.push(element);
            },
            Element::LeftParen => stack.push(element),
            Element::RightParen => loop {
                match stack.pop() {
                    Some(Element::LeftParen) => break,
                    Some(op) => output.push(op),
                    None => return Err(ParseError::UnbalancedParentheses),
                }
            },
        }
    }

    while let Some(top) = stack.pop() {
        if top == Element::LeftParen {
            return Err(ParseError::UnbalancedParentheses);
        }
        output.push(top);
    }

    Ok(output)
}

/// Moves operators from the stack to the output for as long as the top of
/// the stack is an operator whose precedence satisfies `condition`.
///
/// Parentheses report no precedence and therefore always stop the unwind.
fn pop_while(stack: &mut Vec<Element>,
             output: &mut Vec<Element>,
             condition: impl Fn(u8) -> bool) {
    while stack.last()
               .and_then(Element::precedence)
               .is_some_and(&condition)
    {
        if let Some(top) = stack.pop() {
            output.push(top);
        }
    }
}
