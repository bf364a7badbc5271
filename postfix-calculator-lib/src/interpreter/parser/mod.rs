mod infix_converter;

use crate::interpreter::parser::infix_converter::infix_to_postfix;
use crate::interpreter::token::Token;

/// Reorders the given infix tokens into postfix (Reverse Polish) order,
/// which can be evaluated left-to-right without any precedence rules.
///
/// # Arguments
///
/// * `infix_tokens`: The tokens to parse, in infix format.
///
/// returns: The same tokens in postfix order, with matched parentheses removed.
///
/// # Examples
///
/// ```
/// use postfix_calculator::interpreter::parser::parse;
/// use postfix_calculator::interpreter::token::Token;
///
/// let infix_tokens = vec![
///     Token::new_literal("2"),
///     Token::Caret,
///     Token::new_literal("3"),
/// ];
/// let postfix_tokens = parse(&infix_tokens);
/// assert_eq!(
///     postfix_tokens,
///     vec![Token::new_literal("2"), Token::new_literal("3"), Token::Caret]
/// );
/// ```
pub fn parse(infix_tokens: &[Token]) -> Vec<Token> {
    infix_to_postfix(infix_tokens)
}
