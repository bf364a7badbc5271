pub mod error;
pub mod evaluator;
pub mod expression;
pub mod lexer;
pub mod operator;
pub mod parser;
pub mod token;

use crate::interpreter::expression::Expression;
use crate::interpreter::token::Token;
use anyhow::Result;
use string_builder::Builder;

/// Evaluates the given arithmetic expression.
///
/// # Arguments
///
/// * `expression`: A text expression in infix format.
///
/// returns: The expression with its infix tokens, postfix tokens and numeric result.
///
/// # Examples
///
/// ```
/// use postfix_calculator::interpreter::evaluate;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let expression = evaluate("3+4*2")?;
/// assert_eq!(expression.infix_string(), "3 + 4 * 2 ");
/// assert_eq!(expression.postfix_string(), "3 4 2 * + ");
/// assert_eq!(expression.result(), 11.0);
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn evaluate(expression: &str) -> Result<Expression> {
    Expression::new(expression)
}

/// Prints the given tokens with a space after each one.
///
/// # Arguments
///
/// * `tokens`: The tokens to print.
///
/// returns: A text-version of the given tokens.
///
/// # Examples
///
/// ```
/// use postfix_calculator::interpreter::tokens_to_string;
/// use postfix_calculator::interpreter::token::Token;
///
/// let tokens = vec![
///     Token::new_literal("2"),
///     Token::new_literal("3"),
///     Token::Caret,
/// ];
/// assert_eq!(tokens_to_string(&tokens), "2 3 ^ ");
/// ```
pub fn tokens_to_string(tokens: &[Token]) -> String {
    let mut builder = Builder::new(tokens.len() * 2);

    for token in tokens {
        builder.append(token.to_string());
        builder.append(" ");
    }

    // Only fails on invalid UTF-8, and every token is built from a `&str`.
    builder.string().unwrap_or_default()
}
