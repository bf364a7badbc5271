use crate::interpreter::error::EvaluationError;
use crate::interpreter::token::Token;
use log::{trace, warn};

/// Computes the value of an expression given in postfix order.
///
/// Values are pushed onto a stack, and every other token pops its right operand
/// followed by its left operand. The value on top of the stack when the tokens run
/// out is the result; anything below it is ignored.
///
/// # Arguments
///
/// * `postfix_tokens`: The tokens to evaluate, in postfix format.
///
/// returns: The numeric value of the expression.
///
/// # Examples
///
/// ```
/// use postfix_calculator::interpreter::evaluator::evaluate_postfix;
/// use postfix_calculator::interpreter::token::Token;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let postfix_tokens = vec![
///     Token::new_literal("6"),
///     Token::new_literal("2"),
///     Token::ForwardSlash,
/// ];
/// assert_eq!(evaluate_postfix(&postfix_tokens)?, 3.0);
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn evaluate_postfix(postfix_tokens: &[Token]) -> Result<f64, EvaluationError> {
    let mut values: Vec<f64> = Vec::with_capacity(postfix_tokens.len());

    for token in postfix_tokens {
        trace!("evaluating {} with value stack {:?}", token, values);
        match token {
            Token::Literal(text) => values.push(parse_literal(text)?),
            symbol => {
                let right_operand = pop_operand(&mut values, symbol)?;
                let left_operand = pop_operand(&mut values, symbol)?;
                let operator = symbol.as_operator().ok_or_else(|| {
                    EvaluationError::UnexpectedSymbol {
                        symbol: symbol.to_string(),
                    }
                })?;
                values.push(operator.evaluate(left_operand, right_operand));
            }
        }
    }

    let result = values.pop().ok_or(EvaluationError::EmptyStack)?;
    if !values.is_empty() {
        warn!("ignoring {} unused value(s) below the result", values.len());
    }
    Ok(result)
}

fn pop_operand(values: &mut Vec<f64>, symbol: &Token) -> Result<f64, EvaluationError> {
    values.pop().ok_or_else(|| EvaluationError::StackUnderflow {
        symbol: symbol.to_string(),
    })
}

fn parse_literal(text: &str) -> Result<f64, EvaluationError> {
    let invalid = || EvaluationError::InvalidNumber {
        literal: text.to_string(),
    };
    if !is_numeric_literal(text) {
        return Err(invalid());
    }
    text.parse::<f64>().map_err(|_| invalid())
}

/// Matches `-?digits(.digits)?`.
fn is_numeric_literal(text: &str) -> bool {
    let unsigned = text.strip_prefix('-').unwrap_or(text);
    let (whole, fraction) = match unsigned.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (unsigned, None),
    };
    let is_digits = |part: &str| !part.is_empty() && part.chars().all(|c| c.is_ascii_digit());
    is_digits(whole) && fraction.map_or(true, is_digits)
}
