use crate::interpreter::operator::{Associativity, BinaryOperator};
use crate::interpreter::token::Token;
use log::{debug, trace};

/// Reorders infix tokens into postfix order using the shunting-yard algorithm.
///
/// Never fails: a `)` without a matching `(` is dropped, and any `(` left unmatched
/// is flushed to the output, where the evaluator rejects it.
pub(crate) fn infix_to_postfix(infix_tokens: &[Token]) -> Vec<Token> {
    let mut operators: Vec<Token> = Vec::new();
    let mut output: Vec<Token> = Vec::with_capacity(infix_tokens.len());

    for token in infix_tokens {
        trace!("converting {} with operator stack {:?}", token, operators);
        match token {
            Token::Literal(_) => output.push(token.clone()),
            Token::OpenParenthesis => operators.push(token.clone()),
            Token::CloseParenthesis => parse_closing_parenthesis_token(&mut operators, &mut output),
            Token::Plus | Token::Dash | Token::Asterisk | Token::ForwardSlash | Token::Caret => {
                parse_operator_token(&mut operators, &mut output, token)
            }
        }
    }

    transfer_leftover_operators(&mut operators, &mut output);

    output
}

fn transfer_leftover_operators(operators: &mut Vec<Token>, output: &mut Vec<Token>) {
    while let Some(operator) = operators.pop() {
        if operator == Token::OpenParenthesis {
            debug!("unmatched opening parenthesis left on the operator stack");
        }
        output.push(operator);
    }
}

fn parse_closing_parenthesis_token(operators: &mut Vec<Token>, output: &mut Vec<Token>) {
    while let Some(top_of_operator_stack) = operators.pop() {
        if !top_of_operator_stack.is_operator() {
            // Discard the open parenthesis.
            return;
        }
        output.push(top_of_operator_stack);
    }
    debug!("closing parenthesis without a matching opening parenthesis");
}

fn parse_operator_token(operators: &mut Vec<Token>, output: &mut Vec<Token>, token: &Token) {
    if let Some(operator) = token.as_operator() {
        while let Some(top_of_operator_stack) = operators.last() {
            if !yields_to(top_of_operator_stack, &operator) {
                break;
            }
            if let Some(other_operator_token) = operators.pop() {
                output.push(other_operator_token);
            }
        }
    }

    operators.push(token.clone());
}

/// Whether the token on top of the operator stack must be output before
/// `incoming` is pushed. An open parenthesis never yields.
fn yields_to(top_of_operator_stack: &Token, incoming: &BinaryOperator) -> bool {
    match top_of_operator_stack.as_operator() {
        None => false,
        Some(other_operator) => {
            other_operator.precedence_gt(incoming)
                || (other_operator.precedence_eq(incoming)
                    && incoming.associativity() == Associativity::Left)
        }
    }
}
