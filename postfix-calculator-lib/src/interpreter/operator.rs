use crate::interpreter::token::Token;
use std::fmt;
use std::fmt::Formatter;

/// A binary mathematical operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Exponentiate,
}

impl BinaryOperator {
    pub fn token(&self) -> Token {
        match self {
            BinaryOperator::Add => Token::Plus,
            BinaryOperator::Subtract => Token::Dash,
            BinaryOperator::Multiply => Token::Asterisk,
            BinaryOperator::Divide => Token::ForwardSlash,
            BinaryOperator::Exponentiate => Token::Caret,
        }
    }

    /// Every operator groups to the left, exponentiation included:
    /// `2^3^2` is `(2^3)^2`.
    pub fn associativity(&self) -> Associativity {
        Associativity::Left
    }

    pub(crate) fn precedence(&self) -> i8 {
        match self {
            BinaryOperator::Add | BinaryOperator::Subtract => 1,
            BinaryOperator::Multiply | BinaryOperator::Divide => 2,
            BinaryOperator::Exponentiate => 3,
        }
    }

    pub(crate) fn precedence_gt(&self, other: &Self) -> bool {
        self.precedence().gt(&other.precedence())
    }

    pub(crate) fn precedence_eq(&self, other: &Self) -> bool {
        self.precedence().eq(&other.precedence())
    }

    /// Applies the operator to its operands.
    ///
    /// Follows IEEE 754 semantics, so division by zero and invalid powers
    /// produce infinities or NaN instead of failing.
    pub fn evaluate(&self, left: f64, right: f64) -> f64 {
        match self {
            BinaryOperator::Add => left + right,
            BinaryOperator::Subtract => left - right,
            BinaryOperator::Multiply => left * right,
            BinaryOperator::Divide => left / right,
            BinaryOperator::Exponentiate => f64::powf(left, right),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Associativity {
    Left,
    Right,
}

/// Looks up the rank of a symbol in the precedence table.
///
/// Total over all text: `^` is 3, `*` and `/` are 2, `+` and `-` are 1, `(` is 0
/// and everything else is -1.
///
/// # Examples
///
/// ```
/// use postfix_calculator::interpreter::operator::priority;
///
/// assert_eq!(priority("^"), 3);
/// assert_eq!(priority("("), 0);
/// assert_eq!(priority("hello"), -1);
/// ```
pub fn priority(symbol: &str) -> i8 {
    symbol.parse::<Token>().map_or(-1, |token| token.priority())
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}
