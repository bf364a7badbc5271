use crate::interpreter::operator::BinaryOperator;
use std::fmt;
use std::fmt::Formatter;
use std::str;

/// A discrete part of an expression
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Token {
    /// The verbatim text of a numeric literal, e.g. `3.14`.
    /// Never carries a sign, and is not validated until evaluation.
    Literal(String),
    Plus,
    Dash,
    Asterisk,
    ForwardSlash,
    Caret,
    OpenParenthesis,
    CloseParenthesis,
}

pub static SYMBOLS: [char; 7] = ['(', ')', '+', '-', '*', '/', '^'];

impl Token {
    pub fn new_literal(text: impl Into<String>) -> Token {
        Token::Literal(text.into())
    }

    /// Maps a single symbol character to its token, if it is one of [`SYMBOLS`].
    pub fn from_symbol(symbol: char) -> Option<Token> {
        match symbol {
            '(' => Some(Token::OpenParenthesis),
            ')' => Some(Token::CloseParenthesis),
            '+' => Some(Token::Plus),
            '-' => Some(Token::Dash),
            '*' => Some(Token::Asterisk),
            '/' => Some(Token::ForwardSlash),
            '^' => Some(Token::Caret),
            _ => None,
        }
    }

    /// Whether the token is one of the five binary operator symbols.
    pub fn is_operator(&self) -> bool {
        self.as_operator().is_some()
    }

    pub fn as_operator(&self) -> Option<BinaryOperator> {
        match self {
            Token::Plus => Some(BinaryOperator::Add),
            Token::Dash => Some(BinaryOperator::Subtract),
            Token::Asterisk => Some(BinaryOperator::Multiply),
            Token::ForwardSlash => Some(BinaryOperator::Divide),
            Token::Caret => Some(BinaryOperator::Exponentiate),
            Token::Literal(_) | Token::OpenParenthesis | Token::CloseParenthesis => None,
        }
    }

    /// The rank of the token in the precedence table.
    ///
    /// An open parenthesis ranks below every operator, so only a closing parenthesis
    /// ever removes it from the operator stack. Anything that is not an operator
    /// ranks `-1`.
    pub fn priority(&self) -> i8 {
        match self {
            Token::OpenParenthesis => 0,
            token => token
                .as_operator()
                .map_or(-1, |operator| operator.precedence()),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Token::Literal(text) => write!(f, "{}", text),
            Token::Plus => write!(f, "+"),
            Token::Dash => write!(f, "-"),
            Token::Asterisk => write!(f, "*"),
            Token::ForwardSlash => write!(f, "/"),
            Token::Caret => write!(f, "^"),
            Token::OpenParenthesis => write!(f, "("),
            Token::CloseParenthesis => write!(f, ")"),
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl str::FromStr for Token {
    type Err = ();

    fn from_str(input: &str) -> Result<Token, Self::Err> {
        let mut characters = input.chars();
        match (characters.next(), characters.next()) {
            (Some(symbol), None) if SYMBOLS.contains(&symbol) => {
                Token::from_symbol(symbol).ok_or(())
            }
            (Some(first), _) if first.is_ascii_digit() => Ok(Token::new_literal(input)),
            _ => Err(()),
        }
    }
}
