use crate::interpreter::evaluator::evaluate_postfix;
use crate::interpreter::token::Token;
use crate::interpreter::{lexer, parser, tokens_to_string};
use anyhow::{Context, Error, Result};
use itertools::Itertools;
use log::debug;
use std::fmt;
use std::fmt::Formatter;
use std::str::FromStr;

/// An arithmetic expression together with every stage of its evaluation.
///
/// All stages are computed once, when the expression is created.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    text: String,
    infix: Vec<Token>,
    postfix: Vec<Token>,
    result: f64,
}

impl Expression {
    /// Tokenizes, reorders and evaluates the given text.
    ///
    /// Fails with an [`EvaluationError`](crate::interpreter::error::EvaluationError)
    /// when the text does not reduce to a single number.
    ///
    /// # Examples
    ///
    /// ```
    /// use postfix_calculator::interpreter::expression::Expression;
    /// # use anyhow::Result;
    ///
    /// # fn main() -> Result<()> {
    /// let expression = Expression::new("(3+4)*2")?;
    /// assert_eq!(expression.postfix_string(), "3 4 + 2 * ");
    /// assert_eq!(expression.result(), 14.0);
    /// # Ok::<(), anyhow::Error>(()) }
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Expression> {
        let text = text.into();
        let infix = lexer::tokenize(&text);
        debug!("infix of {:?}: [{}]", text, infix.iter().join(", "));
        let postfix = parser::parse(&infix);
        debug!("postfix of {:?}: [{}]", text, postfix.iter().join(", "));
        let result = evaluate_postfix(&postfix)
            .with_context(|| format!("could not evaluate expression '{}'", text))?;
        debug!("result of {:?}: {}", text, result);

        Ok(Expression {
            text,
            infix,
            postfix,
            result,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn infix(&self) -> &[Token] {
        &self.infix
    }

    pub fn postfix(&self) -> &[Token] {
        &self.postfix
    }

    pub fn result(&self) -> f64 {
        self.result
    }

    /// The infix tokens, each followed by a space.
    pub fn infix_string(&self) -> String {
        tokens_to_string(&self.infix)
    }

    /// The postfix tokens, each followed by a space.
    pub fn postfix_string(&self) -> String {
        tokens_to_string(&self.postfix)
    }
}

impl FromStr for Expression {
    type Err = Error;

    fn from_str(text: &str) -> Result<Expression> {
        Expression::new(text)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.text, self.result)
    }
}
