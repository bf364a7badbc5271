use thiserror::Error;

/// Why a postfix sequence could not be reduced to a single number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvaluationError {
    /// An operator was reached with fewer than two values on the stack.
    #[error("not enough operands for '{symbol}'")]
    StackUnderflow { symbol: String },
    /// A parenthesis without a partner reached the evaluator.
    #[error("unexpected symbol '{symbol}'")]
    UnexpectedSymbol { symbol: String },
    /// The stack was empty when the result was requested.
    #[error("no value left to return")]
    EmptyStack,
    #[error("'{literal}' is not a valid number")]
    InvalidNumber { literal: String },
}

impl EvaluationError {
    /// Whether the postfix sequence itself was malformed, as opposed to
    /// being empty or containing a bad literal.
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            EvaluationError::StackUnderflow { .. } | EvaluationError::UnexpectedSymbol { .. }
        )
    }
}
