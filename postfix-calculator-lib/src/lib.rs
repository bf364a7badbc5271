//! Evaluates arithmetic expressions by converting them from infix to postfix order.
//!
//! ```
//! # use anyhow::Result;
//! # fn main() -> Result<()> {
//! let expression = postfix_calculator::evaluate("(3+4)*2")?;
//! assert_eq!(expression.result(), 14.0);
//! # Ok::<(), anyhow::Error>(()) }
//! ```

pub mod interpreter;

pub use interpreter::error::EvaluationError;
pub use interpreter::evaluate;
pub use interpreter::expression::Expression;
pub use interpreter::token::Token;
