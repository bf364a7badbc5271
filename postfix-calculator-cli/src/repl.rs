use anyhow::{Context, Result};
use log::{debug, info};
use postfix_calculator::interpreter::evaluate;
use std::io::{BufRead, Write};

pub const PROMPT: &str = "Please enter an equation to calculate, or type \"exit\" to quit!\n>>> ";
pub const INVALID_EXPRESSION: &str = "This is not a valid expression!";
const EXIT_COMMAND: &str = "exit";

/// Reads expressions line by line and prints how each one evaluates,
/// until a line contains "exit" or the input ends.
pub fn run(input: impl BufRead, output: &mut impl Write) -> Result<()> {
    let mut lines = input.lines();
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush().context("failed to flush prompt")?;

        let line = match lines.next() {
            Some(line) => line.context("failed to read expression")?,
            None => {
                debug!("input ended");
                break;
            }
        };
        if line.contains(EXIT_COMMAND) {
            info!("exit requested");
            break;
        }

        evaluate_line(&line, output)?;
    }
    Ok(())
}

/// Prints the stages of a single expression, or a generic message if it is invalid.
///
/// returns: Whether the expression was valid.
pub fn evaluate_line(line: &str, output: &mut impl Write) -> Result<bool> {
    match evaluate(line) {
        Ok(expression) => {
            writeln!(output, "The expression is: {}", expression.infix_string())?;
            writeln!(output, "This is converted to: {}", expression.postfix_string())?;
            writeln!(output, "The result is: {}", expression.result())?;
            Ok(true)
        }
        Err(error) => {
            debug!("{:#}", error);
            writeln!(output, "{}", INVALID_EXPRESSION)?;
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_with_input(input: &str) -> String {
        let mut output = Vec::new();
        run(Cursor::new(input), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn valid_expression_prints_every_stage() {
        let output = run_with_input("3+4*2\nexit\n");

        assert!(output.contains("The expression is: 3 + 4 * 2 \n"));
        assert!(output.contains("This is converted to: 3 4 2 * + \n"));
        assert!(output.contains("The result is: 11\n"));
    }

    #[test]
    fn invalid_expression_prints_message_and_continues() {
        let output = run_with_input("(3+4\n6/3\nexit\n");

        assert!(output.contains(INVALID_EXPRESSION));
        assert!(output.contains("The result is: 2\n"));
    }

    #[test]
    fn line_containing_exit_stops_the_loop() {
        let output = run_with_input("please exit now\n1+1\n");

        assert_eq!(output, PROMPT);
    }

    #[test]
    fn end_of_input_stops_the_loop() {
        let output = run_with_input("1+1\n");

        assert_eq!(output.matches(PROMPT).count(), 2);
        assert!(output.contains("The result is: 2\n"));
    }

    #[test]
    fn division_by_zero_prints_infinity() {
        let mut output = Vec::new();
        let valid = evaluate_line("10/0", &mut output).unwrap();

        assert!(valid);
        assert!(String::from_utf8(output).unwrap().contains("The result is: inf\n"));
    }

    #[test]
    fn empty_line_is_invalid() {
        let mut output = Vec::new();
        let valid = evaluate_line("", &mut output).unwrap();

        assert!(!valid);
        assert_eq!(String::from_utf8(output).unwrap(), format!("{}\n", INVALID_EXPRESSION));
    }
}
