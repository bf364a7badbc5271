mod repl;

use anyhow::Result;
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use std::io;
use std::process;

/// Evaluates arithmetic expressions, showing their infix and postfix forms
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Arguments {
    /// The expression to evaluate. Reads expressions from standard input until
    /// "exit" when omitted.
    expression: Option<String>,

    #[clap(flatten)]
    verbose: Verbosity,
}

fn main() -> Result<()> {
    let args = Arguments::parse();

    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .parse_default_env()
        .init();

    let stdout = io::stdout();
    let mut output = stdout.lock();

    match args.expression {
        Some(expression) => {
            if !repl::evaluate_line(&expression, &mut output)? {
                process::exit(1);
            }
        }
        None => {
            let stdin = io::stdin();
            repl::run(stdin.lock(), &mut output)?;
        }
    }

    Ok(())
}
