use anyhow::{bail, Context, Result};
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use log::info;
use rpn_calculator::interpreter::evaluator::evaluate_postfix;
use rpn_calculator::interpreter::{convert, tokens_to_string};
use std::io;
use std::io::{BufRead, Write};

/// Evaluates arithmetic expressions.
///
/// Reads expressions line by line from standard input when none is given.
/// Put `--` before an expression that starts with `-(`.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None, allow_negative_numbers = true)]
struct Arguments {
    /// The expression to evaluate, e.g. "2 / (2 + 3) * 4.33 - -6"
    expression: Vec<String>,

    /// Print the expression in Reverse Polish Notation before its value
    #[clap(long)]
    rpn: bool,

    #[clap(flatten)]
    verbose: Verbosity,
}

fn main() -> Result<()> {
    let args = Arguments::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    if !args.expression.is_empty() {
        let expression = args.expression.join(" ");
        println!("{}", evaluate_line(&expression, args.rpn)?);
        return Ok(());
    }

    info!("Reading expressions from standard input");
    let failures = evaluate_lines(
        io::stdin().lock(),
        args.rpn,
        &mut io::stdout(),
        &mut io::stderr(),
    )?;

    if failures > 0 {
        bail!("{} expression(s) could not be evaluated", failures);
    }
    Ok(())
}

/// Evaluates every non-empty line of `input`, writing values to `output` and
/// one message per failing line to `errors`.
///
/// returns: The number of lines that could not be evaluated.
fn evaluate_lines(
    input: impl BufRead,
    show_rpn: bool,
    output: &mut impl Write,
    errors: &mut impl Write,
) -> Result<usize> {
    let mut failures = 0;
    for line in input.lines() {
        let line = line.context("Could not read from standard input")?;
        if line.trim().is_empty() {
            continue;
        }
        match evaluate_line(&line, show_rpn) {
            Ok(value) => writeln!(output, "{}", value)?,
            Err(err) => {
                writeln!(errors, "{}: {:#}", line.trim(), err)?;
                failures += 1;
            }
        }
    }
    Ok(failures)
}

/// Evaluates one expression and formats what should be printed for it.
fn evaluate_line(expression: &str, show_rpn: bool) -> Result<String> {
    let postfix_tokens = convert(expression)?;
    let value = evaluate_postfix(&postfix_tokens)?;
    if show_rpn {
        Ok(format!("{} = {}", tokens_to_string(&postfix_tokens)?, value))
    } else {
        Ok(value.to_string())
    }
}
