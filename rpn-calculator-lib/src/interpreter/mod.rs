pub mod error;
pub mod evaluator;
pub mod lexer;
mod operator;
pub mod parser;
pub mod token;

use crate::interpreter::evaluator::evaluate_postfix;
use crate::interpreter::token::Token;
use anyhow::{Context, Result};
use log::debug;
use string_builder::Builder;

pub use crate::interpreter::operator::{Associativity, BinaryOperator, UnaryOperator};

/// Calculates the value of the given arithmetic expression.
///
/// Supports `+`, `-`, `*`, `/`, parentheses, unary negation and decimal numbers.
/// Whitespace is ignored. Division by zero is not an error, it evaluates to an
/// infinity or NaN like any other floating-point division.
///
/// # Arguments
///
/// * `expression`: A text expression in infix format.
///
/// returns: The value of the expression.
///
/// # Examples
///
/// ```
/// use rpn_calculator::interpreter::evaluate;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let value = evaluate("(1 - 2) + -(-(-(-4)))")?;
/// assert_eq!(value, 3.0);
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn evaluate(expression: &str) -> Result<f64> {
    let postfix_tokens = convert(expression)?;
    let value = evaluate_postfix(&postfix_tokens)
        .with_context(|| format!("Could not evaluate '{}'", expression))?;
    debug!("{} = {}", expression, value);
    Ok(value)
}

/// Converts the given infix expression into its postfix (RPN) token sequence.
///
/// # Arguments
///
/// * `expression`: The text-representation of the infix expression.
///
/// returns: The tokens of the expression in postfix order.
///
/// # Examples
///
/// ```
/// use rpn_calculator::interpreter::{convert, tokens_to_string};
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let postfix_tokens = convert("12 * -1")?;
/// assert_eq!(tokens_to_string(&postfix_tokens)?, "12 1 # *");
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn convert(expression: &str) -> Result<Vec<Token>> {
    let tokens = lexer::tokenize(expression)?;
    let postfix_tokens = parser::parse(tokens)?;
    Ok(postfix_tokens)
}

/// Prints the given tokens separated by single spaces.
///
/// # Arguments
///
/// * `tokens`: The tokens to print.
///
/// returns: A text-version of the given tokens.
///
/// # Examples
///
/// ```
/// use rpn_calculator::interpreter::tokens_to_string;
/// use rpn_calculator::interpreter::token::Token;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let tokens = vec![
///     Token::Number("2".to_string()),
///     Token::UnaryMinus,
///     Token::Number("4.5".to_string()),
///     "+".parse()?,
/// ];
/// assert_eq!(tokens_to_string(&tokens)?, "2 # 4.5 +");
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn tokens_to_string(tokens: &[Token]) -> Result<String> {
    let mut builder = Builder::new(tokens.len() * 2);

    for (index, token) in tokens.iter().enumerate() {
        if index > 0 {
            builder.append(" ");
        }
        builder.append(token.to_string());
    }

    builder.string().context("Failed to build token string")
}
