use crate::interpreter::error::EvaluationError;
use crate::interpreter::operator::{BinaryOperator, UnaryOperator};
use crate::interpreter::token::Token;
use anyhow::{bail, Context, Result};
use log::trace;

/// Evaluates a postfix (RPN) token sequence on a value stack.
///
/// Numbers are pushed, the unary minus negates the top value and binary operators
/// replace the top two values with their result. Exactly one value has to remain.
///
/// # Arguments
///
/// * `postfix_tokens`: The tokens to evaluate, in postfix format.
///
/// returns: The value of the expression.
///
/// # Examples
///
/// ```
/// # use anyhow::Result;
/// # fn main() -> Result<()> {
/// use rpn_calculator::interpreter::evaluator::evaluate_postfix;
/// use rpn_calculator::interpreter::token::Token;
///
/// let postfix_tokens = vec![
///     Token::Number("8".to_string()),
///     Token::Number("2".to_string()),
///     "/".parse()?,
/// ];
/// assert_eq!(evaluate_postfix(&postfix_tokens)?, 4.0);
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn evaluate_postfix(postfix_tokens: &[Token]) -> Result<f64> {
    let mut values: Vec<f64> = Vec::with_capacity(postfix_tokens.len());

    for token in postfix_tokens {
        match token {
            Token::Number(literal) => {
                let value = literal
                    .parse::<f64>()
                    .with_context(|| format!("Could not read number '{}'", literal))?;
                values.push(value);
            }
            Token::UnaryMinus => {
                let operand = pop_operand(&mut values, token)?;
                values.push(UnaryOperator::Negate.evaluate(operand));
            }
            Token::Operator(operator) => {
                let result = apply_binary_operator(&mut values, operator, token)?;
                values.push(result);
            }
            Token::OpenParenthesis | Token::CloseParenthesis => {
                bail!(EvaluationError::UnexpectedToken(token.to_string()));
            }
        }
        trace!("{} -> {:?}", token, values);
    }

    match values.as_slice() {
        [result] => Ok(*result),
        leftover => bail!(EvaluationError::UnbalancedStack(leftover.len())),
    }
}

fn apply_binary_operator(
    values: &mut Vec<f64>,
    operator: &BinaryOperator,
    token: &Token,
) -> Result<f64> {
    // The right operand was pushed last.
    let right_operand = pop_operand(values, token)?;
    let left_operand = pop_operand(values, token)?;
    Ok(operator.evaluate(left_operand, right_operand))
}

fn pop_operand(values: &mut Vec<f64>, token: &Token) -> Result<f64> {
    match values.pop() {
        Some(value) => Ok(value),
        None => bail!(EvaluationError::StackUnderflow {
            token: token.to_string()
        }),
    }
}
