use crate::interpreter::error::SyntaxError;
use crate::interpreter::operator::Associativity;
use crate::interpreter::token::Token;
use anyhow::{bail, Context, Result};
use std::collections::VecDeque;

/// Reorders infix tokens into postfix order with the shunting-yard algorithm,
/// rejecting token sequences that are not well-formed expressions.
pub(crate) fn infix_to_postfix(original_tokens: Vec<Token>) -> Result<Vec<Token>> {
    let mut tokens: VecDeque<Token> = VecDeque::from(original_tokens);
    let mut operators: VecDeque<Token> = VecDeque::new();
    let mut output: Vec<Token> = vec![];
    // Alternates between operands and operators as tokens are consumed.
    let mut expecting_operand = true;
    while let Some(token) = tokens.pop_front() {
        match token {
            Token::Number(_) => {
                if !expecting_operand {
                    bail!(SyntaxError::MissingOperator);
                }
                output.push(token);
                expecting_operand = false;
            }
            Token::OpenParenthesis => {
                if !expecting_operand {
                    bail!(SyntaxError::MissingOperator);
                }
                operators.push_front(token);
            }
            Token::UnaryMinus => {
                if !expecting_operand {
                    bail!(SyntaxError::MissingOperator);
                }
                parse_operator_token(&mut operators, &mut output, token)?;
            }
            Token::Operator(_) => {
                if expecting_operand {
                    bail!(SyntaxError::MissingOperand);
                }
                parse_operator_token(&mut operators, &mut output, token)?;
                expecting_operand = true;
            }
            Token::CloseParenthesis => {
                if !operators.contains(&Token::OpenParenthesis) {
                    bail!(SyntaxError::MismatchedParenthesis);
                }
                if expecting_operand {
                    bail!(SyntaxError::MissingOperand);
                }
                parse_closing_parenthesis_token(&mut operators, &mut output)?;
            }
        };
    }

    if expecting_operand {
        bail!(SyntaxError::MissingOperand);
    }
    transfer_leftover_operators(&mut operators, &mut output)?;

    Ok(output)
}

fn transfer_leftover_operators(
    operators: &mut VecDeque<Token>,
    output: &mut Vec<Token>,
) -> Result<()> {
    while let Some(operator) = operators.pop_front() {
        match operator {
            Token::OpenParenthesis | Token::CloseParenthesis => {
                bail!(SyntaxError::MismatchedParenthesis);
            }
            operator => output.push(operator),
        }
    }
    Ok(())
}

fn parse_closing_parenthesis_token(
    operators: &mut VecDeque<Token>,
    output: &mut Vec<Token>,
) -> Result<()> {
    loop {
        match operators.front() {
            None => {
                bail!(SyntaxError::MismatchedParenthesis);
            }
            Some(top_of_operator_stack) => {
                if Token::OpenParenthesis.eq(top_of_operator_stack) {
                    break;
                }
                let operator = operators
                    .pop_front()
                    .with_context(|| "No operators left.")?;
                output.push(operator);
            }
        }
    }
    // Discard the open parenthesis.
    operators.pop_front();
    Ok(())
}

/// Pops every pending operator that has to be applied before `token`, then pushes `token`.
///
/// Equal precedence pops for left-associative operators, so `8 - 3 - 2` is `(8 - 3) - 2`.
/// The unary minus is right-associative and stacks up, so `--4` is `-(-4)`.
fn parse_operator_token(
    operators: &mut VecDeque<Token>,
    output: &mut Vec<Token>,
    token: Token,
) -> Result<()> {
    let precedence = token
        .precedence()
        .with_context(|| format!("'{}' has no precedence", token))?;
    let associativity = token
        .associativity()
        .with_context(|| format!("'{}' has no associativity", token))?;

    while let Some(top_of_operator_stack) = operators.front() {
        let other_precedence = top_of_operator_stack
            .precedence()
            .with_context(|| "Found non-operator in operator stack")?;

        let should_pop = match associativity {
            Associativity::Left => other_precedence >= precedence,
            Associativity::Right => other_precedence > precedence,
        };
        if !should_pop {
            break;
        }

        let other_operator_token = operators
            .pop_front()
            .with_context(|| "No operators left.")?;
        output.push(other_operator_token);
    }

    operators.push_front(token);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::lexer::tokenize;
    use pretty_assertions::assert_eq;

    fn number(literal: &str) -> Token {
        Token::Number(literal.to_string())
    }

    fn postfix_of(expression: &str) -> Result<Vec<Token>> {
        infix_to_postfix(tokenize(expression)?)
    }

    fn syntax_error_of(expression: &str) -> SyntaxError {
        let error = postfix_of(expression).expect_err("Should return Err");
        error
            .downcast_ref::<SyntaxError>()
            .cloned()
            .expect("Should be a syntax error")
    }

    #[test]
    fn infix_to_postfix_simple_expression() {
        // 1 + 2
        let infix = [number("1"), "+".parse().unwrap(), number("2")].to_vec();
        let postfix = [number("1"), number("2"), "+".parse().unwrap()].to_vec();

        let actual = infix_to_postfix(infix).unwrap();

        assert_eq!(actual, postfix)
    }

    #[test]
    fn infix_to_postfix_simple_parenthesised_expression() {
        // 1 - (2 + 3)
        let infix = [
            number("1"),
            "-".parse().unwrap(),
            Token::OpenParenthesis,
            number("2"),
            "+".parse().unwrap(),
            number("3"),
            Token::CloseParenthesis,
        ]
        .to_vec();
        let postfix = [
            number("1"),
            number("2"),
            number("3"),
            "+".parse().unwrap(),
            "-".parse().unwrap(),
        ]
        .to_vec();

        let actual = infix_to_postfix(infix).unwrap();

        assert_eq!(actual, postfix)
    }

    #[test]
    fn infix_to_postfix_multi_operator_expression() {
        // 1 + 2 * 3 - 4
        let postfix = [
            number("1"),
            number("2"),
            number("3"),
            "*".parse().unwrap(),
            "+".parse().unwrap(),
            number("4"),
            "-".parse().unwrap(),
        ]
        .to_vec();

        let actual = postfix_of("1 + 2 * 3 - 4").unwrap();

        assert_eq!(actual, postfix)
    }

    #[test]
    fn infix_to_postfix_equal_precedence_is_left_associative() {
        // 8 - 3 - 2
        let postfix = [
            number("8"),
            number("3"),
            "-".parse().unwrap(),
            number("2"),
            "-".parse().unwrap(),
        ]
        .to_vec();

        let actual = postfix_of("8 - 3 - 2").unwrap();

        assert_eq!(actual, postfix)
    }

    #[test]
    fn infix_to_postfix_nested_parenthesis_expression() {
        // 1 + ((2 + 3) * 4)
        let postfix = [
            number("1"),
            number("2"),
            number("3"),
            "+".parse().unwrap(),
            number("4"),
            "*".parse().unwrap(),
            "+".parse().unwrap(),
        ]
        .to_vec();

        let actual = postfix_of("1 + ((2 + 3) * 4)").unwrap();

        assert_eq!(actual, postfix)
    }

    #[test]
    fn infix_to_postfix_unary_minus_follows_its_operand() {
        // 12 * -1
        let postfix = [
            number("12"),
            number("1"),
            Token::UnaryMinus,
            "*".parse().unwrap(),
        ]
        .to_vec();

        let actual = postfix_of("12*-1").unwrap();

        assert_eq!(actual, postfix)
    }

    #[test]
    fn infix_to_postfix_leading_unary_minus_binds_tighter_than_product() {
        // -2 * 3
        let postfix = [
            number("2"),
            Token::UnaryMinus,
            number("3"),
            "*".parse().unwrap(),
        ]
        .to_vec();

        let actual = postfix_of("-2*3").unwrap();

        assert_eq!(actual, postfix)
    }

    #[test]
    fn infix_to_postfix_repeated_unary_minus_stacks() {
        // --4
        let postfix = [number("4"), Token::UnaryMinus, Token::UnaryMinus].to_vec();

        let actual = postfix_of("--4").unwrap();

        assert_eq!(actual, postfix)
    }

    #[test]
    fn infix_to_postfix_negated_group() {
        // 1 - -(-(4))
        let postfix = [
            number("1"),
            number("4"),
            Token::UnaryMinus,
            Token::UnaryMinus,
            "-".parse().unwrap(),
        ]
        .to_vec();

        let actual = postfix_of("1 - -(-(4))").unwrap();

        assert_eq!(actual, postfix)
    }

    #[test]
    fn infix_to_postfix_mismatched_parenthesis_should_return_err() {
        // (1 + 2))
        let infix = [
            Token::OpenParenthesis,
            number("1"),
            "+".parse().unwrap(),
            number("2"),
            Token::CloseParenthesis,
            Token::CloseParenthesis,
        ]
        .to_vec();

        infix_to_postfix(infix).expect_err("Should return Err");
    }

    #[test]
    fn unclosed_parenthesis_should_return_err() {
        assert_eq!(syntax_error_of("((1 + 2)"), SyntaxError::MismatchedParenthesis);
    }

    #[test]
    fn stray_closing_parenthesis_should_return_err() {
        assert_eq!(syntax_error_of(")("), SyntaxError::MismatchedParenthesis);
        assert_eq!(syntax_error_of("1 + )"), SyntaxError::MismatchedParenthesis);
    }

    #[test]
    fn closing_parenthesis_after_operator_should_return_err() {
        assert_eq!(syntax_error_of("(1 + )"), SyntaxError::MissingOperand);
    }

    #[test]
    fn trailing_operator_should_return_err() {
        assert_eq!(syntax_error_of("1 +"), SyntaxError::MissingOperand);
    }

    #[test]
    fn leading_binary_operator_should_return_err() {
        assert_eq!(syntax_error_of("* 2"), SyntaxError::MissingOperand);
    }

    #[test]
    fn empty_parentheses_should_return_err() {
        assert_eq!(syntax_error_of("()"), SyntaxError::MissingOperand);
    }

    #[test]
    fn lone_unary_minus_should_return_err() {
        assert_eq!(syntax_error_of("-"), SyntaxError::MissingOperand);
    }

    #[test]
    fn adjacent_groups_should_return_err() {
        assert_eq!(syntax_error_of("(1)(2)"), SyntaxError::MissingOperator);
        assert_eq!(syntax_error_of("(1)2"), SyntaxError::MissingOperator);
    }
}
