use crate::interpreter::error::SyntaxError;
use crate::interpreter::operator::BinaryOperator;
use crate::interpreter::token::{is_number_character, Token};
use anyhow::{bail, Result};
use itertools::Itertools;
use log::debug;

/// Splits the given expression into infix tokens.
///
/// Whitespace is insignificant and is skipped wherever it appears.
/// A `-` is read as [`Token::UnaryMinus`] when nothing precedes it, or when it follows
/// an operator or an opening parenthesis. Anywhere else it is a subtraction.
///
/// # Arguments
///
/// * `expression`: A text expression in infix format.
///
/// returns: The tokens of the expression, in infix order.
///
/// # Examples
///
/// ```
/// # use anyhow::Result;
/// # fn main() -> Result<()> {
/// use rpn_calculator::interpreter::lexer::tokenize;
/// use rpn_calculator::interpreter::token::Token;
///
/// let tokens = tokenize("12 * -1")?;
/// assert_eq!(tokens[2], Token::UnaryMinus);
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn tokenize(expression: &str) -> Result<Vec<Token>> {
    let mut characters = expression
        .chars()
        .enumerate()
        .filter(|(_, character)| !character.is_whitespace())
        .peekable();
    if characters.peek().is_none() {
        bail!(SyntaxError::EmptyExpression);
    }

    let mut tokens: Vec<Token> = vec![];
    while let Some((position, character)) = characters.next() {
        let token = if is_number_character(character) {
            let mut literal = character.to_string();
            literal.extend(
                characters
                    .peeking_take_while(|&(_, next)| is_number_character(next))
                    .map(|(_, next)| next),
            );
            literal.parse::<Token>()?
        } else if character == '-' && is_unary_position(tokens.last()) {
            Token::UnaryMinus
        } else if let Some(operator) = BinaryOperator::from_symbol(character) {
            Token::Operator(operator)
        } else {
            match character {
                '(' => Token::OpenParenthesis,
                ')' => Token::CloseParenthesis,
                character => bail!(SyntaxError::InvalidCharacter {
                    character,
                    position
                }),
            }
        };
        tokens.push(token);
    }

    debug!("Tokenized {:?} into {:?}", expression, tokens);
    Ok(tokens)
}

/// A minus is unary at the start of the expression, after another operator
/// and right after an opening parenthesis.
fn is_unary_position(previous: Option<&Token>) -> bool {
    match previous {
        None => true,
        Some(token) => token.is_operator() || *token == Token::OpenParenthesis,
    }
}
