mod infix_converter;

use crate::interpreter::parser::infix_converter::infix_to_postfix;
use crate::interpreter::token::Token;
use anyhow::Result;
use log::debug;

/// Parses the given infix tokens into an equivalent postfix (RPN) sequence,
/// which can be evaluated with a single stack and no precedence lookahead.
///
/// # Arguments
///
/// * `infix_tokens`: The tokens to parse, in infix format.
///
/// returns: The same tokens, reordered into postfix format.
///
/// # Examples
///
/// ```
/// # use anyhow::Result;
/// # fn main() -> Result<()> {
/// use rpn_calculator::interpreter::parser::parse;
/// use rpn_calculator::interpreter::token::Token;
///
/// let infix_tokens = vec![
///     Token::Number("2".to_string()),
///     "*".parse()?,
///     Token::UnaryMinus,
///     Token::Number("3".to_string()),
/// ];
/// let postfix_tokens = parse(infix_tokens)?;
/// assert_eq!(postfix_tokens[1], Token::Number("3".to_string()));
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn parse(infix_tokens: Vec<Token>) -> Result<Vec<Token>> {
    let postfix_tokens = infix_to_postfix(infix_tokens)?;
    debug!("Postfix order: {:?}", postfix_tokens);
    Ok(postfix_tokens)
}
