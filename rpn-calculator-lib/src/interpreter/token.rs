use crate::interpreter::error::SyntaxError;
use crate::interpreter::operator::{Associativity, BinaryOperator, UnaryOperator};
use std::fmt;
use std::fmt::Formatter;
use std::str;

/// How the unary minus marker is written in postfix listings.
pub const UNARY_MINUS_SYMBOL: char = '#';

/// A discrete part of an expression
#[derive(Clone, PartialEq, Eq)]
pub enum Token {
    /// A decimal literal, kept as text until it is evaluated.
    Number(String),
    Operator(BinaryOperator),
    UnaryMinus,
    OpenParenthesis,
    CloseParenthesis,
}

impl Token {
    /// Whether the token operates on values, either a binary operator or the unary minus.
    pub fn is_operator(&self) -> bool {
        matches!(self, Token::Operator(_) | Token::UnaryMinus)
    }

    /// Rank used when deciding which pending operator to emit first.
    ///
    /// Parentheses rank lowest so they are never popped by an operator.
    pub fn precedence(&self) -> Option<u8> {
        match self {
            Token::OpenParenthesis | Token::CloseParenthesis => Some(0),
            Token::Operator(operator) => Some(operator.precedence()),
            Token::UnaryMinus => Some(UnaryOperator::Negate.precedence()),
            Token::Number(_) => None,
        }
    }

    pub fn associativity(&self) -> Option<Associativity> {
        match self {
            Token::Operator(operator) => Some(operator.associativity()),
            Token::UnaryMinus => Some(UnaryOperator::Negate.associativity()),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(literal) => write!(f, "{}", literal),
            Token::Operator(operator) => write!(f, "{}", operator),
            Token::UnaryMinus => write!(f, "{}", UNARY_MINUS_SYMBOL),
            Token::OpenParenthesis => write!(f, "("),
            Token::CloseParenthesis => write!(f, ")"),
        }
    }
}

impl str::FromStr for Token {
    type Err = SyntaxError;

    fn from_str(input: &str) -> Result<Token, Self::Err> {
        match input {
            "+" => Ok(Token::Operator(BinaryOperator::Add)),
            "-" => Ok(Token::Operator(BinaryOperator::Subtract)),
            "*" => Ok(Token::Operator(BinaryOperator::Multiply)),
            "/" => Ok(Token::Operator(BinaryOperator::Divide)),
            "#" => Ok(Token::UnaryMinus),
            "(" => Ok(Token::OpenParenthesis),
            ")" => Ok(Token::CloseParenthesis),
            input => parse_number(input),
        }
    }
}

fn parse_number(text: &str) -> Result<Token, SyntaxError> {
    let is_decimal = !text.is_empty() && text.chars().all(is_number_character);
    if is_decimal && text.parse::<f64>().is_ok() {
        Ok(Token::Number(text.to_string()))
    } else {
        Err(SyntaxError::MalformedNumber(text.to_string()))
    }
}

/// Characters that may appear in a number literal.
pub(crate) fn is_number_character(character: char) -> bool {
    character.is_ascii_digit() || character == '.'
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
