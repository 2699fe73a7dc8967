use thiserror::Error;

/// The expression text does not describe a well-formed arithmetic expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    #[error("expression is empty")]
    EmptyExpression,

    #[error("invalid character '{character}' at position {position}")]
    InvalidCharacter { character: char, position: usize },

    #[error("malformed number: '{0}'")]
    MalformedNumber(String),

    #[error("mismatched parenthesis")]
    MismatchedParenthesis,

    #[error("operator is missing an operand")]
    MissingOperand,

    #[error("operand is missing an operator")]
    MissingOperator,
}

/// The postfix sequence could not be reduced to a single value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvaluationError {
    #[error("not enough values on the stack for '{token}'")]
    StackUnderflow { token: String },

    #[error("unexpected token in postfix expression: '{0}'")]
    UnexpectedToken(String),

    #[error("expected exactly one value after evaluation, found {0}")]
    UnbalancedStack(usize),
}
