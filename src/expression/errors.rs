use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpressionError {
    #[error("Expression is empty")]
    Empty,
    #[error("Unexpected character '{found}' at position {position}")]
    UnexpectedCharacter { found: char, position: usize },
    #[error("Invalid number: {0}")]
    InvalidNumber(String),
    #[error("Unexpected '{found}' at position {position}")]
    UnexpectedToken { found: String, position: usize },
    #[error("Unexpected end of expression")]
    UnexpectedEnd,
    #[error("Unbalanced parenthesis")]
    UnbalancedParenthesis,
    #[error("Expression nested deeper than {0} levels")]
    NestingTooDeep(usize),
    #[error("Expression has more than {0} tokens")]
    TooLong(usize),
    #[error("Division by zero")]
    DivisionByZero,
}
