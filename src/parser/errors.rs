use thiserror::Error;

/// Errors from reading card notation; the whole input is rejected
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("'{0}' is neither a card rank (A, 2-10, J, Q, K) nor a number")]
    UnknownToken(String),
    #[error("'{0}' is not a finite number")]
    NonFinite(String),
}
