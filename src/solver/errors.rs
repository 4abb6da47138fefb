use thiserror::Error;

use crate::cards::CardError;
use crate::parser::ParseError;

#[derive(Error, Debug)]
pub enum SolverError {
    #[error("Card input error: {0}")]
    ParseError(#[from] ParseError),
    #[error("Dealing error: {0}")]
    CardError(#[from] CardError),
}
