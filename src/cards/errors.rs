use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CardError {
    #[error("Cannot deal {count} cards from a 52-card deck")]
    InvalidCount { count: usize },
}
