//! Free-form card notation such as `"A, 5 q 10"` or `"2.5 4"`

mod errors;
mod tokens;

pub use errors::ParseError;
pub use tokens::{parse_cards, resolve_token};
