use log::{debug, warn};

use crate::cards::Rank;
use crate::parser::errors::ParseError;
use crate::solver::Term;

/// Resolve a single token to its point value.
///
/// Rank labels win over numeric parsing, so `A` and `1` both give 1.
///
/// # Errors
///
/// Returns an error if the token is not a rank label and not a finite number.
pub fn resolve_token(token: &str) -> Result<f64, ParseError> {
    if let Some(rank) = Rank::from_label(token) {
        return Ok(f64::from(rank.value()));
    }

    let value = token
        .parse::<f64>()
        .map_err(|_| ParseError::UnknownToken(token.to_string()))?;
    if !value.is_finite() {
        return Err(ParseError::NonFinite(token.to_string()));
    }
    Ok(value)
}

/// Parse whitespace/comma separated card tokens into solver terms.
///
/// Returns `Ok(None)` when the input holds no tokens at all.
///
/// # Errors
///
/// Fails on the first token that cannot be resolved; no partial hand is
/// returned.
pub fn parse_cards(input: &str) -> Result<Option<Vec<Term>>, ParseError> {
    debug!("Parsing card input: '{}'", input);

    let tokens: Vec<&str> = input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .collect();

    if tokens.is_empty() {
        debug!("Card input is empty");
        return Ok(None);
    }

    let terms = tokens
        .iter()
        .map(|token| resolve_token(token).map(Term::from_value))
        .collect::<Result<Vec<_>, _>>()
        .inspect_err(|e| warn!("Rejecting card input '{}': {}", input, e))?;

    debug!("Parsed {} card(s)", terms.len());
    Ok(Some(terms))
}
