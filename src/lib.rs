//! Twentyfour - A solver for the 24-point card game
//!
//! Given a hand of card values and a target (24 by default), find an
//! arithmetic expression over `+ - * /` that uses every card exactly once
//! and reaches the target, or report that none exists.

pub mod answer;
pub mod cards;
pub mod expression;
pub mod parser;
pub mod solver;
pub mod survey;
pub mod utils;

// Re-export the main public API
pub use answer::{Verdict, check_answer};
pub use cards::{Card, CardError, Rank, Suit, deal, deal_with_rng};
pub use expression::{Expression, ExpressionError};
pub use parser::{ParseError, parse_cards};
pub use solver::{DEFAULT_TARGET, ExpressionSolver, SolverConfig, SolverError, Term};
pub use survey::{SurveyConfig, SurveyReport, survey};

/// Find an expression over the cards written in `cards` that evaluates to
/// the target value
///
/// This is a convenience function that parses the card notation, creates a
/// default solver and searches for a matching expression.
///
/// # Arguments
///
/// * `cards` - Card tokens separated by whitespace or commas (`"A 5 5 10"`)
/// * `target` - The target value to match
///
/// # Returns
///
/// * `Ok(Some(String))` - A fully parenthesized expression reaching the target
/// * `Ok(None)` - If the input is empty or no expression reaches the target
/// * `Err(SolverError)` - If a token is not a card rank or a number
///
/// # Errors
///
/// This function will return an error if any token in `cards` is neither a
/// rank label (A, 2-10, J, Q, K) nor a finite number.
///
/// # Examples
///
/// ```
/// use twentyfour::find_expression;
///
/// match find_expression("3 3 8 8", 24.0) {
///     Ok(Some(expr)) => println!("Found: {}", expr),
///     Ok(None) => println!("No solution found"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub fn find_expression(cards: &str, target: f64) -> Result<Option<String>, SolverError> {
    let Some(terms) = parse_cards(cards)? else {
        return Ok(None);
    };

    let solver = ExpressionSolver::new();
    Ok(solver.solve(&terms, target))
}

/// Deal `num_cards` random cards and solve them for `target`.
///
/// # Errors
///
/// Returns an error if `num_cards` is not between 1 and 52.
pub fn deal_and_solve(
    num_cards: usize,
    target: f64,
) -> Result<(Vec<Card>, Option<String>), SolverError> {
    let hand = deal(num_cards)?;
    let terms: Vec<Term> = hand.iter().map(Term::from).collect();
    let solution = ExpressionSolver::new().solve(&terms, target);
    Ok((hand, solution))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_expression() {
        let result = find_expression("3 3 8 8", 24.0);
        assert!(matches!(result, Ok(Some(_))));
        if let Ok(Some(expr)) = result {
            assert_eq!(expr, "(8 / (3 - (8 / 3)))");
        }

        assert!(matches!(find_expression("A A A A", 24.0), Ok(None)));
        assert!(matches!(find_expression("", 24.0), Ok(None)));
        assert!(matches!(
            find_expression("A 5 X 10", 24.0),
            Err(SolverError::ParseError(ParseError::UnknownToken(_)))
        ));
    }

    #[test]
    fn test_deal_and_solve() {
        let result = deal_and_solve(4, 24.0);
        assert!(result.is_ok());
        if let Ok((hand, Some(solution))) = result {
            let terms: Vec<Term> = hand.iter().map(Term::from).collect();
            let verdict = check_answer(&terms, &solution, 24.0, &SolverConfig::default());
            assert_eq!(verdict, Ok(Verdict::Correct));
        }

        assert!(matches!(
            deal_and_solve(0, 24.0),
            Err(SolverError::CardError(CardError::InvalidCount { count: 0 }))
        ));
    }
}
