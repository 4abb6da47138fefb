use log::{debug, info};

use crate::expression::{Expression, ExpressionError};
use crate::solver::{SolverConfig, Term};
use crate::utils::approx_eq;

/// Outcome of checking a well-formed answer
#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    Correct,
    /// The numbers in the answer are not exactly the hand's values.
    WrongCards { expected: Vec<f64>, found: Vec<f64> },
    /// Right cards, but the expression misses the target.
    WrongValue { value: f64 },
}

impl Verdict {
    pub fn is_correct(&self) -> bool {
        matches!(self, Verdict::Correct)
    }
}

fn sorted(mut values: Vec<f64>) -> Vec<f64> {
    values.sort_by(f64::total_cmp);
    values
}

fn same_multiset(expected: &[f64], found: &[f64], tolerance: f64) -> bool {
    expected.len() == found.len()
        && expected
            .iter()
            .zip(found)
            .all(|(a, b)| approx_eq(*a, *b, tolerance))
}

/// Check that `answer` uses each card of `hand` once and reaches `target`.
///
/// # Errors
///
/// Returns an error if the answer cannot be parsed or divides by zero.
pub fn check_answer(
    hand: &[Term],
    answer: &str,
    target: f64,
    config: &SolverConfig,
) -> Result<Verdict, ExpressionError> {
    let expr: Expression = answer.parse()?;

    let expected = sorted(hand.iter().map(Term::value).collect());
    let found = sorted(expr.literals());
    if !same_multiset(&expected, &found, config.tolerance) {
        debug!("Answer uses {:?}, hand is {:?}", found, expected);
        return Ok(Verdict::WrongCards { expected, found });
    }

    let value = expr.evaluate()?;
    if approx_eq(value, target, config.tolerance) {
        info!("Correct answer: {} = {}", expr, target);
        Ok(Verdict::Correct)
    } else {
        debug!("Answer {} evaluates to {}, not {}", expr, value, target);
        Ok(Verdict::WrongValue { value })
    }
}
