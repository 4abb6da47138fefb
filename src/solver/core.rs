use log::{debug, info};

use crate::solver::constants::EPSILON;
use crate::solver::term::{Operator, Term};
use crate::utils::{approx_eq, is_negligible};

/// Configuration for the search
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Absolute tolerance for matching the target and for rejecting
    /// near-zero divisors.
    pub tolerance: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self { tolerance: EPSILON }
    }
}

/// Depth-first search for an expression that uses every term exactly once
///
/// Pairs are tried in a fixed order (first index ascending, second index
/// ascending, operators `+ - * /`), and the first expression that reaches
/// the target is returned. Results are therefore deterministic for a given
/// input order, but not necessarily the shortest expression.
#[derive(Debug, Clone, Default)]
pub struct ExpressionSolver {
    config: SolverConfig,
}

impl ExpressionSolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Get a reference to the solver configuration
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Find an expression over all `terms` that evaluates to `target`.
    ///
    /// Returns `None` when no combination reaches the target, including for
    /// an empty hand.
    pub fn solve(&self, terms: &[Term], target: f64) -> Option<String> {
        info!(
            "Searching {} term(s) for target {} (tolerance {})",
            terms.len(),
            target,
            self.config.tolerance
        );

        match self.search(terms, target) {
            Some(term) => {
                let expression = term.expression();
                info!("Found solution: {}", expression);
                Some(expression)
            }
            None => {
                info!("No solution found");
                None
            }
        }
    }

    fn search(&self, terms: &[Term], target: f64) -> Option<Term> {
        match terms {
            [] => None,
            [only] => approx_eq(only.value(), target, self.config.tolerance).then(|| only.clone()),
            _ => {
                for (i, lhs) in terms.iter().enumerate() {
                    for (j, rhs) in terms.iter().enumerate() {
                        if i == j {
                            continue;
                        }

                        let remaining = terms
                            .iter()
                            .enumerate()
                            .filter(|&(k, _)| k != i && k != j)
                            .map(|(_, term)| term.clone());

                        for op in Operator::ALL {
                            if op == Operator::Div
                                && is_negligible(rhs.value(), self.config.tolerance)
                            {
                                continue;
                            }

                            let mut reduced: Vec<Term> = remaining.clone().collect();
                            reduced.push(lhs.combine(op, rhs));

                            if let Some(found) = self.search(&reduced, target) {
                                if terms.len() == 2 {
                                    debug!("Matched with ({} {} {})", lhs, op, rhs);
                                }
                                return Some(found);
                            }
                        }
                    }
                }
                None
            }
        }
    }
}
