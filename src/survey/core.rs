use log::{info, warn};
use rand::Rng;
use rayon::prelude::*;

use crate::cards::{Card, CardError, DECK_SIZE, deal_with_rng};
use crate::solver::{DEFAULT_TARGET, ExpressionSolver, SolverConfig, Term};

/// Configuration for a survey run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurveyConfig {
    pub num_cards: usize,
    pub hands: usize,
    pub target: f64,
    pub solver: SolverConfig,
}

impl Default for SurveyConfig {
    fn default() -> Self {
        Self {
            num_cards: 4,
            hands: 1000,
            target: DEFAULT_TARGET,
            solver: SolverConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SurveyReport {
    pub hands: usize,
    pub solvable: usize,
}

impl SurveyReport {
    /// Fraction of solvable hands, 0 for an empty survey.
    pub fn ratio(&self) -> f64 {
        if self.hands == 0 {
            0.0
        } else {
            self.solvable as f64 / self.hands as f64
        }
    }
}

/// Deal `config.hands` hands from `rng` and count how many are solvable.
///
/// Hands are dealt sequentially, so a seeded RNG gives the same report on
/// every run; solving happens in parallel.
///
/// # Errors
///
/// Returns [`CardError::InvalidCount`] if `config.num_cards` is not a
/// valid hand size.
pub fn survey<R: Rng + ?Sized>(
    config: &SurveyConfig,
    rng: &mut R,
) -> Result<SurveyReport, CardError> {
    if config.num_cards == 0 || config.num_cards > DECK_SIZE {
        warn!("Cannot survey hands of {} cards", config.num_cards);
        return Err(CardError::InvalidCount {
            count: config.num_cards,
        });
    }

    info!(
        "Surveying {} hands of {} cards for target {}",
        config.hands, config.num_cards, config.target
    );

    let dealt = (0..config.hands)
        .map(|_| deal_with_rng(config.num_cards, rng))
        .collect::<Result<Vec<Vec<Card>>, _>>()?;

    let solver = ExpressionSolver::with_config(config.solver);
    let solvable = dealt
        .par_iter()
        .filter(|hand| {
            let terms: Vec<Term> = hand.iter().map(Term::from).collect();
            solver.solve(&terms, config.target).is_some()
        })
        .count();

    let report = SurveyReport {
        hands: config.hands,
        solvable,
    };
    info!(
        "{} of {} hands solvable ({:.1}%)",
        report.solvable,
        report.hands,
        report.ratio() * 100.0
    );
    Ok(report)
}
