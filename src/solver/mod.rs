pub mod constants;
mod core;
mod errors;
mod term;

pub use constants::{DEFAULT_TARGET, EPSILON};
pub use self::core::{ExpressionSolver, SolverConfig};
pub use errors::SolverError;
pub use term::{Operator, Term};

#[cfg(test)]
mod tests;
