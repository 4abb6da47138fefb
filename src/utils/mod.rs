//! Numeric and display helpers shared by the solver, parser and checker

mod display;
mod numbers;

pub use display::strip_outer_parens;
pub use numbers::{approx_eq, format_value, is_negligible};
