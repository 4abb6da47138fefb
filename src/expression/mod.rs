//! Arithmetic expressions typed in by a player
//!
//! Supports `+ - * /`, parentheses, unary minus and decimal literals. Used to
//! check a player's answer and to verify solver output in tests.

mod ast;
mod display;
mod errors;
mod eval;
mod parse;

pub use ast::Expression;
pub use errors::ExpressionError;
