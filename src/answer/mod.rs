//! Checking a player's own expression against the hand

mod check;

pub use check::{Verdict, check_answer};
