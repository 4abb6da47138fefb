//! Standard 52-card deck and random hands

mod card;
mod deal;
mod errors;

pub use card::{Card, Rank, Suit};
pub use deal::{DECK_SIZE, deal, deal_with_rng, full_deck};
pub use errors::CardError;
