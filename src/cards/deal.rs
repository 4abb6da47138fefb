use log::{debug, warn};
use rand::Rng;
use rand::seq::SliceRandom;

use crate::cards::card::{Card, Rank, Suit};
use crate::cards::errors::CardError;

pub const DECK_SIZE: usize = Suit::ALL.len() * Rank::ALL.len();

/// All 52 cards, suit by suit.
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            deck.push(Card::new(suit, rank));
        }
    }
    deck
}

/// Deal `num_cards` distinct cards using the thread-local RNG.
///
/// # Errors
///
/// Returns [`CardError::InvalidCount`] unless `1 <= num_cards <= 52`.
pub fn deal(num_cards: usize) -> Result<Vec<Card>, CardError> {
    let mut rng = rand::thread_rng();
    deal_with_rng(num_cards, &mut rng)
}

/// Deal `num_cards` distinct cards, drawn uniformly without replacement.
///
/// # Errors
///
/// Returns [`CardError::InvalidCount`] unless `1 <= num_cards <= 52`.
pub fn deal_with_rng<R: Rng + ?Sized>(
    num_cards: usize,
    rng: &mut R,
) -> Result<Vec<Card>, CardError> {
    if num_cards == 0 || num_cards > DECK_SIZE {
        warn!("Rejecting request for {} cards", num_cards);
        return Err(CardError::InvalidCount { count: num_cards });
    }

    let mut deck = full_deck();
    let (hand, _) = deck.partial_shuffle(rng, num_cards);
    let hand = hand.to_vec();

    debug!(
        "Dealt {}",
        hand.iter().map(Card::display).collect::<Vec<_>>().join(" ")
    );
    Ok(hand)
}
