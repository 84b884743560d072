//! Deck generation and shuffling.

use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Suit};
use crate::error::DeckError;

/// The undealt portion of a standard 52-card deck.
///
/// A deck exists only between shuffle and deal: [`Game::new_game`]
/// creates one, drains it into the initial layout, and discards it.
///
/// [`Game::new_game`]: crate::Game::new_game
#[derive(Debug, Clone)]
pub struct Deck {
    /// Remaining cards, front at index 0.
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a full deck of 52 face-down cards and shuffles it.
    ///
    /// Every (suit, rank) combination appears exactly once. The shuffle is
    /// a single unbiased Fisher-Yates pass.
    #[must_use]
    pub fn standard(rng: &mut ChaCha8Rng) -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in 1..=13 {
                cards.push(Card::new(suit, rank));
            }
        }

        cards.shuffle(rng);
        Self { cards }
    }

    /// Removes and returns the front card.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck is empty.
    pub fn draw(&mut self) -> Result<Card, DeckError> {
        if self.cards.is_empty() {
            return Err(DeckError::Empty);
        }
        Ok(self.cards.remove(0))
    }

    /// Returns the number of undealt cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck has been fully dealt.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
