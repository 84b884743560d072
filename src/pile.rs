//! Piles of cards and the move-legality rules for each pile role.

use crate::card::{Card, Suit};
use crate::error::PileError;

/// Role a pile plays on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PileRole {
    /// One of the seven main columns.
    Tableau,
    /// The face-down stock cards are drawn from.
    Draw,
    /// The face-up pile drawn cards land on.
    Waste,
    /// One of the four suit piles built Ace through King.
    Foundation,
}

/// An ordered stack of cards (bottom at index 0, top at the end).
///
/// `push`, `pop` and friends never check legality; that is the caller's job
/// via [`Pile::can_accept`]. Keeping mutation and legality separate is what
/// lets the engine detach a run speculatively and merge it back on
/// rejection.
#[derive(Debug, Clone)]
pub struct Pile {
    /// Cards in the pile.
    cards: Vec<Card>,
    /// The role this pile plays.
    role: PileRole,
    /// For foundations, the suit committed to by the first accepted card.
    suit_filter: Option<Suit>,
}

impl Pile {
    /// Creates a new empty pile with the given role.
    #[must_use]
    pub const fn new(role: PileRole) -> Self {
        Self {
            cards: Vec::new(),
            role,
            suit_filter: None,
        }
    }

    /// Returns the cards in the pile, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the role this pile plays.
    #[must_use]
    pub const fn role(&self) -> PileRole {
        self.role
    }

    /// Returns the suit this foundation is committed to, if any.
    ///
    /// Always `None` for non-foundation piles.
    #[must_use]
    pub const fn suit_filter(&self) -> Option<Suit> {
        self.suit_filter
    }

    /// Returns the top card without removing it.
    #[must_use]
    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// Returns the number of cards in the pile.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the pile is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Appends a card to the top of the pile. Always succeeds.
    ///
    /// A card pushed onto an empty foundation commits the pile to that
    /// card's suit, replacing any commitment left over from a card that
    /// was moved back out of the pile.
    pub fn push(&mut self, card: Card) {
        if self.role == PileRole::Foundation && self.cards.is_empty() {
            self.suit_filter = Some(card.suit);
        }
        self.cards.push(card);
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns an error if the pile is empty.
    pub fn pop(&mut self) -> Result<Card, PileError> {
        self.cards.pop().ok_or(PileError::Empty)
    }

    /// Flips a face-down top card face-up. No-op otherwise.
    pub fn reveal_top(&mut self) {
        if let Some(card) = self.cards.last_mut() {
            card.flip(true);
        }
    }

    /// Returns whether this pile accepts the given run of cards, judged
    /// against the run's first card (the one that would land on this
    /// pile's current top).
    ///
    /// - An empty tableau accepts only a King.
    /// - A non-empty tableau accepts an opposite-color card ranked exactly
    ///   one below its face-up top card.
    /// - A foundation accepts single cards only: an Ace when empty,
    ///   otherwise the next rank up in its committed suit.
    /// - Draw and waste piles never accept dropped cards.
    #[must_use]
    pub fn can_accept(&self, run: &[Card]) -> bool {
        let Some(first) = run.first() else {
            return false;
        };

        match self.role {
            PileRole::Tableau => match self.top() {
                None => first.rank == 13,
                Some(top) => top.face_up && first.matches_descending(*top, true),
            },
            PileRole::Foundation => {
                if run.len() > 1 {
                    return false;
                }
                match self.top() {
                    None => first.rank == 1,
                    Some(top) => {
                        self.suit_filter == Some(first.suit) && top.rank + 1 == first.rank
                    }
                }
            }
            PileRole::Draw | PileRole::Waste => false,
        }
    }

    /// Detaches the named card and every card above it, preserving order.
    ///
    /// # Errors
    ///
    /// Returns an error if the card is not in this pile.
    pub fn split_from(&mut self, rank: u8, suit: Suit) -> Result<Vec<Card>, PileError> {
        let at = self
            .cards
            .iter()
            .position(|card| card.rank == rank && card.suit == suit)
            .ok_or(PileError::CardNotFound)?;

        Ok(self.cards.split_off(at))
    }

    /// Appends a detached run onto this pile's top, in order.
    ///
    /// This is the only commit path for a move; legality must already have
    /// been confirmed via [`Pile::can_accept`] (or the run is returning to
    /// the pile it was split from).
    pub fn merge_on_top(&mut self, run: Vec<Card>) {
        for card in run {
            self.push(card);
        }
    }

    /// Looks up a card by rank and suit.
    #[must_use]
    pub fn find_card(&self, rank: u8, suit: Suit) -> Option<Card> {
        self.cards
            .iter()
            .find(|card| card.rank == rank && card.suit == suit)
            .copied()
    }

    /// Re-derives the suit filter from the current top card.
    ///
    /// Used after loading a save, where the filter is not stored.
    pub(crate) fn rederive_suit_filter(&mut self) {
        self.suit_filter = self.top().map(|card| card.suit);
    }
}
