//! The persisted game-state format.
//!
//! A save is a JSON document holding one record per pile in a fixed
//! order: tableau 1..7, foundations in suit enumeration order, draw,
//! waste. Each pile record is an ordered list of card records. The order
//! is load-bearing: loading assigns records to piles positionally.
//!
//! A foundation's suit commitment is not stored; it is re-derived from
//! the pile's top card on load.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::card::{Card, DECK_SIZE, Suit, rank_from_token, rank_token};
use crate::error::{CorruptSave, LoadError, SaveError};

use super::{Board, FOUNDATION_COUNT, Game, GameState, TABLEAU_COUNT};

/// One card record in a save document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedCard {
    /// Rank token: `"A"`, `"2"`..`"10"`, `"J"`, `"Q"`, `"K"`.
    pub rank: String,
    /// Suit token: `"Spades"`, `"Hearts"`, `"Diamonds"`, `"Clubs"`.
    pub suit: String,
    /// Whether the card lies face-up.
    #[serde(rename = "faceUp")]
    pub face_up: bool,
}

impl From<Card> for SavedCard {
    fn from(card: Card) -> Self {
        Self {
            rank: rank_token(card.rank).unwrap_or("?").to_owned(),
            suit: card.suit.token().to_owned(),
            face_up: card.face_up,
        }
    }
}

/// A complete save document: one record per pile, in board order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedGame {
    /// Pile records: tableau 1..7, foundation 1..4, draw, waste.
    pub piles: Vec<Vec<SavedCard>>,
}

/// Total number of pile records in a save document.
const PILE_RECORDS: usize = TABLEAU_COUNT + FOUNDATION_COUNT + 2;

impl SavedGame {
    fn from_board(board: &Board) -> Self {
        Self {
            piles: board
                .piles()
                .map(|pile| pile.cards().iter().copied().map(SavedCard::from).collect())
                .collect(),
        }
    }

    /// Rebuilds a board, re-validating the 52-card invariant.
    fn into_board(self) -> Result<Board, CorruptSave> {
        if self.piles.len() != PILE_RECORDS {
            return Err(CorruptSave::PileCount {
                expected: PILE_RECORDS,
                found: self.piles.len(),
            });
        }

        let mut seen = [false; DECK_SIZE];
        let mut board = Board::empty();

        for (record, id) in self.piles.into_iter().zip(Board::pile_ids()) {
            for saved in record {
                let rank = rank_from_token(&saved.rank)
                    .ok_or_else(|| CorruptSave::UnknownRank(saved.rank.clone()))?;
                let suit = Suit::from_token(&saved.suit)
                    .ok_or_else(|| CorruptSave::UnknownSuit(saved.suit.clone()))?;

                let mut card = Card::new(suit, rank);
                card.flip(saved.face_up);

                let slot = &mut seen[suit as usize * 13 + (rank as usize - 1)];
                if *slot {
                    return Err(CorruptSave::DuplicateCard(card.to_string()));
                }
                *slot = true;

                if let Some(pile) = board.pile_mut(id) {
                    pile.push(card);
                }
            }
        }

        let missing = seen.iter().filter(|&&present| !present).count();
        if missing > 0 {
            return Err(CorruptSave::MissingCards { missing });
        }

        for foundation in &mut board.foundations {
            foundation.rederive_suit_filter();
        }

        Ok(board)
    }
}

impl Game {
    /// Encodes the current game state as a save document.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding fails.
    pub fn serialize(&self) -> Result<String, SaveError> {
        let saved = SavedGame::from_board(&self.board.lock());
        Ok(serde_json::to_string_pretty(&saved)?)
    }

    /// Replaces the current game state with the given save document.
    ///
    /// The document is parsed and fully validated before anything is
    /// replaced, so on any failure the in-memory game is untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is malformed, names an unknown
    /// rank or suit token, or does not contain each of the 52 cards
    /// exactly once.
    pub fn deserialize(&self, data: &str) -> Result<(), LoadError> {
        let saved: SavedGame = serde_json::from_str(data)?;
        let board = saved.into_board()?;

        let won = board.is_won();
        *self.board.lock() = board;
        *self.state.lock() = if won { GameState::Won } else { GameState::Playing };

        Ok(())
    }

    /// Saves the current game state to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding or writing fails; the in-memory game
    /// is unaffected either way.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), SaveError> {
        let data = self.serialize()?;
        fs::write(path, data)?;
        Ok(())
    }

    /// Loads a game state from a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or fails validation;
    /// on failure the prior in-memory game is untouched.
    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<(), LoadError> {
        let data = fs::read_to_string(path)?;
        self.deserialize(&data)
    }
}
