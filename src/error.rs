//! Error types for engine operations.

use thiserror::Error;

/// Errors that can occur when drawing from the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The deck has no cards left.
    #[error("deck is empty")]
    Empty,
}

/// Errors that can occur when manipulating a single pile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PileError {
    /// The pile has no cards.
    #[error("pile is empty")]
    Empty,
    /// The requested card is not in this pile.
    #[error("card is not in this pile")]
    CardNotFound,
}

/// Errors that can occur while saving a game.
///
/// Saving never touches the in-memory game state, so a failed save leaves
/// the game playable.
#[derive(Debug, Error)]
pub enum SaveError {
    /// The save file could not be written.
    #[error("failed to write save file")]
    Io(#[from] std::io::Error),
    /// The game state could not be encoded.
    #[error("failed to encode save data")]
    Encode(#[from] serde_json::Error),
}

/// Errors that can occur while loading a game.
///
/// A failed load leaves the prior in-memory game state untouched.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The save file could not be read.
    #[error("failed to read save file")]
    Io(#[from] std::io::Error),
    /// The save file is not a well-formed save document.
    #[error("failed to parse save data")]
    Parse(#[from] serde_json::Error),
    /// The save document parsed but violates a game invariant.
    #[error("corrupt save: {0}")]
    Corrupt(#[from] CorruptSave),
}

/// Ways a well-formed save document can still be unusable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CorruptSave {
    /// The document does not contain one record per pile.
    #[error("expected {expected} pile records, found {found}")]
    PileCount {
        /// Number of pile records a save must contain.
        expected: usize,
        /// Number of pile records actually present.
        found: usize,
    },
    /// A card record carries an unknown rank token.
    #[error("unknown rank token `{0}`")]
    UnknownRank(String),
    /// A card record carries an unknown suit token.
    #[error("unknown suit token `{0}`")]
    UnknownSuit(String),
    /// The same card appears in more than one place.
    #[error("card {0} appears more than once")]
    DuplicateCard(String),
    /// Fewer than 52 distinct cards are present.
    #[error("{missing} of 52 cards are missing")]
    MissingCards {
        /// Number of cards absent from the document.
        missing: usize,
    },
}
