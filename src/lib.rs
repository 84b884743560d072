//! A Klondike solitaire rules engine.
//!
//! The crate provides a [`Game`] type that owns the seven tableau
//! columns, the draw/waste pair and the four foundation piles, enforces
//! every move-legality rule, detects the win condition, and persists the
//! board through a stable JSON save format. Rendering, input handling and
//! everything else presentational is left to a front end that calls into
//! the engine and draws the state it exposes.
//!
//! # Example
//!
//! ```
//! use solrs::{Game, PileId};
//!
//! let game = Game::new(42);
//! game.draw_card();
//!
//! let waste = game.pile(PileId::Waste);
//! assert_eq!(waste.len(), 1);
//! assert!(waste[0].face_up);
//! ```

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod pile;
mod sync;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit, rank_from_token, rank_token};
pub use deck::Deck;
pub use error::{CorruptSave, DeckError, LoadError, PileError, SaveError};
pub use game::{
    Board, FOUNDATION_COUNT, Game, GameState, PileId, SavedCard, SavedGame, TABLEAU_COUNT,
};
pub use pile::{Pile, PileRole};
