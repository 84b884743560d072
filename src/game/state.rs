//! Game state types.

/// Game state.
///
/// Dealing happens atomically inside [`Game::new_game`], so the only
/// observable states are in play and won.
///
/// [`Game::new_game`]: crate::Game::new_game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// The game is in progress.
    Playing,
    /// All four foundations hold thirteen cards.
    Won,
}

/// Identifies one of the thirteen piles on the board.
///
/// Tableau and foundation indices are zero-based. The variant order here
/// matches the pile record order of the save format: tableau 1..7,
/// foundations in suit enumeration order, draw, waste.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PileId {
    /// Tableau column `0..7`.
    Tableau(usize),
    /// Foundation pile `0..4`, in suit enumeration order.
    Foundation(usize),
    /// The face-down draw pile.
    Draw,
    /// The face-up waste pile.
    Waste,
}
