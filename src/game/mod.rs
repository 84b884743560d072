//! Game engine and board state.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::pile::{Pile, PileRole};
use crate::sync::Mutex;

mod moves;
mod save;
pub mod state;

pub use save::{SavedCard, SavedGame};
pub use state::{GameState, PileId};

/// Number of tableau columns.
pub const TABLEAU_COUNT: usize = 7;

/// Number of foundation piles.
pub const FOUNDATION_COUNT: usize = 4;

/// All piles on the board.
///
/// The invariant the engine maintains (and load re-validates) is that the
/// union of all piles is always exactly the 52-card set, each card
/// appearing exactly once.
#[derive(Debug, Clone)]
pub struct Board {
    /// The seven tableau columns.
    pub tableau: Vec<Pile>,
    /// The four foundation piles, in suit enumeration order.
    pub foundations: Vec<Pile>,
    /// The face-down draw pile.
    pub draw: Pile,
    /// The face-up waste pile.
    pub waste: Pile,
}

impl Board {
    /// Creates a board with all piles empty.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            tableau: (0..TABLEAU_COUNT)
                .map(|_| Pile::new(PileRole::Tableau))
                .collect(),
            foundations: (0..FOUNDATION_COUNT)
                .map(|_| Pile::new(PileRole::Foundation))
                .collect(),
            draw: Pile::new(PileRole::Draw),
            waste: Pile::new(PileRole::Waste),
        }
    }

    /// Returns the pile named by `id`, or `None` for an out-of-range index.
    #[must_use]
    pub fn pile(&self, id: PileId) -> Option<&Pile> {
        match id {
            PileId::Tableau(i) => self.tableau.get(i),
            PileId::Foundation(i) => self.foundations.get(i),
            PileId::Draw => Some(&self.draw),
            PileId::Waste => Some(&self.waste),
        }
    }

    /// Mutable variant of [`Board::pile`].
    #[must_use]
    pub fn pile_mut(&mut self, id: PileId) -> Option<&mut Pile> {
        match id {
            PileId::Tableau(i) => self.tableau.get_mut(i),
            PileId::Foundation(i) => self.foundations.get_mut(i),
            PileId::Draw => Some(&mut self.draw),
            PileId::Waste => Some(&mut self.waste),
        }
    }

    /// Pile ids in save-format order: tableau 1..7, foundations, draw,
    /// waste.
    pub fn pile_ids() -> impl Iterator<Item = PileId> {
        (0..TABLEAU_COUNT)
            .map(PileId::Tableau)
            .chain((0..FOUNDATION_COUNT).map(PileId::Foundation))
            .chain([PileId::Draw, PileId::Waste])
    }

    /// Iterates over all piles in save-format order.
    pub fn piles(&self) -> impl Iterator<Item = &Pile> {
        self.tableau
            .iter()
            .chain(self.foundations.iter())
            .chain([&self.draw, &self.waste])
    }

    /// Returns the total number of cards on the board.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.piles().map(Pile::len).sum()
    }

    /// Returns whether every foundation holds a full Ace-to-King run.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.foundations.iter().all(|pile| pile.len() == 13)
    }
}

/// A Klondike solitaire engine that owns the board and enforces every
/// cross-pile rule.
///
/// The whole board sits behind one lock so each operation, including the
/// speculative detach-test-commit of [`Game::attempt_move`], is atomic.
/// Rendering front ends read snapshots via [`Game::board`] or
/// [`Game::pile`].
pub struct Game {
    /// All piles on the board.
    pub board: Mutex<Board>,
    /// Current game state.
    pub state: Mutex<GameState>,
    /// Random number generator used for shuffling.
    rng: Mutex<ChaCha8Rng>,
}

impl Game {
    /// Creates a new engine with the given seed and deals the first game.
    ///
    /// The same seed always deals the same layout.
    ///
    /// # Example
    ///
    /// ```
    /// use solrs::Game;
    ///
    /// let game = Game::new(42);
    /// assert!(!game.is_won());
    /// ```
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let game = Self {
            board: Mutex::new(Board::empty()),
            state: Mutex::new(GameState::Playing),
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        };
        game.new_game();
        game
    }

    /// Resets all piles and deals a fresh game.
    ///
    /// Tableau column `i` (1-based) receives `i` cards, all face-down
    /// except the last. The rest of the deck goes face-down into the draw
    /// pile in deal order.
    #[expect(
        clippy::missing_panics_doc,
        reason = "a fresh 52-card deck cannot run out during the deal"
    )]
    pub fn new_game(&self) {
        let mut rng = self.rng.lock();
        let mut deck = Deck::standard(&mut rng);
        drop(rng);

        let mut board = Board::empty();

        for (i, pile) in board.tableau.iter_mut().enumerate() {
            for j in 0..=i {
                let mut card = deck
                    .draw()
                    .expect("deck holds enough cards for the tableau deal");
                card.flip(j == i);
                pile.push(card);
            }
        }

        while let Ok(card) = deck.draw() {
            board.draw.push(card);
        }

        *self.board.lock() = board;
        *self.state.lock() = GameState::Playing;
    }

    /// Returns the current game state.
    #[must_use]
    pub fn state(&self) -> GameState {
        *self.state.lock()
    }

    /// Returns whether every foundation holds a full Ace-to-King run.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.board.lock().is_won()
    }

    /// Returns a snapshot of the cards in one pile, bottom first.
    ///
    /// Returns an empty list for an out-of-range pile index.
    #[must_use]
    pub fn pile(&self, id: PileId) -> Vec<Card> {
        self.board
            .lock()
            .pile(id)
            .map(|pile| pile.cards().to_vec())
            .unwrap_or_default()
    }

    /// Returns a snapshot of the whole board.
    #[must_use]
    pub fn snapshot(&self) -> Board {
        self.board.lock().clone()
    }
}
