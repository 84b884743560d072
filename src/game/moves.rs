use crate::card::Suit;

use super::{Game, GameState, PileId};

impl Game {
    /// Draws the top card of the draw pile face-up onto the waste pile.
    ///
    /// No-op when the draw pile is empty, matching forgiving UI semantics;
    /// recycle the waste pile first to keep drawing.
    pub fn draw_card(&self) {
        let mut board = self.board.lock();

        if let Ok(mut card) = board.draw.pop() {
            card.flip(true);
            board.waste.push(card);
        }
    }

    /// Turns the waste pile back into the draw pile.
    ///
    /// Only legal once the draw pile is empty; otherwise a no-op. Each card
    /// is popped from the waste and pushed face-down onto the draw pile,
    /// which restores the order the cards were in before they were drawn.
    pub fn recycle_waste(&self) {
        let mut board = self.board.lock();

        if !board.draw.is_empty() {
            return;
        }

        while let Ok(mut card) = board.waste.pop() {
            card.flip(false);
            board.draw.push(card);
        }
    }

    /// Flips a face-down top card of the named pile face-up.
    ///
    /// Cards are never revealed automatically; a front end calls this when
    /// the user taps a covered tableau top.
    pub fn reveal_top(&self, id: PileId) {
        let mut board = self.board.lock();

        if let Some(pile) = board.pile_mut(id) {
            pile.reveal_top();
        }
    }

    /// Attempts to move the run starting at `(rank, suit)` from one pile to
    /// another. Returns whether the move was made.
    ///
    /// The run is detached speculatively, tested against the destination's
    /// acceptance rule, then either committed or merged back onto the
    /// source. Both outcomes happen under one board lock, so no observer
    /// ever sees the run belonging to neither pile, and a rejected move
    /// leaves both piles exactly as they were.
    ///
    /// A move that completes the fourth foundation flips the game state to
    /// [`GameState::Won`].
    pub fn attempt_move(&self, from: PileId, rank: u8, suit: Suit, to: PileId) -> bool {
        if from == to {
            return false;
        }

        let mut board = self.board.lock();

        if board.pile(to).is_none() {
            return false;
        }

        let Some(source) = board.pile_mut(from) else {
            return false;
        };
        let Ok(run) = source.split_from(rank, suit) else {
            return false;
        };

        let accepted = board.pile(to).is_some_and(|dest| dest.can_accept(&run));
        let target = if accepted { to } else { from };
        if let Some(pile) = board.pile_mut(target) {
            pile.merge_on_top(run);
        }

        if accepted && board.is_won() {
            *self.state.lock() = GameState::Won;
        }

        accepted
    }
}
