//! Strategies for picking a move in a game.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::super::{Board, Move};
use super::{SearchParams, Searcher};

/// Something that picks a move for the side to move.
pub trait MoveChooser {
    /// Pick a legal move, or `None` when the side to move has none.
    fn choose_move(&mut self, board: &Board) -> Option<Move>;
}

/// Picks the minimax-best move at a fixed depth.
#[derive(Clone, Debug, Default)]
pub struct SearchChooser {
    searcher: Searcher,
}

impl SearchChooser {
    #[must_use]
    pub fn new(params: SearchParams) -> Self {
        SearchChooser {
            searcher: Searcher::new(params),
        }
    }

    #[must_use]
    pub fn searcher(&self) -> &Searcher {
        &self.searcher
    }
}

impl MoveChooser for SearchChooser {
    fn choose_move(&mut self, board: &Board) -> Option<Move> {
        self.searcher.search(board).map(|result| result.best_move)
    }
}

/// Picks uniformly among the legal moves.
#[derive(Clone, Debug)]
pub struct RandomChooser<R> {
    rng: R,
}

impl<R: Rng> RandomChooser<R> {
    #[must_use]
    pub fn new(rng: R) -> Self {
        RandomChooser { rng }
    }
}

impl RandomChooser<StdRng> {
    /// Reproducible chooser driven by a seeded `StdRng`.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        RandomChooser::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> MoveChooser for RandomChooser<R> {
    fn choose_move(&mut self, board: &Board) -> Option<Move> {
        board.legal_moves().as_slice().choose(&mut self.rng).copied()
    }
}
