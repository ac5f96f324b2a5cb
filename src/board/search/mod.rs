//! Fixed-depth minimax search with alpha-beta pruning.
//!
//! White maximises and Black minimises the White-relative evaluation.
//! Captures are tried before other moves. A mated side scores
//! `MATE_SCORE + depth` against it, so a mate found with more depth left
//! (a nearer mate) weighs more; stalemate scores zero.

mod chooser;
mod move_order;
mod params;

use log::{debug, trace};

use super::{Board, Color, Move};
pub use chooser::{MoveChooser, RandomChooser, SearchChooser};
pub use params::SearchParams;

use move_order::ordered_children;

/// Base magnitude of a checkmate score. Larger than any material total.
pub const MATE_SCORE: i32 = 1_000_000;

/// Window bound used for an open search.
pub const INFINITY: i32 = i32::MAX;

/// Counters gathered during one search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Positions visited, root children included.
    pub nodes: u64,
}

/// Best root move and its minimax score.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Move,
    pub score: i32,
}

/// Runs searches and keeps their statistics.
#[derive(Clone, Debug, Default)]
pub struct Searcher {
    params: SearchParams,
    stats: SearchStats,
}

impl Searcher {
    #[must_use]
    pub fn new(params: SearchParams) -> Self {
        Searcher {
            params,
            stats: SearchStats::default(),
        }
    }

    #[must_use]
    pub fn params(&self) -> &SearchParams {
        &self.params
    }

    /// Statistics of the most recent search.
    #[must_use]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Search the root position to the configured depth.
    ///
    /// Every root move gets a full-window search; the first move with a
    /// strictly better score wins, so ties keep the earliest move in
    /// capture-first order. Returns `None` when there is no legal move.
    pub fn search(&mut self, board: &Board) -> Option<SearchResult> {
        self.stats = SearchStats::default();
        let side = board.side_to_move();
        let child_depth = self.params.depth.saturating_sub(1);

        let mut best: Option<SearchResult> = None;
        for (mv, child) in ordered_children(board) {
            let score = self.minimax(&child, child_depth, -INFINITY, INFINITY);
            trace!("root {mv} scores {score}");
            let improves = best.map_or(true, |b| is_better(side, score, b.score));
            if improves {
                best = Some(SearchResult {
                    best_move: mv,
                    score,
                });
            }
        }

        match best {
            Some(result) => debug!(
                "{side} plays {} (score {}, depth {}, {} nodes)",
                result.best_move, result.score, self.params.depth, self.stats.nodes
            ),
            None => debug!("{side} has no legal move"),
        }
        best
    }

    /// Minimax value of `board` searched `depth` plies, pruned to the
    /// `(alpha, beta)` window.
    pub fn minimax(&mut self, board: &Board, depth: u32, mut alpha: i32, mut beta: i32) -> i32 {
        self.stats.nodes += 1;
        if depth == 0 {
            return board.evaluate();
        }

        let side = board.side_to_move();
        let children = ordered_children(board);
        if children.is_empty() {
            return terminal_score(board, depth);
        }

        match side {
            Color::White => {
                let mut best = -INFINITY;
                for (_, child) in &children {
                    let score = self.minimax(child, depth - 1, alpha, beta);
                    best = best.max(score);
                    alpha = alpha.max(score);
                    if beta <= alpha {
                        break;
                    }
                }
                best
            }
            Color::Black => {
                let mut best = INFINITY;
                for (_, child) in &children {
                    let score = self.minimax(child, depth - 1, alpha, beta);
                    best = best.min(score);
                    beta = beta.min(score);
                    if beta <= alpha {
                        break;
                    }
                }
                best
            }
        }
    }
}

/// Score of a position with no legal move: mate against the side to move,
/// or a stalemate draw.
fn terminal_score(board: &Board, depth: u32) -> i32 {
    let side = board.side_to_move();
    if board.is_in_check(side) {
        -side.sign() * (MATE_SCORE + depth as i32)
    } else {
        0
    }
}

const fn is_better(side: Color, score: i32, best: i32) -> bool {
    match side {
        Color::White => score > best,
        Color::Black => score < best,
    }
}

/// Minimax value of `board` to `depth` plies within `(alpha, beta)`.
#[must_use]
pub fn minimax(board: &Board, depth: u32, alpha: i32, beta: i32) -> i32 {
    Searcher::default().minimax(board, depth, alpha, beta)
}

/// Best move for the side to move, searched `depth` plies deep.
#[must_use]
pub fn choose_move(board: &Board, depth: u32) -> Option<Move> {
    Searcher::new(SearchParams::with_depth(depth))
        .search(board)
        .map(|result| result.best_move)
}
