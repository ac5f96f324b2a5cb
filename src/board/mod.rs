//! Chess board representation and game logic.
//!
//! A position is twelve bitboards plus side to move, castling rights and an
//! en-passant target. Moves are validated against piece geometry, trial
//! applied on a copy to reject self-check, and searched with fixed-depth
//! minimax.
//!
//! # Example
//! ```
//! use minimax_chess::board::{choose_move, Board};
//!
//! let mut board = Board::new();
//! assert_eq!(board.legal_moves().len(), 20);
//! let mv = choose_move(&board, 2).unwrap();
//! assert!(board.make_move(mv));
//! ```

mod apply;
pub mod attack_tables;
mod builder;
mod error;
mod eval;
mod fen;
mod layout;
mod movegen;
pub mod prelude;
mod pst;
pub mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{FenError, LayoutError, MoveParseError, SquareError};
pub use movegen::GameStatus;
pub use search::{
    choose_move, minimax, MoveChooser, RandomChooser, SearchChooser, SearchParams, SearchResult,
    SearchStats, Searcher, MATE_SCORE,
};
pub use state::Board;
pub use types::{
    Bitboard, BitboardIter, CastlingRights, Color, Move, MoveList, MoveListIntoIter, Piece, Square,
};

pub(crate) use types::PROMOTION_PIECES;
