//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! # Example
//! ```
//! use minimax_chess::board::prelude::*;
//!
//! let board = Board::new();
//! assert_eq!(board.side_to_move(), Color::White);
//! ```

pub use super::{
    choose_move, Bitboard, Board, BoardBuilder, CastlingRights, Color, GameStatus, Move,
    MoveChooser, MoveList, Piece, Square,
};
