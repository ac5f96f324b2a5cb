//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `apply.rs` - Move application and castling rules
//! - `movegen.rs` - Move generation counts and perft
//! - `terminal.rs` - Checkmate, stalemate and insufficient material
//! - `search.rs` - Minimax behaviour
//! - `proptest.rs` - Property-based tests

mod movegen;

use crate::board::{Bitboard, Board, Color, Move, Square};

pub(super) fn sq(name: &str) -> Square {
    name.parse().unwrap()
}

pub(super) fn bb(names: &[&str]) -> Bitboard {
    names.iter().map(|name| sq(name)).collect()
}

pub(super) fn mv(notation: &str) -> Move {
    notation.parse().unwrap()
}

/// Board from eight rank strings, rank 8 first.
pub(super) fn layout(ranks: [&str; 8], side: Color) -> Board {
    Board::from_layout(&ranks.concat(), side).unwrap()
}
