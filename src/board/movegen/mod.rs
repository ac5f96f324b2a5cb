//! Move generation and terminal-state detection.
//!
//! Pseudo-legal moves follow piece geometry only. Legal moves are the
//! pseudo-legal moves that survive a trial application on a copy of the
//! board without leaving the mover's king attacked.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::{Board, Color, MoveList};

/// Outcome of a position for the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Checkmate { winner: Color },
    Stalemate,
    InsufficientMaterial,
}

impl Board {
    /// Candidate moves for the side to move: pawns, knights, bishops, rooks,
    /// queens, then king steps and castling.
    #[must_use]
    pub fn pseudo_legal_moves(&self) -> MoveList {
        let color = self.side_to_move;
        let mut moves = MoveList::new();
        self.generate_pawn_moves(color, &mut moves);
        self.generate_knight_moves(color, &mut moves);
        self.generate_slider_moves(color, &mut moves);
        self.generate_king_moves(color, &mut moves);
        moves
    }

    /// Pseudo-legal moves that apply cleanly and do not leave the mover in
    /// check, in generation order.
    #[must_use]
    pub fn legal_moves(&self) -> MoveList {
        let mut legal = MoveList::new();
        legal.extend(
            self.pseudo_legal_moves()
                .into_iter()
                .filter(|&mv| self.after_move(mv).is_some()),
        );
        legal
    }

    /// Returns true if `color`, were it to move, is in check with no legal
    /// move.
    #[must_use]
    pub fn is_checkmate(&self, color: Color) -> bool {
        let view = self.with_side_to_move(color);
        view.is_in_check(color) && view.legal_moves().is_empty()
    }

    /// Returns true if `color`, were it to move, is not in check and has no
    /// legal move.
    #[must_use]
    pub fn is_stalemate(&self, color: Color) -> bool {
        let view = self.with_side_to_move(color);
        !view.is_in_check(color) && view.legal_moves().is_empty()
    }

    /// Classify the position for the side to move.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        let color = self.side_to_move;
        if self.legal_moves().is_empty() {
            if self.is_in_check(color) {
                GameStatus::Checkmate {
                    winner: color.opponent(),
                }
            } else {
                GameStatus::Stalemate
            }
        } else if self.is_insufficient_material() {
            GameStatus::InsufficientMaterial
        } else {
            GameStatus::Ongoing
        }
    }

    /// Count leaf nodes of the legal move tree to `depth`.
    #[must_use]
    pub fn perft(&self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.legal_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        moves
            .into_iter()
            .filter_map(|mv| self.after_move(mv))
            .map(|child| child.perft(depth - 1))
            .sum()
    }

    fn with_side_to_move(&self, color: Color) -> Board {
        let mut view = *self;
        view.side_to_move = color;
        view
    }
}
