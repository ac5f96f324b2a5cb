//! Fluent builder for constructing chess positions.
//!
//! A builder starts from the two kings and the side to move; every other
//! piece set, castling flag and the en-passant target are optional.
//!
//! # Example
//! ```
//! use minimax_chess::board::{Bitboard, BoardBuilder, Color, Piece, Square};
//!
//! let e1: Square = "e1".parse().unwrap();
//! let e8: Square = "e8".parse().unwrap();
//! let board = BoardBuilder::new(e1, e8, Color::White)
//!     .pieces(Color::White, Piece::Pawn, Bitboard::RANK_2)
//!     .castle_kingside(Color::White)
//!     .build();
//! assert_eq!(board.piece_count(), 10);
//! ```

use super::{Bitboard, Board, CastlingRights, Color, Piece, Square};

/// A fluent builder for constructing `Board` positions.
///
/// Later placements win: putting a piece on a square clears whatever stood
/// there, so the built board never has two pieces on one square. No other
/// consistency checks are made.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    board: Board,
}

impl BoardBuilder {
    /// Start a position holding only the two kings.
    #[must_use]
    pub fn new(white_king: Square, black_king: Square, side_to_move: Color) -> Self {
        let mut board = Board::empty(side_to_move);
        board.set_piece(white_king, Color::White, Piece::King);
        board.clear_square(black_king, Color::White);
        board.set_piece(black_king, Color::Black, Piece::King);
        BoardBuilder { board }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        BoardBuilder {
            board: Board::new(),
        }
    }

    /// Replace the whole set of `color`'s `piece`s.
    ///
    /// A king set must hold at most one square; use `piece` to move a king.
    #[must_use]
    pub fn pieces(mut self, color: Color, piece: Piece, squares: Bitboard) -> Self {
        for c in Color::BOTH {
            for p in Piece::ALL {
                self.board.pieces[c.index()][p.index()] &= !squares;
            }
        }
        self.board.pieces[color.index()][piece.index()] = squares;
        self
    }

    /// Place a piece on the board. Placing a king moves that side's king.
    #[must_use]
    pub fn piece(self, square: Square, color: Color, piece: Piece) -> Self {
        let placed = Bitboard::from_square(square);
        let set = match piece {
            Piece::King => placed,
            _ => self.board.pieces(color, piece) | placed,
        };
        self.pieces(color, piece, set)
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        for c in Color::BOTH {
            self.board.clear_square(square, c);
        }
        self
    }

    /// Set the side to move.
    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.board.side_to_move = color;
        self
    }

    /// Set castling rights from a `CastlingRights` value.
    #[must_use]
    pub const fn castling(mut self, rights: CastlingRights) -> Self {
        self.board.castling_rights = rights;
        self
    }

    /// Enable kingside castling for a color.
    #[must_use]
    pub fn castle_kingside(mut self, color: Color) -> Self {
        self.board.castling_rights.set(color, true);
        self
    }

    /// Enable queenside castling for a color.
    #[must_use]
    pub fn castle_queenside(mut self, color: Color) -> Self {
        self.board.castling_rights.set(color, false);
        self
    }

    /// Disable all castling rights.
    #[must_use]
    pub const fn no_castling_rights(mut self) -> Self {
        self.board.castling_rights = CastlingRights::none();
        self
    }

    /// Set the en passant target square.
    #[must_use]
    pub const fn en_passant(mut self, target: Square) -> Self {
        self.board.en_passant_target = Some(target);
        self
    }

    /// Build the board.
    #[must_use]
    pub const fn build(self) -> Board {
        self.board
    }
}
