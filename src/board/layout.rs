//! Fixed-width text layout of a position.
//!
//! A layout is 64 characters, one per square, starting at a8 and running
//! rank by rank down to h1. Uppercase letters are White pieces, lowercase
//! letters Black pieces and `.` an empty square. Any other character,
//! whitespace included, is rejected. The eight-line `Display` output parses
//! back through `from_layout_lines`.

use std::fmt;

use super::error::LayoutError;
use super::{Board, Color, Piece, Square};

impl Board {
    /// Build a position from a 64-square layout string.
    ///
    /// The result has no castling rights and no en-passant target.
    ///
    /// # Example
    /// ```
    /// use minimax_chess::board::{Board, Color};
    ///
    /// let layout = concat!(
    ///     "....k...", "........", "...RQQ..", "........",
    ///     "........", "........", "........", ".......K",
    /// );
    /// let board = Board::from_layout(layout, Color::Black).unwrap();
    /// assert!(board.is_checkmate(Color::Black));
    /// ```
    pub fn from_layout(layout: &str, side_to_move: Color) -> Result<Self, LayoutError> {
        let len = layout.chars().count();
        if len != 64 {
            return Err(LayoutError::InvalidLength { len });
        }

        let mut board = Board::empty(side_to_move);
        for (index, c) in layout.chars().enumerate() {
            if c == '.' {
                continue;
            }
            let piece = Piece::from_char(c).ok_or(LayoutError::InvalidPiece { char: c, index })?;
            let color = if c.is_ascii_uppercase() {
                Color::White
            } else {
                Color::Black
            };
            let rank = 7 - (index / 8) as u8;
            let file = (index % 8) as u8;
            board.set_piece(Square::at(rank, file), color, piece);
        }

        for color in Color::BOTH {
            let count = board.pieces(color, Piece::King).popcount();
            if count > 1 {
                return Err(LayoutError::TooManyKings { color, count });
            }
        }
        Ok(board)
    }

    /// Parse the eight-line form written by `Display`. Line breaks are
    /// dropped; the rest must be a valid layout.
    pub fn from_layout_lines(text: &str, side_to_move: Color) -> Result<Self, LayoutError> {
        let layout: String = text.chars().filter(|c| !matches!(c, '\n' | '\r')).collect();
        Board::from_layout(&layout, side_to_move)
    }
}

/// Eight lines of eight characters, rank 8 first, in layout notation.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8u8).rev() {
            for file in 0..8u8 {
                let c = self
                    .piece_at(Square::at(rank, file))
                    .map_or('.', |(color, piece)| piece.to_fen_char(color));
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
