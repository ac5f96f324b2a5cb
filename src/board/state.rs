use super::{Bitboard, CastlingRights, Color, Piece, Square};

/// A complete chess position: twelve piece sets, the side to move, the
/// castling rights and the en-passant target.
///
/// `Board` is a plain value. Copying it is how move trials are made; there
/// is no undo.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    pub(crate) pieces: [[Bitboard; 6]; 2],
    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_target: Option<Square>,
}

const BACK_RANK: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

impl Board {
    /// The standard starting position, White to move.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty(Color::White);
        for (file, piece) in (0u8..).zip(BACK_RANK) {
            board.set_piece(Square::at(0, file), Color::White, piece);
            board.set_piece(Square::at(7, file), Color::Black, piece);
            board.set_piece(Square::at(1, file), Color::White, Piece::Pawn);
            board.set_piece(Square::at(6, file), Color::Black, Piece::Pawn);
        }
        board.castling_rights = CastlingRights::all();
        board
    }

    pub(crate) const fn empty(side_to_move: Color) -> Self {
        Board {
            pieces: [[Bitboard::EMPTY; 6]; 2],
            side_to_move,
            castling_rights: CastlingRights::none(),
            en_passant_target: None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    #[must_use]
    pub const fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    /// Square a pawn passed over on the previous double step, if any.
    #[inline]
    #[must_use]
    pub const fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    /// The set of `color`'s pieces of kind `piece`.
    #[inline]
    #[must_use]
    pub const fn pieces(&self, color: Color, piece: Piece) -> Bitboard {
        self.pieces[color.index()][piece.index()]
    }

    #[inline]
    #[must_use]
    pub fn occupied_by(&self, color: Color) -> Bitboard {
        self.pieces[color.index()]
            .iter()
            .fold(Bitboard::EMPTY, |acc, &bb| acc | bb)
    }

    #[inline]
    #[must_use]
    pub fn occupied(&self) -> Bitboard {
        self.occupied_by(Color::White) | self.occupied_by(Color::Black)
    }

    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        for color in Color::BOTH {
            for piece in Piece::ALL {
                if self.pieces(color, piece).contains(sq) {
                    return Some((color, piece));
                }
            }
        }
        None
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        !self.occupied().contains(sq)
    }

    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces(color, Piece::King).lsb()
    }

    /// Total number of pieces on the board, kings included.
    #[must_use]
    pub fn piece_count(&self) -> u32 {
        self.occupied().popcount()
    }

    pub(crate) fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        self.pieces[color.index()][piece.index()] |= Bitboard::from_square(sq);
    }

    pub(crate) fn remove_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        self.pieces[color.index()][piece.index()] &= !Bitboard::from_square(sq);
    }

    /// Clears `sq` in every set belonging to `color`.
    pub(crate) fn clear_square(&mut self, sq: Square, color: Color) {
        let mask = !Bitboard::from_square(sq);
        for bb in &mut self.pieces[color.index()] {
            *bb &= mask;
        }
    }

    /// Returns true when neither side can possibly deliver mate: bare kings,
    /// a single minor piece, or one bishop each standing on the same square
    /// color.
    #[must_use]
    pub fn is_insufficient_material(&self) -> bool {
        let heavy_or_pawn = [Piece::Pawn, Piece::Rook, Piece::Queen];
        if Color::BOTH
            .iter()
            .any(|&c| heavy_or_pawn.iter().any(|&p| self.pieces(c, p).any()))
        {
            return false;
        }

        let white_knights = self.pieces(Color::White, Piece::Knight).popcount();
        let black_knights = self.pieces(Color::Black, Piece::Knight).popcount();
        let white_bishops = self.pieces(Color::White, Piece::Bishop).popcount();
        let black_bishops = self.pieces(Color::Black, Piece::Bishop).popcount();

        let total_minors = white_knights + black_knights + white_bishops + black_bishops;
        if total_minors <= 1 {
            return true;
        }

        if white_knights == 0 && black_knights == 0 && white_bishops == 1 && black_bishops == 1 {
            return bishops_all_same_color(
                self.pieces(Color::White, Piece::Bishop) | self.pieces(Color::Black, Piece::Bishop),
            );
        }

        false
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

fn bishops_all_same_color(bishops: Bitboard) -> bool {
    !bishops.intersects(Bitboard::LIGHT_SQUARES) || !bishops.intersects(Bitboard::DARK_SQUARES)
}
