use super::super::attack_tables::{attacked_squares, castle_path, king_attacks};
use super::super::{Bitboard, Board, Color, Move, MoveList, Piece, Square};

impl Board {
    /// King steps plus castling candidates. A castling candidate only needs
    /// the right, the rook in its corner and empty squares in between;
    /// attacked squares are checked when the move is applied.
    pub(crate) fn generate_king_moves(&self, color: Color, moves: &mut MoveList) {
        let own = self.occupied_by(color);
        for from in self.pieces(color, Piece::King) {
            let targets = king_attacks(Bitboard::from_square(from)).without(own);
            moves.extend(targets.iter().map(|to| Move::new(from, to)));
        }

        let king = self.pieces(color, Piece::King);
        for kingside in [true, false] {
            let path = castle_path(color, kingside);
            if self.castling_rights.has(color, kingside)
                && king.contains(path.king_from)
                && self.pieces(color, Piece::Rook).contains(path.rook_from)
                && !self.occupied().intersects(path.between)
            {
                moves.push(Move::new(path.king_from, path.king_to));
            }
        }
    }

    /// Every square attacked by `color`'s pieces.
    #[must_use]
    pub fn attacks_by(&self, color: Color) -> Bitboard {
        attacked_squares(color, &self.pieces[color.index()], self.occupied())
    }

    /// Returns true if any square in `squares` is attacked by `attacker`.
    #[must_use]
    pub fn is_attacked(&self, squares: Bitboard, attacker: Color) -> bool {
        self.attacks_by(attacker).intersects(squares)
    }

    #[must_use]
    pub fn is_square_attacked(&self, square: Square, attacker: Color) -> bool {
        self.is_attacked(Bitboard::from_square(square), attacker)
    }

    /// Returns true if `color`'s king is attacked. A side without a king is
    /// never in check.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.is_attacked(self.pieces(color, Piece::King), color.opponent())
    }
}
