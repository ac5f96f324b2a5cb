use super::super::attack_tables::{sliding_attacks, Slider};
use super::super::{Bitboard, Board, Color, Move, MoveList, Piece};

impl Board {
    /// Bishop, rook and queen moves for `color`, in that order.
    pub(crate) fn generate_slider_moves(&self, color: Color, moves: &mut MoveList) {
        let own = self.occupied_by(color);
        let occupied = self.occupied();

        for piece in [Piece::Bishop, Piece::Rook, Piece::Queen] {
            for from in self.pieces(color, piece) {
                let origin = Bitboard::from_square(from);
                let mut targets = Bitboard::EMPTY;
                if matches!(piece, Piece::Rook | Piece::Queen) {
                    targets |= sliding_attacks(origin, occupied, Slider::Orthogonal);
                }
                if matches!(piece, Piece::Bishop | Piece::Queen) {
                    targets |= sliding_attacks(origin, occupied, Slider::Diagonal);
                }
                moves.extend(targets.without(own).iter().map(|to| Move::new(from, to)));
            }
        }
    }
}
