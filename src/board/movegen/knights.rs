use super::super::attack_tables::knight_attacks;
use super::super::{Bitboard, Board, Color, Move, MoveList, Piece};

impl Board {
    pub(crate) fn generate_knight_moves(&self, color: Color, moves: &mut MoveList) {
        let own = self.occupied_by(color);
        for from in self.pieces(color, Piece::Knight) {
            let targets = knight_attacks(Bitboard::from_square(from)).without(own);
            moves.extend(targets.iter().map(|to| Move::new(from, to)));
        }
    }
}
