use super::super::attack_tables::pawn_attacks;
use super::super::{Bitboard, Board, Color, Move, MoveList, Piece, Square, PROMOTION_PIECES};

impl Board {
    /// Pushes, double pushes, diagonal captures and en-passant captures for
    /// every pawn of `color`. Moves onto the last rank are emitted once per
    /// promotion piece.
    pub(crate) fn generate_pawn_moves(&self, color: Color, moves: &mut MoveList) {
        let dir = color.pawn_direction();
        let occupied = self.occupied();
        let mut targets = self.occupied_by(color.opponent());
        if let Some(ep) = self.en_passant_target {
            targets |= Bitboard::from_square(ep);
        }

        for from in self.pieces(color, Piece::Pawn) {
            if let Some(one) = from.offset(dir, 0) {
                if !occupied.contains(one) {
                    push_pawn_move(color, from, one, moves);
                    if from.rank() == color.pawn_start_rank() {
                        if let Some(two) = one.offset(dir, 0) {
                            if !occupied.contains(two) {
                                moves.push(Move::new(from, two));
                            }
                        }
                    }
                }
            }

            let captures = pawn_attacks(color, Bitboard::from_square(from)) & targets;
            for to in captures {
                push_pawn_move(color, from, to, moves);
            }
        }
    }
}

fn push_pawn_move(color: Color, from: Square, to: Square, moves: &mut MoveList) {
    if to.rank() == color.pawn_promotion_rank() {
        for promo in PROMOTION_PIECES {
            moves.push(Move::with_promotion(from, to, promo));
        }
    } else {
        moves.push(Move::new(from, to));
    }
}
