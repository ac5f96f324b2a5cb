//! Move application.
//!
//! `apply_move` checks a move against the geometry of the moving piece and
//! either performs it completely or leaves the board untouched. It does not
//! look at the mover's own king and does not pass the turn; `make_move`
//! adds both.

use log::trace;

use super::attack_tables::{between, castle_path, CastlePath};
use super::{Board, CastlingRights, Color, Move, Piece, Square};

/// What a validated move does beyond moving one piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Effect {
    Plain,
    DoublePush { passed: Square },
    EnPassant { captured: Square },
    Promotion(Piece),
}

impl Board {
    /// Apply `mv` for the side to move if the moving piece can make it.
    ///
    /// Returns `false` and leaves the board unchanged when the move is not
    /// playable. Check against the mover's own king is not tested and the
    /// side to move is not changed.
    #[must_use]
    pub fn apply_move(&mut self, mv: Move) -> bool {
        let color = self.side_to_move;

        if let Some(path) = self.castle_request(color, mv) {
            if self.can_castle(color, path) {
                self.castle(color, path);
                return true;
            }
        }

        let from = mv.from();
        let to = mv.to();
        let Some(piece) = self.own_piece_at(color, from) else {
            return false;
        };
        if self.occupied_by(color).contains(to) {
            return false;
        }

        let effect = match piece {
            Piece::Pawn => self.pawn_effect(color, mv),
            _ if self.piece_reaches(piece, from, to) => Some(Effect::Plain),
            _ => None,
        };
        let Some(effect) = effect else {
            return false;
        };

        let opponent = color.opponent();
        self.clear_square(to, opponent);
        self.remove_piece(from, color, piece);
        let placed = match effect {
            Effect::Promotion(promoted) => promoted,
            _ => piece,
        };
        self.set_piece(to, color, placed);
        if let Effect::EnPassant { captured } = effect {
            self.remove_piece(captured, opponent, Piece::Pawn);
        }

        if piece == Piece::King {
            self.castling_rights.remove_color(color);
        }
        revoke_corner_rights(&mut self.castling_rights, from, to);

        self.en_passant_target = match effect {
            Effect::DoublePush { passed } => Some(passed),
            _ => None,
        };
        true
    }

    /// Apply `mv`, reject it if it leaves the mover in check, and pass the
    /// turn. Returns `false` with the board unchanged on rejection.
    #[must_use]
    pub fn make_move(&mut self, mv: Move) -> bool {
        match self.after_move(mv) {
            Some(next) => {
                *self = next;
                true
            }
            None => false,
        }
    }

    /// The position after legally playing `mv`, or `None` if `mv` is not
    /// legal here.
    #[must_use]
    pub fn after_move(&self, mv: Move) -> Option<Board> {
        let mover = self.side_to_move;
        let mut next = *self;
        if !next.apply_move(mv) {
            trace!("{mv} rejected: not playable by {mover}");
            return None;
        }
        if next.is_in_check(mover) {
            trace!("{mv} rejected: leaves {mover} in check");
            return None;
        }
        next.side_to_move = mover.opponent();
        Some(next)
    }

    /// Returns true if the destination of `mv` holds an enemy piece.
    #[must_use]
    pub fn is_capture(&self, mv: Move) -> bool {
        self.occupied_by(self.side_to_move.opponent())
            .contains(mv.to())
    }

    fn own_piece_at(&self, color: Color, sq: Square) -> Option<Piece> {
        Piece::ALL
            .into_iter()
            .find(|&piece| self.pieces(color, piece).contains(sq))
    }

    /// Matches a king's two-square move from its home square to a castling
    /// destination.
    fn castle_request(&self, color: Color, mv: Move) -> Option<&'static CastlePath> {
        [true, false]
            .into_iter()
            .map(|kingside| castle_path(color, kingside))
            .find(|path| mv.from() == path.king_from && mv.to() == path.king_to)
            .filter(|path| self.pieces(color, Piece::King).contains(path.king_from))
    }

    pub(crate) fn can_castle(&self, color: Color, path: &CastlePath) -> bool {
        let kingside = path.rook_from.file() == 7;
        self.castling_rights.has(color, kingside)
            && self.pieces(color, Piece::Rook).contains(path.rook_from)
            && !self.occupied().intersects(path.between)
            && !self.is_attacked(path.king_path, color.opponent())
    }

    fn castle(&mut self, color: Color, path: &CastlePath) {
        self.remove_piece(path.king_from, color, Piece::King);
        self.set_piece(path.king_to, color, Piece::King);
        self.remove_piece(path.rook_from, color, Piece::Rook);
        self.set_piece(path.rook_to, color, Piece::Rook);
        self.castling_rights.remove_color(color);
        self.en_passant_target = None;
    }

    fn pawn_effect(&self, color: Color, mv: Move) -> Option<Effect> {
        let (from, to) = (mv.from(), mv.to());
        let dir = color.pawn_direction();
        let dr = to.rank() as i8 - from.rank() as i8;
        let df = to.file() as i8 - from.file() as i8;
        let occupied = self.occupied();

        let effect = if df == 0 && dr == dir && !occupied.contains(to) {
            Effect::Plain
        } else if df == 0
            && dr == 2 * dir
            && from.rank() == color.pawn_start_rank()
            && !occupied.contains(to)
            && !occupied.intersects(between(from, to))
        {
            let passed = from.offset(dir, 0)?;
            Effect::DoublePush { passed }
        } else if df.abs() == 1 && dr == dir {
            let enemy = color.opponent();
            if self.occupied_by(enemy).contains(to) {
                Effect::Plain
            } else {
                let captured = Square::at(from.rank(), to.file());
                if self.en_passant_target != Some(to)
                    || !self.pieces(enemy, Piece::Pawn).contains(captured)
                {
                    return None;
                }
                Effect::EnPassant { captured }
            }
        } else {
            return None;
        };

        if to.rank() != color.pawn_promotion_rank() {
            return Some(effect);
        }
        let promoted = mv.promotion().unwrap_or(Piece::Queen);
        promoted
            .is_promotion_target()
            .then_some(Effect::Promotion(promoted))
    }

    /// Geometry test for every piece except the pawn.
    fn piece_reaches(&self, piece: Piece, from: Square, to: Square) -> bool {
        let dr = (to.rank() as i8 - from.rank() as i8).abs();
        let df = (to.file() as i8 - from.file() as i8).abs();
        let straight = (dr == 0) != (df == 0);
        let diagonal = dr == df && dr != 0;
        let clear = || !self.occupied().intersects(between(from, to));

        match piece {
            Piece::Knight => (dr, df) == (1, 2) || (dr, df) == (2, 1),
            Piece::Bishop => diagonal && clear(),
            Piece::Rook => straight && clear(),
            Piece::Queen => (straight || diagonal) && clear(),
            Piece::King => dr.max(df) == 1,
            Piece::Pawn => false,
        }
    }
}

/// Any move touching a rook's home corner ends castling on that side.
fn revoke_corner_rights(rights: &mut CastlingRights, from: Square, to: Square) {
    for color in Color::BOTH {
        for kingside in [true, false] {
            let corner = castle_path(color, kingside).rook_from;
            if from == corner || to == corner {
                rights.remove(color, kingside);
            }
        }
    }
}
