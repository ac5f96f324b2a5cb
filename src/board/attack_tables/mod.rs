//! Attack generation.
//!
//! Pure functions from a set of attackers (and, for sliders, the board
//! occupancy) to the set of squares they attack. Leapers are computed
//! set-wise with masked shifts; sliders walk precomputed rays and stop at
//! the first occupied square, which is included.

mod tables;

pub(crate) use tables::{castle_path, CastlePath};

use tables::{BETWEEN, DIAGONAL, ORTHOGONAL, RAYS};

use super::{Bitboard, Color, Square};

const NOT_FILE_A: u64 = !Bitboard::FILE_A.0;
const NOT_FILE_H: u64 = !Bitboard::FILE_H.0;
const NOT_FILE_AB: u64 = !(Bitboard::FILE_A.0 | Bitboard::FILE_B.0);
const NOT_FILE_GH: u64 = !(Bitboard::FILE_G.0 | Bitboard::FILE_H.0);

/// Which rays a sliding piece travels along.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slider {
    /// Ranks and files (rook, queen)
    Orthogonal,
    /// Diagonals (bishop, queen)
    Diagonal,
}

/// Squares attacked diagonally forward by every pawn of `color` in `pawns`.
#[inline]
#[must_use]
pub fn pawn_attacks(color: Color, pawns: Bitboard) -> Bitboard {
    let p = pawns.0;
    match color {
        Color::White => Bitboard(((p << 7) & NOT_FILE_H) | ((p << 9) & NOT_FILE_A)),
        Color::Black => Bitboard(((p >> 9) & NOT_FILE_H) | ((p >> 7) & NOT_FILE_A)),
    }
}

/// Squares attacked by every knight in `knights`.
#[inline]
#[must_use]
pub fn knight_attacks(knights: Bitboard) -> Bitboard {
    let n = knights.0;
    let one = ((n << 1) & NOT_FILE_A) | ((n >> 1) & NOT_FILE_H);
    let two = ((n << 2) & NOT_FILE_AB) | ((n >> 2) & NOT_FILE_GH);
    Bitboard((one << 16) | (one >> 16) | (two << 8) | (two >> 8))
}

/// Squares adjacent to any king in `kings`.
#[inline]
#[must_use]
pub fn king_attacks(kings: Bitboard) -> Bitboard {
    let sideways = kings.shift_east() | kings.shift_west();
    let row = kings | sideways;
    sideways | row.shift_north() | row.shift_south()
}

/// Squares attacked by every slider in `pieces` along the given rays.
#[must_use]
pub fn sliding_attacks(pieces: Bitboard, occupancy: Bitboard, slider: Slider) -> Bitboard {
    let dirs = match slider {
        Slider::Orthogonal => ORTHOGONAL,
        Slider::Diagonal => DIAGONAL,
    };
    let mut attacks = Bitboard::EMPTY;
    for from in pieces {
        for dir in dirs {
            attacks |= ray_attacks(dir, from, occupancy);
        }
    }
    attacks
}

/// Ray from `from` in direction `dir`, cut after the first blocker.
#[inline]
fn ray_attacks(dir: usize, from: Square, occupancy: Bitboard) -> Bitboard {
    let ray = RAYS[dir][from.index() as usize];
    let blockers = ray & occupancy;
    if blockers.is_empty() {
        return ray;
    }
    // Directions 0..4 walk toward higher indices, so the nearest blocker
    // is the lowest bit; the rest walk downward and want the highest.
    let nearest = if dir < 4 {
        blockers.0.trailing_zeros()
    } else {
        63 - blockers.0.leading_zeros()
    };
    ray.without(RAYS[dir][nearest as usize])
}

/// Squares strictly between `a` and `b` if they share a rank, file or
/// diagonal; empty otherwise.
#[inline]
#[must_use]
pub fn between(a: Square, b: Square) -> Bitboard {
    BETWEEN[a.index() as usize][b.index() as usize]
}

/// Union of every square attacked by the pieces in `sets`
/// (indexed pawn, knight, bishop, rook, queen, king).
#[must_use]
pub fn attacked_squares(color: Color, sets: &[Bitboard; 6], occupancy: Bitboard) -> Bitboard {
    let [pawns, knights, bishops, rooks, queens, kings] = *sets;
    pawn_attacks(color, pawns)
        | knight_attacks(knights)
        | king_attacks(kings)
        | sliding_attacks(rooks | queens, occupancy, Slider::Orthogonal)
        | sliding_attacks(bishops | queens, occupancy, Slider::Diagonal)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    fn bb(names: &[&str]) -> Bitboard {
        names.iter().map(|n| sq(n)).collect()
    }

    #[test]
    fn test_pawn_attacks_respect_edges() {
        assert_eq!(pawn_attacks(Color::White, bb(&["e2"])), bb(&["d3", "f3"]));
        assert_eq!(pawn_attacks(Color::White, bb(&["a2"])), bb(&["b3"]));
        assert_eq!(pawn_attacks(Color::White, bb(&["h2"])), bb(&["g3"]));
        assert_eq!(pawn_attacks(Color::Black, bb(&["a7"])), bb(&["b6"]));
        assert_eq!(pawn_attacks(Color::Black, bb(&["h7"])), bb(&["g6"]));
        assert_eq!(pawn_attacks(Color::White, bb(&["c8"])), Bitboard::EMPTY);
    }

    #[test]
    fn test_knight_attacks() {
        assert_eq!(knight_attacks(bb(&["a1"])), bb(&["b3", "c2"]));
        assert_eq!(knight_attacks(bb(&["h8"])), bb(&["g6", "f7"]));
        assert_eq!(knight_attacks(bb(&["d4"])).popcount(), 8);
        assert_eq!(knight_attacks(bb(&["g2"])), bb(&["e1", "e3", "f4", "h4"]));
    }

    #[test]
    fn test_knight_attacks_union() {
        let both = knight_attacks(bb(&["b1", "g1"]));
        assert_eq!(both, bb(&["a3", "c3", "d2", "f3", "h3", "e2"]));
    }

    #[test]
    fn test_king_attacks() {
        assert_eq!(king_attacks(bb(&["a1"])), bb(&["a2", "b1", "b2"]));
        assert_eq!(king_attacks(bb(&["e4"])).popcount(), 8);
        assert_eq!(king_attacks(bb(&["h5"])).popcount(), 5);
    }

    #[test]
    fn test_rook_attacks_empty_board() {
        let attacks = sliding_attacks(bb(&["e4"]), Bitboard::EMPTY, Slider::Orthogonal);
        let expected = (Bitboard::rank_mask(3) | Bitboard::file_mask(4)).without(bb(&["e4"]));
        assert_eq!(attacks, expected);
    }

    #[test]
    fn test_bishop_attacks_empty_board() {
        let attacks = sliding_attacks(bb(&["e4"]), Bitboard::EMPTY, Slider::Diagonal);
        assert!(attacks.contains(sq("b1")));
        assert!(attacks.contains(sq("h7")));
        assert!(attacks.contains(sq("h1")));
        assert!(attacks.contains(sq("a8")));
        assert!(!attacks.contains(sq("e4")));
        assert_eq!(attacks.popcount(), 13);
    }

    #[test]
    fn test_rook_attacks_with_blockers() {
        let blockers = bb(&["e6", "c4"]);
        let attacks = sliding_attacks(bb(&["e4"]), blockers, Slider::Orthogonal);
        assert!(attacks.contains(sq("e6")));
        assert!(!attacks.contains(sq("e7")));
        assert!(attacks.contains(sq("c4")));
        assert!(!attacks.contains(sq("b4")));
        assert!(attacks.contains(sq("h4")));
        assert!(attacks.contains(sq("e1")));
    }

    #[test]
    fn test_bishop_attacks_with_blockers() {
        let blockers = bb(&["g6", "c2"]);
        let attacks = sliding_attacks(bb(&["e4"]), blockers, Slider::Diagonal);
        assert!(attacks.contains(sq("g6")));
        assert!(!attacks.contains(sq("h7")));
        assert!(attacks.contains(sq("c2")));
        assert!(!attacks.contains(sq("b1")));
    }

    #[test]
    fn test_rook_cannot_jump_over_piece() {
        let attacks = sliding_attacks(bb(&["a1"]), bb(&["a1", "a2"]), Slider::Orthogonal);
        assert!(attacks.contains(sq("a2")));
        assert!(!attacks.contains(sq("a3")));
        assert!(!attacks.contains(sq("a8")));
    }

    #[test]
    fn test_between() {
        assert_eq!(between(sq("a1"), sq("a4")), bb(&["a2", "a3"]));
        assert_eq!(between(sq("h8"), sq("e5")), bb(&["g7", "f6"]));
        assert_eq!(between(sq("e1"), sq("a1")), bb(&["b1", "c1", "d1"]));
        assert_eq!(between(sq("a1"), sq("b3")), Bitboard::EMPTY);
        assert_eq!(between(sq("d4"), sq("e5")), Bitboard::EMPTY);
    }

    #[test]
    fn test_castle_paths() {
        let wk = castle_path(Color::White, true);
        assert_eq!(wk.between, bb(&["f1", "g1"]));
        assert_eq!(wk.king_path, bb(&["e1", "f1", "g1"]));
        let bq = castle_path(Color::Black, false);
        assert_eq!(bq.between, bb(&["b8", "c8", "d8"]));
        assert_eq!(bq.king_path, bb(&["c8", "d8", "e8"]));
        assert_eq!(bq.rook_to, sq("d8"));
    }

    #[test]
    fn test_attacked_squares_union() {
        let mut sets = [Bitboard::EMPTY; 6];
        sets[0] = bb(&["e2"]);
        sets[5] = bb(&["e1"]);
        let occupancy = bb(&["e2", "e1"]);
        let attacked = attacked_squares(Color::White, &sets, occupancy);
        assert!(attacked.contains(sq("d3")));
        assert!(attacked.contains(sq("f3")));
        assert!(attacked.contains(sq("d1")));
        assert!(attacked.contains(sq("e2")));
        assert!(!attacked.contains(sq("e3")));
    }
}
