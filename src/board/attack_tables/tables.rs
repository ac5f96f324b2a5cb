//! Process-wide lookup tables, built once on first use.

use once_cell::sync::Lazy;

use super::super::{Bitboard, Color, Square};

/// The eight ray directions as (rank step, file step).
///
/// The first four increase the square index, the last four decrease it.
pub(crate) const DIRECTIONS: [(i8, i8); 8] = [
    (1, 0),   // north
    (0, 1),   // east
    (1, 1),   // north-east
    (1, -1),  // north-west
    (-1, 0),  // south
    (0, -1),  // west
    (-1, -1), // south-west
    (-1, 1),  // south-east
];

pub(crate) const ORTHOGONAL: [usize; 4] = [0, 1, 4, 5];
pub(crate) const DIAGONAL: [usize; 4] = [2, 3, 6, 7];

/// `RAYS[dir][sq]`: every square reached from `sq` walking `dir` on an empty board.
pub(crate) static RAYS: Lazy<[[Bitboard; 64]; 8]> = Lazy::new(|| {
    let mut rays = [[Bitboard::EMPTY; 64]; 8];
    for (dir, &(dr, df)) in DIRECTIONS.iter().enumerate() {
        for idx in 0..64u8 {
            let mut ray = Bitboard::EMPTY;
            let mut cursor = Square::from_index_unchecked(idx).offset(dr, df);
            while let Some(sq) = cursor {
                ray |= Bitboard::from_square(sq);
                cursor = sq.offset(dr, df);
            }
            rays[dir][idx as usize] = ray;
        }
    }
    rays
});

/// `BETWEEN[a][b]`: squares strictly between two squares sharing a rank,
/// file or diagonal. Empty when they are not aligned or are adjacent.
pub(crate) static BETWEEN: Lazy<Box<[[Bitboard; 64]; 64]>> = Lazy::new(|| {
    let mut between = Box::new([[Bitboard::EMPTY; 64]; 64]);
    for &(dr, df) in &DIRECTIONS {
        for from in 0..64u8 {
            let mut path = Bitboard::EMPTY;
            let mut cursor = Square::from_index_unchecked(from).offset(dr, df);
            while let Some(sq) = cursor {
                between[from as usize][sq.index() as usize] = path;
                path |= Bitboard::from_square(sq);
                cursor = sq.offset(dr, df);
            }
        }
    }
    between
});

/// Fixed squares involved in one castling move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct CastlePath {
    pub king_from: Square,
    pub king_to: Square,
    pub rook_from: Square,
    pub rook_to: Square,
    /// Squares strictly between king and rook; must be empty.
    pub between: Bitboard,
    /// King's start, transit and destination squares; must not be attacked.
    pub king_path: Bitboard,
}

const WHITE_KINGSIDE: CastlePath = CastlePath {
    king_from: Square::at(0, 4),
    king_to: Square::at(0, 6),
    rook_from: Square::at(0, 7),
    rook_to: Square::at(0, 5),
    between: Bitboard(0x60),
    king_path: Bitboard(0x70),
};

const WHITE_QUEENSIDE: CastlePath = CastlePath {
    king_from: Square::at(0, 4),
    king_to: Square::at(0, 2),
    rook_from: Square::at(0, 0),
    rook_to: Square::at(0, 3),
    between: Bitboard(0x0E),
    king_path: Bitboard(0x1C),
};

const BLACK_KINGSIDE: CastlePath = CastlePath {
    king_from: Square::at(7, 4),
    king_to: Square::at(7, 6),
    rook_from: Square::at(7, 7),
    rook_to: Square::at(7, 5),
    between: Bitboard(0x60 << 56),
    king_path: Bitboard(0x70 << 56),
};

const BLACK_QUEENSIDE: CastlePath = CastlePath {
    king_from: Square::at(7, 4),
    king_to: Square::at(7, 2),
    rook_from: Square::at(7, 0),
    rook_to: Square::at(7, 3),
    between: Bitboard(0x0E << 56),
    king_path: Bitboard(0x1C << 56),
};

/// Castling geometry for `color` on the king side or queen side.
#[inline]
pub(crate) const fn castle_path(color: Color, kingside: bool) -> &'static CastlePath {
    match (color, kingside) {
        (Color::White, true) => &WHITE_KINGSIDE,
        (Color::White, false) => &WHITE_QUEENSIDE,
        (Color::Black, true) => &BLACK_KINGSIDE,
        (Color::Black, false) => &BLACK_QUEENSIDE,
    }
}
