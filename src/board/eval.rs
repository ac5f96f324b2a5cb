//! Static evaluation.
//!
//! Material plus piece-square bonuses, summed for White and subtracted for
//! Black. Positive scores favour White. The score does not depend on the
//! side to move.

use super::pst::pst_value;
use super::{Board, Color, Piece};

impl Board {
    /// Static score of the position from White's point of view.
    #[must_use]
    pub fn evaluate(&self) -> i32 {
        Color::BOTH
            .iter()
            .map(|&color| color.sign() * self.side_score(color))
            .sum()
    }

    /// Material weight of `color`'s pieces, kings excluded.
    #[must_use]
    pub fn material(&self, color: Color) -> i32 {
        Piece::ALL
            .iter()
            .map(|&piece| self.pieces(color, piece).popcount() as i32 * piece.value())
            .sum()
    }

    fn side_score(&self, color: Color) -> i32 {
        let positional: i32 = Piece::ALL
            .iter()
            .flat_map(|&piece| {
                self.pieces(color, piece)
                    .iter()
                    .map(move |sq| pst_value(color, piece, sq))
            })
            .sum();
        self.material(color) + positional
    }
}
