//! Move ordering for search.

use super::super::{Board, Move};

/// Legal moves paired with the positions they lead to, captures first.
///
/// Within each group the generator's order is kept, so ordering never
/// changes which of several equally scored moves is found first.
pub(crate) fn ordered_children(board: &Board) -> Vec<(Move, Board)> {
    let mut captures = Vec::new();
    let mut quiet = Vec::new();
    for mv in board.pseudo_legal_moves() {
        let Some(child) = board.after_move(mv) else {
            continue;
        };
        if board.is_capture(mv) {
            captures.push((mv, child));
        } else {
            quiet.push((mv, child));
        }
    }
    captures.append(&mut quiet);
    captures
}
