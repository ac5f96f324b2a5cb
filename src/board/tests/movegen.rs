//! Move generation tests.

use super::{layout, mv, sq};
use crate::board::{choose_move, Board, Color, GameStatus, Piece};

const EMPTY: &str = "........";

#[test]
fn test_starting_position_has_twenty_moves() {
    let board = Board::new();
    assert_eq!(board.legal_moves().len(), 20);
    assert_eq!(board.pseudo_legal_moves().len(), 20);
}

#[test]
fn test_promotion_fan_out() {
    let board = layout(
        [EMPTY, ".P......", EMPTY, EMPTY, EMPTY, ".k......", EMPTY, ".......K"],
        Color::White,
    );
    let moves = board.legal_moves();
    assert_eq!(moves.len(), 7);
    for piece in [Piece::Queen, Piece::Rook, Piece::Bishop, Piece::Knight] {
        assert!(moves
            .iter()
            .any(|m| m.to() == sq("b8") && m.promotion() == Some(piece)));
    }
}

#[test]
fn test_blocked_promotion_can_still_capture() {
    let board = layout(
        [".rr.....", ".P......", EMPTY, EMPTY, EMPTY, ".k......", EMPTY, ".......K"],
        Color::White,
    );
    let moves = board.legal_moves();
    assert_eq!(moves.len(), 7);
    assert!(moves.iter().all(|m| m.to() != sq("b8")));
}

#[test]
fn test_promotion_push_and_capture() {
    let board = layout(
        ["..r.....", ".P......", EMPTY, EMPTY, EMPTY, ".k......", EMPTY, ".......K"],
        Color::White,
    );
    assert_eq!(board.legal_moves().len(), 11);
}

#[test]
fn test_pawns_are_generated_first() {
    let board = Board::new();
    let moves = board.legal_moves();
    let first_knight = moves
        .iter()
        .position(|m| board.piece_at(m.from()).map(|(_, p)| p) == Some(Piece::Knight))
        .unwrap();
    assert_eq!(first_knight, 16);
    assert!(moves.as_slice()[..16]
        .iter()
        .all(|m| board.piece_at(m.from()) == Some((Color::White, Piece::Pawn))));
}

#[test]
fn test_pseudo_legal_includes_self_check() {
    let board = Board::from_fen("4k3/8/8/8/4r3/8/4N3/4K3 w - - 0 1").unwrap();
    let pseudo = board.pseudo_legal_moves();
    let legal = board.legal_moves();
    assert!(pseudo.contains(mv("e2c3")));
    assert!(!legal.contains(mv("e2c3")));
    assert!(legal.len() < pseudo.len());
}

#[test]
fn test_castling_generated_when_available() {
    let board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    let moves = board.legal_moves();
    assert!(moves.contains(mv("e1g1")));
    assert!(moves.contains(mv("e1c1")));
    assert_eq!(moves.len(), 26);
}

#[test]
fn test_castling_not_generated_through_check() {
    let board = Board::from_fen("4k3/8/8/8/8/8/5r2/R3K2R w KQ - 0 1").unwrap();
    let moves = board.legal_moves();
    assert!(!moves.contains(mv("e1g1")));
    assert!(moves.contains(mv("e1c1")));
}

#[test]
fn test_en_passant_generated() {
    let board =
        Board::from_fen("rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3").unwrap();
    let moves = board.legal_moves();
    assert!(moves.contains(mv("e5f6")));
    assert!(!moves.contains(mv("e5d6")));
}

#[test]
fn test_check_evasions_only() {
    let board = Board::from_fen("4k3/8/8/8/8/8/3q4/4K3 w - - 0 1").unwrap();
    let moves = board.legal_moves();
    assert_eq!(moves.len(), 2);
    assert!(moves.contains(mv("e1d2")));
    assert!(moves.contains(mv("e1f1")));
}

#[test]
fn test_attack_queries() {
    let board = Board::new();
    assert!(board.is_square_attacked(sq("f3"), Color::White));
    assert!(!board.is_square_attacked(sq("e4"), Color::White));
    assert!(board.is_square_attacked(sq("f6"), Color::Black));
    assert!(board.attacks_by(Color::White).contains(sq("d3")));
    assert!(!board.is_in_check(Color::White));
}

#[test]
fn test_crowded_board_generates_every_move() {
    let board = Board::from_layout(
        "kQ.Q..QQQ...Q...Q.Q....QQ....Q.Q...Q...QQ......QQ......Q..QQQQQK",
        Color::White,
    )
    .unwrap();
    let pseudo = board.pseudo_legal_moves();
    assert!(pseudo.len() > 256);
    let legal = board.legal_moves();
    assert!(!legal.is_empty());
    assert!(legal.len() <= pseudo.len());
    assert_eq!(board.status(), GameStatus::Ongoing);
    assert!(choose_move(&board, 1).is_some());
}

#[test]
fn test_perft_starting_position() {
    let board = Board::new();
    assert_eq!(board.perft(0), 1);
    assert_eq!(board.perft(1), 20);
    assert_eq!(board.perft(2), 400);
    assert_eq!(board.perft(3), 8_902);
}

#[test]
fn test_perft_castling_position() {
    let board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    assert_eq!(board.perft(1), 26);
    assert_eq!(board.perft(2), 568);
}

#[test]
fn test_perft_promotion_position() {
    let board = Board::from_fen("n1n5/PPPk4/8/8/8/8/4Kppp/5N1N b - - 0 1").unwrap();
    assert_eq!(board.perft(1), 24);
    assert_eq!(board.perft(2), 496);
}

#[test]
#[ignore] // Slow in debug builds
fn test_perft_kiwipete_depth_three() {
    let board =
        Board::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1")
            .unwrap();
    assert_eq!(board.perft(3), 97_862);
}
