//! Table-driven tests over the positions in `data/positions.json`.

use serde::Deserialize;

use minimax_chess::board::{Board, Color, GameStatus};

#[derive(Debug, Deserialize)]
struct Positions {
    perft: Vec<PerftCase>,
    status: Vec<StatusCase>,
}

#[derive(Debug, Deserialize)]
struct PerftCase {
    name: String,
    fen: String,
    nodes: Vec<u64>,
}

#[derive(Debug, Deserialize)]
struct StatusCase {
    name: String,
    layout: String,
    side: String,
    status: ExpectedStatus,
}

#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
enum ExpectedStatus {
    Ongoing,
    WhiteMated,
    BlackMated,
    Stalemate,
    InsufficientMaterial,
}

impl From<ExpectedStatus> for GameStatus {
    fn from(expected: ExpectedStatus) -> Self {
        match expected {
            ExpectedStatus::Ongoing => GameStatus::Ongoing,
            ExpectedStatus::WhiteMated => GameStatus::Checkmate {
                winner: Color::Black,
            },
            ExpectedStatus::BlackMated => GameStatus::Checkmate {
                winner: Color::White,
            },
            ExpectedStatus::Stalemate => GameStatus::Stalemate,
            ExpectedStatus::InsufficientMaterial => GameStatus::InsufficientMaterial,
        }
    }
}

fn load() -> Positions {
    serde_json::from_str(include_str!("data/positions.json")).expect("valid position data")
}

#[test]
fn perft_matches_reference_counts() {
    for case in load().perft {
        let board = Board::from_fen(&case.fen).unwrap();
        for (depth, &expected) in case.nodes.iter().enumerate() {
            let depth = depth + 1;
            assert_eq!(
                board.perft(depth),
                expected,
                "{} perft({depth})",
                case.name
            );
        }
    }
}

#[test]
fn fen_round_trips() {
    for case in load().perft {
        let board = Board::from_fen(&case.fen).unwrap();
        let again = Board::from_fen(&board.to_fen()).unwrap();
        assert_eq!(board, again, "{}", case.name);
    }
}

#[test]
fn status_matches_expected() {
    for case in load().status {
        let side = match case.side.as_str() {
            "w" => Color::White,
            "b" => Color::Black,
            other => panic!("{}: bad side {other}", case.name),
        };
        let board = Board::from_layout(&case.layout, side).unwrap();
        assert_eq!(board.status(), case.status.into(), "{}", case.name);

        let mated = matches!(board.status(), GameStatus::Checkmate { .. });
        assert_eq!(board.is_checkmate(side), mated, "{}", case.name);
    }
}
