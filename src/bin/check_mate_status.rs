use std::env;
use std::process;

use minimax_chess::board::{choose_move, Board, Color, GameStatus, SearchParams};

fn usage() -> ! {
    eprintln!("usage: check_mate_status <layout> <w|b> [depth]");
    eprintln!("       check_mate_status --moves <move1> <move2> ...");
    process::exit(2);
}

fn board_from_args(args: &[String]) -> Board {
    if args.first().map(String::as_str) == Some("--moves") {
        let mut board = Board::new();
        for notation in &args[1..] {
            let mv = match board.parse_move(notation) {
                Ok(mv) => mv,
                Err(err) => {
                    eprintln!("{notation}: {err}");
                    process::exit(1);
                }
            };
            if !board.make_move(mv) {
                eprintln!("{notation}: illegal move");
                process::exit(1);
            }
        }
        return board;
    }

    let (Some(layout), Some(side)) = (args.first(), args.get(1)) else {
        usage();
    };
    let side = match side.as_str() {
        "w" => Color::White,
        "b" => Color::Black,
        _ => usage(),
    };
    match Board::from_layout(layout, side) {
        Ok(board) => board,
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        usage();
    }

    let board = board_from_args(&args);
    let depth = if args[0] == "--moves" {
        SearchParams::default().depth
    } else {
        args.get(2)
            .and_then(|d| d.parse().ok())
            .unwrap_or(SearchParams::default().depth)
    };

    let side = board.side_to_move();
    let legal_moves = board.legal_moves();
    print!("{board}");
    println!("side_to_move: {side}");
    println!("legal_moves: {}", legal_moves.len());
    println!("checkmate: {}", board.is_checkmate(side));
    println!("stalemate: {}", board.is_stalemate(side));
    let status = match board.status() {
        GameStatus::Ongoing => "ongoing".to_string(),
        GameStatus::Checkmate { winner } => format!("{winner} wins"),
        GameStatus::Stalemate => "stalemate".to_string(),
        GameStatus::InsufficientMaterial => "insufficient material".to_string(),
    };
    println!("status: {status}");
    for mv in legal_moves.iter() {
        println!("{mv}");
    }
    if let Some(best) = choose_move(&board, depth) {
        println!("best: {best} (depth {depth})");
    }
}
