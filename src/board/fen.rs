//! FEN import and export, and move parsing against a position.

use super::error::{FenError, MoveParseError};
use super::{Board, CastlingRights, Color, Move, Piece, Square};

impl Board {
    /// Parse a board position from FEN notation.
    ///
    /// The halfmove and fullmove counters are accepted but not kept.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        let side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };
        let mut board = Board::empty(side_to_move);

        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::InvalidRankCount { found: ranks.len() });
        }
        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - rank_idx as u8;
            let mut file = 0usize;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    file += skip as usize;
                    continue;
                }
                let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                if file >= 8 {
                    return Err(FenError::InvalidFileCount {
                        rank: rank_idx,
                        files: file + 1,
                    });
                }
                let color = if c.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                board.set_piece(Square::at(rank, file as u8), color, piece);
                file += 1;
            }
            if file != 8 {
                return Err(FenError::InvalidFileCount {
                    rank: rank_idx,
                    files: file,
                });
            }
        }

        let mut rights = CastlingRights::none();
        for c in parts[2].chars() {
            match c {
                'K' => rights.set(Color::White, true),
                'Q' => rights.set(Color::White, false),
                'k' => rights.set(Color::Black, true),
                'q' => rights.set(Color::Black, false),
                '-' => {}
                _ => return Err(FenError::InvalidCastling { char: c }),
            }
        }
        board.castling_rights = rights;

        board.en_passant_target = match parts[3] {
            "-" => None,
            ep => Some(ep.parse().map_err(|_| FenError::InvalidEnPassant {
                found: ep.to_string(),
            })?),
        };

        Ok(board)
    }

    /// Convert the board position to FEN notation.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for rank in (0..8u8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8u8 {
                if let Some((color, piece)) = self.piece_at(Square::at(rank, file)) {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(piece.to_fen_char(color));
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let active = match self.side_to_move {
            Color::White => "w",
            Color::Black => "b",
        };
        let ep = self
            .en_passant_target
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{} {} {} {} 0 1",
            rows.join("/"),
            active,
            self.castling_rights,
            ep
        )
    }

    /// Parse a move in coordinate notation (e.g., "e2e4", "e7e8q") and
    /// check it against the legal moves of this position.
    ///
    /// A promotion without a piece letter is read as a queen promotion.
    ///
    /// # Example
    /// ```
    /// use minimax_chess::board::Board;
    ///
    /// let board = Board::new();
    /// let mv = board.parse_move("e2e4").unwrap();
    /// assert_eq!(mv.to_string(), "e2e4");
    /// assert!(board.parse_move("e2e5").is_err());
    /// ```
    pub fn parse_move(&self, notation: &str) -> Result<Move, MoveParseError> {
        let parsed: Move = notation.parse()?;
        let wanted = parsed
            .promotion()
            .or_else(|| self.is_promotion_move(parsed).then_some(Piece::Queen));
        self.legal_moves()
            .into_iter()
            .find(|mv| {
                mv.from() == parsed.from() && mv.to() == parsed.to() && mv.promotion() == wanted
            })
            .ok_or_else(|| MoveParseError::IllegalMove {
                notation: notation.to_string(),
            })
    }

    fn is_promotion_move(&self, mv: Move) -> bool {
        let color = self.side_to_move;
        self.pieces(color, Piece::Pawn).contains(mv.from())
            && mv.to().rank() == color.pawn_promotion_rank()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    #[test]
    fn test_start_position_round_trip() {
        let board = Board::from_fen(START_FEN).unwrap();
        assert_eq!(board, Board::new());
        assert_eq!(board.to_fen(), START_FEN);
    }

    #[test]
    fn test_en_passant_and_side() {
        let fen = "rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 3";
        let board = Board::from_fen(fen).unwrap();
        assert_eq!(board.en_passant_target(), Some("d6".parse().unwrap()));
        assert_eq!(board.side_to_move(), Color::White);
        assert_eq!(
            board.to_fen(),
            "rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 1"
        );
    }

    #[test]
    fn test_fen_errors() {
        assert_eq!(
            Board::from_fen("8/8/8 w"),
            Err(FenError::TooFewParts { found: 2 })
        );
        assert_eq!(
            Board::from_fen("8/8/8/8/8/8/8/K1k5 x - -"),
            Err(FenError::InvalidSideToMove {
                found: "x".to_string()
            })
        );
        assert_eq!(
            Board::from_fen("8/8/8/8/8/8/8/K1k4 w - -"),
            Err(FenError::InvalidFileCount { rank: 7, files: 7 })
        );
        assert_eq!(
            Board::from_fen("8/8/8/8/8/8/8/K1z5 w - -"),
            Err(FenError::InvalidPiece { char: 'z' })
        );
        assert_eq!(
            Board::from_fen("8/8/8/8/8/8/8/K1k5 w X -"),
            Err(FenError::InvalidCastling { char: 'X' })
        );
        assert_eq!(
            Board::from_fen("8/8/8/8/8/8/8/K1k5 w - e9"),
            Err(FenError::InvalidEnPassant {
                found: "e9".to_string()
            })
        );
        assert_eq!(
            Board::from_fen("8/8/8/8/8/8/K1k5 w - -"),
            Err(FenError::InvalidRankCount { found: 7 })
        );
    }

    #[test]
    fn test_parse_move_defaults_to_queen_promotion() {
        let board = Board::from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1").unwrap();
        let mv = board.parse_move("a7a8").unwrap();
        assert_eq!(mv.promotion(), Some(Piece::Queen));
        let under = board.parse_move("a7a8n").unwrap();
        assert_eq!(under.promotion(), Some(Piece::Knight));
    }

    #[test]
    fn test_parse_move_rejects_illegal() {
        let board = Board::new();
        assert_eq!(
            board.parse_move("e1e2"),
            Err(MoveParseError::IllegalMove {
                notation: "e1e2".to_string()
            })
        );
        assert!(matches!(
            board.parse_move("e2"),
            Err(MoveParseError::InvalidLength { .. })
        ));
    }
}
