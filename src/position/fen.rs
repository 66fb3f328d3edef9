//! FEN parsing and formatting, promoted to first-class `Position` methods
//! (spec §6's external-collaborator boundary covers UI/orchestration, not
//! the wire format itself).

use crate::error::FenError;
use crate::position::state::Position;
use crate::position::zobrist::zobrist_from_scratch;
use crate::types::{Color, PieceKind, Square, CASTLE_ALL, CASTLE_BLACK_K, CASTLE_BLACK_Q, CASTLE_WHITE_K, CASTLE_WHITE_Q};

/// Parse a FEN string into a `Position`.
///
/// # Errors
/// Returns `FenError` if the string is malformed, has the wrong number of
/// fields, places more or less than one king per side, or uses invalid
/// characters in any field.
pub fn from_fen(fen: &str) -> Result<Position, FenError> {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    if fields.len() < 4 {
        return Err(FenError::WrongFieldCount { found: fields.len() });
    }

    let mut pos = Position::empty();

    let ranks: Vec<&str> = fields[0].split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::InvalidRankCount { found: ranks.len() });
    }
    for (rank_from_top, rank_str) in ranks.iter().enumerate() {
        let rank = 7 - rank_from_top as u8;
        let mut file = 0u8;
        for c in rank_str.chars() {
            if let Some(skip) = c.to_digit(10) {
                file += skip as u8;
            } else {
                let (color, kind) = PieceKind::from_char(c).ok_or(FenError::InvalidPiece { ch: c })?;
                if file >= 8 {
                    return Err(FenError::TooManyFiles { rank });
                }
                pos.place_piece(color, kind, Square::from_rank_file(rank, file));
                file += 1;
            }
        }
        if file != 8 {
            return Err(FenError::TooManyFiles { rank });
        }
    }

    pos.side_to_move = match fields[1] {
        "w" => Color::White,
        "b" => Color::Black,
        other => return Err(FenError::InvalidSideToMove { found: other.to_string() }),
    };

    pos.castling = 0;
    if fields[2] != "-" {
        for c in fields[2].chars() {
            pos.castling |= match c {
                'K' => CASTLE_WHITE_K,
                'Q' => CASTLE_WHITE_Q,
                'k' => CASTLE_BLACK_K,
                'q' => CASTLE_BLACK_Q,
                other => return Err(FenError::InvalidCastling { ch: other }),
            };
        }
    }

    pos.ep_square = if fields[3] == "-" {
        None
    } else {
        Some(
            Square::from_algebraic(fields[3])
                .ok_or_else(|| FenError::InvalidEnPassant { found: fields[3].to_string() })?,
        )
    };

    pos.halfmove_clock = match fields.get(4) {
        Some(s) => s
            .parse()
            .map_err(|_| FenError::InvalidHalfmoveClock { found: (*s).to_string() })?,
        None => 0,
    };
    pos.fullmove_number = match fields.get(5) {
        Some(s) => s
            .parse()
            .map_err(|_| FenError::InvalidFullmoveNumber { found: (*s).to_string() })?,
        None => 1,
    };

    let white_kings = pos.pieces(Color::White, PieceKind::King).pop_count();
    let black_kings = pos.pieces(Color::Black, PieceKind::King).pop_count();
    if white_kings != 1 || black_kings != 1 {
        return Err(FenError::WrongKingCount {
            color_white_count: white_kings,
            color_black_count: black_kings,
        });
    }

    pos.zobrist = zobrist_from_scratch(&pos);
    Ok(pos)
}

/// Render a `Position` back into FEN notation.
#[must_use]
pub fn to_fen(position: &Position) -> String {
    let mut board = String::new();
    for rank_from_top in 0..8u8 {
        let rank = 7 - rank_from_top;
        let mut empty_run = 0u8;
        for file in 0..8u8 {
            match position.piece_at(Square::from_rank_file(rank, file)) {
                Some((color, kind)) => {
                    if empty_run > 0 {
                        board.push_str(&empty_run.to_string());
                        empty_run = 0;
                    }
                    board.push(kind.to_char(color));
                }
                None => empty_run += 1,
            }
        }
        if empty_run > 0 {
            board.push_str(&empty_run.to_string());
        }
        if rank_from_top != 7 {
            board.push('/');
        }
    }

    let side = match position.side_to_move {
        Color::White => "w",
        Color::Black => "b",
    };

    let castling = {
        let rights = position.castling_rights();
        if rights == 0 {
            "-".to_string()
        } else {
            let mut s = String::new();
            if rights & CASTLE_WHITE_K != 0 {
                s.push('K');
            }
            if rights & CASTLE_WHITE_Q != 0 {
                s.push('Q');
            }
            if rights & CASTLE_BLACK_K != 0 {
                s.push('k');
            }
            if rights & CASTLE_BLACK_Q != 0 {
                s.push('q');
            }
            s
        }
    };
    debug_assert!(position.castling_rights() & !CASTLE_ALL == 0);

    let ep = position
        .ep_square
        .map_or_else(|| "-".to_string(), |sq| sq.to_algebraic());

    format!(
        "{board} {side} {castling} {ep} {} {}",
        position.halfmove_clock, position.fullmove_number
    )
}
