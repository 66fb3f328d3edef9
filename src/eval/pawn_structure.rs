//! Pawn structure: doubled, isolated/connected files, and passed pawns.

use crate::bitboard::BitSet;
use crate::position::state::Position;
use crate::types::{Color, PieceKind, Square};

const PASSED_BONUS_BY_RANK: [i32; 8] = [0, 10, 15, 25, 40, 60, 90, 0];

fn is_passed(sq: Square, color: Color, their_pawns: BitSet) -> bool {
    let file = sq.file() as i8;
    for their_sq in their_pawns.iter() {
        if (their_sq.file() as i8 - file).abs() > 1 {
            continue;
        }
        let ahead = match color {
            Color::White => their_sq.rank() > sq.rank(),
            Color::Black => their_sq.rank() < sq.rank(),
        };
        if ahead {
            return false;
        }
    }
    true
}

fn score_one_side(position: &Position, color: Color) -> i32 {
    let our_pawns = position.pieces(color, PieceKind::Pawn);
    let their_pawns = position.pieces(color.opponent(), PieceKind::Pawn);

    let mut file_counts = [0u32; 8];
    for sq in our_pawns.iter() {
        file_counts[sq.file() as usize] += 1;
    }

    let mut s = 0;

    // Doubled-pawn penalty is per file: a file with n pawns costs n-1 units.
    for file in 0..8usize {
        let n = file_counts[file];
        if n > 1 {
            s -= 12 * (n as i32 - 1);
        }
    }

    // Isolated/connected bonus is per pawn: each pawn on a file with no
    // friendly pawn on an adjacent file is individually isolated.
    for sq in our_pawns.iter() {
        let file = sq.file() as usize;
        let has_neighbor =
            (file > 0 && file_counts[file - 1] > 0) || (file < 7 && file_counts[file + 1] > 0);
        s += if has_neighbor { 8 } else { -15 };
    }

    for sq in our_pawns.iter() {
        if is_passed(sq, color, their_pawns) {
            let rank_from_perspective = match color {
                Color::White => sq.rank(),
                Color::Black => 7 - sq.rank(),
            };
            s += PASSED_BONUS_BY_RANK[rank_from_perspective as usize];
        }
    }

    s
}

pub(crate) fn score(position: &Position, us: Color) -> i32 {
    score_one_side(position, us) - score_one_side(position, us.opponent())
}
