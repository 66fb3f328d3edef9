//! King safety: pawn shield on the three files around a flanked, un-castled
//! or castled king on its back rank. Scaled by the caller against game phase.

use crate::position::state::Position;
use crate::types::{Color, PieceKind, Square};

fn score_one_side(position: &Position, color: Color) -> i32 {
    let king_sq = position.king_square(color);
    let back_rank = color.starting_rank();
    if king_sq.rank() != back_rank {
        return 0;
    }
    let file = king_sq.file() as i8;
    if !(file <= 2 || file >= 5) {
        return 0;
    }

    let shield_rank = color.pawn_start_rank();
    let mut s = 0;
    for df in -1..=1i8 {
        let f = file + df;
        if !(0..8).contains(&f) {
            continue;
        }
        let sq = Square::from_rank_file(shield_rank, f as u8);
        if position.piece_at(sq) == Some((color, PieceKind::Pawn)) {
            s += 12;
        } else {
            s -= 25;
        }
    }
    s
}

pub(crate) fn score(position: &Position, us: Color) -> i32 {
    score_one_side(position, us) - score_one_side(position, us.opponent())
}
