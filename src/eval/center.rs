//! Center control: occupancy bonuses for the four inner center squares and
//! the surrounding extended-center ring.

use crate::position::state::Position;
use crate::types::{Color, PieceKind, Square};

const INNER_CENTER: [Square; 4] = [
    Square::from_rank_file(3, 3), // d4
    Square::from_rank_file(3, 4), // e4
    Square::from_rank_file(4, 3), // d5
    Square::from_rank_file(4, 4), // e5
];

const EXTENDED_CENTER: [Square; 12] = [
    Square::from_rank_file(2, 2),
    Square::from_rank_file(2, 3),
    Square::from_rank_file(2, 4),
    Square::from_rank_file(2, 5),
    Square::from_rank_file(3, 2),
    Square::from_rank_file(3, 5),
    Square::from_rank_file(4, 2),
    Square::from_rank_file(4, 5),
    Square::from_rank_file(5, 2),
    Square::from_rank_file(5, 3),
    Square::from_rank_file(5, 4),
    Square::from_rank_file(5, 5),
];

fn inner_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 30,
        PieceKind::Knight => 20,
        PieceKind::Bishop => 15,
        _ => 10,
    }
}

pub(crate) fn score(position: &Position, us: Color) -> i32 {
    let mut s = 0;
    for sq in INNER_CENTER {
        if let Some((color, kind)) = position.piece_at(sq) {
            let value = inner_value(kind);
            s += if color == us { value } else { -value };
        }
    }
    for sq in EXTENDED_CENTER {
        if let Some((color, _)) = position.piece_at(sq) {
            s += if color == us { 5 } else { -5 };
        }
    }
    s
}
