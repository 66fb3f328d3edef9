//! Material balance: piece counts weighted by value. The king is excluded —
//! checkmate is represented as a large bounded search score, not a material term.

use crate::position::state::Position;
use crate::types::{Color, PieceKind};

const VALUES: [(PieceKind, i32); 5] = [
    (PieceKind::Pawn, 100),
    (PieceKind::Knight, 320),
    (PieceKind::Bishop, 330),
    (PieceKind::Rook, 500),
    (PieceKind::Queen, 900),
];

pub(crate) fn score(position: &Position, us: Color) -> i32 {
    let them = us.opponent();
    VALUES
        .iter()
        .map(|&(kind, value)| {
            let ours = position.pieces(us, kind).pop_count() as i32;
            let theirs = position.pieces(them, kind).pop_count() as i32;
            (ours - theirs) * value
        })
        .sum()
}
