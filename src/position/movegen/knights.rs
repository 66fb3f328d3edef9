//! Knight move generation: eight fixed L-shaped offsets per square.

use crate::bitboard::BitSet;
use crate::position::state::Position;
use crate::types::{Move, PieceKind, Square};
use once_cell::sync::Lazy;

static KNIGHT_ATTACKS: Lazy<[BitSet; 64]> = Lazy::new(|| {
    let mut table = [BitSet::EMPTY; 64];
    const OFFSETS: [(i8, i8); 8] = [
        (1, 2), (2, 1), (2, -1), (1, -2),
        (-1, -2), (-2, -1), (-2, 1), (-1, 2),
    ];
    for idx in 0..64u8 {
        let sq = Square::new(idx);
        let mut bb = BitSet::EMPTY;
        for (dr, df) in OFFSETS {
            let rank = sq.rank() as i8 + dr;
            let file = sq.file() as i8 + df;
            if (0..8).contains(&rank) && (0..8).contains(&file) {
                bb.set(Square::from_rank_file(rank as u8, file as u8));
            }
        }
        table[idx as usize] = bb;
    }
    table
});

#[must_use]
pub(crate) fn attacks_from(sq: Square) -> BitSet {
    KNIGHT_ATTACKS[sq.index()]
}

pub(crate) fn generate(position: &Position, from: Square, moves: &mut Vec<Move>) {
    let us = position.side_to_move;
    let targets = attacks_from(from) & !position.side_pieces(us);
    for to in targets.iter() {
        moves.push(super::make_move(position, from, to, PieceKind::Knight, None));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn knight_in_corner_has_two_targets() {
        assert_eq!(attacks_from(Square::new(0)).pop_count(), 2);
    }

    #[test]
    fn knight_in_center_has_eight_targets() {
        assert_eq!(attacks_from(Square::from_rank_file(4, 4)).pop_count(), 8);
    }
}
