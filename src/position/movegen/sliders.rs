//! Sliding-piece (bishop/rook/queen) move generation: walk each ray until
//! the first occupied square, including it iff it holds an opponent piece.

use crate::bitboard::BitSet;
use crate::position::state::Position;
use crate::types::{Move, PieceKind, Square};

const BISHOP_DIRS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const ROOK_DIRS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

fn directions(kind: PieceKind) -> &'static [(i8, i8)] {
    match kind {
        PieceKind::Bishop => &BISHOP_DIRS,
        PieceKind::Rook => &ROOK_DIRS,
        PieceKind::Queen => &[
            (1, 1), (1, -1), (-1, 1), (-1, -1),
            (1, 0), (-1, 0), (0, 1), (0, -1),
        ],
        _ => &[],
    }
}

/// Attack bitboard from `sq` for `kind` against occupancy `occ`, stopping at
/// (and including) the first occupied square on each ray.
#[must_use]
pub(crate) fn slider_attacks_from(sq: Square, kind: PieceKind, occ: BitSet) -> BitSet {
    let mut bb = BitSet::EMPTY;
    for (dr, df) in directions(kind) {
        let mut rank = sq.rank() as i8;
        let mut file = sq.file() as i8;
        loop {
            rank += dr;
            file += df;
            if !(0..8).contains(&rank) || !(0..8).contains(&file) {
                break;
            }
            let target = Square::from_rank_file(rank as u8, file as u8);
            bb.set(target);
            if occ.get(target) {
                break;
            }
        }
    }
    bb
}

pub(crate) fn generate(position: &Position, from: Square, kind: PieceKind, moves: &mut Vec<Move>) {
    let us = position.side_to_move;
    let occ = position.occupied();
    let targets = slider_attacks_from(from, kind, occ) & !position.side_pieces(us);
    for to in targets.iter() {
        moves.push(super::make_move(position, from, to, kind, None));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitboard::BitSet;

    #[test]
    fn rook_on_empty_board_covers_rank_and_file() {
        let attacks = slider_attacks_from(Square::from_rank_file(3, 3), PieceKind::Rook, BitSet::EMPTY);
        assert_eq!(attacks.pop_count(), 14);
    }

    #[test]
    fn bishop_in_corner_covers_one_diagonal() {
        let attacks = slider_attacks_from(Square::new(0), PieceKind::Bishop, BitSet::EMPTY);
        assert_eq!(attacks.pop_count(), 7);
    }

    #[test]
    fn slider_ray_stops_at_first_blocker() {
        let mut occ = BitSet::EMPTY;
        occ.set(Square::from_rank_file(3, 5));
        let attacks = slider_attacks_from(Square::from_rank_file(3, 3), PieceKind::Rook, occ);
        assert!(attacks.get(Square::from_rank_file(3, 5)));
        assert!(!attacks.get(Square::from_rank_file(3, 6)));
    }
}
