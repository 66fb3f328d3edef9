//! King move generation: eight adjacent squares plus castling.

use crate::bitboard::BitSet;
use crate::position::movegen::is_square_attacked;
use crate::position::state::Position;
use crate::types::{castle_king_bit, castle_queen_bit, Move, PieceKind, Square};
use once_cell::sync::Lazy;

static KING_ATTACKS: Lazy<[BitSet; 64]> = Lazy::new(|| {
    let mut table = [BitSet::EMPTY; 64];
    for idx in 0..64u8 {
        let sq = Square::new(idx);
        let mut bb = BitSet::EMPTY;
        for dr in -1..=1i8 {
            for df in -1..=1i8 {
                if dr == 0 && df == 0 {
                    continue;
                }
                let rank = sq.rank() as i8 + dr;
                let file = sq.file() as i8 + df;
                if (0..8).contains(&rank) && (0..8).contains(&file) {
                    bb.set(Square::from_rank_file(rank as u8, file as u8));
                }
            }
        }
        table[idx as usize] = bb;
    }
    table
});

#[must_use]
pub(crate) fn attacks_from(sq: Square) -> BitSet {
    KING_ATTACKS[sq.index()]
}

pub(crate) fn generate(position: &Position, from: Square, moves: &mut Vec<Move>) {
    let us = position.side_to_move;
    let them = us.opponent();
    let targets = attacks_from(from) & !position.side_pieces(us);
    for to in targets.iter() {
        moves.push(super::make_move(position, from, to, PieceKind::King, None));
    }

    let rank = us.starting_rank();
    if from != Square::from_rank_file(rank, 4) {
        return;
    }

    let occ = position.occupied();
    let king_in_check = is_square_attacked(position, from, them);

    if position.castling_rights() & castle_king_bit(us) != 0 && !king_in_check {
        let f = Square::from_rank_file(rank, 5);
        let g = Square::from_rank_file(rank, 6);
        if !occ.get(f) && !occ.get(g) {
            moves.push(super::make_move(position, from, g, PieceKind::King, None));
        }
    }
    if position.castling_rights() & castle_queen_bit(us) != 0 && !king_in_check {
        let d = Square::from_rank_file(rank, 3);
        let c = Square::from_rank_file(rank, 2);
        let b = Square::from_rank_file(rank, 1);
        if !occ.get(d) && !occ.get(c) && !occ.get(b) {
            moves.push(super::make_move(position, from, c, PieceKind::King, None));
        }
    }
}
