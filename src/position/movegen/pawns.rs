//! Pawn move generation: pushes, captures, en passant and promotion.

use crate::bitboard::BitSet;
use crate::position::state::Position;
use crate::types::{Color, Move, PieceKind, Square};

const PROMOTION_KINDS: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

fn push_moves(from: Square, to: Square, position: &Position, moves: &mut Vec<Move>) {
    if to.rank() == position.side_to_move.promotion_rank() {
        for &promo in &PROMOTION_KINDS {
            moves.push(super::make_move(position, from, to, PieceKind::Pawn, Some(promo)));
        }
    } else {
        moves.push(super::make_move(position, from, to, PieceKind::Pawn, None));
    }
}

pub(crate) fn generate(position: &Position, from: Square, moves: &mut Vec<Move>) {
    let us = position.side_to_move;
    let them = us.opponent();
    let occ = position.occupied();
    let dir = us.pawn_direction();

    let one_rank = from.rank() as i8 + dir;
    if (0..8).contains(&one_rank) {
        let one_ahead = Square::from_rank_file(one_rank as u8, from.file());
        if !occ.get(one_ahead) {
            push_moves(from, one_ahead, position, moves);

            if from.rank() == us.pawn_start_rank() {
                let two_rank = one_rank + dir;
                let two_ahead = Square::from_rank_file(two_rank as u8, from.file());
                if !occ.get(two_ahead) {
                    moves.push(super::make_move(position, from, two_ahead, PieceKind::Pawn, None));
                }
            }
        }

        for &df in &[-1i8, 1] {
            let file = from.file() as i8 + df;
            if !(0..8).contains(&file) {
                continue;
            }
            let target = Square::from_rank_file(one_rank as u8, file as u8);
            if position.side_pieces(them).get(target) {
                push_moves(from, target, position, moves);
            } else if Some(target) == position.ep_square {
                moves.push(super::make_move(position, from, target, PieceKind::Pawn, None));
            }
        }
    }
}

/// Squares a pawn of `color` standing at `sq` would attack (used both for
/// generating captures and for `is_square_attacked`).
#[must_use]
pub(crate) fn attacks_from(color: Color, sq: Square) -> BitSet {
    let mut bb = BitSet::EMPTY;
    let dir = color.pawn_direction();
    let rank = sq.rank() as i8 + dir;
    if !(0..8).contains(&rank) {
        return bb;
    }
    for &df in &[-1i8, 1] {
        let file = sq.file() as i8 + df;
        if (0..8).contains(&file) {
            bb.set(Square::from_rank_file(rank as u8, file as u8));
        }
    }
    bb
}
