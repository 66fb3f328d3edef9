//! Legal move generation (spec component C / §4.C).
//!
//! Pseudo-legal moves are generated per piece kind; `legal_moves` filters
//! out anything that would leave the mover's own king in check by playing
//! the move on a scratch copy via `make`/`unmake`.

mod kings;
mod knights;
mod pawns;
mod sliders;

use crate::position::state::Position;
use crate::types::{Color, Move, PieceKind, Square};

pub(crate) use sliders::slider_attacks_from;

/// Build a `Move`, inferring `captured_kind` from the destination square
/// (or, for en passant, from the pawn standing behind it).
pub(crate) fn make_move(
    position: &Position,
    from: Square,
    to: Square,
    moving_kind: PieceKind,
    promotion_kind: Option<PieceKind>,
) -> Move {
    let is_en_passant = moving_kind == PieceKind::Pawn
        && from.file() != to.file()
        && position.piece_at(to).is_none();

    let captured_kind = if is_en_passant {
        Some(PieceKind::Pawn)
    } else {
        position.piece_at(to).map(|(_, kind)| kind)
    };

    Move {
        from,
        to,
        moving_kind,
        captured_kind,
        is_promotion: promotion_kind.is_some(),
        promotion_kind,
    }
}

fn generate_pseudo_legal_moves(position: &Position) -> Vec<Move> {
    let us = position.side_to_move;
    let mut moves = Vec::with_capacity(48);

    for from in position.pieces(us, PieceKind::Pawn).iter() {
        pawns::generate(position, from, &mut moves);
    }
    for from in position.pieces(us, PieceKind::Knight).iter() {
        knights::generate(position, from, &mut moves);
    }
    for from in position.pieces(us, PieceKind::Bishop).iter() {
        sliders::generate(position, from, PieceKind::Bishop, &mut moves);
    }
    for from in position.pieces(us, PieceKind::Rook).iter() {
        sliders::generate(position, from, PieceKind::Rook, &mut moves);
    }
    for from in position.pieces(us, PieceKind::Queen).iter() {
        sliders::generate(position, from, PieceKind::Queen, &mut moves);
    }
    for from in position.pieces(us, PieceKind::King).iter() {
        kings::generate(position, from, &mut moves);
    }
    moves
}

/// Is `sq` attacked by any piece of color `by`? Castling is never considered
/// here, so this cannot recurse into castling legality checks.
#[must_use]
pub fn is_square_attacked(position: &Position, sq: Square, by: Color) -> bool {
    let pawn_attackers = pawns::attacks_from(by.opponent(), sq);
    if (pawn_attackers & position.pieces(by, PieceKind::Pawn)).0 != 0 {
        return true;
    }
    if (knights::attacks_from(sq) & position.pieces(by, PieceKind::Knight)).0 != 0 {
        return true;
    }
    if (kings::attacks_from(sq) & position.pieces(by, PieceKind::King)).0 != 0 {
        return true;
    }
    let occ = position.occupied();
    let bishop_like = position.pieces(by, PieceKind::Bishop) | position.pieces(by, PieceKind::Queen);
    if (slider_attacks_from(sq, PieceKind::Bishop, occ) & bishop_like).0 != 0 {
        return true;
    }
    let rook_like = position.pieces(by, PieceKind::Rook) | position.pieces(by, PieceKind::Queen);
    if (slider_attacks_from(sq, PieceKind::Rook, occ) & rook_like).0 != 0 {
        return true;
    }
    false
}

/// All legal moves for the side to move.
#[must_use]
pub fn legal_moves(position: &Position) -> Vec<Move> {
    let us = position.side_to_move;
    let them = us.opponent();
    let pseudo = generate_pseudo_legal_moves(position);
    let mut legal = Vec::with_capacity(pseudo.len());
    let mut scratch = position.clone();

    for mv in pseudo {
        if mv.is_castling() {
            let rank = mv.from.rank();
            let mid_file = (mv.from.file() + mv.to.file()) / 2;
            let mid_sq = Square::from_rank_file(rank, mid_file);
            if is_square_attacked(&scratch, mv.from, them)
                || is_square_attacked(&scratch, mid_sq, them)
                || is_square_attacked(&scratch, mv.to, them)
            {
                continue;
            }
        }

        scratch.make(mv);
        if !is_square_attacked(&scratch, scratch.king_square(us), them) {
            legal.push(mv);
        }
        scratch.unmake();
    }
    legal
}

/// All legal capturing/promoting moves, used by quiescence search.
#[must_use]
pub fn legal_tactical_moves(position: &Position) -> Vec<Move> {
    legal_moves(position)
        .into_iter()
        .filter(|m| m.is_capture() || m.is_promotion)
        .collect()
}

/// Short-circuiting legality probe: does `color` have any legal move at all?
/// Unlike `legal_moves`, this returns as soon as the first legal move is
/// found instead of generating and filtering the whole pseudo-legal list.
#[must_use]
pub fn has_any_legal_move(position: &Position, color: Color) -> bool {
    debug_assert_eq!(position.side_to_move, color);
    let them = color.opponent();
    let pseudo = generate_pseudo_legal_moves(position);
    let mut scratch = position.clone();

    for mv in pseudo {
        if mv.is_castling() {
            let rank = mv.from.rank();
            let mid_file = (mv.from.file() + mv.to.file()) / 2;
            let mid_sq = Square::from_rank_file(rank, mid_file);
            if is_square_attacked(&scratch, mv.from, them)
                || is_square_attacked(&scratch, mid_sq, them)
                || is_square_attacked(&scratch, mv.to, them)
            {
                continue;
            }
        }

        scratch.make(mv);
        let is_legal = !is_square_attacked(&scratch, scratch.king_square(color), them);
        scratch.unmake();
        if is_legal {
            return true;
        }
    }
    false
}

/// Node-count test of move-generator correctness (spec §8 property 5).
#[must_use]
pub fn perft(position: &mut Position, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }
    let moves = legal_moves(position);
    if depth == 1 {
        return moves.len() as u64;
    }
    let mut nodes = 0;
    for mv in moves {
        position.make(mv);
        nodes += perft(position, depth - 1);
        position.unmake();
    }
    nodes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::fen::from_fen;

    #[test]
    fn has_any_legal_move_matches_legal_moves_emptiness() {
        let startpos = Position::new();
        assert!(has_any_legal_move(&startpos, Color::White));

        let checkmate = from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3").unwrap();
        assert!(!has_any_legal_move(&checkmate, Color::White));

        let stalemate = from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
        assert!(!has_any_legal_move(&stalemate, Color::Black));
    }
}
