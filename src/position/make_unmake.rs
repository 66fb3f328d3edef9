//! Reversible `make`/`unmake` (spec §4.B). `make` is only ever called with a
//! legal move; debug builds assert this via `debug_assert!` rather than
//! returning a `Result`, per spec §7's "fail fast" option for `IllegalMove`.
//! `try_make` is the validated entry point for callers outside the engine
//! that cannot guarantee legality themselves.

use crate::position::state::{Position, UndoRecord};
use crate::position::zobrist;
use crate::types::{castle_king_bit, castle_queen_bit, Color, Move, PieceKind, Square};

/// Enough state to reverse `make_null_move` — side-to-move and `ep_square`
/// always change; zobrist is restored directly rather than re-XORed.
pub struct NullMoveUndo {
    prev_ep_square: Option<Square>,
    prev_zobrist: u64,
}

fn clear_castling_on_corner(pos: &mut Position, sq: Square) {
    use crate::types::{CASTLE_BLACK_K, CASTLE_BLACK_Q, CASTLE_WHITE_K, CASTLE_WHITE_Q};
    match (sq.rank(), sq.file()) {
        (0, 0) => pos.castling &= !CASTLE_WHITE_Q,
        (0, 7) => pos.castling &= !CASTLE_WHITE_K,
        (7, 0) => pos.castling &= !CASTLE_BLACK_Q,
        (7, 7) => pos.castling &= !CASTLE_BLACK_K,
        _ => {}
    }
}

impl Position {
    /// Play `mv`, pushing an `UndoRecord` so it can later be reversed with
    /// `unmake`. Caller must ensure `mv` is legal in the current position.
    pub fn make(&mut self, mv: Move) {
        let us = self.side_to_move;
        let them = us.opponent();

        let prev_zobrist = self.zobrist;
        let prev_ep_square = self.ep_square;
        let prev_castling = self.castling;
        let prev_halfmove_clock = self.halfmove_clock;
        let prev_fullmove_number = self.fullmove_number;

        let mover = mv.moving_kind;
        let from = mv.from;
        let to = mv.to;
        debug_assert_eq!(self.mailbox[from.index()], Some((us, mover)));

        self.remove_piece(us, mover, from);
        self.zobrist ^= zobrist::piece_square_seed(us, mover, from.index());

        let mut captured_square = None;
        let mut rook_move = None;
        let mut resets_clock = false;

        let is_en_passant =
            mover == PieceKind::Pawn && from.file() != to.file() && self.mailbox[to.index()].is_none();

        if is_en_passant {
            let captured_sq = Square::from_rank_file(from.rank(), to.file());
            self.remove_piece(them, PieceKind::Pawn, captured_sq);
            self.zobrist ^= zobrist::piece_square_seed(them, PieceKind::Pawn, captured_sq.index());
            captured_square = Some(captured_sq);
            resets_clock = true;
        } else if let Some(captured_kind) = mv.captured_kind {
            self.remove_piece(them, captured_kind, to);
            self.zobrist ^= zobrist::piece_square_seed(them, captured_kind, to.index());
            captured_square = Some(to);
            resets_clock = true;
        }

        let mut new_ep_square = None;
        if mover == PieceKind::Pawn {
            resets_clock = true;
            if mv.is_double_pawn_push() {
                let ep_rank = (from.rank() + to.rank()) / 2;
                new_ep_square = Some(Square::from_rank_file(ep_rank, from.file()));
            }
        }

        if mover == PieceKind::King {
            self.castling &= !(castle_king_bit(us) | castle_queen_bit(us));

            if mv.is_castling() {
                let rank = from.rank();
                let (rook_from, rook_to) = if to.file() == 6 {
                    (Square::from_rank_file(rank, 7), Square::from_rank_file(rank, 5))
                } else {
                    (Square::from_rank_file(rank, 0), Square::from_rank_file(rank, 3))
                };
                self.remove_piece(us, PieceKind::Rook, rook_from);
                self.zobrist ^= zobrist::piece_square_seed(us, PieceKind::Rook, rook_from.index());
                self.place_piece(us, PieceKind::Rook, rook_to);
                self.zobrist ^= zobrist::piece_square_seed(us, PieceKind::Rook, rook_to.index());
                rook_move = Some((rook_from, rook_to));
            }
        }

        clear_castling_on_corner(self, from);
        clear_castling_on_corner(self, to);

        let final_kind = mv.effective_promotion().unwrap_or(mover);
        self.place_piece(us, final_kind, to);
        self.zobrist ^= zobrist::piece_square_seed(us, final_kind, to.index());

        self.zobrist ^= zobrist::en_passant_seed(prev_ep_square);
        self.zobrist ^= zobrist::en_passant_seed(new_ep_square);
        self.zobrist ^= zobrist::castling_seed(prev_castling);
        self.zobrist ^= zobrist::castling_seed(self.castling);
        self.zobrist ^= zobrist::side_seed(us);
        self.zobrist ^= zobrist::side_seed(them);

        self.ep_square = new_ep_square;
        if !resets_clock {
            self.halfmove_clock += 1;
        } else {
            self.halfmove_clock = 0;
        }
        if us == Color::Black {
            self.fullmove_number += 1;
        }
        self.side_to_move = them;

        self.history.push(UndoRecord {
            mv,
            captured_square,
            rook_move,
            prev_ep_square,
            prev_castling,
            prev_halfmove_clock,
            prev_fullmove_number,
            prev_zobrist,
        });
    }

    /// Pass the turn without moving a piece, for null-move pruning (§4.G).
    /// Not pushed onto `history`; paired with `unmake_null_move`.
    pub fn make_null_move(&mut self) -> NullMoveUndo {
        let prev_ep_square = self.ep_square;
        let prev_zobrist = self.zobrist;

        self.zobrist ^= zobrist::en_passant_seed(prev_ep_square);
        self.ep_square = None;
        self.zobrist ^= zobrist::en_passant_seed(None);

        self.zobrist ^= zobrist::side_seed(self.side_to_move);
        self.side_to_move = self.side_to_move.opponent();
        self.zobrist ^= zobrist::side_seed(self.side_to_move);

        NullMoveUndo {
            prev_ep_square,
            prev_zobrist,
        }
    }

    pub fn unmake_null_move(&mut self, undo: NullMoveUndo) {
        self.side_to_move = self.side_to_move.opponent();
        self.ep_square = undo.prev_ep_square;
        self.zobrist = undo.prev_zobrist;
    }

    /// Reverse the last `make` call. Panics if there is no history (a
    /// programming error, never triggered by legal play from `Position::new`).
    pub fn unmake(&mut self) {
        let undo = self
            .history
            .pop()
            .expect("unmake called on a position with empty history");
        let mv = undo.mv;
        let us = self.side_to_move.opponent();

        let final_kind = mv.effective_promotion().unwrap_or(mv.moving_kind);
        self.remove_piece(us, final_kind, mv.to);
        self.place_piece(us, mv.moving_kind, mv.from);

        if let Some((rook_from, rook_to)) = undo.rook_move {
            self.remove_piece(us, PieceKind::Rook, rook_to);
            self.place_piece(us, PieceKind::Rook, rook_from);
        }

        if let Some(captured_sq) = undo.captured_square {
            let captured_kind = mv
                .captured_kind
                .expect("captured_square is only set alongside captured_kind");
            self.place_piece(us.opponent(), captured_kind, captured_sq);
        }

        self.ep_square = undo.prev_ep_square;
        self.castling = undo.prev_castling;
        self.halfmove_clock = undo.prev_halfmove_clock;
        self.fullmove_number = undo.prev_fullmove_number;
        self.zobrist = undo.prev_zobrist;
        self.side_to_move = us;
    }

    /// Validate `mv` against the current legal-move list before playing it,
    /// returning `IllegalMoveError` instead of the undefined behavior `make`
    /// documents for an illegal move. Intended for boundaries that take
    /// moves from outside the engine (a UCI adapter, user input) rather
    /// than for search, which only ever plays moves it generated itself.
    pub fn try_make(&mut self, mv: Move) -> Result<(), crate::error::IllegalMoveError> {
        if !crate::position::movegen::legal_moves(self).contains(&mv) {
            return Err(crate::error::IllegalMoveError { attempted: mv });
        }
        self.make(mv);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::movegen;

    fn make_unmake_roundtrip(fen: &str) {
        let mut pos = crate::position::fen::from_fen(fen).expect("valid fen");
        let before = pos.clone();
        for mv in movegen::legal_moves(&pos) {
            pos.make(mv);
            pos.unmake();
            assert_eq!(pos.zobrist(), before.zobrist(), "zobrist drifted for {mv}");
            assert_eq!(pos.side_to_move, before.side_to_move);
            assert_eq!(pos.castling_rights(), before.castling_rights());
            assert_eq!(pos.ep_square, before.ep_square);
            assert_eq!(pos.halfmove_clock, before.halfmove_clock);
            for sq in 0..64u8 {
                let sq = Square::new(sq);
                assert_eq!(pos.piece_at(sq), before.piece_at(sq), "mailbox drift at {sq}");
            }
        }
    }

    #[test]
    fn roundtrip_from_initial_position() {
        make_unmake_roundtrip("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
    }

    #[test]
    fn roundtrip_with_en_passant_available() {
        make_unmake_roundtrip("rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 3");
    }

    #[test]
    fn roundtrip_with_castling_rights() {
        make_unmake_roundtrip("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    }

    #[test]
    fn try_make_accepts_a_legal_move_and_plays_it() {
        let mut pos = crate::position::state::Position::new();
        let mv = movegen::legal_moves(&pos)[0];
        assert!(pos.try_make(mv).is_ok());
        assert_eq!(pos.history.len(), 1);
    }

    #[test]
    fn try_make_rejects_an_illegal_move_without_mutating_the_position() {
        let mut pos = crate::position::state::Position::new();
        let before = pos.clone();
        // A rook cannot reach h8 from a1 in one move from the initial
        // position, so this is never in the legal-move list.
        let bogus = Move {
            from: Square::new(0),
            to: Square::new(63),
            moving_kind: PieceKind::Rook,
            captured_kind: None,
            is_promotion: false,
            promotion_kind: None,
        };
        let err = pos.try_make(bogus).unwrap_err();
        assert_eq!(err.attempted, bogus);
        assert_eq!(pos.zobrist(), before.zobrist());
        assert_eq!(pos.history.len(), 0);
    }
}
