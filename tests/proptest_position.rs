//! Property-based make/unmake and FEN round-trip checks (spec §8 properties
//! 1-3), grounded on the teacher's `board/tests/proptest.rs`.

use chess_core::position::fen::{from_fen, to_fen};
use chess_core::position::movegen::legal_moves;
use chess_core::Position;
use proptest::prelude::*;
use rand::prelude::*;
use rand::rngs::StdRng;

fn play_random_moves(pos: &mut Position, rng: &mut StdRng, count: usize) -> Vec<chess_core::Move> {
    let mut played = Vec::with_capacity(count);
    for _ in 0..count {
        let moves = legal_moves(pos);
        if moves.is_empty() {
            break;
        }
        let mv = moves[rng.gen_range(0..moves.len())];
        pos.make(mv);
        played.push(mv);
    }
    played
}

proptest! {
    #[test]
    fn make_unmake_restores_state_after_random_play(seed in any::<u64>(), num_moves in 1..20usize) {
        let mut pos = Position::new();
        let mut rng = StdRng::seed_from_u64(seed);

        let initial_zobrist = pos.zobrist();
        let initial_fen = to_fen(&pos);

        let played = play_random_moves(&mut pos, &mut rng, num_moves);
        for _ in &played {
            pos.unmake();
        }

        prop_assert_eq!(pos.zobrist(), initial_zobrist);
        prop_assert_eq!(to_fen(&pos), initial_fen);
    }

    #[test]
    fn fen_round_trips_after_random_play(seed in any::<u64>(), num_moves in 0..25usize) {
        let mut pos = Position::new();
        let mut rng = StdRng::seed_from_u64(seed);
        play_random_moves(&mut pos, &mut rng, num_moves);

        let fen = to_fen(&pos);
        let restored = from_fen(&fen).unwrap();
        prop_assert_eq!(to_fen(&restored), fen);
        prop_assert_eq!(restored.zobrist(), pos.zobrist());
        prop_assert_eq!(restored.side_to_move, pos.side_to_move);
    }

    #[test]
    fn legal_moves_never_leave_mover_in_check(seed in any::<u64>()) {
        let mut pos = Position::new();
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..10 {
            let moves = legal_moves(&pos);
            if moves.is_empty() {
                break;
            }
            let us = pos.side_to_move;
            for &mv in &moves {
                pos.make(mv);
                prop_assert!(!chess_core::position::movegen::is_square_attacked(
                    &pos,
                    pos.king_square(us),
                    us.opponent(),
                ));
                pos.unmake();
            }
            let mv = moves[rng.gen_range(0..moves.len())];
            pos.make(mv);
        }
    }
}
