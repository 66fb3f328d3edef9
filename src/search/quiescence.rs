//! Quiescence search: resolve captures past the horizon before trusting a
//! static evaluation (spec §4.G). Ordered by an SEE approximation, not full
//! static-exchange evaluation.

use super::SearchState;
use crate::eval;
use crate::ordering;
use crate::position::movegen;
use crate::position::state::Position;

fn see_approximation(position: &Position, mv: crate::types::Move) -> i32 {
    let victim_value = mv.captured_kind.map(ordering::piece_value).unwrap_or(0);
    let attacker_value = ordering::piece_value(mv.moving_kind);
    victim_value - attacker_value / 10
}

pub(super) fn quiesce(
    position: &mut Position,
    state: &mut SearchState,
    mut alpha: i32,
    beta: i32,
    qdepth: u32,
) -> i32 {
    state.nodes += 1;

    let stand_pat = eval::evaluate(position, position.side_to_move, state.enabled);
    if state.should_stop() || qdepth >= state.limits.quiescence_depth {
        return stand_pat;
    }
    if stand_pat >= beta {
        return beta;
    }
    alpha = alpha.max(stand_pat);

    let mut moves = movegen::legal_tactical_moves(position);
    moves.sort_by_key(|&mv| std::cmp::Reverse(see_approximation(position, mv)));

    for mv in moves {
        if state.should_stop() {
            break;
        }
        position.make(mv);
        let score = -quiesce(position, state, -beta, -alpha, qdepth + 1);
        position.unmake();

        if score >= beta {
            return beta;
        }
        if score > alpha {
            alpha = score;
        }
    }

    alpha
}
