//! Fail-hard negamax: terminal detection, quiescence handoff, null-move
//! pruning and late-move reduction (spec §4.G).

use super::{quiescence, SearchState, MATE_SCORE};
use crate::eval;
use crate::ordering;
use crate::position::movegen;
use crate::position::state::Position;

pub(super) fn negamax(
    position: &mut Position,
    state: &mut SearchState,
    depth: u32,
    ply: u32,
    mut alpha: i32,
    beta: i32,
) -> i32 {
    if state.should_stop() {
        return eval::evaluate(position, position.side_to_move, state.enabled);
    }
    state.nodes += 1;

    let in_check = position.is_in_check();
    let legal = movegen::legal_moves(position);
    if legal.is_empty() {
        return if in_check {
            -(MATE_SCORE - ply as i32)
        } else {
            0
        };
    }

    if depth == 0 {
        return if state.limits.use_quiescence {
            quiescence::quiesce(position, state, alpha, beta, 0)
        } else {
            eval::evaluate(position, position.side_to_move, state.enabled)
        };
    }

    if state.limits.use_null_move && depth >= 3 && ply > 0 && !in_check {
        let undo = position.make_null_move();
        let score = -negamax(position, state, depth - 3, ply + 1, -beta, -beta + 1);
        position.unmake_null_move(undo);
        if score >= beta {
            return beta;
        }
    }

    let mut moves = legal;
    ordering::order_moves(&state.ordering, position, &mut moves, ply as usize, None);

    let mut best_score = -MATE_SCORE * 2;

    for (i, &mv) in moves.iter().enumerate() {
        if state.should_stop() {
            break;
        }
        let is_quiet = mv.is_quiet();
        let base_child_depth = depth - 1;
        let reduced = state.limits.use_lmr && is_quiet && i >= 4 && depth >= 3;
        let child_depth = if reduced {
            base_child_depth.saturating_sub(1)
        } else {
            base_child_depth
        };

        position.make(mv);
        let mut score = -negamax(position, state, child_depth, ply + 1, -beta, -alpha);
        if reduced && score > alpha {
            score = -negamax(position, state, base_child_depth, ply + 1, -beta, -alpha);
        }
        position.unmake();

        if score > best_score {
            best_score = score;
        }
        if score > alpha {
            alpha = score;
        }
        if alpha >= beta {
            if is_quiet {
                state.ordering.record_killer(ply as usize, mv);
                state.ordering.record_history(mv, depth);
            }
            break;
        }
    }

    best_score
}
