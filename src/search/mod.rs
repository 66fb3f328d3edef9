//! Iterative-deepening alpha-beta search (spec component G / §4.G).
//! Grounded on the teacher's `search.rs` (negamax/quiesce split, LMR,
//! null-move, killer/history recording on cutoff), trimmed to the
//! transposition-table-free shape the spec describes.

mod alpha_beta;
mod quiescence;

use crate::eval::{self, EnabledHeuristics};
use crate::ordering::OrderingContext;
use crate::position::movegen;
use crate::position::state::Position;
use crate::types::Move;
use std::time::{Duration, Instant};

/// Mate scores are bounded well clear of `i32` overflow at any ply depth
/// used here (spec §9 open question: stay within ±32000).
pub const MATE_SCORE: i32 = 20_000;
/// A score with this magnitude or greater is a forced mate; iterative
/// deepening stops early once found.
pub const MATE_CUTOFF: i32 = 15_000;

/// Search parameters for one `choose_move` invocation (spec §4.H fields
/// `min_depth`/`max_depth`/`max_time_ms`/etc., minus the difficulty-layer
/// concerns that live in `DifficultyProfile`).
#[derive(Clone, Copy, Debug)]
pub struct SearchLimits {
    pub min_depth: u32,
    pub max_depth: u32,
    pub max_time: Duration,
    pub use_quiescence: bool,
    pub quiescence_depth: u32,
    pub use_null_move: bool,
    pub use_lmr: bool,
}

/// Search statistics recorded into the decision report (spec §3).
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Clone, Copy, Debug, Default)]
pub struct SearchStats {
    pub positions: u64,
    pub max_depth: u32,
    pub elapsed_ms: u64,
    pub nodes_per_second: u64,
    pub timeout: bool,
}

#[derive(Clone, Debug)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    pub score: i32,
    pub stats: SearchStats,
}

struct SearchState {
    nodes: u64,
    start: Instant,
    max_time: Duration,
    timed_out: bool,
    ordering: OrderingContext,
    limits: SearchLimits,
    enabled: EnabledHeuristics,
    priority_move: Option<Move>,
}

impl SearchState {
    fn should_stop(&mut self) -> bool {
        if self.timed_out {
            return true;
        }
        if self.start.elapsed() >= self.max_time {
            self.timed_out = true;
        }
        self.timed_out
    }
}

/// Run iterative deepening from `limits.min_depth` to `limits.max_depth`,
/// never returning `None` while at least one legal move exists.
#[must_use]
pub fn search(
    position: &mut Position,
    limits: &SearchLimits,
    enabled: EnabledHeuristics,
    priority_move: Option<Move>,
) -> SearchResult {
    let start = Instant::now();
    let legal = movegen::legal_moves(position);

    if legal.is_empty() {
        return SearchResult {
            best_move: None,
            score: 0,
            stats: SearchStats::default(),
        };
    }
    if legal.len() == 1 {
        return SearchResult {
            best_move: Some(legal[0]),
            score: eval::evaluate(position, position.side_to_move, enabled),
            stats: SearchStats {
                positions: 1,
                max_depth: 0,
                elapsed_ms: start.elapsed().as_millis() as u64,
                nodes_per_second: 0,
                timeout: false,
            },
        };
    }

    let mut state = SearchState {
        nodes: 0,
        start,
        max_time: limits.max_time,
        timed_out: false,
        ordering: OrderingContext::new(limits.max_depth as usize + 4),
        limits: *limits,
        enabled,
        priority_move,
    };

    let mut best_move = legal[0];
    let mut best_score = eval::evaluate(position, position.side_to_move, enabled);
    let mut completed_depth = 0u32;

    for depth in limits.min_depth..=limits.max_depth {
        if depth > limits.min_depth && state.start.elapsed() > limits.max_time.mul_f64(0.7) {
            break;
        }

        let mut moves = legal.clone();
        state.ordering.clear();
        crate::ordering::order_moves(&state.ordering, position, &mut moves, 0, priority_move);

        let alpha_floor = -MATE_SCORE * 2;
        let beta_ceiling = MATE_SCORE * 2;
        let mut alpha = alpha_floor;
        let mut iter_best_move = moves[0];
        let mut iter_best_score = alpha_floor;
        let mut iteration_complete = true;

        for (i, &mv) in moves.iter().enumerate() {
            if state.should_stop() {
                iteration_complete = false;
                break;
            }
            position.make(mv);
            let score = -alpha_beta::negamax(position, &mut state, depth - 1, 1, -beta_ceiling, -alpha);
            position.unmake();

            if i == 0 || score > iter_best_score {
                iter_best_score = score;
                iter_best_move = mv;
            }
            alpha = alpha.max(iter_best_score);
        }

        if iteration_complete {
            best_move = iter_best_move;
            best_score = iter_best_score;
            completed_depth = depth;
            #[cfg(feature = "logging")]
            log::trace!(
                "depth {depth} complete: best={} score={} nodes={}",
                best_move.to_uci(),
                best_score,
                state.nodes
            );
        } else {
            #[cfg(feature = "logging")]
            log::debug!("depth {depth} aborted by time control at {} nodes", state.nodes);
            break;
        }

        if best_score.abs() >= MATE_CUTOFF {
            break;
        }
    }

    let elapsed = state.start.elapsed();
    let elapsed_ms = elapsed.as_millis() as u64;
    let nodes_per_second = if elapsed_ms > 0 {
        state.nodes * 1000 / elapsed_ms
    } else {
        state.nodes
    };

    SearchResult {
        best_move: Some(best_move),
        score: best_score,
        stats: SearchStats {
            positions: state.nodes,
            max_depth: completed_depth,
            elapsed_ms,
            nodes_per_second,
            timeout: state.timed_out,
        },
    }
}
