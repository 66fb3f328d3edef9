//! Difficulty tiers (spec §4.H). A `DifficultyProfile` is a plain `Copy`
//! value — no runtime type dispatch, matching the teacher's
//! `SearchOptions`/config-struct style rather than a boolean-toggle object.

use crate::eval::EnabledHeuristics;
use crate::search::SearchLimits;
use std::ops::Range;
use std::time::Duration;

#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Difficulty {
    Rookie,
    Casual,
    Strategic,
    Master,
}

/// Every knob §4.H names: search bounds, ordering aids, pruning toggles,
/// book/eval gating, and imperfection-injection rates.
#[derive(Clone, Copy, Debug)]
pub struct DifficultyProfile {
    pub name: Difficulty,
    pub min_depth: u32,
    pub max_depth: u32,
    pub max_time: Duration,
    pub use_quiescence: bool,
    pub quiescence_depth: u32,
    pub use_null_move: bool,
    pub use_lmr: bool,
    pub use_book: bool,
    pub enabled_heuristics: EnabledHeuristics,
    pub blunder_chance: f64,
    pub mistake_chance: f64,
    pub mistake_pool_size: usize,
    pub thinking_delay_ms: Range<u64>,
}

impl DifficultyProfile {
    #[must_use]
    pub fn for_tier(tier: Difficulty) -> Self {
        match tier {
            Difficulty::Rookie => DifficultyProfile {
                name: tier,
                min_depth: 2,
                max_depth: 4,
                max_time: Duration::from_millis(1500),
                use_quiescence: true,
                quiescence_depth: 2,
                use_null_move: false,
                use_lmr: false,
                use_book: false,
                enabled_heuristics: EnabledHeuristics::ALL,
                blunder_chance: 0.10,
                mistake_chance: 0.15,
                mistake_pool_size: 6,
                thinking_delay_ms: 300..900,
            },
            Difficulty::Casual => DifficultyProfile {
                name: tier,
                min_depth: 4,
                max_depth: 6,
                max_time: Duration::from_millis(2500),
                use_quiescence: true,
                quiescence_depth: 3,
                use_null_move: false,
                use_lmr: false,
                use_book: true,
                enabled_heuristics: EnabledHeuristics::ALL,
                blunder_chance: 0.03,
                mistake_chance: 0.08,
                mistake_pool_size: 4,
                thinking_delay_ms: 400..1200,
            },
            Difficulty::Strategic => DifficultyProfile {
                name: tier,
                min_depth: 6,
                max_depth: 8,
                max_time: Duration::from_millis(4000),
                use_quiescence: true,
                quiescence_depth: 4,
                use_null_move: false,
                use_lmr: true,
                use_book: true,
                enabled_heuristics: EnabledHeuristics::ALL,
                blunder_chance: 0.0,
                mistake_chance: 0.02,
                mistake_pool_size: 3,
                thinking_delay_ms: 500..1500,
            },
            Difficulty::Master => DifficultyProfile {
                name: tier,
                min_depth: 8,
                max_depth: 10,
                max_time: Duration::from_millis(6000),
                use_quiescence: true,
                quiescence_depth: 6,
                use_null_move: true,
                use_lmr: true,
                use_book: true,
                enabled_heuristics: EnabledHeuristics::ALL,
                blunder_chance: 0.0,
                mistake_chance: 0.0,
                mistake_pool_size: 1,
                thinking_delay_ms: 600..1800,
            },
        }
    }

    #[must_use]
    pub fn search_limits(&self) -> SearchLimits {
        SearchLimits {
            min_depth: self.min_depth,
            max_depth: self.max_depth,
            max_time: self.max_time,
            use_quiescence: self.use_quiescence,
            quiescence_depth: self.quiescence_depth,
            use_null_move: self.use_null_move,
            use_lmr: self.use_lmr,
        }
    }
}
