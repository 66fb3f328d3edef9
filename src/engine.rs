//! The decision layer (spec component H / §4.H): book lookup, search, and
//! difficulty-scaled imperfection, wrapped around a `Report` of what
//! happened. Grounded on the teacher's `SimpleEngine`/`SearchEngine` split in
//! `engine.rs`, reworked from a UCI-facing shell into the self-contained
//! `choose_move` entry point this spec describes.

use crate::book::{sample_weighted, BookSource, EmptyBook};
use crate::difficulty::{Difficulty, DifficultyProfile};
use crate::eval;
use crate::position::fen::to_fen;
use crate::position::movegen;
use crate::position::state::Position;
use crate::report::{BookOutcome, Imperfection, ImperfectionKind, MoveEvaluation, Report, ReportHistory};
use crate::search;
use crate::types::Move;
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

const REPORT_HISTORY_CAPACITY: usize = 100;
/// Book consultation only applies in the opening, per spec §4.H.
const BOOK_PLY_CUTOFF: u32 = 30;

/// A configured opponent: a difficulty tier, an optional opening book, and
/// the report history it accumulates across calls. The history is guarded
/// by a `Mutex` rather than a plain field so it stays sound if an adapter
/// ever reads it from another thread while `choose_move` is running.
pub struct Engine {
    profile: DifficultyProfile,
    book: Box<dyn BookSource + Send + Sync>,
    rng: StdRng,
    history: Mutex<ReportHistory>,
    simulate_delay: bool,
}

impl Engine {
    #[must_use]
    pub fn new(difficulty: Difficulty) -> Self {
        Engine {
            profile: DifficultyProfile::for_tier(difficulty),
            book: Box::new(EmptyBook),
            rng: StdRng::from_entropy(),
            history: Mutex::new(ReportHistory::new(REPORT_HISTORY_CAPACITY)),
            simulate_delay: true,
        }
    }

    #[must_use]
    pub fn with_book(difficulty: Difficulty, book: Box<dyn BookSource + Send + Sync>) -> Self {
        Engine {
            book,
            ..Engine::new(difficulty)
        }
    }

    /// Deterministic construction for tests: fixed RNG seed, no thinking delay.
    #[must_use]
    pub fn deterministic_for_test(difficulty: Difficulty, seed: u64) -> Self {
        Self::deterministic_with_profile(DifficultyProfile::for_tier(difficulty), seed)
    }

    /// As `deterministic_for_test`, but with a caller-supplied profile (used
    /// by tests that need to override a tier's blunder/mistake rate).
    #[must_use]
    pub fn deterministic_with_profile(profile: DifficultyProfile, seed: u64) -> Self {
        Engine {
            profile,
            book: Box::new(EmptyBook),
            rng: StdRng::seed_from_u64(seed),
            history: Mutex::new(ReportHistory::new(REPORT_HISTORY_CAPACITY)),
            simulate_delay: false,
        }
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.profile.name
    }

    /// A clone of the most recent decision report, if `choose_move` has run.
    #[must_use]
    pub fn latest_report(&self) -> Option<Report> {
        self.history.lock().latest().cloned()
    }

    /// Number of reports currently retained.
    #[must_use]
    pub fn report_history_len(&self) -> usize {
        self.history.lock().len()
    }

    fn now_ms() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }

    fn simulate_thinking(&mut self) {
        if !self.simulate_delay {
            return;
        }
        let range = self.profile.thinking_delay_ms.clone();
        let ms = if range.start >= range.end {
            range.start
        } else {
            self.rng.gen_range(range)
        };
        thread::sleep(Duration::from_millis(ms));
    }

    /// Consult the book, if enabled at this ply. Returns the sampled move
    /// (only if it is actually legal) alongside the recorded outcome.
    fn consult_book(&mut self, position: &Position, legal: &[Move]) -> (BookOutcome, Option<Move>) {
        if !self.profile.use_book || position.ply() > BOOK_PLY_CUTOFF {
            return (BookOutcome::default(), None);
        }
        let candidates = self.book.query(position.zobrist());
        let sampled = sample_weighted(&candidates, &mut self.rng);
        let legal_sampled = sampled.filter(|mv| legal.contains(mv));
        #[cfg(feature = "logging")]
        log::debug!(
            "book: {} candidates, sampled={:?}, legal={}",
            candidates.len(),
            sampled.map(|m| m.to_uci()),
            legal_sampled.is_some()
        );
        let outcome = BookOutcome {
            tried: true,
            found: !candidates.is_empty(),
            mv: legal_sampled,
            used_as_priority: legal_sampled.is_some(),
        };
        (outcome, legal_sampled)
    }

    /// Evaluate every legal move one ply deep, from `us`'s perspective, for
    /// the report's move-analysis section.
    fn evaluate_candidates(&self, position: &Position, legal: &[Move]) -> Vec<MoveEvaluation> {
        let us = position.side_to_move;
        let mut scratch = position.clone();
        legal
            .iter()
            .map(|&mv| {
                scratch.make(mv);
                let breakdown = eval::evaluate_with_breakdown(&scratch, us, self.profile.enabled_heuristics);
                scratch.unmake();
                MoveEvaluation {
                    mv,
                    total_score: breakdown.total,
                    breakdown,
                }
            })
            .collect()
    }

    /// Replace `search_choice` with a deliberately weaker move, scaled by
    /// this tier's blunder/mistake rates (spec §4.H).
    fn apply_imperfection(
        &mut self,
        legal: &[Move],
        evaluations: &[MoveEvaluation],
        search_choice: Move,
    ) -> (Move, Imperfection) {
        let roll: f64 = self.rng.gen();
        if roll < self.profile.blunder_chance {
            let idx = self.rng.gen_range(0..legal.len());
            let picked = legal[idx];
            if picked == search_choice {
                return (search_choice, Imperfection { kind: ImperfectionKind::None, original_move: None });
            }
            #[cfg(feature = "logging")]
            log::debug!("injecting blunder: {} instead of {}", picked.to_uci(), search_choice.to_uci());
            return (
                picked,
                Imperfection {
                    kind: ImperfectionKind::Blunder,
                    original_move: Some(search_choice),
                },
            );
        }

        if roll < self.profile.blunder_chance + self.profile.mistake_chance {
            let mut ranked: Vec<&MoveEvaluation> = evaluations.iter().collect();
            ranked.sort_by_key(|e| std::cmp::Reverse(e.total_score));
            let pool_size = self.profile.mistake_pool_size.min(ranked.len()).max(1);
            let idx = self.rng.gen_range(0..pool_size);
            let picked = ranked[idx].mv;
            if picked == search_choice {
                return (search_choice, Imperfection { kind: ImperfectionKind::None, original_move: None });
            }
            return (
                picked,
                Imperfection {
                    kind: ImperfectionKind::Suboptimal,
                    original_move: Some(search_choice),
                },
            );
        }

        (search_choice, Imperfection { kind: ImperfectionKind::None, original_move: None })
    }

    /// Choose a move for the side to move in `position`, following the
    /// book-then-search-then-imperfection pipeline and recording a `Report`.
    /// Returns `None` only when `position` has no legal move.
    pub fn choose_move(&mut self, position: &Position) -> Option<Move> {
        let mut report = Report::new(
            Self::now_ms(),
            position.side_to_move,
            self.profile.name,
            to_fen(position),
            position.ply(),
        );

        self.simulate_thinking();

        let legal = movegen::legal_moves(position);
        report.legal_moves = legal.clone();

        if legal.is_empty() {
            report.final_move = None;
            self.history.lock().push(report);
            return None;
        }
        if legal.len() == 1 {
            let only = legal[0];
            report.chosen_move = Some(only);
            report.final_move = Some(only);
            self.history.lock().push(report);
            return Some(only);
        }

        let (book_outcome, priority_move) = self.consult_book(position, &legal);
        report.book = book_outcome;

        let evaluations = self.evaluate_candidates(position, &legal);
        report.move_evaluations = evaluations.clone();

        let mut search_position = position.clone();
        let limits = self.profile.search_limits();
        let result = search::search(&mut search_position, &limits, self.profile.enabled_heuristics, priority_move);
        report.search_stats = result.stats;

        let search_choice = result.best_move.unwrap_or(legal[0]);
        let (chosen, imperfection) = self.apply_imperfection(&legal, &evaluations, search_choice);

        report.chosen_move = Some(search_choice);
        report.chosen_score = result.score;
        report.imperfection = imperfection;
        report.final_move = Some(chosen);

        self.history.lock().push(report);
        Some(chosen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_none_on_checkmate() {
        let pos = crate::position::fen::from_fen(
            "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3",
        )
        .unwrap();
        let mut engine = Engine::deterministic_for_test(Difficulty::Master, 1);
        assert_eq!(engine.choose_move(&pos), None);
        assert!(engine.latest_report().unwrap().legal_moves.is_empty());
    }

    #[test]
    fn master_finds_mate_in_one_with_imperfection_disabled() {
        let pos = crate::position::fen::from_fen("6k1/5ppp/8/8/8/8/5PPP/R5K1 w - - 0 1").unwrap();
        let mut engine = Engine::deterministic_for_test(Difficulty::Master, 42);
        let mv = engine.choose_move(&pos).expect("legal move exists");
        assert_eq!(mv.to_uci(), "a1a8");
        let report = engine.latest_report().unwrap();
        assert_eq!(report.legal_moves.len(), 20);
        assert!(report.search_stats.max_depth >= 1);
    }

    #[test]
    fn zero_legal_moves_is_recorded_as_stalemate_report() {
        let pos = crate::position::fen::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
        assert!(!pos.is_in_check());
        let mut engine = Engine::deterministic_for_test(Difficulty::Rookie, 7);
        assert_eq!(engine.choose_move(&pos), None);
        assert!(engine.latest_report().unwrap().legal_moves.is_empty());
    }

    #[test]
    fn initial_position_returns_a_legal_move() {
        let pos = Position::new();
        let mut engine = Engine::deterministic_for_test(Difficulty::Rookie, 3);
        let mv = engine.choose_move(&pos).expect("opening has legal moves");
        assert!(movegen::legal_moves(&pos).contains(&mv));
        assert!(engine.latest_report().unwrap().search_stats.positions > 0 || movegen::legal_moves(&pos).len() == 1);
    }
}
