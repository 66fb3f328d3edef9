//! Decision-layer and search scenarios (spec §8 properties 12-15, scenarios
//! A, E, F).

use chess_core::difficulty::DifficultyProfile;
use chess_core::eval::{evaluate, EnabledHeuristics};
use chess_core::position::fen::from_fen;
use chess_core::position::movegen::legal_moves;
use chess_core::report::ImperfectionKind;
use chess_core::search::{self, MATE_CUTOFF};
use chess_core::{Color, Difficulty, Engine, Position};

#[test]
fn evaluator_is_antisymmetric_across_perspectives() {
    let pos = from_fen("r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3").unwrap();
    let white = evaluate(&pos, Color::White, EnabledHeuristics::ALL);
    let black = evaluate(&pos, Color::Black, EnabledHeuristics::ALL);
    assert_eq!(white, -black);
}

#[test]
fn scenario_a_scholars_mate_pattern_is_found_by_search() {
    // Position after 1.e4 e5 2.Bc4 Nc6 3.Qh5 Nf6??, White to move.
    let pos = from_fen("r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w KQkq - 4 4").unwrap();
    let limits = search::SearchLimits {
        min_depth: 1,
        max_depth: 3,
        max_time: std::time::Duration::from_secs(5),
        use_quiescence: true,
        quiescence_depth: 4,
        use_null_move: false,
        use_lmr: false,
    };
    let mut search_pos = pos.clone();
    let result = search::search(&mut search_pos, &limits, EnabledHeuristics::ALL, None);
    let best = result.best_move.expect("legal moves exist");
    assert_eq!(best.to_uci(), "h5f7");
}

#[test]
fn scenario_e_mate_in_one_found_at_every_difficulty() {
    let pos = from_fen("6k1/5ppp/8/8/8/8/5PPP/R5K1 w - - 0 1").unwrap();
    for (seed, tier) in [
        (1, Difficulty::Rookie),
        (2, Difficulty::Casual),
        (3, Difficulty::Strategic),
        (4, Difficulty::Master),
    ] {
        let mut profile = DifficultyProfile::for_tier(tier);
        profile.blunder_chance = 0.0;
        let mut engine = Engine::deterministic_with_profile(profile, seed);
        let mv = engine.choose_move(&pos).expect("legal moves exist");
        assert_eq!(mv.to_uci(), "a1a8", "tier {tier:?} failed to find mate in one");
    }
}

#[test]
fn scenario_f_master_report_contents_at_initial_position() {
    let pos = Position::new();
    let mut engine = Engine::deterministic_for_test(Difficulty::Master, 99);
    let mv = engine.choose_move(&pos).expect("opening has legal moves");
    let report = engine.latest_report().unwrap();

    assert_eq!(report.legal_moves.len(), 20);
    assert!(report.search_stats.max_depth >= 8 || report.search_stats.timeout);
    assert!(report.legal_moves.contains(&mv));
    assert_eq!(report.final_move, Some(mv));

    for evaluation in &report.move_evaluations {
        assert!(evaluation.breakdown.material.is_some());
        assert!(evaluation.breakdown.center_control.is_some());
        assert!(evaluation.breakdown.pawn_structure.is_some());
        assert!(evaluation.breakdown.king_safety.is_some());
    }
}

#[test]
fn imperfection_free_master_always_returns_search_best_move() {
    let pos = from_fen("6k1/5ppp/8/8/8/8/5PPP/R5K1 w - - 0 1").unwrap();
    let mut engine = Engine::deterministic_for_test(Difficulty::Master, 5);
    let mv = engine.choose_move(&pos).unwrap();
    let report = engine.latest_report().unwrap();
    assert_eq!(report.chosen_move, Some(mv));
    assert_eq!(report.final_move, Some(mv));
    assert_eq!(report.imperfection.kind, ImperfectionKind::None);
}

#[test]
fn never_returns_none_while_legal_moves_exist() {
    let pos = Position::new();
    assert!(!legal_moves(&pos).is_empty());
    let mut engine = Engine::deterministic_for_test(Difficulty::Rookie, 11);
    assert!(engine.choose_move(&pos).is_some());
}

#[test]
fn mate_score_is_bounded_within_safe_i32_range() {
    assert!(MATE_CUTOFF < 32_000);
    assert!(MATE_CUTOFF * 2 < i32::MAX / 2);
}
