//! Static evaluation (spec component E / §4.E): a weighted sum of five
//! heuristics, each gated by an `EnabledHeuristics` flag set and blended
//! across the game phase. Grounded on the teacher's tapered-eval shape in
//! `board/eval.rs`, reworked here as plain per-heuristic functions rather
//! than an mg/eg-tuple accumulator.

mod center;
mod development;
mod king_safety;
mod material;
mod pawn_structure;

use crate::position::state::Position;
use crate::types::{Color, PieceKind};

const PHASE_TOTAL: i32 = 24;

fn phase_weight(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Knight | PieceKind::Bishop => 1,
        PieceKind::Rook => 2,
        PieceKind::Queen => 4,
        _ => 0,
    }
}

/// Remaining-material phase counter; 24 at the start of the game, 0 once
/// all minors/rooks/queens are off the board.
#[must_use]
pub fn phase(position: &Position) -> i32 {
    [PieceKind::Knight, PieceKind::Bishop, PieceKind::Rook, PieceKind::Queen]
        .into_iter()
        .map(|kind| {
            let count = position.pieces(Color::White, kind).pop_count()
                + position.pieces(Color::Black, kind).pop_count();
            count as i32 * phase_weight(kind)
        })
        .sum()
}

/// `0.0` in the opening, approaching `1.0` as material is traded off.
#[must_use]
pub fn endgame_weight(position: &Position) -> f64 {
    (1.0 - f64::from(phase(position)) / f64::from(PHASE_TOTAL)).max(0.0)
}

/// Which heuristics a difficulty tier turns on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EnabledHeuristics {
    pub material: bool,
    pub center_control: bool,
    pub development: bool,
    pub pawn_structure: bool,
    pub king_safety: bool,
}

impl EnabledHeuristics {
    pub const ALL: EnabledHeuristics = EnabledHeuristics {
        material: true,
        center_control: true,
        development: true,
        pawn_structure: true,
        king_safety: true,
    };
}

impl Default for EnabledHeuristics {
    fn default() -> Self {
        Self::ALL
    }
}

/// Per-heuristic contributions alongside the composite total, for reporting.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Clone, Copy, Debug, Default)]
pub struct EvalBreakdown {
    pub material: Option<i32>,
    pub center_control: Option<i32>,
    pub development: Option<i32>,
    pub pawn_structure: Option<i32>,
    pub king_safety: Option<i32>,
    pub total: i32,
}

/// Composite centipawn score from `us`'s perspective.
#[must_use]
pub fn evaluate(position: &Position, us: Color, enabled: EnabledHeuristics) -> i32 {
    evaluate_with_breakdown(position, us, enabled).total
}

/// As `evaluate`, but also returns the contribution of each enabled heuristic.
#[must_use]
pub fn evaluate_with_breakdown(
    position: &Position,
    us: Color,
    enabled: EnabledHeuristics,
) -> EvalBreakdown {
    let mut breakdown = EvalBreakdown::default();

    if enabled.material {
        let s = material::score(position, us);
        breakdown.material = Some(s);
        breakdown.total += s;
    }
    if enabled.center_control {
        let s = center::score(position, us);
        breakdown.center_control = Some(s);
        breakdown.total += s;
    }
    if enabled.development && position.ply() <= 20 {
        let s = development::score(position, us);
        breakdown.development = Some(s);
        breakdown.total += s;
    }
    if enabled.pawn_structure {
        let s = pawn_structure::score(position, us);
        breakdown.pawn_structure = Some(s);
        breakdown.total += s;
    }
    if enabled.king_safety {
        let raw = king_safety::score(position, us);
        let weight = (1.0 - endgame_weight(position)).max(0.2);
        let s = (f64::from(raw) * weight).round() as i32;
        breakdown.king_safety = Some(s);
        breakdown.total += s;
    }

    breakdown
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::fen::from_fen;

    #[test]
    fn initial_position_is_balanced() {
        let pos = Position::new();
        assert_eq!(evaluate(&pos, Color::White, EnabledHeuristics::ALL), 0);
        assert_eq!(evaluate(&pos, Color::Black, EnabledHeuristics::ALL), 0);
    }

    #[test]
    fn extra_queen_favors_its_owner() {
        let pos = from_fen("rnb1kbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1").unwrap();
        let white_up_a_queen = evaluate(&pos, Color::White, EnabledHeuristics::ALL);
        assert!(white_up_a_queen > 800);
    }

    #[test]
    fn perspective_is_antisymmetric_for_material_only() {
        let pos = from_fen("rnb1kbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1").unwrap();
        let only_material = EnabledHeuristics {
            material: true,
            center_control: false,
            development: false,
            pawn_structure: false,
            king_safety: false,
        };
        let white = evaluate(&pos, Color::White, only_material);
        let black = evaluate(&pos, Color::Black, only_material);
        assert_eq!(white, -black);
    }

    #[test]
    fn phase_is_full_at_game_start() {
        assert_eq!(phase(&Position::new()), PHASE_TOTAL);
        assert_eq!(endgame_weight(&Position::new()), 0.0);
    }
}
