//! Decision report (spec component I / §3, §4.I). A structured trace of one
//! `choose_move` call; `to_json`/`to_text` are thin boundary adapters, not
//! core logic, per the teacher's `uci_info`/report-serializer split.

use crate::difficulty::Difficulty;
use crate::eval::EvalBreakdown;
use crate::search::SearchStats;
use crate::types::{Color, Move};
use std::collections::VecDeque;
use std::fmt::Write as _;

#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImperfectionKind {
    None,
    Blunder,
    Suboptimal,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Clone, Copy, Debug)]
pub struct Imperfection {
    pub kind: ImperfectionKind,
    pub original_move: Option<Move>,
}

impl Imperfection {
    const NONE: Imperfection = Imperfection {
        kind: ImperfectionKind::None,
        original_move: None,
    };
}

#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Clone, Copy, Debug, Default)]
pub struct BookOutcome {
    pub tried: bool,
    pub found: bool,
    pub mv: Option<Move>,
    pub used_as_priority: bool,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Clone, Copy, Debug)]
pub struct MoveEvaluation {
    pub mv: Move,
    pub total_score: i32,
    pub breakdown: EvalBreakdown,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Clone, Debug)]
pub struct Report {
    pub timestamp_ms: u64,
    pub side: Color,
    pub difficulty: Difficulty,
    pub fen: String,
    pub ply: u32,
    pub legal_moves: Vec<Move>,
    pub book: BookOutcome,
    pub search_stats: SearchStats,
    pub move_evaluations: Vec<MoveEvaluation>,
    pub chosen_move: Option<Move>,
    pub chosen_score: i32,
    pub imperfection: Imperfection,
    pub final_move: Option<Move>,
}

impl Report {
    #[must_use]
    pub fn new(timestamp_ms: u64, side: Color, difficulty: Difficulty, fen: String, ply: u32) -> Self {
        Report {
            timestamp_ms,
            side,
            difficulty,
            fen,
            ply,
            legal_moves: Vec::new(),
            book: BookOutcome::default(),
            search_stats: SearchStats::default(),
            move_evaluations: Vec::new(),
            chosen_move: None,
            chosen_score: 0,
            imperfection: Imperfection::NONE,
            final_move: None,
        }
    }

    /// Move evaluations sorted by descending score, highest first.
    #[must_use]
    pub fn top_moves(&self, n: usize) -> Vec<&MoveEvaluation> {
        let mut refs: Vec<&MoveEvaluation> = self.move_evaluations.iter().collect();
        refs.sort_by_key(|e| std::cmp::Reverse(e.total_score));
        refs.truncate(n);
        refs
    }

    /// Human-readable line-oriented rendering: meta, book, search stats,
    /// move analysis (top 10 then the full list), decision.
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "=== decision report ===");
        let _ = writeln!(
            out,
            "meta: t={} side={:?} difficulty={:?} ply={} fen=\"{}\"",
            self.timestamp_ms, self.side, self.difficulty, self.ply, self.fen
        );
        let _ = writeln!(
            out,
            "book: tried={} found={} move={} used_as_priority={}",
            self.book.tried,
            self.book.found,
            self.book.mv.map_or_else(|| "-".to_string(), |m| m.to_uci()),
            self.book.used_as_priority
        );
        let _ = writeln!(
            out,
            "search: positions={} max_depth={} elapsed_ms={} nps={} timeout={}",
            self.search_stats.positions,
            self.search_stats.max_depth,
            self.search_stats.elapsed_ms,
            self.search_stats.nodes_per_second,
            self.search_stats.timeout
        );
        let _ = writeln!(out, "top moves:");
        for eval in self.top_moves(10) {
            let _ = writeln!(out, "  {} {}", eval.mv.to_uci(), eval.total_score);
        }
        let _ = writeln!(out, "all moves ({}):", self.move_evaluations.len());
        for eval in &self.move_evaluations {
            let _ = writeln!(out, "  {} {}", eval.mv.to_uci(), eval.total_score);
        }
        let _ = writeln!(
            out,
            "decision: chosen={} score={} imperfection={:?} final={}",
            self.chosen_move.map_or_else(|| "-".to_string(), |m| m.to_uci()),
            self.chosen_score,
            self.imperfection.kind,
            self.final_move.map_or_else(|| "-".to_string(), |m| m.to_uci())
        );
        out
    }

    /// JSON rendering, field order matching `to_text`'s section order.
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Bounded FIFO of past reports, oldest evicted first (spec §5's "latest
/// report / report history", threaded through `Engine` rather than kept as
/// global state, per spec §9's ownership-discipline preference).
#[derive(Debug)]
pub struct ReportHistory {
    reports: VecDeque<Report>,
    capacity: usize,
}

impl ReportHistory {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        ReportHistory {
            reports: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, report: Report) {
        if self.reports.len() == self.capacity {
            self.reports.pop_front();
        }
        self.reports.push_back(report);
    }

    #[must_use]
    pub fn latest(&self) -> Option<&Report> {
        self.reports.back()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.reports.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    pub fn clear(&mut self) {
        self.reports.clear();
    }
}

impl Default for ReportHistory {
    fn default() -> Self {
        Self::new(100)
    }
}
