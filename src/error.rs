//! Error taxonomy (spec §7). `IllegalFen` is surfaced to FEN callers;
//! `IllegalMove` is a programming-error assertion in debug builds; the rest
//! (`NoLegalMoves`, `Timeout`, `BookUnavailable`) are represented
//! structurally rather than as exceptions, per spec.

use std::fmt;

/// Malformed or inconsistent FEN input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FenError {
    WrongFieldCount { found: usize },
    InvalidPiece { ch: char },
    TooManyFiles { rank: u8 },
    InvalidRankCount { found: usize },
    InvalidSideToMove { found: String },
    InvalidCastling { ch: char },
    InvalidEnPassant { found: String },
    InvalidHalfmoveClock { found: String },
    InvalidFullmoveNumber { found: String },
    WrongKingCount { color_white_count: u32, color_black_count: u32 },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::WrongFieldCount { found } => {
                write!(f, "FEN must have exactly 6 space-separated fields, found {found}")
            }
            FenError::InvalidPiece { ch } => write!(f, "invalid piece character '{ch}' in FEN"),
            FenError::TooManyFiles { rank } => write!(f, "rank {rank} describes more than 8 files"),
            FenError::InvalidRankCount { found } => {
                write!(f, "placement field must describe 8 ranks, found {found}")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "side to move must be 'w' or 'b', found '{found}'")
            }
            FenError::InvalidCastling { ch } => write!(f, "invalid castling character '{ch}'"),
            FenError::InvalidEnPassant { found } => write!(f, "invalid en-passant square '{found}'"),
            FenError::InvalidHalfmoveClock { found } => {
                write!(f, "invalid halfmove clock '{found}'")
            }
            FenError::InvalidFullmoveNumber { found } => {
                write!(f, "invalid fullmove number '{found}'")
            }
            FenError::WrongKingCount {
                color_white_count,
                color_black_count,
            } => write!(
                f,
                "each side must have exactly one king, found white={color_white_count} black={color_black_count}"
            ),
        }
    }
}

impl std::error::Error for FenError {}

/// A move passed to `Position::make` that is not legal in the current
/// position. Debug builds assert; release builds return this error instead
/// of invoking undefined behavior.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IllegalMoveError {
    pub attempted: crate::types::Move,
}

impl fmt::Display for IllegalMoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "illegal move attempted: {}", self.attempted)
    }
}

impl std::error::Error for IllegalMoveError {}
