//! Zobrist keying (spec component D / §4.D).
//!
//! Seeds are fixed, deterministic constants generated once from a seeded
//! `StdRng`, in the teacher's style (`zobrist.rs`): reproducible across runs
//! without shipping a literal 800-entry table by hand.

use crate::position::state::Position;
use crate::types::{Color, PieceKind, ALL_PIECE_KINDS};
use once_cell::sync::Lazy;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

struct ZobristKeys {
    /// `piece[color][kind][square]`
    piece: [[[u64; 64]; 6]; 2],
    /// `castling[mask]`, one per castling-rights bitmask value (0..16).
    castling: [u64; 16],
    /// `side[color]`
    side: [u64; 2],
    /// `en_passant[index]`: 0..8 for a white two-step target (rank 2), 8..16
    /// for a black two-step target (rank 5), 16 for "none".
    en_passant: [u64; 17],
}

impl ZobristKeys {
    fn generate() -> Self {
        let mut rng = StdRng::seed_from_u64(0x5A17_8000_C035_53ED);

        let mut piece = [[[0u64; 64]; 6]; 2];
        for color_table in &mut piece {
            for kind_table in color_table.iter_mut() {
                for seed in kind_table.iter_mut() {
                    *seed = rng.gen();
                }
            }
        }

        let mut castling = [0u64; 16];
        for seed in &mut castling {
            *seed = rng.gen();
        }

        let side = [rng.gen(), rng.gen()];

        let mut en_passant = [0u64; 17];
        for seed in &mut en_passant {
            *seed = rng.gen();
        }

        ZobristKeys {
            piece,
            castling,
            side,
            en_passant,
        }
    }
}

static KEYS: Lazy<ZobristKeys> = Lazy::new(ZobristKeys::generate);

#[inline]
pub(crate) fn piece_square_seed(color: Color, kind: PieceKind, sq_index: usize) -> u64 {
    KEYS.piece[color.index()][kind.index()][sq_index]
}

#[inline]
pub(crate) fn castling_seed(mask: u8) -> u64 {
    KEYS.castling[mask as usize]
}

#[inline]
pub(crate) fn side_seed(color: Color) -> u64 {
    KEYS.side[color.index()]
}

/// Index for the en-passant seed table: a non-sentinel `ep_square` maps to
/// its file (0..8) if on rank 2, `8+file` if on rank 5, else 16 ("none").
#[inline]
pub(crate) fn en_passant_index(ep_square: Option<crate::types::Square>) -> usize {
    match ep_square {
        Some(sq) if sq.rank() == 2 => sq.file() as usize,
        Some(sq) if sq.rank() == 5 => 8 + sq.file() as usize,
        _ => 16,
    }
}

#[inline]
pub(crate) fn en_passant_seed(ep_square: Option<crate::types::Square>) -> u64 {
    KEYS.en_passant[en_passant_index(ep_square)]
}

/// Recompute the Zobrist key for `position` from scratch. Used only at
/// construction time and in invariant checks; `make`/`unmake` maintain the
/// key incrementally.
#[must_use]
pub fn zobrist_from_scratch(position: &Position) -> u64 {
    let mut key = 0u64;
    for color in [Color::White, Color::Black] {
        for kind in ALL_PIECE_KINDS {
            for sq in position.pieces(color, kind).iter() {
                key ^= piece_square_seed(color, kind, sq.index());
            }
        }
    }
    key ^= castling_seed(position.castling_rights());
    key ^= side_seed(position.side_to_move);
    key ^= en_passant_seed(position.ep_square);
    key
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_scratch_matches_initial_position() {
        let pos = Position::new();
        assert_eq!(pos.zobrist(), zobrist_from_scratch(&pos));
    }

    #[test]
    fn en_passant_index_layout() {
        use crate::types::Square;
        assert_eq!(en_passant_index(None), 16);
        assert_eq!(en_passant_index(Some(Square::from_rank_file(2, 3))), 3);
        assert_eq!(en_passant_index(Some(Square::from_rank_file(5, 3))), 11);
    }
}
