//! Opening-book boundary (spec §6/§1 non-goals). The core never parses a
//! book file format; it only consumes weighted candidate moves through this
//! trait. Modeled on the teacher's trait-at-the-seam style (`engine.rs`'s
//! `SearchEngine`), since the teacher has no book module of its own.

use crate::types::Move;

/// One weighted candidate move returned by a book lookup.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BookMove {
    pub mv: Move,
    pub weight: u32,
}

/// An external source of opening-book candidates, keyed by Zobrist hash.
/// Implementations may wrap a Polyglot file, an in-memory map, or a remote
/// lookup; loading such a source is outside this crate's scope.
pub trait BookSource {
    /// Candidate moves for `zobrist_key`, or an empty vector if the book has
    /// no entry. Never panics on an unknown key.
    fn query(&self, zobrist_key: u64) -> Vec<BookMove>;
}

/// A `BookSource` with no entries, used where book consultation is disabled.
#[derive(Clone, Copy, Debug, Default)]
pub struct EmptyBook;

impl BookSource for EmptyBook {
    fn query(&self, _zobrist_key: u64) -> Vec<BookMove> {
        Vec::new()
    }
}

/// Sample one candidate by weight using the supplied RNG. Returns `None` on
/// an empty list or if every weight is zero.
pub(crate) fn sample_weighted<R: rand::Rng + ?Sized>(
    candidates: &[BookMove],
    rng: &mut R,
) -> Option<Move> {
    let total: u32 = candidates.iter().map(|c| c.weight).sum();
    if total == 0 {
        return None;
    }
    let mut pick = rng.gen_range(0..total);
    for candidate in candidates {
        if pick < candidate.weight {
            return Some(candidate.mv);
        }
        pick -= candidate.weight;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PieceKind, Square};

    fn mv(from: u8, to: u8) -> Move {
        Move::quiet(Square::new(from), Square::new(to), PieceKind::Pawn)
    }

    #[test]
    fn empty_book_returns_no_candidates() {
        assert!(EmptyBook.query(0xDEAD_BEEF).is_empty());
    }

    #[test]
    fn weighted_sample_picks_only_candidate() {
        let candidates = [BookMove { mv: mv(8, 16), weight: 5 }];
        let mut rng = rand::rngs::mock::StepRng::new(0, 1);
        assert_eq!(sample_weighted(&candidates, &mut rng), Some(mv(8, 16)));
    }

    #[test]
    fn all_zero_weights_yields_none() {
        let candidates = [BookMove { mv: mv(8, 16), weight: 0 }];
        let mut rng = rand::rngs::mock::StepRng::new(0, 1);
        assert_eq!(sample_weighted(&candidates, &mut rng), None);
    }
}
