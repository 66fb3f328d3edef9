//! Core scalar types shared across the crate: squares, colors, piece kinds,
//! castling rights and the move representation.

use std::fmt;

/// A board square, encoded as `rank * 8 + file` with `rank 0 == a1..h1`.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(pub u8);

impl Square {
    /// Sentinel used where "no square" is needed (e.g. a cleared en-passant target).
    pub const NONE: Square = Square(64);

    #[inline]
    #[must_use]
    pub const fn new(index: u8) -> Self {
        Square(index)
    }

    #[inline]
    #[must_use]
    pub const fn from_rank_file(rank: u8, file: u8) -> Self {
        Square(rank * 8 + file)
    }

    #[inline]
    #[must_use]
    pub const fn rank(self) -> u8 {
        self.0 / 8
    }

    #[inline]
    #[must_use]
    pub const fn file(self) -> u8 {
        self.0 % 8
    }

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 < 64
    }

    /// Parse algebraic notation such as `"e4"`.
    #[must_use]
    pub fn from_algebraic(s: &str) -> Option<Square> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let file = bytes[0];
        let rank = bytes[1];
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return None;
        }
        Some(Square::from_rank_file(rank - b'1', file - b'a'))
    }

    #[must_use]
    pub fn to_algebraic(self) -> String {
        format!(
            "{}{}",
            (b'a' + self.file()) as char,
            (b'1' + self.rank()) as char
        )
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}

/// The side to move. `White = 0`, `Black = 1`; "us/them" is `color ^ 1`.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    White = 0,
    Black = 1,
}

impl Color {
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    #[inline]
    #[must_use]
    pub const fn from_index(idx: usize) -> Color {
        match idx {
            0 => Color::White,
            _ => Color::Black,
        }
    }

    /// The pawn's forward direction for this color, in ranks.
    #[inline]
    #[must_use]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    #[inline]
    #[must_use]
    pub const fn starting_rank(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    #[inline]
    #[must_use]
    pub const fn pawn_start_rank(self) -> u8 {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }

    #[inline]
    #[must_use]
    pub const fn promotion_rank(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }
}

/// Piece kind. Ordered `King=0, Queen=1, Rook=2, Bishop=3, Knight=4, Pawn=5`
/// to match the spec's data model; `mailbox` uses `Option<PieceKind>` rather
/// than a `None` sentinel variant (idiomatic remapping of the spec's `None=6`).
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    King = 0,
    Queen = 1,
    Rook = 2,
    Bishop = 3,
    Knight = 4,
    Pawn = 5,
}

pub const ALL_PIECE_KINDS: [PieceKind; 6] = [
    PieceKind::King,
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Pawn,
];

impl PieceKind {
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn to_char(self, color: Color) -> char {
        let c = match self {
            PieceKind::King => 'k',
            PieceKind::Queen => 'q',
            PieceKind::Rook => 'r',
            PieceKind::Bishop => 'b',
            PieceKind::Knight => 'n',
            PieceKind::Pawn => 'p',
        };
        match color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    #[must_use]
    pub fn from_char(c: char) -> Option<(Color, PieceKind)> {
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let kind = match c.to_ascii_lowercase() {
            'k' => PieceKind::King,
            'q' => PieceKind::Queen,
            'r' => PieceKind::Rook,
            'b' => PieceKind::Bishop,
            'n' => PieceKind::Knight,
            'p' => PieceKind::Pawn,
            _ => return None,
        };
        Some((color, kind))
    }
}

/// Castling-rights bitmask values.
pub const CASTLE_WHITE_K: u8 = 1;
pub const CASTLE_WHITE_Q: u8 = 2;
pub const CASTLE_BLACK_K: u8 = 4;
pub const CASTLE_BLACK_Q: u8 = 8;
pub const CASTLE_ALL: u8 = CASTLE_WHITE_K | CASTLE_WHITE_Q | CASTLE_BLACK_K | CASTLE_BLACK_Q;

#[must_use]
pub const fn castle_king_bit(color: Color) -> u8 {
    match color {
        Color::White => CASTLE_WHITE_K,
        Color::Black => CASTLE_BLACK_K,
    }
}

#[must_use]
pub const fn castle_queen_bit(color: Color) -> u8 {
    match color {
        Color::White => CASTLE_WHITE_Q,
        Color::Black => CASTLE_BLACK_Q,
    }
}

/// A single move. Castling and en passant are implied by `moving_kind` plus
/// the `from`/`to` squares rather than carried as separate flags.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub moving_kind: PieceKind,
    pub captured_kind: Option<PieceKind>,
    pub is_promotion: bool,
    pub promotion_kind: Option<PieceKind>,
}

impl Move {
    #[must_use]
    pub const fn quiet(from: Square, to: Square, moving_kind: PieceKind) -> Self {
        Move {
            from,
            to,
            moving_kind,
            captured_kind: None,
            is_promotion: false,
            promotion_kind: None,
        }
    }

    #[must_use]
    pub const fn capture(from: Square, to: Square, moving_kind: PieceKind, captured: PieceKind) -> Self {
        Move {
            from,
            to,
            moving_kind,
            captured_kind: Some(captured),
            is_promotion: false,
            promotion_kind: None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_capture(&self) -> bool {
        self.captured_kind.is_some()
    }

    #[inline]
    #[must_use]
    pub const fn is_quiet(&self) -> bool {
        self.captured_kind.is_none() && !self.is_promotion
    }

    /// The promotion kind, defaulting to `Queen` per spec §9 (source's
    /// `promotion_piece` parameter defaults to Queen when unspecified).
    #[inline]
    #[must_use]
    pub fn effective_promotion(&self) -> Option<PieceKind> {
        if self.is_promotion {
            Some(self.promotion_kind.unwrap_or(PieceKind::Queen))
        } else {
            None
        }
    }

    /// Is this a two-square pawn push (the only kind of move that sets
    /// `ep_square`)?
    #[inline]
    #[must_use]
    pub fn is_double_pawn_push(&self) -> bool {
        self.moving_kind == PieceKind::Pawn && self.from.rank().abs_diff(self.to.rank()) == 2
    }

    /// Is this castling? Implied by a king moving two files.
    #[inline]
    #[must_use]
    pub fn is_castling(&self) -> bool {
        self.moving_kind == PieceKind::King && self.from.file().abs_diff(self.to.file()) == 2
    }

    /// UCI long-algebraic formatting, e.g. `e2e4`, `e7e8q`.
    #[must_use]
    pub fn to_uci(&self) -> String {
        let mut s = format!("{}{}", self.from.to_algebraic(), self.to.to_algebraic());
        if let Some(promo) = self.effective_promotion() {
            s.push(promo.to_char(Color::Black));
        }
        s
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_uci())
    }
}
