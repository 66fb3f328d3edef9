//! The position module: board representation, move application, Zobrist
//! keying, move generation and FEN I/O (spec components B, C and D).

pub mod fen;
pub(crate) mod make_unmake;
pub mod movegen;
pub mod state;
pub mod zobrist;

pub use make_unmake::NullMoveUndo;
pub use state::{Position, UndoRecord};
