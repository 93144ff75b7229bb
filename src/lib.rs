//! Monotris - a single-block falling-piece game engine.
//!
//! Each piece occupies exactly one grid cell. Pieces fall under an external
//! timer, can be nudged left/right, hard-dropped, and lock into the grid
//! when they land. Full rows are cleared with gravity compaction, scoring
//! follows the classic line-clear multipliers, and level progression speeds
//! up the (driver-owned) drop interval.
//!
//! The crate is the engine only: it exposes observable state and mutating
//! operations, and leaves rendering, input devices, and scheduling to its
//! caller.

pub mod core;
pub mod types;

pub use crate::core::{
    ClassicScoring, GameSnapshot, GameState, Grid, Piece, PieceSnapshot, RandomSource,
    ScoringRules, SimpleRng,
};
