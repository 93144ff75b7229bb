//! Core module - pure game logic with no external dependencies
//!
//! This module contains all the game rules, state management, and logic.
//! It has zero dependencies on UI, timers, or I/O.

pub mod game_state;
pub mod grid;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod snapshot;

// Re-export commonly used types
pub use game_state::GameState;
pub use grid::Grid;
pub use piece::Piece;
pub use rng::{RandomSource, SimpleRng};
pub use scoring::{drop_interval_ms, ClassicScoring, ScoringRules};
pub use snapshot::{GameSnapshot, PieceSnapshot};
