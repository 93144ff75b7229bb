//! Core types and constants shared across the engine
//! This module contains pure data with no external dependencies

/// Grid dimensions (rows x columns), fixed at compile time
pub const GRID_HEIGHT: usize = 20;
pub const GRID_WIDTH: usize = 10;

/// A grid cell: 0 = empty, 1..=7 = occupied with that color index
pub type Cell = u8;

/// Color index range for spawned pieces (inclusive on both ends)
pub const MIN_COLOR_INDEX: u8 = 1;
pub const MAX_COLOR_INDEX: u8 = 7;

/// Spawn column for new pieces (top row, grid center)
pub const SPAWN_COLUMN: i8 = (GRID_WIDTH / 2) as i8;

/// Line clear scoring table (classic rules), indexed by lines cleared
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

/// Lines required to advance one level
pub const LINES_PER_LEVEL: u32 = 10;

/// Timing constants for the external tick driver (milliseconds).
/// The engine never schedules anything itself; drivers recompute their
/// interval from the current level after every tick.
pub const BASE_DROP_MS: f64 = 500.0;
pub const LEVEL_SPEED_FACTOR: f64 = 0.1;
