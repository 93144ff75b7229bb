//! Snapshot module - allocation-free export of the observable state
//!
//! External drivers poll the engine once per tick or input. A snapshot
//! carries the whole observable surface (grid cells, pieces, score, level,
//! lines, game-over flag) by value, so the driver can hand it to a
//! renderer or serialize it without borrowing into the engine.

use serde::{Deserialize, Serialize};

use crate::core::{GameState, Piece, RandomSource, ScoringRules};
use crate::types::{GRID_HEIGHT, GRID_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PieceSnapshot {
    pub row: i8,
    pub col: i8,
    pub color: u8,
}

impl From<Piece> for PieceSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            row: value.row,
            col: value.col,
            color: value.color,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub grid: [[u8; GRID_WIDTH]; GRID_HEIGHT],
    pub current: Option<PieceSnapshot>,
    pub next: Option<PieceSnapshot>,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub game_over: bool,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.grid = [[0u8; GRID_WIDTH]; GRID_HEIGHT];
        self.current = None;
        self.next = None;
        self.score = 0;
        self.level = 1;
        self.lines = 0;
        self.game_over = false;
    }

    pub fn playable(&self) -> bool {
        !self.game_over && self.current.is_some()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            grid: [[0u8; GRID_WIDTH]; GRID_HEIGHT],
            current: None,
            next: None,
            score: 0,
            level: 1,
            lines: 0,
            game_over: false,
        }
    }
}

impl<R: RandomSource, S: ScoringRules> GameState<R, S> {
    /// Fill an existing snapshot in place (no allocation)
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.grid().write_u8_grid(&mut out.grid);
        out.current = self.current_piece().map(PieceSnapshot::from);
        out.next = self.next_piece().map(PieceSnapshot::from);
        out.score = self.score();
        out.level = self.level();
        out.lines = self.lines();
        out.game_over = self.is_game_over();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
