//! Game state module - manages the complete game state
//!
//! This module ties together all core components: grid, piece, RNG, and
//! scoring. It handles the per-piece lifecycle: spawn, move, lock-in, line
//! clears, scoring, leveling, and game-over detection.
//!
//! The engine is synchronous and single-owner. External drivers (a user
//! input handler and a periodic tick) call the mutating operations, read
//! the observable state back, and do their own scheduling; calls must be
//! serialized by the driver since the engine takes `&mut self` and holds
//! no locks.

use crate::core::{
    scoring::drop_interval_ms, ClassicScoring, Grid, Piece, RandomSource, ScoringRules, SimpleRng,
};
use crate::types::{MAX_COLOR_INDEX, MIN_COLOR_INDEX, SPAWN_COLUMN};

/// Complete game state
///
/// Generic over its random source and scoring rules so deterministic fakes
/// can be injected in tests. `GameState::new` wires the default parts.
#[derive(Debug, Clone)]
pub struct GameState<R = SimpleRng, S = ClassicScoring> {
    grid: Grid,
    current: Option<Piece>,
    next: Option<Piece>,
    score: u32,
    level: u32,
    lines: u32,
    game_over: bool,
    rng: R,
    scoring: S,
}

impl GameState {
    /// Create a new game with the default RNG (seeded) and classic scoring
    pub fn new(seed: u32) -> Self {
        Self::with_parts(SimpleRng::new(seed), ClassicScoring)
    }
}

impl<R: RandomSource, S: ScoringRules> GameState<R, S> {
    /// Create a new game with injected random source and scoring rules
    pub fn with_parts(rng: R, scoring: S) -> Self {
        Self {
            grid: Grid::new(),
            current: None,
            next: None,
            score: 0,
            level: 1,
            lines: 0,
            game_over: false,
            rng,
            scoring,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn current_piece(&self) -> Option<Piece> {
        self.current
    }

    pub fn next_piece(&self) -> Option<Piece> {
        self.next
    }

    #[cfg(test)]
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Current drop interval for the external tick driver, derived from the
    /// level. Recompute after every tick so level-ups take effect on the
    /// next interval.
    pub fn drop_interval_ms(&self) -> f64 {
        drop_interval_ms(self.level)
    }

    /// Start a new game session.
    ///
    /// The spawn-blocked check runs against the pre-reset grid, so a board
    /// left occupied at the spawn cell by a previous session still reaches
    /// the game-over path even though the grid is wiped right after.
    pub fn start_new_game(&mut self) {
        let spawn_blocked = !self.grid.is_empty(0, SPAWN_COLUMN);

        self.grid.reset();
        self.score = 0;
        self.level = 1;
        self.lines = 0;
        self.game_over = false;

        // Pre-generate the preview piece, then promote it.
        self.next = Some(self.new_piece());
        self.spawn();

        if spawn_blocked {
            self.game_over = true;
        }
    }

    /// Advance the current piece one row.
    ///
    /// Returns true on a successful descent. Returns false (and locks the
    /// piece at its last legal position) when the cell below is occupied or
    /// out of bounds, and when there is no piece or the game is over.
    pub fn move_down(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        let Some(mut piece) = self.current else {
            return false;
        };

        piece.move_down();
        if self.grid.is_empty(piece.row, piece.col) {
            self.current = Some(piece);
            return true;
        }

        // Step reverted by never committing it; lock where the piece was.
        self.lock_current();
        false
    }

    /// Shift the current piece one column left. Illegal shifts have no
    /// observable effect.
    pub fn move_left(&mut self) {
        if self.game_over {
            return;
        }
        let Some(mut piece) = self.current else {
            return;
        };

        piece.move_left();
        if self.grid.is_empty(piece.row, piece.col) {
            self.current = Some(piece);
        }
    }

    /// Shift the current piece one column right. Illegal shifts have no
    /// observable effect.
    pub fn move_right(&mut self) {
        if self.game_over {
            return;
        }
        let Some(mut piece) = self.current else {
            return;
        };

        piece.move_right();
        if self.grid.is_empty(piece.row, piece.col) {
            self.current = Some(piece);
        }
    }

    /// Drop the current piece straight down until it locks.
    ///
    /// Observably identical to letting the piece land on its own, except
    /// instantaneous.
    pub fn hard_drop(&mut self) {
        if self.game_over || self.current.is_none() {
            return;
        }
        while self.move_down() {}
    }

    /// Draw a random color and build a piece at the spawn position
    fn new_piece(&mut self) -> Piece {
        let color = self.rng.next_in(MIN_COLOR_INDEX, MAX_COLOR_INDEX + 1);
        Piece::new(SPAWN_COLUMN, color)
    }

    /// Promote the preview piece to current and regenerate the preview.
    /// An occupied spawn cell ends the session; the stuck piece stays
    /// observable while further moves become no-ops.
    fn spawn(&mut self) {
        let current = match self.next.take() {
            Some(piece) => piece,
            None => self.new_piece(),
        };
        self.next = Some(self.new_piece());

        if !self.grid.is_empty(current.row, current.col) {
            self.game_over = true;
        }
        self.current = Some(current);
    }

    /// Lock the current piece into the grid, clear full rows, update
    /// score/lines/level, and spawn the next piece.
    ///
    /// Score uses the level in effect before this clear; the level is
    /// recomputed from the new line total right after.
    fn lock_current(&mut self) {
        let Some(piece) = self.current else {
            return;
        };

        self.grid.set(piece.row, piece.col, piece.color);

        let cleared = self.grid.clear_full_rows().len();
        if cleared > 0 {
            self.lines += cleared as u32;
            self.score += self.scoring.score_for_clear(cleared, self.level);
            self.level = self.scoring.level_for_lines(self.lines);
        }

        self.spawn();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{GRID_HEIGHT, GRID_WIDTH};

    #[test]
    fn test_new_game_spawns_at_top_center() {
        let mut state = GameState::new(42);
        state.start_new_game();

        let piece = state.current_piece().expect("piece after start");
        assert_eq!(piece.row, 0);
        assert_eq!(piece.col, (GRID_WIDTH / 2) as i8);
        assert!(state.next_piece().is_some());
        assert!(!state.is_game_over());
    }

    #[test]
    fn test_no_piece_before_start() {
        let state = GameState::new(42);
        assert!(state.current_piece().is_none());
        assert!(state.next_piece().is_none());
    }

    #[test]
    fn test_move_down_without_piece_is_noop() {
        let mut state = GameState::new(42);
        assert!(!state.move_down());
        assert_eq!(state.score(), 0);
    }

    #[test]
    fn test_piece_locks_at_bottom() {
        let mut state = GameState::new(42);
        state.start_new_game();
        let color = state.current_piece().unwrap().color;

        // 19 successful descents take the piece to the bottom row, the
        // 20th fails and locks it.
        for _ in 0..GRID_HEIGHT - 1 {
            assert!(state.move_down());
        }
        assert!(!state.move_down());

        assert_eq!(
            state.grid().get(GRID_HEIGHT as i8 - 1, (GRID_WIDTH / 2) as i8),
            Some(color)
        );
        // A fresh piece spawned immediately after lock-in.
        assert_eq!(state.current_piece().unwrap().row, 0);
    }

    #[test]
    fn test_score_uses_level_before_recompute() {
        // Put the session one line short of level 2, then clear a row: the
        // clear is worth 40 * 1 even though the level becomes 2.
        let mut state = GameState::new(42);
        state.start_new_game();

        for _ in 0..9 {
            fill_bottom_row_except_spawn(&mut state);
            state.hard_drop();
        }
        assert_eq!(state.lines(), 9);
        assert_eq!(state.level(), 1);
        let before = state.score();

        fill_bottom_row_except_spawn(&mut state);
        state.hard_drop();

        assert_eq!(state.lines(), 10);
        assert_eq!(state.level(), 2);
        assert_eq!(state.score(), before + 40);
    }

    fn fill_bottom_row_except_spawn<R: RandomSource, S: ScoringRules>(
        state: &mut GameState<R, S>,
    ) {
        let bottom = GRID_HEIGHT as i8 - 1;
        for col in 0..GRID_WIDTH as i8 {
            if col != (GRID_WIDTH / 2) as i8 {
                state.grid_mut().set(bottom, col, 1);
            }
        }
        state.grid_mut().set(bottom, (GRID_WIDTH / 2) as i8, 0);
    }
}
