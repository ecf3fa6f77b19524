//! Game state module - the complete upside-down Tetris rule set
//!
//! The engine owns the grid and both pieces and applies every rule: movement,
//! rotation with wall kicks, inverted gravity (pieces rise, so automatic
//! drops decrease y), merging, line clearing, scoring, and the
//! active/paused/game-over state machine. It is single-threaded and
//! synchronous; the host serializes intents and calls `update` once per
//! frame with a monotonic millisecond clock.

use crate::core::scoring::{drop_interval_ms, level_for_lines, line_clear_score};
use crate::core::source::{ShapeSource, UniformSource};
use crate::core::{Board, Tetromino};
use crate::types::GameAction;

/// Horizontal offsets tried, in order, when an in-place rotation collides.
const WALL_KICKS: [i8; 4] = [-1, 1, -2, 2];

/// Complete game state
pub struct GameState {
    board: Board,
    current: Tetromino,
    next: Tetromino,
    source: Box<dyn ShapeSource>,
    score: u32,
    level: u32,
    lines_cleared: u32,
    drop_interval_ms: u64,
    last_drop_ms: u64,
    paused: bool,
    game_over: bool,
}

impl GameState {
    /// Create a new game with uniform random piece selection
    pub fn new(seed: u32) -> Self {
        Self::with_source(Box::new(UniformSource::new(seed)))
    }

    /// Create a new game drawing shapes from the given source
    pub fn with_source(mut source: Box<dyn ShapeSource>) -> Self {
        let current = Tetromino::new(source.next_shape());
        let next = Tetromino::new(source.next_shape());

        Self {
            board: Board::new(),
            current,
            next,
            source,
            score: 0,
            level: 1,
            lines_cleared: 0,
            drop_interval_ms: drop_interval_ms(1),
            last_drop_ms: 0,
            paused: false,
            game_over: false,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn drop_interval_ms(&self) -> u64 {
        self.drop_interval_ms
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current(&self) -> &Tetromino {
        &self.current
    }

    pub fn next_piece(&self) -> &Tetromino {
        &self.next
    }

    #[cfg(test)]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Whether intents are currently accepted.
    fn is_active(&self) -> bool {
        !self.paused && !self.game_over
    }

    /// The one collision predicate behind movement, rotation, gravity, and
    /// spawn validation: any block outside the grid or on an occupied cell.
    fn collides(&self, dx: i8, dy: i8, piece: &Tetromino) -> bool {
        piece
            .blocks()
            .iter()
            .any(|&(x, y)| !self.board.is_open(x + dx, y + dy))
    }

    /// Check whether the current piece could move by (dx, dy).
    pub fn can_move(&self, dx: i8, dy: i8) -> bool {
        !self.collides(dx, dy, &self.current)
    }

    /// Try to move the current piece. No-op unless active.
    pub fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        if !self.is_active() || self.collides(dx, dy, &self.current) {
            return false;
        }
        self.current.x += dx;
        self.current.y += dy;
        true
    }

    /// Try to rotate the current piece clockwise, kicking horizontally if the
    /// in-place rotation collides. Rejected entirely if every kick collides.
    pub fn rotate(&mut self) -> bool {
        if !self.is_active() {
            return false;
        }

        let mut turned = self.current;
        turned.rotate(true);

        if !self.collides(0, 0, &turned) {
            self.current = turned;
            return true;
        }

        for dx in WALL_KICKS {
            if !self.collides(dx, 0, &turned) {
                turned.x += dx;
                self.current = turned;
                return true;
            }
        }

        false
    }

    /// Advance the current piece one cell toward the arrival edge (y - 1).
    /// A blocked advance merges the piece into the grid instead.
    /// Returns true if the piece moved.
    pub fn soft_drop(&mut self) -> bool {
        if !self.is_active() {
            return false;
        }
        if self.collides(0, -1, &self.current) {
            self.merge();
            false
        } else {
            self.current.y -= 1;
            true
        }
    }

    /// Advance the current piece until it blocks, then merge it.
    pub fn hard_drop(&mut self) {
        if !self.is_active() {
            return;
        }
        while !self.collides(0, -1, &self.current) {
            self.current.y -= 1;
        }
        self.merge();
    }

    /// Absorb the current piece into the grid, clear lines, spawn the next.
    fn merge(&mut self) {
        self.board
            .fill_blocks(self.current.blocks(), self.current.kind);

        let cleared = self.board.clear_full_rows().len() as u32;
        if cleared > 0 {
            self.lines_cleared += cleared;
            self.score += line_clear_score(cleared);
            self.level = level_for_lines(self.lines_cleared);
            self.drop_interval_ms = drop_interval_ms(self.level);
        }

        self.spawn();
    }

    /// Promote the queued piece and draw a fresh one behind it. If the
    /// promoted piece already collides at spawn, the game is over; the grid
    /// is left untouched by the failed spawn.
    fn spawn(&mut self) {
        let fresh = Tetromino::new(self.source.next_shape());
        self.current = std::mem::replace(&mut self.next, fresh);
        if self.collides(0, 0, &self.current) {
            self.game_over = true;
        }
    }

    /// Time-driven advancement: at most one automatic drop per call, when the
    /// drop interval has elapsed since the last one. `now_ms` comes from the
    /// host's monotonic clock. Returns true if a drop happened.
    pub fn update(&mut self, now_ms: u64) -> bool {
        if !self.is_active() {
            return false;
        }
        if now_ms.saturating_sub(self.last_drop_ms) > self.drop_interval_ms {
            self.soft_drop();
            self.last_drop_ms = now_ms;
            true
        } else {
            false
        }
    }

    /// Flip the paused flag. Ignored once game over.
    pub fn toggle_pause(&mut self) {
        if !self.game_over {
            self.paused = !self.paused;
        }
    }

    /// Restore the state of a freshly constructed engine, keeping the shape
    /// source (its stream simply continues).
    pub fn reset(&mut self) {
        self.board.clear();
        self.score = 0;
        self.level = 1;
        self.lines_cleared = 0;
        self.drop_interval_ms = drop_interval_ms(1);
        self.last_drop_ms = 0;
        self.paused = false;
        self.game_over = false;
        self.current = Tetromino::new(self.source.next_shape());
        self.next = Tetromino::new(self.source.next_shape());
    }

    /// Apply a host intent. Returns whether the intent had an effect.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.try_move(-1, 0),
            GameAction::MoveRight => self.try_move(1, 0),
            GameAction::SoftDrop => self.soft_drop(),
            GameAction::HardDrop => {
                if self.is_active() {
                    self.hard_drop();
                    true
                } else {
                    false
                }
            }
            GameAction::Rotate => self.rotate(),
            GameAction::Pause => {
                if self.game_over {
                    false
                } else {
                    self.toggle_pause();
                    true
                }
            }
            GameAction::Restart => {
                if self.game_over {
                    self.reset();
                    true
                } else {
                    false
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::source::SequenceSource;
    use crate::types::{ShapeKind, GRID_HEIGHT, GRID_WIDTH, SPAWN_X, SPAWN_Y};

    fn scripted(shapes: &[ShapeKind]) -> GameState {
        GameState::with_source(Box::new(SequenceSource::new(shapes.to_vec())))
    }

    #[test]
    fn test_new_game_state() {
        let state = GameState::new(12345);

        assert!(!state.game_over());
        assert!(!state.paused());
        assert_eq!(state.score(), 0);
        assert_eq!(state.level(), 1);
        assert_eq!(state.lines_cleared(), 0);
        assert_eq!(state.drop_interval_ms(), 1000);
        assert_eq!(state.current().x, SPAWN_X);
        assert_eq!(state.current().y, SPAWN_Y);
    }

    #[test]
    fn test_spawn_promotes_the_queued_piece() {
        let mut state = scripted(&[ShapeKind::T, ShapeKind::I, ShapeKind::O, ShapeKind::S]);
        assert_eq!(state.current().kind, ShapeKind::T);
        assert_eq!(state.next_piece().kind, ShapeKind::I);

        state.hard_drop();

        assert_eq!(state.current().kind, ShapeKind::I);
        assert_eq!(state.next_piece().kind, ShapeKind::O);
    }

    #[test]
    fn test_try_move_walls() {
        let mut state = scripted(&[ShapeKind::O]);
        let start_x = state.current().x;

        assert!(state.try_move(1, 0));
        assert_eq!(state.current().x, start_x + 1);
        assert!(state.try_move(-1, 0));
        assert_eq!(state.current().x, start_x);

        // O occupies pattern columns 1-2, so 5 more steps hit the left wall.
        let mut moved = 0;
        for _ in 0..10 {
            if state.try_move(-1, 0) {
                moved += 1;
            }
        }
        assert_eq!(moved, SPAWN_X as i32 + 1);
    }

    #[test]
    fn test_move_toward_arrival_edge_blocks_at_row_zero() {
        let mut state = scripted(&[ShapeKind::O]);

        // O blocks sit on pattern rows 2-3; the lowest legal anchor is -2.
        let mut steps = 0;
        while state.try_move(0, -1) {
            steps += 1;
        }
        assert_eq!(state.current().y, -2);
        assert_eq!(steps, SPAWN_Y as i32 + 2);
        let blocks = state.current().blocks();
        assert!(blocks.iter().any(|&(_, y)| y == 0));
    }

    #[test]
    fn test_rotation_cycles_in_open_space() {
        let mut state = scripted(&[ShapeKind::T]);
        assert_eq!(state.current().rotation, 0);

        for expected in [1, 2, 3, 0] {
            assert!(state.rotate());
            assert_eq!(state.current().rotation, expected);
        }
    }

    #[test]
    fn test_rotation_wall_kick_off_the_left_wall() {
        let mut state = scripted(&[ShapeKind::I]);
        // Vertical I against the left wall: pattern column 2 at x = -2.
        assert!(state.rotate());
        while state.try_move(-1, 0) {}
        assert_eq!(state.current().x, -2);

        // Horizontal I spans pattern columns 0..=3; in place it pokes out at
        // x = -2, so the rotation must kick right.
        let before_rotation = state.current().rotation;
        assert!(state.rotate());
        assert_ne!(state.current().rotation, before_rotation);
        assert!(state.current().blocks().iter().all(|&(x, _)| x >= 0));
    }

    #[test]
    fn test_rotation_rejected_when_every_kick_collides() {
        let mut state = scripted(&[ShapeKind::I]);
        // Vertical I in a one-cell-wide shaft: fill both neighbor columns
        // and the kick landing columns around the piece.
        assert!(state.rotate());
        let x = state.current().x;
        for y in 0..GRID_HEIGHT {
            for dx in [-2, -1, 1, 2, 3, 4] {
                state.board_mut().set(x + 2 + dx, y, Some(ShapeKind::Z));
            }
        }

        let before = *state.current();
        assert!(!state.rotate());
        assert_eq!(*state.current(), before);
    }

    #[test]
    fn test_soft_drop_merges_when_blocked() {
        let mut state = scripted(&[ShapeKind::O, ShapeKind::T, ShapeKind::I]);

        // Rise until blocked at the resting edge.
        while state.soft_drop() {}

        // The O is now part of the grid and the next piece took over.
        assert_eq!(state.board().get(4, 0), Some(Some(ShapeKind::O)));
        assert_eq!(state.board().get(5, 0), Some(Some(ShapeKind::O)));
        assert_eq!(state.board().get(4, 1), Some(Some(ShapeKind::O)));
        assert_eq!(state.board().get(5, 1), Some(Some(ShapeKind::O)));
        assert_eq!(state.current().kind, ShapeKind::T);
    }

    #[test]
    fn test_hard_drop_rests_on_previous_pieces() {
        let mut state = scripted(&[ShapeKind::O, ShapeKind::O, ShapeKind::O]);

        state.hard_drop();
        state.hard_drop();

        // Second O stacks on the first: rows 2 and 3 of columns 4-5.
        assert_eq!(state.board().get(4, 2), Some(Some(ShapeKind::O)));
        assert_eq!(state.board().get(5, 3), Some(Some(ShapeKind::O)));
        assert_eq!(state.score(), 0);
    }

    #[test]
    fn test_line_clear_updates_score_lines_and_level() {
        let mut state = scripted(&[ShapeKind::O, ShapeKind::I, ShapeKind::T]);

        // Fill rows 0 and 1 except the two columns the O will land in.
        for y in 0..2 {
            for x in 0..GRID_WIDTH {
                if x != 4 && x != 5 {
                    state.board_mut().set(x, y, Some(ShapeKind::I));
                }
            }
        }

        state.hard_drop();

        assert_eq!(state.score(), 400);
        assert_eq!(state.lines_cleared(), 2);
        assert_eq!(state.level(), 1);
        // Both rows vanished entirely.
        for y in 0..GRID_HEIGHT {
            assert!(!state.board().is_row_full(y));
        }
        assert!(state.board().cells().iter().all(|c| c.is_none()));
    }

    #[test]
    fn test_level_up_shrinks_drop_interval() {
        let mut state = scripted(&[ShapeKind::O, ShapeKind::O]);

        // Pretend nine lines were already cleared; the next clear levels up.
        for y in 0..1 {
            for x in 0..GRID_WIDTH {
                if x != 4 && x != 5 {
                    state.board_mut().set(x, y, Some(ShapeKind::I));
                }
            }
        }
        state.lines_cleared = 9;
        state.hard_drop();

        assert_eq!(state.lines_cleared(), 10);
        assert_eq!(state.level(), 2);
        assert_eq!(state.drop_interval_ms(), 900);
    }

    #[test]
    fn test_update_drops_after_interval() {
        let mut state = scripted(&[ShapeKind::T, ShapeKind::T]);
        let start_y = state.current().y;

        assert!(!state.update(1000));
        assert_eq!(state.current().y, start_y);

        assert!(state.update(1001));
        assert_eq!(state.current().y, start_y - 1);

        // Timer rearmed: nothing until another full interval elapses.
        assert!(!state.update(2001));
        assert!(state.update(2002));
        assert_eq!(state.current().y, start_y - 2);
    }

    #[test]
    fn test_pause_freezes_everything() {
        let mut state = scripted(&[ShapeKind::T, ShapeKind::T]);
        state.toggle_pause();
        assert!(state.paused());

        let before = *state.current();
        assert!(!state.try_move(1, 0));
        assert!(!state.rotate());
        assert!(!state.soft_drop());
        assert!(!state.update(10_000));
        assert_eq!(*state.current(), before);

        state.toggle_pause();
        assert!(state.try_move(1, 0));
    }

    #[test]
    fn test_blocked_spawn_is_game_over_and_grid_untouched() {
        let mut state = scripted(&[ShapeKind::O, ShapeKind::O, ShapeKind::O]);

        // Occupy one of the next spawn cells.
        state.board_mut().set(4, 17, Some(ShapeKind::Z));
        let cells_before: Vec<_> = state.board().cells().to_vec();

        // Merging anywhere triggers the failed spawn.
        state.hard_drop();

        assert!(state.game_over());
        // Only the merged O changed the grid; the failed spawn wrote nothing.
        let changed = state
            .board()
            .cells()
            .iter()
            .zip(cells_before.iter())
            .filter(|(a, b)| a != b)
            .count();
        assert_eq!(changed, 4);

        // Terminal state: every intent except restart is rejected.
        assert!(!state.try_move(1, 0));
        assert!(!state.rotate());
        assert!(!state.soft_drop());
        assert!(!state.update(100_000));
        assert!(!state.apply_action(GameAction::Pause));
    }

    #[test]
    fn test_reset_matches_fresh_engine() {
        let mut state = scripted(&[ShapeKind::O, ShapeKind::O]);
        state.board_mut().set(4, 17, Some(ShapeKind::Z));
        state.hard_drop();
        assert!(state.game_over());

        assert!(state.apply_action(GameAction::Restart));

        assert!(!state.game_over());
        assert!(!state.paused());
        assert_eq!(state.score(), 0);
        assert_eq!(state.level(), 1);
        assert_eq!(state.lines_cleared(), 0);
        assert_eq!(state.drop_interval_ms(), 1000);
        assert!(state.board().cells().iter().all(|c| c.is_none()));
        assert_eq!(state.current().x, SPAWN_X);
        assert_eq!(state.current().y, SPAWN_Y);
        assert_eq!(state.current().rotation, 0);
    }

    #[test]
    fn test_restart_ignored_while_playing() {
        let mut state = scripted(&[ShapeKind::T, ShapeKind::T]);
        state.try_move(1, 0);
        assert!(!state.apply_action(GameAction::Restart));
        assert_eq!(state.current().x, SPAWN_X + 1);
    }

    #[test]
    fn test_apply_action_dispatch() {
        let mut state = scripted(&[ShapeKind::T, ShapeKind::T, ShapeKind::T]);
        let x = state.current().x;
        let y = state.current().y;

        assert!(state.apply_action(GameAction::MoveRight));
        assert_eq!(state.current().x, x + 1);
        assert!(state.apply_action(GameAction::MoveLeft));
        assert_eq!(state.current().x, x);
        assert!(state.apply_action(GameAction::SoftDrop));
        assert_eq!(state.current().y, y - 1);
        assert!(state.apply_action(GameAction::Rotate));
        assert_eq!(state.current().rotation, 1);
        assert!(state.apply_action(GameAction::Pause));
        assert!(state.paused());
        assert!(!state.apply_action(GameAction::HardDrop));
        assert!(state.apply_action(GameAction::Pause));
        assert!(state.apply_action(GameAction::HardDrop));
    }
}
