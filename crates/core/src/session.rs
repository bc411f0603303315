//! Game session - the phase machine and pacing around the grid engine
//!
//! The session decides *when* the engine moves: it owns the title/playing/
//! game-over phases, spaces out falls, eliminations and collapse steps, and
//! feeds the score tracker. Time comes in as a monotonic millisecond value on
//! every call; the session never reads a clock itself.
//!
//! Each [`GameSession::tick`] applies at most one engine transition. While a
//! game is running the cycle is:
//!
//! ```text
//! Resolving --matches--> Eliminating --> Removing --> Collapsing --> Resolving
//!     |                                                                  ^
//!     +--no matches, spawn--> Controlling --landed-----------------------+
//!     +--no matches, spawn cell taken--> GameOver
//! ```

use std::collections::VecDeque;

use crate::board::Board;
use crate::config::GameConfig;
use crate::engine::{FallOutcome, GridEngine};
use crate::matches::MatchedCell;
use crate::scoring::ScoreTracker;
use crate::snapshot::{board_hash, GameSnapshot, PieceSnapshot};
use crate::types::{
    Coord, GameAction, Phase, PlayPhase, COLLAPSE_STEP_MS, DEAD_CELL_FLASH_MS, ELIMINATE_STEP_MS,
};

#[derive(Debug, Clone)]
pub struct GameSession {
    config: GameConfig,
    phase: Phase,
    engine: GridEngine,
    tracker: ScoreTracker,
    /// Monotonic game id (increments on every start).
    episode_id: u32,
    pieces_spawned: u32,
    last_fall_ms: u64,
    /// Earliest time for the next paced elimination or collapse step.
    next_step_ms: u64,
    /// Matched cells still waiting to turn dead.
    pending: VecDeque<MatchedCell>,
    /// Dead cells and the time their removal finishes.
    removals: VecDeque<(Coord, u64)>,
}

impl GameSession {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            phase: Phase::TitleScreen,
            engine: GridEngine::new(config.palette),
            tracker: ScoreTracker::new(config.start_speed),
            episode_id: 0,
            pieces_spawned: 0,
            last_fall_ms: 0,
            next_step_ms: 0,
            pending: VecDeque::new(),
            removals: VecDeque::new(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn engine(&self) -> &GridEngine {
        &self.engine
    }

    pub fn tracker(&self) -> &ScoreTracker {
        &self.tracker
    }

    pub fn score(&self) -> u32 {
        self.tracker.score()
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn pieces_spawned(&self) -> u32 {
        self.pieces_spawned
    }

    /// Leave the title screen with a fresh board.
    pub fn start(&mut self, now_ms: u64) -> bool {
        if self.phase != Phase::TitleScreen {
            return false;
        }
        self.start_with_board(Board::new(), now_ms);
        true
    }

    /// Start a game on a prepared board, from any phase.
    pub fn start_with_board(&mut self, board: Board, now_ms: u64) {
        self.engine = GridEngine::with_board(board, self.config.palette);
        self.tracker = ScoreTracker::new(self.config.start_speed);
        self.episode_id = self.episode_id.wrapping_add(1);
        self.pieces_spawned = 0;
        self.pending.clear();
        self.removals.clear();
        self.last_fall_ms = now_ms;
        self.next_step_ms = now_ms;
        self.phase = Phase::Playing(PlayPhase::Resolving);
        log::info!(
            "game {} started (palette={}, speed={})",
            self.episode_id,
            self.config.palette.as_str(),
            self.tracker.speed()
        );
    }

    /// Back to the title screen; the board is discarded.
    fn return_to_title(&mut self) {
        self.engine = GridEngine::new(self.config.palette);
        self.pending.clear();
        self.removals.clear();
        self.phase = Phase::TitleScreen;
    }

    fn enter(&mut self, phase: PlayPhase) {
        log::debug!("{} -> {}", self.phase.as_str(), Phase::Playing(phase).as_str());
        self.phase = Phase::Playing(phase);
    }

    /// Advance the session to `now_ms`. Returns true if anything changed.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        match self.phase {
            Phase::TitleScreen | Phase::GameOver => false,
            Phase::Playing(PlayPhase::Resolving) => self.resolve(now_ms),
            Phase::Playing(PlayPhase::Controlling) => self.fall(now_ms),
            Phase::Playing(PlayPhase::Eliminating) => self.eliminate_next(now_ms),
            Phase::Playing(PlayPhase::Removing) => self.remove_next(now_ms),
            Phase::Playing(PlayPhase::Collapsing) => self.collapse_next(now_ms),
        }
    }

    /// Earliest time at which [`tick`](Self::tick) has work to do, or `None`
    /// outside a game. A value at or before `now` means the next tick acts.
    pub fn next_deadline_ms(&self) -> Option<u64> {
        match self.phase {
            Phase::TitleScreen | Phase::GameOver => None,
            Phase::Playing(PlayPhase::Resolving) => Some(0),
            Phase::Playing(PlayPhase::Controlling) => {
                Some(self.last_fall_ms + self.tracker.fall_interval_ms() as u64)
            }
            Phase::Playing(PlayPhase::Eliminating) => Some(self.next_step_ms),
            Phase::Playing(PlayPhase::Removing) => {
                Some(self.removals.front().map_or(0, |&(_, due_ms)| due_ms))
            }
            Phase::Playing(PlayPhase::Collapsing) if self.engine.is_collapsible() => {
                Some(self.next_step_ms)
            }
            Phase::Playing(PlayPhase::Collapsing) => Some(0),
        }
    }

    fn resolve(&mut self, now_ms: u64) -> bool {
        let matches = self.engine.find_matches();
        if !matches.is_empty() {
            log::debug!("elimination pass: {} cells", matches.len());
            self.tracker.record_pass();
            self.pending = matches.into();
            self.next_step_ms = now_ms;
            self.enter(PlayPhase::Eliminating);
            return true;
        }

        if self.engine.spawn_blocked() || !self.engine.spawn(now_ms) {
            log::info!(
                "game {} over: score={} blocks={} pieces={}",
                self.episode_id,
                self.tracker.score(),
                self.tracker.blocks_cleared(),
                self.pieces_spawned
            );
            self.phase = Phase::GameOver;
            return true;
        }

        self.pieces_spawned = self.pieces_spawned.wrapping_add(1);
        self.tracker.reset_chain();
        self.last_fall_ms = now_ms;
        self.enter(PlayPhase::Controlling);
        true
    }

    fn fall(&mut self, now_ms: u64) -> bool {
        let interval = self.tracker.fall_interval_ms() as u64;
        if now_ms.saturating_sub(self.last_fall_ms) < interval {
            return false;
        }
        self.last_fall_ms = now_ms;

        match self.engine.fall_step() {
            FallOutcome::Fell => {}
            FallOutcome::Landed | FallOutcome::Idle => self.enter(PlayPhase::Resolving),
        }
        true
    }

    fn eliminate_next(&mut self, now_ms: u64) -> bool {
        if now_ms < self.next_step_ms {
            return false;
        }

        if let Some(cell) = self.pending.pop_front() {
            if self.engine.eliminate_cell(cell.coord, cell.multiplier) {
                self.tracker.record_block(cell.multiplier);
                self.removals
                    .push_back((cell.coord, now_ms + DEAD_CELL_FLASH_MS as u64));
            }
            self.next_step_ms = now_ms + ELIMINATE_STEP_MS as u64;
        }

        if self.pending.is_empty() {
            self.enter(PlayPhase::Removing);
        }
        true
    }

    fn remove_next(&mut self, now_ms: u64) -> bool {
        if self.removals.is_empty() && self.engine.has_dead_cells() {
            // Dead cells the session did not create itself (a staged board).
            let stray: Vec<Coord> = Board::coords()
                .filter(|c| self.engine.board().cell_at(*c).is_dead())
                .collect();
            self.removals.extend(stray.into_iter().map(|c| (c, now_ms)));
        }

        let mut changed = false;
        if let Some(&(coord, due_ms)) = self.removals.front() {
            if now_ms < due_ms {
                return false;
            }
            self.removals.pop_front();
            changed = self.engine.remove_dead_cell(coord);
        }

        if !self.engine.has_dead_cells() {
            self.removals.clear();
            self.next_step_ms = now_ms + COLLAPSE_STEP_MS as u64;
            self.enter(PlayPhase::Collapsing);
            return true;
        }
        changed
    }

    fn collapse_next(&mut self, now_ms: u64) -> bool {
        if !self.engine.is_collapsible() {
            self.enter(PlayPhase::Resolving);
            return true;
        }
        if now_ms < self.next_step_ms {
            return false;
        }

        self.engine.collapse_step();
        self.next_step_ms = now_ms + COLLAPSE_STEP_MS as u64;
        if !self.engine.is_collapsible() {
            log::debug!("collapse settled");
            self.enter(PlayPhase::Resolving);
        }
        true
    }

    /// Apply a player intent. Piece intents only count while a piece is
    /// under control; anything else is dropped.
    pub fn apply_action(&mut self, action: GameAction, now_ms: u64) -> bool {
        match action {
            GameAction::Start => match self.phase {
                Phase::TitleScreen => self.start(now_ms),
                Phase::GameOver => {
                    self.return_to_title();
                    true
                }
                Phase::Playing(_) => false,
            },
            _ if self.phase != Phase::Playing(PlayPhase::Controlling) => {
                log::trace!("dropped {} during {}", action.as_str(), self.phase.as_str());
                false
            }
            GameAction::MoveLeft => self.engine.move_left(),
            GameAction::MoveRight => self.engine.move_right(),
            GameAction::RotateUp => self.engine.rotate_up(),
            GameAction::RotateDown => self.engine.rotate_down(),
            GameAction::Drop => self.engine.drop_to_bottom(),
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.engine.board().write_row_major(&mut out.board);
        out.board_hash = board_hash(&out.board);
        out.piece = self.engine.piece().map(PieceSnapshot::from);
        out.phase = self.phase;
        out.palette = self.config.palette;
        out.episode_id = self.episode_id;
        out.pieces_spawned = self.pieces_spawned;
        out.score = self.tracker.score();
        out.speed = self.tracker.speed();
        out.blocks_cleared = self.tracker.blocks_cleared();
        out.chain = self.tracker.chain();
        out.max_chain = self.tracker.max_chain();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
