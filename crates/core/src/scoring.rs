//! Scoring module - points and speed from eliminated blocks
//!
//! The tracker only observes elimination results; it never touches the board.
//! Each block turning dead is worth `POINTS_PER_BLOCK * multiplier`, and every
//! `BLOCKS_PER_SPEED` blocks the pieces fall faster.

use crate::types::{
    BASE_FALL_MS, BLOCKS_PER_SPEED, FALL_INTERVAL_FLOOR_MS, FALL_STEP_DECREMENT_MS, MAX_SPEED,
    POINTS_PER_BLOCK,
};

/// Points for one eliminated block
pub fn calculate_block_score(multiplier: u32) -> u32 {
    POINTS_PER_BLOCK.saturating_mul(multiplier.max(1))
}

/// Speed level for a starting speed and the blocks cleared so far
pub fn calculate_speed(start_speed: u32, blocks_cleared: u32) -> u32 {
    start_speed
        .max(1)
        .saturating_add(blocks_cleared / BLOCKS_PER_SPEED)
        .min(MAX_SPEED)
}

/// Milliseconds between two fall steps at a speed level
pub fn fall_interval_ms(speed: u32) -> u32 {
    let decrement = speed.saturating_sub(1).saturating_mul(FALL_STEP_DECREMENT_MS);
    BASE_FALL_MS
        .saturating_sub(decrement)
        .max(FALL_INTERVAL_FLOOR_MS)
}

/// Running score for one game session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreTracker {
    score: u32,
    blocks_cleared: u32,
    start_speed: u32,
    speed: u32,
    /// Elimination passes since the last spawn.
    chain: u32,
    max_chain: u32,
}

impl ScoreTracker {
    pub fn new(start_speed: u32) -> Self {
        let start_speed = start_speed.clamp(1, MAX_SPEED);
        Self {
            score: 0,
            blocks_cleared: 0,
            start_speed,
            speed: start_speed,
            chain: 0,
            max_chain: 0,
        }
    }

    /// Observe one block turning dead. Returns the points awarded.
    pub fn record_block(&mut self, multiplier: u32) -> u32 {
        let points = calculate_block_score(multiplier);
        self.score = self.score.saturating_add(points);
        self.blocks_cleared = self.blocks_cleared.saturating_add(1);

        let speed = calculate_speed(self.start_speed, self.blocks_cleared);
        if speed != self.speed {
            log::info!("speed {} -> {}", self.speed, speed);
            self.speed = speed;
        }
        points
    }

    /// Observe the start of an elimination pass.
    pub fn record_pass(&mut self) {
        self.chain += 1;
        self.max_chain = self.max_chain.max(self.chain);
    }

    /// A new piece ends the current chain.
    pub fn reset_chain(&mut self) {
        self.chain = 0;
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn blocks_cleared(&self) -> u32 {
        self.blocks_cleared
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    pub fn chain(&self) -> u32 {
        self.chain
    }

    pub fn max_chain(&self) -> u32 {
        self.max_chain
    }

    pub fn fall_interval_ms(&self) -> u32 {
        fall_interval_ms(self.speed)
    }
}

impl Default for ScoreTracker {
    fn default() -> Self {
        Self::new(1)
    }
}
