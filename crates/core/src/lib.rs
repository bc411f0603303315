//! Core game logic module - pure, deterministic, and testable
//!
//! This crate holds the whole Columns rule set and the session loop around it.
//! It has **no dependencies** on terminal, input or I/O, which makes it:
//!
//! - **Deterministic**: the same seeds and timestamps replay the same game
//! - **Testable**: every rule is a plain function of the board state
//! - **Portable**: runs in a terminal, headless, or behind any other shell
//!
//! # Module Structure
//!
//! - [`board`]: 7x20 column-major grid with absorbing out-of-range access
//! - [`piece`]: the falling color triple and seed-based color derivation
//! - [`matches`]: three-in-a-row detection along four axes
//! - [`engine`]: spawn, fall, land, move, rotate, drop, eliminate, collapse
//! - [`scoring`]: score and speed from eliminated blocks
//! - [`session`]: title/playing/game-over phases and pacing
//! - [`snapshot`]: render-ready copy of the session state
//! - [`config`]: palette and starting speed from the environment
//!
//! # Game Rules
//!
//! - A vertical triple of colored blocks falls down the 7-column board
//! - The player shifts it left/right and cycles its colors up/down
//! - Three or more equal colors in a row, column or diagonal are eliminated
//! - The grid then collapses under gravity, one row per step, and the cycle
//!   repeats until no match is left
//! - The game ends when the spawn cell at the top centre is taken
//!
//! # Example
//!
//! ```
//! use columns_core::{FallOutcome, GridEngine};
//! use columns_core::types::{Cell, Palette};
//!
//! let mut engine = GridEngine::new(Palette::Classic);
//! assert!(engine.spawn(0));
//!
//! engine.drop_to_bottom();
//! assert_eq!(engine.fall_step(), FallOutcome::Landed);
//! assert!(engine.cell_at(3, 19).is_alive());
//! assert_eq!(engine.cell_at(3, 16), Cell::Empty);
//! ```
//!
//! # Timing
//!
//! [`GameSession::tick`](session::GameSession::tick) takes a monotonic
//! millisecond timestamp. Falls happen every `fall_interval_ms` (800ms at
//! speed 1), eliminations and collapse steps every 20ms.

pub mod board;
pub mod config;
pub mod engine;
pub mod matches;
pub mod piece;
pub mod scoring;
pub mod session;
pub mod snapshot;

pub use columns_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use config::GameConfig;
pub use engine::{FallOutcome, GridEngine};
pub use matches::{find_match_triples, find_matches, MatchAxis, MatchTriple, MatchedCell};
pub use piece::{colors_from_seed, FallingPiece};
pub use scoring::{calculate_block_score, calculate_speed, fall_interval_ms, ScoreTracker};
pub use session::GameSession;
pub use snapshot::{GameSnapshot, PieceSnapshot};
