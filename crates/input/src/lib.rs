//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. Every key
//! press is one discrete intent; there is no auto-repeat handling because the
//! piece moves a whole column per press.

pub mod map;

pub use columns_types as types;

pub use map::{handle_key_event, should_quit};
