//! TUI Columns (workspace facade crate).
//!
//! Re-exports the member crates under short names so the binary, tests and
//! benches can write `tui_columns::core::GameSession` and friends.

pub mod logging;

pub use columns_core as core;
pub use columns_input as input;
pub use columns_term as term;
pub use columns_types as types;
