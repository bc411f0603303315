//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: the snapshot is drawn into a
//! framebuffer of styled characters, which is then diffed and flushed to the
//! terminal through `crossterm`.
//!
//! - [`fb`]: framebuffer and styles
//! - [`game_view`]: snapshot -> framebuffer (pure, unit-testable)
//! - [`renderer`]: framebuffer -> terminal
//! - [`render_throttle`]: skip frames of static screens

pub mod fb;
pub mod game_view;
pub mod render_throttle;
pub mod renderer;

pub use columns_core as core;
pub use columns_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{block_rgb, GameView, Viewport};
pub use render_throttle::RenderThrottle;
pub use renderer::{encode_frame_into, TerminalRenderer};
