//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It intentionally avoids ratatui widgets/layout and instead renders into a
//! simple framebuffer that can be flushed to a terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Render views (board, menu) as pure functions of state into a framebuffer
//! - Flush only the cells that changed since the previous frame

pub mod fb;
pub mod game_view;
pub mod menu_view;
pub mod renderer;

pub use tui_pairs_core as core;
pub use tui_pairs_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use menu_view::MenuView;
pub use renderer::{encode_changed, encode_full, TerminalRenderer};
