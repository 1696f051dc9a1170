//! Terminal input module (shell-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`] for the board
//! screen and [`crate::types::MenuAction`] for the settings screen.

pub mod map;

pub use tui_pairs_types as types;

pub use map::{handle_game_key, handle_menu_key, should_quit};
