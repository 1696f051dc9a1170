//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the matching rules, state management, and session
//! bookkeeping. It has **zero dependencies** on UI, persistence, or I/O,
//! making it:
//!
//! - **Deterministic**: Same seed produces the identical deal
//! - **Testable**: Comprehensive unit tests for all game rules
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//! - **Fast**: Zero-allocation hot paths for tick and flip processing
//!
//! # Module Structure
//!
//! - [`deck`]: Tile model, pair predicates, and the deck generator
//! - [`error`]: Fatal configuration errors
//! - [`game_state`]: Complete session state including cursor, clock, and action dispatch
//! - [`manager`]: Moves, scores, turn rotation, and the win check
//! - [`menu`]: Settings screen state machine
//! - [`rng`]: Seeded shuffle for reproducible deals
//! - [`selection`]: Two-tile selection rules and the mismatch reveal window
//! - [`stopwatch`]: Session clock with `m:ss` display
//!
//! # Game Rules
//!
//! This implementation follows classic concentration rules:
//!
//! - **Paired Deck**: Every face appears exactly twice; the layout comes from a seeded shuffle
//! - **Two-Flip Moves**: Each flip counts one move; the second flip of a pair resolves it
//! - **Match**: Scores the current player, removes the pair from play, and keeps the turn
//! - **Miss**: Both tiles stay revealed briefly, then hide and the turn passes
//! - **Win**: The game ends when every tile is matched
//!
//! # Example
//!
//! ```
//! use tui_pairs_core::GameState;
//! use tui_pairs_types::Settings;
//!
//! // Create a game with the default settings (4x4 board, one player).
//! let mut game = GameState::new(Settings::default(), 12345).unwrap();
//!
//! // Reveal the first two tiles.
//! game.flip(0);
//! game.flip(1);
//!
//! assert!(game.game_started());
//! assert_eq!(game.move_count(), 2);
//! ```
//!
//! # Timing
//!
//! The game uses a fixed timestep system:
//! - **Tick Rate**: 16ms (approximately 60 FPS)
//! - **Reveal Window**: Mismatched tiles hide 500ms after the second flip
//! - **Clock**: Counts whole seconds from the first move to the winning match
//!
//! Call [`GameState::tick`](game_state::GameState::tick) every frame with elapsed time.

pub mod deck;
pub mod error;
pub mod game_state;
pub mod manager;
pub mod menu;
pub mod rng;
pub mod selection;
pub mod stopwatch;

pub use tui_pairs_types as types;

// Re-export commonly used types for convenience
pub use deck::{generate_deck, tiles_equal, tiles_match, Tile, TileLabel};
pub use error::GameError;
pub use game_state::GameState;
pub use manager::GameManager;
pub use menu::{MenuRow, SettingsMenu};
pub use rng::SimpleRng;
pub use selection::{SelectOutcome, Selection};
pub use stopwatch::Stopwatch;
