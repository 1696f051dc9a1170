//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, input mapping, terminal rendering).
//!
//! # Game Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `MISMATCH_HIDE_MS` | 500 | Reveal window before a mismatched pair flips back |
//! | `TIMER_TICK_MS` | 1000 | Stopwatch granularity (one second per tick) |
//!
//! # Configuration Tables
//!
//! Settings values are drawn from fixed allowed sets:
//!
//! - `GRID_SIZES`: 4x4 (8 pairs) and 6x6 (18 pairs)
//! - `PLAYER_COUNTS`: 1 through 4 players (turn-based local multiplayer)
//! - `ICON_CATALOG`: ordered glyph catalog consumed positionally by the
//!   Icons theme; must cover the largest grid (18 faces)
//!
//! # Examples
//!
//! ```
//! use tui_pairs_types::{GridSize, Settings, Theme, GRID_SIZES};
//!
//! // Defaults match a fresh install: icon theme, 4x4 grid, solo play.
//! let settings = Settings::default();
//! assert_eq!(settings.theme, Theme::Icons);
//! assert_eq!(settings.grid.tile_count(), 16);
//! assert_eq!(settings.player_count, 1);
//!
//! // Grid sizes come from the allowed table.
//! assert!(GRID_SIZES.contains(&GridSize::new(6, 6)));
//!
//! // Theme parses from its storage string (case-insensitive).
//! assert_eq!(Theme::from_str("numbers"), Some(Theme::Numbers));
//! ```

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Reveal window for a mismatched pair before both tiles flip back (500ms)
pub const MISMATCH_HIDE_MS: u32 = 500;

/// Stopwatch tick granularity (1000ms = one second per elapsed tick)
pub const TIMER_TICK_MS: u32 = 1000;

/// Maximum supported player count
pub const MAX_PLAYERS: usize = 4;

/// Allowed grid sizes (rows x cols, area always even)
pub const GRID_SIZES: [GridSize; 2] = [GridSize::new(4, 4), GridSize::new(6, 6)];

/// Allowed player counts
pub const PLAYER_COUNTS: [u8; 4] = [1, 2, 3, 4];

/// Fixed key under which settings are persisted
pub const SETTINGS_KEY: &str = "GameSettings";

/// Ordered icon catalog for the Icons theme.
///
/// Faces are drawn positionally (first N entries for N unique faces). The
/// catalog must stay at least 18 entries long to cover the 6x6 grid; glyphs
/// are single-column symbols that render in ordinary terminal fonts.
pub const ICON_CATALOG: [&str; 20] = [
    "★", "☀", "☾", "☁", "☂", "☘", "♠", "♣", "♥", "♦", "♪", "♫", "☎", "⚙", "⚑", "♜", "♞", "☯",
    "✈", "☄",
];

/// Card face theme
///
/// - **Numbers**: faces are the integers `0..uniq_count`
/// - **Icons**: faces are drawn positionally from [`ICON_CATALOG`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Theme {
    Numbers,
    Icons,
}

impl Theme {
    /// Parse theme from its storage string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_pairs_types::Theme;
    ///
    /// assert_eq!(Theme::from_str("numbers"), Some(Theme::Numbers));
    /// assert_eq!(Theme::from_str("Icons"), Some(Theme::Icons));
    /// assert_eq!(Theme::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "numbers" => Some(Theme::Numbers),
            "icons" => Some(Theme::Icons),
            _ => None,
        }
    }

    /// Convert to the lowercase storage string
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Numbers => "numbers",
            Theme::Icons => "icons",
        }
    }
}

/// Board dimensions for one round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridSize {
    pub rows: u8,
    pub cols: u8,
}

impl GridSize {
    pub const fn new(rows: u8, cols: u8) -> Self {
        Self { rows, cols }
    }

    /// Total tile count (`rows * cols`)
    pub const fn tile_count(&self) -> usize {
        (self.rows as usize) * (self.cols as usize)
    }

    /// Whether this size is in the allowed table
    pub fn is_allowed(&self) -> bool {
        GRID_SIZES.contains(self)
    }
}

/// Process-wide game configuration
///
/// Owned by the settings store; read-only to the core. The grid area must be
/// even (the deck splits into pairs) and the player count must be in
/// [`PLAYER_COUNTS`]; the core validates both at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub theme: Theme,
    pub grid: GridSize,
    pub player_count: u8,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::Icons,
            grid: GRID_SIZES[0],
            player_count: 1,
        }
    }
}

/// Game actions applied to an in-progress round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move the cursor one cell up
    MoveUp,
    /// Move the cursor one cell down
    MoveDown,
    /// Move the cursor one cell left
    MoveLeft,
    /// Move the cursor one cell right
    MoveRight,
    /// Flip the tile under the cursor
    Flip,
    /// Restart the round: fresh shuffle, zeroed progress, stopped timer
    Restart,
    /// Abandon the round and return to the settings screen
    ///
    /// Handled by the application loop (navigation, not round state).
    NewGame,
}

/// Actions on the settings screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Move to the previous option row
    PrevRow,
    /// Move to the next option row
    NextRow,
    /// Cycle the selected row to its previous value
    PrevValue,
    /// Cycle the selected row to its next value
    NextValue,
    /// Accept the current settings and start a round
    Confirm,
}

/// Render state of a single tile cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileStatus {
    /// Face down
    Hidden,
    /// Face up as part of the current selection (not yet resolved)
    Flipped,
    /// Permanently face up (part of a found pair)
    Matched,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_match_first_run() {
        let settings = Settings::default();
        assert_eq!(settings.theme, Theme::Icons);
        assert_eq!(settings.grid, GridSize::new(4, 4));
        assert_eq!(settings.player_count, 1);
    }

    #[test]
    fn theme_round_trips_through_storage_string() {
        for theme in [Theme::Numbers, Theme::Icons] {
            assert_eq!(Theme::from_str(theme.as_str()), Some(theme));
        }
        assert_eq!(Theme::from_str("NUMBERS"), Some(Theme::Numbers));
        assert_eq!(Theme::from_str(""), None);
    }

    #[test]
    fn allowed_grids_have_even_area() {
        for grid in GRID_SIZES {
            assert_eq!(grid.tile_count() % 2, 0);
            assert!(grid.is_allowed());
        }
        assert!(!GridSize::new(5, 5).is_allowed());
    }

    #[test]
    fn icon_catalog_covers_largest_grid() {
        let largest = GRID_SIZES
            .iter()
            .map(|g| g.tile_count())
            .max()
            .unwrap_or(0);
        assert!(ICON_CATALOG.len() >= largest / 2);
    }

    #[test]
    fn player_counts_fit_max_players() {
        assert_eq!(PLAYER_COUNTS.len(), MAX_PLAYERS);
        assert!(PLAYER_COUNTS.iter().all(|&p| p >= 1 && p as usize <= MAX_PLAYERS));
    }
}
