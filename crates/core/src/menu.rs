//! Menu module - settings screen state
//!
//! Holds a draft [`Settings`] while the player picks theme, grid size, and
//! player count. Values cycle through their allowed tables; nothing is
//! persisted or applied until Confirm hands the draft back to the caller.

use crate::types::{MenuAction, Settings, Theme, GRID_SIZES, PLAYER_COUNTS};

/// Option rows on the settings screen, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuRow {
    Theme,
    Grid,
    Players,
}

/// Settings screen state machine.
#[derive(Debug, Clone)]
pub struct SettingsMenu {
    draft: Settings,
    row: MenuRow,
}

impl SettingsMenu {
    /// Seed the draft from the current settings.
    pub fn new(settings: Settings) -> Self {
        Self {
            draft: settings,
            row: MenuRow::Theme,
        }
    }

    pub fn row(&self) -> MenuRow {
        self.row
    }

    pub fn settings(&self) -> Settings {
        self.draft
    }

    /// Apply a menu action. Returns the chosen settings on Confirm.
    pub fn apply(&mut self, action: MenuAction) -> Option<Settings> {
        match action {
            MenuAction::PrevRow => {
                self.row = match self.row {
                    MenuRow::Theme => MenuRow::Theme,
                    MenuRow::Grid => MenuRow::Theme,
                    MenuRow::Players => MenuRow::Grid,
                };
                None
            }
            MenuAction::NextRow => {
                self.row = match self.row {
                    MenuRow::Theme => MenuRow::Grid,
                    MenuRow::Grid => MenuRow::Players,
                    MenuRow::Players => MenuRow::Players,
                };
                None
            }
            MenuAction::PrevValue => {
                self.cycle(-1);
                None
            }
            MenuAction::NextValue => {
                self.cycle(1);
                None
            }
            MenuAction::Confirm => Some(self.draft),
        }
    }

    /// Cycle the selected row through its allowed table (wrapping).
    fn cycle(&mut self, step: i32) {
        match self.row {
            MenuRow::Theme => {
                // Two values, so either direction toggles.
                self.draft.theme = match self.draft.theme {
                    Theme::Numbers => Theme::Icons,
                    Theme::Icons => Theme::Numbers,
                };
            }
            MenuRow::Grid => {
                let at = GRID_SIZES
                    .iter()
                    .position(|g| *g == self.draft.grid)
                    .unwrap_or(0);
                self.draft.grid = GRID_SIZES[cycle_index(at, GRID_SIZES.len(), step)];
            }
            MenuRow::Players => {
                let at = PLAYER_COUNTS
                    .iter()
                    .position(|p| *p == self.draft.player_count)
                    .unwrap_or(0);
                self.draft.player_count =
                    PLAYER_COUNTS[cycle_index(at, PLAYER_COUNTS.len(), step)];
            }
        }
    }
}

fn cycle_index(at: usize, len: usize, step: i32) -> usize {
    let len = len as i32;
    ((at as i32 + step).rem_euclid(len)) as usize
}
