//! Game state module - manages the complete game state
//!
//! This module ties together all core components: deck, match bookkeeping,
//! selection, and the session stopwatch. It owns the board cursor and the
//! action dispatch used by the terminal shell.

use arrayvec::ArrayVec;

use crate::deck::{generate_deck, Tile};
use crate::error::GameError;
use crate::manager::GameManager;
use crate::rng::SimpleRng;
use crate::selection::{SelectOutcome, Selection};
use crate::stopwatch::Stopwatch;
use crate::types::*;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    settings: Settings,
    deck: Vec<Tile>,
    manager: GameManager,
    selection: Selection,
    stopwatch: Stopwatch,
    /// Board position the keyboard cursor sits on.
    cursor: usize,
    rng: SimpleRng,
}

impl GameState {
    /// Create a new game from settings and an RNG seed.
    ///
    /// Fails if the settings describe a board the deck generator cannot
    /// build (odd tile count, too few theme faces, bad player count).
    pub fn new(settings: Settings, seed: u32) -> Result<Self, GameError> {
        let mut rng = SimpleRng::new(seed);
        let deck = generate_deck(settings.grid, settings.theme, &ICON_CATALOG, &mut rng)?;
        let manager = GameManager::new(settings.player_count, deck.len())?;

        Ok(Self {
            settings,
            deck,
            manager,
            selection: Selection::new(),
            stopwatch: Stopwatch::new(),
            cursor: 0,
            rng,
        })
    }

    pub fn settings(&self) -> Settings {
        self.settings
    }

    pub fn rows(&self) -> usize {
        self.settings.grid.rows as usize
    }

    pub fn cols(&self) -> usize {
        self.settings.grid.cols as usize
    }

    pub fn deck(&self) -> &[Tile] {
        &self.deck
    }

    pub fn tile(&self, index: usize) -> Option<&Tile> {
        self.deck.get(index)
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn game_started(&self) -> bool {
        self.manager.game_started()
    }

    pub fn game_won(&self) -> bool {
        self.manager.game_won()
    }

    pub fn move_count(&self) -> u32 {
        self.manager.move_count()
    }

    pub fn scores(&self) -> &[u32] {
        self.manager.scores()
    }

    pub fn turn(&self) -> usize {
        self.manager.turn()
    }

    pub fn player_count(&self) -> usize {
        self.manager.player_count()
    }

    pub fn matched_pairs(&self) -> usize {
        self.manager.matched_pairs()
    }

    /// 1-based player numbers holding the highest score.
    pub fn top_scorers(&self) -> ArrayVec<usize, MAX_PLAYERS> {
        self.manager.top_scorers()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn elapsed_seconds(&self) -> u32 {
        self.stopwatch.seconds()
    }

    /// Session clock formatted as `m:ss`.
    pub fn elapsed_display(&self) -> String {
        self.stopwatch.display()
    }

    /// Current presentation state of the tile at `index`.
    pub fn tile_status(&self, index: usize) -> TileStatus {
        let Some(tile) = self.deck.get(index) else {
            return TileStatus::Hidden;
        };
        if self.manager.is_guessed(index) {
            return TileStatus::Matched;
        }
        if self.selection.is_selected(tile) {
            return TileStatus::Flipped;
        }
        TileStatus::Hidden
    }

    /// Flip the tile at `index` and run it through the selection rules.
    ///
    /// Guards the selection controller from inputs it never has to reason
    /// about: finished games, out-of-range indices, already matched tiles,
    /// and flipping the same physical tile twice.
    pub fn flip(&mut self, index: usize) -> SelectOutcome {
        if self.manager.game_won() {
            return SelectOutcome::Rejected;
        }
        let Some(&tile) = self.deck.get(index) else {
            return SelectOutcome::Rejected;
        };
        if self.manager.is_guessed(index) {
            return SelectOutcome::Rejected;
        }
        // A tile cannot pair with itself.
        if self.selection.is_selected(&tile) {
            return SelectOutcome::Rejected;
        }

        let outcome = self.selection.select(tile, &mut self.manager);

        if !matches!(outcome, SelectOutcome::Rejected) {
            if self.manager.game_won() {
                self.stopwatch.stop();
            } else {
                self.stopwatch.start();
            }
        }

        outcome
    }

    /// Try to move the cursor by one tile
    fn try_move_cursor(&mut self, dx: i32, dy: i32) -> bool {
        let cols = self.settings.grid.cols as i32;
        let rows = self.settings.grid.rows as i32;
        let col = (self.cursor as i32 % cols) + dx;
        let row = (self.cursor as i32 / cols) + dy;

        if col < 0 || col >= cols || row < 0 || row >= rows {
            return false;
        }

        self.cursor = (row * cols + col) as usize;
        true
    }

    /// Main game tick - update the reveal window and the clock
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        let hidden = self.selection.tick(elapsed_ms, &mut self.manager);
        let clock = self.stopwatch.tick(elapsed_ms);
        hidden || clock
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveUp => self.try_move_cursor(0, -1),
            GameAction::MoveDown => self.try_move_cursor(0, 1),
            GameAction::MoveLeft => self.try_move_cursor(-1, 0),
            GameAction::MoveRight => self.try_move_cursor(1, 0),
            GameAction::Flip => !matches!(self.flip(self.cursor), SelectOutcome::Rejected),
            GameAction::Restart => {
                // Reseed from the live RNG so the rebuilt board is dealt fresh.
                match Self::new(self.settings, self.rng.state()) {
                    Ok(next) => {
                        *self = next;
                        true
                    }
                    Err(_) => false,
                }
            }
            // Leaving for the settings screen is the shell's job.
            GameAction::NewGame => false,
        }
    }
}
