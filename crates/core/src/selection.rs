//! Selection module - the two-tile reveal protocol
//!
//! Mediates tile flips into [`GameManager`] calls: first flip is recorded,
//! second flip resolves to a match (scored immediately) or a mismatch (both
//! tiles stay face up for [`MISMATCH_HIDE_MS`], then flip back and the turn
//! passes). The hide delay is a tick-driven countdown, so cancelling it is a
//! plain state clear; a cancelled delay can never advance the turn late.

use crate::deck::{tiles_equal, tiles_match, Tile};
use crate::manager::GameManager;
use crate::types::MISMATCH_HIDE_MS;

/// Result of offering a tile to the selection controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Ignored: a mismatched pair is still on display.
    Rejected,
    /// Recorded as the first tile of a new selection.
    FirstRevealed,
    /// Second tile completed a pair; both are now permanently revealed.
    Matched { won: bool },
    /// Second tile did not match; the hide delay is armed.
    Mismatched,
}

/// Ephemeral two-slot selection state. Never persisted.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    first: Option<Tile>,
    second: Option<Tile>,
    hide_timer_ms: u32,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn first(&self) -> Option<&Tile> {
        self.first.as_ref()
    }

    pub fn second(&self) -> Option<&Tile> {
        self.second.as_ref()
    }

    /// Whether a mismatched pair is pending resolution (both slots full).
    pub fn is_pending(&self) -> bool {
        self.first.is_some() && self.second.is_some()
    }

    /// Whether `tile` is one of the currently revealed selections.
    ///
    /// Physical identity (`tiles_equal`): the partner of a selected tile is
    /// not itself selected.
    pub fn is_selected(&self, tile: &Tile) -> bool {
        tiles_equal(self.first.as_ref(), Some(tile))
            || tiles_equal(self.second.as_ref(), Some(tile))
    }

    /// Offer a tile to the selection.
    ///
    /// The move is registered with the manager before the match outcome is
    /// applied, so the move count is always observable first.
    pub fn select(&mut self, tile: Tile, manager: &mut GameManager) -> SelectOutcome {
        // No double-click race: while both tiles are on display, nothing new
        // is accepted until the hide delay fires.
        if self.is_pending() {
            return SelectOutcome::Rejected;
        }

        let Some(first) = self.first else {
            manager.perform_move();
            self.first = Some(tile);
            return SelectOutcome::FirstRevealed;
        };

        manager.perform_move();

        if tiles_match(Some(&first), Some(&tile)) {
            // Resolved instantly: both tiles go straight into the matched
            // set and the selection empties without any delay.
            self.first = None;
            manager.score(first, tile);
            return SelectOutcome::Matched {
                won: manager.game_won(),
            };
        }

        self.second = Some(tile);
        self.hide_timer_ms = MISMATCH_HIDE_MS;
        SelectOutcome::Mismatched
    }

    /// Drive the mismatch-hide countdown.
    ///
    /// On expiry the turn passes and both tiles flip back. Returns `true`
    /// when the visible state changed (redraw hint).
    pub fn tick(&mut self, elapsed_ms: u32, manager: &mut GameManager) -> bool {
        if !self.is_pending() {
            return false;
        }

        self.hide_timer_ms = self.hide_timer_ms.saturating_sub(elapsed_ms);
        if self.hide_timer_ms > 0 {
            return false;
        }

        manager.next_turn();
        self.first = None;
        self.second = None;
        true
    }

    /// Drop any in-flight selection without advancing the turn.
    ///
    /// Used on restart and teardown mid-delay.
    pub fn cancel(&mut self) {
        self.first = None;
        self.second = None;
        self.hide_timer_ms = 0;
    }
}
