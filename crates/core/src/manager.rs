//! Game manager module - turn, move, score, and win bookkeeping
//!
//! The manager is the round's state machine. Its states are implicit in two
//! flags: not started (`game_started == false`), in progress, and won. It
//! never looks at the clock and never validates matches; the selection
//! controller guarantees `score` is only called with a confirmed pair.

use arrayvec::ArrayVec;

use crate::deck::Tile;
use crate::error::GameError;
use crate::types::MAX_PLAYERS;

/// Turn/match state machine for one round.
#[derive(Debug, Clone)]
pub struct GameManager {
    game_started: bool,
    game_won: bool,
    move_count: u32,
    /// One slot per player, all zero at round start.
    scores: ArrayVec<u32, MAX_PLAYERS>,
    /// Index of the player whose moves currently count.
    turn: usize,
    /// Matched tiles, appended in pairs. Capacity is reserved up front so
    /// `score` never reallocates mid-round.
    guessed: Vec<Tile>,
    total_tiles: usize,
}

impl GameManager {
    /// Create a manager for `player_count` players over a deck of
    /// `total_tiles` tiles.
    ///
    /// Fails fast with [`GameError::InvalidConfiguration`] when the player
    /// count is outside the supported range.
    pub fn new(player_count: u8, total_tiles: usize) -> Result<Self, GameError> {
        if player_count == 0 || player_count as usize > MAX_PLAYERS {
            return Err(GameError::InvalidConfiguration(format!(
                "player count {} not supported",
                player_count
            )));
        }

        let mut scores = ArrayVec::new();
        for _ in 0..player_count {
            scores.push(0);
        }

        Ok(Self {
            game_started: false,
            game_won: false,
            move_count: 0,
            scores,
            turn: 0,
            guessed: Vec::with_capacity(total_tiles),
            total_tiles,
        })
    }

    pub fn game_started(&self) -> bool {
        self.game_started
    }

    pub fn game_won(&self) -> bool {
        self.game_won
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn scores(&self) -> &[u32] {
        &self.scores
    }

    pub fn turn(&self) -> usize {
        self.turn
    }

    pub fn player_count(&self) -> usize {
        self.scores.len()
    }

    pub fn total_tiles(&self) -> usize {
        self.total_tiles
    }

    /// Matched tiles in match order (always an even count).
    pub fn guessed(&self) -> &[Tile] {
        &self.guessed
    }

    pub fn matched_pairs(&self) -> usize {
        self.guessed.len() / 2
    }

    /// Whether the tile at `index` has already been matched.
    pub fn is_guessed(&self, index: usize) -> bool {
        self.guessed.iter().any(|t| t.index == index)
    }

    /// Register a move.
    ///
    /// Increments the move count and, on the very first move, transitions
    /// the round to in-progress. Returns `true` exactly when this call
    /// performed that transition; the caller uses it as the signal to start
    /// the elapsed-time stopwatch.
    pub fn perform_move(&mut self) -> bool {
        if self.game_won {
            return false;
        }

        self.move_count += 1;

        let started_now = !self.game_started;
        self.game_started = true;
        started_now
    }

    /// Register a matched pair for the current player.
    ///
    /// Both tiles join `guessed` and the win condition is recomputed
    /// immediately, so `game_won` reflects the post-match state before this
    /// call returns. A match does not advance the turn; the scoring player
    /// keeps playing.
    pub fn score(&mut self, a: Tile, b: Tile) {
        self.scores[self.turn] += 1;
        self.guessed.push(a);
        self.guessed.push(b);
        self.game_won = self.guessed.len() == self.total_tiles;
    }

    /// Advance to the next player (wraps around).
    ///
    /// Called only after a confirmed mismatch.
    pub fn next_turn(&mut self) {
        self.turn = (self.turn + 1) % self.scores.len();
    }

    /// Return to the not-started state: zero moves, zero scores, no matched
    /// tiles, first player's turn.
    pub fn reset(&mut self) {
        self.game_started = false;
        self.game_won = false;
        self.move_count = 0;
        self.guessed.clear();
        for score in &mut self.scores {
            *score = 0;
        }
        self.turn = 0;
    }

    /// 1-based player numbers currently holding the top score.
    ///
    /// One entry means an outright winner; several mean a tie. Drives the
    /// results overlay for multiplayer rounds.
    pub fn top_scorers(&self) -> ArrayVec<usize, MAX_PLAYERS> {
        let mut top = ArrayVec::new();
        let best = self.scores.iter().copied().max().unwrap_or(0);
        for (player, &score) in self.scores.iter().enumerate() {
            if score == best {
                top.push(player + 1);
            }
        }
        top
    }
}
