//! Error types for round construction and deck generation.

use thiserror::Error;

/// Fatal configuration and generation errors.
///
/// Both variants fire before a round exists; nothing mid-game produces a
/// `GameError`. Settings persistence failures are handled silently by the
/// store layer and never surface here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Grid area is odd or the player count is outside the supported range.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The active theme's catalog cannot cover the requested grid.
    #[error("theme catalog too small: need {needed} faces, have {available}")]
    InsufficientThemeAssets { needed: usize, available: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_are_descriptive() {
        let err = GameError::InvalidConfiguration("player count 7 not supported".into());
        assert!(err.to_string().contains("invalid configuration"));

        let err = GameError::InsufficientThemeAssets {
            needed: 18,
            available: 4,
        };
        let msg = err.to_string();
        assert!(msg.contains("18"));
        assert!(msg.contains("4"));
    }
}
