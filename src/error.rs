use crate::output::TableWriterBuilderError;
use std::path::PathBuf;
use thiserror::Error;

/// Error types for the LLG table generation
#[derive(Debug, Error)]
pub enum LlgError {
    /// Player count outside the supported range
    #[error("A game needs between 1 and {limit} players; got {count}.")]
    InvalidPlayerCount { count: usize, limit: usize },

    /// Player index outside the game
    #[error("Player {player} does not exist in a game of {n_players} players.")]
    InvalidPlayer { player: usize, n_players: usize },

    /// Coalition too large to leave room for the contributing player
    #[error("A coalition of {size} players cannot exclude a contributor in a game of {n_players} players.")]
    InvalidCoalitionSize { size: usize, n_players: usize },

    /// Writing a table file failed
    #[error("Failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Table writer configuration build error: {0}")]
    WriterBuild(#[from] TableWriterBuilderError),
}

/// Result type alias for LLG operations
pub type Result<T> = std::result::Result<T, LlgError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LlgError::InvalidPlayerCount {
            count: 0,
            limit: 19,
        };
        assert_eq!(
            err.to_string(),
            "A game needs between 1 and 19 players; got 0."
        );

        let err = LlgError::InvalidPlayer {
            player: 3,
            n_players: 3,
        };
        assert_eq!(
            err.to_string(),
            "Player 3 does not exist in a game of 3 players."
        );

        let err = LlgError::InvalidCoalitionSize {
            size: 3,
            n_players: 3,
        };
        assert_eq!(
            err.to_string(),
            "A coalition of 3 players cannot exclude a contributor in a game of 3 players."
        );

        let err = LlgError::Io {
            path: PathBuf::from("out/table.tex"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing directory"),
        };
        assert_eq!(
            err.to_string(),
            "Failed to write out/table.tex: missing directory"
        );
    }
}
