//! Error types of the engine.
//!
//! Construction problems and illegal moves are reported through two separate
//! types. Soft rejections of a move (target out of range or already taken) are
//! not errors at all, see [`crate::Game::take_turn`].

/// The board dimensions or the run length are unusable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("a run of at least 2 is required to win, got {num_to_win}")]
    RunTooShort { num_to_win: usize },

    #[error("board has {rows} rows but a run of {num_to_win} is required to win")]
    TooFewRows { rows: usize, num_to_win: usize },

    #[error("board has {columns} columns but a run of {num_to_win} is required to win")]
    TooFewColumns { columns: usize, num_to_win: usize },
}

/// A move that must be handled by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// The slot below the target is still empty.
    #[error("space below ({row}, {column}) is empty")]
    FloatingMove { row: usize, column: usize },
}
