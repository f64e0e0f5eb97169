//! Board dimensions and winning run length.

use crate::error::ConfigError;

/// Shape of a game: how many rows and columns and how many marks in a row win.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameConfig {
    pub rows: usize,
    pub columns: usize,
    pub num_to_win: usize,
}

impl GameConfig {
    /// Default number of rows and columns.
    pub const DEFAULT_SIZE: usize = 8;
    /// Default run length.
    pub const DEFAULT_NUM_TO_WIN: usize = 4;

    #[must_use]
    pub const fn new(rows: usize, columns: usize, num_to_win: usize) -> Self {
        Self {
            rows,
            columns,
            num_to_win,
        }
    }

    /// Checks that a run of `num_to_win` fits both vertically and
    /// horizontally and that it is at least 2.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.num_to_win < 2 {
            return Err(ConfigError::RunTooShort {
                num_to_win: self.num_to_win,
            });
        }
        if self.rows < self.num_to_win {
            return Err(ConfigError::TooFewRows {
                rows: self.rows,
                num_to_win: self.num_to_win,
            });
        }
        if self.columns < self.num_to_win {
            return Err(ConfigError::TooFewColumns {
                columns: self.columns,
                num_to_win: self.num_to_win,
            });
        }
        Ok(())
    }

    /// Number of cells on the board.
    #[must_use]
    pub const fn cells(&self) -> usize {
        self.rows * self.columns
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_SIZE,
            Self::DEFAULT_SIZE,
            Self::DEFAULT_NUM_TO_WIN,
        )
    }
}
