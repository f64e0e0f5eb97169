//! Game engine: turn handling, gravity enforcement and winner detection.

use core::fmt;

use tracing::{debug, info, warn};

use crate::event::{ListenerId, Listeners, MoveEvent};
use crate::{ConfigError, GameConfig, Gameboard, Mark, MoveError, Player};

/// State of a game as returned by [`Game::take_turn`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum GameResult {
    /// Game continues.
    InProgress,
    /// The board is full without a winner.
    Draw,
    /// Player won with the last move.
    Winner(Player),
}

impl GameResult {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }

    #[must_use]
    pub const fn winner(self) -> Option<Player> {
        match self {
            Self::Winner(player) => Some(player),
            _ => None,
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InProgress => f.write_str("IN_PROGRESS"),
            Self::Draw => f.write_str("DRAW"),
            Self::Winner(player) => fmt::Display::fmt(player, f),
        }
    }
}

/// Game with all its state.
///
/// The only mutating operations are [`Game::take_turn`] (and its shortcut
/// [`Game::drop_into`]) and [`Game::reset`]. Accepted moves are announced to
/// the registered listeners.
#[derive(Debug)]
pub struct Game {
    config: GameConfig,
    board: Gameboard,
    turn: Player,
    result: GameResult,
    marks_placed: usize,
    listeners: Listeners,
}

impl Game {
    /// Creates a game with an empty board.
    ///
    /// Fails if `num_to_win` is below 2 or does not fit into the rows or the
    /// columns.
    pub fn new(
        rows: usize,
        columns: usize,
        num_to_win: usize,
        first_turn: Player,
    ) -> Result<Self, ConfigError> {
        Self::with_config(GameConfig::new(rows, columns, num_to_win), first_turn)
    }

    pub fn with_config(config: GameConfig, first_turn: Player) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, first_turn))
    }

    /// Creates a game on the default 8x8 board with 4 to win.
    #[must_use]
    pub fn with_first_turn(first_turn: Player) -> Self {
        Self::build(GameConfig::default(), first_turn)
    }

    fn build(config: GameConfig, first_turn: Player) -> Self {
        let mut game = Self {
            config,
            board: Gameboard::new(config.rows, config.columns),
            turn: first_turn,
            result: GameResult::InProgress,
            marks_placed: 0,
            listeners: Listeners::default(),
        };
        game.reset(first_turn);
        game
    }

    /// Clears the board and starts over with `first_turn`. Dimensions and
    /// listeners are kept.
    pub fn reset(&mut self, first_turn: Player) {
        self.turn = first_turn;
        self.result = GameResult::InProgress;
        self.board.clear();
        self.marks_placed = 0;
        debug!(first = %first_turn, "game reset");
    }

    /// Places the mark of the current player at `(row, column)`.
    ///
    /// Targets outside the board and occupied slots are ignored and report
    /// [`GameResult::InProgress`], exactly like a move that keeps the game
    /// going. Callers cannot tell the two apart from the return value alone.
    /// Once the game is over every move is ignored and the final result is
    /// reported until [`Game::reset`] is called.
    ///
    /// # Errors
    /// [`MoveError::FloatingMove`] if the slot below the target is empty. The
    /// game is left untouched in that case.
    pub fn take_turn(&mut self, row: usize, column: usize) -> Result<GameResult, MoveError> {
        if self.result.is_over() {
            warn!(row, column, result = %self.result, "game is over, ignoring move");
            return Ok(self.result);
        }

        let Some(target) = self.board.get(row, column) else {
            warn!(row, column, "space does not exist");
            return Ok(GameResult::InProgress);
        };
        if !target.is_empty() {
            warn!(row, column, "space already occupied");
            return Ok(GameResult::InProgress);
        }
        if row > 0 && self.board.get(row - 1, column) == Some(Mark::Empty) {
            warn!(row, column, "space below is empty");
            return Err(MoveError::FloatingMove { row, column });
        }

        let mover = self.turn;
        self.board.set(row, column, mover.mark());
        self.marks_placed += 1;

        // turn must still be the mover here
        self.result = self.find_winner(row, column);

        if self.result.is_over() {
            info!(result = %self.result, marks = self.marks_placed, "game over");
        } else {
            self.turn = mover.opponent();
        }
        debug!(row, column, player = %mover, "mark placed");

        self.listeners.notify(&MoveEvent {
            row,
            column,
            player: mover,
        });
        Ok(self.result)
    }

    /// Drops a mark into `column`; it lands on the lowest free slot.
    ///
    /// A full or non-existing column is ignored like an occupied slot.
    pub fn drop_into(&mut self, column: usize) -> Result<GameResult, MoveError> {
        match self.board.next_slot_in_column(column) {
            Some(row) => self.take_turn(row, column),
            None if self.result.is_over() => Ok(self.result),
            None => {
                warn!(column, "column is full or does not exist");
                Ok(GameResult::InProgress)
            }
        }
    }

    /// Evaluates the board after the current player placed a mark at
    /// `(row, column)`.
    ///
    /// Only looks at the run of `num_to_win` slots ending at `row` downwards
    /// and at the whole row. Diagonals are not considered.
    fn find_winner(&self, row: usize, column: usize) -> GameResult {
        let n = self.config.num_to_win;
        let mark = self.turn.mark();

        // vertical: nothing can sit above the new mark
        if row + 1 >= n
            && (row + 1 - n..=row).all(|r| self.board.get(r, column) == Some(mark))
        {
            return GameResult::Winner(self.turn);
        }

        // horizontal: scan the complete row left to right
        let mut straight = 0;
        for &slot in self.board.rows_iter().nth(row).unwrap_or_default() {
            if slot != mark {
                straight = 0;
                continue;
            }
            straight += 1;
            if straight == n {
                return GameResult::Winner(self.turn);
            }
        }

        if self.marks_placed >= self.config.cells() {
            return GameResult::Draw;
        }

        GameResult::InProgress
    }

    /// Registers a callback that is invoked after every accepted move.
    pub fn add_listener<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&MoveEvent) + 'static,
    {
        self.listeners.add(Box::new(listener))
    }

    /// Returns whether a listener with that id was registered.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    #[must_use]
    pub const fn result(&self) -> GameResult {
        self.result
    }

    /// The player to move next. After the game ended this is the player who
    /// made the last move.
    #[must_use]
    pub const fn turn(&self) -> Player {
        self.turn
    }

    #[must_use]
    pub const fn board(&self) -> &Gameboard {
        &self.board
    }

    /// Copy of the current board.
    #[must_use]
    pub fn board_snapshot(&self) -> Gameboard {
        self.board.clone()
    }

    #[must_use]
    pub const fn marks_placed(&self) -> usize {
        self.marks_placed
    }

    #[must_use]
    pub const fn config(&self) -> GameConfig {
        self.config
    }

    #[must_use]
    pub const fn rows(&self) -> usize {
        self.config.rows
    }

    #[must_use]
    pub const fn columns(&self) -> usize {
        self.config.columns
    }

    #[must_use]
    pub const fn num_to_win(&self) -> usize {
        self.config.num_to_win
    }
}

/// Renders the board, bottom row first.
impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.board, f)
    }
}
