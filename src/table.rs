//! Headless table for graphical front ends.
//!
//! A front end shows one clickable slot per `(row, column)`, lets the user
//! select a slot and commits the move with a separate action. [`Table`] keeps
//! everything such a front end needs besides the widgets themselves: the
//! token and lock state of every slot, the pending selection and the status
//! line. When a game ends the table reports a [`Notice`] and keeps the final
//! position on display until [`Table::acknowledge`] starts the next game with
//! a randomly chosen first player.

use core::fmt;
use std::cell::RefCell;
use std::rc::Rc;

use rand::Rng;
use tracing::{debug, info};

use crate::{ConfigError, Game, GameConfig, GameResult, Mark, MoveError, Player};

/// What a slot widget shows.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct CellView {
    pub token: Mark,
    /// Occupied slots can no longer be selected.
    pub locked: bool,
}

/// End of game message.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Notice {
    Draw,
    Won(Player),
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Draw => f.write_str("DRAW"),
            Self::Won(player) => write!(f, "{player} WON"),
        }
    }
}

/// Result of [`Table::commit`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The game goes on. Also returned when nothing was selected or the move
    /// was ignored.
    Pending,
    /// The game ended. The final position stays until [`Table::acknowledge`].
    GameOver(Notice),
}

type Cells = Rc<RefCell<Vec<Vec<CellView>>>>;

/// Engine plus the view state of a front end.
#[derive(Debug)]
pub struct Table<R> {
    game: Game,
    cells: Cells,
    selection: Option<(usize, usize)>,
    status: String,
    rng: R,
}

impl<R: Rng> Table<R> {
    /// Starts the first game with a player drawn from `rng`.
    pub fn new(config: GameConfig, mut rng: R) -> Result<Self, ConfigError> {
        let first = Player::random(&mut rng);
        let mut game = Game::with_config(config, first)?;

        let cells: Cells = Rc::new(RefCell::new(vec![
            vec![CellView::default(); config.columns];
            config.rows
        ]));
        let sink = Rc::clone(&cells);
        game.add_listener(move |event| {
            let mut cells = sink.borrow_mut();
            cells[event.row][event.column] = CellView {
                token: event.player.mark(),
                locked: true,
            };
        });

        Ok(Self {
            game,
            cells,
            selection: None,
            status: format!("{first} begins."),
            rng,
        })
    }

    /// Remembers the slot for the next [`Table::commit`].
    pub fn select(&mut self, row: usize, column: usize) {
        debug!(row, column, "slot selected");
        self.selection = Some((row, column));
    }

    /// Plays the selected slot.
    ///
    /// Ignored while a finished game waits for [`Table::acknowledge`].
    ///
    /// # Errors
    /// [`MoveError::FloatingMove`] is handed to the caller, who is expected to
    /// show it. Nothing changes in that case.
    pub fn commit(&mut self) -> Result<Outcome, MoveError> {
        let Some((row, column)) = self.selection else {
            return Ok(Outcome::Pending);
        };
        if self.game.result().is_over() {
            return Ok(Outcome::Pending);
        }

        let notice = match self.game.take_turn(row, column)? {
            GameResult::InProgress => {
                self.status = format!("It's {}'s turn", self.game.turn());
                return Ok(Outcome::Pending);
            }
            GameResult::Draw => Notice::Draw,
            GameResult::Winner(player) => Notice::Won(player),
        };

        info!(%notice, "game over");
        self.status = notice.to_string();
        Ok(Outcome::GameOver(notice))
    }

    /// Dismisses the end of game notice: resets the engine with a random
    /// first player and unlocks all slots.
    ///
    /// Returns the new first player, or `None` if the game is still running.
    pub fn acknowledge(&mut self) -> Option<Player> {
        if !self.game.result().is_over() {
            return None;
        }

        let first = Player::random(&mut self.rng);
        self.game.reset(first);
        self.cells
            .borrow_mut()
            .iter_mut()
            .flatten()
            .for_each(|cell| *cell = CellView::default());
        self.selection = None;
        self.status = format!("{first} begins.");
        Some(first)
    }
}

impl<R> Table<R> {
    #[must_use]
    pub fn cell(&self, row: usize, column: usize) -> Option<CellView> {
        self.cells
            .borrow()
            .get(row)
            .and_then(|r| r.get(column))
            .copied()
    }

    /// Slot views ordered for display: top row first, so row 0 ends up at the
    /// bottom of the screen.
    #[must_use]
    pub fn visual_rows(&self) -> Vec<Vec<CellView>> {
        self.cells.borrow().iter().rev().cloned().collect()
    }

    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }

    #[must_use]
    pub const fn selection(&self) -> Option<(usize, usize)> {
        self.selection
    }

    #[must_use]
    pub const fn game(&self) -> &Game {
        &self.game
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn table(rows: usize, columns: usize, num_to_win: usize) -> Table<StdRng> {
        let config = GameConfig::new(rows, columns, num_to_win);
        Table::new(config, StdRng::seed_from_u64(42)).unwrap()
    }

    fn play(table: &mut Table<StdRng>, row: usize, column: usize) -> Result<Outcome, MoveError> {
        table.select(row, column);
        table.commit()
    }

    #[test]
    fn test_new_table() {
        let table = table(3, 4, 3);
        let first = table.game().turn();
        assert_eq!(table.status(), format!("{first} begins."));
        assert_eq!(table.selection(), None);
        assert_eq!(table.cell(2, 3), Some(CellView::default()));
        assert_eq!(table.cell(3, 0), None);

        let config = GameConfig::new(3, 4, 5);
        assert!(Table::new(config, StdRng::seed_from_u64(1)).is_err());
    }

    #[test]
    fn test_commit_without_selection() {
        let mut table = table(3, 3, 3);
        assert_eq!(table.commit(), Ok(Outcome::Pending));
        assert_eq!(table.game().marks_placed(), 0);
    }

    #[test]
    fn test_commit_locks_cell() {
        let mut table = table(3, 3, 3);
        let first = table.game().turn();

        assert_eq!(play(&mut table, 0, 1), Ok(Outcome::Pending));
        assert_eq!(
            table.cell(0, 1),
            Some(CellView {
                token: first.mark(),
                locked: true
            })
        );
        assert_eq!(
            table.status(),
            format!("It's {}'s turn", first.opponent())
        );

        // selecting a taken slot changes nothing
        assert_eq!(play(&mut table, 0, 1), Ok(Outcome::Pending));
        assert_eq!(table.game().marks_placed(), 1);
        assert_eq!(table.game().turn(), first.opponent());
    }

    #[test]
    fn test_floating_move_is_reported() {
        let mut table = table(3, 3, 3);
        let status = table.status().to_string();

        assert_eq!(
            play(&mut table, 1, 0),
            Err(MoveError::FloatingMove { row: 1, column: 0 })
        );
        assert_eq!(table.cell(1, 0), Some(CellView::default()));
        assert_eq!(table.status(), status);
        assert_eq!(table.game().marks_placed(), 0);
    }

    fn locked_cells(table: &Table<StdRng>) -> usize {
        table
            .visual_rows()
            .iter()
            .flatten()
            .filter(|cell| cell.locked)
            .count()
    }

    #[test]
    fn test_win_keeps_final_position_until_acknowledged() {
        let mut table = table(2, 2, 2);
        let first = table.game().turn();

        assert_eq!(play(&mut table, 0, 0), Ok(Outcome::Pending));
        assert_eq!(play(&mut table, 0, 1), Ok(Outcome::Pending));
        assert_eq!(
            play(&mut table, 1, 0),
            Ok(Outcome::GameOver(Notice::Won(first)))
        );

        // the winning position is still shown next to the notice
        assert_eq!(locked_cells(&table), 3);
        assert_eq!(table.game().marks_placed(), 3);
        assert_eq!(table.game().result(), GameResult::Winner(first));
        assert_eq!(table.status(), format!("{first} WON"));

        // further commits are ignored until the notice is dismissed
        assert_eq!(play(&mut table, 1, 1), Ok(Outcome::Pending));
        assert_eq!(table.cell(1, 1), Some(CellView::default()));
        assert_eq!(locked_cells(&table), 3);

        let next = table.acknowledge();
        assert_eq!(next, Some(table.game().turn()));
        let next = table.game().turn();
        assert_eq!(table.game().result(), GameResult::InProgress);
        assert_eq!(table.game().marks_placed(), 0);
        assert_eq!(table.status(), format!("{next} begins."));
        assert_eq!(table.selection(), None);
        assert!(
            table
                .visual_rows()
                .iter()
                .flatten()
                .all(|cell| *cell == CellView::default())
        );

        // the listener still feeds the new game
        assert_eq!(play(&mut table, 0, 1), Ok(Outcome::Pending));
        assert_eq!(table.cell(0, 1).map(|c| c.token), Some(next.mark()));
    }

    #[test]
    fn test_draw_keeps_final_position_until_acknowledged() {
        let mut table = table(2, 2, 2);
        play(&mut table, 0, 0).unwrap();
        play(&mut table, 0, 1).unwrap();
        play(&mut table, 1, 1).unwrap();
        assert_eq!(play(&mut table, 1, 0), Ok(Outcome::GameOver(Notice::Draw)));
        assert_eq!(locked_cells(&table), 4);
        assert_eq!(table.status(), "DRAW");

        assert!(table.acknowledge().is_some());
        assert_eq!(locked_cells(&table), 0);
        assert_eq!(table.game().marks_placed(), 0);
    }

    #[test]
    fn test_acknowledge_while_running() {
        let mut table = table(3, 3, 3);
        play(&mut table, 0, 0).unwrap();
        assert_eq!(table.acknowledge(), None);
        assert_eq!(table.game().marks_placed(), 1);
        assert_eq!(locked_cells(&table), 1);
    }

    #[test]
    fn test_visual_rows_top_first() {
        let mut table = table(2, 2, 2);
        let first = table.game().turn();
        play(&mut table, 0, 1).unwrap();

        let rows = table.visual_rows();
        assert_eq!(rows[0], vec![CellView::default(); 2]);
        assert_eq!(rows[1][1].token, first.mark());
    }

    #[test]
    fn test_notice_display() {
        assert_eq!(Notice::Draw.to_string(), "DRAW");
        assert_eq!(Notice::Won(Player::Red).to_string(), "RED WON");
    }
}
