//! Players, marks and the game board.

use core::fmt;

use rand::Rng;

/// One of the two competing players.
#[derive(Debug, Copy, Clone, PartialOrd, PartialEq, Eq, Hash)]
pub enum Player {
    Red,
    Black,
}

impl Player {
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::Red => Self::Black,
            Self::Black => Self::Red,
        }
    }

    /// Picks either player with equal probability.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.random_bool(0.5) {
            Self::Red
        } else {
            Self::Black
        }
    }

    #[must_use]
    pub const fn mark(self) -> Mark {
        match self {
            Self::Red => Mark::Red,
            Self::Black => Mark::Black,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.mark(), f)
    }
}

/// Content of a single slot of the board.
#[derive(Debug, Copy, Clone, Default, PartialOrd, PartialEq, Eq, Hash)]
pub enum Mark {
    #[default]
    Empty,
    Red,
    Black,
}

impl Mark {
    /// The player owning this mark, `None` for an empty slot.
    #[must_use]
    pub const fn player(self) -> Option<Player> {
        match self {
            Self::Empty => None,
            Self::Red => Some(Player::Red),
            Self::Black => Some(Player::Black),
        }
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Human readable token, as shown on the board.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Empty => "EMPTY",
            Self::Red => "RED",
            Self::Black => "BLACK",
        }
    }
}

impl From<Player> for Mark {
    fn from(player: Player) -> Self {
        player.mark()
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Gameboard.
///
/// Board: rows --> col --> field. Technical indices correspond to the logical
/// indices: (row=0,col=0) <==> bottom left of game board.
#[derive(Debug, PartialEq, Clone, Eq, Hash)]
pub struct Gameboard {
    rows: usize,
    columns: usize,
    slots: Vec<Vec<Mark>>,
}

impl Gameboard {
    /// Creates an all empty board.
    #[must_use]
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            slots: vec![vec![Mark::Empty; columns]; rows],
        }
    }

    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub const fn columns(&self) -> usize {
        self.columns
    }

    #[must_use]
    pub const fn contains(&self, row: usize, column: usize) -> bool {
        row < self.rows && column < self.columns
    }

    /// Returns the mark at the given slot or `None` if the slot is not on the
    /// board.
    #[must_use]
    pub fn get(&self, row: usize, column: usize) -> Option<Mark> {
        self.slots.get(row).and_then(|r| r.get(column)).copied()
    }

    /// Iterates over the rows, starting with the bottom row.
    pub fn rows_iter(&self) -> impl Iterator<Item = &[Mark]> {
        self.slots.iter().map(Vec::as_slice)
    }

    /// Number of slots that are not empty.
    #[must_use]
    pub fn marks_placed(&self) -> usize {
        self.slots
            .iter()
            .flatten()
            .filter(|mark| !mark.is_empty())
            .count()
    }

    /// Returns the index to the next free slot in the selected column.
    ///
    /// Returns `None` if there are no more free slots or the column does not
    /// exist.
    #[must_use]
    pub fn next_slot_in_column(&self, column: usize) -> Option<usize> {
        if column >= self.columns {
            return None;
        }
        (0..self.rows).find(|&row| self.slots[row][column].is_empty())
    }

    /// Emits the column indices where moves are legal.
    pub fn available_columns_iter(&self) -> impl Iterator<Item = usize> {
        (0..self.columns).filter(|&col| self.next_slot_in_column(col).is_some())
    }

    /// Returns the number of free slots in the given column.
    #[must_use]
    pub fn free_slots_in_column(&self, column: usize) -> usize {
        self.next_slot_in_column(column)
            .map_or(0, |row| self.rows - row)
    }

    pub(crate) fn set(&mut self, row: usize, column: usize, mark: Mark) {
        self.slots[row][column] = mark;
    }

    pub(crate) fn clear(&mut self) {
        self.slots.iter_mut().flatten().for_each(|m| *m = Mark::Empty);
    }
}

/// Prints the board upside down: row 0 comes first.
impl fmt::Display for Gameboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows_iter() {
            for mark in row {
                write!(f, "{mark} | ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
