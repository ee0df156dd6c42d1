//! Navigating a keypad by following directions.

#[cfg(test)]
mod tests;

use lib::grid::{Grid, GridExt};
use lib::input::B;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Debug, Error)]
#[error("bad direction {0:?}")]
pub struct DirectionError(char);

impl TryFrom<u8> for Direction {
    type Error = DirectionError;

    #[inline]
    fn try_from(b: u8) -> Result<Self, Self::Error> {
        Ok(match b {
            b'U' => Direction::Up,
            b'D' => Direction::Down,
            b'L' => Direction::Left,
            b'R' => Direction::Right,
            b => return Err(DirectionError(b as char)),
        })
    }
}

lib::from_input! {
    |B(b): B| -> Direction {
        Ok(Direction::try_from(b)?)
    }
}

#[derive(Debug, Error)]
pub enum KeypadError {
    #[error("keypad has {0} cells, which is not a multiple of {1} columns")]
    Ragged(usize, usize),
    #[error("start symbol {0:?} is not on the keypad")]
    MissingStart(char),
}

/// A fixed keypad layout where `None` marks a cell without a key.
#[derive(Debug, Clone)]
pub struct Keypad {
    cells: Vec<Option<char>>,
    columns: usize,
    start: (usize, usize),
}

impl Keypad {
    /// Construct a keypad out of rows of `columns` cells, starting on the
    /// key labelled `start`.
    pub fn new(cells: Vec<Option<char>>, columns: usize, start: char) -> Result<Self, KeypadError> {
        if columns == 0 || cells.len() % columns != 0 {
            return Err(KeypadError::Ragged(cells.len(), columns));
        }

        let index = cells
            .iter()
            .position(|&c| c == Some(start))
            .ok_or(KeypadError::MissingStart(start))?;

        Ok(Self {
            start: (index / columns, index % columns),
            cells,
            columns,
        })
    }

    /// The 3x3 keypad:
    ///
    /// ```text
    /// 1 2 3
    /// 4 5 6
    /// 7 8 9
    /// ```
    pub fn square() -> Self {
        Self {
            cells: "123456789".chars().map(Some).collect(),
            columns: 3,
            start: (1, 1),
        }
    }

    /// The diamond shaped keypad:
    ///
    /// ```text
    ///     1
    ///   2 3 4
    /// 5 6 7 8 9
    ///   A B C
    ///     D
    /// ```
    pub fn diamond() -> Self {
        const LAYOUT: &str = "..1...234.56789.ABC...D..";

        Self {
            cells: LAYOUT.chars().map(|c| (c != '.').then_some(c)).collect(),
            columns: 5,
            start: (2, 0),
        }
    }

    /// Get the key at the given position, if any.
    #[inline]
    pub fn key(&self, row: usize, column: usize) -> Option<char> {
        self.cells
            .as_grid(self.columns)
            .try_get(row, column)
            .copied()
            .flatten()
    }
}

/// Tracks a position on a keypad.
#[derive(Debug, Clone)]
pub struct Navigator<'a> {
    keypad: &'a Keypad,
    row: usize,
    column: usize,
    symbol: char,
}

impl<'a> Navigator<'a> {
    /// Construct a navigator positioned on the start key of the keypad.
    pub fn new(keypad: &'a Keypad) -> Self {
        let (row, column) = keypad.start;

        Self {
            keypad,
            row,
            column,
            symbol: keypad.key(row, column).unwrap_or_default(),
        }
    }

    /// Current row and column.
    #[inline]
    pub fn position(&self) -> (usize, usize) {
        (self.row, self.column)
    }

    /// The key at the current position.
    #[inline]
    pub fn symbol(&self) -> char {
        self.symbol
    }

    /// Try to move one step, returns `false` and stays put if there is no
    /// key in that direction.
    pub fn step(&mut self, direction: Direction) -> bool {
        let (row, column) = match direction {
            Direction::Up => (self.row.checked_sub(1), Some(self.column)),
            Direction::Down => (self.row.checked_add(1), Some(self.column)),
            Direction::Left => (Some(self.row), self.column.checked_sub(1)),
            Direction::Right => (Some(self.row), self.column.checked_add(1)),
        };

        let (Some(row), Some(column)) = (row, column) else {
            return false;
        };

        let Some(symbol) = self.keypad.key(row, column) else {
            return false;
        };

        self.row = row;
        self.column = column;
        self.symbol = symbol;
        true
    }

    /// Follow a line of directions, returning the key it ends up on.
    pub fn follow<I>(&mut self, directions: I) -> char
    where
        I: IntoIterator<Item = Direction>,
    {
        for direction in directions {
            self.step(direction);
        }

        self.symbol
    }
}

/// Compute the code for the given lines of directions.
///
/// # Examples
///
/// ```
/// use y2016::keypad::{code, Direction::*, Keypad};
///
/// let lines = [vec![Up, Left, Left], vec![Right, Right, Down, Down, Down]];
/// assert_eq!(code(&Keypad::square(), &lines), "19");
/// ```
pub fn code<L>(keypad: &Keypad, lines: &[L]) -> String
where
    L: AsRef<[Direction]>,
{
    let mut navigator = Navigator::new(keypad);

    lines
        .iter()
        .map(|line| navigator.follow(line.as_ref().iter().copied()))
        .collect()
}
