use std::collections::BTreeSet;

use crate::{ConfigurationError, InvalidMove, OutOfRange, PlayerColour};

/// Neither the width nor the height of a board may be smaller than this.
pub const MIN_BOARD_DIMENSION: usize = 3;

/// A grid of columns into which counters are dropped.
///
/// Rows and columns are numbered from 1 in the public API, row 1 being the
/// bottom row. Counters fall to the lowest empty row of their column, so the
/// occupied cells of every column form an unbroken block starting at row 1.
///
/// Cloning a board gives an independent copy: counters dropped into the
/// clone never show up in the original, and vice versa.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    /// Row-major, starting with the bottom row.
    ///
    /// `drop_counter()` is the only way to fill a cell, which keeps every
    /// column free of gaps.
    cells: Vec<Option<PlayerColour>>,
}

impl Board {
    /// Creates an empty board.
    pub fn new(width: usize, height: usize) -> Result<Self, ConfigurationError> {
        if width < MIN_BOARD_DIMENSION || height < MIN_BOARD_DIMENSION {
            return Err(ConfigurationError::BoardTooSmall { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![None; width * height],
        })
    }

    /// Test fixture: creates a board from a drawing of its rows, top row first.
    ///
    /// A space or `.` is an empty cell, every other character is looked up in
    /// `legend`. The counters are dropped row by row starting at the bottom.
    ///
    /// Panics if the layout is (obviously) invalid: rows of different length,
    /// fewer than three rows or columns, a character missing from the legend,
    /// or a counter floating above an empty cell.
    #[cfg(any(test, feature = "test-utils"))]
    pub fn from_layout(rows: &[&str], legend: &[(char, PlayerColour)]) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.chars().count());
        let mut board = Board::new(width, height)
            .expect("Layout is too small for a board");

        for row in rows.iter().rev() {
            assert_eq!(row.chars().count(), width, "Layout rows differ in width");
            for (column_idx, symbol) in row.chars().enumerate() {
                if symbol == ' ' || symbol == '.' {
                    continue;
                }
                let colour = legend
                    .iter()
                    .find(|(legend_symbol, _)| *legend_symbol == symbol)
                    .map(|&(_, colour)| colour)
                    .unwrap_or_else(|| panic!("No colour for {:?} in the legend", symbol));
                board
                    .drop_counter(colour, column_idx + 1)
                    .expect("Layout has an overfull column");
            }
        }

        for (row_idx, row) in rows.iter().rev().enumerate() {
            for (column_idx, symbol) in row.chars().enumerate() {
                let expect_counter = symbol != ' ' && symbol != '.';
                assert_eq!(
                    board.get(row_idx + 1, column_idx + 1).is_some(),
                    expect_counter,
                    "Layout has a counter floating above an empty cell in column {}",
                    column_idx + 1
                );
            }
        }
        board
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Drops a counter into the given column, where it falls to the lowest
    /// empty row.
    ///
    /// On error the board is left unchanged.
    pub fn drop_counter(&mut self, colour: PlayerColour, column: usize) -> Result<(), InvalidMove> {
        if column < 1 || column > self.width {
            return Err(InvalidMove::NoSuchColumn { column });
        }
        let row = self
            .lowest_empty_row(column)
            .ok_or(InvalidMove::ColumnFull { column })?;
        let idx = self.index(row, column);
        self.cells[idx] = Some(colour);
        Ok(())
    }

    /// Is there no space left in any column?
    pub fn is_full(&self) -> bool {
        (1..=self.width).all(|c| self.lowest_empty_row(c).is_none())
    }

    /// The numbers of all columns that can still take a counter, in ascending order.
    ///
    /// This is empty exactly when the board [is full](Self::is_full).
    pub fn columns_with_spare_capacity(&self) -> Vec<usize> {
        (1..=self.width)
            .filter(|&column| self.lowest_empty_row(column).is_some())
            .collect()
    }

    /// Returns the colour of the counter at the given position, if there is one.
    pub fn owner_at(&self, row: usize, column: usize) -> Result<Option<PlayerColour>, OutOfRange> {
        if row < 1 || row > self.height || column < 1 || column > self.width {
            return Err(OutOfRange { row, column });
        }
        Ok(self.get(row, column))
    }

    /// The colours that own at least one counter on the board.
    pub fn all_players_present(&self) -> BTreeSet<PlayerColour> {
        self.cells.iter().flatten().copied().collect()
    }

    // Unchecked lookup for callers that already stay inside the board.
    pub(crate) fn get(&self, row: usize, column: usize) -> Option<PlayerColour> {
        self.cells[self.index(row, column)]
    }

    fn lowest_empty_row(&self, column: usize) -> Option<usize> {
        (1..=self.height).find(|&row| self.get(row, column).is_none())
    }

    fn index(&self, row: usize, column: usize) -> usize {
        (row - 1) * self.width + (column - 1)
    }
}
