//! Board coordinates for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// A cell on the 3×3 board, addressed by `(col, row)` with both in `0..3`.
///
/// Cells compare by value. The canonical scan order of the board is
/// row-major with the column varying fastest; see [`Cell::ALL`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[display("({col}, {row})")]
pub struct Cell {
    col: u8,
    row: u8,
}

impl Cell {
    /// The center cell `(1, 1)`.
    pub const CENTER: Cell = Cell::at(1, 1);

    /// The four corners, in the fixed order the engine scans them.
    ///
    /// This order is observable: the opposite-corner rule targets the
    /// opposite of the *last* human-occupied corner in this sequence, and
    /// the empty-corner rule takes the *first* empty one.
    pub const CORNERS: [Cell; 4] = [
        Cell::at(0, 0),
        Cell::at(0, 2),
        Cell::at(2, 2),
        Cell::at(2, 0),
    ];

    /// All nine cells in canonical scan order.
    pub const ALL: [Cell; 9] = [
        Cell::at(0, 0),
        Cell::at(1, 0),
        Cell::at(2, 0),
        Cell::at(0, 1),
        Cell::at(1, 1),
        Cell::at(2, 1),
        Cell::at(0, 2),
        Cell::at(1, 2),
        Cell::at(2, 2),
    ];

    /// Creates a cell from coordinates, or `None` if either is out of range.
    pub fn new(col: u8, row: u8) -> Option<Cell> {
        if col < 3 && row < 3 {
            Some(Cell { col, row })
        } else {
            None
        }
    }

    /// Creates a cell from in-range coordinates.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is 3 or more. Intended for the fixed
    /// tables above; use [`Cell::new`] for runtime input.
    pub const fn at(col: u8, row: u8) -> Cell {
        assert!(col < 3 && row < 3);
        Cell { col, row }
    }

    /// Creates a cell from a flat board index (0-8).
    pub fn from_index(index: usize) -> Option<Cell> {
        if index < 9 {
            Some(Cell {
                col: (index % 3) as u8,
                row: (index / 3) as u8,
            })
        } else {
            None
        }
    }

    /// The column (0-2).
    pub const fn col(self) -> u8 {
        self.col
    }

    /// The row (0-2).
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Converts to a flat board index (0-8), row-major.
    pub const fn index(self) -> usize {
        self.row as usize * 3 + self.col as usize
    }

    /// The point-symmetric cell across the center.
    pub const fn opposite(self) -> Cell {
        Cell {
            col: 2 - self.col,
            row: 2 - self.row,
        }
    }

    /// Whether this cell is one of the four corners.
    pub fn is_corner(self) -> bool {
        Self::CORNERS.contains(&self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for (i, cell) in Cell::ALL.iter().enumerate() {
            assert_eq!(cell.index(), i);
            assert_eq!(Cell::from_index(i), Some(*cell));
        }
        assert_eq!(Cell::from_index(9), None);
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert_eq!(Cell::new(3, 0), None);
        assert_eq!(Cell::new(0, 3), None);
        assert!(Cell::new(2, 2).is_some());
    }

    #[test]
    fn test_opposite_corners() {
        assert_eq!(Cell::at(0, 0).opposite(), Cell::at(2, 2));
        assert_eq!(Cell::at(0, 2).opposite(), Cell::at(2, 0));
        assert_eq!(Cell::CENTER.opposite(), Cell::CENTER);
    }

    #[test]
    fn test_scan_order_is_column_fastest() {
        assert_eq!(Cell::ALL[0], Cell::at(0, 0));
        assert_eq!(Cell::ALL[1], Cell::at(1, 0));
        assert_eq!(Cell::ALL[3], Cell::at(0, 1));
        assert_eq!(Cell::ALL[8], Cell::at(2, 2));
    }

    #[test]
    fn test_corners() {
        for corner in Cell::CORNERS {
            assert!(corner.is_corner());
            assert!(corner.opposite().is_corner());
        }
        assert!(!Cell::CENTER.is_corner());
        assert!(!Cell::at(1, 0).is_corner());
    }
}
