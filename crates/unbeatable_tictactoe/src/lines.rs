//! The eight winning lines and the per-cell line lookup.

use crate::cell::Cell;

/// A winning line: three distinct cells that win the game when one side
/// marks them all.
pub type Line = [Cell; 3];

/// The eight winning lines of the 3×3 board: three rows, three columns,
/// two diagonals.
pub const LINES: [Line; 8] = [
    // Rows
    [Cell::at(0, 0), Cell::at(1, 0), Cell::at(2, 0)],
    [Cell::at(0, 1), Cell::at(1, 1), Cell::at(2, 1)],
    [Cell::at(0, 2), Cell::at(1, 2), Cell::at(2, 2)],
    // Columns
    [Cell::at(0, 0), Cell::at(0, 1), Cell::at(0, 2)],
    [Cell::at(1, 0), Cell::at(1, 1), Cell::at(1, 2)],
    [Cell::at(2, 0), Cell::at(2, 1), Cell::at(2, 2)],
    // Diagonals
    [Cell::at(0, 0), Cell::at(1, 1), Cell::at(2, 2)],
    [Cell::at(0, 2), Cell::at(1, 1), Cell::at(2, 0)],
];

/// Lookup from each cell to the winning lines passing through it.
///
/// Built once at engine construction and never mutated afterwards. Every
/// cell belongs to 2-4 lines: the center to 4, corners to 3, edges to 2.
#[derive(Debug, Clone)]
pub struct WinLines {
    through: [Vec<Line>; 9],
}

impl WinLines {
    /// Builds the lookup from the fixed [`LINES`] table.
    pub fn new() -> Self {
        let mut through: [Vec<Line>; 9] = Default::default();
        for line in LINES {
            for cell in line {
                through[cell.index()].push(line);
            }
        }
        Self { through }
    }

    /// The winning lines passing through `cell`.
    pub fn through(&self, cell: Cell) -> &[Line] {
        &self.through[cell.index()]
    }
}

impl Default for WinLines {
    fn default() -> Self {
        Self::new()
    }
}
