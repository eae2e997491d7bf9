//! Core domain types for tic-tac-toe.

use crate::cell::Cell;
use serde::{Deserialize, Serialize};

/// A side in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Player {
    /// The human player (moves first, marks `X`).
    Human,
    /// The automated player (marks `O`).
    Cpu,
}

impl Player {
    /// Returns the opposing side.
    pub fn opponent(self) -> Self {
        match self {
            Player::Human => Player::Cpu,
            Player::Cpu => Player::Human,
        }
    }

    /// The mark drawn for this side.
    pub fn mark(self) -> char {
        match self {
            Player::Human => 'X',
            Player::Cpu => 'O',
        }
    }
}

/// The state of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// No mark placed.
    Empty,
    /// Marked by a player. Marks are never removed or overwritten.
    Occupied(Player),
}

/// The 3×3 grid of squares.
///
/// Every cell is always present; the grid starts all-[`Square::Empty`] and
/// is only ever mutated by placing a mark into an empty cell. `Board` is a
/// plain value, so hypothetical positions during look-ahead are ordinary
/// `clone()`s that never touch the live grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Squares in canonical scan order (see [`Cell::ALL`]).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given cell.
    pub fn get(&self, cell: Cell) -> Square {
        self.squares[cell.index()]
    }

    /// Sets the square at the given cell.
    pub fn set(&mut self, cell: Cell, square: Square) {
        self.squares[cell.index()] = square;
    }

    /// Checks whether a cell carries no mark.
    pub fn is_empty(&self, cell: Cell) -> bool {
        self.get(cell) == Square::Empty
    }

    /// All empty cells, in canonical scan order.
    pub fn empty_cells(&self) -> Vec<Cell> {
        Cell::ALL
            .iter()
            .copied()
            .filter(|cell| self.is_empty(*cell))
            .collect()
    }

    /// Checks whether every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Formats the board as a human-readable string.
    ///
    /// Occupied cells show the player's mark; empty cells show the square
    /// number (1-9) a host accepts as input.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let cell = Cell::at(col, row);
                let symbol = match self.get(cell) {
                    Square::Empty => char::from_digit(cell.index() as u32 + 1, 10)
                        .unwrap_or('?'),
                    Square::Occupied(player) => player.mark(),
                };
                result.push(symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
