//! Fork detection for tic-tac-toe.
//!
//! A fork is a move that opens two winning threats at once, so the
//! opponent can only block one of them on their next turn.

use crate::cell::Cell;
use crate::lines::WinLines;
use crate::types::{Board, Player, Square};

/// Checks whether playing `cell` would create a fork for `player`.
///
/// Counts, among the winning lines through `cell`, those with exactly two
/// blank positions and exactly one of `player`'s marks; `cell` itself
/// counts as blank. At least two such lines make a fork.
///
/// Blanks are decremented for any occupied position, whoever owns it.
pub fn is_fork(cell: Cell, player: Player, board: &Board, lines: &WinLines) -> bool {
    let mut fork_lines = 0;
    for line in lines.through(cell) {
        let mut blanks = 3;
        let mut own = 0;
        for &c in line {
            if let Square::Occupied(owner) = board.get(c) {
                blanks -= 1;
                if owner == player {
                    own += 1;
                }
            }
        }
        if blanks == 2 && own == 1 {
            fork_lines += 1;
            if fork_lines == 2 {
                return true;
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mark(board: &mut Board, player: Player, cells: &[Cell]) {
        for &cell in cells {
            board.set(cell, Square::Occupied(player));
        }
    }

    #[test]
    fn test_no_fork_on_empty_board() {
        let lines = WinLines::new();
        let board = Board::new();
        for cell in Cell::ALL {
            assert!(!is_fork(cell, Player::Human, &board, &lines));
        }
    }

    #[test]
    fn test_corner_fork() {
        // Human holds (0,0) and (2,2) around the cpu's center; playing
        // another corner threatens a row and a column at once.
        let lines = WinLines::new();
        let mut board = Board::new();
        mark(&mut board, Player::Human, &[Cell::at(0, 0), Cell::at(2, 2)]);
        mark(&mut board, Player::Cpu, &[Cell::CENTER]);
        assert!(is_fork(Cell::at(2, 0), Player::Human, &board, &lines));
        assert!(is_fork(Cell::at(0, 2), Player::Human, &board, &lines));
    }

    #[test]
    fn test_single_threat_is_not_a_fork() {
        let lines = WinLines::new();
        let mut board = Board::new();
        mark(&mut board, Player::Human, &[Cell::at(0, 0)]);
        // Only the top row would open a second threat; every candidate
        // shares just one live line with the lone mark.
        for cell in Cell::ALL {
            if board.is_empty(cell) {
                assert!(!is_fork(cell, Player::Human, &board, &lines));
            }
        }
    }

    #[test]
    fn test_opponent_mark_kills_the_line() {
        let lines = WinLines::new();
        let mut board = Board::new();
        mark(&mut board, Player::Human, &[Cell::at(0, 0), Cell::at(2, 2)]);
        // Cpu takes the edge that would anchor the bottom-row threat.
        mark(&mut board, Player::Cpu, &[Cell::CENTER, Cell::at(1, 0)]);
        assert!(!is_fork(Cell::at(2, 0), Player::Human, &board, &lines));
        // The other fork corner still works through its row and column.
        assert!(is_fork(Cell::at(0, 2), Player::Human, &board, &lines));
    }

    #[test]
    fn test_own_pair_in_line_is_not_fork_material() {
        // A line with two own marks is a win threat, not a fork line:
        // the counting requires exactly one own mark.
        let lines = WinLines::new();
        let mut board = Board::new();
        mark(&mut board, Player::Human, &[Cell::at(0, 0), Cell::at(1, 0)]);
        assert!(!is_fork(Cell::at(2, 0), Player::Human, &board, &lines));
    }
}
