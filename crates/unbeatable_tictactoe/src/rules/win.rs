//! Win detection for tic-tac-toe.

use crate::cell::Cell;
use crate::lines::{LINES, WinLines};
use crate::types::{Board, Player, Square};
use tracing::instrument;

/// Checks whether playing `cell` would complete a line for `player`.
///
/// True iff `cell` is still empty on `board` and some winning line through
/// it already carries exactly two of `player`'s marks.
pub fn completes_line(cell: Cell, player: Player, board: &Board, lines: &WinLines) -> bool {
    if !board.is_empty(cell) {
        return false;
    }
    lines.through(cell).iter().any(|line| {
        line.iter()
            .filter(|&&c| board.get(c) == Square::Occupied(player))
            .count()
            == 2
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if that player has three in a line, `None`
/// otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    for [a, b, c] in LINES {
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            return match sq {
                Square::Occupied(player) => Some(player),
                Square::Empty => None,
            };
        }
    }
    None
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
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_winner_row() {
        let mut board = Board::new();
        mark(
            &mut board,
            Player::Human,
            &[Cell::at(0, 0), Cell::at(1, 0), Cell::at(2, 0)],
        );
        assert_eq!(check_winner(&board), Some(Player::Human));
    }

    #[test]
    fn test_winner_diagonal() {
        let mut board = Board::new();
        mark(
            &mut board,
            Player::Cpu,
            &[Cell::at(0, 2), Cell::CENTER, Cell::at(2, 0)],
        );
        assert_eq!(check_winner(&board), Some(Player::Cpu));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let mut board = Board::new();
        mark(&mut board, Player::Human, &[Cell::at(0, 0), Cell::at(1, 0)]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_completes_line_on_open_pair() {
        let lines = WinLines::new();
        let mut board = Board::new();
        mark(&mut board, Player::Cpu, &[Cell::at(0, 1), Cell::at(1, 1)]);
        assert!(completes_line(Cell::at(2, 1), Player::Cpu, &board, &lines));
        assert!(!completes_line(Cell::at(2, 1), Player::Human, &board, &lines));
    }

    #[test]
    fn test_completes_line_requires_empty_target() {
        let lines = WinLines::new();
        let mut board = Board::new();
        mark(&mut board, Player::Cpu, &[Cell::at(0, 1), Cell::at(1, 1)]);
        board.set(Cell::at(2, 1), Square::Occupied(Player::Human));
        assert!(!completes_line(Cell::at(2, 1), Player::Cpu, &board, &lines));
    }

    #[test]
    fn test_completes_line_ignores_mixed_lines() {
        let lines = WinLines::new();
        let mut board = Board::new();
        mark(&mut board, Player::Cpu, &[Cell::at(0, 0)]);
        mark(&mut board, Player::Human, &[Cell::at(1, 0)]);
        assert!(!completes_line(Cell::at(2, 0), Player::Cpu, &board, &lines));
    }
}
