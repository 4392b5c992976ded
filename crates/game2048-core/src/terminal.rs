//! Detection of boards with no legal move left.

use crate::board::{Board, BOARD_SIZE};

/// Whether no move in any direction can change `board`.
///
/// True only for a full board where no two orthogonal neighbours are equal.
/// Checking the right and lower neighbour of every cell covers each pair once.
pub fn is_terminal(board: &Board) -> bool {
    if !board.is_full() {
        return false;
    }

    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            let value = board.get(row, col);
            if col + 1 < BOARD_SIZE && board.get(row, col + 1) == value {
                return false;
            }
            if row + 1 < BOARD_SIZE && board.get(row + 1, col) == value {
                return false;
            }
        }
    }

    true
}
