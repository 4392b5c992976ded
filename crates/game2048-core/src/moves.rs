//! Directional moves over the whole board.
//!
//! Each direction is reduced to collapsing lines read head-first in the
//! direction of motion:
//! - `Left`: rows as-is
//! - `Right`: rows reversed
//! - `Up`: columns top-to-bottom
//! - `Down`: columns bottom-to-top

use crate::board::{Board, Line, BOARD_SIZE};
use crate::game::GameError;
use crate::line::collapse_line;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Direction tiles slide in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Map a browser key name (`ArrowUp`, ...) to a direction.
    ///
    /// Other keys return `None` so the host can ignore them.
    pub fn from_key(key: &str) -> Option<Direction> {
        match key {
            "ArrowUp" => Some(Direction::Up),
            "ArrowDown" => Some(Direction::Down),
            "ArrowLeft" => Some(Direction::Left),
            "ArrowRight" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Lowercase name of this direction
    pub fn name(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts full names, `wasd` and `hjkl`, ignoring case
impl FromStr for Direction {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" | "w" | "k" => Ok(Direction::Up),
            "down" | "s" | "j" => Ok(Direction::Down),
            "left" | "a" | "h" => Ok(Direction::Left),
            "right" | "d" | "l" => Ok(Direction::Right),
            _ => Err(GameError::InvalidDirection(s.to_string())),
        }
    }
}

impl TryFrom<u8> for Direction {
    type Error = GameError;

    /// 0=Up, 1=Down, 2=Left, 3=Right
    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Direction::ALL
            .get(code as usize)
            .copied()
            .ok_or_else(|| GameError::InvalidDirection(code.to_string()))
    }
}

/// Result of applying one move to a board (before any tile spawns)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// Board after sliding and merging
    pub board: Board,
    /// Points from all merges in this move
    pub score_gained: u32,
    /// Whether any line changed
    pub moved: bool,
    /// Whether a merge created the win tile
    pub won: bool,
}

/// Slide and merge every line of `board` in `direction`.
///
/// Pure: the input is untouched and the same inputs always give the same outcome.
pub fn apply_move(board: &Board, direction: Direction) -> MoveOutcome {
    let mut next = *board;
    let mut score_gained = 0;
    let mut moved = false;
    let mut won = false;

    for index in 0..BOARD_SIZE {
        let original = match direction {
            Direction::Left | Direction::Right => board.row(index),
            Direction::Up | Direction::Down => board.column(index),
        };
        let reversed = matches!(direction, Direction::Right | Direction::Down);

        let collapsed = collapse_line(oriented(original, reversed));
        let line = oriented(collapsed.line, reversed);

        if line != original {
            moved = true;
        }
        score_gained += collapsed.score_gained;
        won |= collapsed.reached_win_tile;

        next = match direction {
            Direction::Left | Direction::Right => next.with_row(index, line),
            Direction::Up | Direction::Down => next.with_column(index, line),
        };
    }

    MoveOutcome {
        board: next,
        score_gained,
        moved,
        won,
    }
}

/// Whether moving in `direction` would change the board
pub fn can_move(board: &Board, direction: Direction) -> bool {
    apply_move(board, direction).moved
}

/// Every direction that changes the board
pub fn legal_directions(board: &Board) -> Vec<Direction> {
    Direction::ALL
        .into_iter()
        .filter(|&d| can_move(board, d))
        .collect()
}

fn oriented(mut line: Line, reversed: bool) -> Line {
    if reversed {
        line.reverse();
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(rows: [Line; BOARD_SIZE]) -> Board {
        Board::from_rows(rows).unwrap()
    }

    #[test]
    fn test_move_left_merges_head_pair() {
        let b = board([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]);
        let outcome = apply_move(&b, Direction::Left);
        assert_eq!(outcome.board.row(0), [4, 0, 0, 0]);
        assert_eq!(outcome.score_gained, 4);
        assert!(outcome.moved);
        assert!(!outcome.won);
    }

    #[test]
    fn test_move_right() {
        let b = board([[2, 0, 2, 2], [0; 4], [0; 4], [0; 4]]);
        let outcome = apply_move(&b, Direction::Right);
        assert_eq!(outcome.board.row(0), [0, 0, 2, 4]);
        assert_eq!(outcome.score_gained, 4);
    }

    #[test]
    fn test_move_up_and_down() {
        let b = board([[2, 0, 0, 0], [2, 0, 0, 0], [4, 0, 0, 0], [0; 4]]);

        let up = apply_move(&b, Direction::Up);
        assert_eq!(up.board.column(0), [4, 4, 0, 0]);

        let down = apply_move(&b, Direction::Down);
        assert_eq!(down.board.column(0), [0, 0, 4, 4]);
        assert_eq!(down.score_gained, 4);
    }

    #[test]
    fn test_no_change_reports_not_moved() {
        let b = board([[2, 4, 0, 0], [0; 4], [0; 4], [0; 4]]);
        let outcome = apply_move(&b, Direction::Left);
        assert!(!outcome.moved);
        assert_eq!(outcome.board, b);
        assert!(can_move(&b, Direction::Right));
        assert!(!can_move(&b, Direction::Up));
    }

    #[test]
    fn test_input_board_untouched() {
        let b = board([[2, 2, 2, 2], [0; 4], [0; 4], [0; 4]]);
        let copy = b;
        let _ = apply_move(&b, Direction::Left);
        assert_eq!(b, copy);
    }

    #[test]
    fn test_win_reported() {
        let b = board([[0; 4], [0; 4], [1024, 0, 0, 0], [1024, 0, 0, 0]]);
        let outcome = apply_move(&b, Direction::Up);
        assert!(outcome.won);
        assert_eq!(outcome.board.get(0, 0), 2048);
    }

    #[test]
    fn test_legal_directions() {
        let b = board([[2, 0, 0, 0], [0; 4], [0; 4], [0; 4]]);
        assert_eq!(
            legal_directions(&b),
            vec![Direction::Down, Direction::Right]
        );
    }

    #[test]
    fn test_parse_direction() {
        assert_eq!("up".parse::<Direction>().unwrap(), Direction::Up);
        assert_eq!("LEFT".parse::<Direction>().unwrap(), Direction::Left);
        assert_eq!("s".parse::<Direction>().unwrap(), Direction::Down);
        assert_eq!("l".parse::<Direction>().unwrap(), Direction::Right);
        assert_eq!(" a ".parse::<Direction>().unwrap(), Direction::Left);
        assert!(matches!(
            "diagonal".parse::<Direction>(),
            Err(GameError::InvalidDirection(_))
        ));
    }

    #[test]
    fn test_direction_codes() {
        assert_eq!(Direction::try_from(3).unwrap(), Direction::Right);
        assert!(Direction::try_from(4).is_err());
    }

    #[test]
    fn test_from_key() {
        assert_eq!(Direction::from_key("ArrowDown"), Some(Direction::Down));
        assert_eq!(Direction::from_key("Enter"), None);
    }
}
