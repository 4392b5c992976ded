//! Events produced by an accepted move.
//!
//! Hosts use these to animate or log a turn without diffing session snapshots.

use crate::moves::Direction;
use serde::{Deserialize, Serialize};

/// Something that happened while applying a move
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Tiles slid (and possibly merged)
    Moved {
        direction: Direction,
        score_gained: u32,
        score: u32,
        move_count: u32,
    },

    /// A new tile appeared after the move
    TileSpawned { row: usize, col: usize, value: u32 },

    /// The win tile was created for the first time this session
    WinTileReached { move_count: u32 },

    /// The best score went up
    BestScoreRaised { previous: u32, current: u32 },

    /// No legal move remains
    GameOver { score: u32, max_tile: u32 },
}
