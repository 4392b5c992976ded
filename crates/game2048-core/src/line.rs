//! Collapse of a single row or column toward its head.

use crate::board::{Line, BOARD_SIZE, WIN_TILE};
use serde::{Deserialize, Serialize};

/// Result of collapsing one line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineCollapse {
    /// The collapsed line, tiles packed toward index 0
    pub line: Line,
    /// Sum of the tiles created by merges
    pub score_gained: u32,
    /// Whether a merge created the win tile
    pub reached_win_tile: bool,
}

/// Slide every tile toward index 0, merging equal neighbours.
///
/// A single pass merges the earliest equal pair first and then skips past
/// the merged tile, so a tile merges at most once: `[2, 2, 2, 2]` becomes
/// `[4, 4, 0, 0]`, never `[8, 0, 0, 0]`.
pub fn collapse_line(line: Line) -> LineCollapse {
    let compacted: Vec<u32> = line.into_iter().filter(|&v| v != 0).collect();

    let mut out = [0; BOARD_SIZE];
    let mut len = 0;
    let mut score_gained = 0;
    let mut reached_win_tile = false;

    let mut i = 0;
    while i < compacted.len() {
        let value = compacted[i];
        if compacted.get(i + 1) == Some(&value) {
            let merged = value * 2;
            out[len] = merged;
            score_gained += merged;
            if merged == WIN_TILE {
                reached_win_tile = true;
            }
            i += 2;
        } else {
            out[len] = value;
            i += 1;
        }
        len += 1;
    }

    LineCollapse {
        line: out,
        score_gained,
        reached_win_tile,
    }
}
