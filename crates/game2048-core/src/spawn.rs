//! Random tile spawning.
//!
//! The spawner never calls a global RNG. Callers hand it a `RandomSource`,
//! which keeps every other part of the engine deterministic.

use crate::board::Board;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

/// Chance that a spawned tile is a 2 rather than a 4
pub const SPAWN_TWO_PROBABILITY: f64 = 0.9;

/// Source of uniform draws in `[0, 1)`
pub trait RandomSource {
    /// Next draw in `[0, 1)`
    fn next_unit(&mut self) -> f64;
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

/// A `RandomSource` backed by any `rand` generator
#[derive(Debug, Clone)]
pub struct RngSource<R = StdRng> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    /// Wrap an existing generator
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<StdRng> {
    /// Seed from OS entropy
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Deterministic source for replays and tests
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Replays a fixed list of draws, then keeps returning `0.0`
#[derive(Debug, Clone, Default)]
pub struct SequenceSource {
    draws: VecDeque<f64>,
}

impl SequenceSource {
    /// Source that returns `draws` in order
    pub fn new(draws: impl IntoIterator<Item = f64>) -> Self {
        Self {
            draws: draws.into_iter().collect(),
        }
    }

    /// Draws not yet consumed
    pub fn remaining(&self) -> usize {
        self.draws.len()
    }
}

impl RandomSource for SequenceSource {
    fn next_unit(&mut self) -> f64 {
        self.draws.pop_front().unwrap_or(0.0).clamp(0.0, 1.0 - f64::EPSILON)
    }
}

/// Where a tile was placed by `spawn_tile_at`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnedTile {
    pub row: usize,
    pub col: usize,
    pub value: u32,
}

/// Place a 2 (90%) or 4 (10%) in a uniformly chosen empty cell.
///
/// A full board comes back unchanged.
pub fn spawn_tile<S: RandomSource + ?Sized>(board: &Board, source: &mut S) -> Board {
    spawn_tile_at(board, source).0
}

/// Like `spawn_tile`, also reporting the placed tile.
///
/// Draws two values: the first picks the cell, the second the tile value.
/// Nothing is drawn when the board is full.
pub fn spawn_tile_at<S: RandomSource + ?Sized>(
    board: &Board,
    source: &mut S,
) -> (Board, Option<SpawnedTile>) {
    let empty = board.empty_cells();
    if empty.is_empty() {
        return (*board, None);
    }

    let index = ((source.next_unit() * empty.len() as f64) as usize).min(empty.len() - 1);
    let (row, col) = empty[index];
    let value = if source.next_unit() < SPAWN_TWO_PROBABILITY {
        2
    } else {
        4
    };

    (
        board.with_cell(row, col, value),
        Some(SpawnedTile { row, col, value }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BOARD_SIZE;

    #[test]
    fn test_spawn_on_empty_board_places_one_tile() {
        let mut source = RngSource::seeded(7);
        let board = spawn_tile(&Board::empty(), &mut source);
        assert_eq!(board.tile_count(), 1);
        assert!(matches!(board.max_tile(), 2 | 4));
    }

    #[test]
    fn test_spawn_uses_draws_for_cell_and_value() {
        // 0.99 picks the last empty cell, 0.95 picks a 4
        let mut source = SequenceSource::new([0.99, 0.95]);
        let (board, spawned) = spawn_tile_at(&Board::empty(), &mut source);
        assert_eq!(
            spawned,
            Some(SpawnedTile {
                row: BOARD_SIZE - 1,
                col: BOARD_SIZE - 1,
                value: 4
            })
        );
        assert_eq!(board.get(3, 3), 4);
        assert_eq!(source.remaining(), 0);
    }

    #[test]
    fn test_spawn_only_targets_empty_cells() {
        let board = Board::from_rows([[2, 4, 8, 16], [32, 64, 128, 256], [2, 4, 8, 16], [32, 64, 128, 0]])
            .unwrap();
        let mut source = SequenceSource::new([0.0, 0.0]);
        let next = spawn_tile(&board, &mut source);
        assert_eq!(next.get(3, 3), 2);
        assert!(next.is_full());
    }

    #[test]
    fn test_full_board_unchanged_and_no_draws() {
        let board = Board::from_rows([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]).unwrap();
        let mut source = SequenceSource::new([0.5, 0.5]);
        let (next, spawned) = spawn_tile_at(&board, &mut source);
        assert_eq!(next, board);
        assert!(spawned.is_none());
        assert_eq!(source.remaining(), 2);
    }

    #[test]
    fn test_input_board_not_mutated() {
        let board = Board::empty();
        let mut source = RngSource::seeded(1);
        let _ = spawn_tile(&board, &mut source);
        assert_eq!(board, Board::empty());
    }

    #[test]
    fn test_value_distribution_mostly_twos() {
        let mut source = RngSource::seeded(2048);
        let fours = (0..2000)
            .filter(|_| spawn_tile(&Board::empty(), &mut source).max_tile() == 4)
            .count();
        // Expect ~200; wide bounds keep this stable
        assert!((100..320).contains(&fours), "got {} fours", fours);
    }

    #[test]
    fn test_cell_choice_is_uniform() {
        // Five empty cells spread across the board
        let board = Board::from_rows([[0, 2, 4, 8], [16, 0, 32, 64], [2, 4, 0, 8], [0, 16, 32, 0]])
            .unwrap();
        let empty = board.empty_cells();
        let k = empty.len();
        assert_eq!(k, 5);

        let trials = 10_000;
        let mut counts = vec![0usize; k];
        let mut source = RngSource::seeded(99);
        for _ in 0..trials {
            let (_, spawned) = spawn_tile_at(&board, &mut source);
            let tile = spawned.unwrap();
            let index = empty
                .iter()
                .position(|&cell| cell == (tile.row, tile.col))
                .unwrap();
            counts[index] += 1;
        }

        // Expect 2000 each; +/-15% is far outside sampling noise
        let expected = trials / k;
        for (index, &count) in counts.iter().enumerate() {
            assert!(
                count > expected * 85 / 100 && count < expected * 115 / 100,
                "cell {} picked {} times",
                index,
                count
            );
        }
    }

    #[test]
    fn test_draw_maps_to_matching_empty_cell() {
        let board = Board::from_rows([[2, 0, 4, 0], [0, 8, 8, 8], [8, 8, 0, 8], [8, 8, 8, 8]])
            .unwrap();
        let empty = board.empty_cells();
        let k = empty.len();
        for (i, &(row, col)) in empty.iter().enumerate() {
            let draw = (i as f64 + 0.5) / k as f64;
            let mut source = SequenceSource::new([draw, 0.0]);
            let (_, spawned) = spawn_tile_at(&board, &mut source);
            assert_eq!(spawned, Some(SpawnedTile { row, col, value: 2 }));
        }
    }

    #[test]
    fn test_seeded_sources_repeat() {
        let mut a = RngSource::seeded(42);
        let mut b = RngSource::seeded(42);
        for _ in 0..8 {
            assert_eq!(a.next_unit(), b.next_unit());
        }
    }
}
