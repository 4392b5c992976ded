//! Game session state machine.
//!
//! This module contains the `GameSession` struct that ties the move engine,
//! spawner and terminal detector together into one turn-by-turn session.

use crate::board::Board;
use crate::events::GameEvent;
use crate::moves::{apply_move, Direction};
use crate::spawn::{spawn_tile, spawn_tile_at, RandomSource, RngSource};
use crate::terminal::is_terminal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors surfaced to callers of the engine
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum GameError {
    #[error("Invalid direction: {0:?}")]
    InvalidDirection(String),

    #[error("Invalid tile {value} at row {row}, column {col}")]
    InvalidTile { row: usize, col: usize, value: u32 },
}

/// Coarse session phase derived from the flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Moves are accepted, win tile not reached yet
    Active,
    /// Win tile reached, play continues
    Won,
    /// No legal move remains
    GameOver,
}

/// Read-only snapshot of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    /// Current board
    pub board: Board,
    /// Score accumulated this game
    pub score: u32,
    /// Highest score seen by this session, across resets
    pub best_score: u32,
    /// No legal move remains
    pub game_over: bool,
    /// Win tile was created at some point this game (sticky)
    pub won: bool,
    /// Accepted moves this game
    pub move_count: u32,
}

impl SessionState {
    pub fn phase(&self) -> SessionPhase {
        if self.game_over {
            SessionPhase::GameOver
        } else if self.won {
            SessionPhase::Won
        } else {
            SessionPhase::Active
        }
    }
}

/// A single-player session.
///
/// Moves take `&mut self`, so each session applies one move at a time.
#[derive(Debug, Clone)]
pub struct GameSession<R = RngSource> {
    state: SessionState,
    source: R,
}

impl GameSession<RngSource> {
    /// Session with an entropy-seeded source
    pub fn random() -> Self {
        Self::new(RngSource::from_entropy())
    }

    /// Deterministic session (same seed, same moves, same games)
    pub fn seeded(seed: u64) -> Self {
        Self::new(RngSource::seeded(seed))
    }
}

impl<R: RandomSource> GameSession<R> {
    /// Start a new game with two spawned tiles
    pub fn new(source: R) -> Self {
        Self::with_best_score(source, 0)
    }

    /// Start a new game carrying a best score loaded by the host
    pub fn with_best_score(source: R, best_score: u32) -> Self {
        let mut session = Self {
            state: SessionState {
                board: Board::empty(),
                score: 0,
                best_score,
                game_over: false,
                won: false,
                move_count: 0,
            },
            source,
        };
        session.reset();
        session
    }

    /// Continue from a snapshot saved by the host.
    ///
    /// `game_over` is recomputed from the board and `best_score` is raised to
    /// at least `score`.
    pub fn resume(source: R, state: SessionState) -> Self {
        Self {
            state: SessionState {
                game_over: is_terminal(&state.board),
                best_score: state.best_score.max(state.score),
                ..state
            },
            source,
        }
    }

    /// Current snapshot
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Start over. The best score is kept.
    pub fn reset(&mut self) -> SessionState {
        let board = spawn_tile(&Board::empty(), &mut self.source);
        let board = spawn_tile(&board, &mut self.source);

        self.state = SessionState {
            board,
            score: 0,
            best_score: self.state.best_score,
            game_over: is_terminal(&board),
            won: false,
            move_count: 0,
        };
        self.state
    }

    /// Apply a move and return the new snapshot.
    ///
    /// Moves after game over and moves that change nothing leave the state as is.
    pub fn make_move(&mut self, direction: Direction) -> SessionState {
        self.play(direction);
        self.state
    }

    /// Parse an external direction value and apply it.
    ///
    /// Unknown values fail before any state is touched.
    pub fn move_named(&mut self, direction: &str) -> Result<SessionState, GameError> {
        let direction: Direction = direction.parse()?;
        Ok(self.make_move(direction))
    }

    /// Apply a move and report what happened. No events means the move was ignored.
    pub fn play(&mut self, direction: Direction) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if self.state.game_over {
            return events;
        }

        let outcome = apply_move(&self.state.board, direction);
        if !outcome.moved {
            return events;
        }

        let (board, spawned) = spawn_tile_at(&outcome.board, &mut self.source);

        self.state.board = board;
        self.state.score = self.state.score.saturating_add(outcome.score_gained);
        self.state.move_count = self.state.move_count.saturating_add(1);

        events.push(GameEvent::Moved {
            direction,
            score_gained: outcome.score_gained,
            score: self.state.score,
            move_count: self.state.move_count,
        });
        if let Some(tile) = spawned {
            events.push(GameEvent::TileSpawned {
                row: tile.row,
                col: tile.col,
                value: tile.value,
            });
        }

        if outcome.won && !self.state.won {
            self.state.won = true;
            events.push(GameEvent::WinTileReached {
                move_count: self.state.move_count,
            });
        }

        if self.state.score > self.state.best_score {
            events.push(GameEvent::BestScoreRaised {
                previous: self.state.best_score,
                current: self.state.score,
            });
            self.state.best_score = self.state.score;
        }

        self.state.game_over = is_terminal(&board);
        if self.state.game_over {
            events.push(GameEvent::GameOver {
                score: self.state.score,
                max_tile: board.max_tile(),
            });
        }

        events
    }
}
