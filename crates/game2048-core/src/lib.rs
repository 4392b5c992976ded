//! game2048 - rule engine for the 2048 sliding-tile puzzle
//!
//! This crate provides the core game logic, including:
//! - The 4x4 board and its tile invariants
//! - Line collapse with once-per-move merging
//! - Directional moves, random tile spawning and terminal-state detection
//! - A game session tracking score, best score, moves and win/loss flags
//!
//! # Architecture
//!
//! Everything except the spawner is pure and deterministic. The spawner
//! draws from an injected [`RandomSource`], so seeded or scripted sources
//! make whole sessions reproducible. The engine can be compiled to:
//! - Native Rust for terminal or server hosts
//! - WebAssembly for a browser front end (`wasm` feature)
//!
//! # Modules
//!
//! - [`board`]: Grid representation
//! - [`line`]: Single-line collapse
//! - [`moves`]: Directions and whole-board moves
//! - [`spawn`]: Random tile placement
//! - [`terminal`]: Game-over detection
//! - [`game`]: Session state machine

pub mod board;
pub mod events;
pub mod game;
pub mod line;
pub mod moves;
pub mod spawn;
pub mod terminal;
#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export commonly used types
pub use board::{Board, Line, BOARD_SIZE, MAX_TILE, WIN_TILE};
pub use events::GameEvent;
pub use game::{GameError, GameSession, SessionPhase, SessionState};
pub use line::{collapse_line, LineCollapse};
pub use moves::{apply_move, can_move, legal_directions, Direction, MoveOutcome};
pub use spawn::{spawn_tile, spawn_tile_at, RandomSource, RngSource, SequenceSource, SpawnedTile};
pub use terminal::is_terminal;
