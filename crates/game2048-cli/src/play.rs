//! Read-eval loop driving a session from line-based input.

use crate::command::{Command, CommandError, HELP};
use crate::render::{write_state, OutputFormat};
use anyhow::Result;
use game2048_core::{GameEvent, GameSession, RandomSource, SessionState};
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

/// Play until `quit` or end of input, returning the last snapshot
pub fn run<S, I, W>(
    session: &mut GameSession<S>,
    input: I,
    out: &mut W,
    format: OutputFormat,
) -> Result<SessionState>
where
    S: RandomSource,
    I: BufRead,
    W: Write,
{
    write_state(out, session.state(), format)?;

    for line in input.lines() {
        let line = line?;
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(CommandError::Empty) => continue,
            Err(e) => {
                warn!("Rejected input {:?}", line);
                writeln!(out, "{}", e)?;
                continue;
            }
        };

        match command {
            Command::Move(direction) => {
                if session.state().game_over {
                    debug!("Ignoring {} after game over", direction);
                    continue;
                }
                let events = session.play(direction);
                if events.is_empty() {
                    debug!("Move {} changed nothing", direction);
                    continue;
                }
                for event in &events {
                    log_event(event);
                }
                write_state(out, session.state(), format)?;
            }
            Command::NewGame => {
                let state = session.reset();
                info!(best_score = state.best_score, "New game");
                write_state(out, &state, format)?;
            }
            Command::Show => write_state(out, session.state(), format)?,
            Command::Help => writeln!(out, "{}", HELP)?,
            Command::Quit => break,
        }
    }

    out.flush()?;
    Ok(*session.state())
}

fn log_event(event: &GameEvent) {
    match event {
        GameEvent::Moved {
            direction,
            score_gained,
            score,
            move_count,
        } => debug!(%direction, score_gained, score, move_count, "Moved"),
        GameEvent::TileSpawned { row, col, value } => debug!(row, col, value, "Tile spawned"),
        GameEvent::WinTileReached { move_count } => info!(move_count, "Reached 2048"),
        GameEvent::BestScoreRaised { previous, current } => {
            debug!(previous, current, "Best score raised")
        }
        GameEvent::GameOver { score, max_tile } => info!(score, max_tile, "Game over"),
    }
}
