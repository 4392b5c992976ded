//! Output of session snapshots.

use anyhow::Result;
use game2048_core::SessionState;
use std::io::Write;

/// How snapshots are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

pub fn write_state<W: Write>(out: &mut W, state: &SessionState, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, state)?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            writeln!(
                out,
                "Score: {}  Best: {}  Moves: {}",
                state.score, state.best_score, state.move_count
            )?;
            write!(out, "{}", state.board)?;
            if state.game_over {
                writeln!(out, "Game over! Type \"new\" to play again.")?;
            } else if state.won {
                writeln!(out, "You reached 2048! Keep going.")?;
            }
        }
    }
    Ok(())
}
