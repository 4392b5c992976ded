//! Typed commands read from the terminal.

use game2048_core::Direction;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Empty input")]
    Empty,

    #[error("Unknown command {0:?} (try \"help\")")]
    Unknown(String),
}

/// One line of player input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    NewGame,
    Show,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let word = s.trim();
        match word.to_ascii_lowercase().as_str() {
            "" => Err(CommandError::Empty),
            "n" | "new" | "reset" => Ok(Command::NewGame),
            "p" | "show" => Ok(Command::Show),
            "?" | "help" => Ok(Command::Help),
            "q" | "quit" | "exit" => Ok(Command::Quit),
            _ => word
                .parse::<Direction>()
                .map(Command::Move)
                .map_err(|_| CommandError::Unknown(word.to_string())),
        }
    }
}

pub const HELP: &str = "\
Moves:    w/a/s/d, h/j/k/l or up/down/left/right
Commands: new (start over), show (print board), help, quit";
