use clap::Parser;

/// Play 2048 in the terminal.
#[derive(Parser, Debug)]
#[command(name = "game2048", version)]
pub struct Args {
    /// Seed for a reproducible session. Random when omitted.
    #[arg(long, env = "GAME2048_SEED")]
    pub seed: Option<u64>,
    /// Best score carried over from earlier sessions.
    #[arg(long, env = "GAME2048_BEST_SCORE", default_value_t = 0)]
    pub best_score: u32,
    /// Print state snapshots as JSON lines instead of a text grid.
    #[arg(long)]
    pub json: bool,
}
