//! Terminal host for the game2048 engine.

use clap::Parser;
use game2048_core::{GameSession, RngSource};
use std::io;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod args;
mod command;
mod play;
mod render;

use args::Args;
use render::OutputFormat;

fn main() -> anyhow::Result<()> {
    // Initialize tracing on stderr so stdout carries only game output
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = Args::parse();

    let source = match args.seed {
        Some(seed) => RngSource::seeded(seed),
        None => RngSource::from_entropy(),
    };
    let mut session = GameSession::with_best_score(source, args.best_score);
    info!(seed = ?args.seed, best_score = args.best_score, "Starting game2048");

    let format = if args.json {
        OutputFormat::Json
    } else {
        println!("{}", command::HELP);
        OutputFormat::Text
    };

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    let last = play::run(&mut session, stdin.lock(), &mut stdout, format)?;

    info!(
        score = last.score,
        best_score = last.best_score,
        moves = last.move_count,
        "Session finished"
    );
    Ok(())
}
