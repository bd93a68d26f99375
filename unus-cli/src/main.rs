mod console;
mod render;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing_subscriber::EnvFilter;
use unus::unus::Unus;

use crate::console::ConsoleInteraction;

#[derive(Parser)]
#[command(name = "unus")]
#[command(about = "Play Unus at the terminal, passing the keyboard around the table")]
struct Args {
    /// Number of players at the table
    #[arg(default_value_t = 2)]
    players: usize,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    // Game text owns stdout, so logs go to stderr.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();
    let mut game = Unus::with_player_count(args.players)?;

    let stdin = std::io::stdin();
    let mut io = ConsoleInteraction::new(stdin.lock(), std::io::stdout());
    let winner = game.play(&mut io)?;
    tracing::info!(winner, "finished");

    Ok(())
}
