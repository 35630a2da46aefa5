//! tictactoe - console tic-tac-toe and a tree-depth helper.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use tictactoe_console::{Cli, Command, Config, SessionError, setup, stdio};
use tracing::{error, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::default(),
    }
    .with_seed(cli.seed);

    init_tracing(cli.log_level(config.log_level()));

    match cli.command() {
        Command::Play => run_game(&config),
        Command::TreeDepth { values } => run_tree_depth(&values),
    }
}

/// Logs go to stderr so they never mix with the game on stdout.
fn init_tracing(default_level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Seat the players and play one game.
#[instrument(skip(config))]
fn run_game(config: &Config) -> Result<()> {
    let mut console = stdio();
    let mut game = setup::configure_game(&mut console, config).context("Game setup failed")?;

    match game.run(&mut console) {
        Ok(outcome) => {
            info!(%outcome, moves = game.moves_played(), "Session finished");
            Ok(())
        }
        Err(err) => {
            error!(error = %err, "Game ended abnormally");
            if matches!(err, SessionError::NoLegalMove { .. }) {
                console.say("No move can be made.")?;
            }
            Err(err).context("Game session ended abnormally")
        }
    }
}

/// Print the depth of a level-order tree listing.
#[instrument]
fn run_tree_depth(values: &str) -> Result<()> {
    let values = tree_depth::parse_level_order(values).context("Invalid tree listing")?;
    let tree = tree_depth::from_level_order(values);
    println!("{}", tree_depth::max_depth(tree.as_deref()));
    Ok(())
}
