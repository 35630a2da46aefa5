//! Command-line interface for the tictactoe binary.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Tree listing used when `tree-depth` gets no values.
pub const SAMPLE_TREE: &str = "3,9,20,null,null,15,7";

/// Console tic-tac-toe against a friend or a random computer player
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Console tic-tac-toe against a friend or the computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// TOML configuration file (nothing is read unless given)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Seed for the computer player, for reproducible games
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play an interactive game on the console
    Play,

    /// Print the maximum depth of a binary tree
    TreeDepth {
        /// Level-order values, `null` for a missing child
        #[arg(default_value = SAMPLE_TREE)]
        values: String,
    },
}

impl Cli {
    /// The chosen command, `play` when none was given.
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Play)
    }

    /// Log filter implied by `-v` flags, or `default` without any.
    pub fn log_level<'a>(&self, default: &'a str) -> &'a str {
        match self.verbose {
            0 => default,
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
