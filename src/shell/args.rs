//! Process arguments.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

use super::command::Command;

/// Build a binary search tree and compare search strategies on it
#[derive(Parser, Debug)]
#[command(name = "bst-explorer")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Values inserted before anything else, comma separated
    #[arg(
        short,
        long,
        env = "BST_VALUES",
        value_delimiter = ',',
        allow_hyphen_values = true
    )]
    pub values: Vec<i32>,

    /// Increase log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub debug: u8,

    /// File to keep the shell's line history in
    #[arg(long, env = "BST_HISTORY")]
    pub history: Option<PathBuf>,

    /// Run a single command and exit instead of starting the shell
    #[command(subcommand)]
    pub command: Option<Command>,
}
