use std::io::Write;

use bst_explorer::BinaryTree;
use clap::{Parser, Subcommand};
use tracing::info;

use super::error::ShellResult;
use super::output;

/// Something the user can ask of the tree.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Insert one or more values
    Insert {
        #[arg(required = true, allow_hyphen_values = true)]
        values: Vec<i32>,
    },
    /// Show height, degree, order and nodes per level
    Props,
    /// Draw the tree
    Show,
    /// Print the preorder, inorder and postorder traversals
    Traverse,
    /// Search for a value with every strategy and rank them
    Search {
        #[arg(allow_hyphen_values = true)]
        value: i32,
    },
    /// Leave the shell
    #[command(alias = "quit")]
    Exit,
}

/// A single line typed at the shell prompt.
#[derive(Parser, Debug)]
#[command(name = "", no_binary_name = true, disable_version_flag = true)]
pub struct Line {
    #[command(subcommand)]
    pub command: Command,
}

impl Line {
    /// Parses a prompt line. Bad input comes back as a clap error meant to be
    /// shown to the user before prompting again.
    pub fn read(line: &str) -> Result<Command, clap::Error> {
        Self::try_parse_from(line.split_whitespace()).map(|line| line.command)
    }
}

/// Whether the shell should keep reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Runs `command` against `tree`, writing whatever it reports to `out`.
pub fn execute<W: Write>(
    command: &Command,
    tree: &mut BinaryTree,
    out: &mut W,
) -> ShellResult<Flow> {
    match command {
        Command::Insert { values } => {
            for &value in values {
                let inserted = tree.insert(value);
                output::write_insert(out, value, inserted)?;
            }
        }
        Command::Props => output::write_properties(out, tree)?,
        Command::Show => output::write_rendering(out, tree)?,
        Command::Traverse => output::write_traversals(out, tree)?,
        Command::Search { value } => {
            let comparison = tree.compare_searches(*value);
            output::write_search(out, *value, &comparison)?;
        }
        Command::Exit => {
            info!("exit requested");
            return Ok(Flow::Exit);
        }
    }

    Ok(Flow::Continue)
}
