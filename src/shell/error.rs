//! Shell-level errors. The tree itself never fails, so everything here comes
//! from talking to the terminal.

use std::io;

use rustyline::error::ReadlineError;
use thiserror::Error;

/// Errors that end a shell session.
#[derive(Error, Debug)]
pub enum ShellError {
    #[error("failed to read line: {0}")]
    Readline(#[from] ReadlineError),

    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

/// Result type for shell operations.
pub type ShellResult<T> = Result<T, ShellError>;
