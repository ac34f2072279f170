//! Errors surfaced by the command-line front end.
//!
//! The scanning crates never fail; every variant here is about turning
//! arguments and files into a search.

use std::io;
use std::path::PathBuf;

/// Argument or input problem that stops `sift` before it can search.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("missing command")]
    MissingCommand,

    #[error("unknown command '{0}'")]
    UnknownCommand(String),

    #[error("missing {what} for '{command}'")]
    MissingArgument {
        command: &'static str,
        what: &'static str,
    },

    #[error("{what} for '{command}' must contain at least one character")]
    EmptyDelimiters {
        command: &'static str,
        what: &'static str,
    },

    #[error("invalid value '{value}' for --{option}: expected a non-negative integer")]
    InvalidNumber { option: &'static str, value: String },

    #[error("unknown option '{0}'")]
    UnknownOption(String),

    #[error("unexpected argument '{0}'")]
    UnexpectedArgument(String),

    #[error("cannot read {}: {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot read standard input: {0}")]
    Stdin(#[source] io::Error),
}
