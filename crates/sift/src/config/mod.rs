//! Command-line configuration.
//!
//! Arguments are parsed by hand: a command name, its positional
//! arguments, an optional input path, and `--name[=value]` options in any
//! position after the command.

use std::path::PathBuf;

use sift_fmt::Indenter;
use sift_scan::{DelimiterSet, Policy, Position};

use crate::CliError;

/// What to do with the input text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Run a scanner policy and report its matches.
    Search(Policy),
    /// Wrap the input in a `{ ... }` block.
    Block,
    /// Strip indentation shared by every line of the input.
    Dedent,
}

/// Where the input text comes from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Input {
    #[default]
    Stdin,
    File(PathBuf),
}

/// Settings shared by all commands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    /// Resume position: searches start strictly after this byte offset.
    pub after: Option<Position>,
    /// Report every successive match instead of only the first.
    pub all: bool,
    /// Indentation levels applied by `block`.
    pub indent: usize,
    /// Indent unit used by `block` and `dedent`.
    pub indenter: Indenter,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            after: None,
            all: false,
            indent: 1,
            indenter: Indenter::default(),
        }
    }
}

/// A fully parsed invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub command: Command,
    pub input: Input,
    pub options: Options,
}

impl Config {
    /// Parse the arguments following the program name.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self, CliError> {
        let Some((name, rest)) = args.split_first() else {
            return Err(CliError::MissingCommand);
        };

        let mut options = Options::default();
        let mut positional = Vec::new();
        for arg in rest {
            let arg = arg.as_ref();
            if let Some(value) = arg.strip_prefix("--after=") {
                options.after = Some(Position::new(parse_number("after", value)?));
            } else if arg == "--all" {
                options.all = true;
            } else if let Some(value) = arg.strip_prefix("--indent=") {
                options.indent = parse_number("indent", value)?;
            } else if let Some(value) = arg.strip_prefix("--indent-unit=") {
                options.indenter = Indenter::new(value);
            } else if arg.starts_with("--") {
                return Err(CliError::UnknownOption(arg.to_owned()));
            } else {
                positional.push(arg);
            }
        }

        let mut positional = positional.into_iter();
        let command = match name.as_ref() {
            "word" => {
                let word = next_arg(&mut positional, "word", "word")?;
                Command::Search(Policy::word(word))
            }
            "between" => {
                let openers = next_set(&mut positional, "between", "openers")?;
                let closers = next_set(&mut positional, "between", "closers")?;
                Command::Search(Policy::Between { openers, closers })
            }
            "balanced" => {
                let openers = next_set(&mut positional, "balanced", "openers")?;
                let closers = next_set(&mut positional, "balanced", "closers")?;
                Command::Search(Policy::Balanced { openers, closers })
            }
            "block" => Command::Block,
            "dedent" => Command::Dedent,
            other => return Err(CliError::UnknownCommand(other.to_owned())),
        };

        let input = match positional.next() {
            None | Some("-") => Input::Stdin,
            Some(path) => Input::File(PathBuf::from(path)),
        };
        if let Some(extra) = positional.next() {
            return Err(CliError::UnexpectedArgument(extra.to_owned()));
        }

        Ok(Self {
            command,
            input,
            options,
        })
    }
}

fn parse_number(option: &'static str, value: &str) -> Result<usize, CliError> {
    value.parse().map_err(|_| CliError::InvalidNumber {
        option,
        value: value.to_owned(),
    })
}

fn next_arg<'s>(
    args: &mut impl Iterator<Item = &'s str>,
    command: &'static str,
    what: &'static str,
) -> Result<&'s str, CliError> {
    args.next()
        .ok_or(CliError::MissingArgument { command, what })
}

/// Every character of the next argument becomes a member of the set.
fn next_set<'s>(
    args: &mut impl Iterator<Item = &'s str>,
    command: &'static str,
    what: &'static str,
) -> Result<DelimiterSet, CliError> {
    let set = DelimiterSet::from(next_arg(args, command, what)?);
    if set.is_empty() {
        return Err(CliError::EmptyDelimiters { command, what });
    }
    Ok(set)
}
