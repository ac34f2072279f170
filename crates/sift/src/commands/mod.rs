//! Command execution.

use std::io::Read;
use std::process::ExitCode;

use sift_scan::{Scanner, TextView};
use tracing::debug;

use crate::{CliError, Command, Config, Input};

/// Output of a command: the lines to print and whether anything matched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    pub lines: Vec<String>,
    pub matched: bool,
}

impl Report {
    /// `0` when something matched, `2` when a search came back empty.
    pub fn exit_code(&self) -> ExitCode {
        if self.matched {
            ExitCode::SUCCESS
        } else {
            ExitCode::from(2)
        }
    }
}

/// Read the configured input and run the command over it.
pub fn execute(config: &Config) -> Result<Report, CliError> {
    let text = read_input(&config.input)?;
    Ok(run(config, &text))
}

/// Run the command over already-loaded text.
///
/// Search results are printed as `<start>..<end>\t<value>`, one per line,
/// with byte offsets into `text`.
pub fn run(config: &Config, text: &str) -> Report {
    let options = &config.options;
    match &config.command {
        Command::Search(policy) => {
            let scanner = Scanner::new(text);
            let found: Vec<TextView<'_>> = if options.all {
                scanner.matches_after(policy, options.after).collect()
            } else {
                scanner.find(policy, options.after).into_iter().collect()
            };
            debug!(count = found.len(), "search complete");
            Report {
                matched: !found.is_empty(),
                lines: found.iter().map(format_match).collect(),
            }
        }
        Command::Block => Report {
            lines: vec![options
                .indenter
                .create_block(strip_final_newline(text), options.indent)],
            matched: true,
        },
        Command::Dedent => Report {
            lines: vec![options
                .indenter
                .remove_redundant_indentation(strip_final_newline(text))],
            matched: true,
        },
    }
}

fn format_match(view: &TextView<'_>) -> String {
    format!("{}..{}\t{}", view.start(), view.end(), view.value())
}

/// Input files usually end in a newline; it is not part of the content.
fn strip_final_newline(text: &str) -> &str {
    text.strip_suffix('\n').unwrap_or(text)
}

fn read_input(input: &Input) -> Result<String, CliError> {
    match input {
        Input::Stdin => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .map_err(CliError::Stdin)?;
            Ok(text)
        }
        Input::File(path) => std::fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.clone(),
            source,
        }),
    }
}
