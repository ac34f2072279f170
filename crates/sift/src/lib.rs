//! Command-line front end for `sift`.
//!
//! Parses arguments into a [`Config`], reads the input text, and runs one
//! of the scanner or formatter operations over it. The binary in
//! `main.rs` is a thin wrapper over [`Config::from_args`] and [`execute`].

mod commands;
mod config;
mod error;

pub use commands::{execute, run, Report};
pub use config::{Command, Config, Input, Options};
pub use error::CliError;

use std::sync::Once;

/// Environment variable holding the log filter, e.g. `sift_scan=trace`.
pub const LOG_ENV: &str = "SIFT_LOG";

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for diagnostic output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `SIFT_LOG=debug` or `SIFT_LOG=sift_scan=trace`; when the
/// variable is unset no subscriber is installed.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        if std::env::var_os(LOG_ENV).is_none() {
            return;
        }
        let filter = match EnvFilter::try_from_env(LOG_ENV) {
            Ok(filter) => filter,
            Err(e) => {
                eprintln!("warning: ignoring {LOG_ENV}: {e}");
                return;
            }
        };
        let tree = tracing_tree::HierarchicalLayer::new(2)
            .with_targets(true)
            .with_writer(std::io::stderr);
        if let Err(e) = tracing_subscriber::registry()
            .with(tree)
            .with(filter)
            .try_init()
        {
            eprintln!("warning: tracing already initialized: {e}");
        }
    });
}
