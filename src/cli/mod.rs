//! cli
//!
//! Command-line interface layer for git-sweep.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Delegate to command handlers
//! - Map failures to a message and exit status
//!
//! # Architecture
//!
//! The CLI layer is thin. It parses arguments via clap and dispatches to
//! [`commands`], which drive the [`crate::sweep`] pipeline.

pub mod args;
pub mod commands;

pub use args::{Cli, Shell};

use anyhow::Result;

/// Run the CLI application with already-parsed arguments.
pub fn run(cli: Cli) -> Result<()> {
    let ctx = commands::Context {
        cwd: cli.cwd.clone(),
        verbosity: cli.verbosity(),
    };

    commands::dispatch(cli.command, &ctx)
}
