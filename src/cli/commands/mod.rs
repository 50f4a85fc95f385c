//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! `preview` and `cleanup` share one pipeline (`scan`): open the
//! repository, fetch, filter, classify, report. `preview` then suggests the
//! matching `cleanup` invocation; `cleanup` confirms and deletes.

mod cleanup;
mod completion;
mod preview;
mod scan;

pub use cleanup::cleanup;
pub use completion::completion;
pub use preview::preview;
pub use scan::SweepOptions;

use crate::cli::args::Command;
use crate::ui::output::Verbosity;
use anyhow::Result;
use std::path::PathBuf;

/// Execution context built from the global flags.
#[derive(Debug, Clone)]
pub struct Context {
    /// Working directory override.
    pub cwd: Option<PathBuf>,
    /// Output verbosity.
    pub verbosity: Verbosity,
}

impl Default for Context {
    fn default() -> Self {
        Self {
            cwd: None,
            verbosity: Verbosity::Normal,
        }
    }
}

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Preview(args) => preview::preview(ctx, &args),
        Command::Cleanup { sweep, force } => cleanup::cleanup(ctx, &sweep, force),
        Command::Completion { shell } => completion::completion(shell),
    }
}
