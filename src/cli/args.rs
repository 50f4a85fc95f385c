//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--cwd <path>`: Run as if in that directory
//! - `--verbose` / `-v`: Report each branch as it is inspected
//! - `--debug`: Also echo every git command
//! - `--quiet` / `-q`: Minimal output

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::ui::output::Verbosity;

/// git-sweep - Clean up remote branches that are merged into master
#[derive(Parser, Debug)]
#[command(name = "git-sweep")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Run as if git-sweep was started in this directory
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,

    /// Report each branch as it is inspected
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true, conflicts_with_all = ["verbose", "debug"])]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Output verbosity selected by the global flags.
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.quiet, self.verbose, self.debug)
    }
}

/// Options shared by `preview` and `cleanup`.
///
/// `origin` and `master` stay `None` unless given; defaults are applied
/// when the options are resolved.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct SweepArgs {
    /// The name of the remote you wish to clean up [default: origin]
    #[arg(long, value_name = "NAME")]
    pub origin: Option<String>,

    /// The name of what you consider the master branch [default: master]
    #[arg(long, value_name = "NAME")]
    pub master: Option<String>,

    /// Do not fetch from the remote
    #[arg(long)]
    pub nofetch: bool,

    /// Comma-separated list of branches to skip
    #[arg(long, value_name = "BRANCHES", value_delimiter = ',')]
    pub skip: Vec<String>,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Preview the branches that will be deleted
    #[command(
        name = "preview",
        long_about = "Preview the branches that will be deleted.\n\n\
            Fetches from the remote, then lists every remote branch whose commits \
            are all on the master branch already. Branches whose changes reached \
            master by cherry-pick or rebase count as merged. Nothing is changed.",
        after_help = "\
WORKFLOW EXAMPLES:
    # See what would be cleaned up on origin
    git-sweep preview

    # Use a different remote and master branch
    git-sweep preview --origin upstream --master main

    # Keep some long-lived branches off the list
    git-sweep preview --skip develop,release"
    )]
    Preview(SweepArgs),

    /// Delete merged branches from the remote
    #[command(
        name = "cleanup",
        long_about = "Delete merged branches from the remote.\n\n\
            Finds the same branches as `preview`, asks for confirmation, then \
            deletes each one on the remote with `git push <remote> :<branch>`. \
            A branch that fails to delete does not stop the others.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Review, confirm, delete
    git-sweep cleanup

    # Delete without asking (scripts, CI)
    git-sweep cleanup --force

AFTER CLEANING UP:
    Other clones still have the deleted remote-tracking branches.
    They can drop them with:
        git fetch --prune"
    )]
    Cleanup {
        #[command(flatten)]
        sweep: SweepArgs,

        /// Do not ask for confirmation
        #[arg(long)]
        force: bool,
    },

    /// Generate shell completion scripts
    #[command(
        name = "completion",
        after_help = "\
SETUP EXAMPLES:
    # Bash
    git-sweep completion bash > ~/.local/share/bash-completion/completions/git-sweep

    # Zsh
    git-sweep completion zsh > ~/.zfunc/_git-sweep

    # Fish
    git-sweep completion fish > ~/.config/fish/completions/git-sweep.fish

    # PowerShell
    git-sweep completion powershell >> $PROFILE"
    )]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Shell for completion generation.
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}
