//! Shared sweep pipeline for `preview` and `cleanup`.
//!
//! Opens the repository, optionally fetches, and classifies the remote's
//! branches. Both commands print the same report; they differ only in what
//! happens afterwards.

use super::Context;
use crate::cli::args::SweepArgs;
use crate::core::types::RemoteRef;
use crate::git::{Git, GitCli, GitError, VersionControl};
use crate::sweep::{self, ExcludeSet, Inspector, Remote, SweepError};
use crate::ui::output;
use anyhow::{Context as _, Result};

/// Remote inspected when `--origin` is not given.
pub const DEFAULT_ORIGIN: &str = "origin";
/// Master branch used when `--master` is not given.
pub const DEFAULT_MASTER: &str = "master";

/// Effective options after applying defaults to the flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepOptions {
    pub origin: String,
    pub master: String,
    pub fetch: bool,
    pub skip: Vec<String>,
}

impl SweepOptions {
    /// Fill unset flags with defaults. Blank and repeated skip names are dropped.
    pub fn from_args(args: &SweepArgs) -> Self {
        let mut skip: Vec<String> = Vec::new();
        for name in &args.skip {
            let name = name.trim();
            if !name.is_empty() && !skip.iter().any(|s| s == name) {
                skip.push(name.to_string());
            }
        }

        Self {
            origin: args
                .origin
                .clone()
                .unwrap_or_else(|| DEFAULT_ORIGIN.to_string()),
            master: args
                .master
                .clone()
                .unwrap_or_else(|| DEFAULT_MASTER.to_string()),
            fetch: !args.nofetch,
            skip,
        }
    }

    /// The `cleanup` invocation matching these options, repeating only
    /// values that differ from the defaults.
    pub fn cleanup_command(&self) -> String {
        let mut command = String::from("git-sweep cleanup");
        if self.origin != DEFAULT_ORIGIN {
            command.push_str(&format!(" --origin={}", self.origin));
        }
        if self.master != DEFAULT_MASTER {
            command.push_str(&format!(" --master={}", self.master));
        }
        if !self.skip.is_empty() {
            command.push_str(&format!(" --skip={}", self.skip.join(",")));
        }
        command
    }
}

/// Outcome of the shared pipeline.
pub struct Scan {
    pub options: SweepOptions,
    pub vcs: GitCli,
    pub remote: Remote,
    pub merged: Vec<RemoteRef>,
}

/// Run the pipeline up to the merged-branch report.
pub fn scan(ctx: &Context, args: &SweepArgs) -> Result<Scan> {
    let cwd = match &ctx.cwd {
        Some(path) => path.clone(),
        None => std::env::current_dir().context("Failed to determine current directory")?,
    };

    let git = Git::open(&cwd).map_err(|e| match e {
        GitError::NotARepo { path } => SweepError::InvalidRepository { path },
        GitError::BareRepo => SweepError::InvalidRepository { path: cwd.clone() },
        other => SweepError::Git(other),
    })?;
    let info = git.info()?;
    output::debug(
        format!(
            "repository: {} (git dir {})",
            info.work_dir.display(),
            info.git_dir.display()
        ),
        ctx.verbosity,
    );

    let options = SweepOptions::from_args(args);
    output::debug(format!("options: {:?}", options), ctx.verbosity);

    let vcs = GitCli::new(&info.work_dir, ctx.verbosity);
    let mut remote = sweep::resolve_remote(&git, &options.origin)?;

    if options.fetch {
        output::print("Fetching from the remote", ctx.verbosity);
        vcs.fetch(&remote.name).map_err(SweepError::from)?;
        remote = sweep::resolve_remote(&git, &options.origin)?;
    }

    let master = sweep::find_master(&remote, &options.master)?.clone();
    let exclude = ExcludeSet::new(&options.master).with_skipped(&options.skip);
    let candidates = sweep::filter(&remote, &exclude);
    let merged =
        Inspector::new(&vcs, ctx.verbosity).merged_refs(&remote, &master, &candidates);

    report(&options.master, &merged);

    Ok(Scan {
        options,
        vcs,
        remote,
        merged,
    })
}

fn report(master: &str, merged: &[RemoteRef]) {
    if merged.is_empty() {
        output::result("No remote branches are available for cleaning up");
        return;
    }

    output::result(format!("These branches have been merged into {}:", master));
    output::result("");
    let heads: Vec<_> = merged.iter().map(RemoteRef::remote_head).collect();
    output::result(output::format_list(&heads, "  "));
}
