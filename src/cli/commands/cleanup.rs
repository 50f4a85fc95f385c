//! cleanup command - Delete merged remote branches

use super::scan::scan;
use super::Context;
use crate::cli::args::SweepArgs;
use crate::sweep::Deleter;
use crate::ui::{output, prompts};
use anyhow::{bail, Result};

/// Delete every merged branch on the remote, after confirmation.
///
/// Declining the prompt is not an error. Branches that fail to delete are
/// listed and turn the run into a failure, but never stop the rest of the
/// batch.
///
/// # Arguments
///
/// * `ctx` - Execution context
/// * `args` - Remote, master, fetch and skip options
/// * `force` - Skip the confirmation prompt
pub fn cleanup(ctx: &Context, args: &SweepArgs, force: bool) -> Result<()> {
    let scan = scan(ctx, args)?;
    if scan.merged.is_empty() {
        return Ok(());
    }

    if !force {
        output::result("");
        if !prompts::confirm("Delete these branches? (y/n) ")? {
            output::result("");
            output::result("OK, aborting.");
            return Ok(());
        }
    }

    output::print("", ctx.verbosity);
    let report =
        Deleter::new(&scan.vcs, ctx.verbosity).remove_remote_refs(&scan.remote, &scan.merged);

    if report.is_complete() {
        output::print("", ctx.verbosity);
        output::print("All done!", ctx.verbosity);
    }

    if !report.deleted.is_empty() {
        output::print("", ctx.verbosity);
        output::print(
            "Tell everyone to run `git fetch --prune` to sync with this remote.",
            ctx.verbosity,
        );
        output::print("(you don't have to, yours is synced)", ctx.verbosity);
    }

    if !report.is_complete() {
        for (reference, reason) in &report.failed {
            output::debug(format!("{}: {}", reference, reason), ctx.verbosity);
        }
        bail!("Failed to delete: {}", report.failed_names().join(", "));
    }

    Ok(())
}
