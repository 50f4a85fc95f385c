//! preview command - List merged remote branches without deleting them

use super::scan::scan;
use super::Context;
use crate::cli::args::SweepArgs;
use crate::ui::output;
use anyhow::Result;

/// Report merged branches and the `cleanup` invocation that would delete them.
///
/// # Arguments
///
/// * `ctx` - Execution context
/// * `args` - Remote, master, fetch and skip options
pub fn preview(ctx: &Context, args: &SweepArgs) -> Result<()> {
    let scan = scan(ctx, args)?;

    if !scan.merged.is_empty() {
        output::print("", ctx.verbosity);
        output::print(
            format!(
                "To delete them, run again with `{}`",
                scan.options.cleanup_command()
            ),
            ctx.verbosity,
        );
    }

    Ok(())
}
