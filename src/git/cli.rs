//! git::cli
//!
//! [`VersionControl`] backed by the `git` binary.
//!
//! Every call is a blocking subprocess run from the repository's working
//! directory with output captured, so git's own progress chatter never
//! interleaves with the sweep's output. No timeouts are applied.

use std::path::PathBuf;
use std::process::Command;

use super::port::{CommandOutput, VcsError, VersionControl};
use crate::ui::output::{self, Verbosity};

/// Runs git commands in a working directory.
#[derive(Debug, Clone)]
pub struct GitCli {
    work_dir: PathBuf,
    verbosity: Verbosity,
}

impl GitCli {
    /// Create a runner rooted at `work_dir`.
    pub fn new(work_dir: impl Into<PathBuf>, verbosity: Verbosity) -> Self {
        Self {
            work_dir: work_dir.into(),
            verbosity,
        }
    }

    /// Run `git <args>` and capture the result without judging the exit status.
    pub fn run(&self, args: &[&str]) -> Result<CommandOutput, VcsError> {
        output::debug(format!("git {}", args.join(" ")), self.verbosity);

        let out = Command::new("git")
            .current_dir(&self.work_dir)
            .args(args)
            .output()
            .map_err(|e| VcsError::Spawn(e.to_string()))?;

        Ok(CommandOutput {
            status: out.status.code(),
            stdout: String::from_utf8_lossy(&out.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&out.stderr).into_owned(),
        })
    }

    /// Run `git <args>`, failing on a non-zero exit.
    fn run_checked(&self, args: &[&str]) -> Result<CommandOutput, VcsError> {
        let out = self.run(args)?;
        if out.success() {
            Ok(out)
        } else {
            Err(VcsError::CommandFailed {
                command: format!("git {}", args.join(" ")),
                status: match out.status {
                    Some(code) => format!("exit status: {}", code),
                    None => "terminated by signal".to_string(),
                },
                stderr: out.stderr.trim().to_string(),
            })
        }
    }
}

impl VersionControl for GitCli {
    fn fetch(&self, remote: &str) -> Result<(), VcsError> {
        self.run_checked(&["fetch", remote]).map(|_| ())
    }

    fn cherry(&self, upstream: &str, head: &str) -> Result<CommandOutput, VcsError> {
        self.run(&["cherry", upstream, head])
    }

    fn push_delete(&self, remote: &str, branch: &str) -> Result<(), VcsError> {
        let refspec = format!(":{}", branch);
        self.run_checked(&["push", remote, &refspec]).map(|_| ())
    }
}
