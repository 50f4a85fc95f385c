//! git::port
//!
//! The narrow version-control port used by the sweep.
//!
//! # Design
//!
//! The sweep only ever asks the VCS to do three things: fetch a remote,
//! compare a branch against master by patch equivalence (`git cherry`), and
//! delete a branch on the remote (`git push <remote> :<branch>`). Keeping
//! those behind the [`VersionControl`] trait lets the inspector and deleter
//! run against [`MockVcs`](super::mock::MockVcs) in unit tests.
//!
//! `cherry` returns the raw exit status and output rather than failing on a
//! non-zero status; interpreting them is the inspector's job.

use thiserror::Error;

/// Errors from version-control commands.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum VcsError {
    /// The git binary could not be started.
    #[error("failed to run git: {0}")]
    Spawn(String),

    /// The command ran and exited unsuccessfully.
    #[error("`{command}` failed ({status}): {stderr}")]
    CommandFailed {
        /// The command line that failed
        command: String,
        /// Exit status description
        status: String,
        /// Trimmed standard error
        stderr: String,
    },
}

/// Captured result of a command that is allowed to exit non-zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, `None` if the process was killed by a signal
    pub status: Option<i32>,
    /// Standard output, lossily decoded
    pub stdout: String,
    /// Standard error, lossily decoded
    pub stderr: String,
}

impl CommandOutput {
    /// A successful run with the given standard output.
    pub fn ok(stdout: impl Into<String>) -> Self {
        Self {
            status: Some(0),
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    /// A failed run with the given exit code and standard error.
    pub fn failed(code: i32, stderr: impl Into<String>) -> Self {
        Self {
            status: Some(code),
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }

    /// Whether the process exited with status 0.
    pub fn success(&self) -> bool {
        self.status == Some(0)
    }
}

/// Version-control operations needed to sweep a remote.
pub trait VersionControl {
    /// Fetch from the named remote, updating its remote-tracking refs.
    fn fetch(&self, remote: &str) -> Result<(), VcsError>;

    /// List commits in `head` relative to `upstream` by patch equivalence.
    ///
    /// Equivalent to `git cherry <upstream> <head>`. Only a failure to run
    /// the command at all is an error; a non-zero exit is reported in the
    /// returned [`CommandOutput`].
    fn cherry(&self, upstream: &str, head: &str) -> Result<CommandOutput, VcsError>;

    /// Delete `branch` on the named remote by pushing an empty source to it.
    fn push_delete(&self, remote: &str, branch: &str) -> Result<(), VcsError>;
}
