//! sweep
//!
//! Merged-branch detection and remote cleanup.
//!
//! # Pipeline
//!
//! ```text
//! resolve_remote -> find_master -> filter -> Inspector::merged_refs -> Deleter
//! ```
//!
//! - [`remote`] - Resolve a named remote and its remote-tracking refs
//! - [`filter`] - Locate master and drop HEAD, master and skipped names
//! - [`inspector`] - Classify each candidate against master with `git cherry`
//! - [`deleter`] - Push-delete approved refs, one at a time
//!
//! Everything below [`remote`] works on plain [`Remote`] values and a
//! [`VersionControl`](crate::git::VersionControl) port, so it can be driven
//! by [`MockVcs`](crate::git::mock::MockVcs) in tests.

pub mod deleter;
pub mod filter;
pub mod inspector;
pub mod remote;

use std::path::PathBuf;

use thiserror::Error;

use crate::git::{GitError, VcsError};

pub use deleter::{DeletionOutcome, DeletionReport, Deleter};
pub use filter::{filter, find_master, ExcludeSet};
pub use inspector::{Classification, Inspector};
pub use remote::{resolve_remote, Remote};

/// Errors that stop a sweep.
#[derive(Debug, Error)]
pub enum SweepError {
    /// No configured remote has the requested name.
    #[error("Could not find the remote named {name}")]
    RemoteNotFound { name: String },

    /// The remote advertises no ref for the master branch.
    #[error("Could not find ref for {branch}")]
    MasterBranchNotFound { branch: String },

    /// The working directory is not inside a Git working copy.
    #[error("This is not a Git repository")]
    InvalidRepository { path: PathBuf },

    #[error(transparent)]
    Git(#[from] GitError),

    #[error(transparent)]
    Vcs(#[from] VcsError),
}
