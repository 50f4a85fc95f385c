//! git
//!
//! Single interface for all Git operations.
//!
//! # Architecture
//!
//! Repository reads go through [`Git`] (git2). Commands that must run the
//! real git binary (fetch, `git cherry`, push-to-delete) go through the
//! [`VersionControl`] port, implemented by [`GitCli`] and, for tests, by
//! [`mock::MockVcs`]. No other module imports `git2` or spawns `git`.

mod cli;
mod interface;
pub mod mock;
mod port;

pub use cli::GitCli;
pub use interface::{Git, GitError, RepoInfo};
pub use port::{CommandOutput, VcsError, VersionControl};
