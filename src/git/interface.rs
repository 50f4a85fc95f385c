//! git::interface
//!
//! Read-only repository access using git2.
//!
//! All reads of repository state (discovery, configured remotes and their
//! remote-tracking refs) flow through [`Git`]. No other module imports
//! `git2`. Operations that talk to the network (fetch, push) or that need
//! git's own patch-id machinery (`git cherry`) go through the
//! [`VersionControl`](super::VersionControl) port instead.
//!
//! # Error Handling
//!
//! Git errors are categorized into typed variants:
//! - [`GitError::NotARepo`]: Not inside a Git repository
//! - [`GitError::BareRepo`]: Repository has no working directory
//! - [`GitError::Internal`]: Anything else reported by libgit2
//!
//! # Example
//!
//! ```ignore
//! use gitsweep::git::Git;
//! use std::path::Path;
//!
//! let git = Git::open(Path::new("."))?;
//! for r in git.remote_refs("origin")? {
//!     println!("{}", r.name());
//! }
//! ```

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::types::{BranchName, RemoteRef};

/// Errors from Git operations.
#[derive(Debug, Error)]
pub enum GitError {
    /// Not inside a Git repository.
    #[error("not a git repository: {path}")]
    NotARepo {
        /// The path that was searched
        path: PathBuf,
    },

    /// Repository is bare (no working directory).
    #[error("bare repository not supported")]
    BareRepo,

    /// Internal git2 error.
    #[error("git error: {message}")]
    Internal {
        /// The error message
        message: String,
    },
}

impl GitError {
    fn internal(err: git2::Error, context: &str) -> Self {
        GitError::Internal {
            message: format!("{}: {}", context, err.message()),
        }
    }
}

impl From<git2::Error> for GitError {
    fn from(err: git2::Error) -> Self {
        GitError::Internal {
            message: err.message().to_string(),
        }
    }
}

/// Information about a Git repository.
#[derive(Debug, Clone)]
pub struct RepoInfo {
    /// Path to .git directory
    pub git_dir: PathBuf,
    /// Path to working directory
    pub work_dir: PathBuf,
}

/// The Git interface.
///
/// Wraps a `git2::Repository` discovered from some directory inside the
/// working copy. Every method re-reads the repository, so refs listed after
/// a fetch reflect the fetch.
pub struct Git {
    repo: git2::Repository,
}

impl std::fmt::Debug for Git {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Git")
            .field("path", &self.repo.path())
            .finish()
    }
}

impl Git {
    /// Open a repository at the given path.
    ///
    /// Uses `git2::Repository::discover` to find the repository root,
    /// so `path` can be any directory within the repository.
    ///
    /// # Errors
    ///
    /// - [`GitError::NotARepo`] if no repository is found
    /// - [`GitError::BareRepo`] if the repository has no working directory
    pub fn open(path: &Path) -> Result<Self, GitError> {
        let repo = git2::Repository::discover(path).map_err(|_| GitError::NotARepo {
            path: path.to_path_buf(),
        })?;

        if repo.is_bare() {
            return Err(GitError::BareRepo);
        }

        Ok(Self { repo })
    }

    /// Get repository information (git_dir and work_dir paths).
    pub fn info(&self) -> Result<RepoInfo, GitError> {
        let git_dir = self.repo.path().to_path_buf();
        let work_dir = self.repo.workdir().ok_or(GitError::BareRepo)?.to_path_buf();

        Ok(RepoInfo { git_dir, work_dir })
    }

    // =========================================================================
    // Remotes
    // =========================================================================

    /// Names of all configured remotes, in configuration order.
    pub fn remote_names(&self) -> Result<Vec<String>, GitError> {
        let remotes = self
            .repo
            .remotes()
            .map_err(|e| GitError::internal(e, "listing remotes"))?;

        Ok(remotes.iter().flatten().map(String::from).collect())
    }

    /// List the remote-tracking refs of a remote.
    ///
    /// Reads `refs/remotes/<remote>/*`, sorted by ref name (the order
    /// `git for-each-ref` reports). The symbolic `refs/remotes/<remote>/HEAD`
    /// is included with a short name of `HEAD`. Refs whose names are not
    /// valid UTF-8 or valid branch names are skipped.
    pub fn remote_refs(&self, remote: &str) -> Result<Vec<RemoteRef>, GitError> {
        let prefix = format!("refs/remotes/{}/", remote);
        let pattern = format!("{}*", prefix);
        let refs = self
            .repo
            .references_glob(&pattern)
            .map_err(|e| GitError::internal(e, &pattern))?;

        let mut entries: Vec<(String, RemoteRef)> = Vec::new();
        for reference in refs {
            let reference = reference.map_err(|e| GitError::internal(e, &pattern))?;

            let full_name = match reference.name() {
                Some(n) => n.to_string(),
                None => continue,
            };

            let short = match full_name.strip_prefix(&prefix) {
                Some(s) => s,
                None => continue,
            };

            let remote_head = match BranchName::new(short) {
                Ok(b) => b,
                Err(_) => continue,
            };

            // A dangling symbolic HEAD has no commit; skip it.
            if reference.resolve().is_err() {
                continue;
            }

            entries.push((full_name, RemoteRef::new(remote, remote_head)));
        }

        entries.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(entries.into_iter().map(|(_, r)| r).collect())
    }
}
