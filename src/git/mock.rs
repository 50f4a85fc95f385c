//! git::mock
//!
//! Mock version control for deterministic testing.
//!
//! # Design
//!
//! `MockVcs` answers `cherry` from a table keyed by the `head` revision,
//! fails pushes for branches it was told to reject, and records every call
//! so tests can assert on exactly what would have reached git.
//!
//! # Example
//!
//! ```
//! use gitsweep::git::mock::{MockOperation, MockVcs};
//! use gitsweep::git::{CommandOutput, VersionControl};
//!
//! let vcs = MockVcs::new();
//! vcs.set_cherry("origin/topic", CommandOutput::ok("+ abc123\n"));
//!
//! let out = vcs.cherry("origin/master", "origin/topic").unwrap();
//! assert_eq!(out.stdout, "+ abc123\n");
//! assert_eq!(
//!     vcs.operations(),
//!     vec![MockOperation::Cherry {
//!         upstream: "origin/master".to_string(),
//!         head: "origin/topic".to_string(),
//!     }]
//! );
//! ```

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use super::port::{CommandOutput, VcsError, VersionControl};

/// Mock VCS for testing.
///
/// Thread-safe via internal `Arc<Mutex<...>>` wrapping; clones share state.
#[derive(Debug, Clone, Default)]
pub struct MockVcs {
    inner: Arc<Mutex<MockVcsInner>>,
}

#[derive(Debug, Default)]
struct MockVcsInner {
    /// Scripted cherry results by `head`. Unscripted heads report no commits.
    cherry: HashMap<String, Result<CommandOutput, VcsError>>,
    /// Branches whose push-delete fails.
    reject_push: HashSet<String>,
    /// Error to return from fetch, if any.
    fetch_error: Option<VcsError>,
    /// Recorded operations for verification.
    operations: Vec<MockOperation>,
}

/// Recorded operation for test verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockOperation {
    Fetch { remote: String },
    Cherry { upstream: String, head: String },
    PushDelete { remote: String, branch: String },
}

impl MockVcs {
    /// Create a mock where every branch is merged and every push succeeds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the cherry result for a `head` revision such as `origin/topic`.
    pub fn set_cherry(&self, head: &str, output: CommandOutput) {
        self.lock().cherry.insert(head.to_string(), Ok(output));
    }

    /// Make the cherry invocation for `head` fail to run at all.
    pub fn set_cherry_error(&self, head: &str, error: VcsError) {
        self.lock().cherry.insert(head.to_string(), Err(error));
    }

    /// Make push-delete of `branch` fail.
    pub fn reject_push(&self, branch: &str) {
        self.lock().reject_push.insert(branch.to_string());
    }

    /// Make fetch fail with the given error.
    pub fn fail_fetch(&self, error: VcsError) {
        self.lock().fetch_error = Some(error);
    }

    /// All operations performed so far, in call order.
    pub fn operations(&self) -> Vec<MockOperation> {
        self.lock().operations.clone()
    }

    /// Branches that were pushed for deletion, in call order.
    pub fn pushed(&self) -> Vec<String> {
        self.lock()
            .operations
            .iter()
            .filter_map(|op| match op {
                MockOperation::PushDelete { branch, .. } => Some(branch.clone()),
                _ => None,
            })
            .collect()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MockVcsInner> {
        // A panicking test must not poison the other assertions.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl VersionControl for MockVcs {
    fn fetch(&self, remote: &str) -> Result<(), VcsError> {
        let mut inner = self.lock();
        inner.operations.push(MockOperation::Fetch {
            remote: remote.to_string(),
        });
        match &inner.fetch_error {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }

    fn cherry(&self, upstream: &str, head: &str) -> Result<CommandOutput, VcsError> {
        let mut inner = self.lock();
        inner.operations.push(MockOperation::Cherry {
            upstream: upstream.to_string(),
            head: head.to_string(),
        });
        inner
            .cherry
            .get(head)
            .cloned()
            .unwrap_or_else(|| Ok(CommandOutput::ok("")))
    }

    fn push_delete(&self, remote: &str, branch: &str) -> Result<(), VcsError> {
        let mut inner = self.lock();
        inner.operations.push(MockOperation::PushDelete {
            remote: remote.to_string(),
            branch: branch.to_string(),
        });
        if inner.reject_push.contains(branch) {
            return Err(VcsError::CommandFailed {
                command: format!("git push {} :{}", remote, branch),
                status: "exit status: 1".to_string(),
                stderr: format!("error: unable to delete '{}': remote ref does not exist", branch),
            });
        }
        Ok(())
    }
}
