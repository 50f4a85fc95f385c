//! sweep::filter
//!
//! Candidate selection.
//!
//! The master ref is located first, then every ref whose short name is
//! `HEAD`, the master branch, or on the caller's skip list is dropped. The
//! remote's ref order is preserved.

use std::collections::BTreeSet;

use crate::core::types::RemoteRef;

use super::{Remote, SweepError};

/// Short names that never become candidates.
///
/// Always contains `HEAD` and the master branch; callers add their skip
/// list on top. The set is built once and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExcludeSet {
    names: BTreeSet<String>,
}

impl ExcludeSet {
    /// The default exclusions for a given master branch: `HEAD` and master.
    pub fn new(master: &str) -> Self {
        let names = ["HEAD", master].iter().map(|s| s.to_string()).collect();
        Self { names }
    }

    /// Union the default exclusions with a caller-supplied skip list.
    pub fn with_skipped<I, S>(mut self, skip: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.names
            .extend(skip.into_iter().map(|s| s.as_ref().to_string()));
        self
    }

    /// Whether a short branch name is excluded.
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }
}

/// Find the ref whose short name is exactly `master`.
///
/// # Errors
///
/// - [`SweepError::MasterBranchNotFound`] if the remote has no such ref
pub fn find_master<'a>(remote: &'a Remote, master: &str) -> Result<&'a RemoteRef, SweepError> {
    remote
        .refs
        .iter()
        .find(|r| r.remote_head().as_str() == master)
        .ok_or_else(|| SweepError::MasterBranchNotFound {
            branch: master.to_string(),
        })
}

/// Every ref on `remote` whose short name is not in `exclude`, in remote order.
pub fn filter(remote: &Remote, exclude: &ExcludeSet) -> Vec<RemoteRef> {
    remote
        .refs
        .iter()
        .filter(|r| !exclude.contains(r.remote_head().as_str()))
        .cloned()
        .collect()
}
