//! sweep::deleter
//!
//! Remote branch deletion.
//!
//! Each ref is deleted with its own `git push <remote> :<branch>`. The batch
//! is not atomic: a failed push is recorded and the next ref is tried, and
//! refs already deleted stay deleted.

use crate::core::types::RemoteRef;
use crate::git::{VcsError, VersionControl};
use crate::ui::output::{self, Verbosity};

use super::Remote;

/// Result of deleting one ref.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeletionOutcome {
    Deleted(RemoteRef),
    Failed { reference: RemoteRef, reason: VcsError },
}

impl DeletionOutcome {
    pub fn is_deleted(&self) -> bool {
        matches!(self, DeletionOutcome::Deleted(_))
    }
}

/// Outcomes of a batch, partitioned. Both lists keep input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeletionReport {
    pub deleted: Vec<RemoteRef>,
    pub failed: Vec<(RemoteRef, VcsError)>,
}

impl DeletionReport {
    /// Whether every ref in the batch was deleted.
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    /// Short names of the refs that could not be deleted.
    pub fn failed_names(&self) -> Vec<&str> {
        self.failed
            .iter()
            .map(|(r, _)| r.remote_head().as_str())
            .collect()
    }

    fn record(&mut self, outcome: DeletionOutcome) {
        match outcome {
            DeletionOutcome::Deleted(r) => self.deleted.push(r),
            DeletionOutcome::Failed { reference, reason } => {
                self.failed.push((reference, reason))
            }
        }
    }
}

/// Deletes branches on a remote through a [`VersionControl`] port.
pub struct Deleter<'a, V: VersionControl + ?Sized> {
    vcs: &'a V,
    verbosity: Verbosity,
}

impl<'a, V: VersionControl + ?Sized> Deleter<'a, V> {
    pub fn new(vcs: &'a V, verbosity: Verbosity) -> Self {
        Self { vcs, verbosity }
    }

    /// Delete a single ref on `remote`.
    pub fn delete_ref(&self, remote: &Remote, reference: &RemoteRef) -> DeletionOutcome {
        let branch = reference.remote_head().as_str();
        match self.vcs.push_delete(&remote.name, branch) {
            Ok(()) => DeletionOutcome::Deleted(reference.clone()),
            Err(reason) => {
                output::debug(format!("deleting {}: {}", reference, reason), self.verbosity);
                DeletionOutcome::Failed {
                    reference: reference.clone(),
                    reason,
                }
            }
        }
    }

    /// Delete every ref in `refs`, in order, printing one progress line each.
    pub fn remove_remote_refs(&self, remote: &Remote, refs: &[RemoteRef]) -> DeletionReport {
        let mut report = DeletionReport::default();
        for reference in refs {
            output::print_inline(
                format!("  deleting {}", reference.remote_head()),
                self.verbosity,
            );
            let outcome = self.delete_ref(remote, reference);
            let status = if outcome.is_deleted() {
                " (done)"
            } else {
                " (failed)"
            };
            output::print(status, self.verbosity);
            report.record(outcome);
        }
        report
    }
}
