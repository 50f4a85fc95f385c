//! sweep::inspector
//!
//! Decide which remote branches are already merged into master.
//!
//! # Algorithm
//!
//! For each candidate `r`, run `git cherry <remote>/<master> <remote>/<r>`.
//! git lists every commit reachable from `r` but not from master, prefixed
//! with `+` when master has no patch-equivalent commit and `-` when it does.
//! The branch is merged when the command exits 0 and prints no `+` line:
//! everything it carries is already on master, even if it arrived there by
//! cherry-pick or rebase. A branch with no divergent commits prints nothing
//! and is trivially merged.
//!
//! A cherry invocation that cannot run counts as "not merged"; the sweep
//! must never delete a branch it could not inspect.

use crate::core::types::RemoteRef;
use crate::git::{CommandOutput, VersionControl};
use crate::ui::output::{self, Verbosity};

use super::Remote;

/// A candidate ref and whether it is merged into master.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub branch: RemoteRef,
    pub merged: bool,
}

/// Interpret `git cherry` output.
///
/// Merged iff the command succeeded and every listed commit is marked `-`.
///
/// # Example
///
/// ```
/// use gitsweep::git::CommandOutput;
/// use gitsweep::sweep::inspector::cherry_is_merged;
///
/// assert!(cherry_is_merged(&CommandOutput::ok("")));
/// assert!(cherry_is_merged(&CommandOutput::ok("- 1a2b3c\n")));
/// assert!(!cherry_is_merged(&CommandOutput::ok("+ 1a2b3c\n")));
/// assert!(!cherry_is_merged(&CommandOutput::failed(128, "fatal: unknown commit")));
/// ```
pub fn cherry_is_merged(output: &CommandOutput) -> bool {
    output.success()
        && output
            .stdout
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .all(|line| line.starts_with('-'))
}

/// Classifies remote branches against master.
pub struct Inspector<'a, V: VersionControl + ?Sized> {
    vcs: &'a V,
    verbosity: Verbosity,
}

impl<'a, V: VersionControl + ?Sized> Inspector<'a, V> {
    pub fn new(vcs: &'a V, verbosity: Verbosity) -> Self {
        Self { vcs, verbosity }
    }

    /// Classify a single candidate against `master`.
    ///
    /// Each call re-runs `git cherry`; nothing is cached between refs.
    pub fn classify(
        &self,
        remote: &Remote,
        master: &RemoteRef,
        candidate: &RemoteRef,
    ) -> Classification {
        let upstream = format!("{}/{}", remote.name, master.remote_head());
        let head = format!("{}/{}", remote.name, candidate.remote_head());

        let merged = match self.vcs.cherry(&upstream, &head) {
            Ok(out) => {
                if !out.success() {
                    output::debug(
                        format!(
                            "git cherry {} {} exited with {:?}: {}",
                            upstream,
                            head,
                            out.status,
                            out.stderr.trim()
                        ),
                        self.verbosity,
                    );
                }
                cherry_is_merged(&out)
            }
            Err(e) => {
                output::debug(
                    format!("git cherry {} {}: {}", upstream, head, e),
                    self.verbosity,
                );
                false
            }
        };

        Classification {
            branch: candidate.clone(),
            merged,
        }
    }

    /// The merged subset of `candidates`, in candidate order.
    pub fn merged_refs(
        &self,
        remote: &Remote,
        master: &RemoteRef,
        candidates: &[RemoteRef],
    ) -> Vec<RemoteRef> {
        output::verbose(
            format!("Inspecting {} branch(es) against {}", candidates.len(), master),
            self.verbosity,
        );

        let mut merged = Vec::new();
        for (index, candidate) in candidates.iter().enumerate() {
            output::verbose(
                format!("  [{}/{}] checking {}", index + 1, candidates.len(), candidate),
                self.verbosity,
            );

            let result = self.classify(remote, master, candidate);

            output::verbose(
                format!(
                    "  [{}/{}] {} is {}",
                    index + 1,
                    candidates.len(),
                    candidate,
                    if result.merged { "merged" } else { "not merged" }
                ),
                self.verbosity,
            );

            if result.merged {
                merged.push(result.branch);
            }
        }
        merged
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::BranchName;
    use crate::git::mock::{MockOperation, MockVcs};
    use crate::git::VcsError;

    fn branch(name: &str) -> RemoteRef {
        RemoteRef::new("origin", BranchName::new(name).unwrap())
    }

    fn setup(names: &[&str]) -> (Remote, RemoteRef, Vec<RemoteRef>) {
        let master = branch("master");
        let candidates: Vec<RemoteRef> = names.iter().map(|n| branch(n)).collect();
        let mut refs = vec![master.clone()];
        refs.extend(candidates.iter().cloned());
        (Remote::new("origin", refs), master, candidates)
    }

    fn names(refs: &[RemoteRef]) -> Vec<&str> {
        refs.iter().map(|r| r.remote_head().as_str()).collect()
    }

    mod cherry_output {
        use super::*;

        #[test]
        fn empty_output_is_merged() {
            assert!(cherry_is_merged(&CommandOutput::ok("")));
            assert!(cherry_is_merged(&CommandOutput::ok("\n")));
        }

        #[test]
        fn patch_equivalent_commits_are_merged() {
            let out = CommandOutput::ok("- 1111111\n- 2222222\n");
            assert!(cherry_is_merged(&out));
        }

        #[test]
        fn any_unique_commit_is_not_merged() {
            let out = CommandOutput::ok("- 1111111\n+ 2222222\n");
            assert!(!cherry_is_merged(&out));
        }

        #[test]
        fn failure_is_not_merged_even_with_empty_output() {
            assert!(!cherry_is_merged(&CommandOutput::failed(128, "bad revision")));
            let killed = CommandOutput {
                status: None,
                ..CommandOutput::default()
            };
            assert!(!cherry_is_merged(&killed));
        }

        #[test]
        fn unexpected_output_is_not_merged() {
            assert!(!cherry_is_merged(&CommandOutput::ok("warning: something\n")));
        }
    }

    mod merged_refs {
        use super::*;

        #[test]
        fn no_candidates_means_nothing_merged() {
            let vcs = MockVcs::new();
            let (remote, master, candidates) = setup(&[]);
            let inspector = Inspector::new(&vcs, Verbosity::Normal);

            assert!(inspector.merged_refs(&remote, &master, &candidates).is_empty());
            assert!(vcs.operations().is_empty());
        }

        #[test]
        fn keeps_merged_in_candidate_order() {
            let vcs = MockVcs::new();
            vcs.set_cherry("origin/b", CommandOutput::ok("+ abc\n"));
            let (remote, master, candidates) = setup(&["c", "b", "a"]);
            let inspector = Inspector::new(&vcs, Verbosity::Normal);

            let merged = inspector.merged_refs(&remote, &master, &candidates);
            assert_eq!(names(&merged), vec!["c", "a"]);
        }

        #[test]
        fn compares_each_candidate_against_master() {
            let vcs = MockVcs::new();
            let (remote, master, candidates) = setup(&["a", "b"]);
            Inspector::new(&vcs, Verbosity::Normal).merged_refs(&remote, &master, &candidates);

            assert_eq!(
                vcs.operations(),
                vec![
                    MockOperation::Cherry {
                        upstream: "origin/master".to_string(),
                        head: "origin/a".to_string(),
                    },
                    MockOperation::Cherry {
                        upstream: "origin/master".to_string(),
                        head: "origin/b".to_string(),
                    },
                ]
            );
        }

        #[test]
        fn invocation_errors_are_suppressed_as_not_merged() {
            let vcs = MockVcs::new();
            vcs.set_cherry_error("origin/a", VcsError::Spawn("no git".to_string()));
            let (remote, master, candidates) = setup(&["a", "b"]);
            let inspector = Inspector::new(&vcs, Verbosity::Normal);

            let merged = inspector.merged_refs(&remote, &master, &candidates);
            assert_eq!(names(&merged), vec!["b"]);
        }

        #[test]
        fn nonzero_exit_is_not_merged() {
            let vcs = MockVcs::new();
            vcs.set_cherry("origin/a", CommandOutput::failed(128, "fatal: unknown commit"));
            let (remote, master, candidates) = setup(&["a"]);
            let inspector = Inspector::new(&vcs, Verbosity::Normal);

            assert!(inspector.merged_refs(&remote, &master, &candidates).is_empty());
        }

        #[test]
        fn classification_is_idempotent() {
            let vcs = MockVcs::new();
            vcs.set_cherry("origin/b", CommandOutput::ok("+ abc\n"));
            let (remote, master, candidates) = setup(&["a", "b", "c"]);
            let inspector = Inspector::new(&vcs, Verbosity::Normal);

            let first = inspector.merged_refs(&remote, &master, &candidates);
            let second = inspector.merged_refs(&remote, &master, &candidates);
            assert_eq!(first, second);
            // No caching: every run asks git again.
            assert_eq!(vcs.operations().len(), 6);
        }

        #[test]
        fn verbosity_does_not_change_result() {
            let vcs = MockVcs::new();
            vcs.set_cherry("origin/a", CommandOutput::ok("+ abc\n"));
            let (remote, master, candidates) = setup(&["a", "b"]);

            let quiet = Inspector::new(&vcs, Verbosity::Quiet);
            let loud = Inspector::new(&vcs, Verbosity::Debug);
            assert_eq!(
                quiet.merged_refs(&remote, &master, &candidates),
                loud.merged_refs(&remote, &master, &candidates)
            );
        }

        #[test]
        fn uses_remote_name_for_both_endpoints() {
            let vcs = MockVcs::new();
            let master = RemoteRef::new("upstream", BranchName::new("main").unwrap());
            let topic = RemoteRef::new("upstream", BranchName::new("topic").unwrap());
            let remote = Remote::new("upstream", vec![master.clone(), topic.clone()]);

            let result = Inspector::new(&vcs, Verbosity::Normal).classify(&remote, &master, &topic);
            assert!(result.merged);
            assert_eq!(
                vcs.operations(),
                vec![MockOperation::Cherry {
                    upstream: "upstream/main".to_string(),
                    head: "upstream/topic".to_string(),
                }]
            );
        }
    }
}
