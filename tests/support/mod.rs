//! Shared fixture: a bare "remote" repository and a working clone of it.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// A bare remote plus a clone with `master` pushed to it.
pub struct RemoteFixture {
    dir: TempDir,
    work: PathBuf,
}

impl RemoteFixture {
    /// Create the remote and clone, with one initial commit on master.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");

        run_git(dir.path(), &["init", "--bare", "remote.git"]);
        run_git(dir.path(), &["clone", "remote.git", "work"]);

        let work = dir.path().join("work");
        let fixture = Self { dir, work };
        let work = fixture.work();
        run_git(work, &["symbolic-ref", "HEAD", "refs/heads/master"]);
        run_git(work, &["config", "user.email", "test@example.com"]);
        run_git(work, &["config", "user.name", "Test User"]);
        run_git(work, &["config", "commit.gpgsign", "false"]);

        fixture.commit_file("README.md", "# Test Repo\n", "Initial commit");
        run_git(work, &["push", "origin", "master"]);
        fixture
    }

    /// Root of the temp directory (not a repository).
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// The working clone.
    pub fn work(&self) -> &Path {
        &self.work
    }

    /// The bare remote.
    pub fn remote(&self) -> PathBuf {
        self.dir.path().join("remote.git")
    }

    pub fn commit_file(&self, path: &str, content: &str, message: &str) {
        std::fs::write(self.work().join(path), content).unwrap();
        run_git(self.work(), &["add", path]);
        run_git(self.work(), &["commit", "-m", message]);
    }

    /// Branch from master, add one commit, push it. Leaves master checked out.
    pub fn push_branch(&self, name: &str) {
        run_git(self.work(), &["checkout", "-b", name, "master"]);
        self.commit_file(&format!("{}.txt", name), name, &format!("Work on {}", name));
        run_git(self.work(), &["push", "origin", name]);
        run_git(self.work(), &["checkout", "master"]);
    }

    /// Push a branch and merge it back into master with a merge commit.
    pub fn merged_branch(&self, name: &str) {
        self.push_branch(name);
        run_git(
            self.work(),
            &["merge", "--no-ff", "-m", &format!("Merge {}", name), name],
        );
        run_git(self.work(), &["push", "origin", "master"]);
    }

    /// Push a branch and cherry-pick its commit onto master.
    pub fn cherry_picked_branch(&self, name: &str) {
        self.push_branch(name);
        // Move master first so the picked commit gets a different id.
        self.commit_file("CHANGELOG.md", name, &format!("Prepare {}", name));
        run_git(self.work(), &["cherry-pick", name]);
        run_git(self.work(), &["push", "origin", "master"]);
    }

    /// Branch names present on the bare remote.
    pub fn remote_branches(&self) -> Vec<String> {
        let output = Command::new("git")
            .args(["for-each-ref", "--format=%(refname:short)", "refs/heads"])
            .current_dir(self.remote())
            .output()
            .expect("git for-each-ref failed");
        String::from_utf8(output.stdout)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// Delete a branch directly on the remote, leaving the clone's
    /// remote-tracking ref stale.
    pub fn delete_on_remote(&self, name: &str) {
        run_git(&self.remote(), &["branch", "-D", name]);
    }
}

/// Run a git command in the given directory.
pub fn run_git(dir: &Path, args: &[&str]) {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("git command failed");

    if !output.status.success() {
        panic!(
            "git {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
    }
}
