//! git-sweep - Clean up remote branches that are merged into master
//!
//! After a branch's changes land in master, its remote ref is clutter.
//! git-sweep finds such refs on one remote and, with confirmation, deletes
//! them there.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface layer (parses args, runs the pipeline)
//! - [`sweep`] - Remote resolution, candidate filtering, merge detection, deletion
//! - [`git`] - Repository reads via libgit2 and the `git` subprocess port
//! - [`core`] - Domain types
//! - [`ui`] - Output and prompts
//!
//! # Merge Detection
//!
//! A branch is merged when `git cherry <remote>/<master> <remote>/<branch>`
//! succeeds and lists no commit without a patch-equivalent on master. See
//! [`sweep::inspector`].

pub mod cli;
pub mod core;
pub mod git;
pub mod sweep;
pub mod ui;
