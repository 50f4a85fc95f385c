//! core
//!
//! Core domain types for git-sweep.
//!
//! # Modules
//!
//! - [`types`] - Strong types: BranchName, RemoteRef
//!
//! # Design Principles
//!
//! - Branch names are validated once, at the boundary

pub mod types;
