//! sweep::remote
//!
//! Resolve a named remote on the repository.

use crate::core::types::RemoteRef;
use crate::git::Git;

use super::SweepError;

/// A configured remote and the remote-tracking refs it advertised at the
/// last fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Remote {
    /// Remote name, e.g. `origin`
    pub name: String,
    /// Remote-tracking refs, sorted by ref name
    pub refs: Vec<RemoteRef>,
}

impl Remote {
    /// Build a remote from already-known refs.
    pub fn new(name: impl Into<String>, refs: Vec<RemoteRef>) -> Self {
        Self {
            name: name.into(),
            refs,
        }
    }
}

/// Resolve `remote_name` on `git`.
///
/// The match is exact and case-sensitive. Refs are read fresh on every
/// call, so resolving again after a fetch picks up the fetched state.
///
/// # Errors
///
/// - [`SweepError::RemoteNotFound`] if no remote has this name
pub fn resolve_remote(git: &Git, remote_name: &str) -> Result<Remote, SweepError> {
    let known = git.remote_names()?;
    if !known.iter().any(|name| name == remote_name) {
        return Err(SweepError::RemoteNotFound {
            name: remote_name.to_string(),
        });
    }

    Ok(Remote {
        name: remote_name.to_string(),
        refs: git.remote_refs(remote_name)?,
    })
}
