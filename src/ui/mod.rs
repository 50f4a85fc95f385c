//! ui
//!
//! User interaction utilities.
//!
//! # Modules
//!
//! - [`prompts`] - Yes/no confirmation
//! - [`output`] - Verbosity-aware output
//!
//! # Design
//!
//! All output and prompts go through this module so verbosity flags are
//! applied consistently.

pub mod output;
pub mod prompts;
