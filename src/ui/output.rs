//! ui::output
//!
//! Output formatting and display.
//!
//! # Design
//!
//! All user-facing text goes through these helpers so that `--quiet`,
//! `--verbose` and `--debug` are honored in one place. Results go to stdout;
//! debug lines and errors go to stderr.

use std::fmt::Display;
use std::io::Write;

/// Output verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    /// Quiet mode - results and errors only
    Quiet,
    /// Normal mode - standard output
    Normal,
    /// Verbose mode - per-branch progress
    Verbose,
    /// Debug mode - also echoes every git command
    Debug,
}

impl Verbosity {
    /// Create verbosity from flags. Quiet wins over the others.
    pub fn from_flags(quiet: bool, verbose: bool, debug: bool) -> Self {
        if quiet {
            Verbosity::Quiet
        } else if debug {
            Verbosity::Debug
        } else if verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        }
    }
}

/// Print a result line. Always shown.
pub fn result(message: impl Display) {
    println!("{}", message);
}

/// Print a message (respects quiet mode).
pub fn print(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        println!("{}", message);
    }
}

/// Print without a trailing newline and flush, for progress that is
/// completed later on the same line (respects quiet mode).
pub fn print_inline(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        print!("{}", message);
        let _ = std::io::stdout().flush();
    }
}

/// Print a progress message (verbose and debug modes only).
pub fn verbose(message: impl Display, verbosity: Verbosity) {
    if verbosity >= Verbosity::Verbose {
        println!("{}", message);
    }
}

/// Print a debug message (only in debug mode).
pub fn debug(message: impl Display, verbosity: Verbosity) {
    if verbosity == Verbosity::Debug {
        eprintln!("[debug] {}", message);
    }
}

/// Print an error message (always shown).
pub fn error(message: impl Display) {
    eprintln!("{}", message);
}

/// Format a list of items, one per line.
pub fn format_list<T: Display>(items: &[T], prefix: &str) -> String {
    items
        .iter()
        .map(|item| format!("{}{}", prefix, item))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_from_flags() {
        assert_eq!(Verbosity::from_flags(false, false, false), Verbosity::Normal);
        assert_eq!(Verbosity::from_flags(false, true, false), Verbosity::Verbose);
        assert_eq!(Verbosity::from_flags(false, true, true), Verbosity::Debug);
        assert_eq!(Verbosity::from_flags(true, true, true), Verbosity::Quiet);
    }

    #[test]
    fn verbosity_ordering() {
        assert!(Verbosity::Quiet < Verbosity::Normal);
        assert!(Verbosity::Verbose < Verbosity::Debug);
    }

    #[test]
    fn format_list_prefixes_each_item() {
        assert_eq!(format_list(&["a", "b"], "  "), "  a\n  b");
        assert_eq!(format_list::<&str>(&[], "  "), "");
    }
}
