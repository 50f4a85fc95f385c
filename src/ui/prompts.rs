//! ui::prompts
//!
//! Interactive confirmation.
//!
//! # Design
//!
//! The answer is read as one line. Anything starting with `y` or `Y` is a
//! yes; every other answer, including an empty line or end of input, is a
//! no. There is no TTY check: piping `y` into the command is a valid way to
//! confirm.

use std::io::{self, BufRead, Write};

use thiserror::Error;

/// Errors from prompts.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("failed to read answer: {0}")]
    Io(#[from] io::Error),
}

/// Whether an answer counts as "yes".
///
/// # Example
///
/// ```
/// use gitsweep::ui::prompts::is_affirmative;
///
/// assert!(is_affirmative("y"));
/// assert!(is_affirmative("Yes please"));
/// assert!(!is_affirmative("n"));
/// assert!(!is_affirmative(""));
/// ```
pub fn is_affirmative(answer: &str) -> bool {
    answer.starts_with(['y', 'Y'])
}

/// Write `message` to `output`, then read one line from `input` and
/// interpret it with [`is_affirmative`].
pub fn confirm_with<R: BufRead, W: Write>(
    message: &str,
    input: &mut R,
    output: &mut W,
) -> Result<bool, PromptError> {
    write!(output, "{}", message)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(is_affirmative(&line))
}

/// Prompt on stdout and read the answer from stdin.
pub fn confirm(message: &str) -> Result<bool, PromptError> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    confirm_with(message, &mut input, &mut io::stdout())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer(text: &str) -> (bool, String) {
        let mut input = io::Cursor::new(text.as_bytes().to_vec());
        let mut output = Vec::new();
        let yes = confirm_with("Delete these branches? (y/n) ", &mut input, &mut output).unwrap();
        (yes, String::from_utf8(output).unwrap())
    }

    #[test]
    fn yes_answers() {
        for text in ["y\n", "Y\n", "yes\n", "YES\n", "yep"] {
            assert!(answer(text).0, "{text:?} should confirm");
        }
    }

    #[test]
    fn other_answers_decline() {
        for text in ["n\n", "no\n", "\n", "", " y\n", "maybe y\n", "q\n"] {
            assert!(!answer(text).0, "{text:?} should decline");
        }
    }

    #[test]
    fn prompt_is_written_without_newline() {
        let (_, written) = answer("n\n");
        assert_eq!(written, "Delete these branches? (y/n) ");
    }
}
