//! Interactive tie-breaking between search candidates.
//!
//! When a search is ambiguous the resolver hands the candidate list to an
//! [`InteractiveSelector`] and blocks until it returns an index. The selector
//! is injected, so tests can script choices and the CLI can prompt a user.

use std::fmt;
use std::io::{self, BufRead, Write};

use crate::metadata::SearchResult;

/// Display pair offered to a selector: a title and a year or `Unknown`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateOption {
    pub title: String,
    pub year: String,
}

impl CandidateOption {
    pub const UNKNOWN_YEAR: &'static str = "Unknown";
}

impl From<&SearchResult> for CandidateOption {
    fn from(result: &SearchResult) -> Self {
        Self {
            title: result.title.clone(),
            year: result
                .year()
                .map(|y| y.to_string())
                .unwrap_or_else(|| Self::UNKNOWN_YEAR.to_string()),
        }
    }
}

impl fmt::Display for CandidateOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.title, self.year)
    }
}

/// Chooses one candidate out of an ambiguous search result.
///
/// Implementations return a zero-based index into `options`. The call may
/// block for as long as it needs; the resolver imposes no timeout.
pub trait InteractiveSelector: Send + Sync {
    fn choose(&self, options: &[CandidateOption]) -> usize;
}

impl<F> InteractiveSelector for F
where
    F: Fn(&[CandidateOption]) -> usize + Send + Sync,
{
    fn choose(&self, options: &[CandidateOption]) -> usize {
        self(options)
    }
}

// ---------------------------------------------------------------------------
// Console selector
// ---------------------------------------------------------------------------

/// Prompts on stderr and reads a 1-based choice from stdin.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSelector;

impl InteractiveSelector for ConsoleSelector {
    fn choose(&self, options: &[CandidateOption]) -> usize {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        let mut stderr = io::stderr();
        prompt(options, &mut input, &mut stderr)
    }
}

/// Prompt until a valid choice is read. End of input (or a read error)
/// selects the first-ranked candidate.
fn prompt<R: BufRead, W: Write>(options: &[CandidateOption], input: &mut R, out: &mut W) -> usize {
    // Output errors are ignored: the prompt is best-effort.
    let _ = writeln!(out, "Multiple matches found:");
    for (i, option) in options.iter().enumerate() {
        let _ = writeln!(out, "  {}) {option}", i + 1);
    }

    loop {
        let _ = write!(out, "Select [1-{}]: ", options.len());
        let _ = out.flush();

        let mut line = String::new();
        match input.read_line(&mut line) {
            Ok(0) | Err(_) => {
                tracing::warn!("no selection read, using first result");
                return 0;
            }
            Ok(_) => {}
        }

        match line.trim().parse::<usize>() {
            Ok(n) if (1..=options.len()).contains(&n) => return n - 1,
            _ => {
                let _ = writeln!(out, "Please enter a number between 1 and {}", options.len());
            }
        }
    }
}
