//! Non-fatal diagnostics and the interface used to surface them
//!
//! The core never writes to the console itself. Anything worth telling the user that
//! does not stop the computation is handed to a [`Reporter`]; the binary prints it to
//! stderr, tests and the browser binding collect it.

use std::fmt;

/// A non-fatal observation made while reading the input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// `keys.n` disagrees with the number of share entries found
    ShareCountMismatch {
        /// the declared `n`
        declared: usize,
        /// the number of entries recognized as shares
        found: usize,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShareCountMismatch { declared, found } => {
                write!(f, "keys.n = {declared} but found {found} points in JSON")
            }
        }
    }
}

/// Sink for diagnostics
pub trait Reporter {
    /// Records a diagnostic
    fn report(&mut self, diagnostic: Diagnostic);
}

/// Collects diagnostics in order
impl Reporter for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// Prints each diagnostic to stderr as a warning
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrReporter;

impl Reporter for StderrReporter {
    fn report(&mut self, diagnostic: Diagnostic) {
        tracing::debug!(%diagnostic, "reporting input diagnostic");
        eprintln!("Warning: {diagnostic}");
    }
}
