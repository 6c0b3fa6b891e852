//! Human-readable progress lines.
//!
//! Progress goes to stdout, the single failure line to stderr. Neither is a
//! structured log; `tracing` output is separate and off by default.

/// Console printer honouring `--quiet`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Console {
    quiet: bool,
}

impl Console {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// Print a progress line unless quiet.
    pub fn status(&self, msg: impl std::fmt::Display) {
        if !self.quiet {
            println!("{msg}");
        }
    }

    /// Print the failure line. Always shown.
    pub fn error(&self, err: &anyhow::Error) {
        eprintln!("Error scraping memos: {err:#}");
    }
}
