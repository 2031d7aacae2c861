//! Console output for hook status lines.

use colored::Colorize;

use crate::llm::StatusSink;

/// Prints status lines to the console.
///
/// Status goes to stdout (git shows hook stdout to the committer), warnings
/// go to stderr. Both carry the tool prefix so hook output is attributable.
pub struct ConsoleSink {
    colored: bool,
}

impl ConsoleSink {
    pub fn new(colored: bool) -> Self {
        Self { colored }
    }

    fn prefix(&self) -> String {
        if self.colored {
            "aicommit-rs:".cyan().bold().to_string()
        } else {
            "aicommit-rs:".to_string()
        }
    }
}

impl StatusSink for ConsoleSink {
    fn info(&self, line: &str) {
        println!("{} {}", self.prefix(), line);
    }

    fn warn(&self, line: &str) {
        eprintln!("{} {}", self.prefix(), line);
    }
}
