//! Commit message sanitization.
//!
//! Post-processing of externally-produced text into a single safe,
//! bounded-length line. Every message the composer returns funnels through
//! this one step.

use crate::constants::message::{GENERIC_FALLBACK_MESSAGE, MAX_LENGTH};

/// Sanitize provider-returned text into a valid commit message.
///
/// Takes only the first line, strips a leading run of quote / backtick /
/// dash / asterisk / backslash / whitespace characters (LLMs like to bullet
/// or quote their answers), and truncates to [`MAX_LENGTH`] characters on a
/// char boundary. An empty result is replaced with the generic fallback.
pub fn sanitize_message(text: &str) -> String {
    let first_line = text.lines().next().unwrap_or("").trim();

    let stripped = first_line.trim_start_matches(|c: char| {
        matches!(c, '"' | '\'' | '`' | '-' | '*' | '\\') || c.is_whitespace()
    });

    let bounded: String = stripped.chars().take(MAX_LENGTH).collect();

    if bounded.is_empty() {
        GENERIC_FALLBACK_MESSAGE.to_string()
    } else {
        bounded
    }
}
