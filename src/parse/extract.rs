//! Bracket-delimited token extraction.
//!
//! Signals are declared as `[NAME]`. The scan is non-greedy and non-nested:
//! each `[` pairs with the next `]`, left to right. Two extraction modes
//! answer different questions: `Census` collects every bracketed token on a
//! line for a flat signal census, while `Declaration` only accepts a line
//! that consists of exactly one bracketed token.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static BRACKET_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[(.*?)\]").unwrap());

/// Census tokens longer than this (brackets included) are discarded as
/// artifacts of unbalanced brackets in requirement prose.
pub const MAX_CENSUS_TOKEN_LEN: usize = 100;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExtractionMode {
    /// Every bracketed token anywhere on a line.
    Census,
    /// A line that is entirely one bracketed token.
    Declaration,
}

/// How bracketed tokens with lowercase inner text are treated.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SignalPolicy {
    /// Lowercase-bearing tokens are non-signal annotations: excluded from
    /// the fact set and reported as warnings.
    Strict,
    /// Any bracketed token counts as a signal.
    Lenient,
}

/// One bracketed token found on a line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BracketToken {
    /// The literal bracketed text, brackets included.
    pub full: String,
    /// The text between the brackets.
    pub inner: String,
}

/// All bracketed tokens on a line, in left-to-right order.
pub fn bracket_tokens(line: &str) -> Vec<BracketToken> {
    BRACKET_PATTERN
        .captures_iter(line)
        .map(|cap| BracketToken {
            full: cap[0].to_string(),
            inner: cap[1].to_string(),
        })
        .collect()
}

/// Census-mode extraction: every token on the line, oversized tokens
/// discarded.
pub fn census_tokens(line: &str) -> Vec<BracketToken> {
    bracket_tokens(line)
        .into_iter()
        .filter(|tok| tok.full.len() < MAX_CENSUS_TOKEN_LEN)
        .collect()
}

/// Extract tokens from a line under the given mode.
pub fn extract(line: &str, mode: ExtractionMode) -> Vec<BracketToken> {
    match mode {
        ExtractionMode::Census => census_tokens(line),
        ExtractionMode::Declaration => declaration_token(line).into_iter().collect(),
    }
}

/// Declaration-mode extraction: `Some` iff the line is exactly one bracketed
/// token spanning the whole line.
pub fn declaration_token(line: &str) -> Option<BracketToken> {
    let tokens = bracket_tokens(line);
    match tokens.as_slice() {
        [only] if only.full == line => Some(only.clone()),
        _ => None,
    }
}

/// Signal-case heuristic: real signal names are all-uppercase; lowercase
/// letters mark an annotation.
pub fn passes_policy(inner: &str, policy: SignalPolicy) -> bool {
    match policy {
        SignalPolicy::Lenient => true,
        SignalPolicy::Strict => !inner.chars().any(|c| c.is_lowercase()),
    }
}
