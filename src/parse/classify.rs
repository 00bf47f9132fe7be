//! Line classification for DOORS-exported requirement documents.
//!
//! Document conventions, as exported:
//! - a line starting with a number is a heading (`1`, `1.1`, `1.2.2`, ...)
//! - a line that is exactly one `[SIGNAL]` token is a signal declaration;
//!   requirements may merely begin with one, which does not count
//! - a line starting with a tab is DOORS attribute data
//! - anything else starting in column one is requirement text
//!
//! The Input/Output section state is threaded through explicitly: the
//! classifier is a pure transition function over {None, Input, Output},
//! driven by heading text, sticky until the next qualifying heading.

use crate::core::{Direction, LineKind};
use crate::parse::extract;

/// Classify one line (trailing whitespace already stripped) and compute the
/// direction state that applies from this line onward.
pub fn classify_line(line: &str, state: Direction) -> (LineKind, Direction) {
    if line.is_empty() {
        return (LineKind::Blank, state);
    }
    if line.starts_with('\t') {
        return (LineKind::Attribute, state);
    }
    if extract::declaration_token(line).is_some() {
        return (LineKind::Signal, state);
    }
    if line.chars().next().is_some_and(|c| c.is_numeric()) {
        return (LineKind::Heading, heading_direction(line));
    }
    (LineKind::Requirement, state)
}

/// Direction opened by a heading. A heading mentioning both "Input" and
/// "Output", or neither, resets to `None`.
fn heading_direction(line: &str) -> Direction {
    let has_input = line.contains("Input");
    let has_output = line.contains("Output");
    match (has_input, has_output) {
        (true, false) => Direction::Input,
        (false, true) => Direction::Output,
        _ => Direction::None,
    }
}
