pub mod classify;
pub mod extract;

pub use classify::classify_line;
pub use extract::{
    bracket_tokens, census_tokens, declaration_token, extract as extract_tokens, BracketToken,
    ExtractionMode, SignalPolicy,
};

use crate::core::errors::{Error, Result};
use crate::core::{Direction, LineKind, SignalWarning};
use std::fs;
use std::path::Path;

/// One signal declaration observed in a document, before store ingestion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawFact {
    pub signal: String,
    pub direction: Direction,
    pub line: usize,
}

/// Everything extracted from a single document in one pass.
#[derive(Clone, Debug)]
pub struct ParsedDocument {
    pub module: String,
    pub facts: Vec<RawFact>,
    pub warnings: Vec<SignalWarning>,
    pub lines_scanned: usize,
}

impl ParsedDocument {
    pub fn has_signals(&self) -> bool {
        !self.facts.is_empty()
    }
}

/// Module name for a document path: base name before the first `.`,
/// upper-cased.
pub fn module_name_for(path: &Path) -> String {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let base = file_name.split('.').next().unwrap_or(&file_name);
    base.to_uppercase()
}

/// Read and parse one document from disk.
pub fn parse_document(path: &Path, policy: SignalPolicy) -> Result<ParsedDocument> {
    let content =
        fs::read_to_string(path).map_err(|source| Error::document(path.to_path_buf(), source))?;
    Ok(parse_lines(module_name_for(path), content.lines(), policy))
}

/// Parse one module's line stream. The line counter covers every raw line,
/// blank and attribute lines included, so recorded line numbers match
/// document positions. Direction state starts at `None` and is updated only
/// by heading lines.
pub fn parse_lines<'a, I>(module: String, lines: I, policy: SignalPolicy) -> ParsedDocument
where
    I: IntoIterator<Item = &'a str>,
{
    let mut state = Direction::None;
    let mut facts = Vec::new();
    let mut warnings = Vec::new();
    let mut line_count = 0;

    for raw in lines {
        line_count += 1;
        let line = raw.trim_end();
        let (kind, next_state) = classify_line(line, state);
        state = next_state;

        if kind != LineKind::Signal {
            continue;
        }
        // classify_line only yields Signal when the whole line is one token
        let token = declaration_token(line).expect("signal line has a declaration token");
        if extract::passes_policy(&token.inner, policy) {
            log::debug!("{module}:{line_count}: {} ({state})", token.full);
            facts.push(RawFact {
                signal: token.full,
                direction: state,
                line: line_count,
            });
        } else {
            log::debug!("{module}:{line_count}: rejected {}", token.full);
            warnings.push(SignalWarning {
                module: module.clone(),
                line: line_count,
                token: token.full,
            });
        }
    }

    ParsedDocument {
        module,
        facts,
        warnings,
        lines_scanned: line_count,
    }
}
