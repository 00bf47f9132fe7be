// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod graph;
pub mod io;
pub mod parse;
pub mod store;

// Re-export commonly used types
pub use crate::core::{
    AnalysisReport, AnalysisSummary, Direction, EdgeReport, LineKind, ModuleId, ModuleRecord,
    ModuleSignalFact, SignalId, SignalRecord, SignalWarning,
};

pub use crate::parse::{
    bracket_tokens, census_tokens, classify_line, declaration_token, parse_document, parse_lines,
    BracketToken, ExtractionMode, ParsedDocument, RawFact, SignalPolicy,
};

pub use crate::graph::{consumers, producers, DependencyGraph};

pub use crate::io::{create_writer, GraphView, OutputFormat, ReportWriter};

pub use crate::store::FactStore;
