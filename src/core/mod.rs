pub mod errors;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Row index into the fact store's module table.
pub type ModuleId = usize;

/// Row index into the fact store's signal table.
pub type SignalId = usize;

/// Section classification applied to signal declarations until the next
/// qualifying heading changes it.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Direction {
    None,
    Input,
    Output,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Direction::None => "None",
            Direction::Input => "Input",
            Direction::Output => "Output",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "None" => Ok(Direction::None),
            "Input" => Ok(Direction::Input),
            "Output" => Ok(Direction::Output),
            other => Err(format!("unknown direction: {other}")),
        }
    }
}

/// Category assigned to one document line by the classifier.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum LineKind {
    Blank,
    Attribute,
    Signal,
    Heading,
    Requirement,
}

/// One source document, identified by its upper-cased base name.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ModuleRecord {
    pub name: String,
    /// True once at least one signal fact has been recorded for the module.
    pub has_signals: bool,
}

/// A named entity declared via bracket notation. The name is the literal
/// bracketed text, brackets included, case-sensitive.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SignalRecord {
    pub name: String,
}

/// An observed "module M declares signal S in direction D at line L" fact.
/// Line numbers are 1-based raw positions within the document.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ModuleSignalFact {
    pub module: ModuleId,
    pub signal: SignalId,
    pub direction: Direction,
    pub line: usize,
}

/// A bracketed token rejected by the strict signal-case policy.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SignalWarning {
    pub module: String,
    pub line: usize,
    pub token: String,
}

impl std::fmt::Display for SignalWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}: non-signal annotation {}",
            self.module, self.line, self.token
        )
    }
}

/// One directed producer -> consumer edge with its justifying signals.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct EdgeReport {
    pub producer: String,
    pub consumer: String,
    /// Distinct signal names carried by this edge, sorted.
    pub signals: Vec<String>,
    /// Edge weight: number of distinct signals.
    pub weight: usize,
}

#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct AnalysisSummary {
    pub modules: usize,
    pub signals: usize,
    pub facts: usize,
    pub edges: usize,
    pub singular_edges: usize,
}

/// Full result of one analysis run, frozen after the derivation phase.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub root: PathBuf,
    pub generated_at: DateTime<Utc>,
    pub summary: AnalysisSummary,
    pub edges: Vec<EdgeReport>,
    pub singular_edges: Vec<EdgeReport>,
    pub warnings: Vec<SignalWarning>,
    /// Modules that declared no signals at all.
    pub quiet_modules: Vec<String>,
}
