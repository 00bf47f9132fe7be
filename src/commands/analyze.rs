use crate::cli;
use crate::config;
use crate::core::{AnalysisReport, AnalysisSummary, SignalWarning};
use crate::graph::DependencyGraph;
use crate::io::{self, DocumentWalker, GraphView};
use crate::parse::{self, SignalPolicy};
use crate::store::{sqlite, FactStore};
use anyhow::{Context, Result};
use chrono::Utc;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

pub struct AnalyzeConfig {
    pub path: PathBuf,
    pub format: cli::OutputFormat,
    pub output: Option<PathBuf>,
    pub singular: bool,
    pub database: Option<PathBuf>,
    pub policy: Option<SignalPolicy>,
    pub config: Option<PathBuf>,
}

pub fn handle_analyze(config: AnalyzeConfig) -> Result<()> {
    let file_config = config::load_config(config.config.as_deref())?;
    let policy = config.policy.unwrap_or(file_config.policy.signal_case);

    let documents = DocumentWalker::new(config.path.clone())
        .with_extensions(file_config.documents.extensions.clone())
        .with_ignore_patterns(file_config.documents.ignore.clone())
        .walk()
        .with_context(|| format!("Failed to scan {}", config.path.display()))?;

    if documents.is_empty() {
        log::warn!("no documents found under {}", config.path.display());
    }

    // Parse phase: one pass over every document, single writer into the
    // store; the store is read-only from here on.
    let mut store = FactStore::new();
    let mut warnings: Vec<SignalWarning> = Vec::new();
    for path in &documents {
        let doc = parse::parse_document(path, policy)?;
        log::info!(
            "{}: {} lines, {} facts",
            doc.module,
            doc.lines_scanned,
            doc.facts.len()
        );
        warnings.extend(doc.warnings.iter().cloned());
        store.ingest(&doc);
    }

    if let Some(db_path) = &config.database {
        sqlite::persist(&store, db_path)
            .with_context(|| format!("Failed to persist facts to {}", db_path.display()))?;
    }

    // Derivation phase: pure queries over the frozen facts.
    let report = build_report(&config.path, &store, warnings);

    let view = if config.singular {
        GraphView::Singular
    } else {
        GraphView::Full
    };
    let target: Box<dyn Write> = match &config.output {
        Some(path) => Box::new(
            File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?,
        ),
        None => Box::new(std::io::stdout()),
    };
    let mut writer = io::create_writer(config.format.into(), view, target);
    writer.write_report(&report)?;

    Ok(())
}

/// Derive both graphs and assemble the frozen analysis report.
pub fn build_report(
    root: &std::path::Path,
    store: &FactStore,
    warnings: Vec<SignalWarning>,
) -> AnalysisReport {
    let full = DependencyGraph::derive(store);
    let singular = DependencyGraph::derive_singular(store);
    AnalysisReport {
        root: root.to_path_buf(),
        generated_at: Utc::now(),
        summary: AnalysisSummary {
            modules: store.module_count(),
            signals: store.signal_count(),
            facts: store.fact_count(),
            edges: full.edge_count(),
            singular_edges: singular.edge_count(),
        },
        edges: full.to_reports(store),
        singular_edges: singular.to_reports(store),
        warnings,
        quiet_modules: store.modules_without_signals(),
    }
}
