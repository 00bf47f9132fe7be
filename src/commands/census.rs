use crate::cli::CensusFormat;
use crate::config;
use crate::io::{self, DocumentWalker};
use crate::parse::{self, extract_tokens, ExtractionMode};
use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

pub struct CensusConfig {
    pub path: PathBuf,
    pub format: CensusFormat,
    pub config: Option<PathBuf>,
}

/// One census entry: a bracketed token and the modules mentioning it.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CensusEntry {
    pub signal: String,
    pub modules: Vec<String>,
}

/// Flat signal census: every bracketed token anywhere in any document,
/// regardless of line structure or section. Answers "which signals exist
/// and who mentions them", not "who produces or consumes what".
pub fn handle_census(config: CensusConfig) -> Result<()> {
    let file_config = config::load_config(config.config.as_deref())?;
    let documents = DocumentWalker::new(config.path.clone())
        .with_extensions(file_config.documents.extensions.clone())
        .with_ignore_patterns(file_config.documents.ignore.clone())
        .walk()
        .with_context(|| format!("Failed to scan {}", config.path.display()))?;

    let mut census: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    for path in &documents {
        let module = parse::module_name_for(path);
        let content = io::read_file(path)
            .with_context(|| format!("Failed to read document {}", path.display()))?;
        for line in content.lines() {
            for token in extract_tokens(line.trim_end(), ExtractionMode::Census) {
                census.entry(token.full).or_default().insert(module.clone());
            }
        }
    }

    let entries: Vec<CensusEntry> = census
        .into_iter()
        .map(|(signal, modules)| CensusEntry {
            signal,
            modules: modules.into_iter().collect(),
        })
        .collect();

    match config.format {
        CensusFormat::Terminal => print_census(&entries),
        CensusFormat::Json => println!("{}", serde_json::to_string_pretty(&entries)?),
    }
    Ok(())
}

fn print_census(entries: &[CensusEntry]) {
    println!("Total signals: {}", entries.len());
    for entry in entries {
        println!(
            "  {} ({} module{}): {}",
            entry.signal,
            entry.modules.len(),
            if entry.modules.len() == 1 { "" } else { "s" },
            entry.modules.join(", ")
        );
    }
}
