//! Relational store for modules, signals, and module/signal facts.
//!
//! The store is the single aggregation point for the parse phase: documents
//! are parsed into per-module fact lists and appended here by one writer,
//! then the store is treated as read-only while graphs are derived. Facts
//! are never deduplicated on insert; derivation collapses them into sets.

pub mod sqlite;

use crate::core::{Direction, ModuleId, ModuleRecord, ModuleSignalFact, SignalId, SignalRecord};
use crate::parse::ParsedDocument;
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct FactStore {
    modules: Vec<ModuleRecord>,
    module_index: HashMap<String, ModuleId>,
    signals: Vec<SignalRecord>,
    signal_index: HashMap<String, SignalId>,
    facts: Vec<ModuleSignalFact>,
}

impl FactStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the module's id, creating the record (has_signals = false) on
    /// first encounter. Names are unique; repeats return the existing id.
    pub fn get_or_create_module(&mut self, name: &str) -> ModuleId {
        if let Some(&id) = self.module_index.get(name) {
            return id;
        }
        let id = self.modules.len();
        self.modules.push(ModuleRecord {
            name: name.to_string(),
            has_signals: false,
        });
        self.module_index.insert(name.to_string(), id);
        id
    }

    /// Return the signal's id, creating the record on first occurrence
    /// across any module. Names are case-sensitive.
    pub fn get_or_create_signal(&mut self, name: &str) -> SignalId {
        if let Some(&id) = self.signal_index.get(name) {
            return id;
        }
        let id = self.signals.len();
        self.signals.push(SignalRecord {
            name: name.to_string(),
        });
        self.signal_index.insert(name.to_string(), id);
        id
    }

    /// Append one fact and flip the owning module's has_signals flag. The
    /// store keeps every fact, line-level duplicates included.
    pub fn record_fact(
        &mut self,
        module: ModuleId,
        signal: SignalId,
        direction: Direction,
        line: usize,
    ) {
        self.modules[module].has_signals = true;
        self.facts.push(ModuleSignalFact {
            module,
            signal,
            direction,
            line,
        });
    }

    /// Ingest one parsed document: the module record is created even when
    /// the document declared nothing.
    pub fn ingest(&mut self, doc: &ParsedDocument) {
        let module_id = self.get_or_create_module(&doc.module);
        for fact in &doc.facts {
            let signal_id = self.get_or_create_signal(&fact.signal);
            self.record_fact(module_id, signal_id, fact.direction, fact.line);
        }
    }

    /// (signal, module) pairs for every fact with the given direction.
    pub fn facts_by_direction(
        &self,
        direction: Direction,
    ) -> impl Iterator<Item = (SignalId, ModuleId)> + '_ {
        self.facts
            .iter()
            .filter(move |fact| fact.direction == direction)
            .map(|fact| (fact.signal, fact.module))
    }

    pub fn module_name(&self, id: ModuleId) -> &str {
        &self.modules[id].name
    }

    pub fn signal_name(&self, id: SignalId) -> &str {
        &self.signals[id].name
    }

    pub fn modules(&self) -> &[ModuleRecord] {
        &self.modules
    }

    pub fn signals(&self) -> &[SignalRecord] {
        &self.signals
    }

    pub fn facts(&self) -> &[ModuleSignalFact] {
        &self.facts
    }

    pub fn module_count(&self) -> usize {
        self.modules.len()
    }

    pub fn signal_count(&self) -> usize {
        self.signals.len()
    }

    pub fn fact_count(&self) -> usize {
        self.facts.len()
    }

    /// Names of modules that never recorded a signal fact, sorted.
    pub fn modules_without_signals(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .modules
            .iter()
            .filter(|m| !m.has_signals)
            .map(|m| m.name.clone())
            .collect();
        names.sort();
        names
    }
}
