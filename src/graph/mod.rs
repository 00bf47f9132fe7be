//! Dependency derivation over the frozen fact store.
//!
//! A signal produced (Output) by one set of modules and consumed (Input) by
//! another connects every producer to every consumer. Aggregating those
//! attributions per ordered module pair yields a directed multigraph whose
//! edge weight is the number of distinct connecting signals. Self-edges are
//! excluded, as are signals lacking either producers or consumers. Facts
//! with direction `None` never contribute.

use crate::core::{Direction, EdgeReport, ModuleId, SignalId};
use crate::store::FactStore;
use std::collections::{BTreeMap, BTreeSet};

/// Distinct producing modules per signal. Repeated facts collapse into the
/// set, so a module appearing via multiple facts counts once.
pub fn producers(store: &FactStore) -> BTreeMap<SignalId, BTreeSet<ModuleId>> {
    modules_by_signal(store, Direction::Output)
}

/// Distinct consuming modules per signal.
pub fn consumers(store: &FactStore) -> BTreeMap<SignalId, BTreeSet<ModuleId>> {
    modules_by_signal(store, Direction::Input)
}

fn modules_by_signal(
    store: &FactStore,
    direction: Direction,
) -> BTreeMap<SignalId, BTreeSet<ModuleId>> {
    let mut map: BTreeMap<SignalId, BTreeSet<ModuleId>> = BTreeMap::new();
    for (signal, module) in store.facts_by_direction(direction) {
        map.entry(signal).or_default().insert(module);
    }
    map
}

/// Directed producer -> consumer multigraph keyed by module pair, each pair
/// carrying its deduplicated set of justifying signals.
#[derive(Debug, Default, Clone)]
pub struct DependencyGraph {
    edges: BTreeMap<(ModuleId, ModuleId), BTreeSet<SignalId>>,
}

impl DependencyGraph {
    /// Derive the full dependency graph.
    pub fn derive(store: &FactStore) -> Self {
        Self::build(store, false)
    }

    /// Derive the graph restricted to signals whose global consumer set has
    /// exactly one module, isolating unambiguous point-to-point links.
    pub fn derive_singular(store: &FactStore) -> Self {
        Self::build(store, true)
    }

    fn build(store: &FactStore, singular_only: bool) -> Self {
        let producers = producers(store);
        let consumers = consumers(store);
        let mut edges: BTreeMap<(ModuleId, ModuleId), BTreeSet<SignalId>> = BTreeMap::new();

        for (signal, produced_by) in &producers {
            let Some(consumed_by) = consumers.get(signal) else {
                continue;
            };
            if singular_only && consumed_by.len() != 1 {
                continue;
            }
            for &producer in produced_by {
                for &consumer in consumed_by {
                    if producer == consumer {
                        continue;
                    }
                    edges.entry((producer, consumer)).or_default().insert(*signal);
                }
            }
        }

        Self { edges }
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Sum of edge weights; equals the full per-signal row count.
    pub fn total_weight(&self) -> usize {
        self.edges.values().map(|signals| signals.len()).sum()
    }

    pub fn edges(
        &self,
    ) -> impl Iterator<Item = (&(ModuleId, ModuleId), &BTreeSet<SignalId>)> + '_ {
        self.edges.iter()
    }

    /// Resolve ids to names, sorted by producer then consumer (signal lists
    /// sorted too) so serialized output is reproducible regardless of store
    /// insertion order.
    pub fn to_reports(&self, store: &FactStore) -> Vec<EdgeReport> {
        let mut reports: Vec<EdgeReport> = self
            .edges
            .iter()
            .map(|(&(producer, consumer), signals)| {
                let mut names: Vec<String> = signals
                    .iter()
                    .map(|&s| store.signal_name(s).to_string())
                    .collect();
                names.sort();
                EdgeReport {
                    producer: store.module_name(producer).to_string(),
                    consumer: store.module_name(consumer).to_string(),
                    weight: names.len(),
                    signals: names,
                }
            })
            .collect();
        reports.sort_by(|a, b| {
            (a.producer.as_str(), a.consumer.as_str()).cmp(&(b.producer.as_str(), b.consumer.as_str()))
        });
        reports
    }
}
