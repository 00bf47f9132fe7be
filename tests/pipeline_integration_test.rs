//! End-to-end pipeline tests over on-disk document corpora: discovery,
//! parsing, fact aggregation, graph derivation, and writer output.

use sigmap::commands::analyze::build_report;
use sigmap::io::writers::{CsvWriter, ReportWriter};
use sigmap::io::{find_documents, GraphView};
use sigmap::{DependencyGraph, Direction, FactStore, SignalPolicy};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_corpus(dir: &Path, files: &[(&str, &str)]) {
    for (name, content) in files {
        fs::write(dir.join(name), content).unwrap();
    }
}

fn analyze(dir: &Path, policy: SignalPolicy) -> (FactStore, Vec<sigmap::SignalWarning>) {
    let documents = find_documents(dir, vec!["txt".to_string()]).unwrap();
    let mut store = FactStore::new();
    let mut warnings = Vec::new();
    for path in &documents {
        let doc = sigmap::parse_document(path, policy).unwrap();
        warnings.extend(doc.warnings.iter().cloned());
        store.ingest(&doc);
    }
    (store, warnings)
}

#[test]
fn single_producer_single_consumer_forms_one_edge() {
    let dir = TempDir::new().unwrap();
    write_corpus(
        dir.path(),
        &[
            ("ALPHA.txt", "1 Outputs\n[SIG1]\n"),
            ("BETA.txt", "1 Inputs\n[SIG1]\n"),
        ],
    );

    let (store, warnings) = analyze(dir.path(), SignalPolicy::Strict);
    assert!(warnings.is_empty());

    let graph = DependencyGraph::derive(&store);
    let reports = graph.to_reports(&store);
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].producer, "ALPHA");
    assert_eq!(reports[0].consumer, "BETA");
    assert_eq!(reports[0].weight, 1);

    let mut buf = Vec::new();
    CsvWriter::new(&mut buf, GraphView::Full)
        .write_report(&build_report(dir.path(), &store, vec![]))
        .unwrap();
    let csv = String::from_utf8(buf).unwrap();
    assert_eq!(csv, "HLR_Out,HLR_In,Signals\nALPHA,BETA,[SIG1]\n");
}

#[test]
fn broadcast_signal_excluded_from_singular_view() {
    let dir = TempDir::new().unwrap();
    write_corpus(
        dir.path(),
        &[
            ("ALPHA.txt", "1 Outputs\n[SIG1]\n"),
            ("BETA.txt", "1 Inputs\n[SIG1]\n"),
            ("GAMMA.txt", "1 Inputs\n[SIG1]\n"),
        ],
    );

    let (store, _) = analyze(dir.path(), SignalPolicy::Strict);
    let full = DependencyGraph::derive(&store);
    let reports = full.to_reports(&store);
    assert_eq!(reports.len(), 2);
    let consumers: Vec<&str> = reports.iter().map(|e| e.consumer.as_str()).collect();
    assert_eq!(consumers, vec!["BETA", "GAMMA"]);
    assert!(reports.iter().all(|e| e.weight == 1));

    // SIG1 has two consumers, so the singular view is empty.
    assert!(DependencyGraph::derive_singular(&store).is_empty());
}

#[test]
fn lowercase_token_reported_and_excluded_under_strict() {
    let dir = TempDir::new().unwrap();
    write_corpus(
        dir.path(),
        &[
            ("ALPHA.txt", "1 Outputs\n[sig2]\n"),
            ("BETA.txt", "1 Inputs\n[sig2]\n"),
        ],
    );

    let (store, warnings) = analyze(dir.path(), SignalPolicy::Strict);
    assert_eq!(store.signal_count(), 0);
    assert!(DependencyGraph::derive(&store).is_empty());
    assert_eq!(warnings.len(), 2);
    assert_eq!(warnings[0].token, "[sig2]");
    // both modules stayed signal-free
    assert_eq!(store.modules_without_signals().len(), 2);

    // Lenient policy records the same corpus as a real flow.
    let (store, warnings) = analyze(dir.path(), SignalPolicy::Lenient);
    assert!(warnings.is_empty());
    assert_eq!(DependencyGraph::derive(&store).edge_count(), 1);
}

#[test]
fn ambiguous_heading_neutralizes_following_signals() {
    let dir = TempDir::new().unwrap();
    write_corpus(
        dir.path(),
        &[
            ("ALPHA.txt", "1.2 Inputs and Outputs\n[SIG1]\n"),
            ("BETA.txt", "1 Inputs\n[SIG1]\n"),
        ],
    );

    let (store, _) = analyze(dir.path(), SignalPolicy::Strict);
    // The fact is recorded, with direction None.
    assert_eq!(store.fact_count(), 2);
    assert_eq!(store.facts_by_direction(Direction::None).count(), 1);
    // It feeds neither producers nor consumers: no edges.
    assert!(sigmap::producers(&store).is_empty());
    assert!(DependencyGraph::derive(&store).is_empty());
}

#[test]
fn csv_row_count_equals_sum_of_edge_weights() {
    let dir = TempDir::new().unwrap();
    write_corpus(
        dir.path(),
        &[
            (
                "ALPHA.txt",
                "1 Outputs\n[SIG1]\n[SIG2]\n[SIG3]\n",
            ),
            ("BETA.txt", "1 Inputs\n[SIG1]\n[SIG2]\n"),
            ("GAMMA.txt", "1 Inputs\n[SIG2]\n[SIG3]\n1.1 Outputs\n[SIG4]\n"),
            ("DELTA.txt", "1 Inputs\n[SIG4]\n"),
        ],
    );

    let (store, _) = analyze(dir.path(), SignalPolicy::Strict);
    let graph = DependencyGraph::derive(&store);

    let mut buf = Vec::new();
    CsvWriter::new(&mut buf, GraphView::Full)
        .write_report(&build_report(dir.path(), &store, vec![]))
        .unwrap();
    let csv = String::from_utf8(buf).unwrap();
    let data_rows = csv.lines().count() - 1;
    assert_eq!(data_rows, graph.total_weight());
    assert!(data_rows > 0);
}

#[test]
fn module_appears_even_when_document_is_signal_free() {
    let dir = TempDir::new().unwrap();
    write_corpus(
        dir.path(),
        &[
            ("ALPHA.txt", "1 Overview\nPlain requirement text.\n"),
            ("BETA.txt", "1 Inputs\n[SIG1]\n"),
        ],
    );

    let (store, _) = analyze(dir.path(), SignalPolicy::Strict);
    assert_eq!(store.module_count(), 2);
    assert_eq!(store.modules_without_signals(), vec!["ALPHA".to_string()]);
}

#[test]
fn derivation_is_idempotent_over_a_frozen_store() {
    let dir = TempDir::new().unwrap();
    write_corpus(
        dir.path(),
        &[
            ("ALPHA.txt", "1 Outputs\n[SIG1]\n[SIG1]\n"),
            ("BETA.txt", "1 Inputs\n[SIG1]\n"),
        ],
    );

    let (store, _) = analyze(dir.path(), SignalPolicy::Strict);
    let first = DependencyGraph::derive(&store).to_reports(&store);
    let second = DependencyGraph::derive(&store).to_reports(&store);
    assert_eq!(first, second);
    assert_eq!(first[0].weight, 1);
}
