//! CLI-level tests: drive the sigmap binary against tempdir corpora and
//! assert on emitted files and stdout.

use assert_cmd::Command;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn sigmap() -> Command {
    Command::cargo_bin("sigmap").unwrap()
}

fn write_corpus(dir: &Path) {
    fs::write(dir.join("ALPHA.txt"), "1 Outputs\n[SIG1]\n[SIG2]\n").unwrap();
    fs::write(dir.join("BETA.txt"), "1 Inputs\n[SIG1]\n[SIG2]\n").unwrap();
    fs::write(dir.join("GAMMA.txt"), "1 Inputs\n[SIG1]\n").unwrap();
}

#[test]
fn analyze_csv_to_stdout() {
    let dir = TempDir::new().unwrap();
    write_corpus(dir.path());

    let output = sigmap()
        .args(["analyze", "--format", "csv"])
        .arg(dir.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[0], "HLR_Out,HLR_In,Signals");
    assert!(lines.contains(&"ALPHA,BETA,[SIG1]"));
    assert!(lines.contains(&"ALPHA,BETA,[SIG2]"));
    assert!(lines.contains(&"ALPHA,GAMMA,[SIG1]"));
    assert_eq!(lines.len(), 4);
}

#[test]
fn analyze_singular_csv_restricts_to_single_consumer_signals() {
    let dir = TempDir::new().unwrap();
    write_corpus(dir.path());

    let output = sigmap()
        .args(["analyze", "--format", "csv", "--singular"])
        .arg(dir.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    // SIG1 is consumed by BETA and GAMMA; only SIG2 survives.
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout, "HLR_Out,HLR_In,Signals\nALPHA,BETA,[SIG2]\n");
}

#[test]
fn analyze_dot_output_file() {
    let dir = TempDir::new().unwrap();
    write_corpus(dir.path());
    let dot_path = dir.path().join("flow.gfz");

    sigmap()
        .args(["analyze", "--format", "dot", "--output"])
        .arg(&dot_path)
        .arg(dir.path())
        .assert()
        .success();

    let dot = fs::read_to_string(&dot_path).unwrap();
    assert!(dot.starts_with("digraph HLR {\n"));
    assert!(dot.contains("  ALPHA -> BETA [label=\"2\"];\n"));
    assert!(dot.contains("  ALPHA -> GAMMA [label=\"1\"];\n"));
    assert!(dot.ends_with("}\n"));
}

#[test]
fn analyze_persists_fact_database() {
    let dir = TempDir::new().unwrap();
    write_corpus(dir.path());
    let db_path = dir.path().join("facts.db");

    sigmap()
        .args(["analyze", "--database"])
        .arg(&db_path)
        .arg(dir.path())
        .assert()
        .success();

    let conn = rusqlite::Connection::open(&db_path).unwrap();
    let modules: i64 = conn
        .query_row("SELECT COUNT(*) FROM Modules", [], |row| row.get(0))
        .unwrap();
    let facts: i64 = conn
        .query_row("SELECT COUNT(*) FROM ModSigs", [], |row| row.get(0))
        .unwrap();
    assert_eq!(modules, 3);
    assert_eq!(facts, 5);
}

#[test]
fn analyze_json_reports_warnings_under_strict_policy() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("ALPHA.txt"), "1 Outputs\n[sig_low]\n").unwrap();

    let output = sigmap()
        .args(["analyze", "--format", "json"])
        .arg(dir.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["summary"]["signals"], 0);
    assert_eq!(json["warnings"][0]["token"], "[sig_low]");
    assert_eq!(json["warnings"][0]["module"], "ALPHA");
    assert_eq!(json["quiet_modules"][0], "ALPHA");
}

#[test]
fn analyze_lenient_policy_flag_overrides_default() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("ALPHA.txt"), "1 Outputs\n[sig_low]\n").unwrap();
    fs::write(dir.path().join("BETA.txt"), "1 Inputs\n[sig_low]\n").unwrap();

    let output = sigmap()
        .args(["analyze", "--format", "csv", "--policy", "lenient"])
        .arg(dir.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout, "HLR_Out,HLR_In,Signals\nALPHA,BETA,[sig_low]\n");
}

#[test]
fn analyze_fails_on_unwritable_output() {
    let dir = TempDir::new().unwrap();
    write_corpus(dir.path());

    sigmap()
        .args(["analyze", "--format", "csv", "--output"])
        .arg(dir.path().join("missing").join("out.csv"))
        .arg(dir.path())
        .assert()
        .failure();
}

#[test]
fn census_lists_tokens_regardless_of_position() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("ALPHA.txt"),
        "1 Overview\nThe [SIG1] value feeds [SIG2] downstream.\n",
    )
    .unwrap();

    let output = sigmap()
        .args(["census", "--format", "json"])
        .arg(dir.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let entries = json.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["signal"], "[SIG1]");
    assert_eq!(entries[0]["modules"][0], "ALPHA");
}

#[test]
fn init_writes_config_and_refuses_overwrite() {
    let dir = TempDir::new().unwrap();

    sigmap().arg("init").current_dir(dir.path()).assert().success();
    let config_path = dir.path().join("sigmap.toml");
    assert!(config_path.exists());
    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("signal_case = \"strict\""));

    sigmap().arg("init").current_dir(dir.path()).assert().failure();
    sigmap()
        .args(["init", "--force"])
        .current_dir(dir.path())
        .assert()
        .success();
}
