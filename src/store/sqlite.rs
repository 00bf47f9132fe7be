//! SQLite persistence for the fact store.
//!
//! Every run is a full rebuild: the three tables are dropped and recreated,
//! then the frozen store contents are written in one transaction. The
//! schema keeps the pivot-friendly shape downstream reports query against.

use crate::core::errors::Result;
use crate::core::Direction;
use crate::store::FactStore;
use rusqlite::{params, Connection};
use std::path::Path;

const SCHEMA: &str = "
    DROP TABLE IF EXISTS ModSigs;
    DROP TABLE IF EXISTS Signals;
    DROP TABLE IF EXISTS Modules;
    CREATE TABLE Modules (mod_id INTEGER PRIMARY KEY, mod_name TEXT, UNIQUE (mod_name));
    CREATE TABLE Signals (sig_id INTEGER PRIMARY KEY, sig_name TEXT, UNIQUE (sig_name));
    CREATE TABLE ModSigs (mod_sig_type TEXT, mod_sig_line INTEGER,
        mod_id INTEGER, sig_id INTEGER,
        FOREIGN KEY (mod_id) REFERENCES Modules (mod_id),
        FOREIGN KEY (sig_id) REFERENCES Signals (sig_id));
";

/// Write the store to `path`, replacing any previous contents.
pub fn persist(store: &FactStore, path: &Path) -> Result<()> {
    let mut conn = Connection::open(path)?;
    conn.execute_batch(SCHEMA)?;

    let tx = conn.transaction()?;
    {
        let mut insert_module =
            tx.prepare("INSERT INTO Modules (mod_id, mod_name) VALUES (?1, ?2)")?;
        for (id, module) in store.modules().iter().enumerate() {
            insert_module.execute(params![row_id(id), module.name])?;
        }

        let mut insert_signal =
            tx.prepare("INSERT INTO Signals (sig_id, sig_name) VALUES (?1, ?2)")?;
        for (id, signal) in store.signals().iter().enumerate() {
            insert_signal.execute(params![row_id(id), signal.name])?;
        }

        let mut insert_fact = tx.prepare(
            "INSERT INTO ModSigs (mod_sig_type, mod_sig_line, mod_id, sig_id)
             VALUES (?1, ?2, ?3, ?4)",
        )?;
        for fact in store.facts() {
            insert_fact.execute(params![
                fact.direction.to_string(),
                fact.line as i64,
                row_id(fact.module),
                row_id(fact.signal),
            ])?;
        }
    }
    tx.commit()?;

    log::info!(
        "persisted {} modules, {} signals, {} facts to {}",
        store.module_count(),
        store.signal_count(),
        store.fact_count(),
        path.display()
    );
    Ok(())
}

/// (signal name, module name) pairs stored with the given direction; used
/// by downstream reports that run off the database instead of a fresh scan.
pub fn facts_by_direction(conn: &Connection, direction: Direction) -> Result<Vec<(String, String)>> {
    let mut stmt = conn.prepare(
        "SELECT s.sig_name, m.mod_name
         FROM ModSigs ms
         JOIN Signals s ON s.sig_id = ms.sig_id
         JOIN Modules m ON m.mod_id = ms.mod_id
         WHERE ms.mod_sig_type = ?1
         ORDER BY s.sig_name, m.mod_name",
    )?;
    let rows = stmt
        .query_map([direction.to_string()], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(rows)
}

// Store ids are 0-based vector indexes; the tables keep 1-based row ids.
fn row_id(id: usize) -> i64 {
    id as i64 + 1
}
