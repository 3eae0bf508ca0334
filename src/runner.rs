//! The smoke-test sequence
//!
//! A fixed, ordered sequence of operations against a single in-memory
//! connection: open, create schema, load rows, query them back, probe the
//! optional capabilities, close. Required steps short-circuit on the first
//! failure; capability probes never do. Progress and results go to stdout
//! as the sequence executes, and a [`SmokeReport`] is returned for callers
//! that want values instead of output.

use rusqlite::Connection;
use tracing::debug;

use crate::common::error::{LitmusError, LitmusResult};
use crate::engine;
use crate::probe::{self, Capability, ProbeOutcome};
use crate::report::{RowRecord, SmokeReport};

/// The fixed test table. `IF NOT EXISTS` keeps repeated runs from failing.
const CREATE_TEST_TABLE: &str = "CREATE TABLE IF NOT EXISTS test (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    value REAL
)";

/// One multi-row insert; a single statement is atomic within the engine,
/// so no explicit transaction wrapping is needed.
const INSERT_TEST_ROWS: &str = "INSERT INTO test (name, value) VALUES
    ('Alice', 3.14),
    ('Bob', 2.71),
    ('Charlie', 1.41)";

/// Deterministic ordered read-back of the loaded rows.
const SELECT_TEST_ROWS: &str = "SELECT name, value FROM test ORDER BY name";

/// Runs the smoke-test sequence against one database connection.
///
/// The runner owns the connection for its whole lifetime: opened by
/// [`open`](Self::open), released exactly once by [`close`](Self::close) on
/// the normal path or by drop on early-error paths.
pub struct SmokeRunner {
    conn: Connection,
}

impl SmokeRunner {
    /// Opens the volatile in-memory database the sequence runs against.
    ///
    /// A failed open is fatal; the engine diagnostic is carried in the
    /// returned error.
    pub fn open() -> LitmusResult<Self> {
        let conn = Connection::open_in_memory().map_err(LitmusError::Open)?;
        debug!(version = engine::version(), "opened in-memory database");

        println!("Successfully opened SQLite database");
        println!("SQLite version: {}", engine::version());
        println!("Using {}", engine::BUILD_VARIANT);

        Ok(SmokeRunner { conn })
    }

    /// Wraps an already-open connection.
    ///
    /// The production path is [`open`](Self::open); this seam exists for
    /// callers that control open flags or pre-seed the database.
    pub fn with_connection(conn: Connection) -> Self {
        SmokeRunner { conn }
    }

    /// The connection under test.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Runs the remaining sequence to completion and closes the connection.
    pub fn run(self) -> LitmusResult<SmokeReport> {
        let engine_version = engine::version().to_string();

        self.create_schema()?;
        let rows_inserted = self.load_rows()?;
        let rows = self.verify_rows()?;
        let probes = self.probe_capabilities();
        self.close()?;

        Ok(SmokeReport {
            engine_version,
            build_variant: engine::BUILD_VARIANT,
            rows_inserted,
            rows,
            probes,
        })
    }

    /// Ensures the fixed `test` table exists.
    pub fn create_schema(&self) -> LitmusResult<()> {
        debug!("creating test table");
        self.conn
            .execute_batch(CREATE_TEST_TABLE)
            .map_err(LitmusError::Schema)?;
        println!("Created test table");
        Ok(())
    }

    /// Inserts the three literal rows in one statement.
    ///
    /// Returns the number of rows the engine reports inserted.
    pub fn load_rows(&self) -> LitmusResult<usize> {
        debug!("inserting test data");
        let inserted = self
            .conn
            .execute(INSERT_TEST_ROWS, [])
            .map_err(LitmusError::Load)?;
        println!("Inserted test data ({} rows)", inserted);
        Ok(inserted)
    }

    /// Reads the rows back in name order, printing one line per row.
    ///
    /// Mid-iteration errors are not folded into "no more rows": `Rows::next`
    /// distinguishes exhaustion from failure, and a failure here is fatal.
    /// The statement is released when it goes out of scope, on every path.
    pub fn verify_rows(&self) -> LitmusResult<Vec<RowRecord>> {
        let mut stmt = self
            .conn
            .prepare(SELECT_TEST_ROWS)
            .map_err(LitmusError::Query)?;
        let mut rows = stmt.query([]).map_err(LitmusError::Query)?;

        println!();
        println!("Query results:");

        let mut records = Vec::new();
        while let Some(row) = rows.next().map_err(LitmusError::Query)? {
            let name: String = row.get(0).map_err(LitmusError::Query)?;
            let value: f64 = row.get(1).map_err(LitmusError::Query)?;
            println!("  {}: {}", name, value);
            records.push(RowRecord { name, value });
        }
        debug!(rows = records.len(), "verification query exhausted");

        Ok(records)
    }

    /// Probes every known optional capability, reporting each outcome.
    ///
    /// Probe failures are findings, not errors; the sequence continues and
    /// the process exit status is unaffected.
    pub fn probe_capabilities(&self) -> Vec<ProbeOutcome> {
        println!();
        Capability::ALL
            .iter()
            .map(|&capability| {
                let outcome = probe::probe(&self.conn, capability);
                debug!(
                    capability = capability.name(),
                    available = outcome.is_available(),
                    "probed capability"
                );
                println!("{}", outcome.summary());
                outcome
            })
            .collect()
    }

    /// Releases the connection. This is the one explicit release call site;
    /// early-error paths release through drop instead. A failed close still
    /// frees the handle (the engine hands it back and it is dropped here).
    pub fn close(self) -> LitmusResult<()> {
        self.conn.close().map_err(|(_, e)| LitmusError::Close(e))?;
        println!();
        println!("Database closed successfully");
        Ok(())
    }
}
