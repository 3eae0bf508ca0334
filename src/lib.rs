//! litmus - SQLite Engine Smoke Test
//!
//! litmus exercises an embedded SQLite engine end to end: open an in-memory
//! database, create a table, load rows, read them back in order, probe the
//! optional FTS5 and JSON1 capabilities, and close. Required steps fail the
//! run on the first error; probes only report what the build provides.
//!
pub mod common;
pub mod engine;
pub mod probe;
pub mod report;
pub mod runner;

// Re-export common types for convenience
pub use common::{LitmusError, LitmusResult};

// Re-export the probe surface for convenience
pub use probe::{Availability, Capability, ProbeOutcome};

// Re-export the report types for convenience
pub use report::{RowRecord, SmokeReport};

// Re-export the runner for convenience
pub use runner::SmokeRunner;
