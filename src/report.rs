//! Smoke-test run report
//!
//! A successful run produces a [`SmokeReport`] capturing everything the
//! sequence observed, so callers (and tests) assert on values rather than
//! scraping stdout. Nothing here is persisted; the report dies with the
//! process.

use crate::probe::{Capability, ProbeOutcome};

/// One row read back by the query verifier.
#[derive(Debug, Clone, PartialEq)]
pub struct RowRecord {
    /// The `name` column, read as text.
    pub name: String,
    /// The `value` column, read as a double-precision float.
    pub value: f64,
}

impl RowRecord {
    /// Convenience constructor, mainly for test expectations.
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        RowRecord {
            name: name.into(),
            value,
        }
    }
}

/// Everything one smoke-test run observed.
#[derive(Debug, Clone)]
pub struct SmokeReport {
    /// Version string of the linked SQLite library.
    pub engine_version: String,
    /// Build-variant label selected at compile time.
    pub build_variant: &'static str,
    /// Number of rows the engine reported inserted by the data loader.
    pub rows_inserted: usize,
    /// Rows produced by the ordered verification query, in query order.
    pub rows: Vec<RowRecord>,
    /// Capability-probe outcomes, in probe order.
    pub probes: Vec<ProbeOutcome>,
}

impl SmokeReport {
    /// Number of rows the verification query produced.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Looks up the probe outcome for one capability.
    pub fn capability(&self, capability: Capability) -> Option<&ProbeOutcome> {
        self.probes.iter().find(|p| p.capability == capability)
    }

    /// True when every probed capability came back available.
    pub fn all_capabilities_available(&self) -> bool {
        self.probes.iter().all(ProbeOutcome::is_available)
    }
}
