//! Optional-capability probing
//!
//! Detects which optional engine features the linked build was compiled
//! with by exercising each one against a live connection. A failed probe is
//! a finding about the build, not an error: outcomes are reported, recorded,
//! and never affect the process exit status.

use rusqlite::Connection;

/// Optional engine capabilities this tool knows how to probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// FTS5 full-text-search virtual tables.
    Fts5,
    /// JSON1 construction and query functions.
    Json1,
}

impl Capability {
    /// All probed capabilities, in the order the runner exercises them.
    pub const ALL: [Capability; 2] = [Capability::Fts5, Capability::Json1];

    /// Short display name.
    pub fn name(&self) -> &'static str {
        match self {
            Capability::Fts5 => "FTS5",
            Capability::Json1 => "JSON1",
        }
    }

    /// One-line description of what the capability provides.
    pub fn description(&self) -> &'static str {
        match self {
            Capability::Fts5 => "Full-text search virtual tables",
            Capability::Json1 => "JSON construction and query functions",
        }
    }
}

/// Whether a probed capability is present in the linked build.
#[derive(Debug, Clone, PartialEq)]
pub enum Availability {
    /// The probe succeeded. `sample` carries a result value for probes
    /// that produce one.
    Available { sample: Option<String> },
    /// The probe failed; the engine diagnostic says why.
    Missing { diagnostic: String },
}

/// Outcome of probing one capability.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeOutcome {
    /// The capability that was probed.
    pub capability: Capability,
    /// What the probe found.
    pub availability: Availability,
}

impl ProbeOutcome {
    /// True when the capability probe succeeded.
    pub fn is_available(&self) -> bool {
        matches!(self.availability, Availability::Available { .. })
    }

    /// Human-readable one-liner for this outcome.
    pub fn summary(&self) -> String {
        match (self.capability, &self.availability) {
            (Capability::Fts5, Availability::Available { .. }) => {
                "FTS5 extension is available and working".to_string()
            }
            (Capability::Fts5, Availability::Missing { diagnostic }) => {
                format!("FTS5 extension test: {}", diagnostic)
            }
            (Capability::Json1, Availability::Available { sample }) => match sample {
                Some(result) => {
                    format!("JSON1 extension is available, test result: {}", result)
                }
                None => "JSON1 extension is available".to_string(),
            },
            (Capability::Json1, Availability::Missing { .. }) => {
                "JSON1 extension not available".to_string()
            }
        }
    }
}

/// Probes one capability against an open connection.
///
/// Infallible by design: an engine error is folded into the outcome, so a
/// probe can never short-circuit the sequence that runs it.
pub fn probe(conn: &Connection, capability: Capability) -> ProbeOutcome {
    let availability = match capability {
        Capability::Fts5 => probe_fts5(conn),
        Capability::Json1 => probe_json1(conn),
    };
    ProbeOutcome {
        capability,
        availability,
    }
}

/// Attempts to create a one-column FTS5 virtual table.
fn probe_fts5(conn: &Connection) -> Availability {
    match conn.execute_batch("CREATE VIRTUAL TABLE IF NOT EXISTS fts_test USING fts5(content)") {
        Ok(()) => Availability::Available { sample: None },
        Err(e) => Availability::Missing {
            diagnostic: e.to_string(),
        },
    }
}

/// Attempts to evaluate a JSON array constructor and read the result back.
fn probe_json1(conn: &Connection) -> Availability {
    let result = conn.query_row("SELECT json_array(1, 2, 3)", [], |row| {
        row.get::<_, String>(0)
    });
    match result {
        Ok(sample) => Availability::Available {
            sample: Some(sample),
        },
        Err(e) => Availability::Missing {
            diagnostic: e.to_string(),
        },
    }
}
