//! Engine build identification
//!
//! Answers "which SQLite is actually linked into this binary": the library
//! version, the build variant selected at compile time, and the compile
//! options baked into that build.

use rusqlite::Connection;

use crate::common::error::{LitmusError, Result};

/// Textual label for the engine build variant selected at compile time.
///
/// The `bundled` feature (on by default) compiles the SQLite amalgamation
/// into the binary; without it the binary links whatever libsqlite3 the
/// system provides. Only this label changes, not behavior.
#[cfg(feature = "bundled")]
pub const BUILD_VARIANT: &str = "bundled SQLite backend";

/// Textual label for the engine build variant selected at compile time.
#[cfg(not(feature = "bundled"))]
pub const BUILD_VARIANT: &str = "system SQLite backend";

/// Version string of the linked SQLite library.
pub fn version() -> &'static str {
    rusqlite::version()
}

/// Compile options baked into the linked SQLite build.
///
/// The deeper diagnostic companion to the capability probes: the probes
/// answer "does feature X work", this lists what the build claims was
/// compiled in.
pub fn compile_options(conn: &Connection) -> Result<Vec<String>> {
    let mut stmt = conn
        .prepare("PRAGMA compile_options")
        .map_err(LitmusError::Query)?;
    let options = stmt
        .query_map([], |row| row.get::<_, String>(0))
        .map_err(LitmusError::Query)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(LitmusError::Query)?;
    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_sqlite_3() {
        let version = version();
        assert!(
            version.starts_with("3."),
            "unexpected engine version: {}",
            version
        );
    }

    #[test]
    fn build_variant_names_a_backend() {
        assert!(BUILD_VARIANT.ends_with("SQLite backend"));
    }

    #[cfg(feature = "bundled")]
    #[test]
    fn bundled_build_reports_compile_options() {
        let conn = Connection::open_in_memory().unwrap();
        let options = compile_options(&conn).unwrap();
        assert!(!options.is_empty());
        assert!(options.iter().any(|opt| opt.contains("THREADSAFE")));
    }
}
