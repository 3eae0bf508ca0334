//! End-to-end runs of the smoke-test sequence

use litmus::{Capability, LitmusResult, RowRecord, SmokeRunner};
use pretty_assertions::assert_eq;
use rusqlite::Connection;
use std::process::Command;

#[test]
fn test_full_sequence_produces_expected_report() -> LitmusResult<()> {
    let runner = SmokeRunner::open()?;
    let report = runner.run()?;

    assert_eq!(report.rows_inserted, 3);
    assert_eq!(
        report.rows,
        vec![
            RowRecord::new("Alice", 3.14),
            RowRecord::new("Bob", 2.71),
            RowRecord::new("Charlie", 1.41),
        ]
    );
    assert!(report.engine_version.starts_with("3."));
    assert!(!report.build_variant.is_empty());

    Ok(())
}

#[test]
fn test_repeated_schema_and_load_accumulate_rows() -> LitmusResult<()> {
    let runner = SmokeRunner::with_connection(Connection::open_in_memory().unwrap());

    // Two full schema+load passes over the same connection; the second
    // CREATE must be a no-op and the second INSERT must append
    runner.create_schema()?;
    runner.load_rows()?;
    runner.create_schema()?;
    runner.load_rows()?;

    let rows = runner.verify_rows()?;
    let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["Alice", "Alice", "Bob", "Bob", "Charlie", "Charlie"]);

    runner.close()?;
    Ok(())
}

#[test]
fn test_values_round_trip_exactly() -> LitmusResult<()> {
    let runner = SmokeRunner::with_connection(Connection::open_in_memory().unwrap());
    runner.create_schema()?;
    runner.load_rows()?;

    let rows = runner.verify_rows()?;
    assert_eq!(rows[0].value, 3.14);
    assert_eq!(rows[1].value, 2.71);
    assert_eq!(rows[2].value, 1.41);

    Ok(())
}

#[cfg(feature = "bundled")]
#[test]
fn test_bundled_build_reports_both_capabilities() -> LitmusResult<()> {
    let runner = SmokeRunner::open()?;
    let report = runner.run()?;

    assert!(report.all_capabilities_available());

    let json = report.capability(Capability::Json1).unwrap();
    assert_eq!(
        json.summary(),
        "JSON1 extension is available, test result: [1,2,3]"
    );

    Ok(())
}

#[test]
fn test_binary_exits_zero_and_prints_rows_in_order() {
    let output = Command::new(env!("CARGO_BIN_EXE_litmus")).output().unwrap();
    assert!(output.status.success(), "exit status: {}", output.status);

    let stdout = String::from_utf8(output.stdout).unwrap();
    let alice = stdout.find("  Alice: 3.14");
    let bob = stdout.find("  Bob: 2.71");
    let charlie = stdout.find("  Charlie: 1.41");
    assert!(
        alice.is_some() && bob.is_some() && charlie.is_some(),
        "{}",
        stdout
    );
    assert!(alice < bob && bob < charlie, "{}", stdout);
}
