//! Command handlers for CLI subcommands.

use std::io::Write;

use roster_models::Record;
use roster_persistence::{RecordStore, ScanOutcome, ScanSummary};
use tracing::{debug, info};

use crate::cli::{Commands, OutputFormat};

/// Result type for command operations.
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Execute a CLI command against the given store.
///
/// Results go to `out`; skip warnings for malformed lines go to `err`.
pub fn execute(
    command: Commands,
    store: &RecordStore,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<()> {
    match command {
        Commands::Add {
            id,
            name,
            department,
        } => cmd_add(store, &id, &name, &department, out),
        Commands::List { format } => cmd_list(store, format, out, err),
    }
}

fn cmd_add(
    store: &RecordStore,
    id: &str,
    name: &str,
    department: &str,
    out: &mut dyn Write,
) -> Result<()> {
    let record = Record::new(id.trim(), name.trim(), department.trim());
    store.append(&record)?;

    info!(path = %store.path().display(), id = %record.id, "Record added");
    writeln!(out, "Record added for {}", record.name)?;
    Ok(())
}

fn cmd_list(
    store: &RecordStore,
    format: OutputFormat,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<()> {
    let summary = ScanSummary::collect(store.scan_all()?)?;
    debug!(
        path = %store.path().display(),
        records = summary.records.len(),
        malformed = summary.malformed.len(),
        "Scanned records"
    );

    for (line_number, line) in &summary.malformed {
        writeln!(err, "Skipped malformed line {}: {}", line_number, line)?;
    }

    if format == OutputFormat::Json {
        writeln!(out, "{}", serde_json::to_string_pretty(&summary.records)?)?;
        return Ok(());
    }

    match summary.outcome() {
        ScanOutcome::NoRecords => {
            writeln!(out, "No records found. Add some records first.")?;
        }
        ScanOutcome::AllMalformed => {
            writeln!(
                out,
                "No valid records found ({} malformed line(s) skipped).",
                summary.malformed.len()
            )?;
        }
        ScanOutcome::Records => {
            for record in &summary.records {
                match format {
                    OutputFormat::Brief => writeln!(out, "{} {}", record.id, record.name)?,
                    _ => writeln!(out, "{}", record)?,
                }
            }
        }
    }

    Ok(())
}
