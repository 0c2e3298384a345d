//! CSV output
//!
//! The destination is replaced atomically: records are written to a
//! temporary file beside it and renamed into place only once everything has
//! been flushed, so a failed run never leaves a partial file behind.

use crate::error::{CleanError, Result};
use crate::record::{CleanRecord, CSV_HEADER};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::info;

/// Serialize records as CSV into any writer, header first
pub fn write_records<W: Write>(writer: W, records: &[CleanRecord]) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv_writer.write_record(CSV_HEADER)?;
    for record in records {
        csv_writer.serialize(record)?;
    }
    csv_writer.flush()?;

    Ok(())
}

/// Write records to `destination`, replacing it atomically
///
/// Refuses to write an empty file: with no records there is nothing a
/// downstream model could use, and an existing output is left untouched.
pub fn export_csv(records: &[CleanRecord], destination: &Path) -> Result<()> {
    if records.is_empty() {
        return Err(CleanError::NothingToExport(destination.to_path_buf()));
    }

    let dir = match destination.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut staging = NamedTempFile::new_in(dir)?;
    write_records(staging.as_file_mut(), records)?;
    staging.as_file().sync_all()?;
    staging.persist(destination)?;

    info!(path = %destination.display(), records = records.len(), "CSV written");
    Ok(())
}
