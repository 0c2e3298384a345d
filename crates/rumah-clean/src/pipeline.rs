//! End-to-end run: workbook in, CSV out

use crate::cleaner::{self, CleanStats};
use crate::config::CleanConfig;
use crate::error::{CleanError, Result};
use crate::export;
use crate::workbook;
use std::path::PathBuf;
use tracing::instrument;

/// What a successful run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub rows_read: usize,
    pub written: usize,
    pub stats: CleanStats,
    pub output: PathBuf,
}

/// Read the configured workbook, clean it and write the CSV
///
/// Any error leaves the destination untouched.
#[instrument(skip_all, fields(input = %config.input.display(), output = %config.output.display()))]
pub fn run(config: &CleanConfig) -> Result<RunSummary> {
    let rows = workbook::read_rows(&config.input)?;
    let cleaned = cleaner::clean(&rows);

    if cleaned.records.is_empty() {
        return Err(CleanError::NoRecords {
            rows_read: rows.len(),
        });
    }

    export::export_csv(&cleaned.records, &config.output)?;

    Ok(RunSummary {
        rows_read: rows.len(),
        written: cleaned.total(),
        stats: cleaned.stats,
        output: config.output.clone(),
    })
}
