//! Error types for rumah-clean
//!
//! Only run-level failures live here. A row that fails validation is not an
//! error; see [`crate::cleaner::RowRejection`].

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for cleaning runs
pub type Result<T> = std::result::Result<T, CleanError>;

/// Fatal error that aborts a cleaning run
#[derive(Error, Debug)]
pub enum CleanError {
    /// Input spreadsheet does not exist
    #[error("Input file not found: '{0}'. Verify the path or pass INPUT OUTPUT explicitly.")]
    InputNotFound(PathBuf),

    /// Input exists but could not be opened or decoded as a spreadsheet
    #[error("Failed to read spreadsheet '{path}': {source}")]
    Spreadsheet {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    /// Workbook has no worksheet at all
    #[error("Spreadsheet '{0}' contains no worksheet")]
    NoWorksheet(PathBuf),

    /// First worksheet has no rows, not even a header
    #[error("No rows found in '{0}'")]
    EmptySheet(PathBuf),

    /// Header row lacks a column the cleaner needs
    #[error("Missing required column '{field}' in header {header:?}")]
    MissingColumn { field: &'static str, header: Vec<String> },

    /// Every row was filtered out
    #[error("No valid listings to write; {rows_read} row(s) read, all rejected")]
    NoRecords { rows_read: usize },

    /// Export was asked to write an empty record set
    #[error("No records to write to '{0}'")]
    NothingToExport(PathBuf),

    /// CSV serialization failed
    #[error("Failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    /// Temporary output could not be moved over the destination
    #[error("Failed to replace output file: {0}")]
    Persist(#[from] tempfile::PersistError),

    /// File system operation failed
    #[error("File operation failed: {0}. Check file permissions and disk space.")]
    Io(#[from] std::io::Error),
}

impl CleanError {
    pub fn spreadsheet(path: impl Into<PathBuf>, source: calamine::Error) -> Self {
        Self::Spreadsheet {
            path: path.into(),
            source,
        }
    }
}
