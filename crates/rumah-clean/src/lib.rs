//! Rumah Clean Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Turns a spreadsheet of Indonesian house listings into a model-ready CSV.
//!
//! # Overview
//!
//! - **Input**: first sheet of a workbook, header resolved by [`columns`]
//! - **Cleaning**: parse, validate and deduplicate rows ([`cleaner`])
//! - **Output**: `name,price,building_area,land_area,bedrooms,bathrooms,garage`
//!   written atomically by [`export`]
//!
//! # Example
//!
//! ```no_run
//! use rumah_clean::{pipeline, CleanConfig};
//!
//! fn main() -> rumah_clean::Result<()> {
//!     let summary = pipeline::run(&CleanConfig::default())?;
//!     println!("{} listings kept", summary.written);
//!     Ok(())
//! }
//! ```

pub mod cleaner;
pub mod columns;
pub mod config;
pub mod error;
pub mod export;
pub mod parse;
pub mod pipeline;
pub mod raw;
pub mod record;
pub mod workbook;

// Re-export commonly used types
pub use cleaner::{clean, CleanOutput, CleanStats, Cleaner, RowRejection};
pub use config::CleanConfig;
pub use error::{CleanError, Result};
pub use raw::{RawCell, RawRow};
pub use record::{CleanRecord, SquareMeters};

use clap::Parser;
use std::path::PathBuf;

/// Clean a house-listing spreadsheet into a model-ready CSV
///
/// With no arguments, reads `DATA RUMAH.xlsx` and writes
/// `cleaned_house_data.csv` in the working directory.
#[derive(Parser, Debug)]
#[command(name = "rumah-clean")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Source spreadsheet (.xlsx, .xls, .xlsb, .ods) [env: RUMAH_INPUT]
    #[arg(requires = "output")]
    pub input: Option<PathBuf>,

    /// Destination CSV file [env: RUMAH_OUTPUT]
    pub output: Option<PathBuf>,

    /// Verbose output; logs every dropped row
    #[arg(short, long)]
    pub verbose: bool,
}
