//! Run configuration
//!
//! Paths resolve in order: positional arguments, then `RUMAH_INPUT` /
//! `RUMAH_OUTPUT`, then the fixed defaults below.

use crate::Cli;
use std::path::PathBuf;

// ============================================================================
// Defaults
// ============================================================================

/// Source workbook read when no path is given
pub const DEFAULT_INPUT: &str = "DATA RUMAH.xlsx";

/// Destination CSV written when no path is given
pub const DEFAULT_OUTPUT: &str = "cleaned_house_data.csv";

pub const INPUT_ENV: &str = "RUMAH_INPUT";
pub const OUTPUT_ENV: &str = "RUMAH_OUTPUT";

/// Paths for one cleaning run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanConfig {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl Default for CleanConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl CleanConfig {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }

    /// Defaults with environment overrides applied
    pub fn from_env() -> Self {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// Resolve the configuration for a parsed command line
    pub fn from_cli(cli: &Cli) -> Self {
        let config = Self::from_env();
        match (&cli.input, &cli.output) {
            (Some(input), Some(output)) => Self::new(input, output),
            _ => config,
        }
    }

    fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(input) = lookup(INPUT_ENV).filter(|v| !v.is_empty()) {
            self.input = PathBuf::from(input);
        }
        if let Some(output) = lookup(OUTPUT_ENV).filter(|v| !v.is_empty()) {
            self.output = PathBuf::from(output);
        }
        self
    }
}
