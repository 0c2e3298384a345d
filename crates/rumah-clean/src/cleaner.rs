//! Listing cleaner
//!
//! Turns raw rows into [`CleanRecord`]s in three stages, applied to each row
//! in input order:
//!
//! 1. parse every field ([`crate::parse`]); a missing or malformed field
//!    drops the row
//! 2. require price, building area and land area to be greater than zero
//! 3. drop the row if an earlier row produced an identical record
//!
//! Dropped rows are counted in [`CleanStats`] and logged at `debug`. They are
//! never surfaced as errors.

use crate::columns::Field;
use crate::parse::{self, FieldError};
use crate::raw::RawRow;
use crate::record::{CleanRecord, SquareMeters};
use std::collections::HashSet;
use thiserror::Error;
use tracing::{debug, info};

/// Why a row did not make it into the output
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RowRejection {
    #[error("{field} is {reason}")]
    Invalid { field: Field, reason: FieldError },

    #[error("{0} must be greater than zero")]
    NonPositive(Field),

    #[error("duplicate of an earlier listing")]
    Duplicate,
}

/// Row accounting for one cleaning pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CleanStats {
    pub rows_read: usize,
    /// Rows with a missing or unparseable field
    pub malformed: usize,
    /// Rows with a zero price or area
    pub non_positive: usize,
    pub duplicates: usize,
}

impl CleanStats {
    pub fn dropped(&self) -> usize {
        self.malformed + self.non_positive + self.duplicates
    }
}

/// Result of a cleaning pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CleanOutput {
    /// Surviving records in order of first occurrence
    pub records: Vec<CleanRecord>,
    pub stats: CleanStats,
}

impl CleanOutput {
    /// Number of valid, unique records
    pub fn total(&self) -> usize {
        self.records.len()
    }
}

/// Validate a single row without regard to duplicates
pub fn validate(row: &RawRow) -> Result<CleanRecord, RowRejection> {
    fn field<T>(field: Field, parsed: Result<T, FieldError>) -> Result<T, RowRejection> {
        parsed.map_err(|reason| RowRejection::Invalid { field, reason })
    }

    let name = field(Field::Name, parse::name(&row.name))?;
    let price = field(Field::Price, parse::price(&row.price))?;
    let building_area = field(Field::BuildingArea, parse::area(&row.building_area))?;
    let land_area = field(Field::LandArea, parse::area(&row.land_area))?;
    let bedrooms = field(Field::Bedrooms, parse::count(&row.bedrooms))?;
    let bathrooms = field(Field::Bathrooms, parse::count(&row.bathrooms))?;
    let garage = field(Field::Garage, parse::count(&row.garage))?;

    if price == 0 {
        return Err(RowRejection::NonPositive(Field::Price));
    }
    let building_area =
        SquareMeters::new(building_area).ok_or(RowRejection::NonPositive(Field::BuildingArea))?;
    let land_area =
        SquareMeters::new(land_area).ok_or(RowRejection::NonPositive(Field::LandArea))?;

    Ok(CleanRecord {
        name,
        price,
        building_area,
        land_area,
        bedrooms,
        bathrooms,
        garage,
    })
}

/// Incremental cleaner; feed rows in input order, then [`Cleaner::finish`]
#[derive(Debug, Default)]
pub struct Cleaner {
    seen: HashSet<CleanRecord>,
    records: Vec<CleanRecord>,
    stats: CleanStats,
}

impl Cleaner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and deduplicate one row, keeping it on success
    pub fn push(&mut self, row: &RawRow) -> Result<(), RowRejection> {
        self.stats.rows_read += 1;

        let outcome = validate(row).and_then(|record| {
            if self.seen.contains(&record) {
                return Err(RowRejection::Duplicate);
            }
            self.seen.insert(record.clone());
            self.records.push(record);
            Ok(())
        });

        if let Err(ref rejection) = outcome {
            match rejection {
                RowRejection::Invalid { .. } => self.stats.malformed += 1,
                RowRejection::NonPositive(_) => self.stats.non_positive += 1,
                RowRejection::Duplicate => self.stats.duplicates += 1,
            }
            debug!(line = row.line, reason = %rejection, "Row dropped");
        }

        outcome
    }

    pub fn finish(self) -> CleanOutput {
        info!(
            rows_read = self.stats.rows_read,
            kept = self.records.len(),
            malformed = self.stats.malformed,
            non_positive = self.stats.non_positive,
            duplicates = self.stats.duplicates,
            "Cleaning finished"
        );

        CleanOutput {
            records: self.records,
            stats: self.stats,
        }
    }
}

/// Clean a whole sequence of rows
pub fn clean<'a, I>(rows: I) -> CleanOutput
where
    I: IntoIterator<Item = &'a RawRow>,
{
    let mut cleaner = Cleaner::new();
    for row in rows {
        // Rejections are already counted and logged by the cleaner
        let _ = cleaner.push(row);
    }
    cleaner.finish()
}
