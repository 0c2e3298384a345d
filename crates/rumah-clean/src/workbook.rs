//! Spreadsheet input
//!
//! Reads the first worksheet of the listing workbook. The first row is the
//! header and is resolved through [`ColumnMap`]; every following non-blank
//! row becomes a [`RawRow`].

use crate::columns::{ColumnMap, Field};
use crate::error::{CleanError, Result};
use crate::raw::{RawCell, RawRow};
use calamine::{open_workbook_auto, Data, Range, Reader};
use std::path::Path;
use tracing::{debug, info};

/// Load every listing row from the first sheet of `path`
pub fn read_rows(path: &Path) -> Result<Vec<RawRow>> {
    if !path.is_file() {
        return Err(CleanError::InputNotFound(path.to_path_buf()));
    }

    let mut workbook =
        open_workbook_auto(path).map_err(|e| CleanError::spreadsheet(path, e))?;

    let sheet = workbook.sheet_names().first().cloned().unwrap_or_default();
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| CleanError::NoWorksheet(path.to_path_buf()))?
        .map_err(|e| CleanError::spreadsheet(path, e))?;

    debug!(path = %path.display(), sheet = %sheet, size = ?range.get_size(), "Opened worksheet");

    let rows = rows_from_range(&range).map_err(|err| match err {
        CleanError::EmptySheet(_) => CleanError::EmptySheet(path.to_path_buf()),
        other => other,
    })?;

    info!(path = %path.display(), rows = rows.len(), "Loaded listing rows");
    Ok(rows)
}

/// Convert a worksheet range into listing rows
///
/// Row numbers are 1-based and absolute, so a sheet whose data starts at
/// `B3` reports its first data row as line 4.
pub fn rows_from_range(range: &Range<Data>) -> Result<Vec<RawRow>> {
    let first_line = range.start().map_or(1, |(row, _)| row as usize + 1);
    let mut sheet_rows = range.rows();

    let header: Vec<String> = sheet_rows
        .next()
        .filter(|cells| cells.iter().any(|c| !matches!(c, Data::Empty)))
        .ok_or_else(|| CleanError::EmptySheet(Default::default()))?
        .iter()
        .map(|cell| cell.to_string())
        .collect();

    let columns = ColumnMap::resolve(&header)?;

    let rows = sheet_rows
        .enumerate()
        .map(|(offset, cells)| to_raw_row(&columns, cells, first_line + 1 + offset))
        .filter(|row| !row.is_blank())
        .collect();

    Ok(rows)
}

fn to_raw_row(columns: &ColumnMap, cells: &[Data], line: usize) -> RawRow {
    // Short rows are padded with empty cells
    let cell = |field: Field| {
        cells
            .get(columns.index_of(field))
            .map(RawCell::from)
            .unwrap_or_default()
    };

    RawRow {
        line,
        name: cell(Field::Name),
        price: cell(Field::Price),
        building_area: cell(Field::BuildingArea),
        land_area: cell(Field::LandArea),
        bedrooms: cell(Field::Bedrooms),
        bathrooms: cell(Field::Bathrooms),
        garage: cell(Field::Garage),
    }
}
