//! Untyped listing rows as read from the source sheet

use std::fmt;

/// A single spreadsheet cell before any validation
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RawCell {
    #[default]
    Empty,
    Text(String),
    Number(f64),
}

impl RawCell {
    pub fn text(value: impl Into<String>) -> Self {
        RawCell::Text(value.into())
    }

    /// True for empty cells and whitespace-only text
    pub fn is_blank(&self) -> bool {
        match self {
            RawCell::Empty => true,
            RawCell::Text(s) => s.trim().is_empty(),
            RawCell::Number(_) => false,
        }
    }
}

impl fmt::Display for RawCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawCell::Empty => Ok(()),
            RawCell::Text(s) => f.write_str(s),
            RawCell::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<&calamine::Data> for RawCell {
    fn from(cell: &calamine::Data) -> Self {
        use calamine::Data;

        match cell {
            Data::Empty => RawCell::Empty,
            Data::Int(i) => RawCell::Number(*i as f64),
            Data::Float(f) => RawCell::Number(*f),
            Data::String(s) => RawCell::Text(s.clone()),
            // Booleans, dates and error cells never hold a listing number;
            // keep their display form so they fail numeric parsing.
            other => RawCell::Text(other.to_string()),
        }
    }
}

/// One listing row keyed by field rather than by sheet column
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawRow {
    /// 1-based row number in the source sheet, for diagnostics
    pub line: usize,
    pub name: RawCell,
    pub price: RawCell,
    pub building_area: RawCell,
    pub land_area: RawCell,
    pub bedrooms: RawCell,
    pub bathrooms: RawCell,
    pub garage: RawCell,
}

impl RawRow {
    /// True when every listing field is blank
    pub fn is_blank(&self) -> bool {
        [
            &self.name,
            &self.price,
            &self.building_area,
            &self.land_area,
            &self.bedrooms,
            &self.bathrooms,
            &self.garage,
        ]
        .iter()
        .all(|cell| cell.is_blank())
    }
}
