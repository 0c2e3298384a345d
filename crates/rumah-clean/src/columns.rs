//! Header resolution
//!
//! Maps the labels found in the header row to listing fields. Labels are
//! matched case-insensitively, in Indonesian or English, ignoring `_`/`-`
//! and repeated whitespace.

use crate::error::{CleanError, Result};

/// A listing field the cleaner reads from the sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Price,
    BuildingArea,
    LandArea,
    Bedrooms,
    Bathrooms,
    Garage,
}

impl Field {
    pub const ALL: [Field; 7] = [
        Field::Name,
        Field::Price,
        Field::BuildingArea,
        Field::LandArea,
        Field::Bedrooms,
        Field::Bathrooms,
        Field::Garage,
    ];

    /// Output column name
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Price => "price",
            Field::BuildingArea => "building_area",
            Field::LandArea => "land_area",
            Field::Bedrooms => "bedrooms",
            Field::Bathrooms => "bathrooms",
            Field::Garage => "garage",
        }
    }

    /// Accepted header labels, already normalized
    fn aliases(self) -> &'static [&'static str] {
        match self {
            Field::Name => &["nama rumah", "nama", "name"],
            Field::Price => &["harga", "price"],
            Field::BuildingArea => &["lb", "luas bangunan", "building area"],
            Field::LandArea => &["lt", "luas tanah", "land area"],
            Field::Bedrooms => &["kt", "kamar tidur", "bedrooms"],
            Field::Bathrooms => &["km", "kamar mandi", "bathrooms"],
            Field::Garage => &["grs", "garasi", "garage"],
        }
    }

    fn matches(self, label: &str) -> bool {
        let label = normalize_label(label);
        self.aliases().iter().any(|alias| *alias == label)
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn normalize_label(label: &str) -> String {
    label
        .replace(['_', '-'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Sheet column index for every listing field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    indices: [usize; 7],
}

impl ColumnMap {
    /// Resolve a header row; the first matching column wins
    pub fn resolve<S: AsRef<str>>(header: &[S]) -> Result<Self> {
        let mut indices = [0usize; 7];

        for (slot, field) in indices.iter_mut().zip(Field::ALL) {
            *slot = header
                .iter()
                .position(|label| field.matches(label.as_ref()))
                .ok_or_else(|| CleanError::MissingColumn {
                    field: field.as_str(),
                    header: header.iter().map(|s| s.as_ref().to_string()).collect(),
                })?;
        }

        Ok(Self { indices })
    }

    pub fn index_of(&self, field: Field) -> usize {
        self.indices[field as usize]
    }
}
