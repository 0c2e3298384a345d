//! Validated listing records

use serde::{Serialize, Serializer};
use std::hash::{Hash, Hasher};

/// Column order of the exported CSV
pub const CSV_HEADER: [&str; 7] = [
    "name",
    "price",
    "building_area",
    "land_area",
    "bedrooms",
    "bathrooms",
    "garage",
];

/// A strictly positive, finite area in square meters
///
/// Equality and hashing are by exact bit pattern, which is well defined
/// because NaN, infinities, zero and negative zero are never admitted.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct SquareMeters(f64);

impl SquareMeters {
    /// Returns `None` unless `value` is finite and greater than zero
    pub fn new(value: f64) -> Option<Self> {
        (value.is_finite() && value > 0.0).then_some(Self(value))
    }

    pub fn get(self) -> f64 {
        self.0
    }

    fn as_whole(self) -> Option<u64> {
        // 2^53: beyond this not every integer is representable
        const MAX_EXACT: f64 = 9_007_199_254_740_992.0;
        (self.0.fract() == 0.0 && self.0 <= MAX_EXACT).then_some(self.0 as u64)
    }
}

impl Eq for SquareMeters {}

impl Hash for SquareMeters {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

/// Whole areas are written as integers (`50`, not `50.0`)
impl Serialize for SquareMeters {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.as_whole() {
            Some(whole) => serializer.serialize_u64(whole),
            None => serializer.serialize_f64(self.0),
        }
    }
}

/// A cleaned, model-ready house listing
///
/// The derived `Eq`/`Hash` cover every field, so a record is its own
/// duplicate key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CleanRecord {
    pub name: String,
    /// Price in Rupiah
    pub price: u64,
    pub building_area: SquareMeters,
    pub land_area: SquareMeters,
    pub bedrooms: u32,
    pub bathrooms: u32,
    /// Garage capacity; 0 means none
    pub garage: u32,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_square_meters_rejects_non_positive_and_non_finite() {
        assert!(SquareMeters::new(0.0).is_none());
        assert!(SquareMeters::new(-0.0).is_none());
        assert!(SquareMeters::new(-12.0).is_none());
        assert!(SquareMeters::new(f64::NAN).is_none());
        assert!(SquareMeters::new(f64::INFINITY).is_none());
        assert_eq!(SquareMeters::new(36.5).unwrap().get(), 36.5);
    }

    #[test]
    fn test_identical_records_share_a_key() {
        let record = CleanRecord {
            name: "Rumah Asri".into(),
            price: 850_000_000,
            building_area: SquareMeters::new(90.0).unwrap(),
            land_area: SquareMeters::new(120.0).unwrap(),
            bedrooms: 3,
            bathrooms: 2,
            garage: 1,
        };
        let mut other = record.clone();

        let mut seen = HashSet::new();
        assert!(seen.insert(record.clone()));
        assert!(!seen.insert(other.clone()));

        other.garage = 0;
        assert!(seen.insert(other));
    }
}
