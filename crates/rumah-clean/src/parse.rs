//! Per-cell parsers for listing fields
//!
//! Each parser turns one [`RawCell`] into a typed value or a [`FieldError`].
//! Positivity of price and areas is a separate check in the cleaner, so a
//! zero here parses successfully.

use crate::raw::RawCell;
use thiserror::Error;

/// Why a single cell could not be used
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FieldError {
    #[error("missing")]
    Missing,

    #[error("not a non-negative number: {0:?}")]
    Malformed(String),
}

fn malformed(cell: &RawCell) -> FieldError {
    FieldError::Malformed(cell.to_string())
}

/// Listing name; trimmed, never empty
pub fn name(cell: &RawCell) -> Result<String, FieldError> {
    let name = cell.to_string().trim().to_string();
    if name.is_empty() {
        return Err(FieldError::Missing);
    }
    Ok(name)
}

/// Price in whole Rupiah
///
/// Text may carry a leading `Rp`/`IDR` marker and thousands separators, as in
/// `"Rp 1.250.000.000"` or `"IDR 950,000,000"`. Separators must split the
/// digits into groups of three, so a decimal tail such as `"100000.00"` or
/// `"Rp 1.250.000,50"` is malformed rather than folded into the value.
pub fn price(cell: &RawCell) -> Result<u64, FieldError> {
    match cell {
        RawCell::Empty => Err(FieldError::Missing),
        RawCell::Number(n) => whole_number(*n, u64::MAX as f64).ok_or_else(|| malformed(cell)),
        RawCell::Text(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return Err(FieldError::Missing);
            }

            let digits = ungroup(strip_currency(trimmed).trim()).ok_or_else(|| malformed(cell))?;
            digits.parse().map_err(|_| malformed(cell))
        },
    }
}

/// Digits of a plain or thousands-grouped integer
///
/// One separator kind (`.`, `,` or whitespace) per number; the leading group
/// has one to three digits and every later group exactly three.
fn ungroup(text: &str) -> Option<String> {
    let is_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());

    let Some(sep) = text.chars().find(|c| !c.is_ascii_digit()) else {
        return is_digits(text).then(|| text.to_string());
    };
    if !(sep == '.' || sep == ',' || sep.is_whitespace()) {
        return None;
    }

    let mut groups = text.split(sep);
    let first = groups.next().filter(|&g| is_digits(g) && g.len() <= 3)?;
    let mut digits = first.to_string();
    for group in groups {
        if group.len() != 3 || !is_digits(group) {
            return None;
        }
        digits.push_str(group);
    }
    Some(digits)
}

fn strip_currency(text: &str) -> &str {
    for marker in ["idr", "rp"] {
        if let Some(head) = text.get(..marker.len()) {
            if head.eq_ignore_ascii_case(marker) {
                let rest = &text[marker.len()..];
                return rest.strip_prefix('.').unwrap_or(rest);
            }
        }
    }
    text
}

/// Area in square meters; decimals allowed, `,` accepted as decimal point
///
/// `"1,250"` and `"1.250"` read equally well as a grouped thousand or a
/// three-place decimal, so they are malformed.
pub fn area(cell: &RawCell) -> Result<f64, FieldError> {
    let value = match cell {
        RawCell::Empty => return Err(FieldError::Missing),
        RawCell::Number(n) => *n,
        RawCell::Text(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return Err(FieldError::Missing);
            }
            if !trimmed
                .bytes()
                .all(|b| b.is_ascii_digit() || b == b'.' || b == b',')
            {
                return Err(malformed(cell));
            }
            if looks_grouped(trimmed) {
                return Err(malformed(cell));
            }
            trimmed.replace(',', ".").parse::<f64>().map_err(|_| malformed(cell))?
        },
    };

    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(malformed(cell))
    }
}

fn looks_grouped(text: &str) -> bool {
    text.split_once(['.', ','])
        .is_some_and(|(whole, frac)| {
            (1..=3).contains(&whole.len()) && !whole.starts_with('0') && frac.len() == 3
        })
}

/// Room or garage count
pub fn count(cell: &RawCell) -> Result<u32, FieldError> {
    match cell {
        RawCell::Empty => Err(FieldError::Missing),
        RawCell::Number(n) => whole_number(*n, f64::from(u32::MAX) + 1.0)
            .map(|v| v as u32)
            .ok_or_else(|| malformed(cell)),
        RawCell::Text(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return Err(FieldError::Missing);
            }
            if !trimmed.bytes().all(|b| b.is_ascii_digit()) {
                return Err(malformed(cell));
            }
            trimmed.parse().map_err(|_| malformed(cell))
        },
    }
}

/// Integral `n` in `0..bound`
fn whole_number(n: f64, bound: f64) -> Option<u64> {
    (n.is_finite() && n >= 0.0 && n.fract() == 0.0 && n < bound).then_some(n as u64)
}
