//! Date normalizer: `DD/MM/YYYY` text to a SQL Server date expression.
//!
//! The normalizer never fails. Anything it cannot split into day, month
//! and year becomes `NULL`; callers that care can inspect the
//! [`DateOutcome`] to count such fallbacks.
//!
//! ```text
//! "07/01/2026"   -> TRY_CONVERT(DATE, '07/01/2026', 103)
//! "107/01/2026"  -> TRY_CONVERT(DATE, '07/01/2026', 103)   (day repaired)
//! "2026-01-07"   -> NULL                                    (malformed)
//! "" | "null"    -> NULL                                    (missing)
//! ```

use super::literal::{quote, NULL};
use crate::models::Scalar;

/// SQL Server `CONVERT` style for `dd/mm/yyyy`.
pub const STYLE_DMY: u16 = 103;

/// Result of normalizing one date value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateOutcome {
    /// Null, absent, empty or the literal `"null"`.
    Missing,
    /// A value that could not be split into three parts, or a non-string.
    Malformed,
    /// A parsed date. `repaired` is set when an over-long day was truncated.
    Converted {
        day: String,
        month: String,
        year: String,
        repaired: bool,
    },
}

impl DateOutcome {
    /// The SQL token for this outcome.
    pub fn to_sql(&self) -> String {
        match self {
            DateOutcome::Missing | DateOutcome::Malformed => NULL.to_string(),
            DateOutcome::Converted { day, month, year, .. } => format!(
                "TRY_CONVERT(DATE, {}, {})",
                quote(&format!("{day}/{month}/{year}")),
                STYLE_DMY
            ),
        }
    }
}

/// Classify and parse a date value.
pub fn normalize_date(value: &Scalar) -> DateOutcome {
    let text = match value {
        Scalar::Null => return DateOutcome::Missing,
        Scalar::Text(s) => s.as_str(),
        _ => return DateOutcome::Malformed,
    };

    if text.is_empty() || text == "null" {
        return DateOutcome::Missing;
    }

    let parts: Vec<&str> = text.split('/').collect();
    let [day, month, year] = parts.as_slice() else {
        return DateOutcome::Malformed;
    };

    // Corrupted exports prefix a stray digit to the day ("107" for "07").
    let day_len = day.chars().count();
    let (day, repaired) = if day_len > 2 {
        (day.chars().skip(day_len - 2).collect::<String>(), true)
    } else {
        (day.to_string(), false)
    };

    DateOutcome::Converted {
        day,
        month: month.to_string(),
        year: year.to_string(),
        repaired,
    }
}

/// Normalize a date value straight to its SQL token.
pub fn convert_date(value: &Scalar) -> String {
    normalize_date(value).to_sql()
}
