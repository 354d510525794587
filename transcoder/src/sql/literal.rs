//! Value escaper: scalar values to SQL literal tokens.

use crate::models::Scalar;

/// The unquoted SQL null token.
pub const NULL: &str = "NULL";

/// Render a scalar as a SQL literal.
///
/// - null → `NULL`
/// - number → its decimal form, unquoted
/// - boolean → `1` / `0`
/// - text → single-quoted, with every `'` doubled
pub fn escape_value(value: &Scalar) -> String {
    match value {
        Scalar::Null => NULL.to_string(),
        Scalar::Bool(b) => bit(*b).to_string(),
        Scalar::Number(n) => n.to_string(),
        Scalar::Text(s) => quote(s),
    }
}

/// Render a scalar verbatim, unquoted. Text is emitted as-is.
///
/// Used for columns whose source values are already SQL-ready numbers.
pub fn raw_value(value: &Scalar) -> String {
    match value {
        Scalar::Null => NULL.to_string(),
        Scalar::Bool(b) => bit(*b).to_string(),
        Scalar::Number(n) => n.to_string(),
        Scalar::Text(s) => s.clone(),
    }
}

/// Wrap text in single quotes, doubling embedded quotes.
pub fn quote(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('\'');
    for c in text.chars() {
        if c == '\'' {
            out.push('\'');
        }
        out.push(c);
    }
    out.push('\'');
    out
}

fn bit(b: bool) -> &'static str {
    if b {
        "1"
    } else {
        "0"
    }
}
