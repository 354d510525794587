//! SQL Server script generation.
//!
//! - `literal`: value escaper (scalars to SQL tokens)
//! - `date`: `DD/MM/YYYY` normalizer
//! - `document`: full script assembly with batching
//!
//! ## Usage Flow
//!
//! ```text
//! JSON → parser::read_records_file → Vec<Record> → document::generate_document → script text
//! ```

pub mod date;
pub mod document;
pub mod literal;

pub use date::{convert_date, normalize_date, DateOutcome, STYLE_DMY};
pub use document::{generate_document, generate_sql, tuple_line, Document, DocumentStats};
pub use literal::{escape_value, quote, raw_value, NULL};
