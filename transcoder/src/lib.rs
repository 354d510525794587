//! # json2sql - JSON records to SQL Server INSERT scripts
//!
//! json2sql reads a JSON array of flat time-tracking records (phase, task,
//! milestone, dates, completion, assignee...) and writes a script of
//! batched `INSERT` statements for the `controlhorario` table.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  JSON File  │────▶│   Parser    │────▶│  SQL Gen    │────▶│  .sql File  │
//! │  (UTF-8)    │     │  (Records)  │     │ (escape+dt) │     │  (atomic)   │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use json2sql::{parse_records, generate_sql, TranscodeOptions};
//!
//! let records = parse_records(r#"[{"phase":"P1","task":"T1"}]"#)?;
//! let sql = generate_sql(&records, &TranscodeOptions::default());
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Hierarchical error types
//! - [`models`] - Records, scalar values and the column layout
//! - [`parser`] - JSON record reading
//! - [`sql`] - Value escaping, date normalization, script generation
//! - [`pipeline`] - File-to-file orchestration
//! - [`config`] - Defaults and options
//! - [`logs`] - Run log

// Core modules
pub mod config;
pub mod error;
pub mod logs;
pub mod models;

// Input
pub mod parser;

// Generation
pub mod sql;

// Orchestration
pub mod pipeline;

// =============================================================================
// Re-exports - Errors
// =============================================================================

pub use error::{InputError, OutputError, PipelineError};

// =============================================================================
// Re-exports - Models and config
// =============================================================================

pub use config::TranscodeOptions;
pub use models::{ColumnRule, Field, Record, Scalar};

// =============================================================================
// Re-exports - Parsing
// =============================================================================

pub use parser::{parse_records, read_records_file, records_from_value};

// =============================================================================
// Re-exports - SQL generation
// =============================================================================

pub use sql::{
    convert_date,
    escape_value,
    generate_document,
    generate_sql,
    normalize_date,
    DateOutcome,
    Document,
    DocumentStats,
};

// =============================================================================
// Re-exports - Pipeline
// =============================================================================

pub use pipeline::{transcode_file, transcode_records, transcode_to_string, write_atomic, RunReport};
