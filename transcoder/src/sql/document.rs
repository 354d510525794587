//! Document generator: records to a complete SQL Server script.
//!
//! # Layout
//!
//! ```text
//! -- header comment (database, table)
//! USE <database>;
//! GO
//! -- TRUNCATE TABLE <table>;          (commented out, never run)
//! INSERT INTO <table> (<9 columns>)
//! VALUES
//! (...),                              up to `batch_size` tuples
//!
//! INSERT INTO <table> (<9 columns>)   one header per further batch
//! VALUES
//! (...);                              only the very last tuple ends with ';'
//!
//! GO
//!
//! PRINT '<status>: N';
//! GO
//! ```

use serde::Serialize;

use super::date::{normalize_date, DateOutcome};
use super::literal::{escape_value, quote, raw_value};
use crate::config::TranscodeOptions;
use crate::models::{column_list, ColumnRule, Field, Record};

const RULE: &str = "-- ============================================";

/// Counters collected while generating a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DocumentStats {
    /// Number of tuples written (one per input record).
    pub records: usize,
    /// Number of `INSERT ... VALUES` headers.
    pub batches: usize,
    /// Dates turned into `TRY_CONVERT` expressions.
    pub dates_converted: usize,
    /// Converted dates whose day had to be truncated.
    pub dates_repaired: usize,
    /// Non-empty dates that fell back to `NULL`.
    pub dates_malformed: usize,
}

impl DocumentStats {
    fn record_date(&mut self, outcome: &DateOutcome) {
        match outcome {
            DateOutcome::Missing => {}
            DateOutcome::Malformed => self.dates_malformed += 1,
            DateOutcome::Converted { repaired, .. } => {
                self.dates_converted += 1;
                if *repaired {
                    self.dates_repaired += 1;
                }
            }
        }
    }
}

/// A generated script and what went into it.
#[derive(Debug, Clone)]
pub struct Document {
    pub text: String,
    pub stats: DocumentStats,
}

/// Generate the full script for `records`.
pub fn generate_document(records: &[Record], options: &TranscodeOptions) -> Document {
    let mut stats = DocumentStats {
        records: records.len(),
        ..DocumentStats::default()
    };

    let mut lines: Vec<String> = Vec::new();
    push_preamble(&mut lines, options);

    let last = records.len().saturating_sub(1);
    let tuples: Vec<String> = records
        .iter()
        .enumerate()
        .map(|(i, record)| {
            let terminator = if i == last { ';' } else { ',' };
            format!("{}{}", tuple_line(record, &mut stats), terminator)
        })
        .collect();

    // chunks() panics on zero
    let batch_size = options.batch_size.max(1);
    for (i, batch) in tuples.chunks(batch_size).enumerate() {
        if i > 0 {
            lines.push(String::new());
        }
        push_insert_header(&mut lines, options);
        lines.extend(batch.iter().cloned());
        stats.batches += 1;
    }

    lines.push(String::new());
    lines.push("GO".to_string());
    lines.push(String::new());
    lines.push(format!(
        "PRINT {};",
        quote(&format!("{}: {}", options.status_message, records.len()))
    ));
    lines.push("GO".to_string());

    Document {
        text: lines.join("\n"),
        stats,
    }
}

/// Generate the script text only.
pub fn generate_sql(records: &[Record], options: &TranscodeOptions) -> String {
    generate_document(records, options).text
}

/// Build the parenthesized value list for one record, without terminator.
pub fn tuple_line(record: &Record, stats: &mut DocumentStats) -> String {
    let values: Vec<String> = Field::ALL
        .iter()
        .map(|&field| {
            let value = record.get(field);
            match field.rule() {
                ColumnRule::Escaped => escape_value(value),
                ColumnRule::Raw => raw_value(value),
                ColumnRule::Date => {
                    let outcome = normalize_date(value);
                    stats.record_date(&outcome);
                    outcome.to_sql()
                }
            }
        })
        .collect();

    format!("({})", values.join(", "))
}

fn push_preamble(lines: &mut Vec<String>, options: &TranscodeOptions) {
    lines.push(RULE.to_string());
    lines.push("-- Script generado automáticamente desde JSON".to_string());
    lines.push(format!("-- Base de datos: {}", options.database));
    lines.push(format!("-- Tabla: {}", options.table));
    lines.push(RULE.to_string());
    lines.push(String::new());
    lines.push(format!("USE {};", options.database));
    lines.push("GO".to_string());
    lines.push(String::new());
    lines.push("-- Eliminar datos existentes (opcional)".to_string());
    lines.push(format!("-- TRUNCATE TABLE {};", options.table));
    lines.push("-- GO".to_string());
    lines.push(String::new());
    lines.push("-- Insertar registros".to_string());
}

fn push_insert_header(lines: &mut Vec<String>, options: &TranscodeOptions) {
    lines.push(format!("INSERT INTO {} ({})", options.table, column_list()));
    lines.push("VALUES".to_string());
}
