//! High-level pipeline: JSON file in, SQL script out.
//!
//! # Example
//!
//! ```rust,ignore
//! use json2sql::{transcode_file, TranscodeOptions};
//! use std::path::Path;
//!
//! let stats = transcode_file(
//!     Path::new("data.json"),
//!     Path::new("insertar_datos_completos.sql"),
//!     &TranscodeOptions::default(),
//! )?;
//! println!("Wrote {} records", stats.records);
//! ```

use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::TranscodeOptions;
use crate::error::{OutputResult, PipelineResult};
use crate::logs::{log_info, log_info_indent, log_success, log_warning, LogEntry};
use crate::models::Record;
use crate::parser::read_records_file;
use crate::sql::{generate_document, Document, DocumentStats};

/// Mode of a newly created script before the umask applies.
#[cfg(unix)]
const NEW_SCRIPT_MODE: u32 = 0o644;

/// Summary of one run, written by `generate --stats-json`.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub input: PathBuf,
    /// `None` when the script went to stdout.
    pub output: Option<PathBuf>,
    pub options: TranscodeOptions,
    pub stats: DocumentStats,
    pub log: Vec<LogEntry>,
}

/// Read `input`, generate the script and write it atomically to `output`.
///
/// The destination is only replaced once the whole script has been
/// written, so a failed run leaves any previous file untouched.
pub fn transcode_file(
    input: &Path,
    output: &Path,
    options: &TranscodeOptions,
) -> PipelineResult<DocumentStats> {
    let document = transcode_to_string(input, options)?;

    log_info(format!("💾 Writing {}...", output.display()));
    write_atomic(output, &document.text)?;
    log_success(format!("Wrote {} bytes", document.text.len()));

    Ok(document.stats)
}

/// Read `input` and generate the script in memory.
pub fn transcode_to_string(input: &Path, options: &TranscodeOptions) -> PipelineResult<Document> {
    log_info(format!("📖 Reading {}...", input.display()));
    let records = read_records_file(input)?;
    log_success(format!("Read {} records", records.len()));

    Ok(transcode_records(&records, options))
}

/// Generate the script for already-loaded records and log what happened.
pub fn transcode_records(records: &[Record], options: &TranscodeOptions) -> Document {
    log_info(format!(
        "⚙️  Generating INSERT script for {}.{}...",
        options.database, options.table
    ));
    let document = generate_document(records, options);
    report_stats(&document.stats);
    document
}

fn report_stats(stats: &DocumentStats) {
    log_success(format!(
        "{} tuples in {} INSERT batch(es)",
        stats.records, stats.batches
    ));
    log_info_indent(format!("{} dates converted", stats.dates_converted), 1);

    if stats.dates_repaired > 0 {
        log_warning(format!(
            "{} date(s) had an over-long day and were truncated to two digits",
            stats.dates_repaired
        ));
    }
    if stats.dates_malformed > 0 {
        log_warning(format!(
            "{} date(s) were not DD/MM/YYYY and were written as NULL",
            stats.dates_malformed
        ));
    }
}

/// Write `content` to a temp file next to `path`, then rename it over `path`.
///
/// An existing target keeps its permissions. A new file gets `0o644`
/// (minus the umask) on unix.
pub fn write_atomic(path: &Path, content: &str) -> OutputResult<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut builder = tempfile::Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(NEW_SCRIPT_MODE));
    }
    let mut tmp = builder.tempfile_in(dir)?;

    if let Ok(existing) = fs::metadata(path) {
        tmp.as_file().set_permissions(existing.permissions())?;
    }

    tmp.write_all(content.as_bytes())?;
    tmp.as_file().sync_all()?;
    tmp.persist(path)?;
    Ok(())
}
