//! Transcoder configuration.
//!
//! Defaults reproduce the script the time-tracking team has always loaded
//! into SQL Server. Every value can be overridden from the CLI or the
//! environment (see `main.rs`).

use serde::{Deserialize, Serialize};

/// Default target database.
pub const DEFAULT_DATABASE: &str = "bbddcontrolhoras";

/// Default target table.
pub const DEFAULT_TABLE: &str = "controlhorario";

/// Records per `INSERT ... VALUES` statement.
pub const DEFAULT_BATCH_SIZE: usize = 50;

/// Default output file name.
pub const DEFAULT_OUTPUT: &str = "insertar_datos_completos.sql";

/// Text of the closing `PRINT` statement, followed by the record count.
pub const DEFAULT_STATUS_MESSAGE: &str = "Total de registros insertados";

/// Options for generating a script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscodeOptions {
    /// Database selected with `USE`.
    pub database: String,

    /// Table receiving the rows. Emitted verbatim.
    pub table: String,

    /// Maximum tuples per `INSERT` statement. Must be at least 1.
    pub batch_size: usize,

    /// Prefix of the `PRINT` status line.
    pub status_message: String,
}

impl Default for TranscodeOptions {
    fn default() -> Self {
        Self {
            database: DEFAULT_DATABASE.to_string(),
            table: DEFAULT_TABLE.to_string(),
            batch_size: DEFAULT_BATCH_SIZE,
            status_message: DEFAULT_STATUS_MESSAGE.to_string(),
        }
    }
}
