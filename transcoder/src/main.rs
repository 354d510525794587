//! json2sql CLI - Turn JSON time-tracking records into a SQL Server script
//!
//! # Main Command
//!
//! ```bash
//! json2sql generate -i data.json                  # writes insertar_datos_completos.sql
//! json2sql generate -i data.json -o out.sql --table dbo.horas --batch-size 100
//! json2sql generate -i data.json --stdout > out.sql
//! ```
//!
//! Every `generate` flag can also come from the environment (or a `.env`
//! file): `JSON2SQL_INPUT`, `JSON2SQL_OUTPUT`, `JSON2SQL_DATABASE`,
//! `JSON2SQL_TABLE`, `JSON2SQL_BATCH_SIZE`.
//!
//! # Debug Commands
//!
//! ```bash
//! json2sql escape "O'Brien"          # Show how a value is escaped
//! json2sql date 107/01/2026          # Show how a date is normalized
//! json2sql columns                   # Show the column layout
//! ```

use clap::{Parser, Subcommand};
use json2sql::config::{DEFAULT_BATCH_SIZE, DEFAULT_DATABASE, DEFAULT_OUTPUT, DEFAULT_TABLE};
use json2sql::logs::{log_error, log_warning, RUN_LOG};
use json2sql::sql::raw_value;
use json2sql::{
    escape_value, normalize_date, transcode_file, transcode_to_string, DateOutcome,
    DocumentStats, Field, RunReport, Scalar, TranscodeOptions,
};
use serde_json::Value;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "json2sql")]
#[command(version)]
#[command(about = "Transcode JSON records into SQL Server INSERT scripts", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the INSERT script from a JSON record file
    Generate {
        /// Input JSON file (array of records)
        #[arg(short, long, env = "JSON2SQL_INPUT")]
        input: PathBuf,

        /// Output SQL file (overwritten)
        #[arg(short, long, env = "JSON2SQL_OUTPUT", default_value = DEFAULT_OUTPUT)]
        output: PathBuf,

        /// Target database (USE statement)
        #[arg(long, env = "JSON2SQL_DATABASE", default_value = DEFAULT_DATABASE)]
        database: String,

        /// Target table
        #[arg(long, env = "JSON2SQL_TABLE", default_value = DEFAULT_TABLE)]
        table: String,

        /// Records per INSERT statement
        #[arg(
            long,
            env = "JSON2SQL_BATCH_SIZE",
            default_value_t = DEFAULT_BATCH_SIZE as u64,
            value_parser = clap::value_parser!(u64).range(1..)
        )]
        batch_size: u64,

        /// Print the script to stdout instead of writing a file
        #[arg(long)]
        stdout: bool,

        /// Only print warnings and errors
        #[arg(short, long)]
        quiet: bool,

        /// Write a JSON run report (options, counters, log) to this file
        #[arg(long)]
        stats_json: Option<PathBuf>,
    },

    /// Show how a value is escaped (JSON scalar, or bare text)
    Escape {
        /// Value, e.g. 'null', '3.5', '"text"' or O'Brien
        value: String,
    },

    /// Show how a DD/MM/YYYY date is normalized
    Date {
        /// Date text, e.g. 07/01/2026
        value: String,
    },

    /// Show the target column layout
    Columns,
}

fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            input,
            output,
            database,
            table,
            batch_size,
            stdout,
            quiet,
            stats_json,
        } => {
            RUN_LOG.set_quiet(quiet);
            let options = TranscodeOptions {
                database,
                table,
                batch_size: batch_size as usize,
                ..TranscodeOptions::default()
            };
            cmd_generate(&input, &output, options, stdout, stats_json.as_deref())
        }

        Commands::Escape { value } => cmd_escape(&value),

        Commands::Date { value } => cmd_date(&value),

        Commands::Columns => cmd_columns(),
    };

    if let Err(e) = result {
        log_error(e.to_string());
        println!("Error: {}", e);
        std::process::exit(1);
    }
}

fn cmd_generate(
    input: &Path,
    output: &Path,
    options: TranscodeOptions,
    to_stdout: bool,
    stats_json: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let stats = if to_stdout {
        let document = transcode_to_string(input, &options)?;
        let mut out = std::io::stdout().lock();
        out.write_all(document.text.as_bytes())?;
        out.flush()?;
        eprintln!("✅ SQL generated: {} records", document.stats.records);
        document.stats
    } else {
        let stats = transcode_file(input, output, &options)?;
        println!("SQL generado exitosamente: {}", output.display());
        println!("   Total de registros: {}", stats.records);
        stats
    };

    // The script is already written; a failed report does not fail the run
    if let Some(path) = stats_json {
        let written = (!to_stdout).then(|| output.to_path_buf());
        if let Err(e) = write_report(path, input, written, options, stats) {
            log_warning(format!("Could not write report {}: {}", path.display(), e));
        }
    }

    Ok(())
}

fn write_report(
    path: &Path,
    input: &Path,
    output: Option<PathBuf>,
    options: TranscodeOptions,
    stats: DocumentStats,
) -> Result<(), Box<dyn std::error::Error>> {
    let report = RunReport {
        input: input.to_path_buf(),
        output,
        options,
        stats,
        log: RUN_LOG.entries(),
    };
    let json = serde_json::to_string_pretty(&report)?;
    fs::write(path, json)?;
    eprintln!("💾 Report written to: {}", path.display());
    Ok(())
}

fn cmd_escape(value: &str) -> Result<(), Box<dyn std::error::Error>> {
    // Anything that isn't JSON is taken as bare text
    let scalar = match serde_json::from_str::<Value>(value) {
        Ok(json) => Scalar::from_json(&json)
            .map_err(|found| format!("expected a scalar, got {}", found))?,
        Err(_) => Scalar::Text(value.to_string()),
    };

    println!("escaped: {}", escape_value(&scalar));
    println!("raw:     {}", raw_value(&scalar));
    Ok(())
}

fn cmd_date(value: &str) -> Result<(), Box<dyn std::error::Error>> {
    let outcome = normalize_date(&Scalar::Text(value.to_string()));
    let note = match &outcome {
        DateOutcome::Missing => "missing",
        DateOutcome::Malformed => "malformed, written as NULL",
        DateOutcome::Converted { repaired: true, .. } => "converted, day repaired",
        DateOutcome::Converted { .. } => "converted",
    };

    println!("{}", outcome.to_sql());
    eprintln!("({})", note);
    Ok(())
}

fn cmd_columns() -> Result<(), Box<dyn std::error::Error>> {
    println!("{:<14} {:<14} rule", "json key", "column");
    for field in Field::ALL {
        println!(
            "{:<14} {:<14} {}",
            field.key(),
            field.column(),
            field.rule().describe()
        );
    }
    Ok(())
}
