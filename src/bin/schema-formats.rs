//! Schema Formats CLI tool
//!
//! A command-line front end for format validation and date handling.

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

use schema_formats::batch::{check_files, expand_patterns};
use schema_formats::date::{
    find_date, format_date, parse_date, parse_date_with_pivot, DateFormatOptions,
};
use schema_formats::{validate_format, Error, FormatName};

/// Exit status when a run completed but found invalid values
const EXIT_INVALID: u8 = 2;

/// Schema Formats - Validate JSON Schema string formats and handle dates
#[derive(Parser)]
#[command(name = "schema-formats")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    # Check a single value
    schema-formats validate email user@example.com

    # Check every line of some files
    schema-formats check --format uuid \"ids/*.txt\"

    # Reformat a date found in free text
    schema-formats format-date \"shipped 11/05/2023\" --date-format \"DDDD, MMMM DS YYYY\"

    # Read the template from a JSON options file
    schema-formats format-date 2023-11-05 --options form-options.json")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the supported format names
    Formats,

    /// Validate values against a format
    Validate {
        /// Format name (e.g. "email", "date-time", "ipv6")
        #[arg(value_parser = FormatName::from_str)]
        format: FormatName,

        /// Values to check
        #[arg(required = true)]
        values: Vec<String>,
    },

    /// Validate every non-blank line of text files against a format
    Check {
        /// Format name
        #[arg(short, long, value_parser = FormatName::from_str)]
        format: FormatName,

        /// Input files. Supports glob patterns like "*.txt"
        #[arg(required = true)]
        inputs: Vec<String>,
    },

    /// Print the first date-like substring of some text
    FindDate {
        /// Text to search
        text: String,
    },

    /// Read a date out of text and print it as YYYY-MM-DD
    ParseDate {
        /// Text containing a date
        text: String,

        /// Year used to window two-digit years (defaults to the current year)
        #[arg(long)]
        pivot_year: Option<i32>,
    },

    /// Render a date through a token template
    FormatDate {
        /// Date or text containing a date
        date: String,

        /// Token template, e.g. "MMMM D, YYYY"
        #[arg(short = 'f', long, env = "SCHEMA_FORMATS_DATE_FORMAT")]
        date_format: Option<String>,

        /// JSON file with date format options ({"dateFormat": "..."})
        #[arg(long)]
        options: Option<PathBuf>,

        /// Year used to window two-digit years (defaults to the current year)
        #[arg(long)]
        pivot_year: Option<i32>,
    },
}

fn main() -> ExitCode {
    init_logging();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Formats => cmd_formats(),
        Commands::Validate { format, values } => cmd_validate(format, &values),
        Commands::Check { format, inputs } => cmd_check(format, &inputs),
        Commands::FindDate { text } => cmd_find_date(&text),
        Commands::ParseDate { text, pivot_year } => cmd_parse_date(&text, pivot_year),
        Commands::FormatDate {
            date,
            date_format,
            options,
            pivot_year,
        } => cmd_format_date(&date, date_format, options, pivot_year),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Log to stderr, filtered by RUST_LOG (default: warnings only)
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// List format names
fn cmd_formats() -> anyhow::Result<ExitCode> {
    for name in FormatName::ALL {
        println!("{}", name);
    }
    Ok(ExitCode::SUCCESS)
}

/// Validate values given on the command line
fn cmd_validate(format: FormatName, values: &[String]) -> anyhow::Result<ExitCode> {
    let mut all_valid = true;

    for value in values {
        let valid = validate_format(format, value);
        println!("{}\t{}", if valid { "valid" } else { "invalid" }, value);
        all_valid &= valid;
    }

    Ok(if all_valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(EXIT_INVALID)
    })
}

/// Validate the lines of files
fn cmd_check(format: FormatName, inputs: &[String]) -> anyhow::Result<ExitCode> {
    let paths = expand_patterns(inputs)?;

    eprintln!("Checking {} file(s) against {}...", paths.len(), format);

    let report = check_files(&paths, format)?;

    for failure in &report.failures {
        println!(
            "{}:{}: {}",
            failure.path.display(),
            failure.line,
            failure.value
        );
    }

    eprintln!(
        "{} value(s) checked, {} invalid",
        report.checked,
        report.failures.len()
    );

    Ok(if report.is_clean() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(EXIT_INVALID)
    })
}

/// Print the date literal found in text
fn cmd_find_date(text: &str) -> anyhow::Result<ExitCode> {
    let found = find_date(text).ok_or_else(|| Error::UnparseableDate(text.to_string()))?;
    println!("{}", found);
    Ok(ExitCode::SUCCESS)
}

/// Print the calendar date read from text
fn cmd_parse_date(text: &str, pivot_year: Option<i32>) -> anyhow::Result<ExitCode> {
    let date = read_date(text, pivot_year)?;
    println!("{}", date.format("%Y-%m-%d"));
    Ok(ExitCode::SUCCESS)
}

/// Print a date rendered through a template
fn cmd_format_date(
    text: &str,
    date_format: Option<String>,
    options_path: Option<PathBuf>,
    pivot_year: Option<i32>,
) -> anyhow::Result<ExitCode> {
    // Options file first, then the flag (or its environment variable) on top
    let mut options = match options_path {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("reading options file {}", path.display()))?;
            DateFormatOptions::from_json(&json)?
        }
        None => DateFormatOptions::default(),
    };
    if date_format.is_some() {
        options.date_format = date_format;
    }

    let date = read_date(text, pivot_year)?;
    let rendered = format_date(date, &options).ok_or_else(|| Error::UnparseableDate(text.to_string()))?;
    println!("{}", rendered);
    Ok(ExitCode::SUCCESS)
}

fn read_date(text: &str, pivot_year: Option<i32>) -> anyhow::Result<chrono::NaiveDate> {
    let date = match pivot_year {
        Some(year) => parse_date_with_pivot(text, year),
        None => parse_date(text),
    };
    date.ok_or_else(|| Error::UnparseableDate(text.to_string()).into())
}
