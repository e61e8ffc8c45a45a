use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use wxarchive_core::{DecodedRecord, FieldSelection, RECORD_LEN, decode_record_selected};

#[derive(Parser, Debug)]
#[command(name = "wxarchive")]
#[command(version)]
#[command(
    about = "Decoder for 52-byte weather-station archive record dumps.",
    long_about = None,
    after_help = "Examples:\n  wxarchive decode archive.bin -o records.json\n  wxarchive decode archive.bin --stdout --pretty\n  wxarchive decode archive.bin --stdout --exclude leaf_wet1 --exclude leaf_wet2"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Decode a dump of concatenated 52-byte archive records to JSON.
    Decode {
        /// Path to a binary dump of archive records
        input: PathBuf,

        /// Output path (JSON array of decoded records)
        #[arg(short = 'o', long, required_unless_present = "stdout")]
        output: Option<PathBuf>,

        /// Write JSON to stdout
        #[arg(long, conflicts_with = "output")]
        stdout: bool,

        /// Pretty-print JSON output
        #[arg(long, conflicts_with = "compact")]
        pretty: bool,

        /// Compact JSON output (default)
        #[arg(long)]
        compact: bool,

        /// Suppress non-error output
        #[arg(long)]
        quiet: bool,

        /// Field name to omit from the output (repeatable)
        #[arg(long = "exclude", value_name = "FIELD")]
        excluded: Vec<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Decode {
            input,
            output,
            stdout,
            pretty,
            compact,
            quiet,
            excluded,
        } => cmd_decode(input, output, stdout, pretty, compact, quiet, excluded),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err.message);
            if let Some(hint) = err.hint {
                eprintln!("hint: {}", hint);
            }
            ExitCode::from(2)
        }
    }
}

#[derive(Debug)]
struct CliError {
    message: String,
    hint: Option<String>,
}

impl CliError {
    fn new(message: impl Into<String>, hint: Option<String>) -> Self {
        Self {
            message: message.into(),
            hint,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::new(err.to_string(), None)
    }
}

fn cmd_decode(
    input: PathBuf,
    output: Option<PathBuf>,
    stdout: bool,
    pretty: bool,
    compact: bool,
    quiet: bool,
    excluded: Vec<String>,
) -> Result<(), CliError> {
    if pretty && compact {
        return Err(CliError::new(
            "cannot use --pretty and --compact together",
            Some("choose one output format".to_string()),
        ));
    }

    let selection = build_selection(&excluded)?;

    if !input.exists() {
        return Err(CliError::new(
            format!("input file not found: {}", input.display()),
            Some("pass a binary dump of 52-byte archive records".to_string()),
        ));
    }
    let meta = fs::metadata(&input)
        .with_context(|| format!("Failed to read input file: {}", input.display()))?;
    if !meta.is_file() {
        return Err(CliError::new(
            format!("input is not a file: {}", input.display()),
            Some("pass a binary dump of 52-byte archive records".to_string()),
        ));
    }

    let bytes = fs::read(&input)
        .with_context(|| format!("Failed to read input file: {}", input.display()))?;
    if bytes.len() % RECORD_LEN != 0 {
        return Err(CliError::new(
            format!(
                "input size {} is not a multiple of the {}-byte record length",
                bytes.len(),
                RECORD_LEN
            ),
            Some("the dump may be truncated or not an archive dump".to_string()),
        ));
    }

    let records = decode_dump(&bytes, &selection)?;
    let json = serialize_records(&records, pretty)?;

    if stdout {
        println!("{}", json);
        return Ok(());
    }

    let output = output.expect("output required when not using stdout");
    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create output directory: {}", parent.display())
            })?;
        }
    }
    fs::write(&output, json)
        .with_context(|| format!("Failed to write output: {}", output.display()))?;

    if !quiet {
        eprintln!(
            "OK: {} record(s) decoded -> {}",
            records.len(),
            output.display()
        );
    }
    Ok(())
}

fn build_selection(excluded: &[String]) -> Result<FieldSelection, CliError> {
    FieldSelection::excluding(excluded.iter().map(String::as_str)).map_err(|err| {
        CliError::new(
            err.to_string(),
            Some("run with --help to see the canonical field names".to_string()),
        )
    })
}

fn decode_dump(bytes: &[u8], selection: &FieldSelection) -> Result<Vec<DecodedRecord>, CliError> {
    bytes
        .chunks(RECORD_LEN)
        .enumerate()
        .map(|(index, chunk)| {
            decode_record_selected(chunk, selection)
                .with_context(|| format!("Failed to decode record {}", index))
                .map_err(Into::into)
        })
        .collect()
}

fn serialize_records(records: &[DecodedRecord], pretty: bool) -> Result<String, CliError> {
    if pretty {
        serde_json::to_string_pretty(records)
            .context("JSON serialization failed")
            .map_err(Into::into)
    } else {
        serde_json::to_string(records)
            .context("JSON serialization failed")
            .map_err(Into::into)
    }
}
