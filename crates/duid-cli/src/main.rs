use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use duid_core::{Duid, DuidError, DuidReport, ParseDuidError};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (commit ",
    env!("DUID_BUILD_COMMIT"),
    ", ",
    env!("DUID_BUILD_DATE"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "decode-duid")]
#[command(version, long_version = LONG_VERSION)]
#[command(
    about = "Decode a DHCPv6 Unique Identifier (DUID) given as hex.",
    long_about = None,
    after_help = "Examples:\n  decode-duid 00:01:00:01:2c:3d:4e:5f:aa:bb:cc:dd:ee:ff\n  decode-duid --format text 0003000100112233aabb\n  decode-duid --format json --pretty 00:02:00:00:00:09:01:02:03\n\nSet DUID_LOG (e.g. DUID_LOG=debug) to control log output."
)]
struct Cli {
    /// DUID hex string, colons optional (e.g. 00:03:00:01:aa:bb:cc:dd:ee:ff)
    duid: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Line)]
    format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    /// Canonical one-line form
    Line,
    /// Field-by-field breakdown
    Text,
    /// Versioned JSON report
    Json,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };
    init_logging(cli.verbose);

    match cmd_decode(&cli.duid, cli.format, cli.pretty) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            debug!(input = %cli.duid, error = %err, "decode failed");
            eprintln!("error: {}", err.message);
            if let Some(hint) = err.hint {
                eprintln!("hint: {}", hint);
            }
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env("DUID_LOG").unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
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
        CliError::new(format!("{err:#}"), None)
    }
}

impl From<ParseDuidError> for CliError {
    fn from(err: ParseDuidError) -> Self {
        match err {
            ParseDuidError::Input(err) => CliError::new(
                err.to_string(),
                Some(
                    "use only hex characters (0-9, a-f, A-F) with optional ':' separators"
                        .to_string(),
                ),
            ),
            ParseDuidError::Duid(err) => {
                let hint = match err {
                    DuidError::Empty => Some("pass at least the 2-byte DUID type".to_string()),
                    DuidError::TooLong { max, .. } => {
                        Some(format!("a DUID is at most {max} bytes long"))
                    }
                    DuidError::TooShort { .. }
                    | DuidError::TrailingData { .. }
                    | DuidError::RegisteredType { .. } => None,
                };
                CliError::new(format!("failed to decode DUID: {err}"), hint)
            }
        }
    }
}

fn cmd_decode(input: &str, format: OutputFormat, pretty: bool) -> Result<(), CliError> {
    let duid: Duid = input.parse()?;
    debug!(
        duid_type = duid.duid_type().code(),
        len = duid.encoded_len(),
        "decoded DUID"
    );

    if pretty && format != OutputFormat::Json {
        warn!("--pretty only applies to --format json");
    }

    let output = render(&duid, format, pretty)?;
    print!("{output}");
    Ok(())
}

fn render(duid: &Duid, format: OutputFormat, pretty: bool) -> Result<String, CliError> {
    match format {
        OutputFormat::Line => Ok(format!("{duid}\n")),
        OutputFormat::Text => Ok(DuidReport::from_duid(duid).render_text()),
        OutputFormat::Json => {
            let report = DuidReport::from_duid(duid);
            let json = if pretty {
                serde_json::to_string_pretty(&report)
            } else {
                serde_json::to_string(&report)
            }
            .context("JSON serialization failed")?;
            Ok(format!("{json}\n"))
        }
    }
}
