//! unitconv - command-line unit converter
//!
//! Converts each number given on the command line (or read from standard
//! input when there are none) from one unit to another:
//!
//! ```text
//! unitconv --from celsius --to fahrenheit 100 -40
//! 100 °C = 212 °F
//! -40 °C = -40 °F
//! ```
//!
//! Logging goes to stderr and is controlled by `RUST_LOG` (default `warn`).

mod input;
mod output;

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::Parser;
use thiserror::Error;
use tracing::{debug, error};
use unitconv_core::ConversionError;
use unitconv_plugin::Engine;
use unitconv_units::standard_engine;

#[derive(Parser, Debug)]
#[command(name = "unitconv", about = "Convert numbers between units", version)]
struct Cli {
    /// The source unit to convert from
    #[arg(long, required_unless_present = "list")]
    from: Option<String>,

    /// The destination unit to convert to
    #[arg(long, required_unless_present = "list")]
    to: Option<String>,

    /// Values to convert; read from stdin when omitted
    #[arg(allow_negative_numbers = true)]
    values: Vec<String>,

    /// List available units and exit
    #[arg(long)]
    list: bool,

    /// Print the conversion chain before the results
    #[arg(long)]
    explain: bool,

    /// Emit JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Conversion(#[from] ConversionError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    let engine = match standard_engine() {
        Ok(engine) => engine,
        Err(e) => {
            error!(error = %e, "failed to build conversion engine");
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match run(&cli, &engine, io::stdin().lock(), &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!(error = %e, "conversion failed");
            if cli.json {
                write_line_or_stderr(&mut out, &output::error_json(&engine, &e).to_string());
            } else {
                for line in output::error_lines(&engine, &e) {
                    eprintln!("{}", line);
                }
            }
            ExitCode::FAILURE
        }
    }
}

fn run<R: BufRead, W: Write>(cli: &Cli, engine: &Engine, stdin: R, out: &mut W) -> Result<(), CliError> {
    if cli.list {
        let listing = output::unit_listing(engine);
        if cli.json {
            writeln!(out, "{}", serde_json::json!(listing))?;
        } else {
            for line in output::listing_lines(&listing) {
                writeln!(out, "{}", line)?;
            }
        }
        return Ok(());
    }

    // clap enforces both flags unless --list is given
    let from = cli.from.as_deref().unwrap_or_default();
    let to = cli.to.as_deref().unwrap_or_default();
    let (from_unit, from_info) = engine.resolve_info(from)?;
    let (to_unit, to_info) = engine.resolve_info(to)?;
    let path = engine.find_path(from_unit, to_unit)?;

    let raw = if cli.values.is_empty() {
        input::read_lines(stdin)?
    } else {
        cli.values.clone()
    };
    let values = input::parse_values(&raw)?;

    let report = output::build_report(engine, from_info, to_info, &path, &values);

    if cli.json {
        writeln!(out, "{}", serde_json::json!(report))?;
        return Ok(());
    }

    if cli.explain {
        writeln!(out, "{}", report.path_line())?;
    }
    for line in report.text_lines() {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

/// Write one line to `out`, or to stderr if that write fails.
/// Returns whether `out` took the line.
fn write_line_or_stderr<W: Write>(out: &mut W, line: &str) -> bool {
    match writeln!(out, "{}", line) {
        Ok(()) => true,
        Err(e) => {
            debug!(error = %e, "stdout write failed, using stderr");
            eprintln!("{}", line);
            false
        }
    }
}

fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(fmt::layer().with_writer(io::stderr))
        .try_init();
}
