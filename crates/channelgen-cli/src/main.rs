// crates/channelgen-cli/src/main.rs
// ============================================================================
// Module: channelgen CLI Entry Point
// Description: One-shot generator for the network-configuration document.
// Purpose: Parse the organization table and write configtx.yaml.
// Dependencies: channelgen-core, clap, thiserror
// ============================================================================

//! ## Overview
//! The channelgen CLI runs the generator pipeline once and exits: it builds
//! the organization table from defaults or `--org` overrides, derives and
//! assembles the document, and writes it atomically to the destination path.
//! Every failure is fatal and maps to a non-zero exit code.

// ============================================================================
// SECTION: Modules
// ============================================================================


// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use channelgen_core::DEFAULT_OUTPUT_FILENAME;
use channelgen_core::generate;
use channelgen_core::write_document;
use clap::ArgAction;
use clap::Parser;
use thiserror::Error;

// ============================================================================
// SECTION: Defaults
// ============================================================================

/// Built-in organization table used when no `--org` override is given.
const DEFAULT_ORGANIZATIONS: [(&str, u32); 2] = [("org1", 7051), ("org2", 9051)];

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(name = "channelgen", disable_help_subcommand = true, disable_version_flag = true)]
struct Cli {
    /// Print version information and exit.
    #[arg(long = "version", action = ArgAction::SetTrue)]
    show_version: bool,
    /// Organization table entry as KEY=PORT; repeat to replace the defaults.
    #[arg(long = "org", value_name = "KEY=PORT")]
    orgs: Vec<String>,
    /// Destination path for the generated document.
    #[arg(long = "out", value_name = "PATH", default_value = DEFAULT_OUTPUT_FILENAME)]
    out: PathBuf,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI error wrapper for rendered error messages.
#[derive(Debug, Error)]
#[error("{message}")]
struct CliError {
    /// Human-readable error message.
    message: String,
}

impl CliError {
    /// Constructs a new [`CliError`] from a rendered message.
    const fn new(message: String) -> Self {
        Self {
            message,
        }
    }
}

/// CLI result alias for fallible operations.
type CliResult<T> = Result<T, CliError>;

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => emit_error(&err.to_string()),
    }
}

/// Executes the generator pipeline for the parsed arguments.
fn run() -> CliResult<ExitCode> {
    let cli = Cli::parse();

    if cli.show_version {
        let version = env!("CARGO_PKG_VERSION");
        write_stdout_line(&format!("channelgen {version}"))
            .map_err(|err| CliError::new(output_error("stdout", &err)))?;
        return Ok(ExitCode::SUCCESS);
    }

    let entries = organization_entries(&cli.orgs)?;
    let document = generate(&entries).map_err(|err| CliError::new(err.to_string()))?;
    write_document(&cli.out, &document).map_err(|err| CliError::new(err.to_string()))?;
    write_stdout_line(&format!("wrote {}", cli.out.display()))
        .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Input Table
// ============================================================================

/// Builds the organization table from overrides or the built-in defaults.
fn organization_entries(overrides: &[String]) -> CliResult<BTreeMap<String, u32>> {
    if overrides.is_empty() {
        return Ok(DEFAULT_ORGANIZATIONS
            .iter()
            .map(|(key, port)| ((*key).to_string(), *port))
            .collect());
    }
    let mut entries = BTreeMap::new();
    for raw in overrides {
        let (key, port) = parse_org_override(raw)?;
        if entries.insert(key.clone(), port).is_some() {
            return Err(CliError::new(format!("duplicate organization key `{key}`")));
        }
    }
    Ok(entries)
}

/// Parses a single `KEY=PORT` override.
fn parse_org_override(raw: &str) -> CliResult<(String, u32)> {
    let Some((key, port)) = raw.split_once('=') else {
        return Err(CliError::new(format!("expected KEY=PORT, got `{raw}`")));
    };
    let port: u32 = port
        .parse()
        .map_err(|_| CliError::new(format!("port `{port}` for `{key}` is not an integer")))?;
    Ok((key.to_string(), port))
}

// ============================================================================
// SECTION: Output Helpers
// ============================================================================

/// Writes a line to stdout, honoring stream errors.
fn write_stdout_line(message: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}")
}

/// Writes a line to stderr, honoring stream errors.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}

/// Formats an output-stream failure message.
fn output_error(stream: &str, error: &std::io::Error) -> String {
    format!("failed to write to {stream}: {error}")
}

/// Reports an error on stderr and maps it to a failure exit code.
fn emit_error(message: &str) -> ExitCode {
    let _ = write_stderr_line(message);
    ExitCode::FAILURE
}
