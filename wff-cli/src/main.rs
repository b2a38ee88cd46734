//! Command-line interface for wff
//! This binary validates files of propositional logic formulas written in prefix notation.
//!
//! Usage:
//!   wff `<path>` [--debug] [--format `<format>`] [--config `<file>`]   - Validate a batch file
//!   wff --teste                                                   - Run the built-in samples
//!
//! A batch file has the number of expressions on its first line, then one expression per
//! line. One `valida`/`invalida` line is printed per declared expression.
//!
//! Configuration layers the built-in defaults, `./wff.toml` when present, the `--config`
//! file and then command-line flags.

mod report;

use clap::{Arg, ArgAction, ArgMatches, Command};
use report::Reporter;
use std::io::{self, Write};
use std::process;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use wff_config::{Loader, OutputFormat, WffConfig};
use wff_parser::wff::loader::ExpressionLoader;
use wff_parser::wff::testing::samples::SELF_TEST_EXPRESSIONS;

fn build_cli() -> Command {
    let formats: Vec<&'static str> = OutputFormat::ALL.iter().map(OutputFormat::as_str).collect();
    Command::new("wff")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Validates well-formed formulas of propositional logic")
        .arg(
            Arg::new("path")
                .help("Path to the expression file")
                .required_unless_present("teste")
                .index(1),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .help("Print file details and the token trace of each expression")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("teste")
                .long("teste")
                .help("Run the built-in sample expressions and exit")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help(format!("Output format ({})", formats.join(", "))),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the built-in defaults"),
        )
}

fn init_tracing(debug: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if debug {
            EnvFilter::new("warn,wff_parser=debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Project-local configuration picked up from the working directory when present.
const LOCAL_CONFIG: &str = "wff.toml";

fn load_config(matches: &ArgMatches) -> WffConfig {
    let mut loader = Loader::new().with_optional_file(LOCAL_CONFIG);
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Some(format) = matches.get_one::<String>("format") {
        loader = loader
            .set_override("output.format", format.as_str())
            .unwrap_or_else(|e| fail("Configuration error", e));
    }
    loader
        .build()
        .unwrap_or_else(|e| fail("Configuration error", e))
}

fn main() {
    // usage errors exit with 1, help and version with 0
    let matches = build_cli().try_get_matches().unwrap_or_else(|e| {
        let _ = e.print();
        process::exit(if e.use_stderr() { 1 } else { 0 });
    });
    let debug = matches.get_flag("debug");
    init_tracing(debug);

    let config = load_config(&matches);
    debug!(format = %config.output.format, "configuration loaded");

    if matches.get_flag("teste") {
        handle_self_test_command(&config);
        return;
    }

    let Some(path) = matches.get_one::<String>("path") else {
        fail("Usage error", "a path is required unless running --teste");
    };
    handle_validate_command(&config, path, debug);
}

/// Handle the self-test command
fn handle_self_test_command(config: &WffConfig) {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    Reporter::new(config, false)
        .write_self_test(&mut out, SELF_TEST_EXPRESSIONS)
        .and_then(|_| out.flush())
        .unwrap_or_else(|e| fail("Output error", e));
}

/// Handle the validate command
fn handle_validate_command(config: &WffConfig, path: &str, debug: bool) {
    let batch = ExpressionLoader::from_path(path)
        .and_then(|loader| loader.batch())
        .unwrap_or_else(|e| fail(&format!("Error processing {}", path), e));

    let stdout = io::stdout();
    let mut out = stdout.lock();
    Reporter::new(config, debug)
        .write_batch(&mut out, path, &batch)
        .and_then(|_| out.flush())
        .unwrap_or_else(|e| fail("Output error", e));
}

fn fail(context: &str, error: impl std::fmt::Display) -> ! {
    eprintln!("{}: {}", context, error);
    process::exit(1);
}
