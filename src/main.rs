use std::{
    fs::read_to_string,
    io::{self, Write},
    path::{Path, PathBuf},
    process::ExitCode,
    time::Instant,
};

use clap::Parser;
use lexscan::{
    config::config::{AppConfig, RealtimeOutputMode},
    display_error,
    errors::errors::{AppError, Result},
    lexer::{charsets::CharacterClasses, lexer::Scanner},
};
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Lexical scanner for a configurable toy language
///
/// Scans each input file into service word, identifier, literal and
/// separator tables and prints them with the standard symbol table.
#[derive(Parser, Debug)]
#[command(name = "lexscan")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Lexical scanner for a configurable toy language", long_about = None)]
struct Cli {
    /// Path to the JSON configuration file (default: ./config.json if present)
    #[arg(short, long, env = "LEXSCAN_CONFIG")]
    config: Option<PathBuf>,

    /// Directory holding the configured input files
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Echo tokens while scanning
    #[arg(short, long, value_enum)]
    realtime: Option<RealtimeOutputMode>,

    /// Use fresh tables for every file instead of accumulating
    #[arg(long)]
    separate: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Disable color output
    #[arg(long)]
    no_color: bool,

    /// Files to scan, overriding the configured inputs
    files: Vec<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.verbose, cli.no_color) {
        eprintln!("{}", e);
        return ExitCode::FAILURE;
    }

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });

    let subscriber = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(!no_color)
        .with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))
}

/// Scans every input file. Returns whether all of them scanned cleanly.
fn run(cli: Cli) -> Result<bool> {
    let mut config = match cli.config.as_deref() {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };

    if let Some(dir) = cli.data_dir {
        config.data_directory = dir;
    }
    if let Some(mode) = cli.realtime {
        config.realtime_output_mode = mode;
    }

    let files = if cli.files.is_empty() {
        config.input_files()?
    } else {
        cli.files
    };

    if files.is_empty() {
        warn!("No input files to scan");
    }

    let new_scanner = || {
        Scanner::new(
            config.lexer.clone(),
            CharacterClasses::standard(),
            config.realtime_output_mode,
        )
    };

    let mut shared = new_scanner();
    let mut all_ok = true;

    for path in &files {
        let mut fresh;
        let scanner = if cli.separate {
            fresh = new_scanner();
            &mut fresh
        } else {
            &mut shared
        };

        info!("Scanning file {}", path.display());
        if let Err(e) = scan_file(scanner, path) {
            all_ok = false;
            error!("Failed to scan {}: {}", path.display(), e);
        }
    }

    Ok(all_ok)
}

fn scan_file(scanner: &mut Scanner, path: &Path) -> Result<()> {
    let start = Instant::now();
    let source = read_to_string(path)?;
    let name = path.to_string_lossy();

    if let Err(e) = scanner.scan_named(&source, &name) {
        error!("{}", display_error(&e, &source).trim_end());
        return Err(e.into());
    }

    info!("Scanned in {:?}", start.elapsed());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    scanner.report().write_to(&mut out)?;
    out.flush()?;

    Ok(())
}
