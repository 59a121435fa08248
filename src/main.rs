//! mathproc - sum numbers and double the positive ones
//!
//! Exit codes:
//!   0 - Success (the demonstration always succeeds)
//!   1 - Runtime error (bad arguments, unreadable config, stdin failure)
//!   2 - The requested operation rejected its input

use anyhow::{Context, Result};
use mathproc::cli::{self, Args};
use mathproc::config::{Config, OutputFormat, CONFIG_FILE_NAME};
use mathproc::models::{Outcome, Report};
use mathproc::{report, runner};
use tracing::level_filters::LevelFilter;
use tracing::{debug, info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn main() -> Result<()> {
    let args = match Args::try_parse_args() {
        Ok(args) => args,
        Err(e) => {
            // --help and --version come through here too, on stdout
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    // Handle --init-config early (no logging needed)
    if args.init_config {
        return handle_init_config();
    }

    init_logging(&args)?;

    debug!("mathproc v{}", env!("CARGO_PKG_VERSION"));
    debug!("Arguments: {:?}", args);

    match run(args) {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}

/// Handle --init-config: generate a default .mathproc.toml.
fn handle_init_config() -> Result<()> {
    let path = std::path::Path::new(CONFIG_FILE_NAME);

    if path.exists() {
        eprintln!(
            "{} already exists. Remove it first or edit it manually.",
            CONFIG_FILE_NAME
        );
        std::process::exit(1);
    }

    let content = Config::default_toml();
    std::fs::write(path, &content)
        .with_context(|| format!("Failed to write {}", CONFIG_FILE_NAME))?;

    println!("Created {} with default settings.", CONFIG_FILE_NAME);
    Ok(())
}

/// Initialize logging on stderr. `RUST_LOG` overrides the verbosity flags.
fn init_logging(args: &Args) -> Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(args.log_level()).into())
        .from_env_lossy();

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")
}

/// Run the requested operation, or the demonstration. Returns exit code (0 or 2).
fn run(args: Args) -> Result<i32> {
    let mut config = load_config(&args)?;
    config.merge_with_args(&args);
    let format = config.general.format;

    match args.operation() {
        Some((operation, raw)) => {
            let input = cli::read_input(raw, std::io::stdin().lock())?;
            let report = runner::run_operation(operation, input);
            print_report(&report, format)
        }
        None => {
            let reports = runner::run_demo(&config.demo);
            match format {
                OutputFormat::Text => print!("{}", report::generate_demo_text(&reports)),
                OutputFormat::Json => println!("{}", report::generate_json_reports(&reports)?),
            }
            Ok(0)
        }
    }
}

/// Print a single-operation report. Rejected inputs exit with code 2.
fn print_report(report: &Report, format: OutputFormat) -> Result<i32> {
    match (format, &report.outcome) {
        (OutputFormat::Json, _) => println!("{}", report::generate_json_report(report)?),
        (OutputFormat::Text, Outcome::Rejected { message, .. }) => {
            eprintln!("Error: {}", message)
        }
        (OutputFormat::Text, Outcome::Ok { .. }) => {
            println!("{}", report::generate_text_line(report))
        }
    }

    Ok(if report.outcome.is_rejected() { 2 } else { 0 })
}

/// Load configuration from file or use defaults.
fn load_config(args: &Args) -> Result<Config> {
    // Try explicit config path
    if let Some(ref config_path) = args.config {
        info!("Loading config from: {}", config_path.display());
        return Config::load(config_path);
    }

    // Try default location
    match Config::load_default() {
        Ok(Some(config)) => {
            info!("Loaded default config from {}", CONFIG_FILE_NAME);
            Ok(config)
        }
        Ok(None) => {
            debug!("No config file found, using defaults");
            Ok(Config::default())
        }
        Err(e) => {
            warn!("Failed to load config: {:#}", e);
            Ok(Config::default())
        }
    }
}
