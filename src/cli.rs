//! Command-line interface argument parsing.
//!
//! This module handles all CLI argument parsing using clap,
//! including validation and default values.

use crate::config::OutputFormat;
use crate::models::Operation;
use anyhow::{Context, Result};
use clap::Parser;
use serde_json::Value;
use std::io::Read;
use std::path::PathBuf;
use tracing::debug;

/// mathproc - sum numbers and double the positive ones
///
/// Inputs are JSON documents. A value that is not valid JSON is taken as a
/// plain string, and `-` reads the document from stdin. Without --sum or
/// --process a short demonstration runs.
///
/// Examples:
///   mathproc --sum '[1, 2, 3, 4, 5]'
///   mathproc --process '[-2, -1, 0, 1, 2, 3]' --format json
///   echo '[1.5, 2]' | mathproc --sum -
///   mathproc
///   mathproc --init-config
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Args {
    /// Sum a JSON array of numbers
    #[arg(long, value_name = "JSON", conflicts_with = "process")]
    pub sum: Option<String>,

    /// Double the positive numbers of a JSON array
    #[arg(long, value_name = "JSON", conflicts_with = "sum")]
    pub process: Option<String>,

    /// Output format (text, json)
    ///
    /// Defaults to the config file setting, or text.
    #[arg(long, value_name = "FORMAT", env = "MATHPROC_FORMAT")]
    pub format: Option<OutputFormat>,

    /// Path to configuration file
    ///
    /// If not specified, looks for .mathproc.toml in the current directory
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Run in quiet mode (errors only)
    #[arg(short, long)]
    pub quiet: bool,

    /// Generate a default .mathproc.toml configuration file
    #[arg(long)]
    pub init_config: bool,
}

impl Args {
    /// Parse command-line arguments.
    ///
    /// Unlike `Parser::parse`, usage errors are returned instead of exiting
    /// with clap's own status code.
    pub fn try_parse_args() -> Result<Self, clap::Error> {
        Self::try_parse()
    }

    /// Validate the parsed arguments.
    pub fn validate(&self) -> Result<(), String> {
        if self.init_config {
            return Ok(());
        }

        if self.verbose && self.quiet {
            return Err("Cannot use both --verbose and --quiet".to_string());
        }

        if let Some(ref config_path) = self.config {
            if !config_path.is_file() {
                return Err(format!(
                    "Config file does not exist: {}",
                    config_path.display()
                ));
            }
        }

        Ok(())
    }

    /// Returns the log level based on verbosity settings.
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            tracing::Level::ERROR
        } else if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        }
    }

    /// The requested operation and its raw input, if any.
    pub fn operation(&self) -> Option<(Operation, &str)> {
        match (&self.sum, &self.process) {
            (Some(raw), _) => Some((Operation::Sum, raw.as_str())),
            (None, Some(raw)) => Some((Operation::Process, raw.as_str())),
            (None, None) => None,
        }
    }
}

/// Turn a raw command-line input into a JSON value.
///
/// `-` reads the whole of `stdin`. Text that does not parse as JSON becomes a
/// JSON string.
pub fn read_input<R: Read>(raw: &str, mut stdin: R) -> Result<Value> {
    let text = if raw == "-" {
        let mut buf = String::new();
        stdin
            .read_to_string(&mut buf)
            .context("Failed to read input from stdin")?;
        buf
    } else {
        raw.to_string()
    };

    Ok(parse_input(&text))
}

fn parse_input(text: &str) -> Value {
    serde_json::from_str(text).unwrap_or_else(|e| {
        debug!("Input is not JSON ({}), treating it as a string", e);
        Value::String(text.to_string())
    })
}
