//! Configuration for the test2teamcity binary
//!
//! This module provides the command-line configuration: where records are
//! read from, where service messages go, and how chatty logging is.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;

use clap::Parser;

/// Convert `go test -json` output into TeamCity service messages
///
/// Reads one JSON record per line until end of input or the first empty
/// line, and writes the matching `##teamcity[...]` messages.
///
/// Example:
///   go test -json ./... | test2teamcity
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "test2teamcity")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Read records from this file instead of stdin
    #[arg(short, long, env = "TEST2TEAMCITY_INPUT")]
    pub input: Option<PathBuf>,

    /// Write service messages to this file instead of stdout
    ///
    /// The file is created, or truncated if it exists.
    #[arg(short, long, env = "TEST2TEAMCITY_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Enable verbose logging (debug level)
    ///
    /// Logs are written to stderr so they never mix with the service
    /// messages on stdout.
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,

    /// Quiet mode - suppress info-level logs
    ///
    /// Only errors and warnings will be logged.
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,
}

impl Config {
    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the input path is specified but doesn't exist or
    /// is not a regular file.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ref input) = self.input {
            if !input.exists() {
                return Err(ConfigError::InputNotFound(input.clone()));
            }
            if !input.is_file() {
                return Err(ConfigError::InputNotFile(input.clone()));
            }
        }
        Ok(())
    }

    /// Get the log level based on verbose/quiet flags
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::WARN
        } else {
            tracing::Level::INFO
        }
    }

    /// Human-readable name of the input, for logs
    #[must_use]
    pub fn input_name(&self) -> String {
        self.input
            .as_ref()
            .map_or_else(|| "<stdin>".to_string(), |p| p.display().to_string())
    }

    /// Human-readable name of the output, for logs
    #[must_use]
    pub fn output_name(&self) -> String {
        self.output
            .as_ref()
            .map_or_else(|| "<stdout>".to_string(), |p| p.display().to_string())
    }

    /// Open the configured input, falling back to stdin
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::OpenInput` if the input file cannot be opened.
    pub fn open_input(&self) -> Result<Box<dyn BufRead>, ConfigError> {
        match self.input {
            Some(ref path) => {
                let file =
                    File::open(path).map_err(|e| ConfigError::OpenInput(path.clone(), e))?;
                Ok(Box::new(BufReader::new(file)))
            }
            None => Ok(Box::new(io::stdin().lock())),
        }
    }

    /// Open the configured output, falling back to stdout
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::CreateOutput` if the output file cannot be
    /// created.
    pub fn open_output(&self) -> Result<Box<dyn Write>, ConfigError> {
        match self.output {
            Some(ref path) => {
                let file =
                    File::create(path).map_err(|e| ConfigError::CreateOutput(path.clone(), e))?;
                Ok(Box::new(BufWriter::new(file)))
            }
            None => Ok(Box::new(io::stdout().lock())),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Input path not found
    #[error("Input file not found: {0}")]
    InputNotFound(PathBuf),

    /// Input path is not a regular file
    #[error("Input path is not a file: {0}")]
    InputNotFile(PathBuf),

    /// Failed to open the input file
    #[error("Failed to open input file {0}: {1}")]
    OpenInput(PathBuf, io::Error),

    /// Failed to create the output file
    #[error("Failed to create output file {0}: {1}")]
    CreateOutput(PathBuf, io::Error),
}
