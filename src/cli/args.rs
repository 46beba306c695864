//! Command-line argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::settings::OutputFormat;

/// riskmatrix - risk-matrix scoring for GRC tooling
#[derive(Parser, Debug)]
#[command(name = "riskmatrix")]
#[command(author, version, long_about = None)]
#[command(
    about = "riskmatrix - Classify impact x likelihood scores against tenant risk matrices"
)]
pub struct Cli {
    /// Logging verbosity level
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: LogLevel,

    /// Logging output format
    #[arg(long, global = true, default_value = "pretty")]
    pub log_format: crate::logging::LogFormat,

    /// Control color output (auto, always, never). Respects NO_COLOR env var.
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorMode,

    /// Settings file [default: <config dir>/riskmatrix/config.toml]
    #[arg(long = "config", global = true)]
    pub config_file: Option<PathBuf>,

    /// Tenant matrix record (JSON) overriding the settings' matrix
    #[arg(long, global = true)]
    pub matrix: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify an impact/likelihood pair
    Classify {
        /// Impact ordinal (1..N)
        #[arg(short, long)]
        impact: u32,

        /// Likelihood ordinal (1..N)
        #[arg(short, long)]
        likelihood: u32,

        /// Output format: text, json [default: from settings]
        #[arg(short = 'F', long)]
        format: Option<OutputFormat>,
    },

    /// Classify a raw composite score
    Score {
        /// Composite score (impact x likelihood)
        #[arg(short, long)]
        score: u32,

        /// Output format: text, json [default: from settings]
        #[arg(short = 'F', long)]
        format: Option<OutputFormat>,
    },

    /// Name a standalone ordinal risk level (nivel de risco)
    Level {
        /// 1-based level
        #[arg(short, long)]
        level: u32,

        /// Output format: text, json [default: from settings]
        #[arg(short = 'F', long)]
        format: Option<OutputFormat>,
    },

    /// Extract and classify risk records (JSON object or array)
    Records {
        /// File to read (reads from stdin if not provided)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Output format: text, json [default: from settings]
        #[arg(short = 'F', long)]
        format: Option<OutputFormat>,
    },

    /// Render the full matrix
    Grid {
        /// Output format: text, json [default: from settings]
        #[arg(short = 'F', long)]
        format: Option<OutputFormat>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Initialize default configuration
    Init {
        /// Path to create config file
        #[arg(short, long)]
        path: Option<PathBuf>,
    },

    /// Show effective configuration
    Show,

    /// Check the matrix for label, gap and overlap problems
    Validate,
}

/// Logging verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

/// Color output mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorMode {
    /// Auto-detect based on terminal
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}
