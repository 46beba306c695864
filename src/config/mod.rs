//! Application settings.

pub mod settings;

pub use settings::{Config, ConfigError, OutputConfig, OutputFormat};
