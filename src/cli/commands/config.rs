//! Config command: initialize, display and validate riskmatrix settings.

use anyhow::Context;
use colored::*;
use std::process::ExitCode;
use tracing::debug;

use crate::cli::args::ConfigAction;
use crate::config::settings::Config;

/// Execute the `config` subcommand (init, show, validate).
pub fn cmd_config(config: &Config, action: ConfigAction) -> anyhow::Result<ExitCode> {
    match action {
        ConfigAction::Init { path } => {
            let config_path = path.unwrap_or_else(Config::default_config_path);

            // Create parent directories
            if let Some(parent) = config_path.parent() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create config directory '{}'", parent.display())
                })?;
            }

            let toml = Config::default()
                .to_toml()
                .context("Failed to serialize default config")?;
            std::fs::write(&config_path, toml).with_context(|| {
                format!("Failed to write config file '{}'", config_path.display())
            })?;

            debug!(path = %config_path.display(), "Config file created");
            println!("Created config at: {}", config_path.display());
            Ok(ExitCode::SUCCESS)
        }
        ConfigAction::Show => {
            let toml = config
                .to_toml()
                .context("Failed to serialize effective config")?;
            println!("{}", toml);
            Ok(ExitCode::SUCCESS)
        }
        ConfigAction::Validate => {
            let issues = config.matrix.issues();
            if issues.is_empty() {
                println!("{} Matrix {} is consistent.", "✓".green(), config.matrix.matrix_type);
                return Ok(ExitCode::SUCCESS);
            }

            println!(
                "{} Matrix {} has {} issue(s):",
                "!".red().bold(),
                config.matrix.matrix_type,
                issues.len()
            );
            for issue in &issues {
                println!("- {}", issue);
            }
            Ok(ExitCode::FAILURE)
        }
    }
}
