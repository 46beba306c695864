use clap::Parser;
use colored::*;
use riskmatrix::cli::args::{Cli, Commands};
use riskmatrix::cli::commands::{cmd_classify, cmd_config, cmd_grid, cmd_level, cmd_records, cmd_score};
use riskmatrix::config::settings::Config;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize structured logging before any command runs.
    if let Err(e) = riskmatrix::logging::init(cli.log_level.into(), cli.log_format) {
        eprintln!("{}: Failed to initialize logging: {}", "Error".red().bold(), e);
        return ExitCode::FAILURE;
    }
    riskmatrix::cli::output::init_color(cli.color);

    match run(cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            tracing::error!(error = %e, "Command failed");
            eprintln!("{}: {:#}", "Error".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = Config::load(cli.config_file.as_deref())?;
    if let Some(path) = &cli.matrix {
        config.apply_matrix_file(path)?;
    }
    for issue in config.matrix.issues() {
        tracing::warn!(issue = %issue, "Matrix configuration issue");
    }
    Ok(config)
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let config = load_config(&cli)?;

    match cli.command {
        Commands::Classify { impact, likelihood, format } => {
            cmd_classify(&config, impact, likelihood, format)
        }
        Commands::Score { score, format } => cmd_score(&config, score, format),
        Commands::Level { level, format } => cmd_level(&config, level, format),
        Commands::Records { file, format } => cmd_records(&config, file.as_deref(), format),
        Commands::Grid { format } => cmd_grid(&config, format),
        Commands::Config { action } => cmd_config(&config, action),
    }
}
