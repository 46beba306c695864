use std::process::ExitCode;
use tracing::{debug, info_span};

use crate::cli::output::paint_level;
use crate::config::settings::{Config, OutputFormat};
use crate::matrix::classifier::{classify_pair, classify_score, ClassifiedRisk};

/// Classify an impact/likelihood pair.
pub fn cmd_classify(
    config: &Config,
    impact: u32,
    likelihood: u32,
    format: Option<OutputFormat>,
) -> anyhow::Result<ExitCode> {
    let _span = info_span!("classify", impact, likelihood, matrix = %config.matrix.matrix_type).entered();

    let size = config.matrix.matrix_type.size();
    if impact == 0 || impact > size || likelihood == 0 || likelihood > size {
        debug!(size, "Pair lies outside the matrix, classifying anyway");
    }

    let risk = classify_pair(f64::from(impact), f64::from(likelihood), &config.matrix);
    debug!(score = risk.score, level = %risk.level, "Pair classified");

    match format.unwrap_or(config.output.format) {
        OutputFormat::Text => print_pair(config, impact, likelihood, &risk),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&risk)?),
    }
    Ok(ExitCode::SUCCESS)
}

/// Classify a raw composite score.
pub fn cmd_score(config: &Config, score: u32, format: Option<OutputFormat>) -> anyhow::Result<ExitCode> {
    let result = classify_score(score, &config.matrix);
    debug!(score, level = %result, "Score classified");

    match format.unwrap_or(config.output.format) {
        OutputFormat::Text => println!("Score {}: {}", score, paint_level(&result)),
        OutputFormat::Json => {
            let json = serde_json::json!({
                "score": score,
                "level": result,
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn print_pair(config: &Config, impact: u32, likelihood: u32, risk: &ClassifiedRisk) {
    if config.output.show_labels {
        println!("Impact:     {} ({})", impact, config.matrix.impact_label(impact));
        println!(
            "Likelihood: {} ({})",
            likelihood,
            config.matrix.likelihood_label(likelihood)
        );
    } else {
        println!("Impact:     {}", impact);
        println!("Likelihood: {}", likelihood);
    }
    println!("Score:      {}", risk.score);
    println!("Risk Level: {}", paint_level(&risk.level));
}
