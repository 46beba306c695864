use std::process::ExitCode;
use tracing::debug;

use crate::config::settings::{Config, OutputFormat};
use crate::matrix::classifier::map_ordinal_level_to_name;

/// Print the name of a standalone ordinal risk level.
pub fn cmd_level(config: &Config, level: u32, format: Option<OutputFormat>) -> anyhow::Result<ExitCode> {
    let name = map_ordinal_level_to_name(level, &config.matrix);
    debug!(level, name = %name, custom_bands = config.matrix.custom_bands().len(), "Level mapped");

    match format.unwrap_or(config.output.format) {
        OutputFormat::Text => println!("{}", name),
        OutputFormat::Json => {
            let json = serde_json::json!({
                "level": level,
                "name": name,
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
    }
    Ok(ExitCode::SUCCESS)
}
