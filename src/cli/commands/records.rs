use anyhow::Context;
use colored::*;
use serde_json::Value;
use std::io::{self, Read};
use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;
use tracing::{debug, info, info_span, warn};

use crate::cli::output::paint_level;
use crate::config::settings::{Config, OutputFormat};
use crate::matrix::classifier::ClassifiedRisk;
use crate::matrix::record::RiskRecord;

/// Outcome for one entry of the input.
enum Entry {
    Classified(ClassifiedRisk),
    Rejected(&'static str),
}

/// Extract and classify every risk record in a JSON object or array.
pub fn cmd_records(config: &Config, file: Option<&Path>, format: Option<OutputFormat>) -> anyhow::Result<ExitCode> {
    let _span = info_span!("records", input_source = if file.is_some() { "file" } else { "stdin" }).entered();

    let content = match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file '{}'", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            buf
        }
    };
    debug!(content_bytes = content.len(), "Content read");

    let parsed: Value = serde_json::from_str(&content).context("Input is not valid JSON")?;
    let values = match parsed {
        Value::Array(items) => items,
        other => vec![other],
    };

    let start = Instant::now();
    let entries: Vec<Entry> = values
        .into_iter()
        .enumerate()
        .map(|(index, value)| match RiskRecord::from_value(value) {
            Some(record) => Entry::Classified(record.classify(&config.matrix)),
            None => {
                warn!(index, "Skipping entry that is not a JSON object");
                Entry::Rejected("not a JSON object")
            }
        })
        .collect();
    let rejected = entries
        .iter()
        .filter(|e| matches!(e, Entry::Rejected(_)))
        .count();
    info!(
        records = entries.len(),
        rejected,
        duration_us = start.elapsed().as_micros() as u64,
        "Records classified"
    );

    match format.unwrap_or(config.output.format) {
        OutputFormat::Text => {
            for (index, entry) in entries.iter().enumerate() {
                match entry {
                    Entry::Classified(risk) => println!(
                        "[{}] impact {} x likelihood {} = {} -> {}",
                        index,
                        risk.impact,
                        risk.likelihood,
                        risk.score,
                        paint_level(&risk.level)
                    ),
                    Entry::Rejected(reason) => {
                        println!("[{}] {}: {}", index, "rejected".red().bold(), reason)
                    }
                }
            }
        }
        OutputFormat::Json => {
            let mut json = Vec::with_capacity(entries.len());
            for (index, entry) in entries.iter().enumerate() {
                let item = match entry {
                    Entry::Classified(risk) => {
                        let mut item = serde_json::to_value(risk)?;
                        item["index"] = index.into();
                        item
                    }
                    Entry::Rejected(reason) => serde_json::json!({
                        "index": index,
                        "error": reason,
                    }),
                };
                json.push(item);
            }
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
    }

    Ok(if rejected > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
