use std::process::ExitCode;
use tracing::debug;

use crate::cli::output::paint_level;
use crate::config::settings::{Config, OutputFormat};
use crate::matrix::grid::RiskGrid;

const CELL_WIDTH: usize = 12;

/// Render the full impact x likelihood matrix.
pub fn cmd_grid(config: &Config, format: Option<OutputFormat>) -> anyhow::Result<ExitCode> {
    let grid = RiskGrid::build(&config.matrix);
    debug!(matrix = %grid.matrix_type(), cells = grid.cells().count(), "Grid built");

    match format.unwrap_or(config.output.format) {
        OutputFormat::Text => print_grid(&grid, config.output.show_labels),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&grid)?),
    }
    Ok(ExitCode::SUCCESS)
}

fn print_grid(grid: &RiskGrid, show_labels: bool) {
    println!("Matrix {} (rows: impact, columns: likelihood)", grid.matrix_type());
    println!();

    let header: String = grid
        .likelihood_labels()
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let title = if show_labels { label.clone() } else { (i + 1).to_string() };
            format!("{:<width$}", truncate(&title), width = CELL_WIDTH)
        })
        .collect();
    println!("{:<width$} {}", "", header, width = CELL_WIDTH);

    // Highest impact on top, as the matrix is usually drawn.
    for row in grid.rows().iter().rev() {
        let title = if show_labels {
            row.impact_label.clone()
        } else {
            row.impact.to_string()
        };
        let mut line = format!("{:<width$} ", truncate(&title), width = CELL_WIDTH);
        for cell in &row.cells {
            let padding = CELL_WIDTH.saturating_sub(cell.level.name.chars().count());
            line.push_str(&paint_level(&cell.level).to_string());
            line.push_str(&" ".repeat(padding));
        }
        println!("{}", line.trim_end());
    }
}

fn truncate(label: &str) -> String {
    label.chars().take(CELL_WIDTH - 1).collect()
}
