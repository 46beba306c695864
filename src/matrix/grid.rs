//! Precomputed N×N matrix of classified cells.

use serde::Serialize;

use crate::matrix::classifier::{classify_pair, ClassifiedRisk};
use crate::matrix::config::{MatrixConfig, MatrixType};

/// One impact row of the grid, lowest likelihood first.
#[derive(Debug, Clone, Serialize)]
pub struct GridRow {
    pub impact: u32,
    pub impact_label: String,
    pub cells: Vec<ClassifiedRisk>,
}

/// Every impact×likelihood cell of a matrix, classified once.
#[derive(Debug, Clone, Serialize)]
pub struct RiskGrid {
    matrix_type: MatrixType,
    likelihood_labels: Vec<String>,
    rows: Vec<GridRow>,
    #[serde(skip)]
    config: MatrixConfig,
}

impl RiskGrid {
    pub fn build(config: &MatrixConfig) -> Self {
        let n = config.matrix_type.size();
        let rows = (1..=n)
            .map(|impact| GridRow {
                impact,
                impact_label: config.impact_label(impact),
                cells: (1..=n)
                    .map(|likelihood| {
                        classify_pair(f64::from(impact), f64::from(likelihood), config)
                    })
                    .collect(),
            })
            .collect();

        Self {
            matrix_type: config.matrix_type,
            likelihood_labels: (1..=n).map(|l| config.likelihood_label(l)).collect(),
            rows,
            config: config.clone(),
        }
    }

    pub fn matrix_type(&self) -> MatrixType {
        self.matrix_type
    }

    pub fn size(&self) -> u32 {
        self.matrix_type.size()
    }

    pub fn rows(&self) -> &[GridRow] {
        &self.rows
    }

    pub fn likelihood_labels(&self) -> &[String] {
        &self.likelihood_labels
    }

    /// Cell for a 1-based pair; `None` outside the matrix.
    pub fn get(&self, impact: u32, likelihood: u32) -> Option<&ClassifiedRisk> {
        let row = self.rows.get((impact as usize).checked_sub(1)?)?;
        row.cells.get((likelihood as usize).checked_sub(1)?)
    }

    /// Classify a pair, serving in-range pairs from the table.
    pub fn classify(&self, impact: u32, likelihood: u32) -> ClassifiedRisk {
        match self.get(impact, likelihood) {
            Some(cell) => cell.clone(),
            None => classify_pair(f64::from(impact), f64::from(likelihood), &self.config),
        }
    }

    /// Iterate all cells row by row.
    pub fn cells(&self) -> impl Iterator<Item = &ClassifiedRisk> {
        self.rows.iter().flat_map(|row| row.cells.iter())
    }
}
