pub mod classifier;
pub mod config;
pub mod grid;
pub mod level;
pub mod record;

// Re-export common types for convenience
pub use classifier::{
    classify_composite, classify_pair, classify_score, map_ordinal_level_to_name, ClassifiedRisk,
};
pub use config::{CustomBand, MatrixConfig, MatrixIssue, MatrixScheme, MatrixType};
pub use grid::RiskGrid;
pub use level::{RiskLevel, RiskLevelResult, DEFAULT_LEVEL};
pub use record::{extract_impact, extract_likelihood, RiskRecord};
