//! Score and ordinal classification against a matrix config.
//!
//! Every function here is total: unmatched input degrades to
//! [`DEFAULT_LEVEL`] instead of failing.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::matrix::config::{CustomBand, MatrixConfig, MatrixScheme, MatrixType};
use crate::matrix::level::{RiskLevel, RiskLevelResult, DEFAULT_LEVEL};

const WHITE: &str = "#ffffff";

/// Classify a composite impact×likelihood score.
///
/// Custom bands, when present, are scanned in list order and the first
/// band containing `score` wins. Overlapping or unordered bands are not
/// rejected. Without custom bands the built-in table for the matrix
/// type applies.
pub fn classify_score(score: u32, config: &MatrixConfig) -> RiskLevelResult {
    classify_composite(f64::from(score), config)
}

/// Same as [`classify_score`] for products of raw record values, which
/// may be negative or fractional. Such scores are compared as-is against
/// the thresholds and band bounds.
pub fn classify_composite(score: f64, config: &MatrixConfig) -> RiskLevelResult {
    match config.scheme() {
        MatrixScheme::Builtin(matrix_type) => builtin_composite_level(score, matrix_type).result(),
        MatrixScheme::Custom { bands, .. } => {
            match bands.iter().find(|b| b.contains_composite(score)) {
                Some(band) => band_result(band),
                None => {
                    trace!(score, bands = bands.len(), "No custom band matched, using default level");
                    DEFAULT_LEVEL.result()
                }
            }
        }
    }
}

/// Built-in score table for a matrix type.
pub fn builtin_level(score: u32, matrix_type: MatrixType) -> RiskLevel {
    builtin_composite_level(f64::from(score), matrix_type)
}

fn builtin_composite_level(score: f64, matrix_type: MatrixType) -> RiskLevel {
    // Scores below every threshold, NaN included, land on the last arm.
    match matrix_type {
        MatrixType::FiveByFive => match score {
            s if s >= 17.0 => RiskLevel::VeryHigh,
            s if s >= 9.0 => RiskLevel::High,
            s if s >= 5.0 => RiskLevel::Medium,
            s if s >= 3.0 => RiskLevel::Low,
            _ => RiskLevel::VeryLow,
        },
        MatrixType::FourByFour => match score {
            s if s >= 10.0 => RiskLevel::VeryHigh,
            s if s >= 7.0 => RiskLevel::High,
            s if s >= 3.0 => RiskLevel::Medium,
            _ => RiskLevel::Low,
        },
        MatrixType::ThreeByThree => match score {
            s if s >= 5.0 => RiskLevel::High,
            s if s >= 3.0 => RiskLevel::Medium,
            _ => RiskLevel::Low,
        },
    }
}

fn band_result(band: &CustomBand) -> RiskLevelResult {
    let known = RiskLevel::from_name(&band.name);
    let background_color = band
        .color
        .clone()
        .or_else(|| known.map(|l| l.background_color().to_string()))
        .unwrap_or_else(|| DEFAULT_LEVEL.background_color().to_string());
    let text_color = known.map(|l| l.text_color()).unwrap_or(WHITE).to_string();

    RiskLevelResult {
        name: band.name.clone(),
        background_color,
        text_color,
        level: known,
    }
}

/// Map a standalone 1-based "nivel de risco" ordinal to a level name.
///
/// The custom band list is stable-sorted by `value`, bands without one
/// last, and indexed with `level - 1`. Out-of-range levels fall through
/// to the built-in ordinal table for the matrix type, and from there to
/// "Baixo".
pub fn map_ordinal_level_to_name(level: u32, config: &MatrixConfig) -> String {
    if let Some(name) = custom_ordinal_name(level, config.custom_bands()) {
        return name.to_string();
    }

    builtin_ordinal_level(level, config.matrix_type)
        .unwrap_or(DEFAULT_LEVEL)
        .name()
        .to_string()
}

fn custom_ordinal_name(level: u32, bands: &[CustomBand]) -> Option<&str> {
    let index = usize::try_from(level).ok()?.checked_sub(1)?;
    let mut ordered: Vec<&CustomBand> = bands.iter().collect();
    ordered.sort_by_key(|band| (band.value.is_none(), band.value));
    ordered.get(index).map(|band| band.name.as_str())
}

/// Built-in ordinal table; `None` outside `1..=N`.
pub fn builtin_ordinal_level(level: u32, matrix_type: MatrixType) -> Option<RiskLevel> {
    let table: &[RiskLevel] = match matrix_type {
        MatrixType::FiveByFive => &RiskLevel::ALL,
        MatrixType::FourByFour => &[
            RiskLevel::Low,
            RiskLevel::Medium,
            RiskLevel::High,
            RiskLevel::VeryHigh,
        ],
        MatrixType::ThreeByThree => &[RiskLevel::Low, RiskLevel::Medium, RiskLevel::High],
    };
    let index = usize::try_from(level).ok()?.checked_sub(1)?;
    table.get(index).copied()
}

/// An impact/likelihood pair with its composite score and level.
///
/// Axes are kept exactly as extracted, so a record holding `-1` or `2.5`
/// reports and multiplies those values. Whole numbers serialize as
/// integers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedRisk {
    #[serde(serialize_with = "whole_number::serialize")]
    pub impact: f64,
    #[serde(serialize_with = "whole_number::serialize")]
    pub likelihood: f64,
    #[serde(serialize_with = "whole_number::serialize")]
    pub score: f64,
    pub level: RiskLevelResult,
}

/// Multiply the axes and classify the product.
pub fn classify_pair(impact: f64, likelihood: f64, config: &MatrixConfig) -> ClassifiedRisk {
    let score = impact * likelihood;
    ClassifiedRisk {
        impact,
        likelihood,
        score,
        level: classify_composite(score, config),
    }
}

/// Serde helper writing integral floats as JSON integers.
mod whole_number {
    use serde::Serializer;

    const MAX_EXACT: f64 = 9_007_199_254_740_992.0; // 2^53

    pub fn serialize<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if value.fract() == 0.0 && value.abs() <= MAX_EXACT {
            serializer.serialize_i64(*value as i64)
        } else {
            serializer.serialize_f64(*value)
        }
    }
}
