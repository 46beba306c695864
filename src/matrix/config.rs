//! Tenant matrix configuration: dimension, axis labels and optional custom bands.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Matrix dimension.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatrixType {
    #[serde(rename = "3x3")]
    ThreeByThree,
    #[serde(rename = "4x4")]
    FourByFour,
    #[default]
    #[serde(rename = "5x5")]
    FiveByFive,
}

impl MatrixType {
    pub const ALL: [MatrixType; 3] = [
        MatrixType::ThreeByThree,
        MatrixType::FourByFour,
        MatrixType::FiveByFive,
    ];

    /// Number of ordinal steps per axis (N).
    pub fn size(&self) -> u32 {
        match self {
            MatrixType::ThreeByThree => 3,
            MatrixType::FourByFour => 4,
            MatrixType::FiveByFive => 5,
        }
    }

    /// Highest composite score the matrix can produce (N*N).
    pub fn max_score(&self) -> u32 {
        self.size() * self.size()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MatrixType::ThreeByThree => "3x3",
            MatrixType::FourByFour => "4x4",
            MatrixType::FiveByFive => "5x5",
        }
    }

    fn default_impact_labels(&self) -> &'static [&'static str] {
        match self {
            MatrixType::ThreeByThree => &["Baixo", "Medio", "Alto"],
            MatrixType::FourByFour => &["Baixo", "Medio", "Alto", "Muito Alto"],
            MatrixType::FiveByFive => &["Muito Baixo", "Baixo", "Medio", "Alto", "Muito Alto"],
        }
    }

    fn default_likelihood_labels(&self) -> &'static [&'static str] {
        match self {
            MatrixType::ThreeByThree => &["Improvavel", "Possivel", "Provavel"],
            MatrixType::FourByFour => &["Raro", "Improvavel", "Provavel", "Quase Certo"],
            MatrixType::FiveByFive => &["Raro", "Improvavel", "Possivel", "Provavel", "Quase Certo"],
        }
    }
}

impl fmt::Display for MatrixType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatrixType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "3x3" | "3" => Ok(MatrixType::ThreeByThree),
            "4x4" | "4" => Ok(MatrixType::FourByFour),
            "5x5" | "5" => Ok(MatrixType::FiveByFive),
            other => Err(format!("unsupported matrix type: {}", other)),
        }
    }
}

/// A tenant-defined level band.
///
/// Score-range bands carry `minValue`/`maxValue` and drive score
/// classification. Ordinal bands carry `value` and drive the 1..N
/// level-name mapping. A band may carry both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomBand {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(
        default,
        rename = "minValue",
        alias = "min_value",
        skip_serializing_if = "Option::is_none"
    )]
    pub min_value: Option<u32>,
    #[serde(
        default,
        rename = "maxValue",
        alias = "max_value",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_value: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<u32>,
}

impl CustomBand {
    /// Score-range band covering `min..=max`.
    pub fn range(name: &str, color: Option<&str>, min: u32, max: u32) -> Self {
        Self {
            name: name.to_string(),
            color: color.map(str::to_string),
            min_value: Some(min),
            max_value: Some(max),
            value: None,
        }
    }

    /// Ordinal band at position `value`.
    pub fn ordinal(name: &str, value: u32) -> Self {
        Self {
            name: name.to_string(),
            color: None,
            min_value: None,
            max_value: None,
            value: Some(value),
        }
    }

    /// Inclusive bounds, when both are set.
    pub fn bounds(&self) -> Option<(u32, u32)> {
        match (self.min_value, self.max_value) {
            (Some(min), Some(max)) => Some((min, max)),
            _ => None,
        }
    }

    /// True when `score` lies within the band, inclusive on both ends.
    pub fn contains(&self, score: u32) -> bool {
        self.contains_composite(f64::from(score))
    }

    /// [`contains`](Self::contains) for raw, possibly fractional products.
    pub fn contains_composite(&self, score: f64) -> bool {
        self.bounds()
            .is_some_and(|(min, max)| f64::from(min) <= score && score <= f64::from(max))
    }
}

/// Which table drives classification for a config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixScheme<'a> {
    Builtin(MatrixType),
    Custom {
        matrix_type: MatrixType,
        bands: &'a [CustomBand],
    },
}

/// A tenant's risk matrix settings record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixConfig {
    #[serde(rename = "type", default)]
    pub matrix_type: MatrixType,
    /// Empty (or null in a record) means "use the default labels for this type".
    #[serde(default, deserialize_with = "null_as_empty")]
    pub impact_labels: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub likelihood_labels: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_levels_custom: Option<Vec<CustomBand>>,
}

impl Default for MatrixConfig {
    fn default() -> Self {
        Self::builtin(MatrixType::FiveByFive)
    }
}

impl MatrixConfig {
    /// Config for `matrix_type` with default axis labels and no custom bands.
    pub fn builtin(matrix_type: MatrixType) -> Self {
        Self {
            matrix_type,
            impact_labels: to_owned_labels(matrix_type.default_impact_labels()),
            likelihood_labels: to_owned_labels(matrix_type.default_likelihood_labels()),
            risk_levels_custom: None,
        }
    }

    /// Same config with custom bands attached.
    pub fn with_custom_bands(mut self, bands: Vec<CustomBand>) -> Self {
        self.risk_levels_custom = Some(bands);
        self
    }

    /// Parse a settings record as returned by the data store.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Custom bands, empty when none are configured.
    pub fn custom_bands(&self) -> &[CustomBand] {
        self.risk_levels_custom.as_deref().unwrap_or(&[])
    }

    pub fn scheme(&self) -> MatrixScheme<'_> {
        match self.custom_bands() {
            [] => MatrixScheme::Builtin(self.matrix_type),
            bands => MatrixScheme::Custom {
                matrix_type: self.matrix_type,
                bands,
            },
        }
    }

    /// Label for a 1-based impact ordinal.
    pub fn impact_label(&self, ordinal: u32) -> String {
        label_at(
            &self.impact_labels,
            self.matrix_type.default_impact_labels(),
            ordinal,
        )
    }

    /// Label for a 1-based likelihood ordinal.
    pub fn likelihood_label(&self, ordinal: u32) -> String {
        label_at(
            &self.likelihood_labels,
            self.matrix_type.default_likelihood_labels(),
            ordinal,
        )
    }

    /// Non-fatal problems with this config. Classification ignores them.
    pub fn issues(&self) -> Vec<MatrixIssue> {
        let mut issues = Vec::new();
        let n = self.matrix_type.size() as usize;

        for (axis, labels) in [
            ("impact", &self.impact_labels),
            ("likelihood", &self.likelihood_labels),
        ] {
            if !labels.is_empty() && labels.len() != n {
                issues.push(MatrixIssue::LabelCount {
                    axis,
                    expected: n,
                    actual: labels.len(),
                });
            }
        }

        let bands = self.custom_bands();
        if bands.is_empty() {
            return issues;
        }

        for (index, band) in bands.iter().enumerate() {
            match (band.min_value, band.max_value) {
                (Some(min), Some(max)) if min > max => issues.push(MatrixIssue::InvertedBand {
                    index,
                    name: band.name.clone(),
                    min,
                    max,
                }),
                (Some(_), None) | (None, Some(_)) => issues.push(MatrixIssue::IncompleteBand {
                    index,
                    name: band.name.clone(),
                }),
                _ => {}
            }
        }

        if bands.iter().all(|b| b.bounds().is_none()) {
            issues.push(MatrixIssue::NoScoreBands);
            return issues;
        }

        let max_score = self.matrix_type.max_score();
        let mut gap_start: Option<u32> = None;
        let mut overlap_start: Option<u32> = None;
        for score in 1..=max_score {
            let hits = bands.iter().filter(|b| b.contains(score)).count();

            if hits == 0 {
                gap_start.get_or_insert(score);
            } else if let Some(from) = gap_start.take() {
                issues.push(MatrixIssue::Gap { from, to: score - 1 });
            }

            if hits > 1 {
                overlap_start.get_or_insert(score);
            } else if let Some(from) = overlap_start.take() {
                issues.push(MatrixIssue::Overlap { from, to: score - 1 });
            }
        }
        if let Some(from) = gap_start {
            issues.push(MatrixIssue::Gap { from, to: max_score });
        }
        if let Some(from) = overlap_start {
            issues.push(MatrixIssue::Overlap { from, to: max_score });
        }

        issues
    }
}

/// A problem found by [`MatrixConfig::issues`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixIssue {
    #[error("{axis} labels: expected {expected}, found {actual}")]
    LabelCount {
        axis: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("band #{index} '{name}' has only one of minValue/maxValue")]
    IncompleteBand { index: usize, name: String },

    #[error("band #{index} '{name}' has minValue {min} above maxValue {max}")]
    InvertedBand {
        index: usize,
        name: String,
        min: u32,
        max: u32,
    },

    #[error("custom bands define no score ranges; every score classifies as the default level")]
    NoScoreBands,

    #[error("scores {from}..={to} match no custom band")]
    Gap { from: u32, to: u32 },

    #[error("scores {from}..={to} match more than one custom band; the first listed wins")]
    Overlap { from: u32, to: u32 },
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

fn to_owned_labels(labels: &[&str]) -> Vec<String> {
    labels.iter().map(|l| l.to_string()).collect()
}

fn label_at(configured: &[String], defaults: &[&str], ordinal: u32) -> String {
    let index = (ordinal as usize).wrapping_sub(1);
    let source: Option<&str> = if configured.is_empty() {
        defaults.get(index).copied()
    } else {
        configured.get(index).map(String::as_str)
    };
    source
        .map(str::to_string)
        .unwrap_or_else(|| ordinal.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_labels_match_dimension() {
        for matrix_type in MatrixType::ALL {
            let config = MatrixConfig::builtin(matrix_type);
            assert_eq!(config.impact_labels.len() as u32, matrix_type.size());
            assert_eq!(config.likelihood_labels.len() as u32, matrix_type.size());
            assert!(config.issues().is_empty());
        }
    }

    #[test]
    fn empty_custom_list_is_builtin_scheme() {
        let config = MatrixConfig::builtin(MatrixType::FourByFour).with_custom_bands(vec![]);
        assert_eq!(config.scheme(), MatrixScheme::Builtin(MatrixType::FourByFour));
    }

    #[test]
    fn label_falls_back_to_ordinal_index() {
        let config = MatrixConfig::builtin(MatrixType::ThreeByThree);
        assert_eq!(config.impact_label(1), "Baixo");
        assert_eq!(config.impact_label(0), "0");
        assert_eq!(config.likelihood_label(4), "4");
    }

    #[test]
    fn null_labels_in_record_mean_defaults() {
        let config = MatrixConfig::from_json_str(
            r#"{"type": "4x4", "impact_labels": null, "likelihood_labels": null}"#,
        )
        .unwrap();
        assert!(config.impact_labels.is_empty());
        assert_eq!(config.impact_label(4), "Muito Alto");
        assert_eq!(config.likelihood_label(1), "Raro");
        assert!(config.issues().is_empty());
    }

    #[test]
    fn fractional_scores_respect_inclusive_bounds() {
        let band = CustomBand::range("Baixo", None, 1, 4);
        assert!(band.contains_composite(4.0));
        assert!(!band.contains_composite(4.5));
        assert!(!band.contains_composite(-1.0));
    }

    #[test]
    fn matrix_type_parses_short_forms() {
        assert_eq!("4x4".parse::<MatrixType>(), Ok(MatrixType::FourByFour));
        assert_eq!("3".parse::<MatrixType>(), Ok(MatrixType::ThreeByThree));
        assert!("6x6".parse::<MatrixType>().is_err());
    }
}
