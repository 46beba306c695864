//! Qualitative risk levels and their display colors.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the five built-in qualitative risk levels, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    #[serde(rename = "Muito Baixo")]
    VeryLow,
    #[serde(rename = "Baixo")]
    Low,
    #[serde(rename = "Medio")]
    Medium,
    #[serde(rename = "Alto")]
    High,
    #[serde(rename = "Muito Alto")]
    VeryHigh,
}

/// Level returned whenever nothing else matches.
pub const DEFAULT_LEVEL: RiskLevel = RiskLevel::Low;

impl RiskLevel {
    /// All levels in ascending severity.
    pub const ALL: [RiskLevel; 5] = [
        RiskLevel::VeryLow,
        RiskLevel::Low,
        RiskLevel::Medium,
        RiskLevel::High,
        RiskLevel::VeryHigh,
    ];

    /// Display name as stored in tenant data.
    pub fn name(&self) -> &'static str {
        match self {
            RiskLevel::VeryLow => "Muito Baixo",
            RiskLevel::Low => "Baixo",
            RiskLevel::Medium => "Medio",
            RiskLevel::High => "Alto",
            RiskLevel::VeryHigh => "Muito Alto",
        }
    }

    /// Look up a level by its display name. Matching ignores case and
    /// surrounding whitespace, and accepts the accented "Médio".
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "muito baixo" => Some(RiskLevel::VeryLow),
            "baixo" => Some(RiskLevel::Low),
            "medio" | "médio" => Some(RiskLevel::Medium),
            "alto" => Some(RiskLevel::High),
            "muito alto" => Some(RiskLevel::VeryHigh),
            _ => None,
        }
    }

    /// Background color (hex).
    pub fn background_color(&self) -> &'static str {
        match self {
            RiskLevel::VeryLow => "#3b82f6",  // blue
            RiskLevel::Low => "#22c55e",      // green
            RiskLevel::Medium => "#eab308",   // yellow
            RiskLevel::High => "#f97316",     // orange
            RiskLevel::VeryHigh => "#dc2626", // red
        }
    }

    /// Foreground color readable on top of [`background_color`](Self::background_color).
    pub fn text_color(&self) -> &'static str {
        match self {
            RiskLevel::Medium => "#1f2937",
            _ => "#ffffff",
        }
    }

    /// Build the full result for this level using the built-in palette.
    pub fn result(&self) -> RiskLevelResult {
        RiskLevelResult {
            name: self.name().to_string(),
            background_color: self.background_color().to_string(),
            text_color: self.text_color().to_string(),
            level: Some(*self),
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of classifying a score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskLevelResult {
    pub name: String,
    pub background_color: String,
    pub text_color: String,
    /// Built-in level behind `name`; `None` for custom band names that
    /// are not one of the five known levels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<RiskLevel>,
}

impl fmt::Display for RiskLevelResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
