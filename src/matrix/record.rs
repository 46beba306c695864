//! Impact/likelihood extraction from heterogeneous risk records.
//!
//! Different record sources name the same ordinal differently. The lookup
//! order below is a compatibility contract; keep it stable.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::matrix::classifier::{classify_pair, ClassifiedRisk};
use crate::matrix::config::MatrixConfig;

/// Impact field names, highest precedence first.
pub const IMPACT_FIELDS: &[&str] = &["impact_score", "impact", "severity", "probability"];

/// Likelihood field names, highest precedence first.
pub const LIKELIHOOD_FIELDS: &[&str] = &["likelihood_score", "probability", "likelihood"];

/// Value used when no field in a chain yields an ordinal.
pub const DEFAULT_ORDINAL: f64 = 1.0;

/// A read-only risk row as delivered by the data store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RiskRecord {
    fields: Map<String, Value>,
}

impl RiskRecord {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Wrap a JSON value; `None` unless it is an object.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(fields) => Some(Self { fields }),
            _ => None,
        }
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// First field in `chain` holding a nonzero number.
    pub fn first_ordinal(&self, chain: &[&str]) -> Option<f64> {
        chain
            .iter()
            .find_map(|field| self.get(field).and_then(ordinal_value))
    }

    pub fn impact(&self) -> f64 {
        extract_impact(self)
    }

    pub fn likelihood(&self) -> f64 {
        extract_likelihood(self)
    }

    /// Extract both axes and classify their product.
    pub fn classify(&self, config: &MatrixConfig) -> ClassifiedRisk {
        classify_pair(self.impact(), self.likelihood(), config)
    }
}

impl From<Map<String, Value>> for RiskRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self::new(fields)
    }
}

/// Values are returned as stored. Out-of-range ordinals such as `-1` or
/// `7` are not filtered here; they classify at the bottom of the table.
pub fn extract_impact(record: &RiskRecord) -> f64 {
    record.first_ordinal(IMPACT_FIELDS).unwrap_or(DEFAULT_ORDINAL)
}

pub fn extract_likelihood(record: &RiskRecord) -> f64 {
    record
        .first_ordinal(LIKELIHOOD_FIELDS)
        .unwrap_or(DEFAULT_ORDINAL)
}

/// Coerce a JSON value to an ordinal.
///
/// Any nonzero finite number counts, including negatives and fractions,
/// and so does a string holding one. Zero, null, booleans and
/// non-numeric values do not, and lookup moves to the next field.
fn ordinal_value(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    (number.is_finite() && number != 0.0).then_some(number)
}
