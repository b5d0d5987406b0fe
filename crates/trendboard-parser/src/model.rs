use std::fmt;

use serde::{Deserialize, Serialize};

/// Which quantity a long-format row measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Sales,
    Asp,
    GpPercent,
}

impl Metric {
    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::Sales => "sales",
            Metric::Asp => "asp",
            Metric::GpPercent => "gp_percent",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Metric {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "sales" => Ok(Metric::Sales),
            "asp" => Ok(Metric::Asp),
            "gp_percent" => Ok(Metric::GpPercent),
            other => Err(format!("unknown metric '{other}'")),
        }
    }
}

/// "This year" vs "last year" perspective on the same metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonAxis {
    Focus,
    Comparison,
}

impl ComparisonAxis {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComparisonAxis::Focus => "focus",
            ComparisonAxis::Comparison => "comparison",
        }
    }
}

impl fmt::Display for ComparisonAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for ComparisonAxis {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "focus" => Ok(ComparisonAxis::Focus),
            "comparison" => Ok(ComparisonAxis::Comparison),
            other => Err(format!("unknown comparison axis '{other}'")),
        }
    }
}

/// A raw cell value as it appears in the source table. CSV ingestion keeps
/// cells as `Text` until normalization; `Number` and `Null` arise when rows
/// are built programmatically or deserialized from JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Number(f64),
    Text(String),
    Null,
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Number(value)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

/// One long-format row: a single (article, week, metric, axis) observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawObservation {
    pub article_id: String,
    pub banner: String,
    pub pack_size: String,
    pub fiscal_week: u32,
    pub start_date: String,
    pub end_date: String,
    pub metric: Metric,
    pub comparison: ComparisonAxis,
    pub value: RawValue,
}
