use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Market segment a scored cohort belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Segment {
    /// Medical-imaging device manufacturers.
    Radiology,
    /// Pharmaceutical manufacturers.
    Pharma,
}

impl Segment {
    pub fn label(self) -> &'static str {
        match self {
            Segment::Radiology => "radiology",
            Segment::Pharma => "pharma",
        }
    }
}

/// One competing company together with its raw metric values.
///
/// Metric values are kept as collected; normalization happens per
/// dimension over the whole cohort, never per record.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityRecord {
    pub name: String,
    pub metrics: BTreeMap<String, f64>,
}

impl EntityRecord {
    pub fn new(name: impl Into<String>) -> Self {
        EntityRecord {
            name: name.into(),
            metrics: BTreeMap::new(),
        }
    }

    pub fn with_metric(mut self, metric: &str, value: f64) -> Self {
        self.metrics.insert(metric.to_string(), value);
        self
    }

    pub fn metric(&self, metric: &str) -> Option<f64> {
        self.metrics.get(metric).copied()
    }
}
