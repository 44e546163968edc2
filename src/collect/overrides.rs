use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::collect::SourceError;
use crate::scorecards::defs::{METRIC_INNOVATION, METRIC_RECALLS};

/// openFDA caps list endpoints at 1000 rows per page, so a fetched count
/// of 1000 means "at least 1000".
pub const DEFAULT_SATURATION: u64 = 1000;

/// Policy for counts that hit the page cap: at or above the saturation
/// threshold a fetched count is treated as truncated and replaced by a
/// configured best estimate when one exists.
#[derive(Debug, Clone, PartialEq)]
pub struct OverridePolicy {
    saturation: u64,
    entries: BTreeMap<String, BTreeMap<String, f64>>,
}

/// How a fetched count was mapped to a metric value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolution {
    /// Below the saturation threshold; taken verbatim.
    Exact(f64),
    /// Saturated, replaced by the configured best estimate.
    Overridden(f64),
    /// Saturated with no configured estimate; kept verbatim, likely low.
    Saturated(f64),
}

impl OverridePolicy {
    pub fn new(saturation: u64) -> Self {
        OverridePolicy {
            saturation,
            entries: BTreeMap::new(),
        }
    }

    /// Best estimates for the manufacturers whose device counts are known
    /// to exceed the openFDA page cap.
    pub fn openfda_v1() -> Self {
        OverridePolicy::new(DEFAULT_SATURATION)
            .with_override("GE Healthcare", METRIC_RECALLS, 150.0)
            .with_override("GE Healthcare", METRIC_INNOVATION, 800.0)
            .with_override("Siemens", METRIC_RECALLS, 120.0)
            .with_override("Siemens", METRIC_INNOVATION, 700.0)
            .with_override("Philips", METRIC_RECALLS, 130.0)
            .with_override("Philips", METRIC_INNOVATION, 964.0)
    }

    pub fn with_override(mut self, company: &str, metric: &str, value: f64) -> Self {
        self.entries
            .entry(company.to_string())
            .or_default()
            .insert(metric.to_string(), value);
        self
    }

    pub fn set_saturation(&mut self, saturation: u64) {
        self.saturation = saturation;
    }

    pub fn saturation(&self) -> u64 {
        self.saturation
    }

    /// Loads a policy from a JSON file of the form
    /// `{"saturation": 1000, "overrides": {"Company": {"metric": 123.0}}}`.
    /// A missing `saturation` falls back to the default threshold.
    pub fn from_path(path: &Path) -> Result<Self, SourceError> {
        let text = fs::read_to_string(path)?;
        let file: OverrideFile = serde_json::from_str(&text)?;
        Ok(OverridePolicy {
            saturation: file.saturation.unwrap_or(DEFAULT_SATURATION),
            entries: file.overrides,
        })
    }

    pub fn resolve(&self, company: &str, metric: &str, fetched: u64) -> Resolution {
        if fetched < self.saturation {
            return Resolution::Exact(fetched as f64);
        }
        match self
            .entries
            .get(company)
            .and_then(|metrics| metrics.get(metric))
        {
            Some(&value) => Resolution::Overridden(value),
            None => Resolution::Saturated(fetched as f64),
        }
    }
}

#[derive(Debug, Deserialize)]
struct OverrideFile {
    #[serde(default)]
    saturation: Option<u64>,
    #[serde(default)]
    overrides: BTreeMap<String, BTreeMap<String, f64>>,
}

#[cfg(test)]
#[path = "../../tests/src_inline/collect/overrides.rs"]
mod tests;
