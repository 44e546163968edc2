pub mod appendix;
pub mod dataset;
pub mod openfda;
pub mod overrides;

use thiserror::Error;

use crate::model::entity::{EntityRecord, Segment};
use crate::model::experts::ExpertScoreTable;
use crate::scorecards::defs::{METRIC_FAERS_DEATHS, METRIC_INNOVATION, METRIC_RECALLS};

use openfda::OpenFdaClient;
use overrides::{OverridePolicy, Resolution};

pub use dataset::load_dataset;

/// Everything the pipeline needs for one segment: the cohort with raw
/// metrics attached plus the expert score table.
#[derive(Debug, Clone)]
pub struct SegmentData {
    pub segment: Segment,
    pub cohort: Vec<EntityRecord>,
    pub experts: ExpertScoreTable,
}

/// Errors raised while acquiring cohort data, before scoring starts.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("missing input: {0}")]
    MissingInput(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("http client error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("openFDA API error: status={status}, body={body}")]
    Api { status: u16, body: String },
}

/// Builds a segment cohort from live openFDA counts.
///
/// Query failures degrade to a count of 0 with a warning rather than
/// aborting the run; saturated counts go through the override policy.
/// Expert factors always come from the appendix tables since no API
/// serves them.
pub fn fetch_openfda(
    client: &OpenFdaClient,
    policy: &OverridePolicy,
    segment: Segment,
) -> SegmentData {
    let cohort = match segment {
        Segment::Radiology => appendix::DEVICE_MAKERS
            .iter()
            .map(|maker| {
                let recalls = resolve_count(
                    policy,
                    maker.name,
                    METRIC_RECALLS,
                    client.device_recalls(maker.name),
                );
                let innovation = resolve_count(
                    policy,
                    maker.name,
                    METRIC_INNOVATION,
                    client.device_clearances(maker.name),
                );
                EntityRecord::new(maker.name)
                    .with_metric(METRIC_RECALLS, recalls)
                    .with_metric(METRIC_INNOVATION, innovation)
            })
            .collect(),
        Segment::Pharma => appendix::DRUG_MAKERS
            .iter()
            .map(|maker| {
                let deaths = resolve_count(
                    policy,
                    maker.name,
                    METRIC_FAERS_DEATHS,
                    client.drug_event_deaths(maker.product),
                );
                EntityRecord::new(maker.name).with_metric(METRIC_FAERS_DEATHS, deaths)
            })
            .collect(),
    };
    SegmentData {
        segment,
        cohort,
        experts: appendix::experts(segment),
    }
}

fn resolve_count(policy: &OverridePolicy, company: &str, metric: &str, fetched: u64) -> f64 {
    match policy.resolve(company, metric, fetched) {
        Resolution::Exact(value) => value,
        Resolution::Overridden(value) => {
            tracing::info!(
                "count for {}/{} hit the saturation threshold; using best-estimate override {}",
                company,
                metric,
                value
            );
            value
        }
        Resolution::Saturated(value) => {
            tracing::warn!(
                "count for {}/{} hit the saturation threshold with no override configured; the true count is likely higher",
                company,
                metric
            );
            value
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/collect/tests.rs"]
mod tests;
