pub mod compose;
pub mod normalize;

use thiserror::Error;

/// Errors raised while composing a scorecard.
///
/// All of these are configuration or input problems detected before any
/// result row is produced; a composed scorecard is never partial.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoreError {
    #[error("cohort is empty; scoring needs at least one company")]
    EmptyCohort,
    #[error("duplicate company in cohort: {company}")]
    DuplicateEntity { company: String },
    #[error("dimension {dimension} has negative weight {weight}")]
    InvalidWeight {
        dimension: &'static str,
        weight: f64,
    },
    #[error("company {company} has no value for raw metric {metric}")]
    MissingMetric {
        company: String,
        metric: &'static str,
    },
    #[error("no expert score for company {company}, factor {dimension}")]
    MissingExpertScore {
        company: String,
        dimension: &'static str,
    },
    #[error("expert score for company {company}, factor {dimension} is {value}; expected 1..=5")]
    ExpertScoreOutOfRange {
        company: String,
        dimension: &'static str,
        value: u8,
    },
}
