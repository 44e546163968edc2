use std::collections::BTreeSet;
use std::ops::RangeInclusive;

use crate::model::entity::EntityRecord;
use crate::model::experts::ExpertScoreTable;
use crate::model::scores::{ComposeNote, DimensionScore, Scorecard, ScorecardRow};
use crate::pipeline::ScoreError;
use crate::pipeline::normalize::normalize_series;
use crate::scorecards::{DimensionKind, ScorecardDef};

/// Tolerance for the weights-sum-to-one check.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;
pub const EXPERT_SCALE: RangeInclusive<u8> = 1..=5;

#[derive(Debug, Clone)]
pub struct ComposeInputs<'a> {
    pub def: &'a ScorecardDef,
    pub cohort: &'a [EntityRecord],
    pub experts: &'a ExpertScoreTable,
}

/// Composes one scorecard over a cohort.
///
/// Every dimension column is resolved in full before any row is built, so
/// a failure anywhere leaves no partial output. Rows come back in cohort
/// order; ranking is a presentation concern.
pub fn compose_scorecard(inputs: &ComposeInputs<'_>) -> Result<Scorecard, ScoreError> {
    let def = inputs.def;
    let cohort = inputs.cohort;

    if cohort.is_empty() {
        return Err(ScoreError::EmptyCohort);
    }
    let mut seen = BTreeSet::new();
    for entity in cohort {
        if !seen.insert(entity.name.as_str()) {
            return Err(ScoreError::DuplicateEntity {
                company: entity.name.clone(),
            });
        }
    }
    for dim in def.dimensions {
        if dim.weight < 0.0 {
            return Err(ScoreError::InvalidWeight {
                dimension: dim.id,
                weight: dim.weight,
            });
        }
    }

    let mut notes = Vec::new();
    let sum = def.weight_sum();
    if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
        tracing::warn!(
            "scorecard {} weights sum to {:.6}; final scores may leave the 1..=5 scale",
            def.id,
            sum
        );
        notes.push(ComposeNote::UnbalancedWeights { sum });
    }

    // One score column per dimension, in definition order.
    let mut columns: Vec<Vec<f64>> = Vec::with_capacity(def.dimensions.len());
    for dim in def.dimensions {
        let column = match dim.kind {
            DimensionKind::Metric { metric, invert } => {
                let mut raw = Vec::with_capacity(cohort.len());
                for entity in cohort {
                    let value =
                        entity
                            .metric(metric)
                            .ok_or_else(|| ScoreError::MissingMetric {
                                company: entity.name.clone(),
                                metric,
                            })?;
                    raw.push(value);
                }
                let series = normalize_series(&raw, invert)?;
                if series.degenerate {
                    tracing::info!(
                        "dimension {} is flat across the cohort; every company takes the {} midpoint",
                        dim.id,
                        crate::pipeline::normalize::SCALE_MIDPOINT
                    );
                    notes.push(ComposeNote::DegenerateDimension { dimension: dim.id });
                }
                series.scores
            }
            DimensionKind::Expert => {
                let mut scores = Vec::with_capacity(cohort.len());
                for entity in cohort {
                    let value = inputs.experts.get(&entity.name, dim.id).ok_or_else(|| {
                        ScoreError::MissingExpertScore {
                            company: entity.name.clone(),
                            dimension: dim.id,
                        }
                    })?;
                    if !EXPERT_SCALE.contains(&value) {
                        return Err(ScoreError::ExpertScoreOutOfRange {
                            company: entity.name.clone(),
                            dimension: dim.id,
                            value,
                        });
                    }
                    scores.push(f64::from(value));
                }
                scores
            }
        };
        columns.push(column);
    }

    let mut rows = Vec::with_capacity(cohort.len());
    for (idx, entity) in cohort.iter().enumerate() {
        let mut scores = Vec::with_capacity(def.dimensions.len());
        let mut final_score = 0.0;
        for (dim, column) in def.dimensions.iter().zip(&columns) {
            let score = column[idx];
            scores.push(DimensionScore {
                dimension: dim.id,
                score,
            });
            final_score += score * dim.weight;
        }
        rows.push(ScorecardRow {
            company: entity.name.clone(),
            scores,
            final_score,
        });
    }

    Ok(Scorecard {
        def: *def,
        rows,
        notes,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/compose.rs"]
mod tests;
