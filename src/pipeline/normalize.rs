use crate::pipeline::ScoreError;

pub const SCALE_MIN: f64 = 1.0;
pub const SCALE_MAX: f64 = 5.0;
/// Score assigned to every company when a dimension has no spread.
pub const SCALE_MIDPOINT: f64 = 3.0;

/// Result of normalizing one raw metric column over a cohort.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedSeries {
    pub scores: Vec<f64>,
    /// True when every input value was equal and the midpoint fallback fired.
    pub degenerate: bool,
}

/// Min-max normalizes a raw metric column onto the 1..=5 scale.
///
/// The column minimum maps to exactly 1.0 and the maximum to exactly 5.0
/// (swapped when `invert` is set, for metrics where less is better).
/// Positions depend only on each value's fraction of the min-max span, so
/// the output is invariant under affine transforms of the inputs. An
/// all-equal column cannot be ranked and collapses to the 3.0 midpoint.
pub fn normalize_series(values: &[f64], invert: bool) -> Result<NormalizedSeries, ScoreError> {
    if values.is_empty() {
        return Err(ScoreError::EmptyCohort);
    }
    let mut min = values[0];
    let mut max = values[0];
    for &value in &values[1..] {
        if value < min {
            min = value;
        }
        if value > max {
            max = value;
        }
    }
    if min == max {
        return Ok(NormalizedSeries {
            scores: vec![SCALE_MIDPOINT; values.len()],
            degenerate: true,
        });
    }
    let span = max - min;
    let mut scores = Vec::with_capacity(values.len());
    for &value in values {
        let mut fraction = (value - min) / span;
        if invert {
            fraction = 1.0 - fraction;
        }
        scores.push(SCALE_MIN + (SCALE_MAX - SCALE_MIN) * fraction);
    }
    Ok(NormalizedSeries {
        scores,
        degenerate: false,
    })
}

/// Convenience wrapper when the caller does not care about degeneracy.
pub fn normalize(values: &[f64], invert: bool) -> Result<Vec<f64>, ScoreError> {
    normalize_series(values, invert).map(|series| series.scores)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/normalize.rs"]
mod tests;
