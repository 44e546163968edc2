pub mod defs;

use crate::model::entity::Segment;

pub use defs::builtin_scorecards;

/// How a dimension gets its 1..=5 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DimensionKind {
    /// Min-max normalized from a raw metric column over the cohort.
    /// `invert` flips the scale for metrics where less is better.
    Metric {
        metric: &'static str,
        invert: bool,
    },
    /// Taken directly from the expert score table under the dimension id.
    Expert,
}

/// One weighted dimension of a scorecard.
#[derive(Debug, Clone, Copy)]
pub struct DimensionDef {
    pub id: &'static str,
    pub label: &'static str,
    pub weight: f64,
    pub kind: DimensionKind,
}

/// A complete scorecard definition: which segment it scores and the
/// ordered dimension list. Definitions are static data; composition
/// never mutates them.
#[derive(Debug, Clone, Copy)]
pub struct ScorecardDef {
    pub id: &'static str,
    pub title: &'static str,
    pub segment: Segment,
    pub dimensions: &'static [DimensionDef],
}

impl ScorecardDef {
    pub fn weight_sum(&self) -> f64 {
        self.dimensions.iter().map(|dim| dim.weight).sum()
    }
}

/// Which of a segment's two built-in scorecards to compose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Raw openFDA counts only.
    Raw,
    /// Raw counts blended with expert factors.
    Factor,
}

pub fn select(segment: Segment, variant: Variant) -> &'static ScorecardDef {
    let idx = match (segment, variant) {
        (Segment::Radiology, Variant::Raw) => 0,
        (Segment::Radiology, Variant::Factor) => 1,
        (Segment::Pharma, Variant::Raw) => 2,
        (Segment::Pharma, Variant::Factor) => 3,
    };
    &builtin_scorecards()[idx]
}

#[cfg(test)]
#[path = "../../tests/src_inline/scorecards/tests.rs"]
mod tests;
