use crate::scorecards::ScorecardDef;

/// One normalized 1..=5 score for a single dimension of a single company.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DimensionScore {
    pub dimension: &'static str,
    pub score: f64,
}

/// Per-company result row. Dimension scores appear in definition order;
/// the final score is their weighted sum.
#[derive(Debug, Clone, PartialEq)]
pub struct ScorecardRow {
    pub company: String,
    pub scores: Vec<DimensionScore>,
    pub final_score: f64,
}

impl ScorecardRow {
    pub fn score(&self, dimension: &str) -> Option<f64> {
        self.scores
            .iter()
            .find(|entry| entry.dimension == dimension)
            .map(|entry| entry.score)
    }
}

/// Informational conditions observed while composing a scorecard.
///
/// None of these abort composition; they are surfaced in reports so a
/// reader knows which numbers carry less signal than usual.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ComposeNote {
    /// Every company had the same raw value, so the whole dimension
    /// collapsed to the 3.0 midpoint.
    DegenerateDimension { dimension: &'static str },
    /// Dimension weights do not sum to 1.0, so final scores may leave
    /// the 1..=5 scale.
    UnbalancedWeights { sum: f64 },
}

/// A fully composed scorecard: the definition it was built from, one row
/// per cohort company in collection order, and any notes raised on the way.
#[derive(Debug, Clone)]
pub struct Scorecard {
    pub def: ScorecardDef,
    pub rows: Vec<ScorecardRow>,
    pub notes: Vec<ComposeNote>,
}

impl Scorecard {
    pub fn row(&self, company: &str) -> Option<&ScorecardRow> {
        self.rows.iter().find(|row| row.company == company)
    }
}
