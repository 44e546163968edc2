use std::collections::BTreeMap;

use serde::Serialize;

use crate::model::scores::Scorecard;
use crate::report::{ReportInput, final_range, note_text, ranked};

#[derive(Debug, Serialize)]
struct SummaryDoc {
    tool: ToolMeta,
    source: String,
    scorecards: Vec<CardSummary>,
}

#[derive(Debug, Serialize)]
struct ToolMeta {
    name: String,
    version: String,
}

#[derive(Debug, Serialize)]
struct CardSummary {
    id: &'static str,
    title: &'static str,
    segment: &'static str,
    dimensions: Vec<&'static str>,
    weights: BTreeMap<&'static str, f64>,
    leader: Option<LeaderSummary>,
    final_range: RangeSummary,
    rows: Vec<RowSummary>,
    notes: Vec<String>,
}

#[derive(Debug, Serialize)]
struct LeaderSummary {
    company: String,
    final_score: f64,
}

#[derive(Debug, Serialize)]
struct RangeSummary {
    min: f64,
    max: f64,
}

#[derive(Debug, Serialize)]
struct RowSummary {
    company: String,
    scores: BTreeMap<&'static str, f64>,
    final_score: f64,
}

/// Machine-readable run summary. Rows stay in cohort order; the ranking
/// is carried by the leader and by each row's final score.
pub fn render_summary(input: &ReportInput<'_>) -> Result<String, serde_json::Error> {
    let doc = SummaryDoc {
        tool: ToolMeta {
            name: input.tool_name.clone(),
            version: input.tool_version.clone(),
        },
        source: input.source_label.clone(),
        scorecards: input.scorecards.iter().map(card_summary).collect(),
    };
    serde_json::to_string_pretty(&doc)
}

fn card_summary(card: &Scorecard) -> CardSummary {
    let mut weights = BTreeMap::new();
    let mut dimensions = Vec::with_capacity(card.def.dimensions.len());
    for dim in card.def.dimensions {
        dimensions.push(dim.id);
        weights.insert(dim.id, dim.weight);
    }

    let leader = ranked(&card.rows).first().map(|row| LeaderSummary {
        company: row.company.clone(),
        final_score: row.final_score,
    });
    let (min, max) = final_range(&card.rows);

    CardSummary {
        id: card.def.id,
        title: card.def.title,
        segment: card.def.segment.label(),
        dimensions,
        weights,
        leader,
        final_range: RangeSummary { min, max },
        rows: card
            .rows
            .iter()
            .map(|row| RowSummary {
                company: row.company.clone(),
                scores: row
                    .scores
                    .iter()
                    .map(|entry| (entry.dimension, entry.score))
                    .collect(),
                final_score: row.final_score,
            })
            .collect(),
        notes: card.notes.iter().map(note_text).collect(),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/json.rs"]
mod tests;
