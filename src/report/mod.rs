pub mod heatmap;
pub mod json;
pub mod radar;
pub mod table;
pub mod text;

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::model::scores::{ComposeNote, Scorecard, ScorecardRow};

/// Everything the presenter needs for one run.
#[derive(Debug, Clone)]
pub struct ReportInput<'a> {
    pub scorecards: &'a [Scorecard],
    /// Company highlighted with a radar chart, when present in a cohort.
    pub focus: Option<&'a str>,
    pub source_label: String,
    pub tool_name: String,
    pub tool_version: String,
}

pub fn format_score(v: f64) -> String {
    format!("{:.3}", v)
}

pub fn format_score_6(v: f64) -> String {
    format!("{:.6}", v)
}

/// Rows ordered for display: final score descending, company name as the
/// tie-break so equal scores render stably.
pub fn ranked(rows: &[ScorecardRow]) -> Vec<&ScorecardRow> {
    let mut out = rows.iter().collect::<Vec<_>>();
    out.sort_by(|a, b| {
        match b
            .final_score
            .partial_cmp(&a.final_score)
            .unwrap_or(std::cmp::Ordering::Equal)
        {
            std::cmp::Ordering::Equal => a.company.cmp(&b.company),
            other => other,
        }
    });
    out
}

pub fn final_range(rows: &[ScorecardRow]) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for row in rows {
        if row.final_score < min {
            min = row.final_score;
        }
        if row.final_score > max {
            max = row.final_score;
        }
    }
    if rows.is_empty() { (0.0, 0.0) } else { (min, max) }
}

pub fn note_text(note: &ComposeNote) -> String {
    match note {
        ComposeNote::DegenerateDimension { dimension } => format!(
            "dimension {} had no spread; every company scored the 3.0 midpoint",
            dimension
        ),
        ComposeNote::UnbalancedWeights { sum } => format!(
            "weights sum to {} instead of 1.0; final scores may leave the 1..=5 scale",
            format_score_6(*sum)
        ),
    }
}

/// File-name-safe company slug.
pub fn slug(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_was_sep = true;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            out.push(ch.to_ascii_lowercase());
            last_was_sep = false;
        } else if !last_was_sep {
            out.push('_');
            last_was_sep = true;
        }
    }
    while out.ends_with('_') {
        out.pop();
    }
    out
}

/// Writes every report artifact for the run into `out_dir`:
/// one TSV per scorecard, the combined text report, the JSON summary,
/// and a radar SVG per scorecard for the focus company when set.
pub fn write_reports(input: &ReportInput<'_>, out_dir: &Path) -> std::io::Result<()> {
    fs::create_dir_all(out_dir)?;

    for card in input.scorecards {
        let tsv_path = out_dir.join(format!("scorecard_{}.tsv", card.def.id));
        write_text(&tsv_path, &table::render_scorecard_tsv(card))?;
    }

    let report_path = out_dir.join("report.txt");
    write_text(&report_path, &text::render_report_text(input))?;

    let summary_path = out_dir.join("summary.json");
    let summary = json::render_summary(input).map_err(std::io::Error::other)?;
    write_text(&summary_path, &summary)?;

    if let Some(focus) = input.focus {
        for card in input.scorecards {
            match card.row(focus) {
                Some(row) => {
                    let svg_path =
                        out_dir.join(format!("radar_{}_{}.svg", card.def.id, slug(focus)));
                    write_text(&svg_path, &radar::render_radar_svg(card, row))?;
                }
                None => {
                    tracing::warn!(
                        "focus company {} is not in the {} cohort; skipping its radar chart",
                        focus,
                        card.def.id
                    );
                }
            }
        }
    }

    Ok(())
}

fn write_text(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(contents.as_bytes())?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/tests.rs"]
mod tests;
