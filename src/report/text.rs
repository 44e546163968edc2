use crate::model::scores::Scorecard;
use crate::report::{ReportInput, format_score, heatmap, note_text, ranked, table};

pub fn render_report_text(input: &ReportInput<'_>) -> String {
    let mut out = String::new();

    out.push_str("Competitive Scorecard Report\n");
    out.push_str("============================\n\n");
    out.push_str(&format!(
        "Tool: {} {}\n",
        input.tool_name, input.tool_version
    ));
    out.push_str(&format!("Source: {}\n\n", input.source_label));

    for (idx, card) in input.scorecards.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", idx + 1, card.def.title));
        out.push_str(&table::render_table(card));
        out.push('\n');
        out.push_str(&heatmap::render_heatmap(card));
        out.push('\n');
        out.push_str(&format!("Ranking: {}\n", ranking_line(card)));
        for note in &card.notes {
            out.push_str(&format!("Note: {}\n", note_text(note)));
        }
        out.push('\n');
    }

    out.push_str("Caveats\n");
    out.push_str(
        "Scores are relative to this cohort; adding or removing a company rescales every dimension.\n",
    );
    out.push_str(
        "Expert factors are panel judgements on the 1..=5 scale, not measured quantities.\n",
    );

    out
}

fn ranking_line(card: &Scorecard) -> String {
    let mut parts = Vec::with_capacity(card.rows.len());
    for (place, row) in ranked(&card.rows).iter().enumerate() {
        parts.push(format!(
            "{}. {} ({})",
            place + 1,
            row.company,
            format_score(row.final_score)
        ));
    }
    parts.join("  ")
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/text.rs"]
mod tests;
