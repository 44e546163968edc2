use crate::model::scores::Scorecard;
use crate::report::format_score;

/// Five equal buckets over the 1..=5 scale, darkest glyph for the top bucket.
pub fn shade(score: f64) -> char {
    if score >= 4.2 {
        '\u{2588}'
    } else if score >= 3.4 {
        '\u{2593}'
    } else if score >= 2.6 {
        '\u{2592}'
    } else if score >= 1.8 {
        '\u{2591}'
    } else {
        '\u{00b7}'
    }
}

/// Text heatmap of the scorecard: one glyph cell per dimension plus the
/// final score, rows in cohort order.
pub fn render_heatmap(card: &Scorecard) -> String {
    let mut company_width = 0usize;
    for row in &card.rows {
        company_width = company_width.max(row.company.chars().count());
    }

    let mut out = String::new();
    for row in &card.rows {
        out.push_str(&row.company);
        for _ in row.company.chars().count()..company_width {
            out.push(' ');
        }
        out.push_str("  ");
        for entry in &row.scores {
            out.push(shade(entry.score));
            out.push(' ');
        }
        out.push(shade(row.final_score));
        out.push_str("  ");
        out.push_str(&format_score(row.final_score));
        out.push('\n');
    }

    out.push_str("columns: ");
    let mut labels = Vec::with_capacity(card.def.dimensions.len() + 1);
    for dim in card.def.dimensions {
        labels.push(dim.id);
    }
    labels.push("final_score");
    out.push_str(&labels.join(", "));
    out.push('\n');
    out.push_str(
        "legend: \u{00b7} [1.0,1.8) \u{2591} [1.8,2.6) \u{2592} [2.6,3.4) \u{2593} [3.4,4.2) \u{2588} [4.2,5.0]\n",
    );

    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/heatmap.rs"]
mod tests;
