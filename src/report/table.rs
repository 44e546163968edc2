use crate::model::scores::Scorecard;
use crate::report::{format_score, format_score_6};

/// Machine-readable scorecard: one header line, one row per company in
/// cohort order, scores at six decimals.
pub fn render_scorecard_tsv(card: &Scorecard) -> String {
    let mut out = String::new();

    out.push_str("company");
    for dim in card.def.dimensions {
        out.push('\t');
        out.push_str(dim.id);
    }
    out.push_str("\tfinal_score\n");

    for row in &card.rows {
        out.push_str(&row.company);
        for entry in &row.scores {
            out.push('\t');
            out.push_str(&format_score_6(entry.score));
        }
        out.push('\t');
        out.push_str(&format_score_6(row.final_score));
        out.push('\n');
    }

    out
}

/// Human-readable aligned table for the text report, three decimals.
pub fn render_table(card: &Scorecard) -> String {
    let mut company_width = "Company".len();
    for row in &card.rows {
        company_width = company_width.max(row.company.chars().count());
    }
    let mut widths = Vec::with_capacity(card.def.dimensions.len() + 1);
    for dim in card.def.dimensions {
        widths.push(dim.label.chars().count().max(5));
    }
    widths.push("Final".len().max(5));

    let mut out = String::new();
    out.push_str(&pad(company_width, "Company"));
    for (dim, width) in card.def.dimensions.iter().zip(&widths) {
        out.push_str("  ");
        out.push_str(&pad_left(*width, dim.label));
    }
    out.push_str("  ");
    out.push_str(&pad_left(widths[widths.len() - 1], "Final"));
    out.push('\n');

    for row in &card.rows {
        out.push_str(&pad(company_width, &row.company));
        for (entry, width) in row.scores.iter().zip(&widths) {
            out.push_str("  ");
            out.push_str(&pad_left(*width, &format_score(entry.score)));
        }
        out.push_str("  ");
        out.push_str(&pad_left(
            widths[widths.len() - 1],
            &format_score(row.final_score),
        ));
        out.push('\n');
    }

    out
}

fn pad(width: usize, value: &str) -> String {
    let mut out = String::from(value);
    while out.chars().count() < width {
        out.push(' ');
    }
    out
}

fn pad_left(width: usize, value: &str) -> String {
    let mut out = String::new();
    let len = value.chars().count();
    while out.chars().count() + len < width {
        out.push(' ');
    }
    out.push_str(value);
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/table.rs"]
mod tests;
