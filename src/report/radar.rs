use std::f64::consts::TAU;

use crate::model::scores::{Scorecard, ScorecardRow};
use crate::pipeline::normalize::SCALE_MAX;
use crate::report::format_score;

const VIEW: f64 = 360.0;
const CENTER: f64 = VIEW / 2.0;
const RADIUS: f64 = 130.0;
const LABEL_RADIUS: f64 = RADIUS + 18.0;

/// Radar (spider) chart of one company's dimension scores as a standalone
/// SVG. One spoke per dimension in definition order, rings at each whole
/// score, the first spoke pointing up.
pub fn render_radar_svg(card: &Scorecard, row: &ScorecardRow) -> String {
    let n = row.scores.len();

    let mut out = String::new();
    out.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {} {}\" width=\"{}\" height=\"{}\">\n",
        VIEW, VIEW, VIEW, VIEW
    ));
    out.push_str(&format!(
        "  <title>{} - {}</title>\n",
        escape_xml(card.def.title),
        escape_xml(&row.company)
    ));
    out.push_str(&format!(
        "  <text x=\"{}\" y=\"16\" text-anchor=\"middle\" font-size=\"12\">{} ({})</text>\n",
        CENTER,
        escape_xml(&row.company),
        format_score(row.final_score)
    ));

    for ring in 1..=5 {
        let r = RADIUS * f64::from(ring) / SCALE_MAX;
        out.push_str(&format!(
            "  <circle cx=\"{}\" cy=\"{}\" r=\"{:.1}\" fill=\"none\" stroke=\"#cccccc\" stroke-width=\"0.5\"/>\n",
            CENTER, CENTER, r
        ));
        out.push_str(&format!(
            "  <text x=\"{:.1}\" y=\"{:.1}\" font-size=\"7\" fill=\"#888888\">{}</text>\n",
            CENTER + 3.0,
            CENTER - r - 2.0,
            ring
        ));
    }

    for (idx, entry) in row.scores.iter().enumerate() {
        let angle = spoke_angle(idx, n);
        let (sx, sy) = point(angle, RADIUS);
        out.push_str(&format!(
            "  <line x1=\"{}\" y1=\"{}\" x2=\"{:.1}\" y2=\"{:.1}\" stroke=\"#cccccc\" stroke-width=\"0.5\"/>\n",
            CENTER, CENTER, sx, sy
        ));
        let (lx, ly) = point(angle, LABEL_RADIUS);
        out.push_str(&format!(
            "  <text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\" font-size=\"9\">{}</text>\n",
            lx,
            ly,
            escape_xml(entry.dimension)
        ));
    }

    let mut points = String::new();
    for (idx, entry) in row.scores.iter().enumerate() {
        let angle = spoke_angle(idx, n);
        let (x, y) = point(angle, RADIUS * entry.score / SCALE_MAX);
        if idx > 0 {
            points.push(' ');
        }
        points.push_str(&format!("{:.1},{:.1}", x, y));
    }
    out.push_str(&format!(
        "  <polygon points=\"{}\" fill=\"#4472c4\" fill-opacity=\"0.25\" stroke=\"#4472c4\" stroke-width=\"2\"/>\n",
        points
    ));

    out.push_str("</svg>\n");
    out
}

fn spoke_angle(idx: usize, n: usize) -> f64 {
    TAU * idx as f64 / n as f64 - TAU / 4.0
}

fn point(angle: f64, r: f64) -> (f64, f64) {
    (CENTER + r * angle.cos(), CENTER + r * angle.sin())
}

fn escape_xml(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/radar.rs"]
mod tests;
