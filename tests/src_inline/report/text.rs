use super::*;

use crate::collect::appendix;
use crate::model::entity::Segment;
use crate::model::scores::ComposeNote;
use crate::pipeline::compose::{ComposeInputs, compose_scorecard};
use crate::scorecards::{Variant, select};

fn sample_input(cards: &[Scorecard]) -> ReportInput<'_> {
    ReportInput {
        scorecards: cards,
        focus: None,
        source_label: "appendix".to_string(),
        tool_name: "rivalcard".to_string(),
        tool_version: "0.0.0".to_string(),
    }
}

fn compose(segment: Segment, variant: Variant) -> Scorecard {
    let data = appendix::appendix(segment);
    compose_scorecard(&ComposeInputs {
        def: select(segment, variant),
        cohort: &data.cohort,
        experts: &data.experts,
    })
    .unwrap()
}

#[test]
fn test_report_sections() {
    let cards = vec![
        compose(Segment::Radiology, Variant::Raw),
        compose(Segment::Pharma, Variant::Factor),
    ];
    let report = render_report_text(&sample_input(&cards));

    assert!(report.starts_with("Competitive Scorecard Report\n"));
    assert!(report.contains("Tool: rivalcard 0.0.0\n"));
    assert!(report.contains("Source: appendix\n"));
    assert!(report.contains("1. Radiology devices, raw safety signals\n"));
    assert!(report.contains("2. Pharma manufacturers, factor-weighted\n"));
    assert!(report.contains("Caveats\n"));
}

#[test]
fn test_ranking_lines_are_ordered() {
    let cards = vec![compose(Segment::Pharma, Variant::Raw)];
    let report = render_report_text(&sample_input(&cards));

    let ranking = report
        .lines()
        .find(|line| line.starts_with("Ranking:"))
        .unwrap();
    // Sanofi has the fewest FAERS deaths, Bayer the most.
    assert!(ranking.starts_with("Ranking: 1. Sanofi (5.000)"));
    assert!(ranking.contains("6. Bayer (1.000)"));
}

#[test]
fn test_notes_are_rendered() {
    let mut card = compose(Segment::Radiology, Variant::Raw);
    card.notes.push(ComposeNote::DegenerateDimension {
        dimension: "recall_score",
    });
    let cards = vec![card];
    let report = render_report_text(&sample_input(&cards));

    assert!(report.contains("Note: dimension recall_score had no spread"));
}
