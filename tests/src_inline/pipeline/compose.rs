use super::*;

use crate::collect::appendix;
use crate::model::entity::Segment;
use crate::scorecards::{DimensionDef, Variant, select};

fn radiology_inputs() -> (
    &'static ScorecardDef,
    Vec<EntityRecord>,
    ExpertScoreTable,
) {
    let data = appendix::appendix(Segment::Radiology);
    let def = select(Segment::Radiology, Variant::Factor);
    (def, data.cohort, data.experts)
}

#[test]
fn test_rows_follow_cohort_order() {
    let (def, cohort, experts) = radiology_inputs();
    let card = compose_scorecard(&ComposeInputs {
        def,
        cohort: &cohort,
        experts: &experts,
    })
    .unwrap();

    let names = card.rows.iter().map(|r| r.company.as_str()).collect::<Vec<_>>();
    assert_eq!(
        names,
        vec!["Bayer", "GE Healthcare", "Siemens", "Philips", "Canon", "ACIST"]
    );
}

#[test]
fn test_metric_dimensions_hit_scale_ends() {
    let (def, cohort, experts) = radiology_inputs();
    let card = compose_scorecard(&ComposeInputs {
        def,
        cohort: &cohort,
        experts: &experts,
    })
    .unwrap();

    // Fewest recalls scores best on the inverted safety dimension.
    assert_eq!(card.row("ACIST").unwrap().score("safety_score"), Some(5.0));
    assert_eq!(
        card.row("GE Healthcare").unwrap().score("safety_score"),
        Some(1.0)
    );
    // Most clearances scores best on innovation.
    assert_eq!(
        card.row("Philips").unwrap().score("innovation_score"),
        Some(5.0)
    );
    assert_eq!(
        card.row("ACIST").unwrap().score("innovation_score"),
        Some(1.0)
    );
}

#[test]
fn test_expert_dimensions_pass_through() {
    let (def, cohort, experts) = radiology_inputs();
    let card = compose_scorecard(&ComposeInputs {
        def,
        cohort: &cohort,
        experts: &experts,
    })
    .unwrap();

    let philips = card.row("Philips").unwrap();
    assert_eq!(philips.score("product_quality"), Some(4.0));
    assert_eq!(philips.score("price"), Some(3.0));
    assert_eq!(philips.score("service"), Some(5.0));
}

#[test]
fn test_final_score_is_the_weighted_sum() {
    let (def, cohort, experts) = radiology_inputs();
    let card = compose_scorecard(&ComposeInputs {
        def,
        cohort: &cohort,
        experts: &experts,
    })
    .unwrap();

    for row in &card.rows {
        let mut expected = 0.0;
        for (dim, entry) in def.dimensions.iter().zip(&row.scores) {
            assert_eq!(dim.id, entry.dimension);
            expected += entry.score * dim.weight;
        }
        assert!((row.final_score - expected).abs() < 1e-12);
    }
}

#[test]
fn test_final_scores_stay_on_scale_for_unit_weights() {
    for segment in [Segment::Radiology, Segment::Pharma] {
        let data = appendix::appendix(segment);
        for variant in [Variant::Raw, Variant::Factor] {
            let card = compose_scorecard(&ComposeInputs {
                def: select(segment, variant),
                cohort: &data.cohort,
                experts: &data.experts,
            })
            .unwrap();
            for row in &card.rows {
                assert!(
                    (1.0..=5.0).contains(&row.final_score),
                    "{} {}",
                    card.def.id,
                    row.company
                );
            }
        }
    }
}

#[test]
fn test_single_company_cohort_scores_the_midpoint() {
    let def = select(Segment::Radiology, Variant::Raw);
    let cohort = vec![
        EntityRecord::new("Solo")
            .with_metric("recalls", 17.0)
            .with_metric("innovation", 250.0),
    ];
    let card = compose_scorecard(&ComposeInputs {
        def,
        cohort: &cohort,
        experts: &ExpertScoreTable::new(),
    })
    .unwrap();

    let solo = card.row("Solo").unwrap();
    assert_eq!(solo.score("recall_score"), Some(3.0));
    assert_eq!(solo.score("innovation_score"), Some(3.0));
    assert!((solo.final_score - 3.0).abs() < 1e-12);
    assert_eq!(card.notes.len(), 2);
}

#[test]
fn test_pharma_factor_worked_example() {
    let data = appendix::appendix(Segment::Pharma);
    let def = select(Segment::Pharma, Variant::Factor);
    let card = compose_scorecard(&ComposeInputs {
        def,
        cohort: &data.cohort,
        experts: &data.experts,
    })
    .unwrap();

    // Bayer has the most FAERS deaths, so inverted safety bottoms out at 1.0
    // and the final score is 0.35*1.0 + 0.25*4 + 0.10*3 + 0.15*4 + 0.15*4.
    let bayer = card.row("Bayer").unwrap();
    assert_eq!(bayer.score("safety_score"), Some(1.0));
    assert!((bayer.final_score - 2.85).abs() < 1e-9);

    // Sanofi has the fewest deaths and tops the safety dimension.
    assert_eq!(card.row("Sanofi").unwrap().score("safety_score"), Some(5.0));
}

#[test]
fn test_empty_cohort_is_an_error() {
    let (def, _, experts) = radiology_inputs();
    let err = compose_scorecard(&ComposeInputs {
        def,
        cohort: &[],
        experts: &experts,
    })
    .unwrap_err();
    assert_eq!(err, ScoreError::EmptyCohort);
}

#[test]
fn test_duplicate_company_is_an_error() {
    let (def, mut cohort, experts) = radiology_inputs();
    cohort.push(cohort[0].clone());
    let err = compose_scorecard(&ComposeInputs {
        def,
        cohort: &cohort,
        experts: &experts,
    })
    .unwrap_err();
    assert_eq!(
        err,
        ScoreError::DuplicateEntity {
            company: "Bayer".to_string()
        }
    );
}

#[test]
fn test_missing_metric_names_company_and_metric() {
    let (def, mut cohort, experts) = radiology_inputs();
    cohort[2].metrics.remove("recalls");
    let err = compose_scorecard(&ComposeInputs {
        def,
        cohort: &cohort,
        experts: &experts,
    })
    .unwrap_err();
    assert_eq!(
        err,
        ScoreError::MissingMetric {
            company: "Siemens".to_string(),
            metric: "recalls"
        }
    );
}

#[test]
fn test_missing_expert_score_aborts() {
    let (def, cohort, _) = radiology_inputs();
    let empty = ExpertScoreTable::new();
    let err = compose_scorecard(&ComposeInputs {
        def,
        cohort: &cohort,
        experts: &empty,
    })
    .unwrap_err();
    assert_eq!(
        err,
        ScoreError::MissingExpertScore {
            company: "Bayer".to_string(),
            dimension: "product_quality"
        }
    );
}

#[test]
fn test_expert_score_out_of_range_aborts() {
    let (def, cohort, mut experts) = radiology_inputs();
    experts.set("Canon", "price", 6);
    let err = compose_scorecard(&ComposeInputs {
        def,
        cohort: &cohort,
        experts: &experts,
    })
    .unwrap_err();
    assert_eq!(
        err,
        ScoreError::ExpertScoreOutOfRange {
            company: "Canon".to_string(),
            dimension: "price",
            value: 6
        }
    );
}

#[test]
fn test_flat_dimension_notes_and_continues() {
    let def = select(Segment::Radiology, Variant::Raw);
    let cohort = vec![
        EntityRecord::new("A")
            .with_metric("recalls", 10.0)
            .with_metric("innovation", 50.0),
        EntityRecord::new("B")
            .with_metric("recalls", 10.0)
            .with_metric("innovation", 80.0),
    ];
    let card = compose_scorecard(&ComposeInputs {
        def,
        cohort: &cohort,
        experts: &ExpertScoreTable::new(),
    })
    .unwrap();

    assert_eq!(card.row("A").unwrap().score("recall_score"), Some(3.0));
    assert_eq!(card.row("B").unwrap().score("recall_score"), Some(3.0));
    assert_eq!(
        card.notes,
        vec![ComposeNote::DegenerateDimension {
            dimension: "recall_score"
        }]
    );
    // The spread dimension still differentiates the cohort.
    assert_eq!(card.row("B").unwrap().score("innovation_score"), Some(5.0));
}

const LOPSIDED_DIMS: &[DimensionDef] = &[
    DimensionDef {
        id: "alpha",
        label: "Alpha",
        weight: 0.9,
        kind: DimensionKind::Expert,
    },
    DimensionDef {
        id: "beta",
        label: "Beta",
        weight: 0.3,
        kind: DimensionKind::Expert,
    },
];

const LOPSIDED: ScorecardDef = ScorecardDef {
    id: "lopsided",
    title: "Lopsided weights",
    segment: crate::model::entity::Segment::Radiology,
    dimensions: LOPSIDED_DIMS,
};

#[test]
fn test_unbalanced_weights_note() {
    let mut experts = ExpertScoreTable::new();
    experts.set("A", "alpha", 5);
    experts.set("A", "beta", 5);
    let cohort = vec![EntityRecord::new("A")];

    let card = compose_scorecard(&ComposeInputs {
        def: &LOPSIDED,
        cohort: &cohort,
        experts: &experts,
    })
    .unwrap();

    assert!(matches!(
        card.notes[0],
        ComposeNote::UnbalancedWeights { sum } if (sum - 1.2).abs() < 1e-9
    ));
    // 5*(0.9 + 0.3) leaves the nominal scale, by construction.
    assert!((card.rows[0].final_score - 6.0).abs() < 1e-9);
}

const NEGATIVE_DIMS: &[DimensionDef] = &[DimensionDef {
    id: "gamma",
    label: "Gamma",
    weight: -0.5,
    kind: DimensionKind::Expert,
}];

const NEGATIVE: ScorecardDef = ScorecardDef {
    id: "negative",
    title: "Negative weight",
    segment: crate::model::entity::Segment::Radiology,
    dimensions: NEGATIVE_DIMS,
};

#[test]
fn test_negative_weight_is_an_error() {
    let cohort = vec![EntityRecord::new("A")];
    let err = compose_scorecard(&ComposeInputs {
        def: &NEGATIVE,
        cohort: &cohort,
        experts: &ExpertScoreTable::new(),
    })
    .unwrap_err();
    assert_eq!(
        err,
        ScoreError::InvalidWeight {
            dimension: "gamma",
            weight: -0.5
        }
    );
}

#[test]
fn test_determinism_bitwise() {
    let (def, cohort, experts) = radiology_inputs();
    let inputs = ComposeInputs {
        def,
        cohort: &cohort,
        experts: &experts,
    };
    let a = compose_scorecard(&inputs).unwrap();
    let b = compose_scorecard(&inputs).unwrap();
    for (ra, rb) in a.rows.iter().zip(&b.rows) {
        assert_eq!(ra.final_score.to_bits(), rb.final_score.to_bits());
        for (sa, sb) in ra.scores.iter().zip(&rb.scores) {
            assert_eq!(sa.score.to_bits(), sb.score.to_bits());
        }
    }
}
