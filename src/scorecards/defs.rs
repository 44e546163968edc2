use crate::model::entity::Segment;
use crate::scorecards::{DimensionDef, DimensionKind, ScorecardDef};

/// Raw metric column names, shared with the collectors.
pub const METRIC_RECALLS: &str = "recalls";
pub const METRIC_INNOVATION: &str = "innovation";
pub const METRIC_FAERS_DEATHS: &str = "faers_deaths";

/// Expert factor ids double as dimension ids in the factor scorecards.
pub const FACTOR_PRODUCT_QUALITY: &str = "product_quality";
pub const FACTOR_PRICE: &str = "price";
pub const FACTOR_SERVICE: &str = "service";
pub const FACTOR_CLINICAL_EVIDENCE: &str = "clinical_evidence";
pub const FACTOR_ADHERENCE: &str = "adherence";
pub const FACTOR_BRAND_TRUST: &str = "brand_trust";

const RADIOLOGY_RAW_DIMS: &[DimensionDef] = &[
    DimensionDef {
        id: "recall_score",
        label: "Recall score",
        weight: 0.50,
        kind: DimensionKind::Metric {
            metric: METRIC_RECALLS,
            invert: true,
        },
    },
    DimensionDef {
        id: "innovation_score",
        label: "Innovation score",
        weight: 0.50,
        kind: DimensionKind::Metric {
            metric: METRIC_INNOVATION,
            invert: false,
        },
    },
];

const RADIOLOGY_FACTOR_DIMS: &[DimensionDef] = &[
    DimensionDef {
        id: "safety_score",
        label: "Safety",
        weight: 0.30,
        kind: DimensionKind::Metric {
            metric: METRIC_RECALLS,
            invert: true,
        },
    },
    DimensionDef {
        id: "innovation_score",
        label: "Innovation",
        weight: 0.25,
        kind: DimensionKind::Metric {
            metric: METRIC_INNOVATION,
            invert: false,
        },
    },
    DimensionDef {
        id: FACTOR_PRODUCT_QUALITY,
        label: "Product quality",
        weight: 0.20,
        kind: DimensionKind::Expert,
    },
    DimensionDef {
        id: FACTOR_PRICE,
        label: "Price",
        weight: 0.10,
        kind: DimensionKind::Expert,
    },
    DimensionDef {
        id: FACTOR_SERVICE,
        label: "Service",
        weight: 0.15,
        kind: DimensionKind::Expert,
    },
];

const PHARMA_RAW_DIMS: &[DimensionDef] = &[DimensionDef {
    id: "death_score",
    label: "Death score",
    weight: 1.00,
    kind: DimensionKind::Metric {
        metric: METRIC_FAERS_DEATHS,
        invert: true,
    },
}];

const PHARMA_FACTOR_DIMS: &[DimensionDef] = &[
    DimensionDef {
        id: "safety_score",
        label: "Safety",
        weight: 0.35,
        kind: DimensionKind::Metric {
            metric: METRIC_FAERS_DEATHS,
            invert: true,
        },
    },
    DimensionDef {
        id: FACTOR_CLINICAL_EVIDENCE,
        label: "Clinical evidence",
        weight: 0.25,
        kind: DimensionKind::Expert,
    },
    DimensionDef {
        id: FACTOR_PRICE,
        label: "Price",
        weight: 0.10,
        kind: DimensionKind::Expert,
    },
    DimensionDef {
        id: FACTOR_ADHERENCE,
        label: "Adherence",
        weight: 0.15,
        kind: DimensionKind::Expert,
    },
    DimensionDef {
        id: FACTOR_BRAND_TRUST,
        label: "Brand trust",
        weight: 0.15,
        kind: DimensionKind::Expert,
    },
];

const BUILTIN_SCORECARDS: &[ScorecardDef] = &[
    ScorecardDef {
        id: "radiology_raw",
        title: "Radiology devices, raw safety signals",
        segment: Segment::Radiology,
        dimensions: RADIOLOGY_RAW_DIMS,
    },
    ScorecardDef {
        id: "radiology_factor",
        title: "Radiology devices, factor-weighted",
        segment: Segment::Radiology,
        dimensions: RADIOLOGY_FACTOR_DIMS,
    },
    ScorecardDef {
        id: "pharma_raw",
        title: "Pharma manufacturers, raw safety signals",
        segment: Segment::Pharma,
        dimensions: PHARMA_RAW_DIMS,
    },
    ScorecardDef {
        id: "pharma_factor",
        title: "Pharma manufacturers, factor-weighted",
        segment: Segment::Pharma,
        dimensions: PHARMA_FACTOR_DIMS,
    },
];

/// All built-in scorecards, two per segment, in a stable order.
pub fn builtin_scorecards() -> &'static [ScorecardDef] {
    BUILTIN_SCORECARDS
}
