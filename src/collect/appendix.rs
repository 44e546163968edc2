//! Frozen cohort data for offline runs.
//!
//! Counts were captured from openFDA queries; values that had hit the
//! 1000-row page cap are already replaced by their best-estimate
//! overrides. Expert factors are 1..=5 panel judgements and have no
//! API source, so live runs reuse them too.

use crate::collect::SegmentData;
use crate::model::entity::{EntityRecord, Segment};
use crate::model::experts::ExpertScoreTable;
use crate::scorecards::defs::{
    FACTOR_ADHERENCE, FACTOR_BRAND_TRUST, FACTOR_CLINICAL_EVIDENCE, FACTOR_PRICE,
    FACTOR_PRODUCT_QUALITY, FACTOR_SERVICE, METRIC_FAERS_DEATHS, METRIC_INNOVATION,
    METRIC_RECALLS,
};

pub(crate) struct DeviceMaker {
    pub name: &'static str,
    pub recalls: f64,
    pub innovation: f64,
    pub product_quality: u8,
    pub price: u8,
    pub service: u8,
}

pub(crate) struct DrugMaker {
    pub name: &'static str,
    /// Flagship product queried in FAERS.
    pub product: &'static str,
    pub faers_deaths: f64,
    pub clinical_evidence: u8,
    pub price: u8,
    pub adherence: u8,
    pub brand_trust: u8,
}

pub(crate) const DEVICE_MAKERS: &[DeviceMaker] = &[
    DeviceMaker {
        name: "Bayer",
        recalls: 36.0,
        innovation: 201.0,
        product_quality: 4,
        price: 3,
        service: 4,
    },
    DeviceMaker {
        name: "GE Healthcare",
        recalls: 150.0,
        innovation: 800.0,
        product_quality: 5,
        price: 3,
        service: 3,
    },
    DeviceMaker {
        name: "Siemens",
        recalls: 120.0,
        innovation: 700.0,
        product_quality: 5,
        price: 3,
        service: 3,
    },
    DeviceMaker {
        name: "Philips",
        recalls: 130.0,
        innovation: 964.0,
        product_quality: 4,
        price: 3,
        service: 5,
    },
    DeviceMaker {
        name: "Canon",
        recalls: 46.0,
        innovation: 199.0,
        product_quality: 3,
        price: 4,
        service: 3,
    },
    DeviceMaker {
        name: "ACIST",
        recalls: 9.0,
        innovation: 21.0,
        product_quality: 2,
        price: 4,
        service: 2,
    },
];

pub(crate) const DRUG_MAKERS: &[DrugMaker] = &[
    DrugMaker {
        name: "Bayer",
        product: "Xarelto",
        faers_deaths: 120.0,
        clinical_evidence: 4,
        price: 3,
        adherence: 4,
        brand_trust: 4,
    },
    DrugMaker {
        name: "Johnson & Johnson",
        product: "Stelara",
        faers_deaths: 41.0,
        clinical_evidence: 5,
        price: 3,
        adherence: 4,
        brand_trust: 5,
    },
    DrugMaker {
        name: "Sanofi",
        product: "Dupixent",
        faers_deaths: 4.0,
        clinical_evidence: 4,
        price: 4,
        adherence: 3,
        brand_trust: 4,
    },
    DrugMaker {
        name: "Novartis",
        product: "Entresto",
        faers_deaths: 51.0,
        clinical_evidence: 5,
        price: 3,
        adherence: 3,
        brand_trust: 4,
    },
    DrugMaker {
        name: "GSK",
        product: "Trelegy",
        faers_deaths: 59.0,
        clinical_evidence: 4,
        price: 3,
        adherence: 3,
        brand_trust: 3,
    },
    DrugMaker {
        name: "Abbott",
        product: "Synthroid",
        faers_deaths: 35.0,
        clinical_evidence: 4,
        price: 4,
        adherence: 3,
        brand_trust: 3,
    },
];

/// Frozen cohort plus expert factors for one segment.
pub fn appendix(segment: Segment) -> SegmentData {
    let cohort = match segment {
        Segment::Radiology => DEVICE_MAKERS
            .iter()
            .map(|maker| {
                EntityRecord::new(maker.name)
                    .with_metric(METRIC_RECALLS, maker.recalls)
                    .with_metric(METRIC_INNOVATION, maker.innovation)
            })
            .collect(),
        Segment::Pharma => DRUG_MAKERS
            .iter()
            .map(|maker| {
                EntityRecord::new(maker.name).with_metric(METRIC_FAERS_DEATHS, maker.faers_deaths)
            })
            .collect(),
    };
    SegmentData {
        segment,
        cohort,
        experts: experts(segment),
    }
}

/// Expert factor table for one segment.
pub fn experts(segment: Segment) -> ExpertScoreTable {
    let mut table = ExpertScoreTable::new();
    match segment {
        Segment::Radiology => {
            for maker in DEVICE_MAKERS {
                table.set(maker.name, FACTOR_PRODUCT_QUALITY, maker.product_quality);
                table.set(maker.name, FACTOR_PRICE, maker.price);
                table.set(maker.name, FACTOR_SERVICE, maker.service);
            }
        }
        Segment::Pharma => {
            for maker in DRUG_MAKERS {
                table.set(maker.name, FACTOR_CLINICAL_EVIDENCE, maker.clinical_evidence);
                table.set(maker.name, FACTOR_PRICE, maker.price);
                table.set(maker.name, FACTOR_ADHERENCE, maker.adherence);
                table.set(maker.name, FACTOR_BRAND_TRUST, maker.brand_trust);
            }
        }
    }
    table
}
