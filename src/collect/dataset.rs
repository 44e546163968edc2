use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::collect::{SegmentData, SourceError};
use crate::model::entity::{EntityRecord, Segment};
use crate::model::experts::ExpertScoreTable;

#[derive(Debug, Deserialize)]
struct DatasetFile {
    segment: Segment,
    companies: Vec<DatasetCompany>,
}

#[derive(Debug, Deserialize)]
struct DatasetCompany {
    name: String,
    #[serde(default)]
    metrics: BTreeMap<String, f64>,
    #[serde(default)]
    expert: BTreeMap<String, u8>,
}

/// Loads a cohort from a user-supplied JSON dataset:
///
/// ```json
/// {
///   "segment": "radiology",
///   "companies": [
///     {"name": "Acme", "metrics": {"recalls": 12, "innovation": 40},
///      "expert": {"product_quality": 4, "price": 3, "service": 5}}
///   ]
/// }
/// ```
///
/// Company order in the file is preserved into the cohort. Missing
/// metrics or expert factors are not checked here; composition reports
/// them against the dimensions the selected scorecard actually needs.
pub fn load_dataset(path: &Path) -> Result<SegmentData, SourceError> {
    let text = fs::read_to_string(path)?;
    parse_dataset(&text)
}

pub(crate) fn parse_dataset(text: &str) -> Result<SegmentData, SourceError> {
    let file: DatasetFile = serde_json::from_str(text)?;
    if file.companies.is_empty() {
        return Err(SourceError::InvalidInput(
            "dataset lists no companies".to_string(),
        ));
    }
    let mut seen = BTreeSet::new();
    let mut cohort = Vec::with_capacity(file.companies.len());
    let mut experts = ExpertScoreTable::new();
    for company in file.companies {
        if !seen.insert(company.name.clone()) {
            return Err(SourceError::InvalidInput(format!(
                "duplicate company in dataset: {}",
                company.name
            )));
        }
        for (factor, score) in &company.expert {
            experts.set(&company.name, factor, *score);
        }
        cohort.push(EntityRecord {
            name: company.name,
            metrics: company.metrics,
        });
    }
    Ok(SegmentData {
        segment: file.segment,
        cohort,
        experts,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/collect/dataset.rs"]
mod tests;
