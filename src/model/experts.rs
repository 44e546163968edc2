use std::collections::BTreeMap;

/// Expert judgement scores on the 1..=5 scale, keyed by company then factor.
///
/// Values are stored as entered; range checking happens during scorecard
/// composition so that a bad entry names the company and factor it came from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpertScoreTable {
    by_company: BTreeMap<String, BTreeMap<String, u8>>,
}

impl ExpertScoreTable {
    pub fn new() -> Self {
        ExpertScoreTable::default()
    }

    pub fn set(&mut self, company: &str, factor: &str, score: u8) {
        self.by_company
            .entry(company.to_string())
            .or_default()
            .insert(factor.to_string(), score);
    }

    pub fn get(&self, company: &str, factor: &str) -> Option<u8> {
        self.by_company
            .get(company)
            .and_then(|factors| factors.get(factor))
            .copied()
    }

    pub fn is_empty(&self) -> bool {
        self.by_company.is_empty()
    }
}
