use std::time::Duration;

use serde::Deserialize;

use crate::collect::SourceError;

pub const DEFAULT_BASE_URL: &str = "https://api.fda.gov";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// openFDA serves at most 1000 results per page; one page is all the
/// counting heuristic reads, and the override policy handles the cap.
pub const DEFAULT_PAGE_LIMIT: u32 = 1000;

#[derive(Debug, Clone)]
pub struct OpenFdaConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub page_limit: u32,
}

impl Default for OpenFdaConfig {
    fn default() -> Self {
        OpenFdaConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            page_limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

/// Blocking openFDA client.
///
/// Count queries never fail the run: any transport, API, or decode error
/// degrades to a count of 0 with a warning, and the caller scores the
/// company with the data it has.
pub struct OpenFdaClient {
    config: OpenFdaConfig,
    client: reqwest::blocking::Client,
}

impl OpenFdaClient {
    pub fn new(config: OpenFdaConfig) -> Result<Self, SourceError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(OpenFdaClient { config, client })
    }

    /// Device recalls filed against a manufacturer.
    pub fn device_recalls(&self, firm: &str) -> u64 {
        self.count_results("/device/recall.json", &search_term("recalling_firm", firm))
    }

    /// 510(k) clearances granted to an applicant, used as the innovation proxy.
    pub fn device_clearances(&self, applicant: &str) -> u64 {
        self.count_results("/device/510k.json", &search_term("applicant", applicant))
    }

    /// Adverse events for a drug product where the report marks a death.
    pub fn drug_event_deaths(&self, product: &str) -> u64 {
        let search = search_term("patient.drug.medicinalproduct", product);
        match self.fetch::<FaersResponse>("/drug/event.json", &search) {
            Ok(body) => count_deaths(&body.results.unwrap_or_default()),
            Err(err) => {
                tracing::warn!(
                    "openFDA query for {} failed; treating the count as 0: {}",
                    product,
                    err
                );
                0
            }
        }
    }

    fn count_results(&self, endpoint: &str, search: &str) -> u64 {
        match self.fetch::<ResultsEnvelope>(endpoint, search) {
            Ok(body) => body.results.map(|rows| rows.len() as u64).unwrap_or(0),
            Err(err) => {
                tracing::warn!(
                    "openFDA query {} failed for {}; treating the count as 0: {}",
                    endpoint,
                    search,
                    err
                );
                0
            }
        }
    }

    fn fetch<T: serde::de::DeserializeOwned>(
        &self,
        endpoint: &str,
        search: &str,
    ) -> Result<T, SourceError> {
        let url = format!("{}{}", self.config.base_url.trim_end_matches('/'), endpoint);
        let limit = self.config.page_limit.to_string();
        let response = self
            .client
            .get(url)
            .query(&[("search", search), ("limit", limit.as_str())])
            .send()?;
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().unwrap_or_default();
            return Err(SourceError::Api { status, body });
        }
        Ok(response.json::<T>()?)
    }
}

/// Phrase-quoted search term; company and product names contain spaces
/// the openFDA query syntax would otherwise split on.
pub(crate) fn search_term(field: &str, value: &str) -> String {
    format!("{}:\"{}\"", field, value)
}

#[derive(Debug, Deserialize)]
struct ResultsEnvelope {
    results: Option<Vec<serde_json::Value>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct FaersResponse {
    pub(crate) results: Option<Vec<FaersEvent>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct FaersEvent {
    pub(crate) seriousnessdeath: Option<String>,
}

/// FAERS marks a death with the literal string "1".
pub(crate) fn count_deaths(events: &[FaersEvent]) -> u64 {
    events
        .iter()
        .filter(|event| event.seriousnessdeath.as_deref() == Some("1"))
        .count() as u64
}

#[cfg(test)]
#[path = "../../tests/src_inline/collect/openfda.rs"]
mod tests;
