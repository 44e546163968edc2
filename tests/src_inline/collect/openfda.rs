use super::*;

#[test]
fn test_search_terms_are_phrase_quoted() {
    assert_eq!(
        search_term("recalling_firm", "GE Healthcare"),
        "recalling_firm:\"GE Healthcare\""
    );
    assert_eq!(
        search_term("patient.drug.medicinalproduct", "Xarelto"),
        "patient.drug.medicinalproduct:\"Xarelto\""
    );
}

#[test]
fn test_count_deaths_only_counts_the_death_marker() {
    let events = vec![
        FaersEvent {
            seriousnessdeath: Some("1".to_string()),
        },
        FaersEvent {
            seriousnessdeath: Some("2".to_string()),
        },
        FaersEvent {
            seriousnessdeath: None,
        },
        FaersEvent {
            seriousnessdeath: Some("1".to_string()),
        },
    ];
    assert_eq!(count_deaths(&events), 2);
    assert_eq!(count_deaths(&[]), 0);
}

#[test]
fn test_faers_response_decodes_and_counts() {
    let body = r#"{
        "meta": {"results": {"skip": 0, "limit": 1000, "total": 3}},
        "results": [
            {"seriousnessdeath": "1", "receiptdate": "20240105"},
            {"seriousness": "1"},
            {"seriousnessdeath": "1"}
        ]
    }"#;
    let response: FaersResponse = serde_json::from_str(body).unwrap();
    assert_eq!(count_deaths(&response.results.unwrap_or_default()), 2);
}

#[test]
fn test_results_envelope_tolerates_missing_results() {
    let envelope: ResultsEnvelope =
        serde_json::from_str(r#"{"error": {"code": "NOT_FOUND"}}"#).unwrap();
    assert!(envelope.results.is_none());

    let envelope: ResultsEnvelope =
        serde_json::from_str(r#"{"results": [{"k_number": "K123"}, {"k_number": "K456"}]}"#)
            .unwrap();
    assert_eq!(envelope.results.map(|rows| rows.len()), Some(2));
}

#[test]
fn test_default_config() {
    let config = OpenFdaConfig::default();
    assert_eq!(config.base_url, DEFAULT_BASE_URL);
    assert_eq!(config.timeout, std::time::Duration::from_secs(30));
    assert_eq!(config.page_limit, 1000);
}
