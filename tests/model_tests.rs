use chrono::{DateTime, TimeZone, Utc};
use patch_collector::scc::{parse_issued_at, PatchDetail, SearchResponse, Severity};

#[test]
fn test_search_response_deserialization() {
    let json = r#"{
        "meta": { "total_pages": 3 },
        "hits": [
            {
                "id": 12345,
                "title": "Security update for openssl",
                "issued_at": "2025-09-10T08:30:00Z",
                "product_friendly_names": ["SUSE Linux Enterprise Server LTSS 12 SP5"],
                "product_architectures": ["x86_64"],
                "special_product_names": ["should be ignored"]
            }
        ]
    }"#;

    let response: SearchResponse = serde_json::from_str(json).unwrap();

    assert_eq!(response.meta.total_pages, 3);
    assert_eq!(response.hits.len(), 1);

    let hit = &response.hits[0];
    assert_eq!(hit.id, 12345);
    assert_eq!(hit.title, "Security update for openssl");
    assert_eq!(hit.issued_at, "2025-09-10T08:30:00Z");
    assert_eq!(
        hit.product_friendly_names,
        vec!["SUSE Linux Enterprise Server LTSS 12 SP5"]
    );
    assert_eq!(hit.product_architectures, vec!["x86_64"]);
    // Severity is stamped by the fetcher, never parsed from the response
    assert_eq!(hit.severity, None);
}

#[test]
fn test_search_response_defaults() {
    let response: SearchResponse = serde_json::from_str("{}").unwrap();

    assert_eq!(response.meta.total_pages, 0);
    assert!(response.hits.is_empty());
}

#[test]
fn test_patch_detail_string_ibs_id() {
    let detail: PatchDetail = serde_json::from_str(
        r#"{ "ibs_id": "SUSE-SU-2025:1234-1", "description": "Fixes CVE-2025-0001" }"#,
    )
    .unwrap();

    assert_eq!(detail.ibs_id, "SUSE-SU-2025:1234-1");
    assert_eq!(detail.description, "Fixes CVE-2025-0001");
}

#[test]
fn test_patch_detail_numeric_ibs_id() {
    let detail: PatchDetail =
        serde_json::from_str(r#"{ "ibs_id": 98765, "description": "text" }"#).unwrap();

    assert_eq!(detail.ibs_id, "98765");
}

#[test]
fn test_patch_detail_null_and_missing_fields() {
    let detail: PatchDetail =
        serde_json::from_str(r#"{ "ibs_id": null, "description": null }"#).unwrap();
    assert_eq!(detail.ibs_id, "");
    assert_eq!(detail.description, "");

    let detail: PatchDetail = serde_json::from_str("{}").unwrap();
    assert_eq!(detail.ibs_id, "");
    assert_eq!(detail.description, "");
}

#[test]
fn test_parse_issued_at_utc_suffix() {
    let dt = parse_issued_at("2025-09-10T08:30:00Z");
    assert_eq!(dt, Utc.with_ymd_and_hms(2025, 9, 10, 8, 30, 0).unwrap());
}

#[test]
fn test_parse_issued_at_offset_converted_to_utc() {
    let dt = parse_issued_at("2025-09-10T10:30:00+02:00");
    assert_eq!(dt, Utc.with_ymd_and_hms(2025, 9, 10, 8, 30, 0).unwrap());
}

#[test]
fn test_parse_issued_at_naive_taken_as_utc() {
    let dt = parse_issued_at("2025-09-10T08:30:00");
    assert_eq!(dt, Utc.with_ymd_and_hms(2025, 9, 10, 8, 30, 0).unwrap());
}

#[test]
fn test_parse_issued_at_empty_and_garbage() {
    assert_eq!(parse_issued_at(""), DateTime::<Utc>::MIN_UTC);
    assert_eq!(parse_issued_at("not a date"), DateTime::<Utc>::MIN_UTC);
}

#[test]
fn test_severity_strings() {
    assert_eq!(Severity::Important.as_str(), "important");
    assert_eq!(Severity::Critical.as_str(), "critical");
    assert_eq!(Severity::Important.to_string(), "important");
    assert_eq!(
        Severity::REQUESTED,
        [Severity::Important, Severity::Critical]
    );
}
