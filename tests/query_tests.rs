use patch_collector::scc::{SearchQuery, Severity};

#[test]
fn test_query_params_shape() {
    let query = SearchQuery::new(
        "SUSE Linux Enterprise Server LTSS",
        "12 SP5",
        "x86_64",
    );

    let params = query.params(Severity::Important, 1);

    assert_eq!(
        params,
        vec![
            ("product_architectures", "x86_64".to_string()),
            ("product_names", "SUSE Linux Enterprise Server LTSS".to_string()),
            ("product_versions", "12 SP5".to_string()),
            ("severity", "important".to_string()),
            ("page", "1".to_string()),
        ]
    );
}

#[test]
fn test_query_params_vary_by_severity_and_page() {
    let query = SearchQuery::new("SLES", "15 SP6", "aarch64");

    let params = query.params(Severity::Critical, 7);

    assert!(params.contains(&("severity", "critical".to_string())));
    assert!(params.contains(&("page", "7".to_string())));
}
