use crate::scc::model::{PatchDetail, PatchHit};

/// Spreadsheet column order. "Patch Detail" carries the internal tracking id
/// (`ibs_id`) and "CVE or Issues Fixed" the free-text description, both from
/// the detail endpoint.
pub const COLUMNS: [&str; 7] = [
    "Severity",
    "Patch name",
    "Patch Detail",
    "Product(s)",
    "Arch",
    "Release",
    "CVE or Issues Fixed",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub severity: String,
    pub patch_name: String,
    pub patch_detail: String,
    pub products: String,
    pub arch: String,
    pub release: String,
    pub issues_fixed: String,
}

impl ReportRow {
    pub fn new(hit: &PatchHit, detail: &PatchDetail) -> Self {
        Self {
            severity: hit.severity.map(|s| s.as_str().to_string()).unwrap_or_default(),
            patch_name: hit.title.clone(),
            patch_detail: detail.ibs_id.clone(),
            products: hit.product_friendly_names.join("; "),
            arch: hit.product_architectures.join("; "),
            release: format_release_ymd(&hit.issued_at),
            issues_fixed: detail.description.clone(),
        }
    }
}

/// Format the date part of an ISO 8601 timestamp as `YYYY/MM/DD`. Only the
/// leading date characters are used, so no timezone conversion can shift the
/// displayed day. Values too short to hold a date render empty.
pub fn format_release_ymd(issued_at: &str) -> String {
    match issued_at.get(..10) {
        Some(date) => date.replace('-', "/"),
        None => String::new(),
    }
}
