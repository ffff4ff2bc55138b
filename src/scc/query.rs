use crate::scc::model::Severity;

/// Product filters shared by every search request of a run. Severity and page
/// number vary per request and are supplied when the query string is built.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    pub product_names: String,
    pub product_versions: String,
    pub product_architectures: String,
}

impl SearchQuery {
    pub fn new(
        product_names: impl Into<String>,
        product_versions: impl Into<String>,
        product_architectures: impl Into<String>,
    ) -> Self {
        Self {
            product_names: product_names.into(),
            product_versions: product_versions.into(),
            product_architectures: product_architectures.into(),
        }
    }

    /// Query parameters for one search request, in the shape the patch-finder
    /// endpoint expects. Pages are 1-based.
    pub fn params(&self, severity: Severity, page: u32) -> Vec<(&'static str, String)> {
        vec![
            ("product_architectures", self.product_architectures.clone()),
            ("product_names", self.product_names.clone()),
            ("product_versions", self.product_versions.clone()),
            ("severity", severity.as_str().to_string()),
            ("page", page.to_string()),
        ]
    }
}
