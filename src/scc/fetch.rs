use indicatif::{ProgressBar, ProgressStyle};
use reqwest::blocking::Client;
use std::time::Duration;
use tracing::warn;

use crate::scc::model::{PatchDetail, PatchHit, SearchResponse, Severity};
use crate::scc::query::SearchQuery;

const SEARCH_URL: &str = "https://scc.suse.com/api/frontend/patch_finder/search/perform.json";
const DETAIL_URL: &str = "https://scc.suse.com/api/frontend/patch_finder/patches";

pub struct PatchFetcher {
    client: Client,
    search_url: String,
    detail_url: String,
}

impl PatchFetcher {
    pub fn new() -> Self {
        Self::with_urls(SEARCH_URL, DETAIL_URL)
    }

    /// Build a fetcher against explicit endpoints.
    pub fn with_urls(search_url: &str, detail_url: &str) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("patch-collector/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            search_url: search_url.to_string(),
            detail_url: detail_url.to_string(),
        }
    }

    /// Fetch one page of search results for a severity.
    pub fn search_page(
        &self,
        query: &SearchQuery,
        severity: Severity,
        page: u32,
    ) -> crate::Result<SearchResponse> {
        let response = self
            .client
            .get(&self.search_url)
            .query(&query.params(severity, page))
            .send()?
            .error_for_status()?;

        Ok(response.json::<SearchResponse>()?)
    }

    /// Fetch every page of search results for a severity, stamping the
    /// severity onto each hit (the API does not include it in responses).
    pub fn search_all_pages(
        &self,
        query: &SearchQuery,
        severity: Severity,
    ) -> crate::Result<Vec<PatchHit>> {
        let first = self.search_page(query, severity, 1)?;
        let total_pages = first.meta.total_pages.max(1);

        let mut hits = stamp_severity(first.hits, severity);
        for page in 2..=total_pages {
            let response = self.search_page(query, severity, page)?;
            hits.extend(stamp_severity(response.hits, severity));
        }

        Ok(hits)
    }

    /// Fetch the extended fields for a single patch.
    pub fn fetch_detail(&self, patch_id: u64) -> crate::Result<PatchDetail> {
        let url = format!("{}/{}", self.detail_url, patch_id);

        let response = self.client.get(&url).send()?;

        if response.status().is_success() {
            Ok(response.json::<PatchDetail>()?)
        } else {
            Err(crate::error::PatchCollectorError::DetailNotFound(patch_id))
        }
    }

    /// Look up detail fields for each hit, one request per record. A failed
    /// lookup logs a warning and yields empty detail fields; it never aborts
    /// the run.
    pub fn enrich(
        &self,
        hits: Vec<PatchHit>,
        show_progress: bool,
    ) -> Vec<(PatchHit, PatchDetail)> {
        // Create progress bar if requested
        let progress = if show_progress {
            let pb = ProgressBar::new(hits.len() as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                    .unwrap()
                    .progress_chars("#>-"),
            );
            pb.set_message("Fetching patch details");
            Some(pb)
        } else {
            None
        };

        let mut enriched = Vec::with_capacity(hits.len());

        for hit in hits {
            let detail = match self.fetch_detail(hit.id) {
                Ok(detail) => detail,
                Err(e) => {
                    warn!("Failed to fetch detail for patch {}: {}", hit.id, e);
                    PatchDetail::default()
                }
            };
            enriched.push((hit, detail));

            if let Some(ref pb) = progress {
                pb.inc(1);
            }
        }

        if let Some(pb) = progress {
            pb.finish_with_message("Patch details complete");
        }

        enriched
    }
}

impl Default for PatchFetcher {
    fn default() -> Self {
        Self::new()
    }
}

fn stamp_severity(mut hits: Vec<PatchHit>, severity: Severity) -> Vec<PatchHit> {
    for hit in &mut hits {
        hit.severity = Some(severity);
    }
    hits
}
