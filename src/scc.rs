pub mod fetch;
pub mod model;
pub mod query;

pub use fetch::PatchFetcher;
pub use model::{parse_issued_at, PatchDetail, PatchHit, SearchResponse, Severity};
pub use query::SearchQuery;
