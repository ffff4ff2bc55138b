use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Vendor-assigned urgency level. Only the two levels the report cares about
/// are ever requested from the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Important,
    Critical,
}

impl Severity {
    /// The severities collected on every run, in fetch order.
    pub const REQUESTED: [Severity; 2] = [Severity::Important, Severity::Critical];

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Important => "important",
            Severity::Critical => "critical",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One page of results from the patch-finder search endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub meta: SearchMeta,
    #[serde(default)]
    pub hits: Vec<PatchHit>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchMeta {
    #[serde(default)]
    pub total_pages: u32,
}

/// A single patch record as returned by the search endpoint. Extraction is
/// best-effort: unknown fields are dropped, missing ones default.
///
/// The API does not echo the severity a search was performed under, so the
/// fetcher stamps it onto every hit after deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatchHit {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub issued_at: String,
    #[serde(default)]
    pub product_friendly_names: Vec<String>,
    #[serde(default)]
    pub product_architectures: Vec<String>,
    #[serde(default)]
    pub severity: Option<Severity>,
}

impl PatchHit {
    /// The issue timestamp in UTC, used for sorting and `--since` filtering.
    pub fn issued_at_utc(&self) -> DateTime<Utc> {
        parse_issued_at(&self.issued_at)
    }
}

/// Extended fields from the per-patch detail endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PatchDetail {
    #[serde(default, deserialize_with = "de_string_or_number")]
    pub ibs_id: String,
    #[serde(default, deserialize_with = "de_nullable_string")]
    pub description: String,
}

/// Parse an ISO 8601 `issued_at` value into a UTC timestamp. A timestamp
/// without a zone is taken as UTC. Empty or unparseable values map to the
/// minimum UTC instant so they sort last and never pass a `--since` cutoff.
pub fn parse_issued_at(s: &str) -> DateTime<Utc> {
    if s.is_empty() {
        return DateTime::<Utc>::MIN_UTC;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return dt.with_timezone(&Utc);
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return naive.and_utc();
    }

    DateTime::<Utc>::MIN_UTC
}

// The API reports ibs_id sometimes as a string, sometimes as a number,
// sometimes as null. The spreadsheet wants a plain string either way.
fn de_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => s,
        Some(serde_json::Value::Number(n)) => n.to_string(),
        _ => String::new(),
    })
}

fn de_nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
