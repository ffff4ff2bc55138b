use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use std::cmp::Reverse;

use crate::error::PatchCollectorError;
use crate::scc::model::PatchHit;

/// Parse a user-supplied `--since` value into a UTC cutoff:
/// - `YYYY-MM-DD` or `YYYY/MM/DD` is taken as UTC midnight of that day
/// - full ISO 8601 (with `Z` or an offset) is converted to UTC
/// - an ISO date-time without a zone is taken as UTC
pub fn parse_since(s: &str) -> crate::Result<DateTime<Utc>> {
    let s = s.trim();

    if let Ok(date) = NaiveDate::parse_from_str(&s.replace('/', "-"), "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN).and_utc());
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(naive.and_utc());
    }

    Err(PatchCollectorError::InvalidSince(s.to_string()))
}

/// Sort hits by issue timestamp, newest first. Hits with a missing or
/// unparseable `issued_at` end up last.
pub fn sort_newest_first(hits: &mut [PatchHit]) {
    hits.sort_by_key(|hit| Reverse(hit.issued_at_utc()));
}

/// Keep only hits issued at or after the cutoff (UTC). A hit exactly at the
/// cutoff is kept.
pub fn filter_since(hits: &mut Vec<PatchHit>, since: DateTime<Utc>) {
    hits.retain(|hit| hit.issued_at_utc() >= since);
}
