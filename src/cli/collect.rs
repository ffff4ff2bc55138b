use camino::Utf8PathBuf;
use clap::Args;
use tracing::info;

use crate::report::{filter_since, parse_since, sort_newest_first, write_report, ReportRow};
use crate::scc::{PatchFetcher, SearchQuery, Severity};

#[derive(Args)]
pub struct CollectArgs {
    /// Product name filter (e.g. 'SUSE Linux Enterprise Server LTSS')
    #[arg(long, default_value = "SUSE Linux Enterprise Server LTSS")]
    product_names: String,
    /// Product version filter (e.g. '12 SP5')
    #[arg(long, default_value = "12 SP5")]
    product_versions: String,
    /// Product architecture filter
    #[arg(long, default_value = "x86_64")]
    product_architectures: String,
    /// Keep only patches issued at or after this time.
    /// Accepts YYYY-MM-DD, YYYY/MM/DD or ISO 8601 (e.g. 2025-09-10T12:00:00Z)
    #[arg(long)]
    since: Option<String>,
    /// Output XLSX file
    #[arg(short, long, default_value = "suse_patches.xlsx")]
    output: Utf8PathBuf,
    /// Suppress progress output
    #[arg(long)]
    quiet: bool,
}

pub fn collect_command(args: CollectArgs) -> crate::Result<()> {
    let since = args.since.as_deref().map(parse_since).transpose()?;
    if let Some(since) = since {
        info!("Filter: issued_at >= {} (UTC)", since.to_rfc3339());
    }

    let query = SearchQuery::new(
        args.product_names,
        args.product_versions,
        args.product_architectures,
    );
    let fetcher = PatchFetcher::new();

    let mut hits = Vec::new();
    for severity in Severity::REQUESTED {
        let severity_hits = fetcher.search_all_pages(&query, severity)?;
        info!("[{}] received {} hits", severity, severity_hits.len());
        hits.extend(severity_hits);
    }

    sort_newest_first(&mut hits);
    info!("{} hits after merging severities", hits.len());

    // Filter before hitting the detail endpoint, one request per record
    if let Some(since) = since {
        let before = hits.len();
        filter_since(&mut hits, since);
        info!("{} hits after --since filter (was {})", hits.len(), before);
    }

    let enriched = fetcher.enrich(hits, !args.quiet);

    let rows: Vec<ReportRow> = enriched
        .iter()
        .map(|(hit, detail)| ReportRow::new(hit, detail))
        .collect();

    write_report(&rows, &args.output)?;
    info!("Wrote {} rows to {}", rows.len(), args.output);

    Ok(())
}
