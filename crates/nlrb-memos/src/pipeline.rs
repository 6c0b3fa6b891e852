// Copyright 2026 NLRB Memos Contributors
// SPDX-License-Identifier: Apache-2.0

//! The scrape run: fetch, extract, sort, write.
//!
//! [`scrape`] produces the report without touching the disk, so a failed
//! fetch can never clobber the previous snapshot. [`run`] adds the write.

use tracing::info;

use crate::config::ScrapeConfig;
use crate::error::ScrapeResult;
use crate::extract::extract_memos;
use crate::fetch::PageFetcher;
use crate::output::Console;
use crate::report::SnapshotReport;
use crate::snapshot;

/// Fetch the listing and build a sorted report.
pub async fn scrape(config: &ScrapeConfig, console: &Console) -> ScrapeResult<SnapshotReport> {
    console.status(format!("Fetching {}", config.url));
    let fetcher = PageFetcher::new(config.timeout)?;
    let page = fetcher.fetch(&config.url).await?;
    info!(url = %page.final_url, bytes = page.body.len(), "page fetched");

    let memos = extract_memos(&page.body, &config.origin);
    let report = SnapshotReport::from_records(memos);

    console.status(format!("Found {} memos", report.memo_count));
    Ok(report)
}

/// Scrape and persist the snapshot to `config.output`.
pub async fn run(config: &ScrapeConfig, console: &Console) -> ScrapeResult<SnapshotReport> {
    let report = scrape(config, console).await?;
    snapshot::write(&config.output, &report)?;
    info!(path = %config.output.display(), memos = report.memo_count, "snapshot saved");

    console.status(format!(
        "Saved {} memos to {}",
        report.memo_count,
        config.output.display()
    ));
    Ok(report)
}
