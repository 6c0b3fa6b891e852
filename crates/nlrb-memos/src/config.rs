//! Run configuration: what to fetch, where to write, how long to wait.

use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use crate::error::{ScrapeError, ScrapeResult};

/// The NLRB General Counsel memo listing.
pub const DEFAULT_URL: &str = "https://www.nlrb.gov/guidance/memos-research/general-counsel-memos";

/// Snapshot file, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "nlrb_memos.json";

/// Total request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Everything a single scrape run needs.
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    /// Page to fetch.
    pub url: String,
    /// `scheme://host[:port]` prefixed onto site-relative hrefs.
    pub origin: String,
    /// Snapshot destination, overwritten on success.
    pub output: PathBuf,
    /// Bound on the whole GET, connect through body.
    pub timeout: Duration,
}

impl ScrapeConfig {
    /// Build a config, deriving the origin from `url`.
    pub fn new(url: &str, output: impl Into<PathBuf>, timeout: Duration) -> ScrapeResult<Self> {
        let origin = origin_of(url)?;
        Ok(Self {
            url: url.to_string(),
            origin,
            output: output.into(),
            timeout,
        })
    }
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            origin: "https://www.nlrb.gov".to_string(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

fn origin_of(raw: &str) -> ScrapeResult<String> {
    let parsed = Url::parse(raw).map_err(|source| ScrapeError::InvalidUrl {
        url: raw.to_string(),
        source,
    })?;
    Ok(parsed.origin().ascii_serialization())
}
