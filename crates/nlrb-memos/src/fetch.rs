//! Single-shot page fetch over reqwest.
//!
//! One GET per run, bounded by a total timeout. There is no retry and no
//! fallback: a transport error or a non-2xx status ends the run.

use std::time::Duration;

use tracing::debug;

use crate::error::{ScrapeError, ScrapeResult};

/// A successfully fetched page.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// URL after redirects.
    pub final_url: String,
    /// HTTP status code (always 2xx).
    pub status: u16,
    /// Response body as text.
    pub body: String,
}

/// HTTP client for the memo listing.
#[derive(Clone)]
pub struct PageFetcher {
    client: reqwest::Client,
}

impl PageFetcher {
    /// Create a fetcher whose requests give up after `timeout`.
    pub fn new(timeout: Duration) -> ScrapeResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(concat!("nlrb-memos/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ScrapeError::Client)?;

        Ok(Self { client })
    }

    /// Perform the GET and return the body of a 2xx response.
    pub async fn fetch(&self, url: &str) -> ScrapeResult<FetchedPage> {
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| ScrapeError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = resp.status();
        let final_url = resp.url().to_string();
        debug!(%url, %final_url, status = status.as_u16(), "response received");

        if !status.is_success() {
            return Err(ScrapeError::Status {
                url: final_url,
                status: status.as_u16(),
            });
        }

        let body = resp.text().await.map_err(|source| ScrapeError::Body {
            url: url.to_string(),
            source,
        })?;

        Ok(FetchedPage {
            final_url,
            status: status.as_u16(),
            body,
        })
    }
}
