//! Error type shared by every stage of the scrape.
//!
//! A run has exactly one failure outcome: the page could not be fetched or
//! parsed, or the snapshot could not be written. The variants only refine the
//! message the binary prints before exiting non-zero.

/// Errors that abort a scrape run.
#[derive(thiserror::Error, Debug)]
pub enum ScrapeError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("invalid target URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{status} for url: {url}")]
    Status { url: String, status: u16 },

    #[error("failed to read response body from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to serialize snapshot: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl ScrapeError {
    /// Whether the failure happened before anything touched the disk.
    pub fn is_fetch_failure(&self) -> bool {
        !matches!(self, ScrapeError::Serialize(_) | ScrapeError::Write { .. })
    }
}

/// Convenience result type.
pub type ScrapeResult<T> = Result<T, ScrapeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message_names_url() {
        let err = ScrapeError::Status {
            url: "https://www.nlrb.gov/x".to_string(),
            status: 503,
        };
        assert_eq!(err.to_string(), "503 for url: https://www.nlrb.gov/x");
        assert!(err.is_fetch_failure());
    }

    #[test]
    fn test_write_failure_is_not_fetch_failure() {
        let err = ScrapeError::Write {
            path: "nlrb_memos.json".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(!err.is_fetch_failure());
        assert!(err.to_string().starts_with("failed to write nlrb_memos.json"));
    }
}
