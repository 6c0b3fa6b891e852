//! Memo records and the snapshot report that wraps them.

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// One memo link found on the listing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoRecord {
    /// Visible link text.
    pub title: String,
    /// Absolute link target.
    pub url: String,
    /// When the record was built.
    #[serde(with = "iso_micros")]
    pub found_date: NaiveDateTime,
}

impl MemoRecord {
    /// Build a record stamped with the current local time.
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            found_date: now(),
        }
    }
}

/// The full contents of one snapshot file.
///
/// Field order here is the field order on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotReport {
    #[serde(with = "iso_micros")]
    pub last_updated: NaiveDateTime,
    pub memo_count: usize,
    pub memos: Vec<MemoRecord>,
}

impl SnapshotReport {
    /// Sort `records` by title and wrap them with a count and a fresh timestamp.
    ///
    /// The sort is stable and compares titles ordinally, so duplicate titles
    /// keep their document order.
    pub fn from_records(mut records: Vec<MemoRecord>) -> Self {
        records.sort_by(|a, b| a.title.cmp(&b.title));
        Self {
            last_updated: now(),
            memo_count: records.len(),
            memos: records,
        }
    }
}

/// Current local wall-clock time, as the snapshot records it.
pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// `YYYY-MM-DDTHH:MM:SS.ffffff`, no offset.
pub mod iso_micros {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

    pub fn serialize<S>(dt: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&dt.format(FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M:%S%.f")
            .map_err(serde::de::Error::custom)
    }
}
